// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::interfaces::MessageResolver;

use super::{
    enums::CallingCodeSource,
    errors::{ErrorKind, ValidationError},
    helper_constants::PLUS_SIGN,
};

/// Outcome of a single validation.
///
/// A valid result always carries the normalized number and never an
/// error; an invalid one carries the error and its localized message
/// and never a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    normalized_number: Option<String>,
    calling_code_source: Option<CallingCodeSource>,
    error: Option<ValidationError>,
    error_message: Option<String>,
}

impl ValidationResult {
    pub(super) fn valid(normalized_number: String, source: CallingCodeSource) -> Self {
        Self {
            normalized_number: Some(normalized_number),
            calling_code_source: Some(source),
            error: None,
            error_message: None,
        }
    }

    pub(super) fn invalid(error: ValidationError, messages: &dyn MessageResolver) -> Self {
        let params = error.message_params();
        let params = params.iter().map(|param| &**param).collect::<Vec<&str>>();
        let error_message = messages.resolve(error.kind(), &params);
        Self {
            normalized_number: None,
            calling_code_source: None,
            error: Some(error),
            error_message: Some(error_message),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(ValidationError::kind)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// `+`, calling code and national number digits, e.g. `+4312143512`.
    pub fn normalized_number(&self) -> Option<&str> {
        self.normalized_number.as_deref()
    }

    pub fn calling_code_source(&self) -> Option<CallingCodeSource> {
        self.calling_code_source
    }

    /// Returns `next` if this result is valid and `self` otherwise, so that
    /// checks of several fields report the first failure.
    pub fn and(self, next: ValidationResult) -> ValidationResult {
        if self.is_valid() { next } else { self }
    }

    pub fn into_result(self) -> Result<String, ValidationError> {
        match (self.normalized_number, self.error) {
            (_, Some(error)) => Err(error),
            (Some(normalized_number), None) => Ok(normalized_number),
            (None, None) => unreachable!("a valid result always has a normalized number"),
        }
    }
}

/// Builds the canonical form of a resolved number.
pub(super) fn build_normalized_number(calling_code: &str, national_number: &str) -> String {
    fast_cat::concat_str!(PLUS_SIGN, calling_code, national_number)
}

#[cfg(test)]
mod tests {
    use crate::{
        i18n::EnglishMessages,
        phonevalidator::{
            enums::CallingCodeSource,
            errors::{ErrorKind, ValidationError},
        },
    };

    use super::{build_normalized_number, ValidationResult};

    #[test]
    fn normalized_number() {
        assert_eq!(build_normalized_number("43", "03162144366"), "+4303162144366");
        assert_eq!(build_normalized_number("1", "8002530000"), "+18002530000");
    }

    #[test]
    fn valid_result() {
        let result = ValidationResult::valid("+18002530000".to_owned(), CallingCodeSource::FromDefaultRegion);
        assert!(result.is_valid());
        assert_eq!(result.error_kind(), None);
        assert_eq!(result.error_message(), None);
        assert_eq!(result.normalized_number(), Some("+18002530000"));
        assert_eq!(result.into_result(), Ok("+18002530000".to_owned()));
    }

    #[test]
    fn invalid_result() {
        let error = ValidationError::InsufficientDigits { input: "+15121".to_owned() };
        let result = ValidationResult::invalid(error.clone(), &EnglishMessages);
        assert!(!result.is_valid());
        assert_eq!(result.error_kind(), Some(ErrorKind::InsufficientDigits));
        assert_eq!(
            result.error_message(),
            Some("There are not enough digits in +15121 to be a valid phone number.")
        );
        assert_eq!(result.normalized_number(), None);
        assert_eq!(result.calling_code_source(), None);
        assert_eq!(result.into_result(), Err(error));
    }

    #[test]
    fn and_reports_first_failure() {
        let valid = || ValidationResult::valid("+4312143512".to_owned(), CallingCodeSource::FromNumberWithPlusSign);
        let empty = || ValidationResult::invalid(ValidationError::Empty, &EnglishMessages);
        let missing = || ValidationResult::invalid(ValidationError::MissingCountryCode, &EnglishMessages);

        assert_eq!(valid().and(empty()), empty());
        assert_eq!(empty().and(valid()), empty());
        assert_eq!(missing().and(empty()).error_kind(), Some(ErrorKind::MissingCountryCode));
        assert!(valid().and(valid()).is_valid());
    }
}
