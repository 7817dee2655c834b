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

use std::fmt;

use log::{debug, trace, warn};

use crate::{
    i18n::{EnglishMessages, RegionCode},
    interfaces::{MessageResolver, MetadataProvider},
    metadata::{MetadataError, RegionMetadata, COMPILED_METADATA},
};

use super::{
    calling_code_resolver::resolve_calling_code,
    errors::ValidationError,
    input_normalizer::{normalize_input, require_input},
    length_policy::LengthPolicy,
    validation_result::{build_normalized_number, ValidationResult},
    CallingCodeSource,
};

/// Validates and normalizes phone numbers typed by users of one region.
///
/// The pipeline runs in a fixed order and stops at the first failure:
/// empty input, invalid characters, missing region, calling code,
/// digit count bounds and finally the region specific length.
///
/// ```
/// use phonevalidator::PhoneNumberValidator;
///
/// let validator = PhoneNumberValidator::for_region_code("AT").unwrap();
/// let result = validator.check("(0316) 214 4366");
/// assert_eq!(result.normalized_number(), Some("+4303162144366"));
/// ```
pub struct PhoneNumberValidator {
    /// Metadata of the configured region. Without it every non-empty
    /// input fails with `MissingCountryCode`.
    region: Option<RegionMetadata>,
    length_policy: LengthPolicy,
    messages: Box<dyn MessageResolver>,
    /// Normalized number of the last successful [`Self::validate`] call.
    last_normalized: Option<String>,
}

impl PhoneNumberValidator {
    /// Creates a validator without a region.
    pub fn new() -> Self {
        Self {
            region: None,
            length_policy: LengthPolicy::default(),
            messages: Box::new(EnglishMessages),
            last_normalized: None,
        }
    }

    /// Creates a validator for `region_code`, looked up once in `provider`.
    pub fn for_region(
        region_code: &str,
        provider: &dyn MetadataProvider,
    ) -> Result<Self, MetadataError> {
        let region_code = RegionCode::normalize(region_code).inspect_err(|err| {
            warn!("Invalid region code provided: {}", err);
        })?;
        let Some(metadata) = provider.lookup(&region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return Err(MetadataError::UnknownRegion(region_code));
        };
        debug!(
            "Validator for {} uses calling code {} and required length {:?}",
            metadata.region_code(),
            metadata.calling_code(),
            metadata.required_length()
        );

        Ok(Self { region: Some(metadata), ..Self::new() })
    }

    /// Creates a validator for `region_code` using the compiled-in metadata.
    pub fn for_region_code(region_code: &str) -> Result<Self, MetadataError> {
        Self::for_region(region_code, &*COMPILED_METADATA)
    }

    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    pub fn with_messages(mut self, messages: impl MessageResolver + 'static) -> Self {
        self.messages = Box::new(messages);
        self
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region.as_ref().map(RegionMetadata::region_code)
    }

    /// Calling code of the configured region, e.g. `"43"` for AT.
    pub fn calling_code(&self) -> Option<&str> {
        self.region.as_ref().map(RegionMetadata::calling_code)
    }

    /// Exact national number length, if the configured region has one.
    pub fn required_length(&self) -> Option<usize> {
        self.region.as_ref().and_then(RegionMetadata::required_length)
    }

    pub fn length_policy(&self) -> &LengthPolicy {
        &self.length_policy
    }

    /// Normalized number of the last [`Self::validate`] call, `None` if
    /// that call failed or there was none.
    pub fn normalized_phone_number(&self) -> Option<&str> {
        self.last_normalized.as_deref()
    }

    /// Validates `input` without touching the validator.
    pub fn check<'a>(&self, input: impl Into<Option<&'a str>>) -> ValidationResult {
        match self.normalize(input.into()) {
            Ok((normalized_number, source)) => {
                trace!("Normalized to {} ({:?})", normalized_number, source);
                ValidationResult::valid(normalized_number, source)
            }
            Err(err) => {
                trace!("Rejected as {:?}: {}", err.kind(), err);
                ValidationResult::invalid(err, self.messages.as_ref())
            }
        }
    }

    /// Same as [`Self::check`], but also remembers the normalized number
    /// for [`Self::normalized_phone_number`].
    pub fn validate<'a>(&mut self, input: impl Into<Option<&'a str>>) -> ValidationResult {
        let result = self.check(input);
        self.last_normalized = result.normalized_number().map(str::to_owned);
        result
    }

    fn normalize(&self, input: Option<&str>) -> Result<(String, CallingCodeSource), ValidationError> {
        let raw = require_input(input)?;
        let normalized_input = normalize_input(raw, self.region.as_ref())?;
        let number = resolve_calling_code(raw, &normalized_input, self.region.as_ref())?;

        self.length_policy.check(
            raw,
            normalized_input.digits.len(),
            number.national_number.len(),
            self.required_length(),
        )?;

        Ok((
            build_normalized_number(number.calling_code, number.national_number),
            number.source,
        ))
    }
}

impl Default for PhoneNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhoneNumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumberValidator")
            .field("region", &self.region)
            .field("length_policy", &self.length_policy)
            .field("last_normalized", &self.last_normalized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        interfaces::MessageResolver,
        metadata::MetadataError,
        phonevalidator::{ErrorKind, LengthPolicy},
    };

    use super::PhoneNumberValidator;

    struct KeyMessages;

    impl MessageResolver for KeyMessages {
        fn resolve(&self, kind: ErrorKind, params: &[&str]) -> String {
            format!("{}{:?}", kind.message_key(), params)
        }
    }

    #[test]
    fn unknown_region() {
        assert_eq!(
            PhoneNumberValidator::for_region_code("XY").unwrap_err(),
            MetadataError::UnknownRegion("XY".to_owned())
        );
        assert_eq!(
            PhoneNumberValidator::for_region_code("Austria").unwrap_err(),
            MetadataError::MalformedRegionCode("Austria".to_owned())
        );
    }

    #[test]
    fn region_code_is_normalized() {
        let validator = PhoneNumberValidator::for_region_code(" at").unwrap();
        assert_eq!(validator.region_code(), Some("AT"));
        assert_eq!(validator.calling_code(), Some("43"));
    }

    #[test]
    fn no_region() {
        let validator = PhoneNumberValidator::default();
        assert_eq!(validator.region_code(), None);
        assert_eq!(validator.calling_code(), None);
        assert_eq!(validator.required_length(), None);
    }

    #[test]
    fn check_leaves_state_alone() {
        let mut validator = PhoneNumberValidator::for_region_code("US").unwrap();
        assert!(validator.validate("8002530000").is_valid());
        let result = validator.check("5128880150");
        assert_eq!(result.normalized_number(), Some("+15128880150"));
        assert_eq!(validator.normalized_phone_number(), Some("+18002530000"));
    }

    #[test]
    fn custom_messages() {
        let validator = PhoneNumberValidator::for_region_code("US").unwrap().with_messages(KeyMessages);
        assert_eq!(
            validator.check("+15121").error_message(),
            Some(r#"validation.phone.insufficientDigits["+15121"]"#)
        );
        assert_eq!(
            validator.check("+1 888 123 456").error_message(),
            Some(r#"validation.phone.incorrectLength["10"]"#)
        );
    }

    #[test]
    fn custom_length_policy() {
        let policy = LengthPolicy { variable_max_national: 12, ..LengthPolicy::default() };
        let validator = PhoneNumberValidator::for_region_code("KP").unwrap().with_length_policy(policy);
        assert_eq!(validator.length_policy(), &policy);
        assert!(validator.check("123456789012").is_valid());
        assert_eq!(validator.check("12345678901234").error_kind(), Some(ErrorKind::TooManyDigits));
    }

    #[test]
    fn validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PhoneNumberValidator>();
    }
}
