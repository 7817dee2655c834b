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

use std::borrow::Cow;

use strum::{EnumDiscriminants, EnumIter};
use thiserror::Error;

/// Reason a phone number was rejected, together with the parameters
/// its user-facing message is built from.
///
/// The field-less [`ErrorKind`] is derived from this enum and is what
/// callers usually match on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(EnumIter, Hash))]
pub enum ValidationError {
    /// Nothing but white space was given.
    #[error("Input is empty")]
    Empty,
    /// The validator was created without a region.
    #[error("No region configured to validate against")]
    MissingCountryCode,
    /// Something other than digits, formatting characters and a single
    /// leading plus sign was found.
    #[error("'{input}' contains invalid characters")]
    InvalidCharacters {
        input: String,
        region_code: String,
        calling_code: String,
    },
    /// The number starts with `+` followed by a calling code other than
    /// the region's one.
    #[error("'{input}' does not start with calling code +{calling_code} of {region_code}")]
    InvalidDialingCode {
        input: String,
        region_code: String,
        calling_code: String,
    },
    #[error("'{input}' has too few digits")]
    InsufficientDigits { input: String },
    #[error("'{input}' has too many digits")]
    TooManyDigits { input: String },
    /// The national number length differs from the region's required one.
    #[error("National number must have exactly {required_length} digits")]
    IncorrectLength { required_length: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        self.into()
    }

    /// Positional parameters for the localized message of this error.
    pub fn message_params(&self) -> Vec<Cow<'_, str>> {
        match self {
            ValidationError::Empty | ValidationError::MissingCountryCode => Vec::new(),
            ValidationError::InvalidCharacters { input, region_code, calling_code }
            | ValidationError::InvalidDialingCode { input, region_code, calling_code } => vec![
                Cow::Borrowed(input.as_str()),
                Cow::Borrowed(region_code.as_str()),
                Cow::Borrowed(calling_code.as_str()),
            ],
            ValidationError::InsufficientDigits { input }
            | ValidationError::TooManyDigits { input } => vec![Cow::Borrowed(input.as_str())],
            ValidationError::IncorrectLength { required_length } => {
                let mut buf = itoa::Buffer::new();
                vec![Cow::Owned(buf.format(*required_length).to_owned())]
            }
        }
    }
}

impl ErrorKind {
    /// Resource key of the message, as used by translation catalogues.
    pub fn message_key(self) -> &'static str {
        match self {
            ErrorKind::Empty => "validation.empty",
            ErrorKind::MissingCountryCode => "validation.phone.missingCountryCode",
            ErrorKind::InvalidCharacters => "validation.phone.invalidCharacters",
            ErrorKind::InvalidDialingCode => "validation.phone.invalidDialingCode",
            ErrorKind::InsufficientDigits => "validation.phone.insufficientDigits",
            ErrorKind::TooManyDigits => "validation.phone.tooManyDigits",
            ErrorKind::IncorrectLength => "validation.phone.incorrectLength",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::{ErrorKind, ValidationError};

    #[test]
    fn kind_of_error() {
        assert_eq!(ValidationError::Empty.kind(), ErrorKind::Empty);
        let err = ValidationError::TooManyDigits { input: "123".to_owned() };
        assert_eq!(err.kind(), ErrorKind::TooManyDigits);
        assert_eq!(ErrorKind::from(&err), ErrorKind::TooManyDigits);
    }

    #[test]
    fn message_keys_are_unique() {
        let keys = ErrorKind::iter().map(ErrorKind::message_key).collect::<HashSet<_>>();
        assert_eq!(keys.len(), ErrorKind::iter().count());
        assert_eq!(ErrorKind::iter().count(), 7);
    }

    #[test]
    fn message_params() {
        let err = ValidationError::InvalidDialingCode {
            input: "+42 1".to_owned(),
            region_code: "AT".to_owned(),
            calling_code: "43".to_owned(),
        };
        assert_eq!(err.message_params(), vec!["+42 1", "AT", "43"]);
        assert_eq!(
            ValidationError::IncorrectLength { required_length: 10 }.message_params(),
            vec!["10"]
        );
        assert!(ValidationError::MissingCountryCode.message_params().is_empty());
    }
}
