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

use super::{
    errors::ValidationError,
    helper_constants::{MAX_DIGITS, MIN_DIGITS, VARIABLE_MAX_NATIONAL, VARIABLE_MIN_NATIONAL},
};

/// Digit count limits applied after the calling code is resolved.
///
/// `min_digits`/`max_digits` bound every digit the user typed, calling
/// code included. The variable national range only applies to regions
/// without a required national length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthPolicy {
    pub min_digits: usize,
    pub max_digits: usize,
    pub variable_min_national: usize,
    pub variable_max_national: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min_digits: MIN_DIGITS,
            max_digits: MAX_DIGITS,
            variable_min_national: VARIABLE_MIN_NATIONAL,
            variable_max_national: VARIABLE_MAX_NATIONAL,
        }
    }
}

impl LengthPolicy {
    /// Checks the coarse bounds first, then the region specific length.
    pub(super) fn check(
        &self,
        raw: &str,
        digit_count: usize,
        national_length: usize,
        required_length: Option<usize>,
    ) -> Result<(), ValidationError> {
        if digit_count < self.min_digits {
            return Err(ValidationError::InsufficientDigits { input: raw.to_owned() });
        }
        if digit_count > self.max_digits {
            return Err(ValidationError::TooManyDigits { input: raw.to_owned() });
        }

        match required_length {
            Some(required_length) if national_length != required_length => {
                Err(ValidationError::IncorrectLength { required_length })
            }
            Some(_) => Ok(()),
            None if national_length < self.variable_min_national => {
                Err(ValidationError::InsufficientDigits { input: raw.to_owned() })
            }
            None if national_length > self.variable_max_national => {
                Err(ValidationError::TooManyDigits { input: raw.to_owned() })
            }
            None => Ok(()),
        }
    }
}
