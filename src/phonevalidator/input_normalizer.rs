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

use crate::{metadata::RegionMetadata, regex_util::RegexFullMatch, string_util::strip_cow_prefix};

use super::{
    errors::ValidationError, helper_constants::PLUS_SIGN, validator_regexps::REG_EXPS,
};

/// User input with formatting removed.
#[derive(Debug, PartialEq)]
pub(super) struct NormalizedInput<'a> {
    /// ASCII digits only. Borrowed from the raw input when there was
    /// nothing to strip.
    pub digits: Cow<'a, str>,
    pub has_plus_sign: bool,
}

/// Rejects missing and blank input.
pub(super) fn require_input(input: Option<&str>) -> Result<&str, ValidationError> {
    match input {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(ValidationError::Empty),
    }
}

/// Strips formatting characters and a single leading plus sign.
///
/// `region` is only used to fill in the parameters of
/// [`ValidationError::InvalidCharacters`].
pub(super) fn normalize_input<'a>(
    raw: &'a str,
    region: Option<&RegionMetadata>,
) -> Result<NormalizedInput<'a>, ValidationError> {
    let stripped = REG_EXPS.formatting_chars_pattern.replace_all(raw, "");
    let (digits, has_plus_sign) = match strip_cow_prefix(stripped, PLUS_SIGN) {
        Ok(rest) => (rest, true),
        Err(all) => (all, false),
    };

    if !REG_EXPS.digits_pattern.full_match(&digits) {
        return Err(ValidationError::InvalidCharacters {
            input: raw.to_owned(),
            region_code: region.map(RegionMetadata::region_code).unwrap_or_default().to_owned(),
            calling_code: region.map(RegionMetadata::calling_code).unwrap_or_default().to_owned(),
        });
    }

    Ok(NormalizedInput { digits, has_plus_sign })
}
