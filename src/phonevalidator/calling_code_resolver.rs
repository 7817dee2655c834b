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

use crate::metadata::RegionMetadata;

use super::{
    enums::CallingCodeSource, errors::ValidationError, input_normalizer::NormalizedInput,
};

/// A number split into the region's calling code and its national part.
#[derive(Debug, PartialEq)]
pub(super) struct ResolvedNumber<'a> {
    pub calling_code: &'a str,
    pub national_number: &'a str,
    pub source: CallingCodeSource,
}

/// Splits `input` against the calling code of the configured region.
///
/// Only the configured region is ever considered: a plus-prefixed number
/// of another region is rejected rather than re-resolved.
pub(super) fn resolve_calling_code<'a>(
    raw: &str,
    input: &'a NormalizedInput<'_>,
    region: Option<&'a RegionMetadata>,
) -> Result<ResolvedNumber<'a>, ValidationError> {
    let Some(region) = region else {
        return Err(ValidationError::MissingCountryCode);
    };
    let calling_code = region.calling_code();
    let digits: &str = &input.digits;

    if input.has_plus_sign {
        let Some(national_number) = digits.strip_prefix(calling_code) else {
            return Err(ValidationError::InvalidDialingCode {
                input: raw.to_owned(),
                region_code: region.region_code().to_owned(),
                calling_code: calling_code.to_owned(),
            });
        };
        return Ok(ResolvedNumber {
            calling_code,
            national_number,
            source: CallingCodeSource::FromNumberWithPlusSign,
        });
    }

    // Users often type the calling code without the plus sign. A national
    // number that starts with the calling code digits is read that way too,
    // which is why "(120) 253 0000" is a 9 digit national number in the US.
    let (national_number, source) = match digits.strip_prefix(calling_code) {
        Some(rest) => (rest, CallingCodeSource::FromNumberWithoutPlusSign),
        None => (digits, CallingCodeSource::FromDefaultRegion),
    };
    Ok(ResolvedNumber { calling_code, national_number, source })
}
