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

use crate::metadata::MetadataError;

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Trims and upper-cases a user supplied ISO-3166-1 alpha-2 code.
    ///
    /// The unknown region `ZZ` is rejected as well: it has no calling code.
    pub fn normalize(region_code: &str) -> Result<String, MetadataError> {
        let trimmed = region_code.trim();
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(MetadataError::MalformedRegionCode(region_code.to_owned()));
        }
        let normalized = trimmed.to_ascii_uppercase();
        if normalized == Self::get_unknown() {
            return Err(MetadataError::UnknownRegion(normalized));
        }
        Ok(normalized)
    }
}
