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

/// Dialing rules of a single region, as returned by a
/// [`crate::MetadataProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionMetadata {
    region_code: String,
    calling_code: String,
    required_length: Option<usize>,
}

impl RegionMetadata {
    pub fn new(
        region_code: impl Into<String>,
        calling_code: impl Into<String>,
        required_length: Option<usize>,
    ) -> Self {
        Self {
            region_code: region_code.into(),
            calling_code: calling_code.into(),
            required_length,
        }
    }

    /// ISO-3166-1 alpha-2 code, e.g. `"AT"`.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Country calling code digits without the leading `+`, e.g. `"43"`.
    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    /// Exact length of the national number, if the region has a single one.
    pub fn required_length(&self) -> Option<usize> {
        self.required_length
    }
}
