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

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::{generated::metadata::REGION_METADATA, interfaces::MetadataProvider};

use super::RegionMetadata;

/// Metadata provider backed by the table compiled in from
/// `resources/region_metadata.txt`.
pub struct CompiledMetadata {
    /// A mapping from a region code to the RegionMetadata for that region.
    region_to_metadata_map: HashMap<&'static str, RegionMetadata>,
}

impl CompiledMetadata {
    pub(crate) fn new() -> Self {
        let mut region_to_metadata_map = HashMap::with_capacity(REGION_METADATA.len());
        for &(region_code, calling_code, required_length) in REGION_METADATA {
            region_to_metadata_map.insert(
                region_code,
                RegionMetadata::new(region_code, calling_code, required_length),
            );
        }
        trace!("Loaded compiled metadata for {} regions", region_to_metadata_map.len());
        Self { region_to_metadata_map }
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().copied()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<&str> {
        self.region_to_metadata_map
            .values()
            .map(|metadata| metadata.calling_code())
            .collect()
    }
}

impl MetadataProvider for CompiledMetadata {
    fn lookup(&self, region_code: &str) -> Option<RegionMetadata> {
        self.region_to_metadata_map.get(region_code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::{interfaces::MetadataProvider, metadata::COMPILED_METADATA};

    #[test]
    fn every_region_has_a_well_formed_calling_code() {
        let mut count = 0;
        for region in COMPILED_METADATA.get_supported_regions() {
            count += 1;
            let metadata = COMPILED_METADATA.lookup(region).unwrap();
            assert_eq!(metadata.region_code(), region);
            let code = metadata.calling_code();
            assert!((1..=3).contains(&code.len()), "{region}: {code}");
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "{region}: {code}");
        }
        assert!(count > 200);
    }

    #[test]
    fn nanpa_regions_require_ten_digits() {
        for region in ["US", "CA", "DO", "JM", "PR"] {
            let metadata = COMPILED_METADATA.lookup(region).unwrap();
            assert_eq!(metadata.calling_code(), "1");
            assert_eq!(metadata.required_length(), Some(10));
        }
    }

    #[test]
    fn shared_calling_codes() {
        let ru = COMPILED_METADATA.lookup("RU").unwrap();
        let kz = COMPILED_METADATA.lookup("KZ").unwrap();
        assert_eq!(ru.calling_code(), kz.calling_code());
        assert!(COMPILED_METADATA.get_supported_calling_codes().contains("44"));
    }

    #[test]
    fn variable_length_regions() {
        for (region, code) in [("AT", "43"), ("KP", "850"), ("BR", "55"), ("GB", "44")] {
            let metadata = COMPILED_METADATA.lookup(region).unwrap();
            assert_eq!(metadata.calling_code(), code);
            assert_eq!(metadata.required_length(), None);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(COMPILED_METADATA.lookup("at").is_none());
        assert!(COMPILED_METADATA.lookup("ZZ").is_none());
    }
}
