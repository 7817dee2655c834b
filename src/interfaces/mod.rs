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

use crate::{metadata::RegionMetadata, phonevalidator::ErrorKind};

/// Read-only region metadata lookup, used to isolate the validator from
/// the source of calling codes and length rules so that a different
/// table (or a fake one in tests) can be swapped in easily.
pub trait MetadataProvider {
    /// Returns metadata for an upper-case ISO-3166-1 alpha-2 region code,
    /// or `None` if the region is not supported.
    fn lookup(&self, region_code: &str) -> Option<RegionMetadata>;
}

/// Localization lookup for user-facing validation messages.
///
/// The validator never inspects the returned text; it only forwards it
/// in [`crate::ValidationResult::error_message`].
pub trait MessageResolver: Send + Sync {
    /// Resolves the message for `kind`, substituting `params` positionally.
    fn resolve(&self, kind: ErrorKind, params: &[&str]) -> String;
}
