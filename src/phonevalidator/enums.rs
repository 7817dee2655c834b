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

/// Where the calling code of a normalized number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingCodeSource {
    /// The user typed `+` followed by the region's calling code,
    /// e.g. `+43 1 214-3512` in AT.
    FromNumberWithPlusSign,
    /// The user typed the calling code digits without a plus sign,
    /// e.g. `1829-123 4567` in DO.
    FromNumberWithoutPlusSign,
    /// The input held only the national number and the calling code
    /// of the configured region was prepended.
    FromDefaultRegion,
}
