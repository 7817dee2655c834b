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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::{ASCII_DIGITS, FORMATTING_CHARS};

pub(super) static REG_EXPS: LazyLock<ValidatorRegExps> = LazyLock::new(ValidatorRegExps::new);

/// Regular expressions shared by all validators.
pub(super) struct ValidatorRegExps {
    /// Runs of formatting characters to strip from user input.
    pub formatting_chars_pattern: Regex,
    /// Checked with a full match, so the whole string must be ASCII digits.
    pub digits_pattern: Regex,
}

impl ValidatorRegExps {
    fn new() -> Self {
        Self {
            formatting_chars_pattern: Regex::new(FORMATTING_CHARS).unwrap(),
            digits_pattern: Regex::new(ASCII_DIGITS).unwrap(),
        }
    }
}
