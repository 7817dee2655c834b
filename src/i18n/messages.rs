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

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{interfaces::MessageResolver, phonevalidator::ErrorKind};

/// Matches `{0}`, `{1}`, ... placeholders.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid")
});

/// Substitutes `{n}` placeholders with `params[n]`.
///
/// Placeholders without a matching parameter are left untouched, so a
/// template never loses information because of a short parameter list.
pub fn format_positional<'a>(template: &'a str, params: &[&str]) -> Cow<'a, str> {
    PLACEHOLDER_PATTERN.replace_all(template, |caps: &Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| params.get(index))
            .map(|param| param.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// Default English message catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMessages;

impl EnglishMessages {
    pub fn template(kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::Empty => "Empty input is not allowed.",
            ErrorKind::MissingCountryCode => "Need two letter country code to validate phone number.",
            ErrorKind::InvalidCharacters => "Phone number {0} contains invalid characters.",
            ErrorKind::InvalidDialingCode => {
                "Country dialing code for number {0} is invalid for country {1}. \
                The correct dialing code is {2}."
            }
            ErrorKind::InsufficientDigits => {
                "There are not enough digits in {0} to be a valid phone number."
            }
            ErrorKind::TooManyDigits => "There are too many digits in {0} to be a valid phone number.",
            ErrorKind::IncorrectLength => "The field must contain {0} numbers.",
        }
    }
}

impl MessageResolver for EnglishMessages {
    fn resolve(&self, kind: ErrorKind, params: &[&str]) -> String {
        format_positional(Self::template(kind), params).into_owned()
    }
}
