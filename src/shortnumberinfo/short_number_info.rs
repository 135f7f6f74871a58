// Copyright (C) 2011 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
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

use log::trace;

use crate::{
    interfaces::MatcherApi,
    metadata::MetadataRegistry,
    regex_based_matcher::RegexBasedMatcher,
    string_util::remove_chars,
};

use super::helper_constants::{PLUS_CHARS, SEPARATOR_CHARS, STAR_SIGN};

/// Classifies short numbers, such as emergency numbers, dialled within a
/// region.
///
/// Borrows a fully built [`MetadataRegistry`]; every check is read-only, so a
/// single instance can be shared between threads.
pub struct ShortNumberInfo<'a> {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,
    registry: &'a MetadataRegistry,
}

impl<'a> ShortNumberInfo<'a> {
    pub fn new(registry: &'a MetadataRegistry) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            registry,
        }
    }

    /// Returns true if dialling `number` in `region_code` would connect to an
    /// emergency service.
    ///
    /// Trailing digits after an emergency number are accepted unless the
    /// region's emergency pattern is anchored at its end, which is how regions
    /// where such numbers must be dialled exactly are described. A number
    /// starting with a plus sign is never an emergency number, since emergency
    /// numbers can't be dialled internationally.
    pub fn connects_to_emergency_number(&self, number: &str, region_code: &str) -> bool {
        self.matches_emergency_number_helper(number, region_code, true)
    }

    /// Returns true if `number` is exactly an emergency number of
    /// `region_code`. A single leading `*` is accepted.
    pub fn is_emergency_number(&self, number: &str, region_code: &str) -> bool {
        self.matches_emergency_number_helper(number, region_code, false)
    }

    fn matches_emergency_number_helper(
        &self,
        number: &str,
        region_code: &str,
        allow_prefix_match: bool,
    ) -> bool {
        let number = number.trim_start();
        if number.starts_with(PLUS_CHARS) {
            // Returns false if the number starts with a plus sign. We don't
            // believe dialing the country code before emergency numbers
            // (e.g. +1911) works, but later, if that proves to work, we can add
            // additional logic here to handle it.
            return false;
        }
        let Some(metadata) = self.registry.get_metadata_for_region(region_code) else {
            return false;
        };

        // The star is only a formatting character for exact matches.
        let number = if allow_prefix_match {
            number
        } else {
            number.strip_prefix(STAR_SIGN).unwrap_or(number)
        };
        let normalized_number = normalize_short_number(number);
        let matched = self.matcher_api.match_national_number(
            &normalized_number,
            metadata.emergency(),
            allow_prefix_match,
        );
        trace!(
            "Emergency check of {} in {} (prefix match: {}): {}",
            normalized_number, region_code, allow_prefix_match, matched
        );
        matched
    }
}

/// Maps every Unicode decimal digit to its ASCII form and removes the
/// formatting separators a short number may be written with.
fn normalize_short_number(number: &str) -> String {
    let decimals = dec_from_char::normalize_decimals(number);
    remove_chars(&decimals, |c| c.is_whitespace() || SEPARATOR_CHARS.contains(&c)).into_owned()
}
