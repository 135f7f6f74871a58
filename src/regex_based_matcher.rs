// Copyright (C) 2009 The Libphonenumber Authors
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

use log::error;

use crate::{
    interfaces,
    metadata::{PhoneNumberDesc, NOT_APPLICABLE},
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        // The stored pattern is anchored here rather than checking the bounds
        // of the first match: with alternations the leftmost match may be
        // shorter than a full match.
        let anchored_pattern = if allow_prefix_match {
            fast_cat::concat_str!("^(?:", number_pattern, ")")
        } else {
            fast_cat::concat_str!("^(?:", number_pattern, ")$")
        };
        let regexp = self.cache.get_regex(&anchored_pattern)?;
        Ok(regexp.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> bool {
        let national_number_pattern = number_desc.national_number_pattern();
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern, and "NA" marks that there are no numbers at all.
        if national_number_pattern.is_empty() || national_number_pattern == NOT_APPLICABLE {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }
}
