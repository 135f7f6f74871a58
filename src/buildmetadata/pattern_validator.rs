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

use regex::Regex;

use crate::string_util::remove_chars;

use super::errors::PatternError;

/// Checks that `pattern` is a valid regular expression and returns it.
///
/// When `remove_whitespace` is set, all whitespace is dropped from the pattern
/// first, since patterns in the metadata files are often split over several
/// lines. The pattern is compiled either way.
pub fn validate_re(pattern: &str, remove_whitespace: bool) -> Result<String, PatternError> {
    let pattern = if remove_whitespace {
        remove_chars(pattern, char::is_whitespace)
    } else {
        pattern.into()
    };
    if let Err(source) = Regex::new(&pattern) {
        return Err(PatternError {
            pattern: pattern.into_owned(),
            source,
        });
    }
    Ok(pattern.into_owned())
}
