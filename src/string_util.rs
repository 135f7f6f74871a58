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

use std::borrow::Cow;

/// Removes every char matching `should_remove`. Nothing is allocated when the
/// string has no such chars.
pub fn remove_chars<F>(s: &str, should_remove: F) -> Cow<'_, str>
where
    F: Fn(char) -> bool,
{
    if !s.chars().any(&should_remove) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !should_remove(*c)).collect())
}
