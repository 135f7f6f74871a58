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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildMetadataError {
    #[error("{0}")]
    InvalidPattern(#[from] PatternError),

    #[error("{0}")]
    Structural(#[from] StructuralError),

    #[error("{0}")]
    MissingAttribute(#[from] MissingAttributeError),

    #[error("Invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttributeValue {
        attribute: &'static str,
        value: String,
    },

    #[error("Failed to build metadata for region {region_code}: {source}")]
    Territory {
        region_code: String,
        #[source]
        source: Box<BuildMetadataError>,
    },
}

/// A regular expression found in the metadata does not compile.
#[derive(Debug, Error)]
#[error("Invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// The document does not have the shape the compiler requires.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Expected exactly one <format> element, found {0}")]
    InvalidFormatCount(usize),
    #[error("Expected at most one <intlFormat> element, found {0}")]
    InvalidIntlFormatCount(usize),
    #[error("Number format has no national format template")]
    MissingFormat,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Missing required attribute '{attribute}'")]
pub struct MissingAttributeError {
    pub attribute: &'static str,
}

impl BuildMetadataError {
    /// Attaches the region code of the territory being compiled.
    pub(crate) fn for_region(self, region_code: &str) -> Self {
        BuildMetadataError::Territory {
            region_code: region_code.to_owned(),
            source: Box::new(self),
        }
    }
}
