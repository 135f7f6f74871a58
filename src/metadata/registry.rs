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

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::{
    buildmetadata::{build_phone_metadata_collection, errors::BuildMetadataError},
    element::Element,
    i18n,
};

use super::{PhoneMetadata, PhoneMetadataCollection};

/// Region-keyed lookup over compiled metadata.
///
/// The registry is populated once from a [`PhoneMetadataCollection`] and never
/// changes afterwards, so it can be shared by reference between any number of
/// readers.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes which share
    /// it. The main country for the code goes first. This is implemented as a
    /// sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
}

impl MetadataRegistry {
    pub fn new(metadata_collection: PhoneMetadataCollection) -> Self {
        let mut instance = Self::default();
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for metadata in metadata_collection.metadata {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::is_unknown(&region_code) {
                continue;
            }
            let main_country_for_code = metadata.main_country_for_code();
            let country_calling_code = metadata.country_code();

            instance
                .region_to_metadata_map
                .insert(region_code.clone(), metadata);

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);
        debug!(
            "Metadata registry initialised with {} regions",
            instance.region_to_metadata_map.len()
        );
        instance
    }

    /// Compiles every territory of `root` and freezes the result.
    pub fn from_element(root: &Element, lite_build: bool) -> Result<Self, BuildMetadataError> {
        Ok(Self::new(build_phone_metadata_collection(root, lite_build)?))
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        let metadata = self.region_to_metadata_map.get(region_code);
        if metadata.is_none() {
            trace!("No metadata for region code {}", region_code);
        }
        metadata
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }

    /// Returns the region codes that match the specific country calling code,
    /// main country first. Empty if the code is unknown.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> Vec<&str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(i18n::RegionCode::get_unknown())
    }
}
