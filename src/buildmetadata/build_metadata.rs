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

use log::debug;

use crate::{
    element::Element,
    metadata::{PhoneMetadata, PhoneMetadataCollection},
};

use super::{
    descriptions::load_general_desc,
    errors::{BuildMetadataError, MissingAttributeError},
    formats::load_available_formats,
    helper_constants::{ID, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING, TERRITORIES, TERRITORY},
    territory::{
        get_national_prefix, get_national_prefix_formatting_rule_from_element,
        load_territory_tag_metadata, parse_bool_attribute,
    },
};

/// Compiles one `<territory>` element into the metadata of `region_code`.
pub fn build_phone_metadata(
    region_code: &str,
    territory_element: &Element,
    lite_build: bool,
) -> Result<PhoneMetadata, BuildMetadataError> {
    let national_prefix = get_national_prefix(territory_element);
    let mut metadata =
        load_territory_tag_metadata(region_code, territory_element, &national_prefix)?;
    let national_prefix_formatting_rule =
        get_national_prefix_formatting_rule_from_element(territory_element, &national_prefix);
    let national_prefix_optional_when_formatting =
        parse_bool_attribute(territory_element, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING)?;

    load_available_formats(
        &mut metadata,
        territory_element,
        &national_prefix,
        &national_prefix_formatting_rule,
        national_prefix_optional_when_formatting,
    )?;
    load_general_desc(&mut metadata, territory_element, lite_build)?;

    debug!(
        "Built metadata for {} (country code {})",
        region_code, metadata.country_code
    );
    Ok(metadata.build())
}

/// Compiles every territory of a metadata document.
///
/// Territories are read from the `<territories>` child of `root`, or from
/// `root` itself when it has no such child. The region code of each territory
/// is its `id` attribute. The first failing territory aborts the build.
pub fn build_phone_metadata_collection(
    root: &Element,
    lite_build: bool,
) -> Result<PhoneMetadataCollection, BuildMetadataError> {
    let territories = root.first_child(TERRITORIES).unwrap_or(root);

    let mut collection = PhoneMetadataCollection::default();
    for territory_element in territories.children_named(TERRITORY) {
        let region_code = territory_element
            .attribute(ID)
            .ok_or(MissingAttributeError { attribute: ID })?;
        let metadata = build_phone_metadata(region_code, territory_element, lite_build)
            .map_err(|err| err.for_region(region_code))?;
        collection.metadata.push(metadata);
    }
    debug!("Built metadata for {} territories", collection.metadata.len());
    Ok(collection)
}
