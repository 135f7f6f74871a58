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
use strum::IntoEnumIterator;

use crate::{
    element::Element,
    metadata::{NumberType, PhoneMetadataBuilder, PhoneNumberDesc, NOT_APPLICABLE},
};

use super::{
    errors::BuildMetadataError,
    helper_constants::{
        EMERGENCY, EXAMPLE_NUMBER, GENERAL_DESC, NATIONAL_NUMBER_PATTERN,
        NO_INTERNATIONAL_DIALLING, POSSIBLE_NUMBER_PATTERN,
    },
    pattern_validator::validate_re,
};

type Result<T> = std::result::Result<T, BuildMetadataError>;

/// Returns `true` for the names of the ten number type elements.
pub fn is_valid_number_type(number_type: &str) -> bool {
    NumberType::from_tag_name(number_type).is_some()
}

/// Descriptions other than the ten number types that a territory can carry.
fn is_known_description(tag: &str) -> bool {
    is_valid_number_type(tag) || matches!(tag, GENERAL_DESC | EMERGENCY | NO_INTERNATIONAL_DIALLING)
}

/// Resolves the description named `tag` of the territory against the general
/// description.
///
/// An unknown tag or a missing element gives a description with `"NA"`
/// patterns. Patterns missing from the element are taken from `general_desc`
/// (or are `"NA"` without one). Example numbers are dropped in lite builds.
pub fn process_phone_number_desc_element(
    general_desc: Option<&PhoneNumberDesc>,
    territory_element: &Element,
    tag: &str,
    lite_build: bool,
) -> Result<PhoneNumberDesc> {
    if !is_known_description(tag) {
        debug!("Ignoring unknown number description <{}>", tag);
        return Ok(PhoneNumberDesc::not_applicable());
    }
    let Some(element) = territory_element.first_child(tag) else {
        return Ok(PhoneNumberDesc::not_applicable());
    };

    let inherited = |field: fn(&PhoneNumberDesc) -> &str| {
        general_desc
            .map(|desc| field(desc).to_owned())
            .unwrap_or_else(|| NOT_APPLICABLE.to_owned())
    };

    let possible_number_pattern = match element.first_child(POSSIBLE_NUMBER_PATTERN) {
        Some(pattern) => validate_re(pattern.text(), true)?,
        None => inherited(PhoneNumberDesc::possible_number_pattern),
    };
    let national_number_pattern = match element.first_child(NATIONAL_NUMBER_PATTERN) {
        Some(pattern) => validate_re(pattern.text(), true)?,
        None => inherited(PhoneNumberDesc::national_number_pattern),
    };
    let example_number = if lite_build {
        String::new()
    } else {
        match element.first_child(EXAMPLE_NUMBER) {
            Some(example) => example.text().to_owned(),
            None => inherited(PhoneNumberDesc::example_number),
        }
    };

    Ok(PhoneNumberDesc::new(
        possible_number_pattern,
        national_number_pattern,
        example_number,
    ))
}

/// Loads the general description and every description that inherits from it.
pub fn load_general_desc(
    metadata: &mut PhoneMetadataBuilder,
    territory_element: &Element,
    lite_build: bool,
) -> Result<()> {
    let general_desc =
        process_phone_number_desc_element(None, territory_element, GENERAL_DESC, lite_build)?;

    for number_type in NumberType::iter() {
        *metadata.number_desc_mut(number_type) = process_phone_number_desc_element(
            Some(&general_desc),
            territory_element,
            number_type.tag_name(),
            lite_build,
        )?;
    }
    metadata.emergency = process_phone_number_desc_element(
        Some(&general_desc),
        territory_element,
        EMERGENCY,
        lite_build,
    )?;
    metadata.no_international_dialling = process_phone_number_desc_element(
        Some(&general_desc),
        territory_element,
        NO_INTERNATIONAL_DIALLING,
        lite_build,
    )?;
    metadata.general_desc = general_desc;

    metadata.same_mobile_and_fixed_line_pattern = metadata.mobile.national_number_pattern()
        == metadata.fixed_line.national_number_pattern();
    Ok(())
}
