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

use log::trace;

use crate::{element::Element, metadata::PhoneMetadataBuilder};

use super::{
    errors::{BuildMetadataError, MissingAttributeError},
    helper_constants::{
        CARRIER_CODE_FORMATTING_RULE, COUNTRY_CODE, FIRST_GROUP_PLACEHOLDER,
        FIRST_GROUP_REPLACEMENT, INTERNATIONAL_PREFIX, LEADING_DIGITS, LEADING_ZERO_POSSIBLE,
        MAIN_COUNTRY_FOR_CODE, NATIONAL_PREFIX, NATIONAL_PREFIX_FORMATTING_RULE,
        NATIONAL_PREFIX_FOR_PARSING, NATIONAL_PREFIX_PLACEHOLDER, NATIONAL_PREFIX_TRANSFORM_RULE,
        PREFERRED_EXTN_PREFIX, PREFERRED_INTERNATIONAL_PREFIX,
    },
    pattern_validator::validate_re,
};

type Result<T> = std::result::Result<T, BuildMetadataError>;

/// Returns the national prefix of the territory, or an empty string if it has
/// none.
pub fn get_national_prefix(element: &Element) -> String {
    element
        .attribute(NATIONAL_PREFIX)
        .unwrap_or_default()
        .to_owned()
}

fn required_attribute<'a>(element: &'a Element, attribute: &'static str) -> Result<&'a str> {
    element
        .attribute(attribute)
        .ok_or_else(|| MissingAttributeError { attribute }.into())
}

/// Reads an optional boolean attribute; absent means `false`.
pub(super) fn parse_bool_attribute(element: &Element, attribute: &'static str) -> Result<bool> {
    match element.attribute(attribute) {
        None => Ok(false),
        Some(value) => match value.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(BuildMetadataError::InvalidAttributeValue {
                attribute,
                value: value.to_owned(),
            }),
        },
    }
}

/// Calling codes are positive and written with digits only, so signs such as
/// `+1` are rejected rather than parsed.
fn parse_country_code(value: &str) -> Result<i32> {
    let digits = value.trim();
    let country_code = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<i32>().ok().filter(|code| *code > 0)
    } else {
        None
    };
    country_code.ok_or_else(|| BuildMetadataError::InvalidAttributeValue {
        attribute: COUNTRY_CODE,
        value: value.to_owned(),
    })
}

/// Reads the attributes of a `<territory>` element into a new metadata builder.
///
/// `national_prefix` is the prefix already extracted with
/// [`get_national_prefix`]; it is also used as the national prefix for parsing
/// when the territory doesn't define one.
pub fn load_territory_tag_metadata(
    region_code: &str,
    element: &Element,
    national_prefix: &str,
) -> Result<PhoneMetadataBuilder> {
    let mut metadata = PhoneMetadataBuilder::new();
    metadata.id = region_code.to_owned();

    metadata.country_code = parse_country_code(required_attribute(element, COUNTRY_CODE)?)?;

    if let Some(leading_digits) = element.attribute(LEADING_DIGITS) {
        metadata.leading_digits = Some(validate_re(leading_digits, false)?);
    }
    metadata.international_prefix =
        validate_re(required_attribute(element, INTERNATIONAL_PREFIX)?, false)?;
    if let Some(preferred_international_prefix) =
        element.attribute(PREFERRED_INTERNATIONAL_PREFIX)
    {
        metadata.preferred_international_prefix = Some(preferred_international_prefix.to_owned());
    }
    if let Some(national_prefix_for_parsing) = element.attribute(NATIONAL_PREFIX_FOR_PARSING) {
        metadata.national_prefix_for_parsing =
            Some(validate_re(national_prefix_for_parsing, true)?);
        // The transform rule only makes sense together with its own parsing
        // prefix.
        if let Some(transform_rule) = element.attribute(NATIONAL_PREFIX_TRANSFORM_RULE) {
            metadata.national_prefix_transform_rule = Some(validate_re(transform_rule, false)?);
        }
    }
    if !national_prefix.is_empty() {
        metadata.national_prefix = Some(national_prefix.to_owned());
        if metadata.national_prefix_for_parsing.is_none() {
            metadata.national_prefix_for_parsing = Some(national_prefix.to_owned());
        }
    }
    if let Some(preferred_extn_prefix) = element.attribute(PREFERRED_EXTN_PREFIX) {
        metadata.preferred_extn_prefix = Some(preferred_extn_prefix.to_owned());
    }
    metadata.main_country_for_code = parse_bool_attribute(element, MAIN_COUNTRY_FOR_CODE)?;
    metadata.leading_zero_possible = parse_bool_attribute(element, LEADING_ZERO_POSSIBLE)?;

    trace!(
        "Loaded territory attributes for {} (country code {})",
        region_code, metadata.country_code
    );
    Ok(metadata)
}

/// Replaces the `$NP` and `$FG` placeholders of a formatting rule. `$CC` is
/// kept for the carrier code which is only known when formatting.
pub(super) fn substitute_formatting_rule_placeholders(rule: &str, national_prefix: &str) -> String {
    rule.replacen(NATIONAL_PREFIX_PLACEHOLDER, national_prefix, 1)
        .replacen(FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_REPLACEMENT, 1)
}

/// Returns the `nationalPrefixFormattingRule` of the element with its
/// placeholders resolved, or an empty string if the element has none.
pub fn get_national_prefix_formatting_rule_from_element(
    element: &Element,
    national_prefix: &str,
) -> String {
    element
        .attribute(NATIONAL_PREFIX_FORMATTING_RULE)
        .map(|rule| substitute_formatting_rule_placeholders(rule, national_prefix))
        .unwrap_or_default()
}

/// Returns the `carrierCodeFormattingRule` of the element with `$NP` and `$FG`
/// resolved, or an empty string if the element has none.
pub fn get_domestic_carrier_code_formatting_rule_from_element(
    element: &Element,
    national_prefix: &str,
) -> String {
    element
        .attribute(CARRIER_CODE_FORMATTING_RULE)
        .map(|rule| substitute_formatting_rule_placeholders(rule, national_prefix))
        .unwrap_or_default()
}
