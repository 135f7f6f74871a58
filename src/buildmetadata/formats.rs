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

use crate::{
    element::Element,
    metadata::{NumberFormat, NumberFormatBuilder, PhoneMetadataBuilder, NOT_APPLICABLE},
};

use super::{
    errors::{BuildMetadataError, StructuralError},
    helper_constants::{
        AVAILABLE_FORMATS, CARRIER_CODE_FORMATTING_RULE, FORMAT, INTL_FORMAT, LEADING_DIGITS,
        NATIONAL_PREFIX_FORMATTING_RULE, NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING, NUMBER_FORMAT,
        PATTERN,
    },
    pattern_validator::validate_re,
    territory::{
        get_domestic_carrier_code_formatting_rule_from_element,
        get_national_prefix_formatting_rule_from_element, parse_bool_attribute,
    },
};

type Result<T> = std::result::Result<T, BuildMetadataError>;

/// Outcome of resolving the `<intlFormat>` of one number format.
struct InternationalFormat {
    /// Whether the element defined an `<intlFormat>` itself.
    explicit: bool,
    /// `None` when the international format is `"NA"`.
    number_format: Option<NumberFormat>,
}

/// Reads every `<leadingDigits>` child, in order: the first pattern that
/// matches selects the rule, so order must be kept.
pub fn set_leading_digits_patterns(
    number_format_element: &Element,
    number_format: &mut NumberFormatBuilder,
) -> Result<()> {
    for leading_digits in number_format_element.children_named(LEADING_DIGITS) {
        number_format
            .leading_digits_pattern
            .push(validate_re(leading_digits.text(), true)?);
    }
    Ok(())
}

/// Returns the text of the only `<format>` child of the element.
fn get_single_format(number_format_element: &Element) -> Result<&str> {
    let mut formats = number_format_element.children_named(FORMAT);
    match (formats.next(), formats.next()) {
        (Some(format), None) => Ok(format.text()),
        (None, _) => Err(StructuralError::InvalidFormatCount(0).into()),
        (Some(_), Some(_)) => {
            Err(StructuralError::InvalidFormatCount(2 + formats.count()).into())
        }
    }
}

/// Sets the leading digits, the pattern and the national format of the rule
/// and returns the national format.
pub fn load_national_format(
    number_format_element: &Element,
    number_format: &mut NumberFormatBuilder,
) -> Result<String> {
    set_leading_digits_patterns(number_format_element, number_format)?;
    number_format.pattern = validate_re(
        number_format_element.attribute(PATTERN).unwrap_or_default(),
        false,
    )?;

    let national_format = get_single_format(number_format_element)?.to_owned();
    number_format.format = Some(national_format.clone());
    Ok(national_format)
}

fn resolve_international_format(
    number_format_element: &Element,
    national_format: &str,
) -> Result<InternationalFormat> {
    let intl_formats: Vec<&Element> = number_format_element.children_named(INTL_FORMAT).collect();

    let (explicit, format) = match intl_formats.as_slice() {
        // Default to use the same as the national pattern if none is defined.
        [] => (false, Some(national_format)),
        [intl_format] if intl_format.text() == NOT_APPLICABLE => (true, None),
        [intl_format] => (true, Some(intl_format.text())),
        _ => return Err(StructuralError::InvalidIntlFormatCount(intl_formats.len()).into()),
    };
    let Some(format) = format else {
        return Ok(InternationalFormat { explicit, number_format: None });
    };

    let mut intl_format = NumberFormatBuilder::new();
    set_leading_digits_patterns(number_format_element, &mut intl_format)?;
    intl_format.pattern = validate_re(
        number_format_element.attribute(PATTERN).unwrap_or_default(),
        false,
    )?;
    intl_format.format = Some(format.to_owned());

    Ok(InternationalFormat {
        explicit,
        number_format: Some(intl_format.build()?),
    })
}

/// Adds the international format of the rule to `metadata` and returns
/// whether the element defined one explicitly.
///
/// Without an `<intlFormat>` the national format is reused. An `<intlFormat>`
/// of `"NA"` counts as explicit but adds nothing: such numbers are not
/// formatted internationally.
pub fn load_international_format(
    metadata: &mut PhoneMetadataBuilder,
    number_format_element: &Element,
    national_format: &str,
) -> Result<bool> {
    let international_format =
        resolve_international_format(number_format_element, national_format)?;
    if let Some(number_format) = international_format.number_format {
        metadata.intl_number_format.push(number_format);
    }
    Ok(international_format.explicit)
}

/// Loads every `<numberFormat>` under `<availableFormats>` of the territory.
///
/// `national_prefix_formatting_rule` and
/// `national_prefix_optional_when_formatting` are the territory defaults used
/// by rules that don't override them. The carrier code formatting rule
/// default is read from the territory element.
pub fn load_available_formats(
    metadata: &mut PhoneMetadataBuilder,
    territory_element: &Element,
    national_prefix: &str,
    national_prefix_formatting_rule: &str,
    national_prefix_optional_when_formatting: bool,
) -> Result<()> {
    metadata.intl_number_format.clear();

    let carrier_code_formatting_rule =
        get_domestic_carrier_code_formatting_rule_from_element(territory_element, national_prefix);

    let Some(available_formats) = territory_element.first_child(AVAILABLE_FORMATS) else {
        return Ok(());
    };

    for number_format_element in available_formats.children_named(NUMBER_FORMAT) {
        let mut number_format = NumberFormatBuilder::new();

        number_format.national_prefix_formatting_rule =
            if number_format_element.has_attribute(NATIONAL_PREFIX_FORMATTING_RULE) {
                get_national_prefix_formatting_rule_from_element(
                    number_format_element,
                    national_prefix,
                )
            } else {
                national_prefix_formatting_rule.to_owned()
            };
        number_format.national_prefix_optional_when_formatting =
            if number_format_element.has_attribute(NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING) {
                parse_bool_attribute(
                    number_format_element,
                    NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING,
                )?
            } else {
                national_prefix_optional_when_formatting
            };
        number_format.domestic_carrier_code_formatting_rule =
            if number_format_element.has_attribute(CARRIER_CODE_FORMATTING_RULE) {
                get_domestic_carrier_code_formatting_rule_from_element(
                    number_format_element,
                    national_prefix,
                )
            } else {
                carrier_code_formatting_rule.clone()
            };

        let national_format = load_national_format(number_format_element, &mut number_format)?;
        metadata.number_format.push(number_format.build()?);

        // Most rules format the same way internationally; only rules with an
        // explicit <intlFormat> get an entry of their own.
        let international_format =
            resolve_international_format(number_format_element, &national_format)?;
        if international_format.explicit {
            if let Some(intl_format) = international_format.number_format {
                metadata.intl_number_format.push(intl_format);
            }
        }
    }
    trace!(
        "Loaded {} number formats ({} international) for {}",
        metadata.number_format.len(),
        metadata.intl_number_format.len(),
        metadata.id
    );
    Ok(())
}
