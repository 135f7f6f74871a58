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

use crate::buildmetadata::errors::StructuralError;

use super::NumberType;

/// Marks a pattern or an international format as explicitly absent. It is not
/// the same as an empty string: `"NA"` says that no numbers of a type exist.
pub const NOT_APPLICABLE: &str = "NA";

/// Patterns and an example for one category of numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    possible_number_pattern: String,
    national_number_pattern: String,
    example_number: String,
}

impl Default for PhoneNumberDesc {
    fn default() -> Self {
        Self::not_applicable()
    }
}

impl PhoneNumberDesc {
    pub fn new(
        possible_number_pattern: impl Into<String>,
        national_number_pattern: impl Into<String>,
        example_number: impl Into<String>,
    ) -> Self {
        Self {
            possible_number_pattern: possible_number_pattern.into(),
            national_number_pattern: national_number_pattern.into(),
            example_number: example_number.into(),
        }
    }

    /// Description of a category that has no numbers at all.
    pub fn not_applicable() -> Self {
        Self::new(NOT_APPLICABLE, NOT_APPLICABLE, NOT_APPLICABLE)
    }

    pub fn possible_number_pattern(&self) -> &str {
        &self.possible_number_pattern
    }

    pub fn national_number_pattern(&self) -> &str {
        &self.national_number_pattern
    }

    pub fn example_number(&self) -> &str {
        &self.example_number
    }

    pub fn has_national_number_data(&self) -> bool {
        !self.national_number_pattern.is_empty() && self.national_number_pattern != NOT_APPLICABLE
    }
}

/// A single formatting rule of a territory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pattern: String,
    format: String,
    leading_digits_pattern: Vec<String>,
    national_prefix_formatting_rule: String,
    domestic_carrier_code_formatting_rule: String,
    national_prefix_optional_when_formatting: bool,
}

impl NumberFormat {
    /// Regex capturing the groups the format template refers to.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Leading digits patterns in the order they have to be tried.
    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        &self.national_prefix_formatting_rule
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        &self.domestic_carrier_code_formatting_rule
    }

    pub fn national_prefix_optional_when_formatting(&self) -> bool {
        self.national_prefix_optional_when_formatting
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberFormatBuilder {
    pub pattern: String,
    pub format: Option<String>,
    pub leading_digits_pattern: Vec<String>,
    pub national_prefix_formatting_rule: String,
    pub domestic_carrier_code_formatting_rule: String,
    pub national_prefix_optional_when_formatting: bool,
}

impl NumberFormatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<NumberFormat, StructuralError> {
        let format = self.format.ok_or(StructuralError::MissingFormat)?;
        Ok(NumberFormat {
            pattern: self.pattern,
            format,
            leading_digits_pattern: self.leading_digits_pattern,
            national_prefix_formatting_rule: self.national_prefix_formatting_rule,
            domestic_carrier_code_formatting_rule: self.domestic_carrier_code_formatting_rule,
            national_prefix_optional_when_formatting: self.national_prefix_optional_when_formatting,
        })
    }
}

/// Compiled metadata of one region. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMetadata {
    id: String,
    country_code: i32,
    leading_digits: Option<String>,
    international_prefix: String,
    preferred_international_prefix: Option<String>,
    national_prefix: Option<String>,
    national_prefix_for_parsing: Option<String>,
    national_prefix_transform_rule: Option<String>,
    preferred_extn_prefix: Option<String>,

    general_desc: PhoneNumberDesc,
    fixed_line: PhoneNumberDesc,
    mobile: PhoneNumberDesc,
    pager: PhoneNumberDesc,
    toll_free: PhoneNumberDesc,
    premium_rate: PhoneNumberDesc,
    shared_cost: PhoneNumberDesc,
    personal_number: PhoneNumberDesc,
    voip: PhoneNumberDesc,
    uan: PhoneNumberDesc,
    short_code: PhoneNumberDesc,
    emergency: PhoneNumberDesc,
    no_international_dialling: PhoneNumberDesc,

    same_mobile_and_fixed_line_pattern: bool,
    main_country_for_code: bool,
    leading_zero_possible: bool,

    number_format: Vec<NumberFormat>,
    intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadata {
    /// Region code of the territory, e.g. `"US"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or_default()
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn international_prefix(&self) -> &str {
        &self.international_prefix
    }

    pub fn preferred_international_prefix(&self) -> &str {
        self.preferred_international_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_preferred_international_prefix(&self) -> bool {
        self.preferred_international_prefix.is_some()
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        self.national_prefix_for_parsing.is_some()
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_transform_rule(&self) -> bool {
        self.national_prefix_transform_rule.is_some()
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn general_desc(&self) -> &PhoneNumberDesc {
        &self.general_desc
    }

    pub fn fixed_line(&self) -> &PhoneNumberDesc {
        &self.fixed_line
    }

    pub fn mobile(&self) -> &PhoneNumberDesc {
        &self.mobile
    }

    pub fn pager(&self) -> &PhoneNumberDesc {
        &self.pager
    }

    pub fn toll_free(&self) -> &PhoneNumberDesc {
        &self.toll_free
    }

    pub fn premium_rate(&self) -> &PhoneNumberDesc {
        &self.premium_rate
    }

    pub fn shared_cost(&self) -> &PhoneNumberDesc {
        &self.shared_cost
    }

    pub fn personal_number(&self) -> &PhoneNumberDesc {
        &self.personal_number
    }

    pub fn voip(&self) -> &PhoneNumberDesc {
        &self.voip
    }

    pub fn uan(&self) -> &PhoneNumberDesc {
        &self.uan
    }

    pub fn short_code(&self) -> &PhoneNumberDesc {
        &self.short_code
    }

    pub fn emergency(&self) -> &PhoneNumberDesc {
        &self.emergency
    }

    pub fn no_international_dialling(&self) -> &PhoneNumberDesc {
        &self.no_international_dialling
    }

    /// Returns the description inside the metadata of the appropriate type.
    pub fn number_desc(&self, number_type: NumberType) -> &PhoneNumberDesc {
        match number_type {
            NumberType::FixedLine => &self.fixed_line,
            NumberType::Mobile => &self.mobile,
            NumberType::Pager => &self.pager,
            NumberType::TollFree => &self.toll_free,
            NumberType::PremiumRate => &self.premium_rate,
            NumberType::SharedCost => &self.shared_cost,
            NumberType::PersonalNumber => &self.personal_number,
            NumberType::VoIP => &self.voip,
            NumberType::UAN => &self.uan,
            NumberType::ShortCode => &self.short_code,
        }
    }

    /// Cached result of comparing the fixed-line and mobile national number
    /// patterns; the patterns themselves stay authoritative.
    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn leading_zero_possible(&self) -> bool {
        self.leading_zero_possible
    }

    pub fn number_format(&self) -> &[NumberFormat] {
        &self.number_format
    }

    /// Formats used for international formatting. Empty when every rule of the
    /// territory reuses its national template.
    pub fn intl_number_format(&self) -> &[NumberFormat] {
        &self.intl_number_format
    }
}

/// Mutable construction value for [`PhoneMetadata`].
///
/// Owned by a single writer while a territory is compiled, then frozen with
/// [`PhoneMetadataBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct PhoneMetadataBuilder {
    pub id: String,
    pub country_code: i32,
    pub leading_digits: Option<String>,
    pub international_prefix: String,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub preferred_extn_prefix: Option<String>,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub short_code: PhoneNumberDesc,
    pub emergency: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,

    pub same_mobile_and_fixed_line_pattern: bool,
    pub main_country_for_code: bool,
    pub leading_zero_possible: bool,

    pub number_format: Vec<NumberFormat>,
    pub intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_desc_mut(&mut self, number_type: NumberType) -> &mut PhoneNumberDesc {
        match number_type {
            NumberType::FixedLine => &mut self.fixed_line,
            NumberType::Mobile => &mut self.mobile,
            NumberType::Pager => &mut self.pager,
            NumberType::TollFree => &mut self.toll_free,
            NumberType::PremiumRate => &mut self.premium_rate,
            NumberType::SharedCost => &mut self.shared_cost,
            NumberType::PersonalNumber => &mut self.personal_number,
            NumberType::VoIP => &mut self.voip,
            NumberType::UAN => &mut self.uan,
            NumberType::ShortCode => &mut self.short_code,
        }
    }

    pub fn build(self) -> PhoneMetadata {
        PhoneMetadata {
            id: self.id,
            country_code: self.country_code,
            leading_digits: self.leading_digits,
            international_prefix: self.international_prefix,
            preferred_international_prefix: self.preferred_international_prefix,
            national_prefix: self.national_prefix,
            national_prefix_for_parsing: self.national_prefix_for_parsing,
            national_prefix_transform_rule: self.national_prefix_transform_rule,
            preferred_extn_prefix: self.preferred_extn_prefix,
            general_desc: self.general_desc,
            fixed_line: self.fixed_line,
            mobile: self.mobile,
            pager: self.pager,
            toll_free: self.toll_free,
            premium_rate: self.premium_rate,
            shared_cost: self.shared_cost,
            personal_number: self.personal_number,
            voip: self.voip,
            uan: self.uan,
            short_code: self.short_code,
            emergency: self.emergency,
            no_international_dialling: self.no_international_dialling,
            same_mobile_and_fixed_line_pattern: self.same_mobile_and_fixed_line_pattern,
            main_country_for_code: self.main_country_for_code,
            leading_zero_possible: self.leading_zero_possible,
            number_format: self.number_format,
            intl_number_format: self.intl_number_format,
        }
    }
}

/// All territories compiled from one metadata document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}
