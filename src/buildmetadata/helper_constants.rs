// Element names.
pub const TERRITORIES: &str = "territories";
pub const TERRITORY: &str = "territory";
pub const AVAILABLE_FORMATS: &str = "availableFormats";
pub const NUMBER_FORMAT: &str = "numberFormat";
pub const LEADING_DIGITS: &str = "leadingDigits";
pub const FORMAT: &str = "format";
pub const INTL_FORMAT: &str = "intlFormat";
pub const GENERAL_DESC: &str = "generalDesc";
pub const EMERGENCY: &str = "emergency";
pub const NO_INTERNATIONAL_DIALLING: &str = "noInternationalDialling";
pub const POSSIBLE_NUMBER_PATTERN: &str = "possibleNumberPattern";
pub const NATIONAL_NUMBER_PATTERN: &str = "nationalNumberPattern";
pub const EXAMPLE_NUMBER: &str = "exampleNumber";

// Attribute names.
pub const ID: &str = "id";
pub const COUNTRY_CODE: &str = "countryCode";
pub const INTERNATIONAL_PREFIX: &str = "internationalPrefix";
pub const PREFERRED_INTERNATIONAL_PREFIX: &str = "preferredInternationalPrefix";
pub const NATIONAL_PREFIX: &str = "nationalPrefix";
pub const NATIONAL_PREFIX_FOR_PARSING: &str = "nationalPrefixForParsing";
pub const NATIONAL_PREFIX_TRANSFORM_RULE: &str = "nationalPrefixTransformRule";
pub const PREFERRED_EXTN_PREFIX: &str = "preferredExtnPrefix";
pub const MAIN_COUNTRY_FOR_CODE: &str = "mainCountryForCode";
pub const LEADING_ZERO_POSSIBLE: &str = "leadingZeroPossible";
pub const NATIONAL_PREFIX_FORMATTING_RULE: &str = "nationalPrefixFormattingRule";
pub const CARRIER_CODE_FORMATTING_RULE: &str = "carrierCodeFormattingRule";
pub const NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING: &str = "nationalPrefixOptionalWhenFormatting";
pub const PATTERN: &str = "pattern";

// Placeholders used in formatting rules. `$CC` is left in place and filled in
// with the carrier code when a number is formatted.
pub const NATIONAL_PREFIX_PLACEHOLDER: &str = "$NP";
pub const FIRST_GROUP_PLACEHOLDER: &str = "$FG";
pub const FIRST_GROUP_REPLACEMENT: &str = "${1}";
