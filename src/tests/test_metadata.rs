use crate::element::Element;

pub(super) fn pattern_element(name: &str, pattern: &str) -> Element {
    Element::new(name).with_text(pattern)
}

pub(super) fn desc_element(name: &str, national_number_pattern: &str, example: &str) -> Element {
    Element::new(name)
        .with_child(pattern_element("nationalNumberPattern", national_number_pattern))
        .with_child(pattern_element("exampleNumber", example))
}

pub(super) fn number_format_element(pattern: &str, format: &str) -> Element {
    Element::new("numberFormat")
        .with_attribute("pattern", pattern)
        .with_child(Element::new("format").with_text(format))
}

fn us_territory() -> Element {
    Element::new("territory")
        .with_attribute("id", "US")
        .with_attribute("countryCode", "1")
        .with_attribute("internationalPrefix", "011")
        .with_attribute("nationalPrefix", "1")
        .with_attribute("mainCountryForCode", "true")
        .with_attribute("preferredExtnPrefix", " extn. ")
        .with_child(
            Element::new("availableFormats")
                .with_child(
                    number_format_element("(\\d{3})(\\d{4})", "$1 $2")
                        .with_child(Element::new("intlFormat").with_text("NA")),
                )
                .with_child(number_format_element("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3")),
        )
        .with_child(
            Element::new("generalDesc")
                .with_child(pattern_element(
                    "nationalNumberPattern",
                    "[13-689]\\d{9}|2[0-35-9]\\d{8}",
                ))
                .with_child(pattern_element("possibleNumberPattern", "\\d{7}(?:\\d{3})?")),
        )
        .with_child(desc_element("fixedLine", "[13-689]\\d{9}|2[0-35-9]\\d{8}", "6502530000"))
        .with_child(desc_element("mobile", "[13-689]\\d{9}|2[0-35-9]\\d{8}", "6502530000"))
        .with_child(desc_element("tollFree", "8(?:00|66|77|88)\\d{7}", "8002530000"))
        .with_child(desc_element("premiumRate", "900\\d{7}", "9002530000"))
        .with_child(
            Element::new("emergency")
                .with_child(pattern_element("nationalNumberPattern", "11[29] | 911"))
                .with_child(pattern_element("possibleNumberPattern", "\\d{3}"))
                .with_child(pattern_element("exampleNumber", "911")),
        )
}

/// Shares calling code 1 with the US, which is the main country for it.
fn bs_territory() -> Element {
    Element::new("territory")
        .with_attribute("id", "BS")
        .with_attribute("countryCode", "1")
        .with_attribute("internationalPrefix", "011")
        .with_attribute("nationalPrefix", "1")
        .with_child(
            Element::new("generalDesc")
                .with_child(pattern_element(
                    "nationalNumberPattern",
                    "(?:242|8(?:00|66|77|88)|900)\\d{7}",
                ))
                .with_child(pattern_element("possibleNumberPattern", "\\d{7}(?:\\d{3})?")),
        )
        .with_child(desc_element(
            "fixedLine",
            concat!(
                "242(?:3(?:02|[236][1-9]|4[0-24-9]|5[0-68]|7[3-57]|9[2-5])",
                "|4(?:2[237]|51|64|77)|502|636|702)\\d{4}",
            ),
            "2423456789",
        ))
}

fn br_territory() -> Element {
    Element::new("territory")
        .with_attribute("id", "BR")
        .with_attribute("countryCode", "55")
        .with_attribute("internationalPrefix", "00(?:1[45]|2[135]|[34]1|43)")
        .with_attribute("nationalPrefix", "0")
        .with_attribute("nationalPrefixForParsing", "0(?:(1[245]|2[135]|[34]1)(\\d{10}))?")
        .with_attribute("nationalPrefixTransformRule", "$2")
        .with_attribute("nationalPrefixFormattingRule", "($FG)")
        .with_attribute("carrierCodeFormattingRule", "$NP $CC ($FG)")
        .with_child(
            Element::new("availableFormats").with_child(
                number_format_element("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3")
                    .with_child(Element::new("leadingDigits").with_text("[1-9][1-9]")),
            ),
        )
        .with_child(
            Element::new("generalDesc")
                .with_child(pattern_element("nationalNumberPattern", "[1-9]\\d{7,9}"))
                .with_child(pattern_element("possibleNumberPattern", "\\d{8,10}")),
        )
        .with_child(desc_element("fixedLine", "[1-9][1-9][2-5]\\d{7}", "1123456789"))
        .with_child(desc_element("mobile", "[1-9][1-9][6-9]\\d{7}", "1161234567"))
        .with_child(
            // Emergency numbers in Brazil only connect when dialled exactly.
            Element::new("emergency")
                .with_child(pattern_element("nationalNumberPattern", "(?:1(?:12|28|9[023])|911)$"))
                .with_child(pattern_element("exampleNumber", "190")),
        )
}

/// Angola has no emergency metadata.
fn ao_territory() -> Element {
    Element::new("territory")
        .with_attribute("id", "AO")
        .with_attribute("countryCode", "244")
        .with_attribute("internationalPrefix", "00")
        .with_attribute("nationalPrefix", "0")
        .with_attribute("nationalPrefixForParsing", "0~0")
        .with_child(
            Element::new("generalDesc")
                .with_child(pattern_element("nationalNumberPattern", "[29]\\d{8}"))
                .with_child(pattern_element("possibleNumberPattern", "\\d{9}")),
        )
        .with_child(desc_element("fixedLine", "2\\d(?:[26-9]\\d|\\d[26-9])\\d{5}", "222123456"))
        .with_child(desc_element("mobile", "9[1-3]\\d{7}", "923123456"))
}

/// Metadata document used by the tests. Zimbabwe is deliberately missing.
pub(crate) fn test_metadata_document() -> Element {
    Element::new("phoneNumberMetadata").with_child(
        Element::new("territories")
            .with_child(ao_territory())
            .with_child(bs_territory())
            .with_child(br_territory())
            .with_child(us_territory()),
    )
}
