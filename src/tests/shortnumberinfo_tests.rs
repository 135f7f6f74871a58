use crate::{metadata::MetadataRegistry, ShortNumberInfo};

use super::{init_logging, region_code::RegionCode, test_metadata::test_metadata_document};

fn get_registry() -> MetadataRegistry {
    init_logging();
    MetadataRegistry::from_element(&test_metadata_document(), false)
        .expect("Test metadata should be valid")
}

#[test]
fn connects_to_emergency_number_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.connects_to_emergency_number("911", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("119", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("999", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_long_number_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.connects_to_emergency_number("9116666666", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("1196666666", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("9996666666", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_with_formatting_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.connects_to_emergency_number("9-1-1", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("1-1-9", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("9 1\u{2013}1", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("9-9-9", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_with_plus_sign_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(!short_info.connects_to_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("\u{FF0B}911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number(" +911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("+119", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("+999", RegionCode::us()));
}

#[test]
fn emergency_number_with_full_width_digits_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // "９１１" written with full-width digits.
    assert!(short_info.is_emergency_number("\u{FF19}\u{FF11}\u{FF11}", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("\u{FF19}\u{FF11}\u{FF11}", RegionCode::us()));
    // Arabic-Indic digits mixed with ASCII and a dash.
    assert!(short_info.is_emergency_number("\u{0661}1-\u{0669}", RegionCode::us()));
    assert!(!short_info.is_emergency_number("\u{FF19}\u{FF19}\u{FF19}", RegionCode::us()));
    assert!(!short_info
        .connects_to_emergency_number("\u{FF0B}\u{FF19}\u{FF11}\u{FF11}", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_br() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.connects_to_emergency_number("911", RegionCode::br()));
    assert!(short_info.connects_to_emergency_number("190", RegionCode::br()));
    assert!(!short_info.connects_to_emergency_number("999", RegionCode::br()));
}

#[test]
fn connects_to_emergency_number_long_number_br() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // Brazilian emergency numbers don't work when additional digits are appended.
    assert!(!short_info.connects_to_emergency_number("9111", RegionCode::br()));
    assert!(!short_info.connects_to_emergency_number("1900", RegionCode::br()));
    assert!(!short_info.connects_to_emergency_number("9996", RegionCode::br()));
}

#[test]
fn connects_to_emergency_number_ao() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // Angola doesn't have any metadata for emergency numbers.
    assert!(!short_info.connects_to_emergency_number("911", RegionCode::ao()));
    assert!(!short_info.connects_to_emergency_number("222123456", RegionCode::ao()));
    assert!(!short_info.connects_to_emergency_number("923123456", RegionCode::ao()));
}

#[test]
fn connects_to_emergency_number_zw() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // Zimbabwe doesn't have any metadata.
    assert!(!short_info.connects_to_emergency_number("911", RegionCode::zw()));
    assert!(!short_info.connects_to_emergency_number("01312345", RegionCode::zw()));
    assert!(!short_info.connects_to_emergency_number("0711234567", RegionCode::zw()));
}

#[test]
fn is_emergency_number_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.is_emergency_number("911", RegionCode::us()));
    assert!(short_info.is_emergency_number("119", RegionCode::us()));
    assert!(!short_info.is_emergency_number("999", RegionCode::us()));
}

#[test]
fn is_emergency_number_long_number_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(!short_info.is_emergency_number("9116666666", RegionCode::us()));
    assert!(!short_info.is_emergency_number("1196666666", RegionCode::us()));
    assert!(!short_info.is_emergency_number("9996666666", RegionCode::us()));
}

#[test]
fn is_emergency_number_with_formatting_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.is_emergency_number("9-1-1", RegionCode::us()));
    assert!(short_info.is_emergency_number("*911", RegionCode::us()));
    assert!(short_info.is_emergency_number("1-1-9", RegionCode::us()));
    assert!(short_info.is_emergency_number("*119", RegionCode::us()));
    assert!(!short_info.is_emergency_number("9-9-9", RegionCode::us()));
    assert!(!short_info.is_emergency_number("*999", RegionCode::us()));
}

#[test]
fn star_sign_is_only_accepted_for_exact_matches() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(!short_info.connects_to_emergency_number("*911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("**911", RegionCode::us()));
}

#[test]
fn is_emergency_number_with_plus_sign_us() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(!short_info.is_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("\u{FF0B}911", RegionCode::us()));
    assert!(!short_info.is_emergency_number(" +911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("+119", RegionCode::us()));
    assert!(!short_info.is_emergency_number("+999", RegionCode::us()));
}

#[test]
fn is_emergency_number_br() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(short_info.is_emergency_number("911", RegionCode::br()));
    assert!(short_info.is_emergency_number("190", RegionCode::br()));
    assert!(!short_info.is_emergency_number("999", RegionCode::br()));
}

#[test]
fn is_emergency_number_long_number_br() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    assert!(!short_info.is_emergency_number("9111", RegionCode::br()));
    assert!(!short_info.is_emergency_number("1900", RegionCode::br()));
    assert!(!short_info.is_emergency_number("9996", RegionCode::br()));
}

#[test]
fn is_emergency_number_ao() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // Angola doesn't have any metadata for emergency numbers.
    assert!(!short_info.is_emergency_number("911", RegionCode::ao()));
    assert!(!short_info.is_emergency_number("222123456", RegionCode::ao()));
    assert!(!short_info.is_emergency_number("923123456", RegionCode::ao()));
}

#[test]
fn is_emergency_number_zw() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    // Zimbabwe doesn't have any metadata.
    assert!(!short_info.is_emergency_number("911", RegionCode::zw()));
    assert!(!short_info.is_emergency_number("01312345", RegionCode::zw()));
    assert!(!short_info.is_emergency_number("0711234567", RegionCode::zw()));
}

#[test]
fn short_number_info_is_shared_between_threads() {
    let registry = get_registry();
    let short_info = ShortNumberInfo::new(&registry);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert!(short_info.is_emergency_number("911", RegionCode::us()));
                assert!(!short_info.is_emergency_number("9111", RegionCode::br()));
            });
        }
    });
}
