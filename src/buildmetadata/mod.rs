//! Compilation of the XML territory metadata into [`PhoneMetadata`] records.
//!
//! [`PhoneMetadata`]: crate::metadata::PhoneMetadata

mod build_metadata;
mod descriptions;
pub mod errors;
mod formats;
mod helper_constants;
mod pattern_validator;
mod territory;

pub use build_metadata::{build_phone_metadata, build_phone_metadata_collection};
pub use descriptions::{is_valid_number_type, load_general_desc, process_phone_number_desc_element};
pub use formats::{
    load_available_formats, load_international_format, load_national_format,
    set_leading_digits_patterns,
};
pub use pattern_validator::validate_re;
pub use territory::{
    get_domestic_carrier_code_formatting_rule_from_element, get_national_prefix,
    get_national_prefix_formatting_rule_from_element, load_territory_tag_metadata,
};
