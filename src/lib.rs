mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod string_util;

pub mod buildmetadata;
pub mod element;
pub mod i18n;
pub mod metadata;
pub mod shortnumberinfo;

pub use buildmetadata::errors::{
    BuildMetadataError, MissingAttributeError, PatternError, StructuralError,
};
pub use element::Element;
pub use metadata::{
    MetadataRegistry, NumberFormat, NumberType, PhoneMetadata, PhoneMetadataCollection,
    PhoneNumberDesc,
};
pub use shortnumberinfo::ShortNumberInfo;

#[cfg(test)]
mod tests;
