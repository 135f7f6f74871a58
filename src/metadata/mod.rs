pub mod enums;
mod phone_metadata;
mod registry;

pub use enums::NumberType;
pub use phone_metadata::{
    NumberFormat, NumberFormatBuilder, PhoneMetadata, PhoneMetadataBuilder,
    PhoneMetadataCollection, PhoneNumberDesc, NOT_APPLICABLE,
};
pub use registry::MetadataRegistry;
