mod helper_constants;
mod short_number_info;

pub use short_number_info::ShortNumberInfo;
