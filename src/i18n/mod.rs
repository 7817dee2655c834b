mod messages;
mod region_code;

pub use messages::{format_positional, EnglishMessages};
pub use region_code::RegionCode;
