mod interfaces;
mod generated;
mod phonevalidator;
pub mod i18n;
pub mod metadata;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{MessageResolver, MetadataProvider};
pub use metadata::{COMPILED_METADATA, CompiledMetadata, MetadataError, RegionMetadata};
pub use phonevalidator::{
    CallingCodeSource, ErrorKind, LengthPolicy, PhoneNumberValidator, ValidationError,
    ValidationResult,
};
