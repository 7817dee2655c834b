mod compiled_metadata;
pub mod errors;
mod region_metadata;

use std::sync::LazyLock;

pub use compiled_metadata::CompiledMetadata;
pub use errors::MetadataError;
pub use region_metadata::RegionMetadata;

pub static COMPILED_METADATA: LazyLock<CompiledMetadata> = LazyLock::new(|| {
    CompiledMetadata::new()
});
