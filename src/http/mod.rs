pub mod error;
pub mod fetch;

pub use fetch::{
    fetch_bytes, fetch_document, fetch_manifest, fetch_version, fetch_version_with_options,
    FetchOptions, VERSION_MANIFEST_URL, VERSION_MANIFEST_V2_URL,
};
