pub mod codec;
pub mod version;
