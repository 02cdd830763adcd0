//! Typed access to the launcher's version manifest and version documents.
//!
//! ```no_run
//! use launchermeta::prelude::*;
//!
//! # fn main() -> launchermeta::Result<()> {
//! let manifest = parse_manifest(std::fs::read("version_manifest_v2.json")?)?;
//! let version = parse_version(std::fs::read("1.17.1.json")?)?;
//!
//! let env = Environment::current();
//! for library in version.libraries_for(&env) {
//!     println!("{}", library.name);
//! }
//! println!("latest release: {}", manifest.latest_versions.release);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod json;
pub mod minecraft;
pub mod prelude;
pub mod util;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
