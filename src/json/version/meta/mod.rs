pub mod arguments;
pub mod download;
pub mod java;
pub mod library;
pub mod logging;
pub mod rule;

use serde::{Deserialize, Serialize};

use crate::minecraft::rules::{Environment, ParseRule};

use self::{
    arguments::Arguments,
    download::{Download, Downloads},
    java::JavaVersion,
    library::Library,
    logging::Logging,
};
use super::asset_index::AssetIndex;

/// A single version document.
///
/// `arguments` replaced `minecraft_arguments` in 1.13. Documents normally carry
/// exactly one of them, but nothing here enforces that: some transitional
/// documents ship both, and both are kept as found.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minecraft_arguments: Option<String>,
    pub asset_index: AssetIndex,
    pub assets: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<i32>,
    pub downloads: Downloads,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<JavaVersion>,
    pub libraries: Vec<Library>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
    pub main_class: String,
    pub minimum_launcher_version: i32,
    pub release_time: String,
    pub time: String,
    #[serde(rename = "type")]
    pub version_type: String,
}

impl Version {
    /// True for documents that only use the single-string argument format.
    pub fn is_legacy(&self) -> bool {
        self.arguments.is_none() && self.minecraft_arguments.is_some()
    }

    /// Libraries whose rules allow them in `env`, in document order.
    pub fn libraries_for<'a>(&'a self, env: &'a Environment) -> impl Iterator<Item = &'a Library> {
        self.libraries.iter().filter(move |lib| lib.is_allowed(env))
    }

    /// Game arguments in effect for `env`, placeholders left untouched.
    ///
    /// Legacy documents are split on whitespace.
    pub fn game_arguments(&self, env: &Environment) -> Vec<&str> {
        match (&self.arguments, &self.minecraft_arguments) {
            (Some(arguments), _) => arguments
                .game
                .iter()
                .filter(|arg| arg.is_allowed(env))
                .flat_map(|arg| arg.value.iter().map(String::as_str))
                .collect(),
            (None, Some(legacy)) => legacy.split_whitespace().collect(),
            (None, None) => Vec::new(),
        }
    }

    /// JVM arguments in effect for `env`. Legacy documents have none.
    pub fn jvm_arguments(&self, env: &Environment) -> Vec<&str> {
        self.arguments
            .iter()
            .flat_map(|arguments| arguments.jvm.iter())
            .filter(|arg| arg.is_allowed(env))
            .flat_map(|arg| arg.value.iter().map(String::as_str))
            .collect()
    }

    /// Every library artifact, native and logging file needed in `env`.
    pub fn downloads_for<'a>(&'a self, env: &'a Environment) -> Vec<Download<'a>> {
        let mut downloads = Vec::new();

        for lib in self.libraries_for(env) {
            if let Some(artifact) = &lib.downloads.artifact {
                downloads.push(Download::Path(artifact));
            }
            if let Some(native) = lib.native_download(env) {
                downloads.push(Download::Path(native));
            }
        }

        if let Some(logging) = &self.logging {
            downloads.push(Download::Id(&logging.client.file));
        }

        downloads
    }
}
