use serde::{Deserialize, Serialize};

use crate::minecraft::{parse::MavenCoordinate, rules::Environment};

use super::{download::PathDownload, rule::Rule};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub downloads: LibraryDownloads,
    /// Maven coordinate, `group:artifact:version[:classifier]`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives: Option<Natives>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<Extract>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl Library {
    pub fn coordinate(&self) -> crate::Result<MavenCoordinate> {
        self.name.parse()
    }

    /// Classifier holding this library's natives for `env`, with `${arch}`
    /// replaced.
    pub fn native_classifier(&self, env: &Environment) -> Option<String> {
        let natives = self.natives.as_ref()?;
        let classifier = natives.for_os(&env.os_name)?;
        Some(classifier.replace("${arch}", env.native_arch()))
    }

    /// The natives archive to fetch for `env`, if this library has one.
    pub fn native_download(&self, env: &Environment) -> Option<&PathDownload> {
        let classifier = self.native_classifier(env)?;
        let classifiers = self.downloads.classifiers.as_ref()?;
        match classifier.as_str() {
            "natives-osx" | "natives-macos" => classifiers.natives_mac(),
            other => classifiers.get(other),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LibraryDownloads {
    /// Absent on libraries that only ship natives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathDownload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<Classifiers>,
}

/// Classified artifacts of a library. Keys outside this set are dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Classifiers {
    #[serde(rename = "javadoc")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<PathDownload>,

    #[serde(rename = "natives-linux")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_linux: Option<PathDownload>,

    #[serde(rename = "linux-x86_64")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_x86_64: Option<PathDownload>,

    #[serde(rename = "natives-macos")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_macos: Option<PathDownload>,

    #[serde(rename = "natives-osx")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_osx: Option<PathDownload>,

    #[serde(rename = "natives-windows")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_windows: Option<PathDownload>,

    #[serde(rename = "natives-windows-32")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_windows_32: Option<PathDownload>,

    #[serde(rename = "natives-windows-64")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives_windows_64: Option<PathDownload>,

    #[serde(rename = "sources")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<PathDownload>,
}

impl Classifiers {
    /// Looks a slot up by its wire key, e.g. `natives-windows-64`.
    pub fn get(&self, key: &str) -> Option<&PathDownload> {
        match key {
            "javadoc" => self.javadoc.as_ref(),
            "natives-linux" => self.natives_linux.as_ref(),
            "linux-x86_64" => self.linux_x86_64.as_ref(),
            "natives-macos" => self.natives_macos.as_ref(),
            "natives-osx" => self.natives_osx.as_ref(),
            "natives-windows" => self.natives_windows.as_ref(),
            "natives-windows-32" => self.natives_windows_32.as_ref(),
            "natives-windows-64" => self.natives_windows_64.as_ref(),
            "sources" => self.sources.as_ref(),
            _ => None,
        }
    }

    /// macOS natives, under either the current or the legacy key.
    pub fn natives_mac(&self) -> Option<&PathDownload> {
        self.natives_macos.as_ref().or(self.natives_osx.as_ref())
    }
}

/// Classifier name to use per OS. May contain `${arch}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Natives {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
}

impl Natives {
    pub fn for_os(&self, os_name: &str) -> Option<&str> {
        match os_name {
            "osx" => self.osx.as_deref(),
            "linux" => self.linux.as_deref(),
            "windows" => self.windows.as_deref(),
            _ => None,
        }
    }
}

/// Paths to skip when unpacking a natives archive.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Extract {
    #[serde(default)]
    pub exclude: Vec<String>,
}
