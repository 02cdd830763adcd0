use serde::{Deserialize, Serialize};

use crate::{error::Error, util::hash::sha1_hex};

/// The index of every published game version.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VersionManifest {
    #[serde(rename = "latest")]
    pub latest_versions: LatestVersions,

    #[serde(rename = "versions")]
    pub versions: Vec<VersionEntry>,
}

/// Ids of the newest release and snapshot, pointing into [`VersionManifest::versions`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LatestVersions {
    #[serde(rename = "release")]
    pub release: String,

    #[serde(rename = "snapshot")]
    pub snapshot: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VersionEntry {
    #[serde(rename = "id")]
    pub id: String,

    #[serde(rename = "type")]
    pub version_type: String,

    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "time")]
    pub time: String,

    #[serde(rename = "releaseTime")]
    pub release_time: String,

    /// Only present in the v2 manifest.
    #[serde(rename = "sha1")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,

    /// Only present in the v2 manifest.
    #[serde(rename = "complianceLevel")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<i32>,
}

impl VersionManifest {
    /// Find a version entry by id (e.g. "1.20.4").
    pub fn find(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.id == id)
    }

    pub fn latest_release(&self) -> Option<&VersionEntry> {
        self.find(&self.latest_versions.release)
    }

    pub fn latest_snapshot(&self) -> Option<&VersionEntry> {
        self.find(&self.latest_versions.snapshot)
    }

    /// All entries of type `release`, in manifest order.
    pub fn releases(&self) -> Vec<&VersionEntry> {
        self.versions.iter().filter(|v| v.is_release()).collect()
    }
}

impl VersionEntry {
    pub fn is_release(&self) -> bool {
        self.version_type == "release"
    }

    /// Checks downloaded version document bytes against the entry's `sha1`.
    ///
    /// Entries from the v1 manifest carry no checksum and always pass.
    pub fn verify(&self, bytes: &[u8]) -> crate::Result<()> {
        let Some(expected) = &self.sha1 else {
            return Ok(());
        };

        let actual = sha1_hex(bytes);
        if actual.eq_ignore_ascii_case(expected) {
            Ok(())
        } else {
            Err(Error::ChecksumMismatch {
                id: self.id.clone(),
                expected: expected.clone(),
                actual,
            })
        }
    }
}
