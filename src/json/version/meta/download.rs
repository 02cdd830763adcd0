use serde::{Deserialize, Serialize};

/// The fields every downloadable file carries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DownloadableFile {
    pub sha1: String,
    pub size: u64,
    pub url: String,
}

/// A file stored under a repository-relative path, used for library artifacts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PathDownload {
    pub path: String,
    #[serde(flatten)]
    pub file: DownloadableFile,
}

/// A file known by an id, used for the logging configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IdDownload {
    pub id: String,
    #[serde(flatten)]
    pub file: DownloadableFile,
}

/// Top-level game jars and mappings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Downloads {
    pub client: DownloadableFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_mappings: Option<DownloadableFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<DownloadableFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_mappings: Option<DownloadableFile>,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::DownloadableFile {}
    impl Sealed for super::PathDownload {}
    impl Sealed for super::IdDownload {}
    impl Sealed for super::Download<'_> {}
}

/// Uniform read access to anything that can be fetched and checked.
pub trait Downloadable: sealed::Sealed {
    fn file(&self) -> &DownloadableFile;

    fn sha1(&self) -> &str {
        &self.file().sha1
    }

    fn size(&self) -> u64 {
        self.file().size
    }

    fn url(&self) -> &str {
        &self.file().url
    }
}

impl Downloadable for DownloadableFile {
    fn file(&self) -> &DownloadableFile {
        self
    }
}

impl Downloadable for PathDownload {
    fn file(&self) -> &DownloadableFile {
        &self.file
    }
}

impl Downloadable for IdDownload {
    fn file(&self) -> &DownloadableFile {
        &self.file
    }
}

/// One of the two download variants. Which one a slot holds is fixed by the
/// slot, never by the JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Download<'a> {
    Path(&'a PathDownload),
    Id(&'a IdDownload),
}

impl<'a> Download<'a> {
    /// The path for artifacts, the id for logging files.
    pub fn name(&self) -> &'a str {
        match self {
            Download::Path(d) => &d.path,
            Download::Id(d) => &d.id,
        }
    }
}

impl Downloadable for Download<'_> {
    fn file(&self) -> &DownloadableFile {
        match self {
            Download::Path(d) => &d.file,
            Download::Id(d) => &d.file,
        }
    }
}
