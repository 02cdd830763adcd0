use core::fmt;
use std::io;

use crate::{http::error::HttpError, json::version::meta::arguments::ArgumentError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid JSON in {kind} document : {source}")]
    Syntax {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed {kind} document : {source}")]
    MalformedDocument {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unrecognized argument shape at arguments.{section}[{index}] : {source}")]
    UnrecognizedArgumentShape {
        section: ArgumentSection,
        index: usize,
        #[source]
        source: ArgumentError,
    },
    #[error("Serialize error occured : {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("IO Error occured : {0}")]
    Io(#[from] io::Error),
    #[error("Invalid library coordinate : {0}")]
    InvalidCoordinate(String),
    #[error("Checksum mismatch for {id} : expected {expected}, got {actual}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl Error {
    /// Whether the document itself is at fault, as opposed to the transport.
    ///
    /// An unrecognized argument counts as a malformed document.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MalformedDocument { .. } | Error::UnrecognizedArgumentShape { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Manifest,
    Version,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Manifest => write!(f, "version manifest"),
            DocumentKind::Version => write!(f, "version"),
        }
    }
}

/// Which list of `arguments` a node was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentSection {
    Game,
    Jvm,
}

impl ArgumentSection {
    pub const ALL: [ArgumentSection; 2] = [ArgumentSection::Game, ArgumentSection::Jvm];

    pub fn key(&self) -> &'static str {
        match self {
            ArgumentSection::Game => "game",
            ArgumentSection::Jvm => "jvm",
        }
    }
}

impl fmt::Display for ArgumentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
