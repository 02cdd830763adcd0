use std::{io::Read, str::FromStr};

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{ArgumentSection, DocumentKind, Error};

use super::version::{
    manifest::VersionManifest,
    meta::{
        arguments::{self, Argument},
        Version,
    },
};

/// How [`Argument`]s are written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentStyle {
    /// Always `{"rules": [...], "value": [...]}`.
    #[default]
    Verbose,
    /// A bare string when there are no rules and a single value. Otherwise
    /// an object with a single value written as a string and empty rules left
    /// out.
    Compact,
}

/// Decoder and encoder for launcher meta documents.
///
/// A `Codec` carries only its settings, so it can be copied freely and used
/// from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    pub argument_style: ArgumentStyle,
    /// Drop arguments with an unrecognized shape instead of failing the
    /// whole document.
    pub skip_unrecognized_arguments: bool,
}

/// A top-level document the [`Codec`] knows how to read and write.
pub trait Document: Serialize + DeserializeOwned {
    const KIND: DocumentKind;

    /// Checks or rewrites the raw tree before typed mapping.
    fn prepare(_tree: &mut Value, _codec: &Codec) -> crate::Result<()> {
        Ok(())
    }

    /// Rewrites the encoded tree according to the codec settings.
    fn finish(_tree: &mut Value, _codec: &Codec) {}

    /// One line describing the decoded document, for logs.
    fn summary(&self) -> String;
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument_style(mut self, style: ArgumentStyle) -> Self {
        self.argument_style = style;
        self
    }

    pub fn with_skip_unrecognized_arguments(mut self, skip: bool) -> Self {
        self.skip_unrecognized_arguments = skip;
        self
    }

    /// Decodes a document from UTF-8 JSON bytes or text.
    pub fn decode<D: Document>(&self, input: impl AsRef<[u8]>) -> crate::Result<D> {
        let tree: Value = serde_json::from_slice(input.as_ref()).map_err(|source| Error::Syntax {
            kind: D::KIND,
            source,
        })?;
        self.decode_value(tree)
    }

    pub fn decode_reader<D: Document>(&self, mut reader: impl Read) -> crate::Result<D> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        self.decode(buffer)
    }

    /// Maps an already parsed JSON tree onto the typed model.
    pub fn decode_value<D: Document>(&self, mut tree: Value) -> crate::Result<D> {
        D::prepare(&mut tree, self)?;
        let document: D = serde_json::from_value(tree).map_err(|source| Error::MalformedDocument {
            kind: D::KIND,
            source,
        })?;
        debug!("Decoded {} document: {}", D::KIND, document.summary());
        Ok(document)
    }

    pub fn encode_value<D: Document>(&self, document: &D) -> crate::Result<Value> {
        let mut tree = serde_json::to_value(document).map_err(Error::Serialize)?;
        D::finish(&mut tree, self);
        Ok(tree)
    }

    pub fn encode_string<D: Document>(&self, document: &D) -> crate::Result<String> {
        let tree = self.encode_value(document)?;
        serde_json::to_string(&tree).map_err(Error::Serialize)
    }

    pub fn decode_manifest(&self, input: impl AsRef<[u8]>) -> crate::Result<VersionManifest> {
        self.decode(input)
    }

    pub fn decode_version(&self, input: impl AsRef<[u8]>) -> crate::Result<Version> {
        self.decode(input)
    }
}

impl Document for VersionManifest {
    const KIND: DocumentKind = DocumentKind::Manifest;

    fn summary(&self) -> String {
        format!(
            "{} versions, latest release {}, latest snapshot {}",
            self.versions.len(),
            self.latest_versions.release,
            self.latest_versions.snapshot
        )
    }
}

impl Document for Version {
    const KIND: DocumentKind = DocumentKind::Version;

    fn prepare(tree: &mut Value, codec: &Codec) -> crate::Result<()> {
        let Some(sections) = tree.get_mut("arguments").and_then(Value::as_object_mut) else {
            return Ok(());
        };

        for section in ArgumentSection::ALL {
            let Some(Value::Array(nodes)) = sections.get_mut(section.key()) else {
                continue;
            };

            let mut kept = Vec::with_capacity(nodes.len());
            for (index, node) in std::mem::take(nodes).into_iter().enumerate() {
                match Argument::from_value(&node) {
                    Err(source) if source.is_shape() => {
                        if !codec.skip_unrecognized_arguments {
                            return Err(Error::UnrecognizedArgumentShape {
                                section,
                                index,
                                source,
                            });
                        }
                        warn!("Skipping arguments.{}[{}]: {}", section, index, source);
                    }
                    _ => kept.push(node),
                }
            }
            *nodes = kept;
        }

        Ok(())
    }

    fn finish(tree: &mut Value, codec: &Codec) {
        if codec.argument_style != ArgumentStyle::Compact {
            return;
        }

        let Some(sections) = tree.get_mut("arguments").and_then(Value::as_object_mut) else {
            return;
        };

        for section in ArgumentSection::ALL {
            if let Some(Value::Array(nodes)) = sections.get_mut(section.key()) {
                nodes.iter_mut().for_each(arguments::compact);
            }
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} ({}), {} libraries, {} arguments",
            self.id,
            self.version_type,
            self.libraries.len(),
            if self.arguments.is_some() { "modern" } else { "legacy" }
        )
    }
}

/// Decodes a version manifest with the default [`Codec`].
pub fn parse_manifest(input: impl AsRef<[u8]>) -> crate::Result<VersionManifest> {
    Codec::default().decode(input)
}

/// Decodes a version document with the default [`Codec`].
pub fn parse_version(input: impl AsRef<[u8]>) -> crate::Result<Version> {
    Codec::default().decode(input)
}

impl FromStr for VersionManifest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_manifest(s)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}
