pub use crate::{
    error::{ArgumentSection, DocumentKind, Error},
    json::{
        codec::{parse_manifest, parse_version, ArgumentStyle, Codec, Document},
        version::{
            asset_index::AssetIndex,
            manifest::{LatestVersions, VersionEntry, VersionManifest},
            meta::{
                arguments::{Argument, ArgumentError, Arguments},
                download::{Download, Downloadable, DownloadableFile, Downloads, IdDownload, PathDownload},
                java::JavaVersion,
                library::{Classifiers, Extract, Library, LibraryDownloads, Natives},
                logging::{Logging, LoggingInstance},
                rule::{Action, Features, Os, Rule},
                Version,
            },
        },
    },
    minecraft::{
        parse::MavenCoordinate,
        rules::{Environment, FeatureSet, ParseRule},
    },
    Result,
};
