use launchermeta::prelude::*;
use serde_json::Value;

const LEGACY: &str = include_str!("fixtures/version_1.12.2.json");
const MODERN: &str = include_str!("fixtures/version_1.17.1.json");
const MANIFEST: &str = include_str!("fixtures/version_manifest_v2.json");

fn tree(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn documents_round_trip_with_compact_arguments() {
    let codec = Codec::new().with_argument_style(ArgumentStyle::Compact);

    for text in [LEGACY, MODERN] {
        let version: Version = codec.decode(text).unwrap();
        assert_eq!(codec.encode_value(&version).unwrap(), tree(text));
    }

    let manifest: VersionManifest = codec.decode(MANIFEST).unwrap();
    assert_eq!(codec.encode_value(&manifest).unwrap(), tree(MANIFEST));
}

#[test]
fn verbose_encoding_decodes_to_the_same_version() {
    let codec = Codec::default();
    let version = parse_version(MODERN).unwrap();

    let verbose = codec.encode_string(&version).unwrap();
    assert_ne!(tree(&verbose), tree(MODERN));
    assert_eq!(parse_version(verbose).unwrap(), version);
}

#[test]
fn manifest_entries() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    assert_eq!(manifest.versions.len(), 4);
    assert_eq!(manifest.latest_release().unwrap().id, "1.17.1");
    assert_eq!(manifest.latest_snapshot().unwrap().compliance_level, Some(1));

    let releases: Vec<&str> = manifest.releases().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(releases, ["1.17.1", "1.12.2"]);
    assert_eq!(manifest.find("b1.7.3").unwrap().version_type, "old_beta");
}

#[test]
fn legacy_document() {
    let version = parse_version(LEGACY).unwrap();
    assert!(version.is_legacy());
    assert!(version.arguments.is_none());
    assert!(version.java_version.is_none());
    assert!(version.compliance_level.is_none());
    assert!(version.downloads.client_mappings.is_none());
    assert_eq!(version.minimum_launcher_version, 18);

    let windows = Environment::new("windows", "10.0", "x86_64");
    let game = version.game_arguments(&windows);
    assert_eq!(game.len(), 18);
    assert_eq!(game[..2], ["--username", "${auth_player_name}"]);
    assert!(version.jvm_arguments(&windows).is_empty());
}

#[test]
fn legacy_libraries_per_platform() {
    let version = parse_version(LEGACY).unwrap();

    let names = |env: &Environment| -> Vec<String> {
        version.libraries_for(env).map(|lib| lib.name.clone()).collect()
    };

    assert_eq!(names(&Environment::new("windows", "10.0", "x86_64")).len(), 4);
    assert_eq!(
        names(&Environment::new("osx", "10.15.7", "x86_64")),
        [
            "com.mojang:patchy:1.3.9",
            "org.lwjgl.lwjgl:lwjgl-platform:2.9.4-nightly-20150209",
            "tv.twitch:twitch-platform:6.5"
        ]
    );
    assert_eq!(
        names(&Environment::new("linux", "5.15", "x86_64")),
        [
            "com.mojang:patchy:1.3.9",
            "org.lwjgl.lwjgl:lwjgl:2.9.4-nightly-20150209",
            "org.lwjgl.lwjgl:lwjgl-platform:2.9.4-nightly-20150209"
        ]
    );
}

#[test]
fn legacy_downloads_resolve_natives() {
    let version = parse_version(LEGACY).unwrap();
    let env = Environment::new("windows", "10.0", "x86_64");

    let names: Vec<&str> = version.downloads_for(&env).iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        [
            "com/mojang/patchy/1.3.9/patchy-1.3.9.jar",
            "org/lwjgl/lwjgl/lwjgl/2.9.4-nightly-20150209/lwjgl-2.9.4-nightly-20150209.jar",
            "org/lwjgl/lwjgl/lwjgl-platform/2.9.4-nightly-20150209/lwjgl-platform-2.9.4-nightly-20150209-natives-windows.jar",
            "tv/twitch/twitch-platform/6.5/twitch-platform-6.5-natives-windows-64.jar",
            "client-1.12.xml",
        ]
    );

    let logging = version.downloads_for(&env).pop().unwrap();
    assert!(matches!(logging, Download::Id(_)));
    assert_eq!(logging.size(), 888);
}

#[test]
fn modern_jvm_arguments_per_platform() {
    let version = parse_version(MODERN).unwrap();
    let tail = ["-Djava.library.path=${natives_directory}", "-cp", "${classpath}"];

    let windows = version.jvm_arguments(&Environment::new("windows", "10.0", "x86_64"));
    assert_eq!(windows.len(), 6);
    assert!(windows[0].starts_with("-XX:HeapDumpPath="));
    assert_eq!(windows[1..3], ["-Dos.name=Windows 10", "-Dos.version=10.0"]);
    assert_eq!(windows[3..], tail);

    let windows_7_x86 = version.jvm_arguments(&Environment::new("windows", "6.1", "x86"));
    assert_eq!(windows_7_x86.len(), 5);
    assert_eq!(windows_7_x86[1], "-Xss1M");

    let osx = version.jvm_arguments(&Environment::new("osx", "10.15.7", "x86_64"));
    assert_eq!(osx[0], "-XstartOnFirstThread");
    assert_eq!(osx[1..], tail);
}

#[test]
fn modern_game_arguments_follow_features() {
    let version = parse_version(MODERN).unwrap();
    let env = Environment::new("linux", "5.15", "x86_64");
    assert_eq!(version.game_arguments(&env).len(), 6);

    let resolution = env.clone().with_features(FeatureSet {
        has_custom_resolution: true,
        ..FeatureSet::default()
    });
    let game = version.game_arguments(&resolution);
    assert_eq!(game.len(), 10);
    assert_eq!(game[6..], ["--width", "${resolution_width}", "--height", "${resolution_height}"]);

    let demo = env.with_features(FeatureSet {
        is_demo_user: true,
        ..FeatureSet::default()
    });
    assert_eq!(version.game_arguments(&demo).last(), Some(&"--demo"));
}

#[test]
fn modern_document_fields() {
    let version = parse_version(MODERN).unwrap();
    assert!(!version.is_legacy());
    assert_eq!(version.compliance_level, Some(1));
    assert_eq!(version.java_version.as_ref().unwrap().major_version, 16);
    assert_eq!(version.asset_index.total_size, Some(346747591));
    assert!(version.downloads.server_mappings.is_some());
    assert_eq!(version.logging.as_ref().unwrap().client.logging_type, "log4j2-xml");

    for library in &version.libraries {
        let coordinate = library.coordinate().unwrap();
        if let Some(artifact) = &library.downloads.artifact {
            if coordinate.classifier.as_deref() != Some("natives") {
                assert_eq!(coordinate.path(), artifact.path);
            }
        }
    }
}

#[test]
fn modern_libraries_and_natives_on_osx() {
    let version = parse_version(MODERN).unwrap();
    let env = Environment::new("osx", "10.15.7", "x86_64");

    assert_eq!(version.libraries_for(&env).count(), 4);

    let downloads = version.downloads_for(&env);
    assert_eq!(downloads.len(), 6);
    assert_eq!(
        downloads[4].name(),
        "org/lwjgl/lwjgl/3.2.1/lwjgl-3.2.1-natives-macos.jar"
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let mut tree = tree(MODERN);
    tree["someFutureKey"] = serde_json::json!({ "nested": true });
    tree["libraries"][5]["downloads"]["classifiers"]["natives-solaris"] =
        tree["libraries"][5]["downloads"]["classifiers"]["sources"].clone();

    let version: Version = Codec::default().decode_value(tree).unwrap();
    assert_eq!(version, parse_version(MODERN).unwrap());
}

#[test]
fn codec_is_shareable_across_threads() {
    let codec = Codec::new().with_argument_style(ArgumentStyle::Compact);

    let handles: Vec<_> = [LEGACY, MODERN]
        .into_iter()
        .map(|text| std::thread::spawn(move || codec.decode::<Version>(text).map(|v| v.id)))
        .collect();

    let ids: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert_eq!(ids, ["1.12.2", "1.17.1"]);
}
