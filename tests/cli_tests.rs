//! CLI tests: argument parsing and the load → export pipeline.

use clap::Parser;
use layerconf::cli::{Cli, Commands, EXIT_UNSUPPORTED, EXIT_WRITE_FAILED, defaults_listing, run};
use layerconf::settings::{BoolMeta, Layer, SettingKind, SettingMeta, SettingView, Version};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LAYER_YAML: &str = r#"
key: VK_LAYER_KHRONOS_validation
api_version: "1.3.250"
settings:
  - key: core
    label: Core
    type: GROUP
    settings:
      - key: enable_foo
        label: Enable Foo
        type: BOOL
        default: true
      - key: debug_knob
        label: Debug Knob
        type: INT
        default: 3
        view: HIDDEN
  - key: severity
    label: Severity
    type: FLAGS
    default: [error, warn]
presets:
  - label: Quiet
    settings:
      - key: enable_foo
        type: BOOL
        value: false
"#;

fn write_layer(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("validation.yaml");
    fs::write(&path, LAYER_YAML).unwrap();
    path
}

#[test]
fn parses_html_command_with_output() {
    let cli = Cli::try_parse_from([
        "layerconf",
        "--log-level",
        "debug",
        "html",
        "layer.json",
        "-o",
        "out.html",
    ])
    .unwrap();

    assert_eq!(cli.log_level, Some(log::LevelFilter::Debug));
    match cli.command {
        Commands::Html { layer_file, output } => {
            assert_eq!(layer_file, Path::new("layer.json"));
            assert_eq!(output.as_deref(), Some(Path::new("out.html")));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn rejects_unknown_log_level() {
    assert!(Cli::try_parse_from(["layerconf", "--log-level", "loud", "defaults", "x.json"]).is_err());
}

#[test]
fn html_command_writes_document() {
    let dir = TempDir::new().unwrap();
    let layer_file = write_layer(dir.path());
    let output = dir.path().join("doc.html");

    let cli = Cli::try_parse_from([
        "layerconf",
        "html",
        layer_file.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(run(&cli).unwrap(), 0);
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("khronos_validation.enable_foo"));
    assert!(doc.contains("<h3>Quiet</h3>"));
    assert!(!doc.contains("debug_knob"));
}

#[test]
fn html_command_maps_write_failure_to_exit_code() {
    let dir = TempDir::new().unwrap();
    let layer_file = write_layer(dir.path());
    let output = dir.path().join("missing_dir").join("doc.html");

    let cli = Cli::try_parse_from([
        "layerconf",
        "html",
        layer_file.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(run(&cli).unwrap(), EXIT_WRITE_FAILED);
}

#[test]
fn settings_doc_command_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let layer_file = write_layer(dir.path());
    let output = dir.path().join("settings.txt");

    let cli = Cli::try_parse_from([
        "layerconf",
        "settings-doc",
        layer_file.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(run(&cli).unwrap(), EXIT_UNSUPPORTED);
    assert!(!output.exists());
}

#[test]
fn missing_layer_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let cli = Cli::try_parse_from(["layerconf", "defaults", missing.to_str().unwrap()]).unwrap();
    let err = run(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load layer"));
}

#[test]
fn defaults_listing_skips_groups_and_hidden_settings() {
    let dir = TempDir::new().unwrap();
    let layer = Layer::load(&write_layer(dir.path())).unwrap();

    assert_eq!(
        defaults_listing(&layer),
        vec![
            "khronos_validation.enable_foo = TRUE".to_string(),
            "khronos_validation.severity = error,warn".to_string(),
        ]
    );
}

#[test]
fn defaults_listing_includes_children_of_hidden_settings() {
    let layer = Layer::new("VK_LAYER_test", Version::new(1, 3, 0)).with_settings(vec![
        SettingMeta::new("parent", SettingKind::Bool(BoolMeta { default_value: false }))
            .with_view(SettingView::Hidden)
            .with_children(vec![SettingMeta::new(
                "child",
                SettingKind::Bool(BoolMeta { default_value: true }),
            )]),
    ]);

    assert_eq!(defaults_listing(&layer), vec!["test.child = TRUE".to_string()]);
}
