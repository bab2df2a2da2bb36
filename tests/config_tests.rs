//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uni_graph::config::{Config, ConfigOverrides};

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.render.image.is_empty(),
        "Default portrait image should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[render]
image = "./portrait.png"
zoom = 0.25
seed = 7
open_viewer = false

[paths]
out_dir = "./diagrams"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.render.image, "./portrait.png");
    assert!((config.render.zoom - 0.25).abs() < f32::EPSILON);
    assert_eq!(config.render.seed, 7);
    assert!(!config.render.open_viewer);
    assert_eq!(config.paths.out_dir, "./diagrams");
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[render]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert!((config.render.zoom - 0.1).abs() < f32::EPSILON); // Default zoom
    assert_eq!(config.render.seed, 42); // Default seed
    assert!(config.render.open_viewer); // Default true
}

#[test]
fn test_config_from_toml_missing_sections() {
    // Render and paths sections are optional entirely
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML without sections");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.render.seed, 42);
    assert_eq!(config.paths.out_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$UNI_GRAPH/test.log"

[render]
image = "$UNI_GRAPH/portrait.jpg"

[paths]
out_dir = "$UNI_GRAPH/out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("unigraph"));
    assert!(!config.logging.file.contains("$UNI_GRAPH"));
    assert!(config.render.image.contains("unigraph"));
    assert!(!config.render.image.contains("$UNI_GRAPH"));
    assert!(config.paths.out_dir.contains("unigraph"));
    assert!(!config.paths.out_dir.contains("$UNI_GRAPH"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("seed", "99").expect("Failed to set seed");
    assert_eq!(config.render.seed, 99);

    config.set("zoom", "0.5").expect("Failed to set zoom");
    assert!((config.render.zoom - 0.5).abs() < f32::EPSILON);

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("seed", "not_a_number").is_err());
    assert!(config.set("zoom", "big").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("open_viewer", "1").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("level", "error").expect("Failed to set level");
    assert_eq!(config.logging.level, "error");

    // Unset should restore default
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    assert_eq!(config.logging.level, defaults.logging.level);

    config.set("seed", "7").expect("Failed to set seed");
    config.unset("seed", &defaults).expect("Failed to unset seed");
    assert_eq!(config.render.seed, defaults.render.seed);
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        out_dir: Some("./custom_out".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "./custom_out");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original_out_dir = config.paths.out_dir.clone();

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: None,
        verbose: None,
        out_dir: None,
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.out_dir, original_out_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[render]"));
    assert!(display_str.contains("[paths]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("zoom"));
    assert!(display_str.contains("seed"));
    assert!(display_str.contains("out_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[render]
image = ""

[paths]
out_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.render.image, defaults.render.image);
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[render]
image = "./me.png"

[paths]
out_dir = "./somewhere"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.render.image, "./me.png");
    assert_eq!(config.paths.out_dir, "./somewhere");
}

#[test]
fn test_get_unigraph_dir() {
    let dir = Config::get_unigraph_dir();

    // Should contain "unigraph" in the path
    assert!(dir.to_string_lossy().contains("unigraph"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
