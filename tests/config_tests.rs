//! Tests for the type-safe configuration builder pattern

use docscrape::config::ScrapeConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod common;

#[tokio::test]
async fn test_builder_requires_output_path_and_url() {
    // This should not compile if uncommented - testing compile-time guarantees
    // let config = ScrapeConfig::builder().build();

    // This should also not compile - missing url
    // let config = ScrapeConfig::builder()
    //     .output_path(PathBuf::from("/tmp/out.txt"))
    //     .build();

    // This SHOULD compile - both required fields provided
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("content.txt");
    let config = ScrapeConfig::builder()
        .output_path(output.clone())
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    assert_eq!(config.output_path(), output.as_path());
    assert_eq!(config.url(), "https://docs.example.com/api");
}

#[tokio::test]
async fn test_builder_optional_fields_have_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    // Check defaults
    assert_eq!(config.request_timeout_secs(), 30);
    assert_eq!(config.render_timeout_secs(), 20);
    assert_eq!(config.settle_delay_secs(), 3);
    assert_eq!(config.preview_chars(), 1000);
    assert_eq!(config.max_links(), 20);
    assert!(config.headless());
    assert!(!config.save_raw_html());
    assert!(!config.save_links());
    assert!(config.chrome_data_dir().is_none());
}

#[tokio::test]
async fn test_builder_with_all_optional_fields() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .request_timeout_secs(5)
        .render_timeout_secs(8)
        .settle_delay_secs(1)
        .preview_chars(200)
        .headless(false)
        .save_raw_html(true)
        .save_links(true)
        .max_links(5)
        .build()
        .unwrap();

    assert_eq!(config.request_timeout_secs(), 5);
    assert_eq!(config.render_timeout_secs(), 8);
    assert_eq!(config.settle_delay_secs(), 1);
    assert_eq!(config.preview_chars(), 200);
    assert_eq!(config.max_links(), 5);
    assert!(config.save_raw_html());
    assert!(config.save_links());
    // Headed mode only survives in debug builds
    #[cfg(debug_assertions)]
    assert!(!config.headless());
}

#[tokio::test]
async fn test_builder_field_override() {
    let temp_dir = TempDir::new().unwrap();

    // Test that we can override fields multiple times
    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .render_timeout_secs(5)
        .render_timeout_secs(15) // Override previous value
        .save_links(true)
        .save_links(false) // Override previous value
        .build()
        .unwrap();

    assert_eq!(config.render_timeout_secs(), 15);
    assert!(!config.save_links());
}

#[tokio::test]
async fn test_url_normalization_in_builder() {
    let temp_dir = TempDir::new().unwrap();

    // Test various URL formats
    let test_cases = vec![
        ("docs.example.com", "https://docs.example.com"),
        ("http://docs.example.com", "http://docs.example.com"),
        ("https://docs.example.com", "https://docs.example.com"),
        ("https://docs.example.com/", "https://docs.example.com/"),
        ("https://docs.example.com/path", "https://docs.example.com/path"),
    ];

    for (input, expected) in test_cases {
        let config = ScrapeConfig::builder()
            .output_path(temp_dir.path().join("content.txt"))
            .url(input)
            .build()
            .unwrap();

        assert_eq!(config.url(), expected);
    }
}

#[tokio::test]
async fn test_sibling_output_paths_derive_from_output_path() {
    let config = ScrapeConfig::builder()
        .output_path(PathBuf::from("/tmp/scrape/api-content.txt"))
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    assert_eq!(
        config.html_output_path(),
        PathBuf::from("/tmp/scrape/api-content.html")
    );
    assert_eq!(
        config.links_output_path(),
        PathBuf::from("/tmp/scrape/api-content.json")
    );
}

#[tokio::test]
async fn test_default_config_targets_fixed_page() {
    let config = ScrapeConfig::default();

    assert!(config.url().starts_with("https://docs-cortex.paloaltonetworks.com/"));
    assert_eq!(
        config.output_path(),
        Path::new("cortex-cloud-onboarding-api-content.txt")
    );
    assert_eq!(config.request_timeout_secs(), 30);
    assert_eq!(config.render_timeout_secs(), 20);
    assert_eq!(config.settle_delay_secs(), 3);
    assert!(config.headless());
    assert!(!config.save_raw_html());
    assert!(!config.save_links());
}

#[tokio::test]
async fn test_chrome_data_dir_attaches_after_build() {
    let temp_dir = TempDir::new().unwrap();
    let profile_dir = temp_dir.path().join("profile");

    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .build()
        .unwrap()
        .with_chrome_data_dir(profile_dir.clone());

    assert_eq!(config.chrome_data_dir(), Some(&profile_dir));
}

#[tokio::test]
async fn test_config_serialization() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    // Test that we can serialize to JSON (config has Serialize trait)
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("https://docs.example.com/api"));

    // Test deserialization
    let _deserialized: ScrapeConfig = serde_json::from_str(&json).unwrap();
}

#[tokio::test]
async fn test_config_debug_trait() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .output_path(temp_dir.path().join("content.txt"))
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    // Test that Debug trait is implemented
    let debug_str = format!("{config:?}");
    assert!(debug_str.contains("ScrapeConfig"));
    assert!(debug_str.contains("output_path"));
    assert!(debug_str.contains("url"));
}

#[tokio::test]
async fn test_builder_state_transitions() {
    // This test verifies the type-state pattern works correctly
    let temp_dir = TempDir::new().unwrap();

    // Create builder in initial state
    let builder = ScrapeConfig::builder();

    // After setting output_path, we should be in WithOutputPath state
    let builder_with_output = builder.output_path(temp_dir.path().join("content.txt"));

    // After setting url, we should be able to build
    let _config = builder_with_output
        .url("https://docs.example.com/api")
        .build()
        .unwrap();

    // The above should compile and work correctly
}
