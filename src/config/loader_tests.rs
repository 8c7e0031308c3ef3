//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_app_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("country-browser") && path_str.ends_with("config.toml"),
            "Path should contain 'country-browser' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_log_file_name() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("country-browser.log"),
        "got: {:?}",
        path
    );
}

#[test]
fn resolved_config_defaults() {
    let config = ResolvedConfig::default();
    assert_eq!(config.endpoint, "https://countryapi.io/api/all");
    assert_eq!(config.api_key, None);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.search_scope, SearchScope::All);
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("country_browser_test_config.toml");

    let toml_content = r#"
endpoint = "https://example.test/api/all"
api_key = "from-file"
request_timeout_secs = 5
search_scope = "core"
log_file_path = "/tmp/country-browser-test.log"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");
    assert_eq!(config.endpoint.as_deref(), Some("https://example.test/api/all"));
    assert_eq!(config.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(config.search_scope, Some(SearchScope::Core));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/country-browser-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("country_browser_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("write");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("country_browser_test_unknown.toml");
    fs::write(&config_path, "page_size = 20\n").expect("write");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_config_file_rejects_unknown_search_scope() {
    let config_path = env::temp_dir().join("country_browser_test_scope.toml");
    fs::write(&config_path, "search_scope = \"everything\"\n").expect("write");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("country_browser_test_partial.toml");
    fs::write(&config_path, "request_timeout_secs = 10\n").expect("write");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(config.request_timeout_secs, Some(10));
    assert_eq!(config.endpoint, None);
}

#[test]
fn merge_config_without_file_is_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_takes_file_values_over_defaults() {
    let file = ConfigFile {
        endpoint: Some("https://mirror.test/all".into()),
        search_scope: Some(SearchScope::Core),
        ..Default::default()
    };
    let merged = merge_config(Some(file));
    assert_eq!(merged.endpoint, "https://mirror.test/all");
    assert_eq!(merged.search_scope, SearchScope::Core);
    assert_eq!(merged.request_timeout_secs, 30);
}

#[test]
#[serial(env)]
fn env_api_key_overrides_file_key() {
    env::set_var(ENV_API_KEY, "from-env");
    let file = ConfigFile {
        api_key: Some("from-file".into()),
        ..Default::default()
    };
    let config = apply_env_overrides(merge_config(Some(file)));
    env::remove_var(ENV_API_KEY);

    assert_eq!(config.api_key.as_deref(), Some("from-env"));
}

#[test]
#[serial(env)]
fn empty_env_values_are_ignored() {
    env::set_var(ENV_API_KEY, "  ");
    env::set_var(ENV_ENDPOINT, "");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_API_KEY);
    env::remove_var(ENV_ENDPOINT);

    assert_eq!(config.api_key, None);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
#[serial(env)]
fn env_endpoint_overrides_default() {
    env::set_var(ENV_ENDPOINT, "http://localhost:8080/all");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(ENV_ENDPOINT);

    assert_eq!(config.endpoint, "http://localhost:8080/all");
}

#[test]
#[serial(env)]
fn config_env_var_is_used_when_no_explicit_path() {
    let config_path = env::temp_dir().join("country_browser_test_env_path.toml");
    fs::write(&config_path, "request_timeout_secs = 7\n").expect("write");
    env::set_var(ENV_CONFIG, &config_path);

    let result = load_config_with_precedence(None);
    env::remove_var(ENV_CONFIG);
    fs::remove_file(&config_path).ok();

    assert_eq!(result.unwrap().unwrap().request_timeout_secs, Some(7));
}

#[test]
#[serial(env)]
fn explicit_path_beats_config_env_var() {
    env::set_var(ENV_CONFIG, "/nonexistent/env/config.toml");
    let config_path = env::temp_dir().join("country_browser_test_explicit.toml");
    fs::write(&config_path, "request_timeout_secs = 3\n").expect("write");

    let result = load_config_with_precedence(Some(config_path.clone()));
    env::remove_var(ENV_CONFIG);
    fs::remove_file(&config_path).ok();

    assert_eq!(result.unwrap().unwrap().request_timeout_secs, Some(3));
}

#[test]
fn cli_overrides_win() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        Some("http://cli.test/all".into()),
        Some(1),
    );
    assert_eq!(config.endpoint, "http://cli.test/all");
    assert_eq!(config.request_timeout_secs, 1);
}

#[test]
fn cli_overrides_none_keep_values() {
    let config = apply_cli_overrides(ResolvedConfig::default(), None, None);
    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn debug_output_redacts_api_key() {
    let config = ResolvedConfig {
        api_key: Some("super-secret".into()),
        ..Default::default()
    };
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
