use std::collections::HashMap;
use std::fs;

use crate::auth::AuthError;

use super::{
    AppConfig, DEFAULT_PROCESS_URL, DEFAULT_TOKEN_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
    ENV_PROCESS_URL, load_config, save_config,
};

#[test]
fn defaults_point_at_public_endpoints() {
    let config = AppConfig::default();
    assert_eq!(config.auth.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.imagery.process_url, DEFAULT_PROCESS_URL);
    assert_eq!(config.http.timeout(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn credentials_are_required_only_when_requested() {
    let config = AppConfig::default();
    assert!(matches!(
        config.auth.credentials(),
        Err(AuthError::MissingCredentials(_))
    ));
}

#[test]
fn overrides_inject_credentials_and_urls() {
    let env = HashMap::from([
        (ENV_CLIENT_ID, "id-from-env"),
        (ENV_CLIENT_SECRET, "secret-from-env"),
        (ENV_PROCESS_URL, "http://localhost:8080/process"),
    ]);
    let mut config = AppConfig::default();
    config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

    let credentials = config.auth.credentials().expect("credentials");
    assert_eq!(credentials.client_id(), "id-from-env");
    assert_eq!(config.imagery.process_url, "http://localhost:8080/process");
    assert_eq!(config.auth.token_url, DEFAULT_TOKEN_URL);
}

#[test]
fn blank_overrides_are_ignored() {
    let mut config = AppConfig::default();
    config.apply_overrides(|key| (key == ENV_CLIENT_ID).then(|| "  ".to_string()));
    assert_eq!(config.auth.client_id, None);
}

#[test]
fn yaml_config_overrides_selected_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("imagery.yaml");
    fs::write(
        &path,
        "auth:\n  client_id: yaml-id\n  client_secret: yaml-secret\nimagery:\n  width: 256\n  data_type: sentinel-1-grd\nhttp:\n  timeout_secs: 30\n",
    )
    .expect("write config");

    let config = load_config(Some(&path)).expect("load config");
    assert_eq!(config.imagery.params.width, 256.0);
    assert_eq!(config.imagery.params.height, 520.193);
    assert_eq!(config.imagery.params.data_type, "sentinel-1-grd");
    assert_eq!(config.http.timeout_secs, Some(30));
    assert!(config.auth.credentials().is_ok());
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("imagery.json");
    fs::write(&path, r#"{"http": {"timeout_secs": 0}}"#).expect("write config");
    assert!(load_config(Some(&path)).is_err());

    let mut config = AppConfig::default();
    config.imagery.process_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn saved_config_omits_secret_and_reloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("imagery.json");
    let mut config = AppConfig::default();
    config.auth.client_id = Some("saved-id".to_string());
    config.auth.client_secret = Some("saved-secret".to_string());

    save_config(&path, &config).expect("save config");
    let raw = fs::read_to_string(&path).expect("read config");
    assert!(raw.contains("saved-id"));
    assert!(!raw.contains("saved-secret"));

    let restored: AppConfig = serde_json::from_str(&raw).expect("parse config");
    assert_eq!(restored.imagery, config.imagery);
    assert_eq!(restored.auth.client_secret, None);
}
