use super::*;

#[test]
fn flags_override_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        br#"{"base_url": "http://file/rest", "start_path": "/content"}"#,
    )
    .unwrap();

    let cfg = ClientConfig::load(&ConfigOverrides {
        config: Some(path),
        base_url: Some("http://flag/rest/".to_string()),
        ..ConfigOverrides::default()
    })
    .unwrap();

    assert_eq!(cfg.require_base_url().unwrap(), "http://flag/rest");
    assert_eq!(cfg.start_path(), "/content");
    assert_eq!(cfg.log_file, None);
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::load(&ConfigOverrides {
        config: Some(dir.path().join("missing.json")),
        ..ConfigOverrides::default()
    })
    .unwrap_err();
    assert!(format!("{:#}", err).contains("read config"));
}

#[test]
fn missing_base_url_explains_how_to_set_it() {
    let cfg = ClientConfig::default();
    let err = cfg.require_base_url().unwrap_err();
    assert!(err.to_string().contains("--url"));
    assert_eq!(cfg.start_path(), "/");
}
