//! 配置与词表文件集成测试

use std::fs;

use locale_patch::translation::{ConfigManager, TranslationConfig, TranslationError};

#[test]
fn test_load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locale-patch.toml");
    fs::write(
        &path,
        r#"
source_lang = "pt"
target_lang = "es"
builtin_table = false
target_markers = ["🇪🇸", "ES"]
"#,
    )
    .unwrap();

    let manager = ConfigManager::from_file(&path).unwrap();
    let config = manager.get_config();

    assert_eq!(config.target_lang, "es");
    assert!(!config.builtin_table);
    assert_eq!(config.target_markers, vec!["🇪🇸", "ES"]);
    // 未出现的字段取默认值
    assert_eq!(config.source_markers, TranslationConfig::default().source_markers);
    assert_eq!(manager.config_path(), Some(path.display().to_string().as_str()));
}

#[test]
fn test_load_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locale-patch.json");
    fs::write(
        &path,
        r#"{ "target_lang": "fr", "skip_elements": ["script", "style", "nav"] }"#,
    )
    .unwrap();

    let config = ConfigManager::from_file(&path).unwrap().into_config();

    assert_eq!(config.target_lang, "fr");
    assert_eq!(config.collector_config().skip_elements, vec!["script", "style", "nav"]);
}

#[test]
fn test_example_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.toml");

    ConfigManager::generate_example_config(&path).unwrap();
    let config = ConfigManager::from_file(&path).unwrap().into_config();

    assert_eq!(config, TranslationConfig::default());
}

#[test]
fn test_table_file_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.toml");
    fs::write(
        &table_path,
        "\"Contato\" = \"Get in touch\"\n\"Dr Susan\" = \"Dr. Susan\"\n",
    )
    .unwrap();

    let config = TranslationConfig {
        table_path: Some(table_path.display().to_string()),
        ..TranslationConfig::default()
    };
    let table = config.load_table().unwrap();

    assert_eq!(table.lookup("Contato"), Some("Get in touch"));
    assert_eq!(table.lookup("Dr Susan"), Some("Dr. Susan"));
    assert_eq!(table.lookup("Enviar Mensagem"), Some("Send Message"));
}

#[test]
fn test_table_file_without_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.json");
    fs::write(&table_path, r#"{ "Enviar Mensagem": "Envoyer" }"#).unwrap();

    let config = TranslationConfig {
        target_lang: "fr".to_string(),
        table_path: Some(table_path.display().to_string()),
        builtin_table: false,
        ..TranslationConfig::default()
    };
    let table = config.load_table().unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("Enviar Mensagem"), Some("Envoyer"));
    assert_eq!(table.lookup("Contato"), None);
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "target_lang = [").unwrap();

    let err = ConfigManager::from_file(&path).unwrap_err();
    assert!(matches!(err, TranslationError::ConfigError(_)));
}

#[test]
fn test_config_with_same_languages_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.json");
    fs::write(&path, r#"{ "source_lang": "en", "target_lang": "en" }"#).unwrap();

    let err = ConfigManager::from_file(&path).unwrap_err();
    assert!(matches!(err, TranslationError::ConfigError(_)));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = ConfigManager::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, TranslationError::ConfigError(_)));
}

#[test]
fn test_malformed_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.json");
    fs::write(&table_path, r#"{ "Enviar Mensagem": 1 }"#).unwrap();

    let config = TranslationConfig {
        table_path: Some(table_path.display().to_string()),
        ..TranslationConfig::default()
    };

    let err = config.load_table().unwrap_err();
    assert!(matches!(err, TranslationError::ParseError(_)));
}
