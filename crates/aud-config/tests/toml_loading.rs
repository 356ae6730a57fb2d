//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use aud_config::{AudConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://audit.example.com/api/"
timeout_secs = 5
user_agent = "aud-tests"
"#,
        )?;

        let config: AudConfig = Figment::from(Serialized::defaults(AudConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.normalized_base_url(), "https://audit.example.com/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent, "aud-tests");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
currency_symbol = "MXN "
"#,
        )?;

        let config: AudConfig = Figment::from(Serialized::defaults(AudConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.currency_symbol, "MXN ");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_the_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aud")?;
        jail.create_file(
            ".aud/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9090/api"

[general]
default_limit = 50
"#,
        )?;

        let config = AudConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9090/api");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aud")?;
        jail.create_file(
            ".aud/config.toml",
            r#"
[api]
base_url = "ftp://files.example.com"
"#,
        )?;

        let err = AudConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aud")?;
        jail.create_file(".aud/config.toml", "[api\nbase_url = ")?;

        let err = AudConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
