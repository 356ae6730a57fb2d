use aud_config::AudConfig;
use figment::Jail;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("AUD_API__BASE_URL", "https://env.example.com/api");
        jail.set_env("AUD_API__TIMEOUT_SECS", "12");
        jail.set_env("AUD_GENERAL__DEFAULT_LIMIT", "7");

        let config = AudConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aud")?;
        jail.create_file(
            ".aud/config.toml",
            r#"
[api]
base_url = "http://from-file/api"
"#,
        )?;
        jail.set_env("AUD_API__BASE_URL", "http://from-env/api");

        let config = AudConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env/api");
        Ok(())
    });
}

#[test]
fn single_underscore_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("AUD_API_BASE_URL", "http://wrong/api");

        let config = AudConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        Ok(())
    });
}
