use aud_config::AudConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AudConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AudConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let defaults = AudConfig::default();
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    let api_is_default = config.api.base_url == defaults.api.base_url
        && config.api.timeout_secs == defaults.api.timeout_secs;
    if api_is_default && has_single_underscore_key(&env_keys, "AUD_API_") {
        warnings.push(
            "API config appears default while AUD_API_* env vars exist. Use double underscores (example: AUD_API__BASE_URL)."
                .to_string(),
        );
    }

    let general_is_default = config.general.default_limit == defaults.general.default_limit
        && config.general.currency_symbol == defaults.general.currency_symbol;
    if general_is_default && has_single_underscore_key(&env_keys, "AUD_GENERAL_") {
        warnings.push(
            "General config appears default while AUD_GENERAL_* env vars exist. Use double underscores (example: AUD_GENERAL__CURRENCY_SYMBOL)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}
