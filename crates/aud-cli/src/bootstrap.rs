use anyhow::Context;

use aud_config::AudConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AudConfig> {
    let mut config = AudConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut AudConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
        config
            .api
            .validate()
            .context("invalid --api-url")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use aud_config::AudConfig;

    fn flags(api_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            api_url: api_url.map(str::to_string),
            color: ColorMode::Never,
        }
    }

    #[test]
    fn api_url_flag_overrides_config() {
        let mut config = AudConfig::default();
        apply_overrides(&mut config, &flags(Some("https://audit.example.com/api/")))
            .expect("override should apply");
        assert_eq!(config.api.normalized_base_url(), "https://audit.example.com/api");
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let mut config = AudConfig::default();
        let err = apply_overrides(&mut config, &flags(Some("ftp://nope"))).expect_err("should fail");
        assert!(err.to_string().contains("--api-url"));
    }

    #[test]
    fn no_flag_keeps_default() {
        let mut config = AudConfig::default();
        apply_overrides(&mut config, &flags(None)).expect("no-op");
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }
}
