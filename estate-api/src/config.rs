use estate_core::EstateConfig;

pub const ENV_PREFIX: &str = "ESTATE__";

/// Defaults first, then `ESTATE__*` overrides from the environment.
pub fn load() -> EstateConfig {
    let mut config = defaults();
    config.load_env(ENV_PREFIX);
    config
}

pub fn defaults() -> EstateConfig {
    let mut config = EstateConfig::new();

    // HTTP
    config.set("http.host", "127.0.0.1");
    config.set("http.port", "8080");

    // Auth
    config.set("auth.bcrypt.cost", "10");

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_http_and_auth() {
        let config = defaults();

        assert_eq!(config.get("http.host"), Some("127.0.0.1"));
        assert_eq!(config.get_parsed::<u16>("http.port"), Some(8080));
        assert_eq!(config.get_parsed::<u32>("auth.bcrypt.cost"), Some(10));
        assert!(!config.has("store.url"));
    }
}
