// ============================================================================
// CONFIGURATION - Environment driven settings (loaded after dotenvy)
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    /// Domain suffix a sign-in email must end with, e.g. `.edu`.
    pub email_suffix: String,
    pub session_ttl_hours: i64,
    /// Load the mock dataset at start-up.
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let session_ttl_hours = match lookup("SESSION_TTL_HOURS") {
            None => 24,
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or(ConfigError::Invalid {
                    key: "SESSION_TTL_HOURS",
                    value: raw,
                })?,
        };

        let seed_demo = match lookup("CAMPUS_SEED_DEMO").as_deref() {
            None | Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "CAMPUS_SEED_DEMO",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            bind_addr: lookup("CAMPUS_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            jwt_secret,
            email_suffix: lookup("CAMPUS_EMAIL_SUFFIX")
                .unwrap_or_else(|| ".edu".to_string())
                .to_ascii_lowercase(),
            session_ttl_hours,
            seed_demo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.email_suffix, ".edu");
        assert_eq!(config.session_ttl_hours, 24);
        assert!(config.seed_demo);
    }

    #[test]
    fn secret_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("JWT_SECRET"))));
        assert!(matches!(
            load(&[("JWT_SECRET", "")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
    }

    #[test]
    fn bad_values_are_reported() {
        let err = load(&[("JWT_SECRET", "s"), ("SESSION_TTL_HOURS", "-3")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for SESSION_TTL_HOURS: `-3`");

        assert!(load(&[("JWT_SECRET", "s"), ("CAMPUS_SEED_DEMO", "maybe")]).is_err());

        let config = load(&[
            ("JWT_SECRET", "s"),
            ("CAMPUS_SEED_DEMO", "false"),
            ("CAMPUS_EMAIL_SUFFIX", ".State.EDU"),
        ])
        .unwrap();
        assert!(!config.seed_demo);
        assert_eq!(config.email_suffix, ".state.edu");
    }
}
