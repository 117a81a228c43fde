use std::env;
use std::time::Duration;

use crate::contact::{
    ContactIdentity, DEFAULT_EMAIL, DEFAULT_MESSAGE, DEFAULT_PHONE_E164, DEFAULT_PROFILE_URL,
    DEFAULT_RESUME_URL, DEFAULT_SCHEDULING_URL, Links,
};
use crate::error::ConfigError;
use crate::feedback::DEFAULT_FEEDBACK_DELAY;

const EMAIL_ENV: &str = "REACHOUT_EMAIL";
const PHONE_ENV: &str = "REACHOUT_PHONE";
const SCHEDULING_URL_ENV: &str = "REACHOUT_SCHEDULING_URL";
const RESUME_URL_ENV: &str = "REACHOUT_RESUME_URL";
const PROFILE_URL_ENV: &str = "REACHOUT_PROFILE_URL";
const MESSAGE_ENV: &str = "REACHOUT_MESSAGE";
const FEEDBACK_MS_ENV: &str = "REACHOUT_FEEDBACK_MS";

/// Everything the contact actions read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub identity: ContactIdentity,
    pub links: Links,
    pub message: String,
    pub feedback_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            identity: ContactIdentity::default(),
            links: Links::default(),
            message: DEFAULT_MESSAGE.to_string(),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from `lookup`; blank or missing values keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let feedback_delay = match lookup(FEEDBACK_MS_ENV).map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => {
                let ms = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: FEEDBACK_MS_ENV,
                    value: raw.clone(),
                })?;
                Duration::from_millis(ms)
            }
            _ => DEFAULT_FEEDBACK_DELAY,
        };

        Ok(Self {
            identity: ContactIdentity::new(
                read(EMAIL_ENV, DEFAULT_EMAIL),
                read(PHONE_ENV, DEFAULT_PHONE_E164),
            ),
            links: Links {
                scheduling: read(SCHEDULING_URL_ENV, DEFAULT_SCHEDULING_URL),
                resume: read(RESUME_URL_ENV, DEFAULT_RESUME_URL),
                profile: read(PROFILE_URL_ENV, DEFAULT_PROFILE_URL),
            },
            message: read(MESSAGE_ENV, DEFAULT_MESSAGE),
            feedback_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.feedback_delay, Duration::from_millis(1200));
    }

    #[test]
    fn overrides_and_blank_values() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("REACHOUT_EMAIL", " me@example.com "),
            ("REACHOUT_PHONE", "   "),
            ("REACHOUT_FEEDBACK_MS", "300"),
        ]))
        .unwrap();
        assert_eq!(config.identity.email, "me@example.com");
        assert_eq!(config.identity.phone_e164, DEFAULT_PHONE_E164);
        assert_eq!(config.feedback_delay, Duration::from_millis(300));
    }

    #[test]
    fn rejects_non_numeric_delay() {
        let err = RuntimeConfig::from_lookup(lookup_from(&[("REACHOUT_FEEDBACK_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "REACHOUT_FEEDBACK_MS",
                value: "soon".into()
            }
        );
    }
}
