use dioxus::prelude::*;
use std::time::Duration;

use crate::Lang;

/// Runtime knobs for the site shell. Timings are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub default_lang: Lang,
    pub log_level: LogLevel,
    pub newsletter_delay_ms: u64,
    pub newsletter_reset_ms: u64,
    pub copy_reset_ms: u64,
    pub counter_frame_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_lang: Lang::En,
            log_level: LogLevel::Info,
            newsletter_delay_ms: 1000,
            newsletter_reset_ms: 5000,
            copy_reset_ms: 2500,
            counter_frame_ms: 16,
        }
    }
}

impl SiteConfig {
    /// Build from `SITE_*` variables. Runtime environment wins over values
    /// baked in at compile time; a browser bundle only has the latter.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            if let Ok(v) = std::env::var(key) {
                return Some(v);
            }
            compiled_var(key).map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(fallback)
        };

        Self {
            default_lang: lookup("SITE_DEFAULT_LANG")
                .and_then(|v| Lang::from_code(v.trim()))
                .unwrap_or(defaults.default_lang),
            log_level: lookup("SITE_LOG_LEVEL")
                .and_then(|v| LogLevel::from_name(&v))
                .unwrap_or(defaults.log_level),
            newsletter_delay_ms: millis("SITE_NEWSLETTER_DELAY_MS", defaults.newsletter_delay_ms),
            newsletter_reset_ms: millis("SITE_NEWSLETTER_RESET_MS", defaults.newsletter_reset_ms),
            copy_reset_ms: millis("SITE_COPY_RESET_MS", defaults.copy_reset_ms),
            // zero would spin the counter loop
            counter_frame_ms: millis("SITE_COUNTER_FRAME_MS", defaults.counter_frame_ms).max(1),
        }
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }

    pub fn newsletter_reset(&self) -> Duration {
        Duration::from_millis(self.newsletter_reset_ms)
    }

    pub fn copy_reset(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }

    pub fn counter_frame(&self) -> Duration {
        Duration::from_millis(self.counter_frame_ms)
    }
}

fn compiled_var(key: &str) -> Option<&'static str> {
    match key {
        "SITE_DEFAULT_LANG" => option_env!("SITE_DEFAULT_LANG"),
        "SITE_LOG_LEVEL" => option_env!("SITE_LOG_LEVEL"),
        "SITE_NEWSLETTER_DELAY_MS" => option_env!("SITE_NEWSLETTER_DELAY_MS"),
        "SITE_NEWSLETTER_RESET_MS" => option_env!("SITE_NEWSLETTER_RESET_MS"),
        "SITE_COPY_RESET_MS" => option_env!("SITE_COPY_RESET_MS"),
        "SITE_COUNTER_FRAME_MS" => option_env!("SITE_COUNTER_FRAME_MS"),
        _ => None,
    }
}

/// Provide a `SiteConfig` to the tree.
#[component]
pub fn ConfigProvider(config: SiteConfig, children: Element) -> Element {
    use_context_provider(|| config);
    rsx! { {children} }
}

pub fn use_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
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
    fn test_empty_lookup_uses_defaults() {
        let cfg = SiteConfig::from_lookup(|_| None);
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.newsletter_delay_ms, 1000);
        assert_eq!(cfg.newsletter_reset_ms, 5000);
        assert_eq!(cfg.copy_reset_ms, 2500);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_DEFAULT_LANG", "FR"),
            ("SITE_LOG_LEVEL", "debug"),
            ("SITE_NEWSLETTER_DELAY_MS", " 250 "),
            ("SITE_COPY_RESET_MS", "100"),
        ]));
        assert_eq!(cfg.default_lang, Lang::Fr);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.newsletter_delay(), Duration::from_millis(250));
        assert_eq!(cfg.copy_reset(), Duration::from_millis(100));
        assert_eq!(cfg.newsletter_reset_ms, 5000);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_DEFAULT_LANG", "de"),
            ("SITE_LOG_LEVEL", "loud"),
            ("SITE_NEWSLETTER_RESET_MS", "-3"),
        ]));
        assert_eq!(cfg.default_lang, Lang::En);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.newsletter_reset_ms, 5000);
    }

    #[test]
    fn test_counter_frame_never_zero() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[("SITE_COUNTER_FRAME_MS", "0")]));
        assert_eq!(cfg.counter_frame_ms, 1);
    }
}
