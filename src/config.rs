//! Build-time configuration.
//!
//! Values are captured from the environment of the `trunk build` invocation
//! with `option_env!`; anything missing, unparsable or out of bounds falls
//! back to its default.

use url::Url;

use crate::logging::LogLevel;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::theme::Theme;

const DEFAULT_INITIAL_THEME: Theme = Theme::Dark;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com";
const DEFAULT_VIEW_TRANSITIONS: bool = true;

const SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold_px: f64,
    pub initial_theme: Theme,
    pub log_level: LogLevel,
    pub placeholder_base_url: Url,
    pub view_transitions: bool,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(|name| match name {
            "PORTFOLIO_SCROLL_THRESHOLD_PX" => option_env!("PORTFOLIO_SCROLL_THRESHOLD_PX"),
            "PORTFOLIO_INITIAL_THEME" => option_env!("PORTFOLIO_INITIAL_THEME"),
            "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
            "PORTFOLIO_PLACEHOLDER_BASE_URL" => option_env!("PORTFOLIO_PLACEHOLDER_BASE_URL"),
            "PORTFOLIO_VIEW_TRANSITIONS" => option_env!("PORTFOLIO_VIEW_TRANSITIONS"),
            _ => None,
        })
    }

    fn from_values<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let scroll_threshold_px = parse_f64_with_bounds(
            lookup("PORTFOLIO_SCROLL_THRESHOLD_PX"),
            DEFAULT_SCROLL_THRESHOLD_PX,
            SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let initial_theme = parse_non_empty(lookup("PORTFOLIO_INITIAL_THEME"))
            .and_then(|value| Theme::from_str(&value.to_ascii_lowercase()))
            .unwrap_or(DEFAULT_INITIAL_THEME);
        let log_level = parse_non_empty(lookup("PORTFOLIO_LOG_LEVEL"))
            .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let placeholder_base_url = parse_http_url(lookup("PORTFOLIO_PLACEHOLDER_BASE_URL"))
            .unwrap_or_else(default_placeholder_base_url);
        let view_transitions =
            parse_bool(lookup("PORTFOLIO_VIEW_TRANSITIONS")).unwrap_or(DEFAULT_VIEW_TRANSITIONS);

        Self {
            scroll_threshold_px,
            initial_theme,
            log_level,
            placeholder_base_url,
            view_transitions,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(|_| None)
    }
}

fn default_placeholder_base_url() -> Url {
    Url::parse(DEFAULT_PLACEHOLDER_BASE_URL).expect("default placeholder URL is valid")
}

fn parse_non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds(value: Option<&str>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_http_url(value: Option<&str>) -> Option<Url> {
    let value = parse_non_empty(value)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    match parse_non_empty(value)?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> SiteConfig {
        let values: HashMap<&str, &str> = pairs.iter().copied().collect();
        SiteConfig::from_values(|name| values.get(name).copied())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_threshold_px, 20.0);
        assert_eq!(config.initial_theme, Theme::Dark);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.placeholder_base_url.as_str(), "https://via.placeholder.com/");
        assert!(config.view_transitions);
    }

    #[test]
    fn valid_overrides_are_used() {
        let config = config_from(&[
            ("PORTFOLIO_SCROLL_THRESHOLD_PX", " 64 "),
            ("PORTFOLIO_INITIAL_THEME", "Light"),
            ("PORTFOLIO_LOG_LEVEL", "DEBUG"),
            ("PORTFOLIO_PLACEHOLDER_BASE_URL", "https://placehold.co"),
            ("PORTFOLIO_VIEW_TRANSITIONS", "off"),
        ]);

        assert_eq!(config.scroll_threshold_px, 64.0);
        assert_eq!(config.initial_theme, Theme::Light);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.placeholder_base_url.host_str(), Some("placehold.co"));
        assert!(!config.view_transitions);
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORTFOLIO_SCROLL_THRESHOLD_PX", "99999"),
            ("PORTFOLIO_INITIAL_THEME", "sepia"),
            ("PORTFOLIO_LOG_LEVEL", "trace"),
            ("PORTFOLIO_PLACEHOLDER_BASE_URL", "ftp://example.com"),
            ("PORTFOLIO_VIEW_TRANSITIONS", "maybe"),
        ]);

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn negative_and_garbage_thresholds_are_rejected() {
        assert_eq!(parse_f64_with_bounds(Some("-5"), 20.0, SCROLL_THRESHOLD_PX_BOUNDS), 20.0);
        assert_eq!(parse_f64_with_bounds(Some("abc"), 20.0, SCROLL_THRESHOLD_PX_BOUNDS), 20.0);
        assert_eq!(parse_f64_with_bounds(Some("0"), 20.0, SCROLL_THRESHOLD_PX_BOUNDS), 0.0);
    }
}
