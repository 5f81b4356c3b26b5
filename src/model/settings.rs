use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

pub const KEY_EXCLUDED_ROUNDS: &str = "excluded_rounds";
pub const KEY_ADJUST_TO_WIND: &str = "adjust_to_wind";
pub const KEY_SPLIT_BY_CATEGORIES: &str = "split_by_categories";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    excluded_rounds: BTreeSet<String>,
    adjust_to_wind: bool,
    split_by_categories: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            excluded_rounds: BTreeSet::new(),
            adjust_to_wind: false,
            split_by_categories: true,
        }
    }
}

impl Settings {
    pub fn from_value(config: &Value) -> Self {
        let mut settings = Self::default();
        let Some(map) = config.as_object() else {
            if !config.is_null() {
                warn!("scoreboard settings are not a mapping; using defaults");
            }
            return settings;
        };

        match map.get(KEY_EXCLUDED_ROUNDS) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    match item.as_str().map(str::trim) {
                        Some(slug) if !slug.is_empty() => {
                            settings.excluded_rounds.insert(slug.to_string());
                        }
                        _ => warn!(value = %item, "ignoring non-slug entry in excluded_rounds"),
                    }
                }
            }
            Some(other) => warn!(value = %other, "excluded_rounds is not a list; ignoring"),
        }

        settings.adjust_to_wind = read_flag(map.get(KEY_ADJUST_TO_WIND), KEY_ADJUST_TO_WIND, false);
        settings.split_by_categories = read_flag(
            map.get(KEY_SPLIT_BY_CATEGORIES),
            KEY_SPLIT_BY_CATEGORIES,
            true,
        );
        settings
    }

    pub fn with_excluded_rounds<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for slug in slugs {
            let slug: String = slug.into();
            let slug = slug.trim();
            if !slug.is_empty() {
                self.excluded_rounds.insert(slug.to_string());
            }
        }
        self
    }

    pub fn with_adjust_to_wind(mut self, value: bool) -> Self {
        self.adjust_to_wind = value;
        self
    }

    pub fn with_split_by_categories(mut self, value: bool) -> Self {
        self.split_by_categories = value;
        self
    }

    pub fn excluded_rounds(&self) -> &BTreeSet<String> {
        &self.excluded_rounds
    }

    pub fn is_excluded(&self, slug: &str) -> bool {
        self.excluded_rounds.contains(slug)
    }

    pub fn adjust_to_wind(&self) -> bool {
        self.adjust_to_wind
    }

    pub fn split_by_categories(&self) -> bool {
        self.split_by_categories
    }
}

fn read_flag(value: Option<&Value>, key: &str, default: bool) -> bool {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            warn!(key, value = %other, default, "setting is not a boolean; using default");
            default
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/settings.rs"]
mod tests;
