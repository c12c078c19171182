//! Language selection query parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wfdocs_core::Locale;

/// `?lang=` query parameter accepted by localized endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LocaleQuery {
    /// Response language. `zh` selects Chinese; anything else English.
    pub lang: String,
}

impl Default for LocaleQuery {
    fn default() -> Self {
        Self {
            lang: Locale::En.to_string(),
        }
    }
}

impl LocaleQuery {
    /// Resolves the requested locale.
    #[inline]
    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(LocaleQuery::default().locale(), Locale::En);
    }

    #[test]
    fn only_exact_zh_is_chinese() {
        let query = LocaleQuery { lang: "zh".into() };
        assert_eq!(query.locale(), Locale::Zh);

        let query = LocaleQuery { lang: "zh-TW".into() };
        assert_eq!(query.locale(), Locale::En);
    }
}
