use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Display languages supported by the toolkit. The string form is the
/// PokeAPI language code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
    Ja,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::Ja => "ja",
        }
    }

    /// Picks a language from a locale tag such as `ko_KR.UTF-8` or `ja-JP`.
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.to_lowercase();
        if locale.starts_with("ko") {
            Language::Ko
        } else if locale.starts_with("ja") {
            Language::Ja
        } else {
            Language::En
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_round_trips_through_code() {
        assert_eq!(Language::from_str("ko").ok(), Some(Language::Ko));
        assert_eq!(Language::Ja.to_string(), "ja");
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn locale_detection() {
        assert_eq!(Language::from_locale("ko_KR.UTF-8"), Language::Ko);
        assert_eq!(Language::from_locale("ja-JP"), Language::Ja);
        assert_eq!(Language::from_locale("en_US"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Dark).ok().as_deref(), Some("\"dark\""));
    }
}
