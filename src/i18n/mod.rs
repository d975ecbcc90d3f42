//! Locale tables and key lookup.
//!
//! Every string the UI shows is looked up by a dotted key such as
//! `upload.dragText`. A key missing from the active locale falls back to
//! English, then to the key itself.

mod en;
mod es;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Locale::En => en::lookup(key),
            Locale::Es => es::lookup(key),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("unsupported locale '{}' (expected 'en' or 'es')", other)),
        }
    }
}

/// Key lookup against the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.locale
            .lookup(key)
            .or_else(|| Locale::En.lookup(key))
            .unwrap_or(key)
    }

    /// Display name of the active language, in the active language.
    pub fn language_name(&self) -> &str {
        match self.locale {
            Locale::En => self.t("language.english"),
            Locale::Es => self.t("language.spanish"),
        }
    }
}
