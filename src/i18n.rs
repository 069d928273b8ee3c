//! User-facing text lookup.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLocaleError;

/// Languages the built-in catalog ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts bare language codes and region-qualified tags (`es-MX`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Every label the tracker displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    Goal,
    ChangeType,
    TypeCurrency,
    TypeElements,
    Language,
    AddProgress,
    AddPlaceholder,
    ResetProgress,
    ConfirmReset,
    Yes,
    No,
    OpenMenu,
    CloseMenu,
}

impl MessageKey {
    pub const ALL: [MessageKey; 14] = [
        Self::Title,
        Self::Goal,
        Self::ChangeType,
        Self::TypeCurrency,
        Self::TypeElements,
        Self::Language,
        Self::AddProgress,
        Self::AddPlaceholder,
        Self::ResetProgress,
        Self::ConfirmReset,
        Self::Yes,
        Self::No,
        Self::OpenMenu,
        Self::CloseMenu,
    ];
}

/// Text lookup collaborator.
///
/// The core only ever asks for labels through this trait so a host can plug
/// in its own translation system.
pub trait Translator {
    fn translate(&self, key: MessageKey, locale: Locale) -> Cow<'static, str>;
}

/// Built-in English/Spanish catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    fn english(key: MessageKey) -> &'static str {
        match key {
            MessageKey::Title => "Goal Progress Tracker",
            MessageKey::Goal => "Goal",
            MessageKey::ChangeType => "Type",
            MessageKey::TypeCurrency => "Currency",
            MessageKey::TypeElements => "Elements",
            MessageKey::Language => "Language",
            MessageKey::AddProgress => "Add Progress",
            MessageKey::AddPlaceholder => "Add",
            MessageKey::ResetProgress => "Reset Progress",
            MessageKey::ConfirmReset => "Are you sure you want to reset progress?",
            MessageKey::Yes => "Yes",
            MessageKey::No => "No",
            MessageKey::OpenMenu => "Open menu",
            MessageKey::CloseMenu => "Close menu",
        }
    }

    fn spanish(key: MessageKey) -> &'static str {
        match key {
            MessageKey::Title => "Seguimiento de Meta",
            MessageKey::Goal => "Meta",
            MessageKey::ChangeType => "Tipo",
            MessageKey::TypeCurrency => "Dinero",
            MessageKey::TypeElements => "Elementos",
            MessageKey::Language => "Idioma",
            MessageKey::AddProgress => "Agregar Progreso",
            MessageKey::AddPlaceholder => "Agregar",
            MessageKey::ResetProgress => "Reiniciar Progreso",
            MessageKey::ConfirmReset => "¿Seguro que deseas reiniciar el progreso?",
            MessageKey::Yes => "Sí",
            MessageKey::No => "No",
            MessageKey::OpenMenu => "Abrir menú",
            MessageKey::CloseMenu => "Cerrar menú",
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, key: MessageKey, locale: Locale) -> Cow<'static, str> {
        let text = match locale {
            Locale::En => Self::english(key),
            Locale::Es => Self::spanish(key),
        };
        Cow::Borrowed(text)
    }
}
