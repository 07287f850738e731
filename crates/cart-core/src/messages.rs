//! User-facing notification messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    #[default]
    Error,
}

/// Language used for notification texts and price display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese, the storefront's native language.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Messages the cart surfaces to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartMessage {
    /// Requested quantity is not available in stock.
    StockExceeded,
    /// Adding a product failed.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product's quantity failed.
    UpdateFailed,
}

impl CartMessage {
    /// Localized text.
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::StockExceeded, Locale::PtBr) => "Quantidade solicitada fora de estoque",
            (Self::AddFailed, Locale::PtBr) => "Erro na adição do produto",
            (Self::RemoveFailed, Locale::PtBr) => "Erro na remoção do produto",
            (Self::UpdateFailed, Locale::PtBr) => "Erro na alteração de quantidade do produto",
            (Self::StockExceeded, Locale::En) => "Requested quantity unavailable in stock",
            (Self::AddFailed, Locale::En) => "Failed to add product",
            (Self::RemoveFailed, Locale::En) => "Failed to remove product",
            (Self::UpdateFailed, Locale::En) => "Failed to update product quantity",
        }
    }
}
