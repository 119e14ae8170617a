//! Page identifier to hero background resolution.
//!
//! Five of the keys are backed by images stored in the content service under
//! the title `<key>-background`. `aksaraBox` always points at a bundled asset.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::ContentEntry;

pub const AKSARA_BOX_BACKGROUND: &str = "/assets/backgrounds/aksaraBox.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageBackground {
    Home,
    About,
    Admissions,
    Events,
    Contact,
    AksaraBox,
}

impl PageBackground {
    pub const ALL: [PageBackground; 6] = [
        PageBackground::Home,
        PageBackground::About,
        PageBackground::Admissions,
        PageBackground::Events,
        PageBackground::Contact,
        PageBackground::AksaraBox,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PageBackground::Home => "home",
            PageBackground::About => "about",
            PageBackground::Admissions => "admissions",
            PageBackground::Events => "events",
            PageBackground::Contact => "contact",
            PageBackground::AksaraBox => "aksaraBox",
        }
    }

    /// Title of the content entry holding this background, if it is stored remotely.
    pub fn content_title(&self) -> Option<String> {
        match self {
            PageBackground::AksaraBox => None,
            other => Some(format!("{}-background", other.key())),
        }
    }
}

impl fmt::Display for PageBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackground(pub String);

impl fmt::Display for UnknownBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page background '{}'", self.0)
    }
}

impl std::error::Error for UnknownBackground {}

impl FromStr for PageBackground {
    type Err = UnknownBackground;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageBackground::ALL
            .into_iter()
            .find(|bg| bg.key() == s)
            .ok_or_else(|| UnknownBackground(s.to_string()))
    }
}

/// Label to URL lookup built from the latest fetched entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundMapping {
    urls: HashMap<String, String>,
}

impl BackgroundMapping {
    /// Later entries with the same title replace earlier ones.
    pub fn from_entries(entries: &[ContentEntry]) -> Self {
        let urls = entries
            .iter()
            .map(|entry| (entry.title.clone(), entry.file.url.clone()))
            .collect();
        Self { urls }
    }

    pub fn resolve(&self, background: PageBackground) -> Option<&str> {
        match background.content_title() {
            Some(title) => self.urls.get(&title).map(String::as_str),
            None => Some(AKSARA_BOX_BACKGROUND),
        }
    }

    pub fn resolve_key(&self, key: &str) -> Option<&str> {
        key.parse().ok().and_then(|bg| self.resolve(bg))
    }
}
