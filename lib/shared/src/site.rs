//! Static site configuration. Built once per process and never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub const SITE_ICON: &str = "/assets/icons/pinus.png";
pub const FACEBOOK_ICON: &str = "/assets/icons/fb.png";
pub const INSTAGRAM_ICON: &str = "/assets/icons/ig.png";

/// A top navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    pub title: String,
    pub slug: String,
}

impl NavLink {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.to_string(),
            slug: slug.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLink {
    pub label: String,
    pub url: String,
}

impl PageLink {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// A titled group of links rendered in the footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkColumn {
    pub title: String,
    pub pages: Vec<PageLink>,
}

impl LinkColumn {
    pub fn new(title: &str, pages: Vec<PageLink>) -> Self {
        Self {
            title: title.to_string(),
            pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub heading: String,
    pub blurb: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Short name, used as the title suffix and in the header.
    pub name: String,
    pub full_name: String,
    pub icon: String,
    pub copyright: String,
    pub nav_links: Vec<NavLink>,
    pub columns: Vec<LinkColumn>,
    pub contact: ContactInfo,
}

impl SiteConfig {
    pub fn pinus() -> Self {
        Self {
            name: "PINUS".to_string(),
            full_name: "Perhimpunan Indonesia NUS".to_string(),
            icon: SITE_ICON.to_string(),
            copyright: "©2021 Perhimpunan Indonesia NUS. All Rights Reserved.".to_string(),
            nav_links: vec![
                NavLink::new("About Us", "about"),
                NavLink::new("Admissions", "admissions"),
                NavLink::new("Events", "events"),
                NavLink::new("Aksara Box", "aksara-box"),
                NavLink::new("Contact Us", "contact"),
            ],
            columns: vec![
                LinkColumn::new(
                    "About",
                    vec![
                        PageLink::new("Who We Are", "/about"),
                        PageLink::new("Team", "/about#team"),
                    ],
                ),
                LinkColumn::new(
                    "Admissions",
                    vec![
                        PageLink::new("Guide", "/admissions"),
                        PageLink::new("FAQ", "/admissions#faq"),
                    ],
                ),
                LinkColumn::new(
                    "Events",
                    vec![
                        PageLink::new("Upcoming Events", "/events"),
                        PageLink::new("Aksara Box", "/aksara-box"),
                    ],
                ),
            ],
            contact: ContactInfo {
                heading: "Contact Us".to_string(),
                blurb: "Feel free to drop us a message. We would love to hear from you!"
                    .to_string(),
                facebook: "https://www.facebook.com/PerhimpunanIndonesiaNUS/".to_string(),
                instagram: "https://www.instagram.com/pinusonline".to_string(),
            },
        }
    }
}

static SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::pinus);

pub fn site() -> &'static SiteConfig {
    &SITE
}
