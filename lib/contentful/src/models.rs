//! Delivery API wire types. Only the fields the site reads are modelled.

use serde::Deserialize;
use shared::content::ContentEntry;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct AssetCollection {
    pub total: u32,
    pub skip: u32,
    #[serde(default)]
    pub items: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetFields {
    pub title: Option<String>,
    pub file: Option<AssetFile>,
}

#[derive(Debug, Deserialize)]
pub struct AssetFile {
    pub url: Option<String>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
}

impl AssetFile {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|t| t.starts_with("image/"))
    }
}

impl AssetCollection {
    /// Offset of the following page, or `None` once every item has been seen.
    pub fn next_skip(&self) -> Option<u32> {
        let next = self.skip.saturating_add(self.items.len() as u32);
        (!self.items.is_empty() && next < self.total).then_some(next)
    }

    pub fn into_entries(self) -> Vec<ContentEntry> {
        self.items
            .into_iter()
            .filter_map(|asset| {
                let entry = asset.to_entry();
                if entry.is_none() {
                    debug!("Skipping asset {}: not an image or missing title/url", asset.sys.id);
                }
                entry
            })
            .collect()
    }
}

impl Asset {
    fn to_entry(&self) -> Option<ContentEntry> {
        let title = self.fields.title.as_ref()?;
        let file = self.fields.file.as_ref()?;
        if !file.is_image() {
            return None;
        }
        let url = file.url.as_ref()?;
        Some(ContentEntry::new(title.clone(), url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "sys": { "type": "Array" },
        "total": 5,
        "skip": 0,
        "limit": 3,
        "items": [
            {
                "sys": { "id": "a1", "type": "Asset" },
                "fields": {
                    "title": "home-background",
                    "file": {
                        "url": "//images.ctfassets.net/space/a1/home.jpg",
                        "contentType": "image/jpeg",
                        "fileName": "home.jpg"
                    }
                }
            },
            {
                "sys": { "id": "a2", "type": "Asset" },
                "fields": { "title": "draft-without-file" }
            },
            {
                "sys": { "id": "a3", "type": "Asset" },
                "fields": {
                    "title": "admissions-brochure",
                    "file": {
                        "url": "//assets.ctfassets.net/space/a3/brochure.pdf",
                        "contentType": "application/pdf"
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn maps_only_image_assets_with_title_and_url() {
        let page: AssetCollection = serde_json::from_str(PAGE).unwrap();
        assert_eq!(
            page.into_entries(),
            vec![ContentEntry::new(
                "home-background",
                "//images.ctfassets.net/space/a1/home.jpg"
            )]
        );
    }

    #[test]
    fn next_skip_advances_until_total() {
        let page: AssetCollection = serde_json::from_str(PAGE).unwrap();
        assert_eq!(page.next_skip(), Some(3));

        let last: AssetCollection =
            serde_json::from_str(r#"{"total": 5, "skip": 3, "limit": 3, "items": [{}, {}]}"#)
                .unwrap();
        assert_eq!(last.next_skip(), None);
    }

    #[test]
    fn empty_page_stops_paging() {
        let page: AssetCollection =
            serde_json::from_str(r#"{"total": 10, "skip": 0, "limit": 100, "items": []}"#)
                .unwrap();
        assert_eq!(page.next_skip(), None);
        assert!(page.into_entries().is_empty());
    }
}
