use serde::{Deserialize, Serialize};

/// An image record from the content service. Only the fields the site reads are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    pub title: String,
    pub file: ContentFile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentFile {
    pub url: String,
}

impl ContentEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: ContentFile { url: url.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_server_payload() {
        let json = r#"[{"title":"home-background","file":{"url":"//images.ctfassets.net/home.jpg"}}]"#;
        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(
            entries,
            vec![ContentEntry::new(
                "home-background",
                "//images.ctfassets.net/home.jpg"
            )]
        );
    }
}
