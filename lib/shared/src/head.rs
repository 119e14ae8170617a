use crate::site::site;

/// Document head values for one rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadMeta {
    pub title: String,
    pub description: String,
    pub og_url: String,
    pub og_image: String,
    pub og_site_name: String,
    pub og_title: String,
    pub og_description: String,
}

pub fn page_title(title: &str) -> String {
    format!("{} | {}", title, site().name)
}

impl HeadMeta {
    pub fn new(title: &str, description: &str, path: &str) -> Self {
        let site = site();
        Self {
            title: page_title(title),
            description: description.to_string(),
            og_url: path.to_string(),
            og_image: site.icon.clone(),
            og_site_name: site.full_name.clone(),
            og_title: page_title(title),
            og_description: description.to_string(),
        }
    }

    /// `(property, content)` pairs in emission order.
    pub fn open_graph(&self) -> [(&'static str, &str); 5] {
        [
            ("og:url", self.og_url.as_str()),
            ("og:image", self.og_image.as_str()),
            ("og:site_name", self.og_site_name.as_str()),
            ("og:title", self.og_title.as_str()),
            ("og:description", self.og_description.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_title_carries_site_suffix() {
        for title in ["Home", "About Us", "Aksara Box"] {
            let meta = HeadMeta::new(title, "desc", "/");
            assert_eq!(meta.og_title, format!("{title} | PINUS"));
            assert_eq!(meta.title, meta.og_title);
        }
    }

    #[test]
    fn open_graph_uses_route_and_fixed_site_values() {
        let meta = HeadMeta::new("Events", "What is on", "/events");
        assert_eq!(
            meta.open_graph(),
            [
                ("og:url", "/events"),
                ("og:image", "/assets/icons/pinus.png"),
                ("og:site_name", "Perhimpunan Indonesia NUS"),
                ("og:title", "Events | PINUS"),
                ("og:description", "What is on"),
            ]
        );
    }
}
