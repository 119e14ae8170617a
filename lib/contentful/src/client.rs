use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::content::ContentEntry;
use tracing::{debug, info};
use url::Url;

use crate::{
    error::{ContentfulError, Result},
    models::AssetCollection,
    traits::ContentSource,
};

const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";
const DEFAULT_ENVIRONMENT: &str = "master";
const DEFAULT_PAGE_SIZE: u32 = 100;
const MAX_PAGE_SIZE: u32 = 1000;

/// Delivery API client for a single space and environment.
#[derive(Debug, Clone)]
pub struct ContentfulClient {
    base_url: Url,
    space_id: String,
    environment: String,
    access_token: String,
    page_size: u32,
    client: Client,
}

#[derive(Default)]
pub struct ContentfulClientBuilder {
    base_url: Option<String>,
    space_id: Option<String>,
    environment: Option<String>,
    access_token: Option<String>,
    page_size: Option<u32>,
}

impl ContentfulClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn space_id(mut self, space_id: &str) -> Self {
        self.space_id = Some(space_id.to_string());
        self
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn build(self) -> Result<ContentfulClient> {
        let space_id = self
            .space_id
            .filter(|s| !s.is_empty())
            .ok_or(ContentfulError::NotConfigured)?;
        let access_token = self
            .access_token
            .filter(|s| !s.is_empty())
            .ok_or(ContentfulError::NotConfigured)?;
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        // Trailing slash so `join` appends instead of replacing the last segment.
        let base_url = Url::parse(&format!("{}/", base.trim_end_matches('/')))?;

        Ok(ContentfulClient {
            base_url,
            space_id,
            environment: self
                .environment
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            access_token,
            page_size: self
                .page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
            client: Client::new(),
        })
    }
}

impl ContentfulClient {
    pub fn assets_url(&self, skip: u32) -> Result<Url> {
        let mut url = self.base_url.join(&format!(
            "spaces/{}/environments/{}/assets",
            self.space_id, self.environment
        ))?;
        url.query_pairs_mut()
            .append_pair("skip", &skip.to_string())
            .append_pair("limit", &self.page_size.to_string());
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("Request: GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            Err(ContentfulError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl ContentSource for ContentfulClient {
    fn id(&self) -> &'static str {
        "contentful"
    }

    fn name(&self) -> &'static str {
        "Contentful"
    }

    async fn images(&self) -> Result<Vec<ContentEntry>> {
        let mut entries = Vec::new();
        let mut skip = 0;
        loop {
            let page: AssetCollection = self.get(self.assets_url(skip)?).await?;
            let next = page.next_skip();
            entries.extend(page.into_entries());
            match next {
                Some(n) => skip = n,
                None => break,
            }
        }
        info!(
            "Fetched {} image entries from space {}",
            entries.len(),
            self.space_id
        );
        Ok(entries)
    }

    async fn health_check(&self) -> bool {
        let url = match self
            .base_url
            .join(&format!("spaces/{}", self.space_id))
        {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
