use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

/// 検索 API へのトランスポート
#[async_trait::async_trait]
pub trait PhotoFetcher: Send + Sync {
    /// GET `url` and return the response body, whatever the HTTP status.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// reqwest で 500px API を叩く実装
#[derive(Clone)]
pub struct PxFetcher {
    client: Client,
}

impl PxFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PhotoFetcher for PxFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .context("Search request failed")?;

        // 500px はエラー時も JSON を返すので、ステータスに関係なくボディを渡す
        let status = res.status();
        if !status.is_success() {
            tracing::debug!("Search API returned {} for {}", status, url.path());
        }

        let body = res
            .bytes()
            .await
            .context("Failed to read search response")?;
        Ok(body.to_vec())
    }
}
