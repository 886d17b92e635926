//! Direct REST implementation of the annotation client
//!
//! Token authentication, JSON bodies, and DRF-style pagination.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode, Url};

use crate::client::AnnotationClient;
use crate::error::{ClientError, Result};
use crate::types::{AnnoTask, ExportFormat, Paginated};

/// REST client talking straight to the annotation server
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    page_size: usize,
}

impl RestClient {
    /// Build a client for the given server
    ///
    /// `server_url` is the server root (e.g. `http://localhost:8080`);
    /// API paths are joined under it. `token` is sent as a bearer token
    /// when present; without one the server only exposes public data.
    pub fn new(
        server_url: &str,
        token: Option<String>,
        timeout: Duration,
        page_size: usize,
    ) -> Result<Self> {
        let base_url = Url::parse(server_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{server_url}: {e}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            token,
            page_size,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map non-success statuses to `ClientError::Api` with the server's
    /// response body as the message.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        let message = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            message
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AnnotationClient for RestClient {
    async fn fetch_tasks(&self) -> Result<Vec<AnnoTask>> {
        let mut url = self.endpoint(&format!("api/tasks?page_size={}", self.page_size))?;
        let mut tasks = Vec::new();

        loop {
            log::debug!("GET {url}");
            let response = self.authorize(self.http.get(url.clone())).send().await?;
            let page: Paginated<AnnoTask> = Self::check(response).await?.json().await?;
            tasks.extend(page.results);

            match page.next {
                Some(next) => {
                    url = Url::parse(&next).map_err(|e| ClientError::InvalidUrl(format!("{next}: {e}")))?;
                }
                None => break,
            }
        }

        log::info!("fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn delete_task(&self, task_id: u64) -> Result<()> {
        let url = self.endpoint(&format!("api/tasks/{task_id}"))?;
        log::debug!("DELETE {url}");
        let response = self.authorize(self.http.delete(url)).send().await?;
        Self::check(response).await?;
        log::info!("deleted task {task_id}");
        Ok(())
    }

    async fn export_annotations(&self, task_id: u64, format: ExportFormat) -> Result<()> {
        let url = self.endpoint(&format!("api/tasks/{task_id}/annotations/export"))?;
        log::debug!("POST {url} format={format}");
        let response = self
            .authorize(self.http.post(url).query(&[("format", format.as_str())]))
            .send()
            .await?;
        let response = Self::check(response).await?;
        if response.status() != StatusCode::ACCEPTED {
            log::debug!(
                "export for task {task_id} answered {} instead of 202",
                response.status()
            );
        }
        log::info!("scheduled {format} export for task {task_id}");
        Ok(())
    }
}
