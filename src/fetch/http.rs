use super::UdfSource;
use crate::error::{Error, Result};
use crate::types::{Envelope, Project, ProjectId, Udf};
use serde::de::DeserializeOwned;

/// Reads projects and UDFs from the functions API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    origin: String,
}

impl HttpSource {
    /// Create a source for an API origin such as `http://docs.example.com:9000`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), origin)
    }

    pub fn with_client(client: reqwest::Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { client, origin }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn projects_url(&self) -> String {
        format!("{}/v1/projects", self.origin)
    }

    fn functions_url(&self, project: &ProjectId) -> String {
        format!("{}/v1/projects/{}/functions", self.origin, project)
    }

    async fn get_data<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}

impl UdfSource for HttpSource {
    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_data(self.projects_url()).await
    }

    async fn functions(&self, project: &ProjectId) -> Result<Vec<Udf>> {
        self.get_data(self.functions_url(project)).await
    }
}
