//! reqwest implementation of the [`Backend`](super::Backend) trait.

use async_trait::async_trait;
use serde::Deserialize;

use super::{ApiError, Backend, BadgeRequest, SaveResultsRequest, SaveResultsResponse};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RoadmapRef {
    #[serde(rename = "roadmapId")]
    roadmap_id: String,
}

#[derive(Debug, Deserialize)]
struct SkillList {
    skills: Vec<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn resolve_roadmap(&self, qcm_id: &str) -> Result<String, ApiError> {
        let reference: RoadmapRef = self
            .get_json(&format!("/api/roadmap/qcm/{qcm_id}"))
            .await?;
        Ok(reference.roadmap_id)
    }

    async fn resolve_skills(&self, roadmap_id: &str) -> Result<Vec<String>, ApiError> {
        let list: SkillList = self
            .get_json(&format!("/api/qcm/roadmap/{roadmap_id}"))
            .await?;
        Ok(list.skills)
    }

    async fn save_results(
        &self,
        request: &SaveResultsRequest,
    ) -> Result<SaveResultsResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/qcm/saveResults"))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: SaveResultsResponse = response.json().await?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.message.clone().unwrap_or_else(|| "save refused".to_string()),
            ));
        }
        Ok(body)
    }

    async fn create_badge(&self, request: &BadgeRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/badge/create"))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}
