//! services/desk/src/adapters/http_gateway.rs
//!
//! This module contains the adapter for the study-materials REST backend.
//! It implements the `MaterialsGateway` port from the `core` crate.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use study_desk_core::ports::{MaterialsGateway, PortError, PortResult};
use study_desk_core::{Material, MaterialsListing, NewMaterial};
use tracing::debug;

use crate::protocol::{
    AddMaterialRequest, AddMaterialResponse, AskRequest, AskResponse, MaterialsResponse,
    StatusResponse, STATUS_SUCCESS,
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `MaterialsGateway` over HTTP with JSON bodies.
///
/// Requests are sent once, without retries. The HTTP status code is not
/// inspected; only the decoded body decides success.
#[derive(Clone)]
pub struct HttpMaterialsGateway {
    client: Client,
    base_url: String,
}

impl HttpMaterialsGateway {
    /// Creates a new `HttpMaterialsGateway` for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> PortResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| PortError::Decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> PortError {
    PortError::Transport(e.to_string())
}

//=========================================================================================
// `MaterialsGateway` Trait Implementation
//=========================================================================================

#[async_trait]
impl MaterialsGateway for HttpMaterialsGateway {
    async fn list_materials(&self) -> PortResult<MaterialsListing> {
        let response = self
            .client
            .get(self.url("/api/materials"))
            .send()
            .await
            .map_err(transport)?;
        let body: MaterialsResponse = Self::decode(response).await?;
        debug!("Fetched {} materials", body.materials.len());
        Ok(body.into())
    }

    async fn create_material(&self, material: &NewMaterial) -> PortResult<Material> {
        let response = self
            .client
            .post(self.url("/api/add_material"))
            .json(&AddMaterialRequest::from(material))
            .send()
            .await
            .map_err(transport)?;
        let body: AddMaterialResponse = Self::decode(response).await?;
        if body.status != STATUS_SUCCESS {
            return Err(PortError::Rejected(body.status));
        }
        body.material
            .map(Material::from)
            .ok_or_else(|| PortError::Decode("success response without a material".to_string()))
    }

    async fn delete_material(&self, id: i64) -> PortResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/delete_material/{}", id)))
            .send()
            .await
            .map_err(transport)?;
        let body: StatusResponse = Self::decode(response).await?;
        if body.status != STATUS_SUCCESS {
            return Err(PortError::Rejected(body.status));
        }
        Ok(())
    }

    async fn ask(&self, question: &str) -> PortResult<String> {
        let response = self
            .client
            .post(self.url("/api/ask_ai"))
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(transport)?;
        let body: AskResponse = Self::decode(response).await?;
        Ok(body.answer)
    }
}
