//! services/desk/src/protocol.rs
//!
//! Defines the JSON bodies exchanged with the study-materials backend.

use serde::{Deserialize, Serialize};
use study_desk_core::{Material, MaterialKind, MaterialsListing, NewMaterial};

/// The only status value the backend uses to report success.
pub const STATUS_SUCCESS: &str = "success";

//=========================================================================================
// Payloads Received FROM the Server
//=========================================================================================

/// A material as the server serializes it.
#[derive(Deserialize, Debug, Clone)]
pub struct MaterialDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub date: String,
}

impl From<MaterialDto> for Material {
    fn from(dto: MaterialDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            subject: dto.subject,
            kind: MaterialKind::from_code(&dto.kind),
            date: dto.date,
        }
    }
}

/// `GET /api/materials`
#[derive(Deserialize, Debug, Default)]
pub struct MaterialsResponse {
    #[serde(default)]
    pub materials: Vec<MaterialDto>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl From<MaterialsResponse> for MaterialsListing {
    fn from(response: MaterialsResponse) -> Self {
        Self {
            materials: response.materials.into_iter().map(Material::from).collect(),
            subjects: response.subjects,
        }
    }
}

/// `POST /api/add_material`
#[derive(Deserialize, Debug)]
pub struct AddMaterialResponse {
    pub status: String,
    pub material: Option<MaterialDto>,
}

/// `DELETE /api/delete_material/{id}`
#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
}

/// `POST /api/ask_ai`
#[derive(Deserialize, Debug)]
pub struct AskResponse {
    pub answer: String,
}

//=========================================================================================
// Payloads Sent TO the Server
//=========================================================================================

#[derive(Serialize, Debug)]
pub struct AddMaterialRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub subject: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

impl<'a> From<&'a NewMaterial> for AddMaterialRequest<'a> {
    fn from(material: &'a NewMaterial) -> Self {
        Self {
            title: &material.title,
            content: &material.content,
            subject: &material.subject,
            kind: material.kind.code(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}
