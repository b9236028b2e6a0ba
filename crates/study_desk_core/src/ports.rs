//! crates/study_desk_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, keeping the core
//! independent of the backend transport and of the presentation technology.

use async_trait::async_trait;
use uuid::Uuid;

use crate::chat::ChatEntry;
use crate::domain::{Material, MaterialsListing, NewMaterial, Notice, Profile};
use crate::requests::RequestTicket;
use crate::view::{MaterialsPanel, StatsView};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    /// The server answered with a status other than "success".
    #[error("Server rejected the request with status '{0}'")]
    Rejected(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The four backend operations. Each call is a single request with no retry.
#[async_trait]
pub trait MaterialsGateway: Send + Sync {
    async fn list_materials(&self) -> PortResult<MaterialsListing>;

    async fn create_material(&self, material: &NewMaterial) -> PortResult<Material>;

    async fn delete_material(&self, id: i64) -> PortResult<()>;

    /// Sends a question to the assistant and returns its free-text answer.
    async fn ask(&self, question: &str) -> PortResult<String>;
}

/// The user's reply to a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

/// The user's reply to a prompt dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Submitted(String),
    Cancelled,
}

impl PromptResponse {
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Submitted(text) => Some(text),
            Self::Cancelled => None,
        }
    }
}

/// Modal dialogs. Each call waits until the user has answered.
#[async_trait]
pub trait DialogService: Send + Sync {
    async fn alert(&self, message: &str);

    async fn confirm(&self, message: &str) -> Confirmation;

    /// Asks for a line of text, pre-filled with `current`.
    async fn prompt(&self, message: &str, current: &str) -> PromptResponse;
}

/// The page surface the controller renders into.
pub trait PageView: Send + Sync {
    /// Replaces the whole materials panel.
    fn render_materials(&self, panel: &MaterialsPanel);

    fn append_chat_entry(&self, entry: &ChatEntry);

    /// Removes the pending chat entry carrying `marker`, if it is still shown.
    fn remove_chat_entry(&self, marker: RequestTicket);

    fn scroll_chat_to_bottom(&self);

    fn render_stats(&self, stats: &StatsView);

    fn set_add_form_visible(&self, visible: bool);

    fn render_profile(&self, profile: &Profile);

    fn show_notice(&self, notice: &Notice);

    fn dismiss_notice(&self, id: Uuid);
}
