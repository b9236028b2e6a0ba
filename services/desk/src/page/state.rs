//! services/desk/src/page/state.rs
//!
//! Defines the shared ports and the state owned by one page.

use crate::config::Config;
use std::sync::Arc;
use study_desk_core::ports::{DialogService, MaterialsGateway, PageView};
use study_desk_core::{
    AddMaterialForm, ChatLog, MaterialsStore, Profile, QuestionInput, RequestSlot, SlotKind,
};

//=========================================================================================
// AppState (Ports Shared by the Controller)
//=========================================================================================

/// The adapters and configuration, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn MaterialsGateway>,
    pub dialogs: Arc<dyn DialogService>,
    pub view: Arc<dyn PageView>,
    pub config: Arc<Config>,
}

//=========================================================================================
// PageState (Everything the Page Shows)
//=========================================================================================

/// The state of a single page. Mutated only by its `PageController`.
pub struct PageState {
    pub store: MaterialsStore,
    /// Subject names offered by the add form, as last listed by the server.
    pub subjects: Vec<String>,
    pub chat: ChatLog,
    pub add_form: AddMaterialForm,
    pub question: QuestionInput,
    pub profile: Profile,
    pub list_requests: RequestSlot,
    pub chat_requests: RequestSlot,
}

impl PageState {
    pub fn new(profile: Profile) -> Self {
        Self {
            store: MaterialsStore::new(),
            subjects: Vec::new(),
            chat: ChatLog::new(),
            add_form: AddMaterialForm::new(),
            question: QuestionInput::default(),
            profile,
            list_requests: RequestSlot::new(SlotKind::MaterialsList),
            chat_requests: RequestSlot::new(SlotKind::Chat),
        }
    }
}
