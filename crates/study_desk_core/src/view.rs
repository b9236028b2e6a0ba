//! crates/study_desk_core/src/view.rs
//!
//! Structured view models built from the current state. Presentation adapters
//! receive these instead of pre-formatted markup.

use crate::chat::ChatLog;
use crate::domain::Material;
use crate::store::MaterialsStore;

pub const EMPTY_HEADLINE: &str = "No saved materials yet";
pub const EMPTY_HINT: &str = "Add your first material using the button above!";
pub const DELETE_LABEL: &str = "Delete";

/// The delete action exposed by a card, bound to that card's material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAction {
    pub material_id: i64,
}

/// One rendered material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCard {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub type_label: String,
    pub date: String,
    pub delete: DeleteAction,
}

impl MaterialCard {
    fn from_material(material: &Material) -> Self {
        Self {
            id: material.id,
            title: material.title.clone(),
            subject: material.subject.clone(),
            content: material.content.clone(),
            type_label: material.kind.label().to_string(),
            date: material.date.clone(),
            delete: DeleteAction {
                material_id: material.id,
            },
        }
    }
}

/// The full content of the materials panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialsPanel {
    Empty {
        headline: &'static str,
        hint: &'static str,
    },
    Cards(Vec<MaterialCard>),
}

impl MaterialsPanel {
    pub fn cards(&self) -> &[MaterialCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn card_ids(&self) -> Vec<i64> {
        self.cards().iter().map(|c| c.id).collect()
    }
}

/// Rebuilds the materials panel from scratch.
pub fn render_materials(store: &MaterialsStore) -> MaterialsPanel {
    if store.is_empty() {
        return MaterialsPanel::Empty {
            headline: EMPTY_HEADLINE,
            hint: EMPTY_HINT,
        };
    }
    MaterialsPanel::Cards(store.iter().map(MaterialCard::from_material).collect())
}

/// Page statistics. The materials count is shown in two places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsView {
    pub materials_count: usize,
    pub total_materials: usize,
    pub total_questions: usize,
}

pub fn compute_stats(store: &MaterialsStore, chat: &ChatLog) -> StatsView {
    let materials = store.len();
    StatsView {
        materials_count: materials,
        total_materials: materials,
        total_questions: chat.user_entry_count(),
    }
}
