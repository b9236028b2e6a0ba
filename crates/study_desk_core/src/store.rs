//! crates/study_desk_core/src/store.rs
//!
//! The client-held, ordered cache of materials. It mirrors the server's last
//! known list and is never an independent source of truth.

use crate::domain::Material;

/// An ordered sequence of materials with unique ids.
#[derive(Debug, Clone, Default)]
pub struct MaterialsStore {
    materials: Vec<Material>,
}

impl MaterialsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole content with a fresh server listing.
    ///
    /// Server order is kept. If the listing repeats an id, only the first
    /// occurrence is kept.
    pub fn replace_all(&mut self, materials: Vec<Material>) {
        let mut unique: Vec<Material> = Vec::with_capacity(materials.len());
        for material in materials {
            if !unique.iter().any(|m| m.id == material.id) {
                unique.push(material);
            }
        }
        self.materials = unique;
    }

    /// Appends a newly created material at the end.
    ///
    /// An older entry with the same id is dropped first, so the new record
    /// always ends up last.
    pub fn append(&mut self, material: Material) {
        self.materials.retain(|m| m.id != material.id);
        self.materials.push(material);
    }

    /// Removes the material with the given id. Returns `false` if it was absent.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.materials.len();
        self.materials.retain(|m| m.id != id);
        self.materials.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.materials.iter().map(|m| m.id).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Material> {
        self.materials.clone()
    }
}
