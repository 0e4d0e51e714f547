//! The character collection and the currently selected character.
//!
//! Constructed once at startup with [`CharacterStore::open`]. Every
//! mutation writes the whole collection back through the storage backend;
//! the selection is transient and never persisted.

use crate::character::Character;
use crate::storage::{CharacterStorage, StorageError};
use crate::text::convert_to_slug;
use std::collections::HashSet;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("a character with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("character name '{0}' produces an empty slug")]
    EmptySlug(String),

    #[error("no character with slug '{0}'")]
    NotFound(String),

    #[error("stored characters share the slug '{0}'")]
    ConflictingSlugs(String),
}

/// Ordered character collection backed by durable storage.
#[derive(Debug)]
pub struct CharacterStore<S: CharacterStorage> {
    storage: S,
    characters: Vec<Character>,
    /// Slug of the selected character.
    selected: Option<String>,
}

impl<S: CharacterStorage> CharacterStore<S> {
    /// Load the collection from `storage`.
    ///
    /// Stored slugs are re-derived from the names, and the collection is
    /// written back if any changed. Fails if a name yields an empty slug or
    /// two names yield the same one.
    pub fn open(mut storage: S) -> Result<Self, StoreError> {
        let mut characters = storage.load()?;

        let mut changed = false;
        for character in &mut characters {
            let stored = character.slug.clone();
            if character.refresh_slug() {
                tracing::info!(stored = %stored, slug = %character.slug, "re-derived stored slug");
                changed = true;
            }
            if character.slug.is_empty() {
                tracing::warn!(name = %character.name, "stored character has an empty slug");
                return Err(StoreError::EmptySlug(character.name.clone()));
            }
        }

        let mut seen = HashSet::new();
        for character in &characters {
            if !seen.insert(character.slug.as_str()) {
                tracing::warn!(slug = %character.slug, "stored characters share a slug");
                return Err(StoreError::ConflictingSlugs(character.slug.clone()));
            }
        }

        if changed {
            storage.save(&characters)?;
        }
        tracing::info!(count = characters.len(), "opened character store");
        Ok(Self {
            storage,
            characters,
            selected: None,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All characters, in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, slug: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn position(&self, slug: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.slug == slug)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a character. The slug is recomputed from the name.
    pub fn add(&mut self, mut character: Character) -> Result<&Character, StoreError> {
        character.slug = convert_to_slug(&character.name);
        if character.slug.is_empty() {
            tracing::warn!(name = %character.name, "rejected character with empty slug");
            return Err(StoreError::EmptySlug(character.name));
        }
        if self.get(&character.slug).is_some() {
            tracing::warn!(slug = %character.slug, "rejected duplicate character");
            return Err(StoreError::DuplicateSlug(character.slug));
        }

        tracing::info!(slug = %character.slug, "adding character");
        self.characters.push(character);
        if let Err(e) = self.persist() {
            self.characters.pop();
            return Err(e);
        }
        let index = self.characters.len() - 1;
        Ok(&self.characters[index])
    }

    /// Edit a character in place.
    ///
    /// The slug follows the (possibly changed) name. A rename onto another
    /// character's slug, or onto an empty slug, is rolled back. Returns the
    /// edited character.
    pub fn update<F>(&mut self, slug: &str, edit: F) -> Result<&Character, StoreError>
    where
        F: FnOnce(&mut Character),
    {
        let index = self
            .position(slug)
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;

        let previous = self.characters[index].clone();
        edit(&mut self.characters[index]);
        let character = &mut self.characters[index];
        character.slug = convert_to_slug(&character.name);
        let new_slug = character.slug.clone();

        if new_slug.is_empty() {
            let name = character.name.clone();
            self.characters[index] = previous;
            tracing::warn!(slug, "rejected rename to empty slug");
            return Err(StoreError::EmptySlug(name));
        }
        let collides = self
            .characters
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.slug == new_slug);
        if collides {
            self.characters[index] = previous;
            tracing::warn!(slug, new_slug = %new_slug, "rejected rename onto existing slug");
            return Err(StoreError::DuplicateSlug(new_slug));
        }

        if let Err(e) = self.persist() {
            self.characters[index] = previous;
            return Err(e);
        }
        if new_slug != slug {
            tracing::info!(slug, new_slug = %new_slug, "renamed character");
            if self.selected.as_deref() == Some(slug) {
                self.selected = Some(new_slug);
            }
        } else {
            tracing::info!(slug, "updated character");
        }
        Ok(&self.characters[index])
    }

    /// Remove a character, clearing the selection if it pointed at it.
    pub fn remove(&mut self, slug: &str) -> Result<Character, StoreError> {
        let index = self
            .position(slug)
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;

        let removed = self.characters.remove(index);
        if let Err(e) = self.persist() {
            self.characters.insert(index, removed);
            return Err(e);
        }
        if self.selected.as_deref() == Some(slug) {
            self.selected = None;
        }
        tracing::info!(slug, "removed character");
        Ok(removed)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.storage.save(&self.characters).map_err(|e| {
            tracing::warn!(error = %e, "failed to save characters");
            StoreError::from(e)
        })
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Mark a character as the one being edited.
    pub fn select(&mut self, slug: &str) -> Result<&Character, StoreError> {
        let index = self
            .position(slug)
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;
        self.selected = Some(slug.to_string());
        Ok(&self.characters[index])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Character> {
        self.selected.as_deref().and_then(|slug| self.get(slug))
    }

    /// Carry weight of the selected character, 0 with no selection.
    pub fn selected_carry_weight(&self) -> f64 {
        self.selected()
            .map(Character::total_carry_weight)
            .unwrap_or(0.0)
    }

    /// Whether the selected character is over-encumbered.
    ///
    /// With no selection this compares a zero weight against a zero
    /// strength, so it is false.
    pub fn selected_over_encumbered(&self) -> bool {
        let strength = self.selected().map(|c| c.attributes.strength).unwrap_or(0);
        self.selected_carry_weight() > f64::from(strength) * 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_sample_fighter, Attributes, Equipment};
    use crate::storage::MemoryStorage;

    fn open_empty() -> (CharacterStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = CharacterStore::open(storage.clone()).expect("open should succeed");
        (store, storage)
    }

    /// Storage whose saves always fail.
    struct BrokenStorage;

    impl CharacterStorage for BrokenStorage {
        fn load(&self) -> Result<Vec<Character>, StorageError> {
            Ok(Vec::new())
        }

        fn save(&mut self, _characters: &[Character]) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_add_and_get() {
        let (mut store, storage) = open_empty();
        let added = store.add(Character::new("Grom the Bold ")).unwrap();
        assert_eq!(added.slug, "grom-the-bold");

        assert_eq!(store.len(), 1);
        assert!(store.get("grom-the-bold").is_some());
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_add_recomputes_stale_slug() {
        let (mut store, _) = open_empty();
        let mut character = Character::new("Lena");
        character.slug = "whatever".to_string();
        store.add(character).unwrap();
        assert!(store.get("lena").is_some());
        assert!(store.get("whatever").is_none());
    }

    #[test]
    fn test_add_duplicate_slug() {
        let (mut store, storage) = open_empty();
        store.add(Character::new("Grom")).unwrap();
        let err = store.add(Character::new("  grom ")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(ref s) if s == "grom"));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_add_empty_slug() {
        let (mut store, storage) = open_empty();
        let err = store.add(Character::new("!!!")).unwrap_err();
        assert!(matches!(err, StoreError::EmptySlug(_)));
        assert!(store.is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (mut store, _) = open_empty();
        for name in ["Charlie", "Alpha", "Beta"] {
            store.add(Character::new(name)).unwrap();
        }
        let slugs: Vec<_> = store.characters().iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["charlie", "alpha", "beta"]);
    }

    #[test]
    fn test_update_in_place() {
        let (mut store, storage) = open_empty();
        store.add(create_sample_fighter("Thorin")).unwrap();

        let updated = store
            .update("thorin", |c| {
                c.current_lp -= 10;
                c.equipments.push(Equipment::new("Martelo", 5.0, 1));
            })
            .unwrap();
        assert_eq!(updated.current_lp, 26);
        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.load().unwrap()[0].current_lp, 26);
    }

    #[test]
    fn test_update_rename_follows_selection() {
        let (mut store, _) = open_empty();
        store.add(Character::new("Grom")).unwrap();
        store.select("grom").unwrap();

        store.update("grom", |c| c.name = "Grom the Bold".to_string()).unwrap();
        assert!(store.get("grom").is_none());
        assert_eq!(store.selected().unwrap().slug, "grom-the-bold");
    }

    #[test]
    fn test_update_rename_collision_rolls_back() {
        let (mut store, storage) = open_empty();
        store.add(Character::new("Alpha")).unwrap();
        store.add(Character::new("Beta")).unwrap();

        let err = store
            .update("beta", |c| {
                c.name = "Alpha".to_string();
                c.level = 9;
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(_)));

        let beta = store.get("beta").unwrap();
        assert_eq!(beta.name, "Beta");
        assert_eq!(beta.level, 1);
        assert_eq!(storage.save_count(), 2);
    }

    #[test]
    fn test_update_missing() {
        let (mut store, _) = open_empty();
        let err = store.update("nobody", |_| {}).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_remove_clears_selection() {
        let (mut store, storage) = open_empty();
        store.add(Character::new("Alpha")).unwrap();
        store.add(Character::new("Beta")).unwrap();
        store.select("alpha").unwrap();

        let removed = store.remove("alpha").unwrap();
        assert_eq!(removed.name, "Alpha");
        assert!(store.selected().is_none());
        assert_eq!(storage.load().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let (mut store, _) = open_empty();
        store.add(Character::new("Alpha")).unwrap();
        store.add(Character::new("Beta")).unwrap();
        store.select("alpha").unwrap();

        store.remove("beta").unwrap();
        assert_eq!(store.selected().unwrap().slug, "alpha");
    }

    #[test]
    fn test_select_missing() {
        let (mut store, _) = open_empty();
        assert!(matches!(store.select("ghost"), Err(StoreError::NotFound(_))));
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_no_selection_defaults() {
        let (store, _) = open_empty();
        assert_eq!(store.selected_carry_weight(), 0.0);
        assert!(!store.selected_over_encumbered());
    }

    #[test]
    fn test_selected_encumbrance_recomputes() {
        let (mut store, _) = open_empty();
        let mut attributes = Attributes::default();
        attributes.strength = 10;
        store
            .add(
                Character::new("Mula")
                    .with_attributes(attributes)
                    .with_equipment(Equipment::new("Corda", 5.0, 2))
                    .with_equipment(Equipment::new("Tocha", 1.0, 1)),
            )
            .unwrap();
        store.select("mula").unwrap();

        assert_eq!(store.selected_carry_weight(), 11.0);
        assert!(!store.selected_over_encumbered());

        store
            .update("mula", |c| c.equipments.push(Equipment::new("Bigorna", 20.0, 1)))
            .unwrap();
        assert_eq!(store.selected_carry_weight(), 31.0);
        assert!(store.selected_over_encumbered());

        store.clear_selection();
        assert_eq!(store.selected_carry_weight(), 0.0);
        assert!(!store.selected_over_encumbered());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let mut store = CharacterStore::open(BrokenStorage).unwrap();
        let err = store.add(Character::new("Alpha")).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Io(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_rederives_stale_slugs() {
        let storage =
            MemoryStorage::with_json(r#"[{"name": "Ação Rápida", "slug": "ao-rpida"}]"#);
        let mut store = CharacterStore::open(storage.clone()).unwrap();

        assert!(store.get("ao-rpida").is_none());
        assert!(store.get(&convert_to_slug("Ação Rápida")).is_some());
        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.load().unwrap()[0].slug, "ação-rápida");

        let err = store.add(Character::new("Ação Rápida")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_open_without_stale_slugs_does_not_save() {
        let json = serde_json::to_string(&vec![create_sample_fighter("Alpha")]).unwrap();
        let storage = MemoryStorage::with_json(json);
        CharacterStore::open(storage.clone()).unwrap();
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_open_rejects_shared_slugs() {
        let storage = MemoryStorage::with_json(
            r#"[{"name": "Grom", "slug": "grom"}, {"name": "GROM ", "slug": "grom-2"}]"#,
        );
        let err = CharacterStore::open(storage.clone()).unwrap_err();
        assert!(matches!(err, StoreError::ConflictingSlugs(ref s) if s == "grom"));
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_open_rejects_empty_slug() {
        let storage = MemoryStorage::with_json(r#"[{"name": "???", "slug": "x"}]"#);
        let err = CharacterStore::open(storage).unwrap_err();
        assert!(matches!(err, StoreError::EmptySlug(_)));
    }

    #[test]
    fn test_open_loads_existing() {
        let json = serde_json::to_string(&vec![create_sample_fighter("Alpha")]).unwrap();
        let store = CharacterStore::open(MemoryStorage::with_json(json)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.selected().is_none());
    }
}
