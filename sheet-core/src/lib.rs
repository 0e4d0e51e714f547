//! Character sheet core.
//!
//! This crate provides:
//! - The character sheet data model and its JSON storage shape
//! - Label and icon lookups for attributes, sizes, armor and spell tags
//! - Derived values (carry weight, encumbrance, size modifiers)
//! - A character store with swappable persistence
//!
//! # Quick Start
//!
//! ```no_run
//! use sheet_core::{Character, CharacterStore, Equipment, StoreConfig};
//!
//! fn main() -> Result<(), sheet_core::StoreError> {
//!     let mut store = CharacterStore::open(StoreConfig::from_env().open_storage())?;
//!
//!     store.add(Character::new("Grom the Bold").with_equipment(Equipment::new("Corda", 1.0, 2)))?;
//!     store.select("grom-the-bold")?;
//!
//!     println!("carrying {}", store.selected_carry_weight());
//!     Ok(())
//! }
//! ```

pub mod character;
pub mod config;
pub mod spells;
pub mod storage;
pub mod store;
pub mod tables;
pub mod text;

// Primary public API
pub use character::{
    ArmorOrShield, ArmorType, AttackType, Attacks, Attribute, Attributes, Character,
    CharacterSize, Equipment, Expandable, Money, Saving, Skill, Weapon,
};
pub use config::StoreConfig;
pub use spells::{descriptor_icon, origin_icon, Descriptor, Spell, SpellCatalog};
pub use storage::{CharacterStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::{CharacterStore, StoreError};
pub use tables::{parse_attribute, size_modifier, stealth_modifier};
pub use text::{capitalize, convert_to_slug};
