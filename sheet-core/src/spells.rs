//! Spell records and the icon lookups used to display them.
//!
//! Spells come from an external, read-only catalog. Characters only hold
//! their ids (`Character::spell_ids`), so the catalog resolves them here.

use crate::character::Character;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Icon shown for a descriptor tag that is not in the table.
///
/// Styled red so a content editor notices the bad tag.
pub const UNKNOWN_DESCRIPTOR_ICON: &str = "fa-solid fa-bug text-red-500";

/// Icon for spells of divine origin.
pub const DIVINE_ORIGIN_ICON: &str = "fa-solid fa-book-bible";

/// Icon for every other origin.
pub const OTHER_ORIGIN_ICON: &str = "fa-solid fa-book-tanakh";

/// Origin tag that marks a divine spell.
pub const DIVINE_ORIGIN: &str = "divina";

// ============================================================================
// Descriptors
// ============================================================================

/// Spell descriptor tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    Cura,
    Frio,
    Encantamento,
    Adivinhacao,
    Abjuracao,
    Invocacao,
    Necromancia,
    Terra,
    Ilusao,
    Agua,
    Sonico,
    Gelo,
    Transmutacao,
    Ar,
    Eletricidade,
    Fogo,
    Medo,
    Escuridao,
    Caos,
    Ordem,
    Tempo,
    Luz,
    Essencia,
    Bem,
    Mal,
    Acido,
    Coringa,
}

impl Descriptor {
    /// Parse a catalog tag. Tags are matched exactly, accents included.
    ///
    /// Both `encantamento` and `encantamentos` appear in catalog data and
    /// map to the same descriptor.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let descriptor = match tag {
            "cura" => Descriptor::Cura,
            "frio" => Descriptor::Frio,
            "encantamento" | "encantamentos" => Descriptor::Encantamento,
            "adivinhação" => Descriptor::Adivinhacao,
            "abjuração" => Descriptor::Abjuracao,
            "invocação" => Descriptor::Invocacao,
            "necromância" => Descriptor::Necromancia,
            "terra" => Descriptor::Terra,
            "ilusão" => Descriptor::Ilusao,
            "água" => Descriptor::Agua,
            "sônico" => Descriptor::Sonico,
            "gelo" => Descriptor::Gelo,
            "transmutação" => Descriptor::Transmutacao,
            "ar" => Descriptor::Ar,
            "eletricidade" => Descriptor::Eletricidade,
            "fogo" => Descriptor::Fogo,
            "medo" => Descriptor::Medo,
            "escuridão" => Descriptor::Escuridao,
            "caos" => Descriptor::Caos,
            "ordem" => Descriptor::Ordem,
            "tempo" => Descriptor::Tempo,
            "luz" => Descriptor::Luz,
            "essência" => Descriptor::Essencia,
            "bem" => Descriptor::Bem,
            "mal" => Descriptor::Mal,
            "ácido" => Descriptor::Acido,
            "coringa" => Descriptor::Coringa,
            _ => return None,
        };
        Some(descriptor)
    }

    /// Canonical tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Descriptor::Cura => "cura",
            Descriptor::Frio => "frio",
            Descriptor::Encantamento => "encantamento",
            Descriptor::Adivinhacao => "adivinhação",
            Descriptor::Abjuracao => "abjuração",
            Descriptor::Invocacao => "invocação",
            Descriptor::Necromancia => "necromância",
            Descriptor::Terra => "terra",
            Descriptor::Ilusao => "ilusão",
            Descriptor::Agua => "água",
            Descriptor::Sonico => "sônico",
            Descriptor::Gelo => "gelo",
            Descriptor::Transmutacao => "transmutação",
            Descriptor::Ar => "ar",
            Descriptor::Eletricidade => "eletricidade",
            Descriptor::Fogo => "fogo",
            Descriptor::Medo => "medo",
            Descriptor::Escuridao => "escuridão",
            Descriptor::Caos => "caos",
            Descriptor::Ordem => "ordem",
            Descriptor::Tempo => "tempo",
            Descriptor::Luz => "luz",
            Descriptor::Essencia => "essência",
            Descriptor::Bem => "bem",
            Descriptor::Mal => "mal",
            Descriptor::Acido => "ácido",
            Descriptor::Coringa => "coringa",
        }
    }

    /// Font Awesome classes for this descriptor.
    pub fn icon(&self) -> &'static str {
        match self {
            Descriptor::Cura => "fa-solid fa-heart",
            Descriptor::Frio => "fa-solid fa-snowflake",
            Descriptor::Encantamento => "fa-solid fa-face-grin-hearts",
            Descriptor::Adivinhacao => "fa-solid fa-magnifying-glass",
            Descriptor::Abjuracao => "fa-solid fa-shield-halved",
            Descriptor::Invocacao => "fa-solid fa-dragon",
            Descriptor::Necromancia => "fa-solid fa-skull",
            Descriptor::Terra => "fa-solid fa-mountain-sun",
            Descriptor::Ilusao => "fa-solid fa-wand-magic-sparkles",
            Descriptor::Agua => "fa-solid fa-droplet",
            Descriptor::Sonico => "fa-solid fa-volume-high",
            Descriptor::Gelo => "fa-solid fa-icicles",
            Descriptor::Transmutacao => "fa-solid fa-star-of-david",
            Descriptor::Ar => "fa-solid fa-wind",
            Descriptor::Eletricidade => "fa-solid fa-bolt",
            Descriptor::Fogo => "fa-solid fa-fire-flame-curved",
            Descriptor::Medo => "fa-solid fa-face-flushed",
            Descriptor::Escuridao => "fa-solid fa-eye-slash",
            Descriptor::Caos => "fa-solid fa-dice",
            Descriptor::Ordem => "fa-solid fa-scale-balanced",
            Descriptor::Tempo => "fa-solid fa-clock",
            Descriptor::Luz => "fa-regular fa-lightbulb",
            Descriptor::Essencia => "fa-solid fa-hand-sparkles",
            Descriptor::Bem => "fa-solid fa-handshake-simple",
            Descriptor::Mal => "fa-solid fa-hand-middle-finger",
            Descriptor::Acido => "fa-solid fa-hand-holding-droplet",
            Descriptor::Coringa => "fa-solid fa-diamond",
        }
    }

    pub fn all() -> [Descriptor; 27] {
        [
            Descriptor::Cura,
            Descriptor::Frio,
            Descriptor::Encantamento,
            Descriptor::Adivinhacao,
            Descriptor::Abjuracao,
            Descriptor::Invocacao,
            Descriptor::Necromancia,
            Descriptor::Terra,
            Descriptor::Ilusao,
            Descriptor::Agua,
            Descriptor::Sonico,
            Descriptor::Gelo,
            Descriptor::Transmutacao,
            Descriptor::Ar,
            Descriptor::Eletricidade,
            Descriptor::Fogo,
            Descriptor::Medo,
            Descriptor::Escuridao,
            Descriptor::Caos,
            Descriptor::Ordem,
            Descriptor::Tempo,
            Descriptor::Luz,
            Descriptor::Essencia,
            Descriptor::Bem,
            Descriptor::Mal,
            Descriptor::Acido,
            Descriptor::Coringa,
        ]
    }
}

/// Icon for an arbitrary descriptor tag from the catalog.
///
/// Never fails: unknown tags get [`UNKNOWN_DESCRIPTOR_ICON`].
pub fn descriptor_icon(tag: &str) -> &'static str {
    match Descriptor::from_tag(tag) {
        Some(descriptor) => descriptor.icon(),
        None => {
            tracing::debug!(tag, "unknown spell descriptor");
            UNKNOWN_DESCRIPTOR_ICON
        }
    }
}

/// Icon for an origin tag. Only `"divina"` is special.
pub fn origin_icon(origin: &str) -> &'static str {
    if origin == DIVINE_ORIGIN {
        DIVINE_ORIGIN_ICON
    } else {
        OTHER_ORIGIN_ICON
    }
}

// ============================================================================
// Spell
// ============================================================================

/// A catalog spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub id: u32,
    pub title: String,
    pub divine_level: Option<u8>,
    pub arcane_level: Option<u8>,
    #[serde(default)]
    pub descriptors: Vec<String>,
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Spell {
    pub fn is_divine(&self) -> bool {
        self.divine_level.is_some()
    }

    pub fn is_arcane(&self) -> bool {
        self.arcane_level.is_some()
    }

    /// Icons for each descriptor tag, in catalog order.
    pub fn descriptor_icons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| descriptor_icon(d))
    }

    /// Icons for each origin tag, in catalog order.
    pub fn origin_icons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.origins.iter().map(|o| origin_icon(o))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only spell list with id lookup.
#[derive(Debug, Clone, Default)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    by_id: HashMap<u32, usize>,
}

impl SpellCatalog {
    /// Build a catalog. If an id repeats, the later spell wins the lookup.
    pub fn new(spells: Vec<Spell>) -> Self {
        let by_id = spells
            .iter()
            .enumerate()
            .map(|(index, spell)| (spell.id, index))
            .collect();
        Self { spells, by_id }
    }

    /// Parse a JSON array of spells.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let spells: Vec<Spell> = serde_json::from_str(json)?;
        tracing::debug!(count = spells.len(), "loaded spell catalog");
        Ok(Self::new(spells))
    }

    pub fn get(&self, id: u32) -> Option<&Spell> {
        self.by_id.get(&id).map(|&index| &self.spells[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Spells on the divine track, optionally at one level.
    pub fn divine(&self, level: Option<u8>) -> impl Iterator<Item = &Spell> {
        self.spells
            .iter()
            .filter(move |s| {
                s.divine_level.is_some() && (level.is_none() || s.divine_level == level)
            })
    }

    /// Spells on the arcane track, optionally at one level.
    pub fn arcane(&self, level: Option<u8>) -> impl Iterator<Item = &Spell> {
        self.spells
            .iter()
            .filter(move |s| {
                s.arcane_level.is_some() && (level.is_none() || s.arcane_level == level)
            })
    }

    /// Resolve a character's `spell_ids`. Ids missing from the catalog are skipped.
    pub fn for_character<'a>(
        &'a self,
        character: &'a Character,
    ) -> impl Iterator<Item = &'a Spell> {
        character.spell_ids.iter().filter_map(move |&id| self.get(id))
    }
}
