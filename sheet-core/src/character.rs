//! Character sheet types.
//!
//! Contains the full shape of a stored character: attributes, saving
//! throws, attacks, gear, skills, free-form ability entries and money,
//! plus the values derived from them (carry weight, encumbrance).

use crate::text::convert_to_slug;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Attributes
// ============================================================================

/// The six core attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Portuguese display label.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Strength => "Força",
            Attribute::Dexterity => "Destreza",
            Attribute::Constitution => "Constituição",
            Attribute::Intelligence => "Inteligência",
            Attribute::Wisdom => "Sabedoria",
            Attribute::Charisma => "Carisma",
        }
    }

    pub fn all() -> [Attribute; 6] {
        [
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Attribute values container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Attributes {
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            strength: str,
            dexterity: dex,
            constitution: con,
            intelligence: int,
            wisdom: wis,
            charisma: cha,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wisdom => self.wisdom = value,
            Attribute::Charisma => self.charisma = value,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

// ============================================================================
// Size
// ============================================================================

/// Size categories, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterSize {
    MiniSmall,
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    Huge,
    ExtraHuge,
}

impl CharacterSize {
    pub fn label(&self) -> &'static str {
        match self {
            CharacterSize::MiniSmall => "Diminuto",
            CharacterSize::ExtraSmall => "Mínimo",
            CharacterSize::Small => "Pequeno",
            CharacterSize::Medium => "Médio",
            CharacterSize::Large => "Grande",
            CharacterSize::ExtraLarge => "Enorme",
            CharacterSize::Huge => "Descomunal",
            CharacterSize::ExtraHuge => "Colossal",
        }
    }

    /// Modifier applied to AC and attack rolls.
    pub fn size_modifier(&self) -> i32 {
        match self {
            CharacterSize::MiniSmall => 4,
            CharacterSize::ExtraSmall => 2,
            CharacterSize::Small => 1,
            CharacterSize::Medium => 0,
            CharacterSize::Large => -1,
            CharacterSize::ExtraLarge => -2,
            CharacterSize::Huge => -4,
            CharacterSize::ExtraHuge => -8,
        }
    }

    /// Modifier applied to stealth checks.
    pub fn stealth_modifier(&self) -> i32 {
        match self {
            CharacterSize::MiniSmall => 12,
            CharacterSize::ExtraSmall => 8,
            CharacterSize::Small => 4,
            CharacterSize::Medium => 0,
            CharacterSize::Large => -4,
            CharacterSize::ExtraLarge => -8,
            CharacterSize::Huge => -12,
            CharacterSize::ExtraHuge => -16,
        }
    }

    pub fn all() -> [CharacterSize; 8] {
        [
            CharacterSize::MiniSmall,
            CharacterSize::ExtraSmall,
            CharacterSize::Small,
            CharacterSize::Medium,
            CharacterSize::Large,
            CharacterSize::ExtraLarge,
            CharacterSize::Huge,
            CharacterSize::ExtraHuge,
        ]
    }
}

impl fmt::Display for CharacterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Combat
// ============================================================================

/// Attack categories. Each has its own attribute and bonus on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Hand,
    Distance,
}

/// Flat bonuses added to the three saving throws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saving {
    pub fortitude_other: i32,
    pub reflex_other: i32,
    pub will_other: i32,
}

/// Attribute and flat bonus used by each attack type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacks {
    pub hand_other: i32,
    pub distance_other: i32,
    pub hand_attribute: Attribute,
    pub distance_attribute: Attribute,
}

impl Attacks {
    pub fn attribute(&self, attack_type: AttackType) -> Attribute {
        match attack_type {
            AttackType::Hand => self.hand_attribute,
            AttackType::Distance => self.distance_attribute,
        }
    }

    pub fn other(&self, attack_type: AttackType) -> i32 {
        match attack_type {
            AttackType::Hand => self.hand_other,
            AttackType::Distance => self.distance_other,
        }
    }
}

impl Default for Attacks {
    fn default() -> Self {
        Self {
            hand_other: 0,
            distance_other: 0,
            hand_attribute: Attribute::Strength,
            distance_attribute: Attribute::Dexterity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: String,
    pub critical: String,
    pub other_bonus: i32,
    #[serde(rename = "type")]
    pub kind: AttackType,
}

/// Defensive gear discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorType {
    Shield,
    Armor,
}

impl ArmorType {
    pub fn label(&self) -> &'static str {
        match self {
            ArmorType::Shield => "Escudo",
            ArmorType::Armor => "Armadura",
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorOrShield {
    pub name: String,
    pub ac: i32,
    #[serde(alias = "max_dextrity")]
    pub max_dexterity: i32,
    #[serde(alias = "penality")]
    pub penalty: i32,
    #[serde(rename = "type")]
    pub kind: ArmorType,
}

// ============================================================================
// Equipment
// ============================================================================

/// Carried item. Only used for the carry-weight computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub weight: f64,
    pub quantity: u32,
}

impl Equipment {
    pub fn new(name: impl Into<String>, weight: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            quantity,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }
}

/// Coins by denomination, keyed as on the printed sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub ts: u32,
    pub tp: u32,
    pub to: u32,
    pub tl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub attribute: Attribute,
    pub trained: bool,
    pub other: i32,
    pub trained_only: bool,
    pub affected_by_armor: bool,
}

/// Free-form titled entry (race/class abilities, feats, notes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expandable {
    pub title: String,
    pub body: String,
}

impl Expandable {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

// ============================================================================
// Character
// ============================================================================

/// A complete character sheet.
///
/// `slug` is always `convert_to_slug(name)`; use [`Character::new`] and
/// [`Character::rename`] to keep it that way. The store recomputes it on
/// every write regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub race: String,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub deity: String,
    #[serde(default)]
    pub size: CharacterSize,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub bab: i32,

    // Vitals
    #[serde(default)]
    pub life_points: i32,
    #[serde(default)]
    pub current_lp: i32,
    #[serde(default)]
    pub temp_lp: i32,
    #[serde(alias = "magic_ponts", default)]
    pub magic_points: i32,
    #[serde(default)]
    pub current_mp: i32,
    #[serde(default)]
    pub action_points: i32,

    #[serde(default)]
    pub ac_other: i32,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub saving: Saving,
    #[serde(default)]
    pub attacks: Attacks,

    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub armor_and_shields: Vec<ArmorOrShield>,
    #[serde(alias = "race_abilitites", default)]
    pub race_abilities: Vec<Expandable>,
    #[serde(default)]
    pub class_abilities: Vec<Expandable>,
    #[serde(default)]
    pub equipments: Vec<Equipment>,
    #[serde(default)]
    pub money: Money,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub spell_ids: Vec<u32>,
    #[serde(default)]
    pub notes: Vec<Expandable>,
    #[serde(default)]
    pub feats: Vec<Expandable>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

fn default_level() -> u32 {
    1
}

impl Character {
    /// Create a blank level 1 sheet with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: convert_to_slug(&name),
            name,
            race: String::new(),
            class_name: String::new(),
            level: default_level(),
            alignment: String::new(),
            age: 0,
            deity: String::new(),
            size: CharacterSize::default(),
            speed: String::new(),
            bab: 0,
            life_points: 0,
            current_lp: 0,
            temp_lp: 0,
            magic_points: 0,
            current_mp: 0,
            action_points: 0,
            ac_other: 0,
            attributes: Attributes::default(),
            saving: Saving::default(),
            attacks: Attacks::default(),
            weapons: Vec::new(),
            armor_and_shields: Vec::new(),
            race_abilities: Vec::new(),
            class_abilities: Vec::new(),
            equipments: Vec::new(),
            money: Money::default(),
            languages: Vec::new(),
            spell_ids: Vec::new(),
            notes: Vec::new(),
            feats: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>, level: u32) -> Self {
        self.class_name = class_name.into();
        self.level = level;
        self
    }

    pub fn with_size(mut self, size: CharacterSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipments.push(equipment);
        self
    }

    /// Change the display name and recompute the slug.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.refresh_slug();
    }

    /// Recompute `slug` from `name`. Returns true if it changed.
    pub fn refresh_slug(&mut self) -> bool {
        let slug = convert_to_slug(&self.name);
        if slug == self.slug {
            return false;
        }
        self.slug = slug;
        true
    }

    /// Sum of `quantity * weight` over all equipment.
    pub fn total_carry_weight(&self) -> f64 {
        self.equipments.iter().map(Equipment::total_weight).sum()
    }

    /// Weight the character can carry before being encumbered.
    pub fn carry_capacity(&self) -> f64 {
        f64::from(self.attributes.strength) * 3.0
    }

    pub fn is_over_encumbered(&self) -> bool {
        self.total_carry_weight() > self.carry_capacity()
    }

    /// Attribute the sheet uses for the given attack type.
    pub fn attack_attribute(&self, attack_type: AttackType) -> Attribute {
        self.attacks.attribute(attack_type)
    }

    pub fn weapons_of(&self, kind: AttackType) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter().filter(move |w| w.kind == kind)
    }

    pub fn armor_of(&self, kind: ArmorType) -> impl Iterator<Item = &ArmorOrShield> {
        self.armor_and_shields.iter().filter(move |a| a.kind == kind)
    }
}

/// Create a sample fighter for tests and demos.
pub fn create_sample_fighter(name: &str) -> Character {
    let mut character = Character::new(name)
        .with_race("Humano")
        .with_class("Guerreiro", 3)
        .with_attributes(Attributes::new(16, 12, 14, 10, 10, 8))
        .with_equipment(Equipment::new("Mochila", 1.0, 1))
        .with_equipment(Equipment::new("Ração de viagem", 0.5, 4));

    character.alignment = "Neutro e Bom".to_string();
    character.life_points = 36;
    character.current_lp = 36;
    character.bab = 3;
    character.languages = vec!["Valkar".to_string()];
    character.weapons = vec![
        Weapon {
            name: "Espada longa".to_string(),
            damage: "1d8".to_string(),
            critical: "19-20".to_string(),
            other_bonus: 0,
            kind: AttackType::Hand,
        },
        Weapon {
            name: "Arco curto".to_string(),
            damage: "1d6".to_string(),
            critical: "x3".to_string(),
            other_bonus: 0,
            kind: AttackType::Distance,
        },
    ];
    character.armor_and_shields = vec![
        ArmorOrShield {
            name: "Cota de malha".to_string(),
            ac: 5,
            max_dexterity: 2,
            penalty: -5,
            kind: ArmorType::Armor,
        },
        ArmorOrShield {
            name: "Escudo pesado".to_string(),
            ac: 2,
            max_dexterity: 8,
            penalty: -2,
            kind: ArmorType::Shield,
        },
    ];
    character
}
