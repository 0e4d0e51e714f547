//! Option lists and label lookups for sheet inputs.
//!
//! The lists are in display order and feed select inputs; the free
//! functions are the string-facing adapters over the enum methods.

use crate::character::{ArmorType, Attribute, CharacterSize};

/// Attribute choices with their labels.
pub const ATTRIBUTE_OPTIONS: [(Attribute, &str); 6] = [
    (Attribute::Strength, "Força"),
    (Attribute::Dexterity, "Destreza"),
    (Attribute::Constitution, "Constituição"),
    (Attribute::Intelligence, "Inteligência"),
    (Attribute::Wisdom, "Sabedoria"),
    (Attribute::Charisma, "Carisma"),
];

/// Size choices with their labels, smallest first.
pub const SIZE_OPTIONS: [(CharacterSize, &str); 8] = [
    (CharacterSize::MiniSmall, "Diminuto"),
    (CharacterSize::ExtraSmall, "Mínimo"),
    (CharacterSize::Small, "Pequeno"),
    (CharacterSize::Medium, "Médio"),
    (CharacterSize::Large, "Grande"),
    (CharacterSize::ExtraLarge, "Enorme"),
    (CharacterSize::Huge, "Descomunal"),
    (CharacterSize::ExtraHuge, "Colossal"),
];

pub const ARMOR_TYPE_OPTIONS: [(ArmorType, &str); 2] =
    [(ArmorType::Shield, "Escudo"), (ArmorType::Armor, "Armadura")];

/// Portuguese label for an attribute.
pub fn parse_attribute(attribute: Attribute) -> &'static str {
    attribute.label()
}

pub fn size_label(size: CharacterSize) -> &'static str {
    size.label()
}

/// AC/attack modifier for a size category.
pub fn size_modifier(size: CharacterSize) -> i32 {
    size.size_modifier()
}

pub fn stealth_modifier(size: CharacterSize) -> i32 {
    size.stealth_modifier()
}

pub fn armor_type_label(kind: ArmorType) -> &'static str {
    kind.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_options_match_labels() {
        assert_eq!(ATTRIBUTE_OPTIONS.len(), Attribute::all().len());
        for ((attribute, label), expected) in ATTRIBUTE_OPTIONS.iter().zip(Attribute::all()) {
            assert_eq!(*attribute, expected);
            assert_eq!(*label, parse_attribute(expected));
        }
    }

    #[test]
    fn test_size_options_match_labels() {
        for ((size, label), expected) in SIZE_OPTIONS.iter().zip(CharacterSize::all()) {
            assert_eq!(*size, expected);
            assert_eq!(*label, size_label(expected));
        }
        assert_eq!(size_label(CharacterSize::MiniSmall), "Diminuto");
        assert_eq!(size_label(CharacterSize::ExtraHuge), "Colossal");
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!(parse_attribute(Attribute::Strength), "Força");
        assert_eq!(parse_attribute(Attribute::Dexterity), "Destreza");
        assert_eq!(parse_attribute(Attribute::Constitution), "Constituição");
        assert_eq!(parse_attribute(Attribute::Intelligence), "Inteligência");
        assert_eq!(parse_attribute(Attribute::Wisdom), "Sabedoria");
        assert_eq!(parse_attribute(Attribute::Charisma), "Carisma");
    }

    #[test]
    fn test_modifier_tables() {
        let table = [
            ("mini-small", 4, 12),
            ("extra-small", 2, 8),
            ("small", 1, 4),
            ("medium", 0, 0),
            ("large", -1, -4),
            ("extra-large", -2, -8),
            ("huge", -4, -12),
            ("extra-huge", -8, -16),
        ];
        for (key, ac, stealth) in table {
            let size: CharacterSize = serde_json::from_value(serde_json::json!(key)).unwrap();
            assert_eq!(size_modifier(size), ac, "{key}");
            assert_eq!(stealth_modifier(size), stealth, "{key}");
        }
    }

    #[test]
    fn test_armor_type_label() {
        assert_eq!(armor_type_label(ArmorType::Shield), "Escudo");
        assert_eq!(armor_type_label(ArmorType::Armor), "Armadura");
        assert_eq!(ARMOR_TYPE_OPTIONS[0].1, "Escudo");
    }
}
