//! Object classes and the object kinds the engine creates (objclass.h, objects.c)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::colors::*;

/// Size of the full object table; it fixes the width of the object glyph
/// ranges even though only `OBJECTS` is populated.
pub const NUM_OBJECTS: usize = 453;

/// Object classes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ObjectClass {
    #[default]
    Random = 0,
    IllObj = 1,
    Weapon = 2,
    Armor = 3,
    Ring = 4,
    Amulet = 5,
    Tool = 6,
    Food = 7,
    Potion = 8,
    Scroll = 9,
    Spellbook = 10,
    Wand = 11,
    Coin = 12,
    Gem = 13,
    Rock = 14,
    Ball = 15,
    Chain = 16,
    Venom = 17,
}

impl ObjectClass {
    /// Get the inventory symbol for this class
    pub const fn symbol(&self) -> char {
        match self {
            ObjectClass::Random => '?',
            ObjectClass::IllObj => ']',
            ObjectClass::Weapon => ')',
            ObjectClass::Armor => '[',
            ObjectClass::Ring => '=',
            ObjectClass::Amulet => '"',
            ObjectClass::Tool => '(',
            ObjectClass::Food => '%',
            ObjectClass::Potion => '!',
            ObjectClass::Scroll => '?',
            ObjectClass::Spellbook => '+',
            ObjectClass::Wand => '/',
            ObjectClass::Coin => '$',
            ObjectClass::Gem => '*',
            ObjectClass::Rock => '`',
            ObjectClass::Ball => '0',
            ObjectClass::Chain => '_',
            ObjectClass::Venom => '.',
        }
    }

    /// Heading used for this class in inventory menus
    pub const fn heading(&self) -> &'static str {
        match self {
            ObjectClass::Weapon => "Weapons",
            ObjectClass::Armor => "Armor",
            ObjectClass::Ring => "Rings",
            ObjectClass::Amulet => "Amulets",
            ObjectClass::Tool => "Tools",
            ObjectClass::Food => "Comestibles",
            ObjectClass::Potion => "Potions",
            ObjectClass::Scroll => "Scrolls",
            ObjectClass::Spellbook => "Spellbooks",
            ObjectClass::Wand => "Wands",
            ObjectClass::Coin => "Coins",
            ObjectClass::Gem => "Gems/Stones",
            _ => "Other",
        }
    }

    /// Check if objects of this class stack
    pub const fn stacks(&self) -> bool {
        matches!(
            self,
            ObjectClass::Coin
                | ObjectClass::Gem
                | ObjectClass::Rock
                | ObjectClass::Food
                | ObjectClass::Potion
                | ObjectClass::Scroll
        )
    }
}

/// An object kind: one row of the object table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjKind {
    pub name: &'static str,
    pub class: ObjectClass,
    /// Index in the full object table; selects the object glyph
    pub otyp: u16,
    pub weight: u16,
    /// Nutrition when eaten (food only)
    pub nutrition: u16,
    pub color: u8,
    /// Armor class bonus when worn (armor only)
    pub ac: u8,
}

impl ObjKind {
    const fn new(
        name: &'static str,
        class: ObjectClass,
        otyp: u16,
        weight: u16,
        nutrition: u16,
        color: u8,
        ac: u8,
    ) -> Self {
        Self {
            name,
            class,
            otyp,
            weight,
            nutrition,
            color,
            ac,
        }
    }
}

pub const LEATHER_GLOVES: usize = 0;
pub const ROBE: usize = 1;
pub const APPLE: usize = 2;
pub const ORANGE: usize = 3;
pub const FORTUNE_COOKIE: usize = 4;
pub const FOOD_RATION: usize = 5;
pub const POT_HEALING: usize = 6;
pub const POT_WATER: usize = 7;
pub const SPE_PROTECTION: usize = 8;
pub const SCR_IDENTIFY: usize = 9;
pub const GOLD_PIECE: usize = 10;
pub const DAGGER: usize = 11;
pub const ROCK: usize = 12;
pub const FLINT: usize = 13;
pub const CORPSE: usize = 14;

use ObjectClass as C;

pub static OBJECTS: [ObjKind; 15] = [
    ObjKind::new("pair of leather gloves", C::Armor, 143, 10, 0, CLR_BROWN, 1),
    ObjKind::new("robe", C::Armor, 124, 15, 0, CLR_RED, 2),
    ObjKind::new("apple", C::Food, 283, 2, 50, CLR_RED, 0),
    ObjKind::new("orange", C::Food, 284, 2, 80, CLR_ORANGE, 0),
    ObjKind::new("fortune cookie", C::Food, 291, 1, 40, CLR_YELLOW, 0),
    ObjKind::new("food ration", C::Food, 295, 20, 800, CLR_BROWN, 0),
    ObjKind::new("potion of healing", C::Potion, 310, 20, 0, CLR_WHITE, 0),
    ObjKind::new("potion of water", C::Potion, 323, 20, 0, CLR_CYAN, 0),
    ObjKind::new("spellbook of protection", C::Spellbook, 379, 50, 0, CLR_WHITE, 0),
    ObjKind::new("scroll of identify", C::Scroll, 325, 5, 0, HI_PAPER, 0),
    ObjKind::new("gold piece", C::Coin, 414, 1, 0, HI_GOLD, 0),
    ObjKind::new("dagger", C::Weapon, 13, 10, 0, CLR_CYAN, 0),
    ObjKind::new("rock", C::Rock, 448, 10, 0, CLR_GRAY, 0),
    ObjKind::new("flint stone", C::Gem, 445, 10, 0, CLR_GRAY, 0),
    ObjKind::new("corpse", C::Food, 272, 0, 0, CLR_BROWN, 0),
];

/// Find the object kind drawn with a given object table index
pub fn kind_by_otyp(otyp: usize) -> Option<&'static ObjKind> {
    OBJECTS.iter().find(|o| o.otyp as usize == otyp)
}

/// Kinds that can be left lying around a freshly made level
pub const RANDOM_FLOOR_OBJECTS: [usize; 8] = [
    APPLE,
    FOOD_RATION,
    POT_HEALING,
    POT_WATER,
    SCR_IDENTIFY,
    GOLD_PIECE,
    DAGGER,
    ROCK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otyp_within_table() {
        for obj in OBJECTS.iter() {
            assert!((obj.otyp as usize) < NUM_OBJECTS, "{}", obj.name);
        }
    }

    #[test]
    fn test_food_has_nutrition() {
        for obj in OBJECTS.iter().filter(|o| o.class == ObjectClass::Food) {
            if obj.name != "corpse" {
                assert!(obj.nutrition > 0, "{}", obj.name);
            }
        }
    }

    #[test]
    fn test_class_symbols() {
        assert_eq!(OBJECTS[GOLD_PIECE].class.symbol(), '$');
        assert_eq!(OBJECTS[APPLE].class.symbol(), '%');
        assert_eq!(ObjectClass::Spellbook.heading(), "Spellbooks");
    }
}
