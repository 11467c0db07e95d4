//! Objects in play and how they are named (objnam.c)

use nh_data::objects::{CORPSE, OBJECTS};
use nh_data::{body_to_glyph, objnum_to_glyph, ObjKind, ObjectClass, MONS};

/// A stack of objects on the floor or in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obj {
    /// Index into `OBJECTS`
    pub kind: usize,
    pub quan: u32,
    pub spe: i8,
    /// Monster a corpse was made from
    pub corpsenm: Option<usize>,
    pub worn: bool,
    /// Inventory letter, assigned when picked up
    pub invlet: char,
}

impl Obj {
    pub fn new(kind: usize, quan: u32) -> Self {
        Self {
            kind,
            quan: quan.max(1),
            spe: 0,
            corpsenm: None,
            worn: false,
            invlet: '\0',
        }
    }

    pub fn corpse(mndx: usize) -> Self {
        Self {
            corpsenm: Some(mndx),
            ..Self::new(CORPSE, 1)
        }
    }

    pub fn data(&self) -> &'static ObjKind {
        &OBJECTS[self.kind]
    }

    pub fn class(&self) -> ObjectClass {
        self.data().class
    }

    pub fn glyph(&self) -> i32 {
        match self.corpsenm {
            Some(mndx) => body_to_glyph(mndx),
            None => objnum_to_glyph(self.data().otyp as usize),
        }
    }

    /// Two stacks merge when they are the same kind in every respect.
    pub fn mergeable(&self, other: &Obj) -> bool {
        self.class().stacks()
            && self.kind == other.kind
            && self.spe == other.spe
            && self.corpsenm == other.corpsenm
            && !self.worn
            && !other.worn
    }

    /// Nutrition gained by eating one of these
    pub fn nutrition(&self) -> i32 {
        match self.corpsenm {
            Some(mndx) => 20 + 5 * MONS[mndx].mlevel.max(0) as i32,
            None => self.data().nutrition as i32,
        }
    }

    /// Bare name with quantity but no article: "food ration", "3 apples"
    pub fn xname(&self) -> String {
        let base = match self.corpsenm {
            Some(mndx) => format!("{} corpse", MONS[mndx].mname),
            None => self.data().name.to_string(),
        };
        if self.quan == 1 {
            base
        } else {
            makeplural(&base)
        }
    }

    /// Full description as shown in the inventory
    pub fn doname(&self) -> String {
        let mut name = String::new();
        if self.class() != ObjectClass::Coin {
            name.push_str("uncursed ");
        }
        if matches!(self.class(), ObjectClass::Armor | ObjectClass::Weapon) {
            name.push_str(&format!("{:+} ", self.spe));
        }
        name.push_str(&self.xname());
        let mut out = if self.quan == 1 {
            an(&name)
        } else {
            format!("{} {}", self.quan, name)
        };
        if self.worn {
            out.push_str(" (being worn)");
        }
        out
    }
}

/// Prefix a noun phrase with "a" or "an".
pub fn an(s: &str) -> String {
    let vowel = s
        .chars()
        .next()
        .is_some_and(|c| "aeiouAEIOU".contains(c));
    if vowel {
        format!("an {s}")
    } else {
        format!("a {s}")
    }
}

/// "the jackal"; `capital` for sentence starts
pub fn the(s: &str, capital: bool) -> String {
    if capital {
        format!("The {s}")
    } else {
        format!("the {s}")
    }
}

/// Plural of a simple object name. "X of Y" pluralizes X.
pub fn makeplural(s: &str) -> String {
    if let Some((head, tail)) = s.split_once(" of ") {
        return format!("{} of {}", makeplural(head), tail);
    }
    if s.ends_with('s') || s.ends_with('x') || s.ends_with("ch") {
        format!("{s}es")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_data::monsters::PM_JACKAL;
    use nh_data::objects::{APPLE, FOOD_RATION, GOLD_PIECE, LEATHER_GLOVES, POT_HEALING};

    #[test]
    fn test_plurals() {
        assert_eq!(makeplural("apple"), "apples");
        assert_eq!(makeplural("potion of healing"), "potions of healing");
        assert_eq!(makeplural("pair of leather gloves"), "pairs of leather gloves");
        assert_eq!(makeplural("box"), "boxes");
    }

    #[test]
    fn test_doname() {
        let mut gloves = Obj::new(LEATHER_GLOVES, 1);
        gloves.spe = 2;
        gloves.worn = true;
        assert_eq!(
            gloves.doname(),
            "an uncursed +2 pair of leather gloves (being worn)"
        );
        assert_eq!(Obj::new(APPLE, 5).doname(), "5 uncursed apples");
        assert_eq!(Obj::new(FOOD_RATION, 1).doname(), "an uncursed food ration");
        assert_eq!(Obj::new(GOLD_PIECE, 12).doname(), "12 gold pieces");
        assert_eq!(Obj::corpse(PM_JACKAL).xname(), "jackal corpse");
    }

    #[test]
    fn test_merge() {
        let a = Obj::new(POT_HEALING, 1);
        let b = Obj::new(POT_HEALING, 2);
        assert!(a.mergeable(&b));
        assert!(!Obj::corpse(PM_JACKAL).mergeable(&Obj::corpse(0)));
        assert!(!Obj::new(LEATHER_GLOVES, 1).mergeable(&Obj::new(LEATHER_GLOVES, 1)));
    }
}
