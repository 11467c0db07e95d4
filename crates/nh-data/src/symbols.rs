//! Monster class symbols and map symbols (monsym.h, defsym.h, drawing.c)

use crate::colors::*;
use crate::error::LookupError;

// Monster classes. These are the `mlet` values stored in `Permonst`.
pub const S_ANT: u8 = 1;
pub const S_BLOB: u8 = 2;
pub const S_COCKATRICE: u8 = 3;
pub const S_DOG: u8 = 4;
pub const S_EYE: u8 = 5;
pub const S_FELINE: u8 = 6;
pub const S_GNOME: u8 = 7;
pub const S_HUMANOID: u8 = 8;
pub const S_IMP: u8 = 9;
pub const S_JELLY: u8 = 10;
pub const S_KOBOLD: u8 = 11;
pub const S_LEPRECHAUN: u8 = 12;
pub const S_MIMIC: u8 = 13;
pub const S_NYMPH: u8 = 14;
pub const S_ORC: u8 = 15;
pub const S_PIERCER: u8 = 16;
pub const S_QUADRUPED: u8 = 17;
pub const S_RODENT: u8 = 18;
pub const S_SPIDER: u8 = 19;
pub const S_TRAPPER: u8 = 20;
pub const S_UNICORN: u8 = 21;
pub const S_VORTEX: u8 = 22;
pub const S_WORM: u8 = 23;
pub const S_XAN: u8 = 24;
pub const S_LIGHT: u8 = 25;
pub const S_ZRUTY: u8 = 26;
pub const S_ANGEL: u8 = 27;
pub const S_BAT: u8 = 28;
pub const S_CENTAUR: u8 = 29;
pub const S_DRAGON: u8 = 30;
pub const S_ELEMENTAL: u8 = 31;
pub const S_FUNGUS: u8 = 32;
pub const S_GREMLIN: u8 = 33;
pub const S_GIANT: u8 = 34;
pub const S_INVISIBLE: u8 = 35;
pub const S_JABBERWOCK: u8 = 36;
pub const S_KOP: u8 = 37;
pub const S_LICH: u8 = 38;
pub const S_MUMMY: u8 = 39;
pub const S_NAGA: u8 = 40;
pub const S_OGRE: u8 = 41;
pub const S_PUDDING: u8 = 42;
pub const S_QUANTMECH: u8 = 43;
pub const S_RUSTMONST: u8 = 44;
pub const S_SNAKE: u8 = 45;
pub const S_TROLL: u8 = 46;
pub const S_UMBER: u8 = 47;
pub const S_VAMPIRE: u8 = 48;
pub const S_WRAITH: u8 = 49;
pub const S_XORN: u8 = 50;
pub const S_YETI: u8 = 51;
pub const S_ZOMBIE: u8 = 52;
pub const S_HUMAN: u8 = 53;
pub const S_GHOST: u8 = 54;
pub const S_GOLEM: u8 = 55;
pub const S_DEMON: u8 = 56;
pub const S_EEL: u8 = 57;
pub const S_LIZARD: u8 = 58;
pub const S_WORM_TAIL: u8 = 59;
pub const S_MIMIC_DEF: u8 = 60;

/// Number of monster classes, including the unused slot 0
pub const MAXMCLASSES: usize = 61;

/// Display symbol and description of a monster class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSym {
    pub sym: char,
    pub name: &'static str,
    pub explain: &'static str,
}

impl ClassSym {
    const fn new(sym: char, name: &'static str, explain: &'static str) -> Self {
        Self { sym, name, explain }
    }

    /// Look up the class symbol for a monster letter code (`Permonst::mlet`).
    ///
    /// Slot 0 is a placeholder and counts as an invalid letter.
    pub fn from_mlet(mlet: impl Into<i64>) -> Result<&'static ClassSym, LookupError> {
        let mlet = mlet.into();
        if mlet <= 0 || mlet >= MAXMCLASSES as i64 {
            return Err(LookupError::ClassOutOfRange {
                mlet,
                max: MAXMCLASSES,
            });
        }
        Ok(&DEF_MONSYMS[mlet as usize])
    }

    /// Find the class whose display symbol is `sym`.
    pub fn from_sym(sym: char) -> Option<&'static ClassSym> {
        DEF_MONSYMS[1..].iter().find(|cs| cs.sym == sym)
    }
}

pub static DEF_MONSYMS: [ClassSym; MAXMCLASSES] = [
    ClassSym::new('\0', "", ""),
    ClassSym::new('a', "ant", "ant or other insect"),
    ClassSym::new('b', "blob", "blob"),
    ClassSym::new('c', "cockatrice", "cockatrice"),
    ClassSym::new('d', "dog", "dog or other canine"),
    ClassSym::new('e', "eye", "eye or sphere"),
    ClassSym::new('f', "cat", "cat or other feline"),
    ClassSym::new('G', "gnome", "gnome"),
    ClassSym::new('h', "humanoid", "humanoid"),
    ClassSym::new('i', "imp", "imp or minor demon"),
    ClassSym::new('j', "jelly", "jelly"),
    ClassSym::new('k', "kobold", "kobold"),
    ClassSym::new('l', "leprechaun", "leprechaun"),
    ClassSym::new('m', "mimic", "mimic"),
    ClassSym::new('n', "nymph", "nymph"),
    ClassSym::new('o', "orc", "orc"),
    ClassSym::new('p', "piercer", "piercer"),
    ClassSym::new('q', "quadruped", "quadruped"),
    ClassSym::new('r', "rodent", "rodent"),
    ClassSym::new('s', "spider", "arachnid or centipede"),
    ClassSym::new('t', "trapper", "trapper or lurker above"),
    ClassSym::new('u', "unicorn", "unicorn or horse"),
    ClassSym::new('v', "vortex", "vortex"),
    ClassSym::new('w', "worm", "worm"),
    ClassSym::new('x', "xan", "xan or other mythical/fantastic insect"),
    ClassSym::new('y', "light", "light"),
    ClassSym::new('z', "zruty", "zruty"),
    ClassSym::new('A', "angel", "angelic being"),
    ClassSym::new('B', "bat", "bat or bird"),
    ClassSym::new('C', "centaur", "centaur"),
    ClassSym::new('D', "dragon", "dragon"),
    ClassSym::new('E', "elemental", "elemental"),
    ClassSym::new('F', "fungus", "fungus or mold"),
    ClassSym::new('g', "gremlin", "gremlin"),
    ClassSym::new('H', "giant", "giant humanoid"),
    ClassSym::new('I', "invisible", "invisible monster"),
    ClassSym::new('J', "jabberwock", "jabberwock"),
    ClassSym::new('K', "Kop", "Keystone Kop"),
    ClassSym::new('L', "lich", "lich"),
    ClassSym::new('M', "mummy", "mummy"),
    ClassSym::new('N', "naga", "naga"),
    ClassSym::new('O', "ogre", "ogre"),
    ClassSym::new('P', "pudding", "pudding or ooze"),
    ClassSym::new('Q', "quantum mechanic", "quantum mechanic"),
    ClassSym::new('R', "rust monster", "rust monster or disenchanter"),
    ClassSym::new('S', "snake", "snake"),
    ClassSym::new('T', "troll", "troll"),
    ClassSym::new('U', "umber hulk", "umber hulk"),
    ClassSym::new('V', "vampire", "vampire"),
    ClassSym::new('W', "wraith", "wraith"),
    ClassSym::new('X', "xorn", "xorn"),
    ClassSym::new('Y', "apelike creature", "apelike creature"),
    ClassSym::new('Z', "zombie", "zombie"),
    ClassSym::new('@', "human", "human or elf"),
    ClassSym::new(' ', "ghost", "ghost"),
    ClassSym::new('\'', "golem", "golem"),
    ClassSym::new('&', "demon", "major demon"),
    ClassSym::new(';', "sea monster", "sea monster"),
    ClassSym::new(':', "lizard", "lizard or other reptile"),
    ClassSym::new('~', "long worm tail", "long worm tail"),
    ClassSym::new(']', "mimic", "mimic"),
];

// Map symbols (cmap). Indices into `DEF_SYMS`, offset by GLYPH_CMAP_OFF in glyphs.
pub const S_STONE: usize = 0;
pub const S_VWALL: usize = 1;
pub const S_HWALL: usize = 2;
pub const S_TLCORN: usize = 3;
pub const S_TRCORN: usize = 4;
pub const S_BLCORN: usize = 5;
pub const S_BRCORN: usize = 6;
pub const S_CRWALL: usize = 7;
pub const S_TUWALL: usize = 8;
pub const S_TDWALL: usize = 9;
pub const S_TLWALL: usize = 10;
pub const S_TRWALL: usize = 11;
pub const S_NDOOR: usize = 12;
pub const S_VODOOR: usize = 13;
pub const S_HODOOR: usize = 14;
pub const S_VCDOOR: usize = 15;
pub const S_HCDOOR: usize = 16;
pub const S_BARS: usize = 17;
pub const S_TREE: usize = 18;
pub const S_ROOM: usize = 19;
pub const S_DARKROOM: usize = 20;
pub const S_CORR: usize = 21;
pub const S_LITCORR: usize = 22;
pub const S_UPSTAIR: usize = 23;
pub const S_DNSTAIR: usize = 24;
pub const S_UPLADDER: usize = 25;
pub const S_DNLADDER: usize = 26;
pub const S_ALTAR: usize = 27;
pub const S_GRAVE: usize = 28;
pub const S_THRONE: usize = 29;
pub const S_SINK: usize = 30;
pub const S_FOUNTAIN: usize = 31;
pub const S_POOL: usize = 32;
pub const S_ICE: usize = 33;
pub const S_LAVA: usize = 34;

/// Total number of map symbols, explosion symbols included
pub const MAXPCHARS: usize = 96;
/// Number of explosion symbols at the end of the map symbol range
pub const MAXEXPCHARS: usize = 9;

/// A displayable map feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefSym {
    pub sym: char,
    pub explain: &'static str,
    pub color: u8,
}

impl DefSym {
    const fn new(sym: char, explain: &'static str, color: u8) -> Self {
        Self { sym, explain, color }
    }

    /// Look up a map symbol by its cmap index.
    pub fn from_index(idx: impl Into<i64>) -> Result<&'static DefSym, LookupError> {
        let idx = idx.into();
        if idx < 0 || idx >= DEF_SYMS.len() as i64 {
            return Err(LookupError::SymbolOutOfRange {
                index: idx,
                max: DEF_SYMS.len(),
            });
        }
        Ok(&DEF_SYMS[idx as usize])
    }
}

/// The map symbols the engine draws. Only the dungeon-feature prefix of the
/// cmap range is populated; the rest of `MAXPCHARS` is reserved in the glyph layout.
pub static DEF_SYMS: [DefSym; 35] = [
    DefSym::new(' ', "stone", CLR_BLACK),
    DefSym::new('|', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('-', "wall", CLR_GRAY),
    DefSym::new('|', "wall", CLR_GRAY),
    DefSym::new('|', "wall", CLR_GRAY),
    DefSym::new('.', "doorway", CLR_GRAY),
    DefSym::new('-', "open door", CLR_BROWN),
    DefSym::new('|', "open door", CLR_BROWN),
    DefSym::new('+', "closed door", CLR_BROWN),
    DefSym::new('+', "closed door", CLR_BROWN),
    DefSym::new('#', "iron bars", CLR_CYAN),
    DefSym::new('#', "tree", CLR_GREEN),
    DefSym::new('.', "floor of a room", CLR_GRAY),
    DefSym::new('.', "dark part of a room", CLR_BLACK),
    DefSym::new('#', "corridor", CLR_GRAY),
    DefSym::new('#', "lit corridor", CLR_GRAY),
    DefSym::new('<', "staircase up", CLR_GRAY),
    DefSym::new('>', "staircase down", CLR_GRAY),
    DefSym::new('<', "ladder up", CLR_BROWN),
    DefSym::new('>', "ladder down", CLR_BROWN),
    DefSym::new('_', "altar", CLR_GRAY),
    DefSym::new('|', "grave", CLR_GRAY),
    DefSym::new('\\', "opulent throne", CLR_YELLOW),
    DefSym::new('#', "sink", CLR_GRAY),
    DefSym::new('{', "fountain", CLR_BLUE),
    DefSym::new('}', "water", CLR_BLUE),
    DefSym::new('.', "ice", CLR_CYAN),
    DefSym::new('}', "molten lava", CLR_RED),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fungus_class() {
        let cs = ClassSym::from_mlet(S_FUNGUS).unwrap();
        assert_eq!(cs.sym, 'F');
        assert_eq!(cs.explain, "fungus or mold");
    }

    #[test]
    fn test_invalid_mlet() {
        assert!(ClassSym::from_mlet(0xFF).is_err());
        assert!(ClassSym::from_mlet(-1).is_err());
        assert!(ClassSym::from_mlet(0).is_err());
        assert!(ClassSym::from_mlet(MAXMCLASSES as i64).is_err());
    }

    #[test]
    fn test_from_sym() {
        assert_eq!(ClassSym::from_sym('@').unwrap().explain, "human or elf");
        assert!(ClassSym::from_sym('%').is_none());
    }

    #[test]
    fn test_defsyms() {
        assert_eq!(DefSym::from_index(S_DNSTAIR as i64).unwrap().sym, '>');
        assert_eq!(DefSym::from_index(S_ROOM as i64).unwrap().sym, '.');
        assert!(DefSym::from_index(-1).is_err());
    }
}
