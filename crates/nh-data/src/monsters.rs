//! Monster templates (monst.c)
//!
//! The table order is significant: an index into `MONS` is the monster
//! number used by glyphs (`GLYPH_MON_OFF + mndx`).

use bitflags::bitflags;

use crate::colors::*;
use crate::error::LookupError;
use crate::symbols::*;

bitflags! {
    /// Generation flags (G_* from monflag.h). The low three bits hold the
    /// generation frequency and are read through [`Permonst::frequency`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GenFlags: u16 {
        const UNIQ = 0x1000;
        const NOHELL = 0x0800;
        const HELL = 0x0400;
        const NOGEN = 0x0200;
        const SGROUP = 0x0080;
        const LGROUP = 0x0040;
        const GENO = 0x0020;
        const NOCORPSE = 0x0010;
        const FREQ = 0x0007;
    }
}

const UNIQ: u16 = GenFlags::UNIQ.bits();
const NOHELL: u16 = GenFlags::NOHELL.bits();
const HELL: u16 = GenFlags::HELL.bits();
const NOGEN: u16 = GenFlags::NOGEN.bits();
const SGROUP: u16 = GenFlags::SGROUP.bits();
const LGROUP: u16 = GenFlags::LGROUP.bits();
const GENO: u16 = GenFlags::GENO.bits();
const NOCORPSE: u16 = GenFlags::NOCORPSE.bits();

/// Monster template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permonst {
    pub mname: &'static str,
    /// Class letter code, see [`ClassSym::from_mlet`]
    pub mlet: u8,
    pub mlevel: i8,
    pub mmove: i8,
    pub ac: i8,
    pub mr: i8,
    pub maligntyp: i8,
    pub geno: GenFlags,
    /// Dice of the primary melee attack
    pub attack: (u8, u8),
    pub mcolor: u8,
}

impl Permonst {
    const fn new(
        mname: &'static str,
        mlet: u8,
        lvl: (i8, i8, i8, i8, i8),
        geno: u16,
        attack: (u8, u8),
        mcolor: u8,
    ) -> Self {
        Self {
            mname,
            mlet,
            mlevel: lvl.0,
            mmove: lvl.1,
            ac: lvl.2,
            mr: lvl.3,
            maligntyp: lvl.4,
            geno: GenFlags::from_bits_retain(geno),
            attack,
            mcolor,
        }
    }

    /// Relative generation frequency (0 = never generated at random).
    pub const fn frequency(&self) -> u8 {
        (self.geno.bits() & GenFlags::FREQ.bits()) as u8
    }

    pub const fn is_unique(&self) -> bool {
        self.geno.contains(GenFlags::UNIQ)
    }

    /// Can appear as a random spawn on an ordinary level
    pub const fn randomly_generated(&self) -> bool {
        !self.geno.intersects(GenFlags::UNIQ.union(GenFlags::NOGEN).union(GenFlags::HELL))
            && self.frequency() > 0
    }

    pub fn class(&self) -> &'static ClassSym {
        &DEF_MONSYMS[self.mlet as usize]
    }
}

/// Look up a monster template by index.
///
/// Negative indices and indices past the table are rejected before any
/// access.
pub fn permonst(index: impl Into<i64>) -> Result<&'static Permonst, LookupError> {
    let index = index.into();
    if index < 0 || index >= NUMMONS as i64 {
        return Err(LookupError::MonsterOutOfRange {
            index,
            max: NUMMONS,
        });
    }
    Ok(&MONS[index as usize])
}

/// Find a monster index by name.
pub fn name_to_mon(name: &str) -> Option<usize> {
    MONS.iter()
        .position(|pm| pm.mname.eq_ignore_ascii_case(name))
}

/// Number of monster templates
pub const NUMMONS: usize = MONS_TABLE.len();

/// Sentinel for "no monster"
pub const NON_PM: i32 = -1;

pub const PM_GIANT_ANT: usize = 0;
pub const PM_KILLER_BEE: usize = 1;
pub const PM_JACKAL: usize = 12;
pub const PM_NEWT: usize = name_idx("newt");
pub const PM_LICHEN: usize = name_idx("lichen");
pub const PM_HUMAN: usize = name_idx("human");
pub const PM_ELF: usize = name_idx("elf");
pub const PM_DWARF: usize = name_idx("dwarf");
pub const PM_GNOME: usize = name_idx("gnome");
pub const PM_ORC: usize = name_idx("orc");
pub const PM_GHOST: usize = name_idx("ghost");
pub const PM_ARCHEOLOGIST: usize = name_idx("archeologist");
pub const PM_MONK: usize = name_idx("monk");
pub const PM_WIZARD: usize = name_idx("wizard");

/// Compile-time name lookup for the PM_* constants.
const fn name_idx(name: &str) -> usize {
    let mut i = 0;
    while i < MONS_TABLE.len() {
        if const_str_eq(MONS_TABLE[i].mname, name) {
            return i;
        }
        i += 1;
    }
    panic!("monster name missing from MONS")
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

use Permonst as M;

/// All monster templates, indexed by monster number
pub static MONS: [Permonst; 381] = MONS_TABLE;

const MONS_TABLE: [Permonst; 381] = [
    // ants
    M::new("giant ant", S_ANT, (2, 18, 3, 0, 0), GENO | SGROUP | 3, (1, 4), CLR_BROWN),
    M::new("killer bee", S_ANT, (1, 18, -1, 0, 0), GENO | LGROUP | 2, (1, 3), CLR_YELLOW),
    M::new("soldier ant", S_ANT, (3, 18, 3, 0, 0), GENO | SGROUP | 2, (2, 4), CLR_BLUE),
    M::new("fire ant", S_ANT, (3, 18, 3, 10, 0), GENO | SGROUP | 1, (2, 4), CLR_RED),
    M::new("giant beetle", S_ANT, (5, 6, 4, 0, 0), GENO | 3, (3, 6), CLR_BLACK),
    M::new("queen bee", S_ANT, (9, 24, -4, 0, 0), GENO | NOGEN, (1, 8), HI_LORD),
    // blobs
    M::new("acid blob", S_BLOB, (1, 3, 8, 0, 0), GENO | 2, (1, 8), CLR_GREEN),
    M::new("quivering blob", S_BLOB, (5, 1, 8, 0, 0), GENO | 2, (1, 8), CLR_WHITE),
    M::new("gelatinous cube", S_BLOB, (6, 6, 8, 0, 0), GENO | 2, (2, 4), CLR_CYAN),
    // cockatrices
    M::new("chickatrice", S_COCKATRICE, (4, 4, 8, 30, 0), GENO | SGROUP | 1, (1, 2), CLR_BROWN),
    M::new("cockatrice", S_COCKATRICE, (5, 6, 6, 30, 0), GENO | 5, (1, 3), CLR_YELLOW),
    M::new("pyrolisk", S_COCKATRICE, (6, 6, 6, 30, 0), GENO | 1, (2, 6), CLR_RED),
    // dogs
    M::new("jackal", S_DOG, (0, 12, 7, 0, -7), GENO | SGROUP | 3, (1, 2), CLR_BROWN),
    M::new("fox", S_DOG, (1, 10, 7, 0, 0), GENO | 1, (1, 3), CLR_RED),
    M::new("coyote", S_DOG, (1, 12, 7, 0, 0), GENO | SGROUP | 1, (1, 3), CLR_BROWN),
    M::new("werejackal", S_DOG, (2, 12, 7, 10, -7), NOGEN | NOCORPSE, (1, 4), CLR_BROWN),
    M::new("little dog", S_DOG, (2, 18, 6, 0, 0), GENO | 1, (1, 6), HI_DOMESTIC),
    M::new("dog", S_DOG, (4, 16, 5, 0, 0), GENO | 1, (1, 6), HI_DOMESTIC),
    M::new("large dog", S_DOG, (6, 15, 4, 0, 0), GENO | 1, (2, 4), HI_DOMESTIC),
    M::new("wolf", S_DOG, (5, 12, 4, 0, 0), GENO | SGROUP | 2, (2, 4), CLR_BROWN),
    M::new("werewolf", S_DOG, (5, 12, 4, 20, -7), NOGEN | NOCORPSE, (2, 4), CLR_BROWN),
    M::new("warg", S_DOG, (7, 12, 4, 0, -5), GENO | SGROUP | 2, (2, 6), CLR_BROWN),
    M::new("winter wolf cub", S_DOG, (5, 12, 4, 0, -5), NOHELL | GENO | SGROUP | 2, (1, 8), CLR_CYAN),
    M::new("winter wolf", S_DOG, (7, 12, 4, 20, 0), NOHELL | GENO | 1, (2, 6), CLR_CYAN),
    M::new("hell hound pup", S_DOG, (7, 12, 4, 20, -5), HELL | GENO | SGROUP | 1, (2, 6), CLR_RED),
    M::new("hell hound", S_DOG, (12, 14, 2, 20, 0), HELL | GENO | 1, (3, 6), CLR_RED),
    // eyes and spheres
    M::new("gas spore", S_EYE, (1, 3, 10, 0, 0), NOCORPSE | GENO | 1, (4, 6), CLR_GRAY),
    M::new("floating eye", S_EYE, (2, 1, 9, 10, 0), GENO | 5, (0, 70), CLR_BLUE),
    M::new("freezing sphere", S_EYE, (6, 13, 4, 0, 0), NOCORPSE | NOHELL | GENO | 2, (4, 6), CLR_WHITE),
    M::new("flaming sphere", S_EYE, (6, 13, 4, 0, 0), NOCORPSE | GENO | 2, (4, 6), CLR_RED),
    M::new("shocking sphere", S_EYE, (6, 13, 4, 0, 0), NOCORPSE | GENO | 2, (4, 6), HI_ZAP),
    // felines
    M::new("kitten", S_FELINE, (0, 18, 6, 0, 0), GENO | 1, (1, 6), HI_DOMESTIC),
    M::new("housecat", S_FELINE, (4, 16, 5, 0, 0), GENO | 1, (1, 6), HI_DOMESTIC),
    M::new("jaguar", S_FELINE, (4, 12, 6, 0, 0), GENO | 2, (1, 4), CLR_BROWN),
    M::new("lynx", S_FELINE, (5, 15, 6, 0, 0), GENO | 1, (1, 4), CLR_CYAN),
    M::new("panther", S_FELINE, (5, 15, 6, 0, 0), GENO | 1, (1, 6), CLR_BLACK),
    M::new("large cat", S_FELINE, (6, 15, 4, 0, 0), GENO | 1, (2, 4), HI_DOMESTIC),
    M::new("tiger", S_FELINE, (6, 12, 6, 0, 0), GENO | 2, (2, 4), CLR_YELLOW),
    // gnomes
    M::new("gnome", S_GNOME, (1, 6, 10, 4, 0), GENO | SGROUP | 1, (1, 6), CLR_BROWN),
    M::new("gnome lord", S_GNOME, (3, 8, 10, 4, 0), GENO | 2, (1, 8), CLR_BLUE),
    M::new("gnomish wizard", S_GNOME, (3, 10, 4, 10, 0), GENO | 1, (0, 0), HI_ZAP),
    M::new("gnome king", S_GNOME, (5, 10, 10, 20, 0), GENO | 1, (2, 6), HI_LORD),
    // humanoids
    M::new("hobbit", S_HUMANOID, (1, 9, 10, 0, 6), GENO | 2, (1, 6), CLR_GREEN),
    M::new("dwarf", S_HUMANOID, (2, 6, 10, 10, 4), GENO | 3, (1, 8), CLR_RED),
    M::new("bugbear", S_HUMANOID, (3, 9, 5, 0, -6), GENO | 1, (2, 4), CLR_BROWN),
    M::new("dwarf lord", S_HUMANOID, (4, 6, 10, 10, 5), GENO | 2, (2, 4), CLR_BLUE),
    M::new("dwarf king", S_HUMANOID, (6, 6, 10, 20, 6), GENO | 1, (2, 6), HI_LORD),
    M::new("mind flayer", S_HUMANOID, (9, 12, 5, 90, -8), GENO | 1, (1, 4), CLR_MAGENTA),
    M::new("master mind flayer", S_HUMANOID, (13, 12, 0, 90, -8), GENO | 1, (1, 8), CLR_MAGENTA),
    // imps and minor demons
    M::new("manes", S_IMP, (1, 3, 7, 0, -7), GENO | LGROUP | NOCORPSE | 1, (1, 3), CLR_RED),
    M::new("homunculus", S_IMP, (2, 12, 6, 10, -7), GENO | 2, (1, 3), CLR_GREEN),
    M::new("imp", S_IMP, (3, 12, 2, 20, -7), GENO | 1, (1, 4), CLR_RED),
    M::new("lemure", S_IMP, (3, 3, 7, 0, -7), HELL | GENO | LGROUP | NOCORPSE | 1, (1, 3), CLR_BROWN),
    M::new("quasit", S_IMP, (3, 15, 2, 20, -7), GENO | 2, (1, 2), CLR_BLUE),
    M::new("tengu", S_IMP, (6, 13, 5, 30, 7), GENO | 3, (1, 7), CLR_CYAN),
    // jellies
    M::new("blue jelly", S_JELLY, (4, 0, 8, 10, 0), GENO | 2, (0, 6), CLR_BLUE),
    M::new("spotted jelly", S_JELLY, (5, 0, 8, 10, 0), GENO | 1, (0, 6), CLR_GREEN),
    M::new("ochre jelly", S_JELLY, (6, 3, 8, 20, 0), GENO | 2, (3, 6), CLR_BROWN),
    // kobolds
    M::new("kobold", S_KOBOLD, (0, 6, 10, 0, -2), GENO | 1, (1, 4), CLR_RED),
    M::new("large kobold", S_KOBOLD, (1, 6, 10, 0, -3), GENO | 1, (2, 4), CLR_RED),
    M::new("kobold lord", S_KOBOLD, (2, 6, 10, 0, -4), GENO | 1, (2, 4), HI_LORD),
    M::new("kobold shaman", S_KOBOLD, (2, 6, 6, 10, -4), GENO | 1, (0, 0), HI_ZAP),
    // leprechaun
    M::new("leprechaun", S_LEPRECHAUN, (5, 15, 8, 20, 0), GENO | 4, (1, 2), CLR_GREEN),
    // mimics
    M::new("small mimic", S_MIMIC, (7, 3, 7, 0, 0), GENO | 2, (3, 4), CLR_BROWN),
    M::new("large mimic", S_MIMIC, (8, 3, 7, 10, 0), GENO | 1, (3, 4), CLR_RED),
    M::new("giant mimic", S_MIMIC, (9, 3, 7, 20, 0), GENO | 1, (3, 6), HI_LORD),
    // nymphs
    M::new("water nymph", S_NYMPH, (3, 12, 9, 20, 0), GENO | 2, (0, 0), CLR_BLUE),
    M::new("wood nymph", S_NYMPH, (3, 12, 9, 20, 0), GENO | 2, (0, 0), CLR_GREEN),
    M::new("mountain nymph", S_NYMPH, (3, 12, 9, 20, 0), GENO | 2, (0, 0), CLR_BROWN),
    // orcs
    M::new("goblin", S_ORC, (0, 6, 10, 0, -3), GENO | 2, (1, 6), CLR_GRAY),
    M::new("hobgoblin", S_ORC, (1, 9, 10, 0, -4), GENO | 2, (1, 6), CLR_BROWN),
    M::new("orc", S_ORC, (1, 9, 10, 0, -3), GENO | NOGEN | LGROUP, (1, 8), CLR_RED),
    M::new("hill orc", S_ORC, (1, 9, 10, 0, -4), GENO | LGROUP | 2, (1, 6), CLR_YELLOW),
    M::new("Mordor orc", S_ORC, (3, 5, 10, 0, -5), GENO | LGROUP | 1, (1, 6), CLR_BLUE),
    M::new("Uruk-hai", S_ORC, (3, 7, 10, 0, -4), GENO | LGROUP | 1, (1, 8), CLR_BLACK),
    M::new("orc shaman", S_ORC, (3, 9, 5, 10, -5), GENO | 1, (0, 0), HI_ZAP),
    M::new("orc-captain", S_ORC, (5, 5, 10, 0, -5), GENO | 1, (2, 4), HI_LORD),
    // piercers
    M::new("rock piercer", S_PIERCER, (3, 1, 3, 0, 0), GENO | 4, (2, 6), CLR_GRAY),
    M::new("iron piercer", S_PIERCER, (5, 1, 0, 0, 0), GENO | 2, (3, 6), CLR_CYAN),
    M::new("glass piercer", S_PIERCER, (7, 1, 0, 0, 0), GENO | 1, (4, 6), CLR_WHITE),
    // quadrupeds
    M::new("rothe", S_QUADRUPED, (2, 9, 7, 0, 0), GENO | SGROUP | 4, (1, 3), CLR_BROWN),
    M::new("mumak", S_QUADRUPED, (5, 9, 0, 0, -2), GENO | 1, (4, 12), CLR_GRAY),
    M::new("leocrotta", S_QUADRUPED, (6, 18, 4, 10, 0), GENO | 2, (2, 6), CLR_WHITE),
    M::new("wumpus", S_QUADRUPED, (8, 3, 2, 10, 0), GENO | 1, (3, 6), CLR_CYAN),
    M::new("titanothere", S_QUADRUPED, (12, 12, 6, 0, 0), GENO | 2, (2, 8), CLR_GRAY),
    M::new("baluchitherium", S_QUADRUPED, (14, 12, 5, 0, 0), GENO | 2, (5, 4), CLR_GRAY),
    M::new("mastodon", S_QUADRUPED, (20, 12, 5, 0, 0), GENO | 1, (4, 8), CLR_BLACK),
    // rodents
    M::new("sewer rat", S_RODENT, (0, 12, 7, 0, 0), GENO | SGROUP | 1, (1, 3), CLR_BROWN),
    M::new("giant rat", S_RODENT, (1, 10, 7, 0, 0), GENO | SGROUP | 2, (1, 3), CLR_BROWN),
    M::new("rabid rat", S_RODENT, (2, 12, 6, 0, 0), GENO | SGROUP | 1, (2, 4), CLR_BROWN),
    M::new("wererat", S_RODENT, (2, 12, 6, 10, -7), NOGEN | NOCORPSE, (1, 4), CLR_BROWN),
    M::new("rock mole", S_RODENT, (3, 3, 0, 20, 0), GENO | 2, (1, 6), CLR_GRAY),
    M::new("woodchuck", S_RODENT, (3, 3, 0, 20, 0), NOGEN | GENO, (1, 6), CLR_BROWN),
    // spiders and centipedes
    M::new("cave spider", S_SPIDER, (1, 12, 3, 0, 0), GENO | SGROUP | 2, (1, 2), CLR_GRAY),
    M::new("centipede", S_SPIDER, (2, 4, 3, 0, 0), GENO | 1, (1, 3), CLR_YELLOW),
    M::new("giant spider", S_SPIDER, (5, 15, 4, 0, 0), GENO | 1, (2, 4), CLR_MAGENTA),
    M::new("scorpion", S_SPIDER, (5, 15, 3, 0, 0), GENO | 2, (1, 2), CLR_RED),
    // trappers
    M::new("lurker above", S_TRAPPER, (10, 3, 3, 0, 0), GENO | 2, (1, 8), CLR_GREEN),
    M::new("trapper", S_TRAPPER, (12, 3, 3, 0, 0), GENO | 2, (1, 10), CLR_GREEN),
    // unicorns and horses
    M::new("pony", S_UNICORN, (2, 16, 6, 0, 0), GENO | 2, (1, 6), CLR_BROWN),
    M::new("white unicorn", S_UNICORN, (4, 24, 2, 70, 7), GENO | 2, (1, 12), CLR_WHITE),
    M::new("gray unicorn", S_UNICORN, (4, 24, 2, 70, 0), GENO | 1, (1, 12), CLR_GRAY),
    M::new("black unicorn", S_UNICORN, (4, 24, 2, 70, -7), GENO | 1, (1, 12), CLR_BLACK),
    M::new("horse", S_UNICORN, (5, 20, 5, 0, 0), GENO | 2, (1, 8), CLR_BROWN),
    M::new("warhorse", S_UNICORN, (7, 24, 4, 0, 0), GENO | 2, (1, 10), CLR_BROWN),
    // vortices
    M::new("fog cloud", S_VORTEX, (3, 1, 0, 0, 0), GENO | NOCORPSE | 2, (1, 6), CLR_GRAY),
    M::new("dust vortex", S_VORTEX, (4, 20, 2, 30, 0), GENO | NOCORPSE | 2, (2, 8), CLR_BROWN),
    M::new("ice vortex", S_VORTEX, (5, 20, 2, 30, 0), NOHELL | GENO | NOCORPSE | 1, (1, 6), CLR_CYAN),
    M::new("energy vortex", S_VORTEX, (6, 20, 2, 30, 0), GENO | NOCORPSE | 1, (1, 6), HI_ZAP),
    M::new("steam vortex", S_VORTEX, (7, 22, 2, 30, 0), HELL | GENO | NOCORPSE | 2, (1, 8), CLR_BLUE),
    M::new("fire vortex", S_VORTEX, (8, 22, 2, 30, 0), HELL | GENO | NOCORPSE | 1, (1, 10), CLR_YELLOW),
    // worms
    M::new("baby long worm", S_WORM, (8, 3, 5, 0, 0), GENO, (1, 6), CLR_BROWN),
    M::new("baby purple worm", S_WORM, (8, 3, 5, 0, 0), GENO, (1, 6), CLR_MAGENTA),
    M::new("long worm", S_WORM, (8, 3, 5, 10, 0), GENO | 2, (2, 4), CLR_BROWN),
    M::new("purple worm", S_WORM, (15, 9, 6, 20, 0), GENO | 2, (2, 8), CLR_MAGENTA),
    // grid bugs and xans
    M::new("grid bug", S_XAN, (0, 12, 9, 0, 0), GENO | SGROUP | NOCORPSE | 3, (1, 1), CLR_MAGENTA),
    M::new("xan", S_XAN, (7, 18, -4, 0, 0), GENO | 3, (1, 4), CLR_RED),
    // lights
    M::new("yellow light", S_LIGHT, (3, 13, 0, 0, 0), GENO | NOCORPSE | 4, (10, 20), CLR_YELLOW),
    M::new("black light", S_LIGHT, (5, 13, 0, 0, 0), GENO | NOCORPSE | 2, (10, 12), CLR_MAGENTA),
    // zruty
    M::new("zruty", S_ZRUTY, (9, 8, 3, 0, 0), GENO | 2, (3, 4), CLR_BROWN),
    // angelic beings
    M::new("couatl", S_ANGEL, (8, 10, 5, 30, 7), NOHELL | SGROUP | NOCORPSE | 1, (2, 4), CLR_GREEN),
    M::new("Aleax", S_ANGEL, (10, 8, 0, 30, 7), NOHELL | NOCORPSE | 1, (1, 6), CLR_YELLOW),
    M::new("Angel", S_ANGEL, (14, 10, -4, 55, 12), NOHELL | NOCORPSE | 1, (1, 6), CLR_WHITE),
    M::new("ki-rin", S_ANGEL, (16, 18, -5, 90, 15), NOHELL | NOCORPSE | 1, (2, 4), HI_LORD),
    M::new("Archon", S_ANGEL, (19, 16, -6, 80, 15), NOHELL | NOCORPSE | 1, (2, 4), HI_LORD),
    // bats and birds
    M::new("bat", S_BAT, (0, 22, 8, 0, 0), GENO | SGROUP | 1, (1, 4), CLR_BROWN),
    M::new("giant bat", S_BAT, (2, 22, 7, 0, 0), GENO | 2, (1, 6), CLR_RED),
    M::new("raven", S_BAT, (4, 20, 6, 0, 0), GENO | 2, (1, 6), CLR_BLACK),
    M::new("vampire bat", S_BAT, (5, 20, 6, 0, 0), GENO | 2, (1, 6), CLR_BLACK),
    // centaurs
    M::new("plains centaur", S_CENTAUR, (4, 18, 4, 0, 0), GENO | 1, (1, 6), CLR_CYAN),
    M::new("forest centaur", S_CENTAUR, (5, 18, 3, 10, -1), GENO | 1, (1, 8), CLR_GREEN),
    M::new("mountain centaur", S_CENTAUR, (6, 20, 2, 10, -3), GENO | 1, (1, 10), CLR_CYAN),
    // dragons
    M::new("baby gray dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_GRAY),
    M::new("baby silver dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), DRAGON_SILVER),
    M::new("baby red dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_RED),
    M::new("baby white dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_WHITE),
    M::new("baby orange dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_ORANGE),
    M::new("baby black dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_BLACK),
    M::new("baby blue dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_BLUE),
    M::new("baby green dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_GREEN),
    M::new("baby yellow dragon", S_DRAGON, (12, 9, 2, 10, 0), GENO, (2, 6), CLR_YELLOW),
    M::new("gray dragon", S_DRAGON, (15, 9, -1, 20, 4), GENO | 1, (3, 8), CLR_GRAY),
    M::new("silver dragon", S_DRAGON, (15, 9, -1, 20, 4), GENO | 1, (3, 8), DRAGON_SILVER),
    M::new("red dragon", S_DRAGON, (15, 9, -1, 20, -4), GENO | 1, (3, 8), CLR_RED),
    M::new("white dragon", S_DRAGON, (15, 9, -1, 20, -5), GENO | 1, (3, 8), CLR_WHITE),
    M::new("orange dragon", S_DRAGON, (15, 9, -1, 20, 5), GENO | 1, (3, 8), CLR_ORANGE),
    M::new("black dragon", S_DRAGON, (15, 9, -1, 20, -6), GENO | 1, (3, 8), CLR_BLACK),
    M::new("blue dragon", S_DRAGON, (15, 9, -1, 20, -7), GENO | 1, (3, 8), CLR_BLUE),
    M::new("green dragon", S_DRAGON, (15, 9, -1, 20, 6), GENO | 1, (3, 8), CLR_GREEN),
    M::new("yellow dragon", S_DRAGON, (15, 9, -1, 20, 7), GENO | 1, (3, 8), CLR_YELLOW),
    // elementals
    M::new("stalker", S_ELEMENTAL, (8, 12, 3, 0, 0), GENO | 3, (4, 4), CLR_WHITE),
    M::new("air elemental", S_ELEMENTAL, (8, 36, 2, 30, 0), NOCORPSE | 1, (1, 10), CLR_CYAN),
    M::new("fire elemental", S_ELEMENTAL, (8, 12, 2, 30, 0), NOCORPSE | 1, (3, 4), CLR_YELLOW),
    M::new("earth elemental", S_ELEMENTAL, (8, 6, 2, 30, 0), NOCORPSE | 1, (4, 6), CLR_BROWN),
    M::new("water elemental", S_ELEMENTAL, (8, 6, 2, 30, 0), NOCORPSE | 1, (5, 6), CLR_BLUE),
    // fungi and molds
    M::new("lichen", S_FUNGUS, (0, 1, 9, 0, 0), GENO | 4, (0, 0), CLR_BRIGHT_GREEN),
    M::new("brown mold", S_FUNGUS, (1, 0, 9, 0, 0), GENO | 1, (6, 4), CLR_BROWN),
    M::new("yellow mold", S_FUNGUS, (1, 0, 9, 0, 0), GENO | 2, (1, 4), CLR_YELLOW),
    M::new("green mold", S_FUNGUS, (1, 0, 9, 0, 0), GENO | 1, (4, 6), CLR_GREEN),
    M::new("red mold", S_FUNGUS, (3, 0, 9, 0, 0), GENO | 1, (0, 4), CLR_RED),
    M::new("shrieker", S_FUNGUS, (2, 1, 7, 0, 0), GENO | 1, (0, 0), CLR_MAGENTA),
    M::new("violet fungus", S_FUNGUS, (3, 1, 7, 0, 0), GENO | 2, (1, 4), CLR_MAGENTA),
    // gremlins and gargoyles
    M::new("gremlin", S_GREMLIN, (5, 12, 2, 25, -9), GENO | 2, (1, 6), CLR_GREEN),
    M::new("gargoyle", S_GREMLIN, (6, 10, -4, 0, -9), GENO | 2, (2, 6), CLR_BROWN),
    M::new("winged gargoyle", S_GREMLIN, (9, 15, -2, 0, -12), GENO | 1, (3, 6), HI_LORD),
    // giants
    M::new("giant", S_GIANT, (6, 6, 0, 0, 2), GENO | NOGEN | 1, (2, 10), CLR_RED),
    M::new("stone giant", S_GIANT, (6, 6, 0, 0, 2), GENO | SGROUP | 1, (2, 10), CLR_GRAY),
    M::new("hill giant", S_GIANT, (8, 10, 6, 0, -2), GENO | SGROUP | 1, (2, 8), CLR_CYAN),
    M::new("fire giant", S_GIANT, (9, 12, 4, 5, 2), GENO | SGROUP | 1, (2, 10), CLR_YELLOW),
    M::new("frost giant", S_GIANT, (10, 12, 3, 10, -3), NOHELL | GENO | SGROUP | 1, (2, 12), CLR_WHITE),
    M::new("ettin", S_GIANT, (10, 12, 3, 0, 0), GENO | 1, (2, 8), CLR_BLUE),
    M::new("storm giant", S_GIANT, (16, 12, 3, 10, -3), GENO | SGROUP | 1, (2, 12), CLR_BLUE),
    M::new("titan", S_GIANT, (16, 18, -3, 70, 9), 1, (2, 8), CLR_MAGENTA),
    M::new("minotaur", S_GIANT, (15, 15, 6, 0, 0), GENO | NOGEN, (3, 10), CLR_BROWN),
    // jabberwock
    M::new("jabberwock", S_JABBERWOCK, (15, 12, -2, 50, 0), GENO | 1, (2, 10), CLR_ORANGE),
    // Keystone Kops
    M::new("Keystone Kop", S_KOP, (1, 6, 10, 10, 9), GENO | LGROUP | NOGEN, (1, 4), CLR_BLUE),
    M::new("Kop Sergeant", S_KOP, (2, 8, 10, 10, 10), GENO | SGROUP | NOGEN, (1, 6), CLR_BLUE),
    M::new("Kop Lieutenant", S_KOP, (3, 10, 10, 20, 11), GENO | NOGEN, (1, 8), CLR_CYAN),
    M::new("Kop Kaptain", S_KOP, (4, 12, 10, 20, 12), GENO | NOGEN, (2, 6), HI_LORD),
    // liches
    M::new("lich", S_LICH, (11, 6, 0, 30, -9), GENO | NOCORPSE | 1, (1, 10), CLR_BROWN),
    M::new("demilich", S_LICH, (14, 9, -2, 60, -12), GENO | NOCORPSE | 1, (3, 4), CLR_RED),
    M::new("master lich", S_LICH, (17, 9, -4, 90, -15), HELL | GENO | NOCORPSE | 1, (3, 6), HI_LORD),
    M::new("arch-lich", S_LICH, (25, 9, -6, 90, -15), HELL | GENO | NOCORPSE | 1, (5, 6), HI_LORD),
    // mummies
    M::new("kobold mummy", S_MUMMY, (3, 8, 6, 20, -2), GENO | NOCORPSE | 1, (1, 4), CLR_RED),
    M::new("gnome mummy", S_MUMMY, (4, 10, 6, 20, -3), GENO | NOCORPSE | 1, (1, 6), CLR_RED),
    M::new("orc mummy", S_MUMMY, (5, 10, 5, 20, -4), GENO | NOCORPSE | 1, (1, 6), CLR_GRAY),
    M::new("dwarf mummy", S_MUMMY, (5, 10, 5, 20, -4), GENO | NOCORPSE | 1, (1, 6), CLR_RED),
    M::new("elf mummy", S_MUMMY, (6, 12, 4, 30, -5), GENO | NOCORPSE | 1, (2, 4), CLR_GREEN),
    M::new("human mummy", S_MUMMY, (6, 12, 4, 30, -5), GENO | NOCORPSE | 1, (2, 4), CLR_GRAY),
    M::new("ettin mummy", S_MUMMY, (7, 12, 4, 30, -6), GENO | NOCORPSE | 1, (2, 6), CLR_BLUE),
    M::new("giant mummy", S_MUMMY, (8, 14, 3, 30, -7), GENO | NOCORPSE | 1, (3, 4), CLR_CYAN),
    // nagas
    M::new("red naga hatchling", S_NAGA, (3, 10, 6, 0, 0), GENO, (1, 4), CLR_RED),
    M::new("black naga hatchling", S_NAGA, (3, 10, 6, 0, 0), GENO, (1, 4), CLR_BLACK),
    M::new("golden naga hatchling", S_NAGA, (3, 10, 6, 0, 0), GENO, (1, 4), HI_GOLD),
    M::new("guardian naga hatchling", S_NAGA, (3, 10, 6, 0, 0), GENO, (1, 4), CLR_GREEN),
    M::new("red naga", S_NAGA, (6, 12, 4, 0, -4), GENO | 1, (2, 4), CLR_RED),
    M::new("black naga", S_NAGA, (8, 10, 2, 10, 4), GENO | 1, (2, 6), CLR_BLACK),
    M::new("golden naga", S_NAGA, (10, 14, 2, 70, 5), GENO | 1, (2, 6), HI_GOLD),
    M::new("guardian naga", S_NAGA, (12, 16, 0, 50, 7), GENO | 1, (1, 6), CLR_GREEN),
    // ogres
    M::new("ogre", S_OGRE, (5, 10, 5, 0, -3), GENO | SGROUP | 1, (2, 5), CLR_BROWN),
    M::new("ogre lord", S_OGRE, (7, 12, 3, 30, -5), GENO | 2, (2, 6), CLR_RED),
    M::new("ogre king", S_OGRE, (9, 14, 4, 60, -7), GENO | 2, (3, 5), HI_LORD),
    // puddings
    M::new("gray ooze", S_PUDDING, (3, 1, 8, 0, 0), GENO | NOCORPSE | 2, (2, 8), CLR_GRAY),
    M::new("brown pudding", S_PUDDING, (5, 3, 8, 0, 0), GENO | NOCORPSE | 1, (0, 0), CLR_BROWN),
    M::new("black pudding", S_PUDDING, (10, 8, 6, 0, 0), GENO | NOCORPSE | 1, (3, 8), CLR_BLACK),
    M::new("green slime", S_PUDDING, (6, 6, 6, 0, 0), HELL | GENO | NOCORPSE | 1, (1, 4), CLR_GREEN),
    // quantum mechanics
    M::new("quantum mechanic", S_QUANTMECH, (7, 12, 3, 10, 0), GENO | 3, (1, 4), CLR_CYAN),
    M::new("genetic engineer", S_QUANTMECH, (12, 12, 3, 10, 0), GENO | 1, (1, 4), CLR_GREEN),
    // rust monsters
    M::new("rust monster", S_RUSTMONST, (5, 18, 2, 0, 0), GENO | 2, (0, 0), CLR_BROWN),
    M::new("disenchanter", S_RUSTMONST, (12, 12, -10, 0, -3), HELL | GENO | 2, (4, 4), CLR_BLUE),
    // snakes
    M::new("garter snake", S_SNAKE, (1, 8, 8, 0, 0), GENO | LGROUP | 1, (1, 2), CLR_GREEN),
    M::new("snake", S_SNAKE, (4, 15, 3, 0, 0), GENO | 2, (1, 6), CLR_BROWN),
    M::new("water moccasin", S_SNAKE, (4, 15, 3, 0, 0), GENO | NOGEN | LGROUP, (1, 6), CLR_RED),
    M::new("python", S_SNAKE, (6, 3, 5, 0, 0), GENO | 1, (1, 4), CLR_MAGENTA),
    M::new("pit viper", S_SNAKE, (6, 15, 2, 0, 0), GENO | 1, (1, 4), CLR_BLUE),
    M::new("cobra", S_SNAKE, (6, 18, 2, 0, 0), GENO | 1, (2, 4), CLR_BLUE),
    // trolls
    M::new("troll", S_TROLL, (7, 12, 4, 0, -3), GENO | 2, (4, 2), CLR_BROWN),
    M::new("ice troll", S_TROLL, (9, 10, 2, 20, -3), NOHELL | GENO | 1, (2, 6), CLR_WHITE),
    M::new("rock troll", S_TROLL, (9, 12, 0, 0, -3), GENO | 1, (3, 6), CLR_CYAN),
    M::new("water troll", S_TROLL, (11, 14, 4, 40, -3), NOGEN | GENO, (2, 8), CLR_BLUE),
    M::new("Olog-hai", S_TROLL, (13, 12, -4, 0, -7), HELL | GENO | 1, (3, 6), HI_LORD),
    // umber hulk
    M::new("umber hulk", S_UMBER, (9, 6, 2, 25, 0), GENO | 2, (3, 4), CLR_BROWN),
    // vampires
    M::new("vampire", S_VAMPIRE, (10, 12, 1, 25, -8), GENO | 1, (1, 6), CLR_RED),
    M::new("vampire lord", S_VAMPIRE, (12, 14, 0, 50, -9), GENO | 1, (1, 8), CLR_BLUE),
    M::new("Vlad the Impaler", S_VAMPIRE, (14, 18, -3, 80, -10), NOGEN | NOCORPSE | UNIQ, (1, 10), HI_LORD),
    // wraiths
    M::new("barrow wight", S_WRAITH, (3, 12, 5, 5, -3), GENO | NOCORPSE | 1, (1, 4), CLR_GRAY),
    M::new("wraith", S_WRAITH, (6, 12, 4, 15, -6), GENO | 2, (1, 6), CLR_BLACK),
    M::new("Nazgul", S_WRAITH, (13, 12, 0, 25, -17), GENO | NOCORPSE | 1, (1, 4), HI_LORD),
    // xorn
    M::new("xorn", S_XORN, (8, 9, -2, 20, 0), GENO | 1, (1, 3), CLR_BROWN),
    // apelike creatures
    M::new("monkey", S_YETI, (2, 12, 6, 0, 0), GENO | 1, (0, 0), CLR_GRAY),
    M::new("ape", S_YETI, (4, 12, 6, 0, 0), GENO | SGROUP | 2, (1, 3), CLR_BROWN),
    M::new("owlbear", S_YETI, (5, 12, 5, 0, 0), GENO | 3, (1, 6), CLR_BROWN),
    M::new("yeti", S_YETI, (5, 15, 6, 0, 0), GENO | 2, (1, 6), CLR_WHITE),
    M::new("carnivorous ape", S_YETI, (6, 12, 6, 0, 0), GENO | 1, (1, 4), CLR_BLACK),
    M::new("sasquatch", S_YETI, (7, 15, 6, 0, 2), GENO | 1, (1, 6), CLR_GRAY),
    // zombies
    M::new("kobold zombie", S_ZOMBIE, (0, 6, 10, 0, -2), GENO | NOCORPSE | 1, (1, 4), CLR_RED),
    M::new("gnome zombie", S_ZOMBIE, (1, 6, 10, 0, -2), GENO | NOCORPSE | 1, (1, 6), CLR_BROWN),
    M::new("orc zombie", S_ZOMBIE, (2, 6, 9, 0, -3), GENO | SGROUP | NOCORPSE | 1, (1, 6), CLR_GRAY),
    M::new("dwarf zombie", S_ZOMBIE, (2, 6, 9, 0, -3), GENO | SGROUP | NOCORPSE | 1, (1, 6), CLR_RED),
    M::new("elf zombie", S_ZOMBIE, (3, 6, 9, 0, -3), GENO | SGROUP | NOCORPSE | 1, (1, 7), CLR_GREEN),
    M::new("human zombie", S_ZOMBIE, (4, 6, 8, 0, -3), GENO | SGROUP | NOCORPSE | 1, (1, 8), HI_DOMESTIC),
    M::new("ettin zombie", S_ZOMBIE, (6, 8, 6, 0, -4), GENO | NOCORPSE | 1, (1, 10), CLR_BLUE),
    M::new("ghoul", S_ZOMBIE, (3, 6, 4, 0, -2), GENO | NOCORPSE, (1, 3), CLR_BLACK),
    M::new("giant zombie", S_ZOMBIE, (8, 8, 6, 0, -4), GENO | NOCORPSE | 1, (2, 8), CLR_CYAN),
    M::new("skeleton", S_ZOMBIE, (12, 8, 4, 0, 0), NOCORPSE | NOGEN, (2, 6), CLR_WHITE),
    // golems
    M::new("straw golem", S_GOLEM, (3, 12, 10, 0, 0), NOCORPSE | 1, (1, 2), CLR_YELLOW),
    M::new("paper golem", S_GOLEM, (3, 12, 10, 0, 0), NOCORPSE | 1, (1, 3), HI_PAPER),
    M::new("rope golem", S_GOLEM, (4, 9, 8, 0, 0), NOCORPSE | 1, (1, 4), CLR_BROWN),
    M::new("gold golem", S_GOLEM, (5, 9, 6, 0, 0), NOCORPSE | 1, (2, 3), HI_GOLD),
    M::new("leather golem", S_GOLEM, (6, 3, 6, 0, 0), NOCORPSE | 1, (1, 6), CLR_BROWN),
    M::new("wood golem", S_GOLEM, (7, 3, 4, 0, 0), NOCORPSE | 1, (3, 4), CLR_BROWN),
    M::new("flesh golem", S_GOLEM, (9, 8, 9, 30, 0), 1, (2, 8), CLR_RED),
    M::new("clay golem", S_GOLEM, (11, 7, 7, 40, 0), 1, (3, 10), CLR_BROWN),
    M::new("stone golem", S_GOLEM, (14, 6, 5, 50, 0), 1, (3, 8), CLR_GRAY),
    M::new("glass golem", S_GOLEM, (16, 6, 1, 50, 0), 1, (2, 8), CLR_CYAN),
    M::new("iron golem", S_GOLEM, (18, 6, 3, 60, 0), 1, (4, 10), CLR_CYAN),
    // humans and elves
    M::new("human", S_HUMAN, (0, 12, 10, 0, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("wererat", S_HUMAN, (2, 12, 10, 10, -7), 1, (2, 4), CLR_BROWN),
    M::new("werejackal", S_HUMAN, (2, 12, 10, 10, -7), 1, (1, 4), CLR_RED),
    M::new("werewolf", S_HUMAN, (5, 12, 10, 20, -7), 1, (2, 4), CLR_ORANGE),
    M::new("elf", S_HUMAN, (10, 12, 10, 2, -3), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("Woodland-elf", S_HUMAN, (4, 12, 10, 10, -5), GENO | SGROUP | 2, (2, 4), CLR_GREEN),
    M::new("Green-elf", S_HUMAN, (5, 12, 10, 10, -6), GENO | SGROUP | 2, (2, 4), CLR_BRIGHT_GREEN),
    M::new("Grey-elf", S_HUMAN, (6, 12, 10, 10, -7), GENO | SGROUP | 2, (2, 4), CLR_GRAY),
    M::new("elf-lord", S_HUMAN, (8, 12, 10, 20, -9), GENO | SGROUP | 2, (2, 4), CLR_BRIGHT_BLUE),
    M::new("Elvenking", S_HUMAN, (9, 12, 10, 25, -10), GENO | 1, (2, 4), HI_LORD),
    M::new("doppelganger", S_HUMAN, (9, 12, 5, 20, 0), GENO | 1, (1, 12), HI_DOMESTIC),
    M::new("shopkeeper", S_HUMAN, (12, 18, 0, 50, 0), NOGEN, (4, 4), HI_DOMESTIC),
    M::new("guard", S_HUMAN, (12, 12, 10, 40, 10), NOGEN, (4, 10), CLR_BLUE),
    M::new("prisoner", S_HUMAN, (12, 12, 10, 0, 0), NOGEN, (1, 4), HI_DOMESTIC),
    M::new("Oracle", S_HUMAN, (12, 0, 0, 50, 0), NOGEN | UNIQ, (0, 0), HI_ZAP),
    M::new("aligned priest", S_HUMAN, (12, 12, 10, 50, 0), NOGEN, (4, 10), CLR_WHITE),
    M::new("high priest", S_HUMAN, (25, 15, 7, 70, 0), NOGEN | UNIQ, (4, 10), CLR_WHITE),
    M::new("soldier", S_HUMAN, (6, 10, 10, 0, -2), SGROUP | GENO | 1, (1, 8), CLR_GRAY),
    M::new("sergeant", S_HUMAN, (8, 10, 10, 5, -3), SGROUP | GENO | 1, (2, 6), CLR_RED),
    M::new("nurse", S_HUMAN, (11, 6, 0, 0, 0), GENO | 3, (2, 6), HI_DOMESTIC),
    M::new("lieutenant", S_HUMAN, (10, 10, 10, 15, -4), GENO | 1, (3, 4), CLR_GREEN),
    M::new("captain", S_HUMAN, (12, 10, 10, 15, -5), GENO | 1, (4, 4), CLR_BLUE),
    M::new("watchman", S_HUMAN, (10, 10, 10, 0, -2), SGROUP | NOGEN | GENO | 1, (1, 8), CLR_GREEN),
    M::new("watch captain", S_HUMAN, (12, 10, 10, 15, -4), NOGEN | GENO | 1, (3, 4), CLR_BRIGHT_GREEN),
    M::new("Medusa", S_HUMAN, (20, 12, 2, 50, -15), NOGEN | UNIQ, (2, 4), CLR_BRIGHT_GREEN),
    M::new("Wizard of Yendor", S_HUMAN, (30, 12, -8, 100, -128), HELL | NOGEN | UNIQ, (2, 12), HI_LORD),
    M::new("Croesus", S_HUMAN, (20, 15, 0, 40, 15), UNIQ | NOGEN, (4, 10), HI_LORD),
    // ghosts
    M::new("ghost", S_GHOST, (10, 3, -5, 50, -5), NOCORPSE | NOGEN, (1, 1), CLR_GRAY),
    M::new("shade", S_GHOST, (12, 10, 10, 0, 0), NOCORPSE | NOGEN, (2, 6), CLR_BLACK),
    // major demons
    M::new("water demon", S_DEMON, (8, 12, -4, 30, -7), NOCORPSE | NOGEN, (1, 3), CLR_BLUE),
    M::new("horned devil", S_DEMON, (6, 9, -5, 50, 11), HELL | NOCORPSE | 2, (1, 4), CLR_BROWN),
    M::new("succubus", S_DEMON, (6, 12, 0, 70, -9), NOCORPSE | 1, (0, 0), CLR_GRAY),
    M::new("incubus", S_DEMON, (6, 12, 0, 70, -9), NOCORPSE | 1, (0, 0), CLR_GRAY),
    M::new("erinys", S_DEMON, (7, 12, 2, 30, 10), HELL | NOCORPSE | SGROUP | 2, (2, 4), CLR_RED),
    M::new("barbed devil", S_DEMON, (8, 12, 0, 35, 8), HELL | NOCORPSE | SGROUP | 2, (2, 4), CLR_RED),
    M::new("marilith", S_DEMON, (7, 12, -6, 80, -12), HELL | NOCORPSE | 1, (2, 4), CLR_RED),
    M::new("vrock", S_DEMON, (8, 12, 0, 50, -9), HELL | NOCORPSE | SGROUP | 2, (1, 4), CLR_RED),
    M::new("hezrou", S_DEMON, (9, 6, -2, 55, -10), HELL | NOCORPSE | SGROUP | 2, (1, 3), CLR_RED),
    M::new("bone devil", S_DEMON, (9, 15, -1, 40, -9), HELL | NOCORPSE | SGROUP | 2, (3, 4), CLR_GRAY),
    M::new("ice devil", S_DEMON, (11, 6, -4, 55, -12), HELL | NOCORPSE | 2, (1, 4), CLR_WHITE),
    M::new("nalfeshnee", S_DEMON, (11, 9, -1, 65, -11), HELL | NOCORPSE | 1, (1, 4), CLR_RED),
    M::new("pit fiend", S_DEMON, (13, 6, -3, 65, -13), HELL | NOCORPSE | 2, (4, 2), CLR_MAGENTA),
    M::new("sandestin", S_DEMON, (13, 12, 4, 60, -5), HELL | NOCORPSE | 1, (2, 6), CLR_GRAY),
    M::new("balrog", S_DEMON, (16, 5, -2, 75, -14), HELL | NOCORPSE | 1, (8, 4), CLR_RED),
    M::new("Juiblex", S_DEMON, (50, 3, -7, 65, -15), HELL | NOCORPSE | NOGEN | UNIQ, (4, 10), CLR_BRIGHT_GREEN),
    M::new("Yeenoghu", S_DEMON, (56, 18, -5, 80, -15), HELL | NOCORPSE | NOGEN | UNIQ, (3, 6), HI_LORD),
    M::new("Orcus", S_DEMON, (66, 9, -6, 85, -20), HELL | NOCORPSE | NOGEN | UNIQ, (3, 6), HI_LORD),
    M::new("Geryon", S_DEMON, (72, 3, -3, 75, 15), HELL | NOCORPSE | NOGEN | UNIQ, (3, 6), HI_LORD),
    M::new("Dispater", S_DEMON, (78, 15, -2, 80, 15), HELL | NOCORPSE | NOGEN | UNIQ, (4, 6), HI_LORD),
    M::new("Baalzebub", S_DEMON, (89, 9, -5, 85, 20), HELL | NOCORPSE | NOGEN | UNIQ, (2, 6), HI_LORD),
    M::new("Asmodeus", S_DEMON, (105, 12, -7, 90, 20), HELL | NOCORPSE | NOGEN | UNIQ, (4, 4), HI_LORD),
    M::new("Demogorgon", S_DEMON, (106, 15, -8, 95, -20), HELL | NOCORPSE | NOGEN | UNIQ, (8, 6), HI_LORD),
    M::new("Death", S_DEMON, (30, 12, -5, 100, 0), UNIQ | NOGEN, (8, 8), HI_LORD),
    M::new("Pestilence", S_DEMON, (30, 12, -5, 100, 0), UNIQ | NOGEN, (8, 8), HI_LORD),
    M::new("Famine", S_DEMON, (30, 12, -5, 100, 0), UNIQ | NOGEN, (8, 8), HI_LORD),
    M::new("djinni", S_DEMON, (7, 12, 4, 30, 0), NOGEN | NOCORPSE, (2, 8), CLR_YELLOW),
    // sea monsters
    M::new("jellyfish", S_EEL, (3, 3, 6, 0, 0), GENO | NOGEN, (3, 3), CLR_BLUE),
    M::new("piranha", S_EEL, (5, 12, 4, 0, 0), GENO | NOGEN | SGROUP, (2, 6), CLR_RED),
    M::new("shark", S_EEL, (7, 12, 2, 0, 0), GENO | NOGEN, (5, 6), CLR_GRAY),
    M::new("giant eel", S_EEL, (5, 9, -1, 0, 0), GENO | NOGEN, (3, 6), CLR_CYAN),
    M::new("electric eel", S_EEL, (7, 10, -3, 0, 0), GENO | NOGEN, (4, 6), CLR_BRIGHT_BLUE),
    M::new("kraken", S_EEL, (20, 3, 6, 0, -3), GENO | NOGEN, (2, 4), CLR_RED),
    // lizards
    M::new("newt", S_LIZARD, (0, 6, 8, 0, 0), GENO | 5, (1, 3), CLR_YELLOW),
    M::new("gecko", S_LIZARD, (1, 6, 8, 0, 0), GENO | 5, (1, 3), CLR_CYAN),
    M::new("iguana", S_LIZARD, (2, 6, 7, 0, 0), GENO | 5, (1, 4), CLR_BROWN),
    M::new("baby crocodile", S_LIZARD, (6, 6, 7, 0, 0), GENO, (1, 4), CLR_BROWN),
    M::new("lizard", S_LIZARD, (5, 6, 6, 10, 0), GENO | 5, (1, 5), CLR_GREEN),
    M::new("chameleon", S_LIZARD, (6, 5, 6, 10, 0), GENO | 2, (4, 2), CLR_BROWN),
    M::new("crocodile", S_LIZARD, (6, 9, 5, 0, 0), GENO | 1, (4, 2), CLR_BROWN),
    M::new("salamander", S_LIZARD, (8, 12, -1, 0, -9), HELL | 1, (2, 8), CLR_ORANGE),
    // worm tail
    M::new("long worm tail", S_WORM_TAIL, (0, 0, 0, 0, 0), NOGEN | NOCORPSE | UNIQ, (0, 0), CLR_BROWN),
    // player monsters
    M::new("archeologist", S_HUMAN, (10, 12, 10, 1, 3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("barbarian", S_HUMAN, (10, 12, 10, 1, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("caveman", S_HUMAN, (10, 12, 10, 0, 1), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("cavewoman", S_HUMAN, (10, 12, 10, 0, 1), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("healer", S_HUMAN, (10, 12, 10, 1, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("knight", S_HUMAN, (10, 12, 10, 1, 3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("monk", S_HUMAN, (10, 15, 10, 2, 0), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("priest", S_HUMAN, (10, 12, 10, 2, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("priestess", S_HUMAN, (10, 12, 10, 2, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("ranger", S_HUMAN, (10, 12, 10, 2, -3), NOGEN, (1, 4), HI_DOMESTIC),
    M::new("rogue", S_HUMAN, (10, 12, 10, 1, -3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("samurai", S_HUMAN, (10, 12, 10, 1, 3), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("tourist", S_HUMAN, (10, 12, 10, 1, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("valkyrie", S_HUMAN, (10, 12, 10, 1, -1), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("wizard", S_HUMAN, (10, 12, 10, 3, 0), NOGEN, (1, 6), HI_DOMESTIC),
    // quest leaders
    M::new("Lord Carnarvon", S_HUMAN, (20, 12, 0, 30, 20), NOGEN | UNIQ, (1, 6), HI_LORD),
    M::new("Pelias", S_HUMAN, (20, 12, 0, 30, 0), NOGEN | UNIQ, (1, 6), HI_LORD),
    M::new("Shaman Karnov", S_HUMAN, (20, 12, 0, 30, 20), NOGEN | UNIQ, (2, 4), HI_LORD),
    M::new("Hippocrates", S_HUMAN, (20, 12, 0, 40, 0), NOGEN | UNIQ, (1, 6), HI_LORD),
    M::new("King Arthur", S_HUMAN, (20, 12, 0, 40, 20), NOGEN | UNIQ, (1, 6), HI_LORD),
    M::new("Grand Master", S_HUMAN, (25, 15, 0, 70, 0), NOGEN | UNIQ, (4, 10), CLR_BLACK),
    M::new("Arch Priest", S_HUMAN, (25, 15, 7, 70, 0), NOGEN | UNIQ, (4, 10), CLR_WHITE),
    M::new("Orion", S_HUMAN, (20, 12, 0, 30, 0), NOGEN | UNIQ, (1, 6), HI_LORD),
    M::new("Master of Thieves", S_HUMAN, (20, 12, 0, 30, -20), NOGEN | UNIQ, (2, 6), HI_LORD),
    M::new("Lord Sato", S_HUMAN, (20, 12, 0, 30, 20), NOGEN | UNIQ, (1, 8), HI_LORD),
    M::new("Twoflower", S_HUMAN, (20, 12, 10, 20, 0), NOGEN | UNIQ, (1, 6), HI_DOMESTIC),
    M::new("Norn", S_HUMAN, (20, 12, 0, 80, 0), NOGEN | UNIQ, (1, 8), HI_LORD),
    M::new("Neferet the Green", S_HUMAN, (20, 12, 0, 60, 0), NOGEN | UNIQ, (1, 6), CLR_GREEN),
    // quest nemeses
    M::new("Minion of Huhetotl", S_DEMON, (16, 12, -2, 75, -14), NOGEN | NOCORPSE | UNIQ, (8, 4), CLR_RED),
    M::new("Thoth Amon", S_HUMAN, (16, 12, 0, 10, -14), NOGEN | UNIQ | NOCORPSE, (1, 6), HI_LORD),
    M::new("Chromatic Dragon", S_DRAGON, (16, 12, 0, 30, -14), NOGEN | UNIQ, (6, 8), HI_LORD),
    M::new("Cyclops", S_GIANT, (18, 12, 0, 0, -15), NOGEN | UNIQ, (4, 8), CLR_GRAY),
    M::new("Ixoth", S_DRAGON, (15, 12, -1, 20, -14), NOGEN | UNIQ, (8, 6), CLR_RED),
    M::new("Master Kaen", S_HUMAN, (25, 12, -10, 10, -20), NOGEN | UNIQ, (16, 2), HI_LORD),
    M::new("Nalzok", S_DEMON, (16, 12, -2, 85, -127), NOGEN | UNIQ | NOCORPSE, (8, 4), CLR_RED),
    M::new("Scorpius", S_SPIDER, (15, 12, 10, 0, -15), NOGEN | UNIQ, (2, 6), HI_LORD),
    M::new("Master Assassin", S_HUMAN, (15, 12, 0, 30, 18), NOGEN | UNIQ, (2, 6), HI_LORD),
    M::new("Ashikaga Takauji", S_HUMAN, (15, 12, 0, 40, -13), NOGEN | UNIQ | NOCORPSE, (2, 6), HI_LORD),
    M::new("Lord Surtur", S_GIANT, (15, 12, 2, 50, 12), NOGEN | UNIQ, (2, 10), HI_LORD),
    M::new("Dark One", S_HUMAN, (15, 12, 0, 80, -10), NOGEN | UNIQ | NOCORPSE, (1, 6), CLR_BLACK),
    // quest guardians
    M::new("student", S_HUMAN, (5, 12, 10, 10, 3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("chieftain", S_HUMAN, (5, 12, 10, 10, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("neanderthal", S_HUMAN, (5, 12, 10, 10, 1), NOGEN, (2, 4), HI_DOMESTIC),
    M::new("attendant", S_HUMAN, (5, 12, 10, 10, 3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("page", S_HUMAN, (5, 12, 10, 10, 3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("abbot", S_HUMAN, (5, 12, 10, 20, 0), NOGEN, (8, 2), HI_DOMESTIC),
    M::new("acolyte", S_HUMAN, (5, 12, 10, 20, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("hunter", S_HUMAN, (5, 12, 10, 10, -7), NOGEN, (1, 4), HI_DOMESTIC),
    M::new("thug", S_HUMAN, (5, 12, 10, 10, -3), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("ninja", S_HUMAN, (5, 12, 10, 10, 3), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("roshi", S_HUMAN, (5, 12, 10, 10, 3), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("guide", S_HUMAN, (5, 12, 10, 20, 0), NOGEN, (1, 6), HI_DOMESTIC),
    M::new("warrior", S_HUMAN, (5, 12, 10, 10, -1), NOGEN, (1, 8), HI_DOMESTIC),
    M::new("apprentice", S_HUMAN, (5, 12, 10, 30, 0), NOGEN, (1, 6), HI_DOMESTIC),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_monsters() {
        assert_eq!(permonst(0).unwrap().mname, "giant ant");
        assert_eq!(permonst(1).unwrap().mname, "killer bee");
        assert_eq!(permonst(PM_JACKAL as i64).unwrap().mname, "jackal");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            permonst(10000),
            Err(LookupError::MonsterOutOfRange {
                index: 10000,
                max: NUMMONS
            })
        );
        assert!(permonst(-1).is_err());
        assert!(permonst(NUMMONS as i64).is_err());
        assert!(permonst(NUMMONS as i64 - 1).is_ok());
    }

    #[test]
    fn test_lichen_is_fungus() {
        assert_eq!(PM_LICHEN, 155);
        let pm = permonst(PM_LICHEN as i64).unwrap();
        assert_eq!(pm.class().sym, 'F');
    }

    #[test]
    fn test_monk() {
        let pm = &MONS[PM_MONK];
        assert_eq!(pm.mname, "monk");
        assert_eq!(pm.mlevel, 10);
        assert_eq!(pm.mlet, S_HUMAN);
        assert_eq!(pm.mcolor, HI_DOMESTIC);
        assert!(!pm.randomly_generated());
    }

    #[test]
    fn test_uniques_never_random() {
        for pm in MONS.iter().filter(|pm| pm.is_unique()) {
            assert!(!pm.randomly_generated(), "{} is unique", pm.mname);
        }
    }

    #[test]
    fn test_name_to_mon() {
        assert_eq!(name_to_mon("Giant Ant"), Some(PM_GIANT_ANT));
        assert_eq!(name_to_mon("no such thing"), None);
    }
}
