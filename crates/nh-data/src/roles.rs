//! Role and race definitions (role.c, u_init.c)
//!
//! Player roles and races with their starting attributes and equipment, and
//! the parser for character strings such as `"mon-hum-neu-mal"`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::LookupError;
use crate::monsters::*;
use crate::objects::*;

/// Stat indices
pub const A_STR: usize = 0;
pub const A_INT: usize = 1;
pub const A_WIS: usize = 2;
pub const A_DEX: usize = 3;
pub const A_CON: usize = 4;
pub const A_CHA: usize = 5;
pub const A_MAX: usize = 6;

/// Alignment mask bits
pub const ROLE_CHAOTIC: u16 = 0x0001;
pub const ROLE_NEUTRAL: u16 = 0x0002;
pub const ROLE_LAWFUL: u16 = 0x0004;

/// Race mask bits
pub const MH_HUMAN: u16 = 0x0008;
pub const MH_ELF: u16 = 0x0010;
pub const MH_DWARF: u16 = 0x0020;
pub const MH_GNOME: u16 = 0x0040;
pub const MH_ORC: u16 = 0x0080;

/// Gender mask bits
pub const ROLE_MALE: u16 = 0x1000;
pub const ROLE_FEMALE: u16 = 0x2000;

const ALL_ALIGN: u16 = ROLE_LAWFUL | ROLE_NEUTRAL | ROLE_CHAOTIC;
const BOTH: u16 = ROLE_MALE | ROLE_FEMALE;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    Lawful,
    Neutral,
    Chaotic,
}

impl Alignment {
    pub const fn mask(&self) -> u16 {
        match self {
            Alignment::Lawful => ROLE_LAWFUL,
            Alignment::Neutral => ROLE_NEUTRAL,
            Alignment::Chaotic => ROLE_CHAOTIC,
        }
    }

    /// Signed alignment type as stored in `u.ualign.type`
    pub const fn value(&self) -> i8 {
        match self {
            Alignment::Lawful => 1,
            Alignment::Neutral => 0,
            Alignment::Chaotic => -1,
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "law" => Some(Alignment::Lawful),
            "neu" => Some(Alignment::Neutral),
            "cha" => Some(Alignment::Chaotic),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn mask(&self) -> u16 {
        match self {
            Gender::Male => ROLE_MALE,
            Gender::Female => ROLE_FEMALE,
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "mal" => Some(Gender::Male),
            "fem" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Role name with optional male/female variants
#[derive(Debug, Clone, Copy)]
pub struct RoleName {
    /// Male name (or common name if female is None)
    pub male: &'static str,
    /// Female name (None if same as male)
    pub female: Option<&'static str>,
}

impl RoleName {
    pub const fn new(male: &'static str, female: Option<&'static str>) -> Self {
        Self { male, female }
    }

    pub fn get(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Female => self.female.unwrap_or(self.male),
            Gender::Male => self.male,
        }
    }
}

/// Hit point or energy gain: fixed plus random part, at start and per level
#[derive(Debug, Clone, Copy)]
pub struct Advancement {
    pub init_fix: i8,
    pub init_rnd: i8,
    pub lvl_fix: i8,
    pub lvl_rnd: i8,
}

impl Advancement {
    pub const fn new(init_fix: i8, init_rnd: i8, lvl_fix: i8, lvl_rnd: i8) -> Self {
        Self {
            init_fix,
            init_rnd,
            lvl_fix,
            lvl_rnd,
        }
    }
}

/// Starting inventory item: (index into `OBJECTS`, quantity, enchantment)
#[derive(Debug, Clone, Copy)]
pub struct StartingItem {
    pub kind: usize,
    pub quantity: u8,
    pub spe: i8,
}

const fn item(kind: usize, quantity: u8, spe: i8) -> StartingItem {
    StartingItem {
        kind,
        quantity,
        spe,
    }
}

/// A player role definition
#[derive(Debug, Clone)]
pub struct Role {
    pub name: RoleName,
    /// Rank titles, the first three experience bands
    pub ranks: [RoleName; 3],
    /// Lawful, neutral and chaotic god
    pub gods: (&'static str, &'static str, &'static str),
    /// File code (3-letter abbreviation)
    pub filecode: &'static str,
    pub malenum: usize,
    /// Monster index as female, if it differs
    pub femalenum: Option<usize>,
    /// Allowed races, genders and alignments
    pub allow: u16,
    /// Base attributes [Str, Int, Wis, Dex, Con, Cha]
    pub attrbase: [i8; A_MAX],
    pub hpadv: Advancement,
    pub enadv: Advancement,
    pub starting_items: &'static [StartingItem],
}

impl Role {
    pub fn god(&self, align: Alignment) -> &'static str {
        match align {
            Alignment::Lawful => self.gods.0,
            Alignment::Neutral => self.gods.1,
            Alignment::Chaotic => self.gods.2,
        }
    }

    /// Monster index of the role's player monster for a gender
    pub fn monster(&self, gender: Gender) -> usize {
        match gender {
            Gender::Female => self.femalenum.unwrap_or(self.malenum),
            Gender::Male => self.malenum,
        }
    }

    /// Rank title for an experience level
    pub fn rank_title(&self, level: i32, gender: Gender) -> &'static str {
        let idx = match level {
            ..=2 => 0,
            3..=5 => 1,
            _ => 2,
        };
        self.ranks[idx].get(gender)
    }
}

/// A player race definition
#[derive(Debug, Clone)]
pub struct Race {
    /// Race noun ("human", "elf")
    pub noun: &'static str,
    /// Race adjective ("human", "elven")
    pub adj: &'static str,
    pub filecode: &'static str,
    pub malenum: usize,
    /// Allowed genders/alignments bitmask
    pub allow: u16,
    /// Self race mask
    pub selfmask: u16,
    pub attrmin: [i8; A_MAX],
    pub attrmax: [i8; A_MAX],
    pub hpadv: Advancement,
    pub enadv: Advancement,
}

// ==================== STARTING EQUIPMENT ====================

static MONK_ITEMS: &[StartingItem] = &[
    item(LEATHER_GLOVES, 1, 2),
    item(ROBE, 1, 1),
    item(SPE_PROTECTION, 1, 0),
    item(POT_HEALING, 3, 0),
    item(FOOD_RATION, 3, 0),
    item(APPLE, 5, 0),
    item(ORANGE, 5, 0),
    item(FORTUNE_COOKIE, 3, 0),
];

static FIGHTER_ITEMS: &[StartingItem] = &[item(DAGGER, 1, 1), item(FOOD_RATION, 1, 0)];

static CAVEMAN_ITEMS: &[StartingItem] = &[item(FLINT, 15, 0), item(ROCK, 3, 0)];

static HEALER_ITEMS: &[StartingItem] = &[
    item(LEATHER_GLOVES, 1, 1),
    item(POT_HEALING, 4, 0),
    item(APPLE, 5, 0),
];

static PRIEST_ITEMS: &[StartingItem] = &[
    item(ROBE, 1, 0),
    item(POT_WATER, 4, 0),
    item(SPE_PROTECTION, 1, 0),
];

static TOURIST_ITEMS: &[StartingItem] = &[
    item(FORTUNE_COOKIE, 4, 0),
    item(POT_HEALING, 2, 0),
    item(SCR_IDENTIFY, 4, 0),
    item(GOLD_PIECE, 250, 0),
];

static WIZARD_ITEMS: &[StartingItem] = &[
    item(ROBE, 1, 0),
    item(SPE_PROTECTION, 1, 0),
    item(POT_WATER, 3, 0),
];

// ==================== ROLE DEFINITIONS ====================

const fn rank(male: &'static str) -> RoleName {
    RoleName::new(male, None)
}

/// All player roles
pub static ROLES: [Role; 13] = [
    Role {
        name: rank("Archeologist"),
        ranks: [rank("Digger"), rank("Field Worker"), rank("Investigator")],
        gods: ("Quetzalcoatl", "Camaxtli", "Huhetotl"),
        filecode: "Arc",
        malenum: PM_ARCHEOLOGIST,
        femalenum: None,
        allow: MH_HUMAN | MH_DWARF | MH_GNOME | BOTH | ROLE_LAWFUL | ROLE_NEUTRAL,
        attrbase: [7, 10, 10, 7, 7, 7],
        hpadv: Advancement::new(11, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Barbarian"),
        ranks: [
            RoleName::new("Plunderer", Some("Plunderess")),
            rank("Pillager"),
            rank("Bandit"),
        ],
        gods: ("Mitra", "Crom", "Set"),
        filecode: "Bar",
        malenum: PM_ARCHEOLOGIST + 1,
        femalenum: None,
        allow: MH_HUMAN | MH_ORC | BOTH | ROLE_NEUTRAL | ROLE_CHAOTIC,
        attrbase: [16, 7, 7, 15, 16, 6],
        hpadv: Advancement::new(14, 0, 0, 10),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: RoleName::new("Caveman", Some("Cavewoman")),
        ranks: [rank("Troglodyte"), rank("Aborigine"), rank("Wanderer")],
        gods: ("Anu", "_Ishtar", "Anshar"),
        filecode: "Cav",
        malenum: PM_ARCHEOLOGIST + 2,
        femalenum: Some(PM_ARCHEOLOGIST + 3),
        allow: MH_HUMAN | MH_DWARF | MH_GNOME | BOTH | ROLE_LAWFUL | ROLE_NEUTRAL,
        attrbase: [10, 7, 7, 7, 8, 6],
        hpadv: Advancement::new(14, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: CAVEMAN_ITEMS,
    },
    Role {
        name: rank("Healer"),
        ranks: [rank("Rhizotomist"), rank("Empiric"), rank("Embalmer")],
        gods: ("_Athena", "Hermes", "Poseidon"),
        filecode: "Hea",
        malenum: PM_ARCHEOLOGIST + 4,
        femalenum: None,
        allow: MH_HUMAN | MH_GNOME | BOTH | ROLE_NEUTRAL,
        attrbase: [7, 7, 13, 7, 11, 16],
        hpadv: Advancement::new(11, 0, 0, 8),
        enadv: Advancement::new(1, 4, 0, 1),
        starting_items: HEALER_ITEMS,
    },
    Role {
        name: rank("Knight"),
        ranks: [rank("Gallant"), rank("Esquire"), rank("Bachelor")],
        gods: ("Lugh", "_Brigit", "Manannan Mac Lir"),
        filecode: "Kni",
        malenum: PM_ARCHEOLOGIST + 5,
        femalenum: None,
        allow: MH_HUMAN | BOTH | ROLE_LAWFUL,
        attrbase: [13, 7, 14, 8, 10, 17],
        hpadv: Advancement::new(14, 0, 0, 8),
        enadv: Advancement::new(1, 4, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Monk"),
        ranks: [rank("Candidate"), rank("Novice"), rank("Initiate")],
        gods: ("Shan Lai Ching", "Chih Sung-tzu", "Huan Ti"),
        filecode: "Mon",
        malenum: PM_MONK,
        femalenum: None,
        allow: MH_HUMAN | BOTH | ALL_ALIGN,
        attrbase: [10, 7, 8, 8, 7, 7],
        hpadv: Advancement::new(12, 0, 0, 8),
        enadv: Advancement::new(2, 2, 0, 2),
        starting_items: MONK_ITEMS,
    },
    Role {
        name: RoleName::new("Priest", Some("Priestess")),
        ranks: [rank("Aspirant"), rank("Acolyte"), rank("Adept")],
        gods: ("", "", ""),
        filecode: "Pri",
        malenum: PM_MONK + 1,
        femalenum: Some(PM_MONK + 2),
        allow: MH_HUMAN | MH_ELF | BOTH | ALL_ALIGN,
        attrbase: [7, 7, 10, 7, 7, 7],
        hpadv: Advancement::new(12, 0, 0, 8),
        enadv: Advancement::new(4, 3, 0, 2),
        starting_items: PRIEST_ITEMS,
    },
    Role {
        name: rank("Ranger"),
        ranks: [rank("Tenderfoot"), rank("Lookout"), rank("Trailblazer")],
        gods: ("Mercury", "_Venus", "Mars"),
        filecode: "Ran",
        malenum: PM_MONK + 3,
        femalenum: None,
        allow: MH_HUMAN | MH_ELF | MH_GNOME | MH_ORC | BOTH | ROLE_NEUTRAL | ROLE_CHAOTIC,
        attrbase: [13, 13, 13, 9, 13, 7],
        hpadv: Advancement::new(13, 0, 0, 6),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Rogue"),
        ranks: [rank("Footpad"), rank("Cutpurse"), rank("Rogue")],
        gods: ("Issek", "Mog", "Kos"),
        filecode: "Rog",
        malenum: PM_MONK + 4,
        femalenum: None,
        allow: MH_HUMAN | MH_ORC | BOTH | ROLE_CHAOTIC,
        attrbase: [7, 7, 7, 10, 7, 6],
        hpadv: Advancement::new(10, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Samurai"),
        ranks: [rank("Hatamoto"), rank("Ronin"), rank("Ninja")],
        gods: ("_Amaterasu Omikami", "Raijin", "Susanowo"),
        filecode: "Sam",
        malenum: PM_MONK + 5,
        femalenum: None,
        allow: MH_HUMAN | BOTH | ROLE_LAWFUL,
        attrbase: [10, 8, 7, 10, 17, 6],
        hpadv: Advancement::new(13, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Tourist"),
        ranks: [rank("Rambler"), rank("Sightseer"), rank("Excursionist")],
        gods: ("Blind Io", "_The Lady", "Offler"),
        filecode: "Tou",
        malenum: PM_MONK + 6,
        femalenum: None,
        allow: MH_HUMAN | BOTH | ROLE_NEUTRAL,
        attrbase: [7, 10, 6, 7, 7, 10],
        hpadv: Advancement::new(8, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: TOURIST_ITEMS,
    },
    Role {
        name: rank("Valkyrie"),
        ranks: [
            RoleName::new("Stripling", None),
            rank("Skirmisher"),
            rank("Fighter"),
        ],
        gods: ("Tyr", "Odin", "Loki"),
        filecode: "Val",
        malenum: PM_MONK + 7,
        femalenum: None,
        allow: MH_HUMAN | MH_DWARF | ROLE_FEMALE | ROLE_LAWFUL | ROLE_NEUTRAL,
        attrbase: [10, 7, 7, 7, 10, 7],
        hpadv: Advancement::new(14, 0, 0, 8),
        enadv: Advancement::new(1, 0, 0, 1),
        starting_items: FIGHTER_ITEMS,
    },
    Role {
        name: rank("Wizard"),
        ranks: [rank("Evoker"), rank("Conjurer"), rank("Thaumaturge")],
        gods: ("Ptah", "Thoth", "Anhur"),
        filecode: "Wiz",
        malenum: PM_WIZARD,
        femalenum: None,
        allow: MH_HUMAN | MH_ELF | MH_GNOME | MH_ORC | BOTH | ROLE_NEUTRAL | ROLE_CHAOTIC,
        attrbase: [7, 10, 7, 7, 7, 7],
        hpadv: Advancement::new(10, 0, 0, 8),
        enadv: Advancement::new(4, 3, 0, 2),
        starting_items: WIZARD_ITEMS,
    },
];

// ==================== RACE DEFINITIONS ====================

/// All player races
pub static RACES: [Race; 5] = [
    Race {
        noun: "human",
        adj: "human",
        filecode: "Hum",
        malenum: PM_HUMAN,
        allow: MH_HUMAN | BOTH | ALL_ALIGN,
        selfmask: MH_HUMAN,
        attrmin: [3, 3, 3, 3, 3, 3],
        attrmax: [18, 18, 18, 18, 18, 18],
        hpadv: Advancement::new(2, 0, 0, 2),
        enadv: Advancement::new(1, 0, 2, 0),
    },
    Race {
        noun: "elf",
        adj: "elven",
        filecode: "Elf",
        malenum: PM_ELF,
        allow: MH_ELF | BOTH | ROLE_CHAOTIC,
        selfmask: MH_ELF,
        attrmin: [3, 3, 3, 3, 3, 3],
        attrmax: [18, 20, 20, 18, 16, 18],
        hpadv: Advancement::new(1, 0, 0, 1),
        enadv: Advancement::new(2, 0, 3, 0),
    },
    Race {
        noun: "dwarf",
        adj: "dwarven",
        filecode: "Dwa",
        malenum: PM_DWARF,
        allow: MH_DWARF | BOTH | ROLE_LAWFUL,
        selfmask: MH_DWARF,
        attrmin: [3, 3, 3, 3, 3, 3],
        attrmax: [18, 16, 16, 20, 20, 16],
        hpadv: Advancement::new(4, 0, 0, 3),
        enadv: Advancement::new(0, 0, 0, 0),
    },
    Race {
        noun: "gnome",
        adj: "gnomish",
        filecode: "Gno",
        malenum: PM_GNOME,
        allow: MH_GNOME | BOTH | ROLE_NEUTRAL,
        selfmask: MH_GNOME,
        attrmin: [3, 3, 3, 3, 3, 3],
        attrmax: [18, 19, 18, 18, 18, 18],
        hpadv: Advancement::new(1, 0, 0, 1),
        enadv: Advancement::new(2, 0, 2, 0),
    },
    Race {
        noun: "orc",
        adj: "orcish",
        filecode: "Orc",
        malenum: PM_ORC,
        allow: MH_ORC | BOTH | ROLE_CHAOTIC,
        selfmask: MH_ORC,
        attrmin: [3, 3, 3, 3, 3, 3],
        attrmax: [18, 16, 16, 18, 18, 16],
        hpadv: Advancement::new(1, 0, 0, 1),
        enadv: Advancement::new(1, 0, 1, 0),
    },
];

/// Find a role by name or file code
pub fn find_role(name: &str) -> Option<usize> {
    ROLES.iter().position(|r| {
        r.name.male.eq_ignore_ascii_case(name)
            || r.name.female.is_some_and(|f| f.eq_ignore_ascii_case(name))
            || r.filecode.eq_ignore_ascii_case(name)
    })
}

/// Find a race by noun, adjective or file code
pub fn find_race(name: &str) -> Option<usize> {
    RACES.iter().position(|r| {
        r.noun.eq_ignore_ascii_case(name)
            || r.adj.eq_ignore_ascii_case(name)
            || r.filecode.eq_ignore_ascii_case(name)
    })
}

/// A fully chosen character: role, race, alignment and gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub role: usize,
    pub race: usize,
    pub align: Alignment,
    pub gender: Gender,
}

impl Character {
    /// Parse a `role-race-align-gender` string of file codes, for example
    /// `"mon-hum-neu-mal"`. The combination must be allowed by both the role
    /// and the race.
    pub fn parse(s: &str) -> Result<Self, LookupError> {
        let bad = || LookupError::BadCharacter(s.to_string());
        let parts: Vec<&str> = s.split('-').map(str::trim).collect();
        let [role, race, align, gender] = parts.as_slice() else {
            return Err(bad());
        };
        let role = find_role(role).ok_or_else(bad)?;
        let race = find_race(race).ok_or_else(bad)?;
        let align = Alignment::from_code(&align.to_ascii_lowercase()).ok_or_else(bad)?;
        let gender = Gender::from_code(&gender.to_ascii_lowercase()).ok_or_else(bad)?;

        let (r, rc) = (&ROLES[role], &RACES[race]);
        let ok = r.allow & rc.selfmask != 0
            && r.allow & align.mask() != 0
            && rc.allow & align.mask() != 0
            && r.allow & gender.mask() != 0;
        if !ok {
            return Err(bad());
        }
        Ok(Self {
            role,
            race,
            align,
            gender,
        })
    }

    pub fn role(&self) -> &'static Role {
        &ROLES[self.role]
    }

    pub fn race(&self) -> &'static Race {
        &RACES[self.race]
    }

    /// "neutral male human Monk"
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {}",
            self.align,
            self.gender,
            self.race().adj,
            self.role().name.get(self.gender)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_character() {
        let ch = Character::parse("mon-hum-neu-mal").unwrap();
        assert_eq!(ch.role().name.male, "Monk");
        assert_eq!(ch.race().noun, "human");
        assert_eq!(ch.align, Alignment::Neutral);
        assert_eq!(ch.gender, Gender::Male);
        assert_eq!(ch.describe(), "neutral male human Monk");
        assert_eq!(ch.role().monster(ch.gender), PM_MONK);
    }

    #[test]
    fn test_parse_rejects_disallowed() {
        // Elves are always chaotic
        assert!(Character::parse("wiz-elf-neu-mal").is_err());
        // Valkyries are always female
        assert!(Character::parse("val-hum-law-mal").is_err());
        assert!(Character::parse("mon-hum-neu").is_err());
        assert!(Character::parse("xyz-hum-neu-mal").is_err());
    }

    #[test]
    fn test_player_monsters_line_up() {
        for role in ROLES.iter() {
            let pm = &MONS[role.malenum];
            assert!(
                pm.mname.eq_ignore_ascii_case(role.name.male),
                "{} vs {}",
                pm.mname,
                role.name.male
            );
        }
        assert_eq!(MONS[ROLES[2].monster(Gender::Female)].mname, "cavewoman");
    }

    #[test]
    fn test_masks_disjoint() {
        let align = ROLE_LAWFUL | ROLE_NEUTRAL | ROLE_CHAOTIC;
        let race = MH_HUMAN | MH_ELF | MH_DWARF | MH_GNOME | MH_ORC;
        let gender = ROLE_MALE | ROLE_FEMALE;
        assert_eq!(align & race, 0);
        assert_eq!(race & gender, 0);
        assert_eq!(align & gender, 0);
    }

    #[test]
    fn test_rank_title() {
        let monk = &ROLES[find_role("mon").unwrap()];
        assert_eq!(monk.rank_title(1, Gender::Male), "Candidate");
        assert_eq!(monk.rank_title(4, Gender::Male), "Novice");
        assert_eq!(monk.god(Alignment::Neutral), "Chih Sung-tzu");
    }
}
