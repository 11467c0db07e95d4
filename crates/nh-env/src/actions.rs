//! The action catalog and its encoding into engine input
//!
//! Every action is a stable integer: the key code NetHack reads for it.
//! Most actions are one key. Commands bound to meta keys are sent as an
//! extended command line instead (`#pray\r`), which every port accepts.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::{NethackError, Result};

/// Key code of `c` with the meta bit set
pub const fn meta(c: u8) -> u8 {
    0x80 | c
}

/// Key code of control-`c`
pub const fn ctrl(c: u8) -> u8 {
    0x1f & c
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum CompassDirection {
    N = b'k',
    E = b'l',
    S = b'j',
    W = b'h',
    NE = b'u',
    SE = b'n',
    SW = b'b',
    NW = b'y',
}

/// Move until something interesting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum CompassDirectionLonger {
    N = b'K',
    E = b'L',
    S = b'J',
    W = b'H',
    NE = b'U',
    SE = b'N',
    SW = b'B',
    NW = b'Y',
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum MiscDirection {
    Up = b'<',
    Down = b'>',
    Wait = b'.',
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum MiscAction {
    /// Dismiss `--More--`, a menu or a text window
    More = b'\r',
}

/// Game commands. The display name of a meta-key command is its extended
/// command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Command {
    ExtCmd = b'#',
    #[strum(serialize = "?")]
    ExtList = meta(b'?'),
    Adjust = meta(b'a'),
    Annotate = meta(b'A'),
    Apply = b'a',
    Attributes = ctrl(b'x'),
    AutoPickup = b'@',
    Call = b'C',
    Cast = b'Z',
    Chat = meta(b'c'),
    Close = b'c',
    Conduct = meta(b'C'),
    Dip = meta(b'd'),
    Drop = b'd',
    DropType = b'D',
    Eat = b'e',
    Esc = ctrl(b'['),
    Engrave = b'E',
    Enhance = meta(b'e'),
    Fire = b'f',
    Fight = b'F',
    Force = meta(b'f'),
    Glance = b';',
    History = b'V',
    Inventory = b'i',
    InventType = b'I',
    Invoke = meta(b'i'),
    Jump = meta(b'j'),
    Kick = ctrl(b'd'),
    Known = b'\\',
    KnownClass = b'`',
    Look = b':',
    Loot = meta(b'l'),
    Monster = meta(b'm'),
    Move = b'm',
    MoveFar = b'M',
    Offer = meta(b'o'),
    Open = b'o',
    Options = b'O',
    Overview = ctrl(b'o'),
    Pay = b'p',
    Pickup = b',',
    Pray = meta(b'p'),
    PrevMsg = ctrl(b'p'),
    PutOn = b'P',
    Quaff = b'q',
    Quit = meta(b'q'),
    Quiver = b'Q',
    Read = b'r',
    Redraw = ctrl(b'r'),
    Remove = b'R',
    Ride = meta(b'R'),
    Rub = meta(b'r'),
    Rush = b'g',
    Rush2 = b'G',
    Save = b'S',
    Search = b's',
    SeeAll = b'*',
    SeeAmulet = b'"',
    SeeArmor = b'[',
    SeeGold = b'$',
    SeeRings = b'=',
    SeeSpells = b'+',
    SeeTools = b'(',
    SeeTrap = b'^',
    SeeWeapon = b')',
    Shell = b'!',
    Sit = meta(b's'),
    Swap = b'x',
    TakeOff = b'T',
    TakeOffAll = b'A',
    Teleport = ctrl(b't'),
    Throw = b't',
    Tip = meta(b'T'),
    Travel = b'_',
    Turn = meta(b't'),
    TwoWeapon = b'X',
    Untrap = meta(b'u'),
    Version = meta(b'v'),
    VersionShort = b'v',
    Wear = b'W',
    WhatDoes = b'&',
    WhatIs = b'/',
    Wield = b'w',
    Wipe = meta(b'w'),
    Zap = b'z',
}

/// Characters typed into prompts and menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum TextCharacter {
    Plus = b'+',
    Minus = b'-',
    Space = b' ',
    Apos = b'\'',
    Quote = b'"',
    Num0 = b'0',
    Num1 = b'1',
    Num2 = b'2',
    Num3 = b'3',
    Num4 = b'4',
    Num5 = b'5',
    Num6 = b'6',
    Num7 = b'7',
    Num8 = b'8',
    Num9 = b'9',
    Dollar = b'$',
}

macro_rules! action_ids {
    ($($family:ty),* $(,)?) => {
        $(
            impl From<$family> for u32 {
                fn from(action: $family) -> u32 {
                    action as u8 as u32
                }
            }
        )*
    };
}

action_ids!(
    CompassDirection,
    CompassDirectionLonger,
    MiscDirection,
    MiscAction,
    Command,
    TextCharacter,
);

/// Maps action ids to the bytes fed to the engine
#[derive(Debug, Clone)]
pub struct ActionEncoder {
    table: BTreeMap<u32, Vec<u8>>,
}

impl Default for ActionEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionEncoder {
    /// Encoder over the full catalog
    pub fn new() -> Self {
        let mut table = BTreeMap::new();
        let single = CompassDirection::iter()
            .map(u32::from)
            .chain(CompassDirectionLonger::iter().map(u32::from))
            .chain(MiscDirection::iter().map(u32::from))
            .chain(MiscAction::iter().map(u32::from))
            .chain(TextCharacter::iter().map(u32::from));
        for id in single {
            table.insert(id, vec![id as u8]);
        }
        for cmd in Command::iter() {
            let key = cmd as u8;
            let bytes = if key & 0x80 != 0 {
                format!("#{cmd}\r").into_bytes()
            } else {
                vec![key]
            };
            table.insert(u32::from(cmd), bytes);
        }
        Self { table }
    }

    /// Bytes for one action, or [`NethackError::InvalidAction`] when the id
    /// is outside the catalog.
    pub fn encode(&self, id: u32) -> Result<&[u8]> {
        self.table
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(NethackError::InvalidAction(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.table.contains_key(&id)
    }

    /// Every action id, ascending
    pub fn actions(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(u32::from(MiscAction::More), 13);
        assert_eq!(u32::from(CompassDirection::N), 107);
        assert_eq!(u32::from(CompassDirectionLonger::NW), 89);
        assert_eq!(u32::from(Command::Pray), 240);
        assert_eq!(u32::from(Command::Attributes), 24);
        assert_eq!(u32::from(Command::Esc), 27);
    }

    #[test]
    fn test_single_byte_actions() {
        let enc = ActionEncoder::new();
        assert_eq!(enc.encode(b'k' as u32).unwrap(), b"k");
        assert_eq!(enc.encode(Command::Inventory.into()).unwrap(), b"i");
        assert_eq!(enc.encode(MiscAction::More.into()).unwrap(), b"\r");
        assert_eq!(enc.encode(TextCharacter::Num7.into()).unwrap(), b"7");
    }

    #[test]
    fn test_extended_commands() {
        let enc = ActionEncoder::new();
        assert_eq!(enc.encode(Command::Pray.into()).unwrap(), b"#pray\r");
        assert_eq!(enc.encode(Command::Quit.into()).unwrap(), b"#quit\r");
        assert_eq!(enc.encode(Command::ExtList.into()).unwrap(), b"#?\r");
        assert_eq!(enc.encode(Command::Enhance.into()).unwrap(), b"#enhance\r");
    }

    #[test]
    fn test_unknown_ids() {
        let enc = ActionEncoder::new();
        for id in [0, 10, 255, 256, 100_000] {
            assert!(matches!(enc.encode(id), Err(NethackError::InvalidAction(i)) if i == id));
        }
    }

    #[test]
    fn test_catalog() {
        let enc = ActionEncoder::new();
        assert!(enc.contains(b'.' as u32));
        // Families share some keys ('$', '+', '"'), so the catalog is a set
        let families = 8 + 8 + 3 + 1 + Command::iter().count() + TextCharacter::iter().count();
        assert!(enc.len() < families);
        assert!(enc.actions().all(|id| id < 256));
    }

    proptest! {
        #[test]
        fn encoded_actions_are_nonempty(id in 0u32..512) {
            let enc = ActionEncoder::new();
            match enc.encode(id) {
                Ok(bytes) => {
                    prop_assert!(!bytes.is_empty());
                    prop_assert!(bytes.len() == 1 || (bytes[0] == b'#' && bytes.ends_with(b"\r")));
                }
                Err(NethackError::InvalidAction(bad)) => prop_assert_eq!(bad, id),
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
        }
    }
}
