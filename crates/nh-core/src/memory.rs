//! Engine memory read by observers
//!
//! The engine keeps one copy of every observable buffer and rewrites it each
//! time it settles after a key. [`EngineMemory`] lends those buffers out
//! without copying.

use nh_data::symbols::S_STONE;
use nh_data::{
    cmap_to_glyph, COLNO, MSG_BUFSZ, NLE_BLSTATS_SIZE, NLE_INTERNAL_SIZE, NLE_PROGRAM_STATE_SIZE,
    ROWNO,
};

pub type Grid<T> = [[T; COLNO]; ROWNO];

// blstats fields
pub const BL_X: usize = 0;
pub const BL_Y: usize = 1;
pub const BL_STR25: usize = 2;
pub const BL_STR125: usize = 3;
pub const BL_DEX: usize = 4;
pub const BL_CON: usize = 5;
pub const BL_INT: usize = 6;
pub const BL_WIS: usize = 7;
pub const BL_CHA: usize = 8;
pub const BL_SCORE: usize = 9;
pub const BL_HP: usize = 10;
pub const BL_HPMAX: usize = 11;
pub const BL_DEPTH: usize = 12;
pub const BL_GOLD: usize = 13;
pub const BL_ENE: usize = 14;
pub const BL_ENEMAX: usize = 15;
pub const BL_AC: usize = 16;
pub const BL_HD: usize = 17;
pub const BL_XP: usize = 18;
pub const BL_EXP: usize = 19;
pub const BL_TIME: usize = 20;
pub const BL_HUNGER: usize = 21;
pub const BL_CAP: usize = 22;
pub const BL_DNUM: usize = 23;
pub const BL_DLEVEL: usize = 24;

// program_state fields
pub const PS_GAMEOVER: usize = 0;
pub const PS_PANICKING: usize = 1;
pub const PS_EXITING: usize = 2;
pub const PS_IN_MOVELOOP: usize = 3;
pub const PS_IN_IMPOSSIBLE: usize = 4;
pub const PS_STOPPRINT: usize = 5;

// internal fields
pub const IN_DEEPEST_LEV: usize = 0;
pub const IN_YN_FUNCTION: usize = 1;
pub const IN_GETLIN: usize = 2;
pub const IN_XWAITFORSPACE: usize = 3;
pub const IN_STAIRS_DOWN: usize = 4;
pub const IN_MOVES: usize = 5;
pub const IN_UHUNGER: usize = 6;
pub const IN_HOW_DONE: usize = 7;
pub const IN_PENDING: usize = 8;

/// Borrowed view of the observable buffers
#[derive(Debug, Clone, Copy)]
pub struct EngineMemory<'a> {
    pub glyphs: &'a Grid<i16>,
    pub chars: &'a Grid<u8>,
    pub colors: &'a Grid<u8>,
    pub blstats: &'a [i64; NLE_BLSTATS_SIZE],
    /// NUL-padded top line
    pub message: &'a [u8; MSG_BUFSZ],
    pub program_state: &'a [i32; NLE_PROGRAM_STATE_SIZE],
    pub internal: &'a [i32; NLE_INTERNAL_SIZE],
}

#[derive(Debug, Clone)]
pub(crate) struct Memory {
    pub glyphs: Grid<i16>,
    pub chars: Grid<u8>,
    pub colors: Grid<u8>,
    pub blstats: [i64; NLE_BLSTATS_SIZE],
    pub message: [u8; MSG_BUFSZ],
    pub program_state: [i32; NLE_PROGRAM_STATE_SIZE],
    pub internal: [i32; NLE_INTERNAL_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut mem = Self {
            glyphs: [[0; COLNO]; ROWNO],
            chars: [[b' '; COLNO]; ROWNO],
            colors: [[0; COLNO]; ROWNO],
            blstats: [0; NLE_BLSTATS_SIZE],
            message: [0; MSG_BUFSZ],
            program_state: [0; NLE_PROGRAM_STATE_SIZE],
            internal: [0; NLE_INTERNAL_SIZE],
        };
        mem.blank_map();
        mem
    }

    /// Fill the map with unexplored stone.
    pub fn blank_map(&mut self) {
        let stone = cmap_to_glyph(S_STONE) as i16;
        for row in self.glyphs.iter_mut() {
            row.fill(stone);
        }
        for row in self.chars.iter_mut() {
            row.fill(b' ');
        }
        for row in self.colors.iter_mut() {
            row.fill(0);
        }
    }

    /// Copy a message into the buffer, truncated to leave a trailing NUL.
    pub fn set_message(&mut self, text: &str) {
        self.message.fill(0);
        let bytes = text.as_bytes();
        let n = bytes.len().min(MSG_BUFSZ - 1);
        self.message[..n].copy_from_slice(&bytes[..n]);
    }

    pub fn view(&self) -> EngineMemory<'_> {
        EngineMemory {
            glyphs: &self.glyphs,
            chars: &self.chars,
            colors: &self.colors,
            blstats: &self.blstats,
            message: &self.message,
            program_state: &self.program_state,
            internal: &self.internal,
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_message_truncates() {
        let mut mem = Memory::new();
        mem.set_message(&"x".repeat(400));
        assert_eq!(mem.message[MSG_BUFSZ - 2], b'x');
        assert_eq!(mem.message[MSG_BUFSZ - 1], 0);
        mem.set_message("hi");
        assert_eq!(&mem.message[..3], b"hi\0");
    }

    #[test]
    fn test_blank_map_is_stone() {
        let mem = Memory::new();
        assert!(mem.chars.iter().flatten().all(|&c| c == b' '));
        assert!(
            mem.glyphs
                .iter()
                .flatten()
                .all(|&g| g as i32 == cmap_to_glyph(S_STONE))
        );
    }
}
