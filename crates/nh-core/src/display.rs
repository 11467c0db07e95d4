//! Vision and the observable map (vision.c, display.c, botl.c)

use nh_data::roles::*;
use nh_data::symbols::S_DNSTAIR;
use nh_data::{mapglyph, monnum_to_glyph, COLNO, ROWNO};

use crate::game::Game;
use crate::level::is_ok;
use crate::memory::*;

impl Game {
    /// Recompute what the hero sees: the adjacent squares, plus the whole
    /// room when standing in a lit one. Seen squares are remembered.
    pub(crate) fn vision_recalc(&mut self) {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let mut sight = [[false; COLNO]; ROWNO];
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (x, y) = (ux + dx, uy + dy);
                if is_ok(x, y) {
                    sight[y as usize][x as usize] = true;
                }
            }
        }
        if let Some(room) = self.lev().room_at(ux, uy).filter(|r| r.lit) {
            for y in room.ly - 1..=room.hy + 1 {
                for x in room.lx - 1..=room.hx + 1 {
                    if is_ok(x, y) {
                        sight[y as usize][x as usize] = true;
                    }
                }
            }
        }
        self.sight = sight;

        let lev = &mut self.levels[self.cur];
        for (y, row) in sight.iter().enumerate() {
            for (x, &seen) in row.iter().enumerate() {
                if seen {
                    let glyph = lev.back_glyph(x as i32, y as i32);
                    lev.remembered[y][x] = glyph;
                }
            }
        }
    }

    /// Glyph shown at a location: the hero, a visible monster, else memory
    pub(crate) fn glyph_at(&self, x: i32, y: i32) -> i32 {
        if (x, y) == (self.u.ux, self.u.uy) {
            return monnum_to_glyph(self.u.umonnum);
        }
        if self.sight[y as usize][x as usize] {
            if let Some(mi) = self.lev().monster_at(x, y) {
                return self.lev().monsters[mi].glyph();
            }
        }
        self.lev().remembered[y as usize][x as usize]
    }

    /// Write the current state into the observable buffers.
    pub(crate) fn refresh(&self, mem: &mut Memory) {
        if self.map_drawn {
            for y in 0..ROWNO {
                for x in 0..COLNO {
                    let glyph = self.glyph_at(x as i32, y as i32);
                    let (ch, color) = mapglyph(glyph);
                    mem.glyphs[y][x] = glyph as i16;
                    mem.chars[y][x] = ch as u8;
                    mem.colors[y][x] = color;
                }
            }
        } else {
            mem.blank_map();
        }

        let u = &self.u;
        let bl = &mut mem.blstats;
        bl[BL_X] = (u.ux - 1) as i64;
        bl[BL_Y] = u.uy as i64;
        bl[BL_STR25] = u.attrs[A_STR] as i64;
        bl[BL_STR125] = u.attrs[A_STR] as i64;
        bl[BL_DEX] = u.attrs[A_DEX] as i64;
        bl[BL_CON] = u.attrs[A_CON] as i64;
        bl[BL_INT] = u.attrs[A_INT] as i64;
        bl[BL_WIS] = u.attrs[A_WIS] as i64;
        bl[BL_CHA] = u.attrs[A_CHA] as i64;
        bl[BL_SCORE] = self.score();
        bl[BL_HP] = u.uhp as i64;
        bl[BL_HPMAX] = u.uhpmax as i64;
        bl[BL_DEPTH] = self.depth() as i64;
        bl[BL_GOLD] = u.gold();
        bl[BL_ENE] = u.uen as i64;
        bl[BL_ENEMAX] = u.uenmax as i64;
        bl[BL_AC] = u.ac() as i64;
        bl[BL_HD] = 0;
        bl[BL_XP] = u.ulevel as i64;
        bl[BL_EXP] = u.uexp;
        bl[BL_TIME] = self.moves;
        bl[BL_HUNGER] = u.uhs as i64;
        bl[BL_CAP] = 0;
        bl[BL_DNUM] = 0;
        bl[BL_DLEVEL] = self.depth() as i64;

        mem.set_message(&self.toplines);

        let status = self.window_status();
        let ps = &mut mem.program_state;
        ps.fill(0);
        ps[PS_GAMEOVER] = self.gameover as i32;
        ps[PS_EXITING] = status.terminated as i32;
        ps[PS_IN_MOVELOOP] = self.in_moveloop as i32;

        let int = &mut mem.internal;
        int[IN_DEEPEST_LEV] = self.deepest;
        int[IN_YN_FUNCTION] = status.in_yn_function as i32;
        int[IN_GETLIN] = status.in_getlin as i32;
        int[IN_XWAITFORSPACE] = status.xwaitforspace as i32;
        int[IN_STAIRS_DOWN] = (self.lev().typ(u.ux, u.uy) == S_DNSTAIR) as i32;
        int[IN_MOVES] = self.moves as i32;
        int[IN_UHUNGER] = u.uhunger;
        int[IN_HOW_DONE] = self.how.map_or(-1, |h| h.code());
        int[IN_PENDING] = self.msgq.len() as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GameOptions;
    use crate::rng::Seeds;
    use crate::window::Wait;
    use nh_data::glyph_is_monster;

    fn game() -> Game {
        let opts = GameOptions {
            legacy: false,
            ..GameOptions::default()
        };
        Game::new(&opts, Seeds::new(7, 8)).unwrap()
    }

    #[test]
    fn test_hero_is_seen_and_drawn() {
        let g = game();
        assert!(g.sight[g.u.uy as usize][g.u.ux as usize]);
        let mut mem = Memory::new();
        g.refresh(&mut mem);
        let (x, y) = (g.u.ux as usize, g.u.uy as usize);
        assert_eq!(mem.chars[y][x], b'@');
        assert!(glyph_is_monster(mem.glyphs[y][x] as i32));
        assert_eq!(mem.blstats[BL_X], g.u.ux as i64 - 1);
        // The move loop only starts at the first command prompt
        assert_eq!(
            mem.program_state[PS_IN_MOVELOOP],
            (g.wait == Wait::Command) as i32
        );
    }

    #[test]
    fn test_blank_before_moveloop() {
        let g = Game::new(&GameOptions::default(), Seeds::new(7, 8)).unwrap();
        let mut mem = Memory::new();
        g.refresh(&mut mem);
        assert!(mem.chars.iter().flatten().all(|&c| c == b' '));
        assert_eq!(mem.internal[IN_XWAITFORSPACE], 1);
        assert_eq!(mem.internal[IN_HOW_DONE], -1);
    }
}
