//! Terminal rendering (wintty.c)
//!
//! The engine has no real terminal. After each key it can paint the whole
//! 24x80 screen as ANSI bytes, which is what a session recorder stores.

use std::fmt::Write as _;

use nh_data::roles::*;
use nh_data::{ansi_fg, mapglyph, COLNO, NO_COLOR, ROWNO};

use crate::game::{Game, MORE};
use crate::window::Wait;

const CLEAR: &str = "\x1b[H\x1b[2J";
const RESET: &str = "\x1b[0m";

/// Move the cursor to a zero-based row and column.
fn goto(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\x1b[{};{}H", row + 1, col + 1);
}

impl Game {
    pub(crate) fn render(&self) -> Vec<u8> {
        let mut out = String::from(CLEAR);

        let mut top = self.toplines.clone();
        if matches!(self.wait, Wait::More(_)) {
            if !top.is_empty() {
                top.push(' ');
            }
            top.push_str(MORE);
        }
        out.push_str(&top);

        if self.map_drawn {
            self.render_map(&mut out);
            self.render_status(&mut out);
        }
        if let Wait::Window { lines, .. } = &self.wait {
            self.render_window(&mut out, lines);
        }
        out.into_bytes()
    }

    fn render_map(&self, out: &mut String) {
        for y in 0..ROWNO {
            goto(out, y + 1, 0);
            let mut color = NO_COLOR;
            for x in 0..COLNO {
                let glyph = self.glyph_at(x as i32, y as i32);
                let (ch, c) = mapglyph(glyph);
                if c != color {
                    out.push_str(ansi_fg(c));
                    color = c;
                }
                out.push(ch);
            }
            out.push_str(RESET);
        }
    }

    fn render_status(&self, out: &mut String) {
        let u = &self.u;
        goto(out, ROWNO + 1, 0);
        let _ = write!(
            out,
            "{} the {}  St:{} Dx:{} Co:{} In:{} Wi:{} Ch:{} {}",
            self.opts.playername,
            self.rank(),
            u.acurr(A_STR),
            u.acurr(A_DEX),
            u.acurr(A_CON),
            u.acurr(A_INT),
            u.acurr(A_WIS),
            u.acurr(A_CHA),
            capitalize(&self.ch.align.to_string()),
        );
        goto(out, ROWNO + 2, 0);
        let _ = write!(
            out,
            "Dlvl:{} $:{} HP:{}({}) Pw:{}({}) AC:{} Xp:{}/{} T:{}",
            self.depth(),
            u.gold(),
            u.uhp,
            u.uhpmax,
            u.uen,
            u.uenmax,
            u.ac(),
            u.ulevel,
            u.uexp,
            self.moves,
        );
        if u.uhs != crate::player::HungerState::NotHungry {
            let _ = write!(out, " {}", u.uhs);
        }
    }

    /// Menus sit at the right edge; text windows take the whole screen.
    fn render_window(&self, out: &mut String, lines: &[String]) {
        let width = lines.iter().map(String::len).max().unwrap_or(0).max(MORE.len());
        let col = if self.wait.is_text() {
            out.push_str(CLEAR);
            0
        } else {
            COLNO.saturating_sub(width + 1)
        };
        for (row, line) in lines.iter().enumerate().take(ROWNO + 1) {
            goto(out, row, col);
            let _ = write!(out, "{line:<width$}");
        }
        goto(out, lines.len().min(ROWNO + 1), col);
        out.push_str(MORE);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GameOptions;
    use crate::rng::Seeds;

    #[test]
    fn test_render_screen() {
        let opts = GameOptions {
            legacy: false,
            ..GameOptions::default()
        };
        let g = Game::new(&opts, Seeds::new(3, 4)).unwrap();
        let text = String::from_utf8(g.render()).unwrap();
        assert!(text.starts_with(CLEAR));
        assert!(text.contains("Hello Agent, welcome to NetHack!"));
        assert!(text.contains("Agent the Candidate"));
        assert!(text.contains("Dlvl:1 $:0"));
        assert!(text.contains('@'));
    }

    #[test]
    fn test_render_legacy_window() {
        let g = Game::new(&GameOptions::default(), Seeds::new(3, 4)).unwrap();
        let text = String::from_utf8(g.render()).unwrap();
        assert!(text.contains("It is written in the Book of"));
        assert!(text.ends_with(MORE));
        assert!(!text.contains("Dlvl:"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("neutral"), "Neutral");
        assert_eq!(capitalize(""), "");
    }
}
