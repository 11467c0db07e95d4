//! Color codes as written into the `colors` observation (color.h)
//!
//! Bit 3 is the "bright" bit, so `CLR_WHITE == 8 ^ CLR_GRAY`.

pub const CLR_BLACK: u8 = 0;
pub const CLR_RED: u8 = 1;
pub const CLR_GREEN: u8 = 2;
pub const CLR_BROWN: u8 = 3;
pub const CLR_BLUE: u8 = 4;
pub const CLR_MAGENTA: u8 = 5;
pub const CLR_CYAN: u8 = 6;
pub const CLR_GRAY: u8 = 7;
pub const NO_COLOR: u8 = 8;
pub const CLR_ORANGE: u8 = 9;
pub const CLR_BRIGHT_GREEN: u8 = 10;
pub const CLR_YELLOW: u8 = 11;
pub const CLR_BRIGHT_BLUE: u8 = 12;
pub const CLR_BRIGHT_MAGENTA: u8 = 13;
pub const CLR_BRIGHT_CYAN: u8 = 14;
pub const CLR_WHITE: u8 = 15;
pub const CLR_MAX: u8 = 16;

/// Bright bit
pub const BRIGHT: u8 = 8;

pub const HI_DOMESTIC: u8 = CLR_WHITE;
pub const HI_LORD: u8 = CLR_MAGENTA;
pub const HI_ZAP: u8 = CLR_BRIGHT_BLUE;
pub const HI_GOLD: u8 = CLR_YELLOW;
pub const HI_PAPER: u8 = CLR_WHITE;
pub const DRAGON_SILVER: u8 = CLR_BRIGHT_CYAN;

/// ANSI SGR foreground sequence for a color code, used by the tty renderer.
pub fn ansi_fg(color: u8) -> &'static str {
    match color & 0x0f {
        CLR_BLACK => "\x1b[0;30m",
        CLR_RED => "\x1b[0;31m",
        CLR_GREEN => "\x1b[0;32m",
        CLR_BROWN => "\x1b[0;33m",
        CLR_BLUE => "\x1b[0;34m",
        CLR_MAGENTA => "\x1b[0;35m",
        CLR_CYAN => "\x1b[0;36m",
        CLR_GRAY | NO_COLOR => "\x1b[0m",
        CLR_ORANGE => "\x1b[1;31m",
        CLR_BRIGHT_GREEN => "\x1b[1;32m",
        CLR_YELLOW => "\x1b[1;33m",
        CLR_BRIGHT_BLUE => "\x1b[1;34m",
        CLR_BRIGHT_MAGENTA => "\x1b[1;35m",
        CLR_BRIGHT_CYAN => "\x1b[1;36m",
        _ => "\x1b[1;37m",
    }
}
