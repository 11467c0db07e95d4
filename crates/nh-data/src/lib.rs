//! nh-data: Static game data for the NetHack environment
//!
//! Monster templates, class and map symbols, the glyph layout, object kinds,
//! roles and races, and the window-system constants shared by the engine and
//! the driver. Every table is reached through a bounds-checked accessor.

pub mod colors;
pub mod error;
pub mod glyph;
pub mod monsters;
pub mod objects;
pub mod roles;
pub mod symbols;
pub mod window;

pub use colors::*;
pub use error::LookupError;
pub use glyph::*;
pub use monsters::{permonst, GenFlags, Permonst, MONS, NON_PM, NUMMONS};
pub use objects::{ObjKind, ObjectClass, NUM_OBJECTS, OBJECTS};
pub use roles::{Alignment, Character, Gender, Race, Role, RACES, ROLES};
pub use symbols::{ClassSym, DefSym, MAXMCLASSES, MAXPCHARS};
pub use window::*;
