//! Glyph layout (display.h)
//!
//! A glyph is a single integer naming everything the map can show. The
//! ranges are laid out back to back, monsters first.

use crate::colors::{CLR_BROWN, CLR_RED, NO_COLOR};
use crate::error::LookupError;
use crate::monsters::{MONS, NON_PM, NUMMONS};
use crate::objects::{kind_by_otyp, NUM_OBJECTS};
use crate::symbols::{DEF_SYMS, MAXEXPCHARS, MAXPCHARS};

/// Number of explosion types
pub const EXPL_MAX: i32 = 7;
/// Number of zap beam types
pub const NUM_ZAP: i32 = 8;
/// Number of warning levels
pub const WARNCOUNT: i32 = 6;

const N: i32 = NUMMONS as i32;

pub const GLYPH_MON_OFF: i32 = 0;
pub const GLYPH_PET_OFF: i32 = N + GLYPH_MON_OFF;
pub const GLYPH_INVIS_OFF: i32 = N + GLYPH_PET_OFF;
pub const GLYPH_DETECT_OFF: i32 = 1 + GLYPH_INVIS_OFF;
pub const GLYPH_BODY_OFF: i32 = N + GLYPH_DETECT_OFF;
pub const GLYPH_RIDDEN_OFF: i32 = N + GLYPH_BODY_OFF;
pub const GLYPH_OBJ_OFF: i32 = N + GLYPH_RIDDEN_OFF;
pub const GLYPH_CMAP_OFF: i32 = NUM_OBJECTS as i32 + GLYPH_OBJ_OFF;
pub const GLYPH_EXPLODE_OFF: i32 = (MAXPCHARS - MAXEXPCHARS) as i32 + GLYPH_CMAP_OFF;
pub const GLYPH_ZAP_OFF: i32 = MAXEXPCHARS as i32 * EXPL_MAX + GLYPH_EXPLODE_OFF;
pub const GLYPH_SWALLOW_OFF: i32 = NUM_ZAP * 4 + GLYPH_ZAP_OFF;
pub const GLYPH_WARNING_OFF: i32 = N * 8 + GLYPH_SWALLOW_OFF;
pub const GLYPH_STATUE_OFF: i32 = WARNCOUNT + GLYPH_WARNING_OFF;
pub const MAX_GLYPH: i32 = N + GLYPH_STATUE_OFF;

/// The glyph the map starts with: solid rock
pub const NO_GLYPH: i32 = MAX_GLYPH;
pub const GLYPH_INVISIBLE: i32 = GLYPH_INVIS_OFF;

pub const fn monnum_to_glyph(mnum: usize) -> i32 {
    mnum as i32 + GLYPH_MON_OFF
}

pub const fn petnum_to_glyph(mnum: usize) -> i32 {
    mnum as i32 + GLYPH_PET_OFF
}

pub const fn objnum_to_glyph(onum: usize) -> i32 {
    onum as i32 + GLYPH_OBJ_OFF
}

pub const fn cmap_to_glyph(cmap: usize) -> i32 {
    cmap as i32 + GLYPH_CMAP_OFF
}

pub const fn glyph_is_monster(glyph: i32) -> bool {
    glyph >= GLYPH_MON_OFF && glyph < GLYPH_INVIS_OFF
}

pub const fn glyph_is_pet(glyph: i32) -> bool {
    glyph >= GLYPH_PET_OFF && glyph < GLYPH_INVIS_OFF
}

pub const fn glyph_is_object(glyph: i32) -> bool {
    glyph >= GLYPH_OBJ_OFF && glyph < GLYPH_CMAP_OFF
}

/// Corpse glyph for a monster
pub const fn body_to_glyph(mnum: usize) -> i32 {
    mnum as i32 + GLYPH_BODY_OFF
}

pub const fn glyph_is_cmap(glyph: i32) -> bool {
    glyph >= GLYPH_CMAP_OFF && glyph < GLYPH_EXPLODE_OFF
}

/// Monster number shown by a glyph, or `NON_PM` if the glyph shows no
/// monster. Pets, ridden monsters, corpses and statues map back to their
/// monster.
pub const fn glyph_to_mon(glyph: i32) -> i32 {
    if glyph_is_monster(glyph) {
        (glyph - GLYPH_MON_OFF) % N
    } else if glyph >= GLYPH_BODY_OFF && glyph < GLYPH_RIDDEN_OFF {
        glyph - GLYPH_BODY_OFF
    } else if glyph >= GLYPH_RIDDEN_OFF && glyph < GLYPH_OBJ_OFF {
        glyph - GLYPH_RIDDEN_OFF
    } else if glyph >= GLYPH_STATUE_OFF && glyph < MAX_GLYPH {
        glyph - GLYPH_STATUE_OFF
    } else {
        NON_PM
    }
}

/// Object kind shown by a glyph, if any.
pub const fn glyph_to_obj(glyph: i32) -> Option<usize> {
    if glyph_is_object(glyph) {
        Some((glyph - GLYPH_OBJ_OFF) as usize)
    } else {
        None
    }
}

/// Map symbol index shown by a glyph, if any.
pub const fn glyph_to_cmap(glyph: i32) -> Option<usize> {
    if glyph_is_cmap(glyph) {
        Some((glyph - GLYPH_CMAP_OFF) as usize)
    } else {
        None
    }
}

/// Validate a raw glyph code.
pub fn check_glyph(glyph: impl Into<i64>) -> Result<i32, LookupError> {
    let glyph = glyph.into();
    if glyph < 0 || glyph > MAX_GLYPH as i64 {
        return Err(LookupError::GlyphOutOfRange {
            glyph,
            max: MAX_GLYPH,
        });
    }
    Ok(glyph as i32)
}

/// Character and color a glyph is drawn with (mapglyph).
pub fn mapglyph(glyph: i32) -> (char, u8) {
    if glyph_is_monster(glyph) || (glyph >= GLYPH_RIDDEN_OFF && glyph < GLYPH_OBJ_OFF) {
        let pm = &MONS[glyph_to_mon(glyph) as usize];
        return (pm.class().sym, pm.mcolor);
    }
    if glyph == GLYPH_INVISIBLE {
        return ('I', NO_COLOR);
    }
    if glyph >= GLYPH_BODY_OFF && glyph < GLYPH_RIDDEN_OFF {
        return ('%', MONS[glyph_to_mon(glyph) as usize].mcolor);
    }
    if let Some(otyp) = glyph_to_obj(glyph) {
        return match kind_by_otyp(otyp) {
            Some(kind) => (kind.class.symbol(), kind.color),
            None => (']', CLR_BROWN),
        };
    }
    if let Some(idx) = glyph_to_cmap(glyph) {
        if let Some(sym) = DEF_SYMS.get(idx) {
            return (sym.sym, sym.color);
        }
        return ('*', CLR_RED);
    }
    if glyph >= GLYPH_STATUE_OFF && glyph < MAX_GLYPH {
        return ('`', MONS[glyph_to_mon(glyph) as usize].mcolor);
    }
    (' ', NO_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::{PM_LICHEN, PM_MONK};

    #[test]
    fn test_offsets_are_ordered() {
        let offs = [
            GLYPH_MON_OFF,
            GLYPH_PET_OFF,
            GLYPH_INVIS_OFF,
            GLYPH_DETECT_OFF,
            GLYPH_BODY_OFF,
            GLYPH_RIDDEN_OFF,
            GLYPH_OBJ_OFF,
            GLYPH_CMAP_OFF,
            GLYPH_EXPLODE_OFF,
            GLYPH_ZAP_OFF,
            GLYPH_SWALLOW_OFF,
            GLYPH_WARNING_OFF,
            GLYPH_STATUE_OFF,
            MAX_GLYPH,
        ];
        assert!(offs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(GLYPH_MON_OFF, 0);
        assert_eq!(GLYPH_CMAP_OFF, 2359);
        assert!(MAX_GLYPH < i16::MAX as i32);
    }

    #[test]
    fn test_glyph_to_mon() {
        assert_eq!(glyph_to_mon(155), PM_LICHEN as i32);
        assert_eq!(glyph_to_mon(petnum_to_glyph(PM_MONK)), PM_MONK as i32);
        assert_eq!(glyph_to_mon(cmap_to_glyph(0)), NON_PM);
        assert_eq!(glyph_to_mon(GLYPH_INVISIBLE), NON_PM);
        assert_eq!(glyph_to_mon(-1), NON_PM);
    }

    #[test]
    fn test_cmap_roundtrip() {
        let g = cmap_to_glyph(24);
        assert!(glyph_is_cmap(g));
        assert!(!glyph_is_monster(g));
        assert_eq!(glyph_to_cmap(g), Some(24));
        assert_eq!(glyph_to_obj(g), None);
    }

    #[test]
    fn test_mapglyph() {
        assert_eq!(mapglyph(monnum_to_glyph(PM_MONK)).0, '@');
        assert_eq!(mapglyph(155).0, 'F');
        assert_eq!(mapglyph(cmap_to_glyph(crate::symbols::S_DNSTAIR)).0, '>');
        assert_eq!(mapglyph(cmap_to_glyph(crate::symbols::S_STONE)), (' ', 0));
        assert_eq!(mapglyph(body_to_glyph(PM_LICHEN)).0, '%');
        assert_eq!(mapglyph(objnum_to_glyph(414)).0, '$');
    }

    #[test]
    fn test_check_glyph() {
        assert!(check_glyph(-1).is_err());
        assert!(check_glyph(MAX_GLYPH as i64 + 1).is_err());
        assert_eq!(check_glyph(NO_GLYPH as i64), Ok(MAX_GLYPH));
    }
}
