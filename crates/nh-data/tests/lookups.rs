//! Bounds-checked table lookups

use nh_data::monsters::{permonst, PM_LICHEN, PM_MONK};
use nh_data::symbols::S_HUMAN;
use nh_data::*;
use proptest::prelude::*;

#[test]
fn test_table_sizes() {
    assert!(NUMMONS > 300);
    assert_eq!(GLYPH_MON_OFF, 0);
    assert_eq!(NHW_MESSAGE, 1);
    assert!(MAXWIN > 0);
    assert_eq!(MONS.len(), NUMMONS);
}

#[test]
fn test_permonst_errors() {
    assert!(matches!(
        permonst(10000),
        Err(LookupError::MonsterOutOfRange { index: 10000, .. })
    ));
    assert!(matches!(
        permonst(-1),
        Err(LookupError::MonsterOutOfRange { index: -1, .. })
    ));
}

#[test]
fn test_glyph_155_is_lichen() {
    let mon = permonst(glyph_to_mon(155)).unwrap();
    assert_eq!(mon.mname, "lichen");
    let cs = ClassSym::from_mlet(mon.mlet).unwrap();
    assert_eq!(cs.sym, 'F');
    assert_eq!(cs.explain, "fungus or mold");
    assert_eq!(PM_LICHEN, 155);
}

#[test]
fn test_monk_player_monster() {
    let mon = permonst(PM_MONK as i64).unwrap();
    assert_eq!(mon.mlevel, 10);
    assert_eq!(mon.mcolor, CLR_WHITE);
    let cs = ClassSym::from_mlet(mon.mlet).unwrap();
    assert_eq!(mon.mlet, S_HUMAN);
    assert_eq!(cs.sym, '@');
    assert_eq!(cs.explain, "human or elf");
}

#[test]
fn test_from_mlet_invalid() {
    let err = ClassSym::from_mlet(0xFF).unwrap_err();
    assert_eq!(
        err,
        LookupError::ClassOutOfRange {
            mlet: 255,
            max: MAXMCLASSES
        }
    );
    assert!(err.to_string().contains("255"));
}

proptest! {
    #[test]
    fn permonst_accepts_exactly_the_table(idx in -1000i64..1000) {
        let res = permonst(idx);
        prop_assert_eq!(res.is_ok(), (0..NUMMONS as i64).contains(&idx));
    }

    #[test]
    fn every_monster_glyph_maps_back(mndx in 0usize..NUMMONS) {
        prop_assert_eq!(glyph_to_mon(monnum_to_glyph(mndx)), mndx as i32);
        prop_assert_eq!(glyph_to_mon(petnum_to_glyph(mndx)), mndx as i32);
        prop_assert!(ClassSym::from_mlet(MONS[mndx].mlet).is_ok());
    }

    #[test]
    fn non_monster_glyphs_have_no_monster(g in GLYPH_INVIS_OFF..GLYPH_BODY_OFF) {
        prop_assert_eq!(glyph_to_mon(g), NON_PM);
    }
}
