//! Monsters on the map and random monster selection (makemon.c)

use nh_data::symbols::*;
use nh_data::{monnum_to_glyph, Permonst, MONS};

use crate::obj::the;
use crate::rng::GameRng;

/// Movement points needed for one action
pub const NORMAL_SPEED: i32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub mndx: usize,
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub hpmax: i32,
    pub movement: i32,
    /// Has noticed the hero and is closing in
    pub awake: bool,
}

impl Monster {
    /// A new monster with rolled hit points
    pub fn new(mndx: usize, x: i32, y: i32, rng: &mut GameRng) -> Self {
        let level = MONS[mndx].mlevel.max(0) as u32;
        let hp = if level == 0 {
            rng.rnd(4) as i32
        } else {
            rng.dice(level, 8) as i32
        };
        Self {
            mndx,
            x,
            y,
            hp,
            hpmax: hp,
            movement: 0,
            awake: false,
        }
    }

    pub fn data(&self) -> &'static Permonst {
        &MONS[self.mndx]
    }

    pub fn glyph(&self) -> i32 {
        monnum_to_glyph(self.mndx)
    }

    /// "The jackal" or "the jackal"
    pub fn name(&self, capital: bool) -> String {
        the(self.data().mname, capital)
    }

    /// Experience for killing this monster
    pub fn experience(&self) -> i64 {
        let pm = self.data();
        let lvl = pm.mlevel.max(0) as i64;
        let speed = match pm.mmove {
            18.. => 5,
            12..=17 => 3,
            _ => 0,
        };
        1 + lvl * lvl + speed
    }

    /// Verb used when this monster's melee attack lands
    pub fn hit_verb(&self) -> &'static str {
        if self.data().attack.0 == 0 {
            return "touches you";
        }
        match self.data().mlet {
            S_ANT | S_DOG | S_RODENT | S_SPIDER | S_SNAKE | S_LIZARD | S_EEL | S_BAT
            | S_WORM | S_XAN | S_FELINE | S_QUADRUPED => "bites",
            S_FUNGUS | S_JELLY | S_BLOB | S_PUDDING | S_VORTEX | S_LIGHT | S_EYE => {
                "touches you"
            }
            _ => "hits",
        }
    }
}

/// Candidates for a random monster at a given difficulty.
///
/// Humans, ghosts and worm tails never appear at random.
pub fn candidates(max_level: i32) -> impl Iterator<Item = (usize, &'static Permonst)> {
    let min_level = max_level / 6;
    MONS.iter().enumerate().filter(move |(_, pm)| {
        pm.randomly_generated()
            && !matches!(pm.mlet, S_HUMAN | S_GHOST | S_WORM_TAIL)
            && (pm.mlevel as i32) <= max_level
            && (pm.mlevel as i32) >= min_level
    })
}

/// Pick a random monster, weighted by generation frequency.
pub fn pick_random(rng: &mut GameRng, depth: i32, ulevel: i32) -> Option<usize> {
    let max_level = (depth + ulevel) / 2 + 1;
    let (idx, weights): (Vec<usize>, Vec<u32>) = candidates(max_level)
        .map(|(i, pm)| (i, pm.frequency() as u32))
        .unzip();
    rng.weighted(&weights).map(|i| idx[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_data::monsters::{PM_JACKAL, PM_LICHEN};

    #[test]
    fn test_candidates_exclude_people() {
        for (_, pm) in candidates(40) {
            assert!(!matches!(pm.mlet, S_HUMAN | S_GHOST | S_WORM_TAIL), "{}", pm.mname);
            assert!(!pm.is_unique(), "{}", pm.mname);
        }
    }

    #[test]
    fn test_pick_respects_difficulty() {
        let mut rng = GameRng::new(5);
        for _ in 0..300 {
            let mndx = pick_random(&mut rng, 1, 1).unwrap();
            assert!(MONS[mndx].mlevel <= 2, "{}", MONS[mndx].mname);
        }
    }

    #[test]
    fn test_hit_points_and_verbs() {
        let mut rng = GameRng::new(1);
        let jackal = Monster::new(PM_JACKAL, 3, 3, &mut rng);
        assert!(jackal.hp >= 1 && jackal.hp == jackal.hpmax);
        assert_eq!(jackal.hit_verb(), "bites");
        assert_eq!(jackal.name(true), "The jackal");
        let lichen = Monster::new(PM_LICHEN, 3, 3, &mut rng);
        assert_eq!(lichen.hit_verb(), "touches you");
        assert_eq!(lichen.glyph(), 155);
    }
}
