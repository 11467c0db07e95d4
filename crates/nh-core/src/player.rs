//! The hero: attributes, hit points, hunger and inventory (u_init.c, eat.c)

use nh_data::roles::*;
use nh_data::{Character, ObjectClass};
use strum::Display;

use crate::obj::Obj;
use crate::rng::GameRng;

/// Starting nutrition
pub const INIT_HUNGER: i32 = 900;
/// Total attribute points handed out at character creation
const ATTR_POINTS: i32 = 75;
/// Prayer timeout of a new character
pub const INIT_PRAYER_TIMEOUT: i32 = 300;

/// Hunger status, in the order the status line reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum HungerState {
    Satiated = 0,
    #[strum(serialize = "Not Hungry")]
    NotHungry = 1,
    Hungry = 2,
    Weak = 3,
    Fainting = 4,
}

impl HungerState {
    pub fn from_nutrition(uhunger: i32) -> Self {
        match uhunger {
            1001.. => HungerState::Satiated,
            151..=1000 => HungerState::NotHungry,
            51..=150 => HungerState::Hungry,
            1..=50 => HungerState::Weak,
            _ => HungerState::Fainting,
        }
    }
}

#[derive(Debug, Clone)]
pub struct You {
    pub ux: i32,
    pub uy: i32,
    pub attrs: [i8; A_MAX],
    pub uhp: i32,
    pub uhpmax: i32,
    pub uen: i32,
    pub uenmax: i32,
    pub ulevel: i32,
    pub uexp: i64,
    /// Experience counted toward the score
    pub urexp: i64,
    pub uhunger: i32,
    pub uhs: HungerState,
    pub luck: i8,
    pub prayer_timeout: i32,
    /// Monster number the hero is drawn as
    pub umonnum: usize,
    pub invent: Vec<Obj>,
}

impl You {
    /// Roll a new hero for a character and hand out the starting kit.
    pub fn new(ch: &Character, rng: &mut GameRng) -> Self {
        let role = ch.role();
        let race = ch.race();

        let mut attrs = role.attrbase;
        let mut left = ATTR_POINTS - attrs.iter().map(|&a| a as i32).sum::<i32>();
        let mut tries = 0;
        while left > 0 && tries < 1000 {
            let i = rng.rn2(A_MAX as u32) as usize;
            if attrs[i] < race.attrmax[i] {
                attrs[i] += 1;
                left -= 1;
            }
            tries += 1;
        }
        for (a, &lo) in attrs.iter_mut().zip(race.attrmin.iter()) {
            *a = (*a).max(lo);
        }

        let hp = adv_init(&role.hpadv, rng) + adv_init(&race.hpadv, rng);
        let en = adv_init(&role.enadv, rng) + adv_init(&race.enadv, rng);

        let mut you = Self {
            ux: 0,
            uy: 0,
            attrs,
            uhp: hp,
            uhpmax: hp,
            uen: en,
            uenmax: en,
            ulevel: 1,
            uexp: 0,
            urexp: 0,
            uhunger: INIT_HUNGER,
            uhs: HungerState::NotHungry,
            luck: 0,
            prayer_timeout: INIT_PRAYER_TIMEOUT,
            umonnum: role.monster(ch.gender),
            invent: Vec::new(),
        };
        for item in role.starting_items {
            let mut obj = Obj::new(item.kind, item.quantity as u32);
            obj.spe = item.spe;
            obj.worn = obj.class() == ObjectClass::Armor;
            you.add_to_invent(obj);
        }
        you
    }

    pub fn acurr(&self, attr: usize) -> i32 {
        self.attrs[attr] as i32
    }

    /// Armor class: 10 less everything worn
    pub fn ac(&self) -> i32 {
        let worn: i32 = self
            .invent
            .iter()
            .filter(|o| o.worn)
            .map(|o| o.data().ac as i32 + o.spe as i32)
            .sum();
        10 - worn
    }

    pub fn gold(&self) -> i64 {
        self.invent
            .iter()
            .filter(|o| o.class() == ObjectClass::Coin)
            .map(|o| o.quan as i64)
            .sum()
    }

    /// To-hit bonus from strength and level
    pub fn abon(&self) -> i32 {
        let bonus = match self.acurr(A_STR) {
            ..=5 => -2,
            6..=7 => -1,
            8..=16 => 0,
            _ => 1,
        };
        if self.ulevel < 3 { bonus + 1 } else { bonus }
    }

    /// Damage bonus from strength
    pub fn dbon(&self) -> i32 {
        match self.acurr(A_STR) {
            ..=5 => -1,
            6..=15 => 0,
            16..=17 => 1,
            _ => 2,
        }
    }

    pub fn is_fainting(&self) -> bool {
        self.uhs == HungerState::Fainting
    }

    /// Put an object in the inventory, merging stacks and assigning a
    /// letter. Returns the letter it ended up under.
    pub fn add_to_invent(&mut self, mut obj: Obj) -> char {
        if let Some(have) = self.invent.iter_mut().find(|o| o.mergeable(&obj)) {
            have.quan += obj.quan;
            return have.invlet;
        }
        obj.invlet = if obj.class() == ObjectClass::Coin {
            '$'
        } else {
            self.free_invlet()
        };
        let letter = obj.invlet;
        self.invent.push(obj);
        letter
    }

    fn free_invlet(&self) -> char {
        ('a'..='z')
            .chain('A'..='Z')
            .find(|&c| !self.invent.iter().any(|o| o.invlet == c))
            .unwrap_or('#')
    }

    pub fn find_invlet(&self, letter: char) -> Option<usize> {
        self.invent.iter().position(|o| o.invlet == letter)
    }

    /// Take `count` of the item at `idx` out of the inventory.
    pub fn split_off(&mut self, idx: usize, count: u32) -> Obj {
        let obj = &mut self.invent[idx];
        if count >= obj.quan {
            return self.invent.remove(idx);
        }
        obj.quan -= count;
        let mut part = obj.clone();
        part.quan = count;
        part
    }

    /// Letters of inventory items `pred` accepts, compressed into ranges
    /// the way prompts show them ("a-c" or "dfh").
    pub fn letters(&self, pred: impl Fn(&Obj) -> bool) -> String {
        let mut chars: Vec<char> = self
            .invent
            .iter()
            .filter(|o| pred(o))
            .map(|o| o.invlet)
            .collect();
        chars.sort_unstable_by_key(|&c| (c == '$', c.is_ascii_uppercase(), c));
        compress_letters(&chars)
    }
}

fn adv_init(adv: &Advancement, rng: &mut GameRng) -> i32 {
    adv.init_fix as i32 + rng.rnd(adv.init_rnd.max(0) as u32) as i32
}

/// Hit points gained on a new experience level
pub fn level_gain(adv: &Advancement, race: &Advancement, rng: &mut GameRng) -> i32 {
    let gain = adv.lvl_fix as i32
        + rng.rnd(adv.lvl_rnd.max(0) as u32) as i32
        + race.lvl_fix as i32
        + rng.rnd(race.lvl_rnd.max(0) as u32) as i32;
    gain.max(1)
}

/// Experience needed to leave a level
pub fn newuexp(lev: i32) -> i64 {
    match lev {
        ..=9 => 10 * (1i64 << lev.max(0)),
        10..=19 => 10_000 * (1i64 << (lev - 10)),
        _ => 10_000_000 * (lev as i64 - 19),
    }
}

fn compress_letters(chars: &[char]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j + 1 < chars.len() && chars[j + 1] as u32 == chars[j] as u32 + 1 {
            j += 1;
        }
        if j >= i + 2 {
            out.push(chars[i]);
            out.push('-');
            out.push(chars[j]);
        } else {
            out.extend(&chars[i..=j]);
        }
        i = j + 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_data::monsters::PM_MONK;
    use nh_data::objects::*;

    fn monk() -> You {
        let ch = Character::parse("mon-hum-neu-mal").unwrap();
        You::new(&ch, &mut GameRng::new(1))
    }

    #[test]
    fn test_monk_start() {
        let u = monk();
        assert_eq!(u.umonnum, PM_MONK);
        assert_eq!(u.uhpmax, 14);
        assert_eq!(u.ac(), 4);
        assert_eq!(u.attrs.iter().map(|&a| a as i32).sum::<i32>(), 75);
        assert_eq!(u.invent[0].invlet, 'a');
        assert!(u.invent[0].worn && u.invent[1].worn);
        assert_eq!(u.gold(), 0);
        assert_eq!(u.uhs, HungerState::NotHungry);
    }

    #[test]
    fn test_inventory_letters() {
        let mut u = monk();
        let n = u.invent.len();
        let letter = u.add_to_invent(Obj::new(DAGGER, 1));
        assert_eq!(letter, (b'a' + n as u8) as char);
        assert_eq!(u.add_to_invent(Obj::new(APPLE, 2)), 'f');
        assert_eq!(u.add_to_invent(Obj::new(GOLD_PIECE, 7)), '$');
        assert_eq!(u.gold(), 7);
        let food = u.letters(|o| o.class() == ObjectClass::Food);
        assert_eq!(food, "e-h");
    }

    #[test]
    fn test_split_off() {
        let mut u = monk();
        let idx = u.find_invlet('d').unwrap();
        let one = u.split_off(idx, 1);
        assert_eq!(one.quan, 1);
        assert_eq!(u.invent[idx].quan, 2);
        let rest = u.split_off(idx, 5);
        assert_eq!(rest.quan, 2);
        assert!(u.find_invlet('d').is_none());
    }

    #[test]
    fn test_hunger_states() {
        assert_eq!(HungerState::from_nutrition(900), HungerState::NotHungry);
        assert_eq!(HungerState::from_nutrition(150), HungerState::Hungry);
        assert_eq!(HungerState::from_nutrition(50), HungerState::Weak);
        assert_eq!(HungerState::from_nutrition(0), HungerState::Fainting);
        assert_eq!(HungerState::from_nutrition(1200), HungerState::Satiated);
        assert_eq!(HungerState::NotHungry.to_string(), "Not Hungry");
    }

    #[test]
    fn test_newuexp_and_letters() {
        assert_eq!(newuexp(1), 20);
        assert_eq!(newuexp(10), 10_000);
        assert_eq!(compress_letters(&['a', 'b', 'c', 'e', 'g', 'h']), "a-cegh");
    }
}
