//! Commands: what a key does at the command prompt (cmd.c, hack.c, uhitm.c,
//! pickup.c, eat.c, potion.c, do.c, pray.c)

use nh_data::objects::{FOOD_RATION, FORTUNE_COOKIE, POT_HEALING};
use nh_data::roles::*;
use nh_data::symbols::{S_DNSTAIR, S_NDOOR, S_UPSTAIR};
use nh_data::{GenFlags, ObjectClass, COLNO, NHW_MENU, NHW_TEXT};

use crate::game::{dist2, Act, Game};
use crate::obj::{Obj, an};
use crate::player::HungerState;
use crate::window::{Next, Query, Wait};
use crate::VERSION;

/// Inventory listing order by class
const INV_ORDER: [ObjectClass; 13] = [
    ObjectClass::Coin,
    ObjectClass::Amulet,
    ObjectClass::Weapon,
    ObjectClass::Armor,
    ObjectClass::Food,
    ObjectClass::Scroll,
    ObjectClass::Spellbook,
    ObjectClass::Potion,
    ObjectClass::Ring,
    ObjectClass::Wand,
    ObjectClass::Tool,
    ObjectClass::Gem,
    ObjectClass::Rock,
];

const EXTENDED: [(&str, &str); 6] = [
    ("attributes", "show your attributes"),
    ("enhance", "advance or check weapon and spell skills"),
    ("pray", "pray to the gods for help"),
    ("quit", "exit without saving current game"),
    ("sit", "sit down"),
    ("version", "list compile time options for this version of NetHack"),
];

const FORTUNES: [&str; 4] = [
    "They say that a fortune cookie's advice is worth its weight in gold.",
    "They say that you should never trust a lichen.",
    "They say that the stairs down are always in another room.",
    "They say that hunger is a patient enemy.",
];

/// Direction of a movement key; upper case runs
fn xytod(key: u8) -> Option<(i32, i32)> {
    match key.to_ascii_lowercase() {
        b'h' => Some((-1, 0)),
        b'j' => Some((0, 1)),
        b'k' => Some((0, -1)),
        b'l' => Some((1, 0)),
        b'y' => Some((-1, -1)),
        b'u' => Some((1, -1)),
        b'b' => Some((-1, 1)),
        b'n' => Some((1, 1)),
        _ => None,
    }
}

enum Step {
    Moved,
    Attacked,
    Blocked,
}

impl Game {
    /// Run one command key.
    pub(crate) fn rhack(&mut self, key: u8) {
        self.toplines.clear();
        let act = match key {
            b'h' | b'j' | b'k' | b'l' | b'y' | b'u' | b'b' | b'n' => self.domove(key),
            b'H' | b'J' | b'K' | b'L' | b'Y' | b'U' | b'B' | b'N' => self.dorun(key),
            b'.' | b's' => Act::Took(1),
            b'<' => self.doup(),
            b'>' => self.dodown(),
            b'i' => self.ddoinv(),
            b',' => self.dopickup(),
            b':' => self.dolook(),
            b'e' => self.getobj(Query::Eat),
            b'q' => self.getobj(Query::Quaff),
            b'd' => self.getobj(Query::Drop),
            b'#' => {
                self.toplines = "# ".to_string();
                self.wait = Wait::Getline {
                    prompt: "# ".to_string(),
                    buf: String::new(),
                };
                return;
            }
            b'v' => {
                self.pline(format!(
                    "NetHack Learning Environment engine, version {VERSION}."
                ));
                Act::Free
            }
            0x18 => self.doattributes(),
            0x12 | 0x1b => Act::Free,
            k if k >= 0x80 => match k & 0x7f {
                b'p' => Act::Then(Next::Ask(Query::Pray)),
                b'q' => Act::Then(Next::Ask(Query::Quit)),
                b's' => self.dosit(),
                b'e' => self.doenhance(),
                b'v' => self.doversion(),
                _ => self.unknown(k),
            },
            k => self.unknown(k),
        };
        self.finish(act);
    }

    fn unknown(&mut self, key: u8) -> Act {
        let name = match key {
            0..=0x1f => format!("^{}", (key + 0x40) as char),
            0x7f => "^?".to_string(),
            0x80.. => format!("M-{}", (key & 0x7f) as char),
            _ => (key as char).to_string(),
        };
        self.pline(format!("Unknown command '{name}'."));
        Act::Free
    }

    /// Run an extended command typed after `#`.
    pub(crate) fn extended(&mut self, name: &str) -> Act {
        match name.to_ascii_lowercase().as_str() {
            "" => Act::Free,
            "pray" => Act::Then(Next::Ask(Query::Pray)),
            "quit" => Act::Then(Next::Ask(Query::Quit)),
            "sit" => self.dosit(),
            "version" => self.doversion(),
            "enhance" => self.doenhance(),
            "attributes" => self.doattributes(),
            "?" => {
                let mut lines = vec!["Extended Commands List".to_string(), String::new()];
                lines.extend(
                    EXTENDED
                        .iter()
                        .map(|(cmd, help)| format!("    {cmd:<12}{help}")),
                );
                window(NHW_MENU, lines)
            }
            other => {
                self.pline(format!("#{other}: unknown extended command."));
                Act::Free
            }
        }
    }

    // ==================== MOVEMENT ====================

    fn domove(&mut self, key: u8) -> Act {
        let Some((dx, dy)) = xytod(key) else {
            return Act::Free;
        };
        match self.step(dx, dy) {
            Step::Blocked => Act::Free,
            Step::Moved | Step::Attacked => Act::Took(1),
        }
    }

    /// Keep moving until something interesting happens.
    fn dorun(&mut self, key: u8) -> Act {
        let Some((dx, dy)) = xytod(key) else {
            return Act::Free;
        };
        for _ in 0..COLNO {
            match self.step(dx, dy) {
                Step::Blocked => break,
                Step::Attacked => {
                    self.tick();
                    break;
                }
                Step::Moved => {
                    self.tick();
                    if self.gameover || !self.msgq.is_empty() || self.run_should_stop() {
                        break;
                    }
                }
            }
        }
        Act::Free
    }

    fn run_should_stop(&self) -> bool {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let lev = self.lev();
        matches!(lev.typ(ux, uy), S_NDOOR | S_UPSTAIR | S_DNSTAIR)
            || lev.monsters.iter().any(|m| {
                self.sight[m.y as usize][m.x as usize] && dist2(m.x, m.y, ux, uy) <= 8
            })
    }

    fn step(&mut self, dx: i32, dy: i32) -> Step {
        let (nx, ny) = (self.u.ux + dx, self.u.uy + dy);
        if let Some(mi) = self.lev().monster_at(nx, ny) {
            self.attack(mi);
            return Step::Attacked;
        }
        if !self.lev().walkable(nx, ny) {
            return Step::Blocked;
        }
        (self.u.ux, self.u.uy) = (nx, ny);
        self.vision_recalc();
        self.look_here();
        Step::Moved
    }

    /// Mention what lies where the hero just arrived.
    fn look_here(&mut self) {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let names: Vec<String> = self
            .lev()
            .objects_at(ux, uy)
            .map(|fo| fo.obj.doname())
            .collect();
        match names.as_slice() {
            [] => {}
            [one] => self.pline(format!("You see here {one}.")),
            _ => self.pline("There are several objects here."),
        }
    }

    // ==================== FIGHTING ====================

    fn attack(&mut self, mi: usize) {
        let martial = matches!(self.ch.role().filecode, "Mon" | "Sam");
        let mon = &self.lev().monsters[mi];
        let name = mon.name(false);
        let mac = mon.data().ac as i32;
        let tmp = 1
            + self.u.luck as i32
            + self.u.abon()
            + mac
            + self.u.ulevel
            + if martial { 2 } else { 0 };
        self.lev_mut().monsters[mi].awake = true;

        if tmp <= self.rng.rnd(20) as i32 {
            self.pline(format!("You miss {name}."));
            return;
        }
        let mut dmg = self.rng.rnd(4) as i32 + self.u.dbon();
        if martial {
            dmg += self.rng.rn2(self.u.acurr(A_DEX) as u32 / 3 + 1) as i32;
        }
        let mon = &mut self.lev_mut().monsters[mi];
        mon.hp -= dmg.max(1);
        if mon.hp > 0 {
            self.pline(format!("You hit {name}."));
        } else {
            self.xkilled(mi);
        }
    }

    fn xkilled(&mut self, mi: usize) {
        let mon = self.lev_mut().monsters.remove(mi);
        self.pline(format!("You kill {}!", mon.name(false)));
        if !mon.data().geno.contains(GenFlags::NOCORPSE) && self.rng.one_in(2) {
            self.lev_mut().place_object(mon.x, mon.y, Obj::corpse(mon.mndx));
        }
        self.more_experienced(mon.experience());
    }

    // ==================== STAIRS ====================

    fn doup(&mut self) -> Act {
        if self.lev().typ(self.u.ux, self.u.uy) != S_UPSTAIR {
            self.pline("You can't go up here.");
            return Act::Free;
        }
        if self.depth() == 1 {
            return Act::Then(Next::Ask(Query::ClimbOut));
        }
        self.goto_level(self.depth() - 1);
        Act::Took(1)
    }

    fn dodown(&mut self) -> Act {
        if self.lev().typ(self.u.ux, self.u.uy) != S_DNSTAIR {
            self.pline("You can't go down here.");
            return Act::Free;
        }
        self.goto_level(self.depth() + 1);
        self.look_here();
        Act::Took(1)
    }

    // ==================== OBJECTS ====================

    pub(crate) fn inventory_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for class in INV_ORDER {
            let mut items = self.u.invent.iter().filter(|o| o.class() == class).peekable();
            if items.peek().is_none() {
                continue;
            }
            lines.push(class.heading().to_string());
            lines.extend(items.map(|o| format!("{} - {}", o.invlet, o.doname())));
        }
        lines
    }

    fn ddoinv(&mut self) -> Act {
        if self.u.invent.is_empty() {
            self.pline("Not carrying anything.");
            return Act::Free;
        }
        window(NHW_MENU, self.inventory_lines())
    }

    fn dolook(&mut self) -> Act {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let feature = match self.lev().typ(ux, uy) {
            S_DNSTAIR => Some("There is a staircase down here."),
            S_UPSTAIR => Some("There is a staircase up here."),
            S_NDOOR => Some("There is a doorway here."),
            _ => None,
        };
        let names: Vec<String> = self
            .lev()
            .objects_at(ux, uy)
            .map(|fo| fo.obj.doname())
            .collect();
        if names.len() > 1 {
            let mut lines = Vec::new();
            if let Some(f) = feature {
                lines.push(f.to_string());
                lines.push(String::new());
            }
            lines.push("Things that are here:".to_string());
            lines.extend(names);
            return window(NHW_MENU, lines);
        }
        if let Some(f) = feature {
            self.pline(f);
        }
        match names.first() {
            Some(one) => self.pline(format!("You see here {one}.")),
            None => self.pline("You see no objects here."),
        }
        Act::Free
    }

    fn dopickup(&mut self) -> Act {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let lev = self.lev_mut();
        let (here, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut lev.objects)
            .into_iter()
            .partition(|fo| fo.x == ux && fo.y == uy);
        lev.objects = rest;
        if here.is_empty() {
            self.pline("There is nothing here to pick up.");
            return Act::Free;
        }
        for fo in here {
            let letter = self.u.add_to_invent(fo.obj);
            if let Some(idx) = self.u.find_invlet(letter) {
                let line = format!("{letter} - {}.", self.u.invent[idx].doname());
                self.pline(line);
            }
        }
        Act::Took(1)
    }

    pub(crate) fn item_fits(query: Query, obj: &Obj) -> bool {
        match query {
            Query::Eat => obj.class() == ObjectClass::Food,
            Query::Quaff => obj.class() == ObjectClass::Potion,
            _ => true,
        }
    }

    fn getobj(&mut self, query: Query) -> Act {
        if !self.u.invent.iter().any(|o| Self::item_fits(query, o)) {
            self.pline(format!("You don't have anything to {}.", query.verb()));
            return Act::Free;
        }
        Act::Then(Next::Ask(query))
    }

    /// Apply an item prompt's answer.
    pub(crate) fn use_item(&mut self, query: Query, idx: usize) -> Act {
        let fits = Self::item_fits(query, &self.u.invent[idx]);
        match query {
            Query::Eat if fits => self.eat(idx),
            Query::Eat => {
                self.pline("You cannot eat that!");
                Act::Free
            }
            Query::Quaff if fits => self.quaff(idx),
            Query::Quaff => {
                self.pline("That is a silly thing to drink.");
                Act::Free
            }
            Query::Drop => self.drop(idx),
            _ => Act::Free,
        }
    }

    fn eat(&mut self, idx: usize) -> Act {
        let obj = self.u.split_off(idx, 1);
        let name = obj.xname();
        if obj.corpsenm.is_some() {
            self.pline(format!("This {name} tastes terrible!"));
        } else if obj.kind == FORTUNE_COOKIE {
            let fortune = self.disp.choose(&FORTUNES).copied().unwrap_or_default();
            self.pline(format!(
                "This cookie has a scrap of paper inside.  It reads: \"{fortune}\""
            ));
        } else {
            self.pline(format!("This {name} is delicious!"));
        }
        self.u.uhunger += obj.nutrition();
        if self.u.uhunger >= 1500 {
            self.pline("You're having a hard time getting all of it down.");
        }
        self.newuhs();
        Act::Took(if obj.kind == FOOD_RATION { 5 } else { 1 })
    }

    fn quaff(&mut self, idx: usize) -> Act {
        let obj = self.u.split_off(idx, 1);
        if obj.kind == POT_HEALING {
            self.u.uhp += self.rng.dice(6, 4) as i32;
            if self.u.uhp > self.u.uhpmax {
                self.u.uhpmax += 1;
                self.u.uhp = self.u.uhpmax;
            }
            self.pline("You feel better.");
        } else {
            self.pline("This tastes like water.");
        }
        Act::Took(1)
    }

    fn drop(&mut self, idx: usize) -> Act {
        if self.u.invent[idx].worn {
            self.pline("You cannot drop something you are wearing.");
            return Act::Free;
        }
        let quan = self.u.invent[idx].quan;
        let obj = self.u.split_off(idx, quan);
        self.pline(format!("You drop {}.", obj.doname()));
        let (ux, uy) = (self.u.ux, self.u.uy);
        self.lev_mut().place_object(ux, uy, obj);
        Act::Took(1)
    }

    // ==================== OTHER COMMANDS ====================

    pub(crate) fn pray(&mut self) -> Act {
        let god = self.god();
        self.pline(format!("You begin praying to {god}."));
        self.pline("You finish your prayer.");

        let low_hp = self.u.uhp < 6 || self.u.uhp * 7 < self.u.uhpmax;
        let starving = self.u.uhs >= HungerState::Weak;
        let trouble = low_hp || starving;
        let limit = if trouble { 200 } else { 100 };
        if self.u.luck < 0 || self.u.prayer_timeout >= limit {
            self.pline(format!("You feel that {god} is displeased."));
            return Act::Took(3);
        }

        self.pline("You feel a hopeful feeling.");
        if low_hp {
            if self.u.uhpmax < self.u.ulevel * 5 + 11 {
                self.u.uhpmax += self.rng.rnd(5) as i32;
            }
            self.u.uhp = self.u.uhpmax;
            self.pline("You feel much better.");
        }
        if starving {
            self.u.uhunger = 900;
            self.newuhs();
            self.pline("Your stomach feels content.");
        }
        if !trouble {
            self.pline(format!("You feel that {god} is well-pleased."));
        }
        self.u.prayer_timeout = self.rng.rn1(350, 50);
        Act::Took(3)
    }

    fn dosit(&mut self) -> Act {
        match self.lev().typ(self.u.ux, self.u.uy) {
            S_UPSTAIR | S_DNSTAIR => self.pline("You sit on the stairs."),
            _ => self.pline("Having fun sitting on the floor?"),
        }
        Act::Took(1)
    }

    fn doversion(&mut self) -> Act {
        window(
            NHW_TEXT,
            vec![
                format!("NetHack Learning Environment engine, version {VERSION}."),
                String::new(),
                "A steppable NetHack-style game for agents.".to_string(),
            ],
        )
    }

    fn doenhance(&mut self) -> Act {
        let skill = if self.ch.role().filecode == "Mon" {
            "martial arts"
        } else {
            "bare handed combat"
        };
        window(
            NHW_MENU,
            vec![
                "Current skills:".to_string(),
                String::new(),
                " Fighting Skills".to_string(),
                format!("    {skill:<20}[Basic]"),
            ],
        )
    }

    fn doattributes(&mut self) -> Act {
        let u = &self.u;
        let role = self.ch.role().name.get(self.ch.gender);
        let hunger = match u.uhs {
            HungerState::NotHungry => "not hungry".to_string(),
            other => other.to_string().to_lowercase(),
        };
        let lines = vec![
            " Background:".to_string(),
            format!(
                "  You are {}, a level {} {} {} {}.",
                an(self.rank()),
                u.ulevel,
                self.ch.gender,
                self.ch.race().adj,
                role
            ),
            format!("  You are {}, on a mission for {}.", self.ch.align, self.god()),
            format!(
                "  You are in the Dungeons of Doom, on level {}.",
                self.depth()
            ),
            format!("  You entered the dungeon {} turns ago.", self.moves),
            String::new(),
            " Basics:".to_string(),
            format!("  You have {} out of {} hit points.", u.uhp, u.uhpmax),
            format!("  You have {} out of {} energy points.", u.uen, u.uenmax),
            format!("  Your armor class is {}.", u.ac()),
            format!("  Your wallet contains {} zorkmids.", u.gold()),
            String::new(),
            " Characteristics:".to_string(),
            format!("  Your strength is {}.", u.acurr(A_STR)),
            format!("  Your dexterity is {}.", u.acurr(A_DEX)),
            format!("  Your constitution is {}.", u.acurr(A_CON)),
            format!("  Your intelligence is {}.", u.acurr(A_INT)),
            format!("  Your wisdom is {}.", u.acurr(A_WIS)),
            format!("  Your charisma is {}.", u.acurr(A_CHA)),
            String::new(),
            " Status:".to_string(),
            format!("  You are {hunger}."),
        ];
        window(NHW_MENU, lines)
    }
}

fn window(kind: i32, lines: Vec<String>) -> Act {
    Act::Then(Next::Window {
        kind,
        lines,
        then: Box::new(Next::Command),
    })
}
