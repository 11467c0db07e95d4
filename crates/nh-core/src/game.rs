//! The game state and the loop that drives it
//!
//! `Game::feed` takes the current [`Wait`] apart, resumes it with one key and
//! runs until a new wait is installed. Messages produced on the way are
//! queued and flushed onto the top line once the game settles, with
//! `--More--` whenever the next one does not fit.

use std::collections::VecDeque;

use nh_data::roles::A_CON;
use nh_data::{Character, COLNO, NHW_MENU, NHW_TEXT, WIN_ERR};
use tracing::{debug, info};

use crate::level::Level;
use crate::memory::{EngineMemory, Grid, Memory};
use crate::monster::{pick_random, Monster, NORMAL_SPEED};
use crate::obj::an;
use crate::options::GameOptions;
use crate::player::{level_gain, newuexp, HungerState, You};
use crate::rng::{GameRng, Seeds};
use crate::window::{is_dismiss, Next, Query, Wait, WindowStatus};
use crate::{Engine, EngineError, HowDone, Result};

pub(crate) const MORE: &str = "--More--";
/// Longest getline input
const BUFSZ: usize = 80;

#[derive(Debug, Clone)]
pub(crate) struct Msg {
    pub text: String,
    /// Stop for `--More--` right after this message
    pub more: bool,
}

/// What a command did with the hero's time
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Act {
    Free,
    Took(u32),
    /// No time yet; continue with a prompt or window
    Then(Next),
}

#[derive(Debug, Clone)]
pub(crate) struct Game {
    pub opts: GameOptions,
    pub rng: GameRng,
    /// Cosmetic randomness only
    pub disp: GameRng,
    pub ch: Character,
    pub u: You,
    pub levels: Vec<Level>,
    pub cur: usize,
    pub moves: i64,
    pub deepest: i32,
    pub wait: Wait,
    pub toplines: String,
    pub msgq: VecDeque<Msg>,
    /// Set once the first command prompt is reached
    pub in_moveloop: bool,
    /// Map and status lines are on screen
    pub map_drawn: bool,
    pub gameover: bool,
    pub how: Option<HowDone>,
    pub killer: String,
    /// Locations the hero can currently see
    pub sight: Grid<bool>,
}

impl Game {
    pub fn new(opts: &GameOptions, seeds: Seeds) -> Result<Self> {
        let ch = opts.validate()?;
        let mut rng = GameRng::new(seeds.core);
        let disp = GameRng::new(seeds.disp);
        let mut u = You::new(&ch, &mut rng);
        let level = Level::generate(1, &mut rng);
        (u.ux, u.uy) = level.upstair;

        let mut game = Self {
            opts: opts.clone(),
            rng,
            disp,
            ch,
            u,
            levels: vec![level],
            cur: 0,
            moves: 1,
            deepest: 1,
            wait: Wait::Command,
            toplines: String::new(),
            msgq: VecDeque::new(),
            in_moveloop: false,
            map_drawn: false,
            gameover: false,
            how: None,
            killer: String::new(),
            sight: [[false; COLNO]; nh_data::ROWNO],
        };
        game.vision_recalc();
        game.populate_level();

        if opts.legacy {
            game.wait = Wait::Window {
                kind: NHW_TEXT,
                lines: game.legacy_text(),
                next: Next::EnterMoveloop,
            };
        } else {
            game.enter_moveloop();
        }
        Ok(game)
    }

    pub fn lev(&self) -> &Level {
        &self.levels[self.cur]
    }

    pub fn lev_mut(&mut self) -> &mut Level {
        &mut self.levels[self.cur]
    }

    pub fn depth(&self) -> i32 {
        self.lev().depth
    }

    pub fn god(&self) -> &'static str {
        self.ch.role().god(self.ch.align).trim_start_matches('_')
    }

    pub fn rank(&self) -> &'static str {
        self.ch.role().rank_title(self.u.ulevel, self.ch.gender)
    }

    pub fn score(&self) -> i64 {
        let deep = self.deepest as i64;
        let mut score = 50 * (deep - 1) + self.u.gold() + self.u.urexp;
        if deep > 20 {
            score += 1000 * (deep - 20);
        }
        score
    }

    pub fn window_status(&self) -> WindowStatus {
        let (window_type, xwaitforspace, in_yn_function, in_getlin) = self.wait.flags();
        WindowStatus {
            window_type,
            xwaitforspace,
            in_yn_function,
            in_getlin,
            gameover: self.gameover,
            in_moveloop: self.in_moveloop,
            terminated: matches!(self.wait, Wait::Terminated),
        }
    }

    // ==================== INPUT ====================

    pub fn feed(&mut self, key: u8) -> Result<()> {
        let wait = std::mem::replace(&mut self.wait, Wait::Command);
        match wait {
            Wait::Terminated => {
                self.wait = Wait::Terminated;
                return Err(EngineError::GameOver);
            }
            Wait::Command => self.rhack(key),
            Wait::More(next) => {
                if is_dismiss(key) {
                    self.toplines.clear();
                    self.settle(next);
                } else {
                    self.wait = Wait::More(next);
                }
            }
            Wait::Window { kind, lines, next } => {
                if is_dismiss(key) {
                    self.proceed(next);
                } else {
                    self.wait = Wait::Window { kind, lines, next };
                }
            }
            Wait::YesNo(query) => self.answer(query, key),
            Wait::Getline { prompt, buf } => self.getline_key(prompt, buf, key),
        }
        Ok(())
    }

    fn answer(&mut self, query: Query, key: u8) {
        if query.wants_item() {
            self.answer_item(query, key);
            return;
        }
        let (_, choices, default) = query.yn_prompt();
        let ans = match key {
            0x1b if choices.contains('q') => b'q',
            0x1b => b'n',
            b'\r' | b'\n' | b' ' => default,
            k if choices.as_bytes().contains(&k) => k,
            _ => {
                self.wait = Wait::YesNo(query);
                return;
            }
        };
        self.toplines.clear();
        let yes = ans == b'y';
        let act = match query {
            Query::Possessions => {
                if yes {
                    self.wait = Wait::Window {
                        kind: NHW_MENU,
                        lines: self.inventory_lines(),
                        next: Next::Tombstone,
                    };
                } else {
                    self.proceed(Next::Tombstone);
                }
                return;
            }
            Query::Pray if yes => self.pray(),
            Query::Quit if yes => {
                self.done(HowDone::Quit, "quit");
                Act::Free
            }
            Query::ClimbOut if yes => {
                self.done(HowDone::Escaped, "escaped");
                Act::Free
            }
            _ => Act::Free,
        };
        self.finish(act);
    }

    fn answer_item(&mut self, query: Query, key: u8) {
        match key {
            b'?' | b'*' => self.wait = Wait::YesNo(query),
            0x1b | b'\r' | b'\n' | b' ' => {
                self.toplines.clear();
                self.pline("Never mind.");
                self.settle(Next::Command);
            }
            k => {
                self.toplines.clear();
                match self.u.find_invlet(k as char) {
                    Some(idx) => {
                        let act = self.use_item(query, idx);
                        self.finish(act);
                    }
                    None => {
                        self.pline("You don't have that object.");
                        self.settle(Next::Ask(query));
                    }
                }
            }
        }
    }

    fn getline_key(&mut self, prompt: String, mut buf: String, key: u8) {
        match key {
            0x1b => {
                self.toplines.clear();
                self.settle(Next::Command);
            }
            b'\r' | b'\n' => {
                self.toplines.clear();
                let act = self.extended(buf.trim());
                self.finish(act);
            }
            8 | 127 => {
                buf.pop();
                self.toplines = format!("{prompt}{buf}");
                self.wait = Wait::Getline { prompt, buf };
            }
            0x20..=0x7e if buf.len() < BUFSZ => {
                buf.push(key as char);
                self.toplines = format!("{prompt}{buf}");
                self.wait = Wait::Getline { prompt, buf };
            }
            _ => self.wait = Wait::Getline { prompt, buf },
        }
    }

    /// Show a prompt and wait for its answer.
    pub fn ask(&mut self, query: Query) {
        self.toplines = if query.wants_item() {
            let letters = self.u.letters(|o| Self::item_fits(query, o));
            format!("What do you want to {}? [{} or ?*]", query.verb(), letters)
        } else {
            query.yn_prompt().0.to_string()
        };
        self.wait = Wait::YesNo(query);
    }

    // ==================== MESSAGES ====================

    pub fn pline(&mut self, text: impl Into<String>) {
        self.msgq.push_back(Msg {
            text: text.into(),
            more: false,
        });
    }

    /// A message that always stops for `--More--`
    pub fn pline_more(&mut self, text: impl Into<String>) {
        self.msgq.push_back(Msg {
            text: text.into(),
            more: true,
        });
    }

    /// Finish a command: spend its time, then show what it produced.
    pub fn finish(&mut self, act: Act) {
        match act {
            Act::Free => self.settle(Next::Command),
            Act::Took(turns) => {
                for _ in 0..turns {
                    if self.gameover {
                        break;
                    }
                    self.tick();
                }
                self.settle(Next::Command);
            }
            Act::Then(next) => self.settle(next),
        }
    }

    /// Move queued messages onto the top line, stopping at `--More--` when
    /// one does not fit. Once the queue is empty, continue with `next`.
    pub fn settle(&mut self, next: Next) {
        while let Some(msg) = self.msgq.pop_front() {
            if self.toplines.is_empty() {
                self.toplines = msg.text;
            } else if self.toplines.len() + 2 + msg.text.len() + MORE.len() < COLNO {
                self.toplines.push_str("  ");
                self.toplines.push_str(&msg.text);
            } else {
                self.msgq.push_front(msg);
                self.wait = Wait::More(next);
                return;
            }
            if msg.more {
                self.wait = Wait::More(next);
                return;
            }
        }
        self.proceed(next);
    }

    fn proceed(&mut self, next: Next) {
        match next {
            Next::Command if self.gameover => self.proceed(Next::Ask(Query::Possessions)),
            Next::Command => self.wait = Wait::Command,
            Next::EnterMoveloop => self.enter_moveloop(),
            Next::Moveloop => {
                self.in_moveloop = true;
                self.proceed(Next::Command);
            }
            Next::Ask(query) => {
                if self.toplines.is_empty() {
                    self.ask(query);
                } else {
                    self.wait = Wait::More(Next::Ask(query));
                }
            }
            Next::Window { kind, lines, then } => {
                self.wait = Wait::Window {
                    kind,
                    lines,
                    next: *then,
                };
            }
            Next::Tombstone => {
                self.wait = Wait::Window {
                    kind: NHW_TEXT,
                    lines: self.tombstone(),
                    next: Next::Terminate,
                };
            }
            Next::Terminate => {
                info!(
                    how = ?self.how,
                    moves = self.moves,
                    score = self.score(),
                    "game finished"
                );
                self.wait = Wait::Terminated;
            }
        }
    }

    // ==================== GAME FLOW ====================

    /// Draw the map and greet the hero. The move loop starts once the
    /// greeting has been read.
    fn enter_moveloop(&mut self) {
        self.map_drawn = true;
        self.vision_recalc();
        let greeting = format!(
            "Hello {}, welcome to NetHack!  You are a {}.",
            self.opts.playername,
            self.ch.describe()
        );
        self.pline(greeting);
        match self.disp.rn2(8) {
            0 => {
                self.u.luck += 1;
                self.pline("You are lucky!  Full moon tonight.");
            }
            4 => self.pline("Be careful!  New moon tonight."),
            _ => {}
        }
        self.settle(Next::Moveloop);
    }

    fn legacy_text(&self) -> Vec<String> {
        let god = self.god();
        vec![
            String::new(),
            format!("It is written in the Book of {god}:"),
            String::new(),
            "    After the Creation, the cruel god Moloch rebelled".to_string(),
            "    against the authority of Marduk the Creator.".to_string(),
            "    Moloch stole from Marduk the most powerful of all".to_string(),
            "    the artifacts of the gods, the Amulet of Yendor.".to_string(),
            String::new(),
            format!(
                "    You, a newly trained {}, have been heralded",
                self.rank()
            ),
            format!("    from birth as the instrument of {god}. Go bravely!"),
        ]
    }

    fn tombstone(&self) -> Vec<String> {
        let verb = match self.how {
            Some(HowDone::Died) | None => "died",
            Some(HowDone::Starved) => "starved",
            Some(HowDone::Quit) => "quit",
            Some(HowDone::Escaped) => "escaped",
        };
        let mut lines = vec![
            String::new(),
            format!("Goodbye {} the {}...", self.opts.playername, self.rank()),
            String::new(),
        ];
        if self.how == Some(HowDone::Died) {
            lines.push(format!("Killed by {}.", self.killer));
        }
        lines.push(format!(
            "You {verb} on dungeon level {} with {} points,",
            self.depth(),
            self.score()
        ));
        lines.push(format!(
            "and {} pieces of gold, after {} moves.",
            self.u.gold(),
            self.moves
        ));
        lines.push(format!(
            "You were level {} with a maximum of {} hit points when you {verb}.",
            self.u.ulevel, self.u.uhpmax
        ));
        lines
    }

    /// End the game. The death screens follow once pending messages are shown.
    pub fn done(&mut self, how: HowDone, killer: impl Into<String>) {
        if self.gameover {
            return;
        }
        self.gameover = true;
        self.how = Some(how);
        self.killer = killer.into();
        debug!(?how, killer = %self.killer, moves = self.moves, "hero done");
        if matches!(how, HowDone::Died | HowDone::Starved) {
            self.pline_more("You die...");
        }
    }

    /// One game turn after the hero acted
    pub fn tick(&mut self) {
        self.moves += 1;
        self.vision_recalc();
        self.monsters_move();
        if self.gameover {
            return;
        }
        self.gethungry();
        if self.gameover {
            return;
        }
        self.regenerate();
        self.maybe_spawn();
        if self.u.prayer_timeout > 0 {
            self.u.prayer_timeout -= 1;
        }
        self.vision_recalc();
    }

    fn gethungry(&mut self) {
        if !self.opts.hunger {
            return;
        }
        self.u.uhunger -= 1;
        self.newuhs();
        let limit = -(200 + 20 * self.u.acurr(A_CON));
        if self.u.uhs == HungerState::Fainting && self.u.uhunger < limit {
            self.pline("You die from starvation.");
            self.done(HowDone::Starved, "starvation");
        }
    }

    /// Report a change of hunger status.
    pub fn newuhs(&mut self) {
        let new = HungerState::from_nutrition(self.u.uhunger);
        let old = self.u.uhs;
        if new == old {
            return;
        }
        self.u.uhs = new;
        let msg = match (new, new > old) {
            (HungerState::Hungry, true) => "You are beginning to feel hungry.",
            (HungerState::Weak, true) => "You are beginning to feel weak.",
            (HungerState::Fainting, true) => "You faint from lack of food.",
            (HungerState::Hungry, false) => "You only feel hungry now.",
            (HungerState::Weak, false) => "You feel weak now.",
            _ => return,
        };
        self.pline(msg);
    }

    fn regenerate(&mut self) {
        let interval = (42 / (self.u.ulevel + 2) + 1) as i64;
        if self.u.uhp < self.u.uhpmax && self.moves % interval == 0 {
            self.u.uhp += 1;
        }
        if self.u.uen < self.u.uenmax && self.moves % 19 == 0 {
            self.u.uen += 1;
        }
    }

    fn maybe_spawn(&mut self) {
        let rate = self.opts.spawn.rate;
        if rate > 0 && self.rng.one_in(rate) {
            self.makemon_random(25, true);
        }
    }

    /// Initial population of a new level
    pub fn populate_level(&mut self) {
        let spawn = self.opts.spawn;
        let n = self.rng.between(
            spawn.initial_min as i32,
            spawn.initial_max.max(spawn.initial_min) as i32,
        );
        for _ in 0..n {
            self.makemon_random(25, false);
        }
    }

    /// Place a random monster at least `sqrt(min_dist2)` away from the hero,
    /// optionally only where the hero cannot see it.
    fn makemon_random(&mut self, min_dist2: i32, out_of_sight: bool) {
        let Some(mndx) = pick_random(&mut self.rng, self.levels[self.cur].depth, self.u.ulevel)
        else {
            return;
        };
        let (ux, uy) = (self.u.ux, self.u.uy);
        let sight = &self.sight;
        let spot = self.levels[self.cur].random_spot(&mut self.rng, |x, y| {
            dist2(x, y, ux, uy) < min_dist2 || (out_of_sight && sight[y as usize][x as usize])
        });
        if let Some((x, y)) = spot {
            let mon = Monster::new(mndx, x, y, &mut self.rng);
            debug!(monster = mon.data().mname, x, y, "monster created");
            self.levels[self.cur].monsters.push(mon);
        }
    }

    // ==================== MONSTERS ====================

    fn monsters_move(&mut self) {
        for i in 0..self.lev().monsters.len() {
            let speed = self.lev().monsters[i].data().mmove as i32;
            self.lev_mut().monsters[i].movement += speed;
            while self.lev().monsters[i].movement >= NORMAL_SPEED {
                self.lev_mut().monsters[i].movement -= NORMAL_SPEED;
                self.m_act(i);
                if self.gameover {
                    return;
                }
            }
        }
    }

    fn m_act(&mut self, i: usize) {
        let (ux, uy) = (self.u.ux, self.u.uy);
        let mon = &self.lev().monsters[i];
        let (mx, my, mut awake) = (mon.x, mon.y, mon.awake);
        let speed = mon.data().mmove;

        if (mx - ux).abs() <= 1 && (my - uy).abs() <= 1 {
            self.lev_mut().monsters[i].awake = true;
            self.mattacku(i);
            return;
        }
        if speed == 0 {
            return;
        }
        if !awake {
            let seen = self.sight[my as usize][mx as usize];
            awake = dist2(mx, my, ux, uy) <= 8 || (seen && !self.rng.one_in(3));
            self.lev_mut().monsters[i].awake = awake;
        }
        if !awake && !self.rng.one_in(3) {
            return;
        }

        let here = if awake { dist2(mx, my, ux, uy) } else { 0 };
        let mut best = Vec::new();
        let mut best_d = i32::MAX;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let (nx, ny) = (mx + dx, my + dy);
                if (dx, dy) == (0, 0)
                    || (nx, ny) == (ux, uy)
                    || !self.lev().walkable(nx, ny)
                    || self.lev().monster_at(nx, ny).is_some()
                {
                    continue;
                }
                let d = if awake { dist2(nx, ny, ux, uy) } else { 0 };
                if d < best_d {
                    best_d = d;
                    best.clear();
                }
                if d == best_d {
                    best.push((nx, ny));
                }
            }
        }
        if awake && best_d > here {
            return;
        }
        if let Some(&(nx, ny)) = self.rng.choose(&best) {
            let mon = &mut self.lev_mut().monsters[i];
            mon.x = nx;
            mon.y = ny;
        }
    }

    fn mattacku(&mut self, i: usize) {
        let mon = self.lev().monsters[i].clone();
        let pm = mon.data();
        let ac = self.u.ac();
        let ac_value = if ac >= 0 {
            ac
        } else {
            -(self.rng.rnd(ac.unsigned_abs()) as i32)
        };
        let tmp = ac_value + 10 + pm.mlevel as i32;
        let name = mon.name(true);
        if tmp > self.rng.rnd(20) as i32 {
            self.pline(format!("{name} {}!", mon.hit_verb()));
            let (n, d) = pm.attack;
            if n > 0 {
                let dmg = self.rng.dice(n as u32, d as u32) as i32;
                self.losehp(dmg, an(pm.mname));
            }
        } else {
            self.pline(format!("{name} misses!"));
        }
    }

    pub fn losehp(&mut self, dmg: i32, killer: String) {
        self.u.uhp -= dmg;
        if self.u.uhp <= 0 {
            self.u.uhp = 0;
            self.done(HowDone::Died, killer);
        }
    }

    // ==================== EXPERIENCE ====================

    pub fn more_experienced(&mut self, exp: i64) {
        self.u.uexp += exp;
        self.u.urexp += 4 * exp;
        while self.u.ulevel < 30 && self.u.uexp >= newuexp(self.u.ulevel) {
            self.pluslvl();
        }
    }

    fn pluslvl(&mut self) {
        let role = self.ch.role();
        let race = self.ch.race();
        let hp = level_gain(&role.hpadv, &race.hpadv, &mut self.rng);
        let en = level_gain(&role.enadv, &race.enadv, &mut self.rng);
        self.u.uhpmax += hp;
        self.u.uhp += hp;
        self.u.uenmax += en;
        self.u.uen += en;
        self.u.ulevel += 1;
        self.pline(format!("Welcome to experience level {}.", self.u.ulevel));
    }

    // ==================== LEVELS ====================

    /// Move the hero to another dungeon level, making it on first visit.
    pub fn goto_level(&mut self, depth: i32) {
        let going_down = depth > self.depth();
        let idx = (depth - 1) as usize;
        let fresh = idx >= self.levels.len();
        if fresh {
            let level = Level::generate(depth, &mut self.rng);
            self.levels.push(level);
            self.cur = self.levels.len() - 1;
        } else {
            self.cur = idx;
        }
        let (x, y) = if going_down {
            self.lev().upstair
        } else {
            self.lev().dnstair
        };
        (self.u.ux, self.u.uy) = (x, y);
        if let Some(mi) = self.lev().monster_at(x, y) {
            let spot = self.levels[self.cur].random_spot(&mut self.rng, |sx, sy| (sx, sy) == (x, y));
            match spot {
                Some((sx, sy)) => {
                    let mon = &mut self.lev_mut().monsters[mi];
                    mon.x = sx;
                    mon.y = sy;
                }
                None => {
                    self.lev_mut().monsters.remove(mi);
                }
            }
        }
        self.deepest = self.deepest.max(depth);
        self.vision_recalc();
        if fresh {
            self.populate_level();
        }
        debug!(depth, deepest = self.deepest, "changed level");
    }
}

pub(crate) fn dist2(x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
    (x0 - x1).pow(2) + (y0 - y1).pow(2)
}

/// The built-in engine
#[derive(Debug, Default)]
pub struct NetHackEngine {
    game: Option<Game>,
    mem: Memory,
    dirty: bool,
}

impl NetHackEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for NetHackEngine {
    fn new_game(&mut self, options: &GameOptions, seeds: Seeds) -> Result<()> {
        let game = Game::new(options, seeds)?;
        info!(
            core = seeds.core,
            disp = seeds.disp,
            character = %options.character,
            "new game"
        );
        self.mem = Memory::new();
        game.refresh(&mut self.mem);
        self.game = Some(game);
        self.dirty = true;
        Ok(())
    }

    fn feed(&mut self, key: u8) -> Result<()> {
        let game = self.game.as_mut().ok_or(EngineError::NotStarted)?;
        game.feed(key)?;
        game.refresh(&mut self.mem);
        self.dirty = true;
        Ok(())
    }

    fn window_status(&self) -> WindowStatus {
        match &self.game {
            Some(game) => game.window_status(),
            None => WindowStatus {
                window_type: WIN_ERR,
                terminated: true,
                ..WindowStatus::default()
            },
        }
    }

    fn memory(&self) -> EngineMemory<'_> {
        self.mem.view()
    }

    fn drain_output(&mut self) -> Vec<u8> {
        if !self.dirty {
            return Vec::new();
        }
        self.dirty = false;
        self.game.as_ref().map(Game::render).unwrap_or_default()
    }

    fn how_done(&self) -> Option<HowDone> {
        self.game.as_ref().and_then(|g| g.how)
    }
}
