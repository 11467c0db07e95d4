//! Levels: terrain, rooms, stairs and what lies on the floor (mklev.c)
//!
//! The map is split into a 3x3 grid of cells separated by stone rows and
//! columns. Each cell holds at most one room. Rooms in the same band of cells
//! are chained left to right, and consecutive non-empty bands are linked
//! once, with every corridor turning only inside the separating stone. That
//! keeps corridors out of rooms and makes every level connected.

use nh_data::objects::{GOLD_PIECE, RANDOM_FLOOR_OBJECTS};
use nh_data::symbols::*;
use nh_data::{cmap_to_glyph, COLNO, ROWNO};

use crate::memory::Grid;
use crate::monster::Monster;
use crate::obj::Obj;
use crate::rng::GameRng;

/// Cell bounds (walls included) along x, one entry per grid column
const CELL_X: [(i32, i32); 3] = [(1, 25), (28, 51), (54, 78)];
/// Cell bounds along y, one entry per band
const CELL_Y: [(i32, i32); 3] = [(0, 5), (8, 12), (15, 20)];

/// A rectangular room; the bounds are the floor, walls lie one step outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub lx: i32,
    pub ly: i32,
    pub hx: i32,
    pub hy: i32,
    pub lit: bool,
    /// (band, column) of the grid cell holding the room
    pub cell: (usize, usize),
}

impl Room {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.lx && x <= self.hx && y >= self.ly && y <= self.hy
    }

    /// Inside the room or on its walls
    pub fn encloses(&self, x: i32, y: i32) -> bool {
        x >= self.lx - 1 && x <= self.hx + 1 && y >= self.ly - 1 && y <= self.hy + 1
    }

    fn random_spot(&self, rng: &mut GameRng) -> (i32, i32) {
        (rng.between(self.lx, self.hx), rng.between(self.ly, self.hy))
    }
}

/// An object stack lying on the floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorObj {
    pub x: i32,
    pub y: i32,
    pub obj: Obj,
}

#[derive(Debug, Clone)]
pub struct Level {
    pub depth: i32,
    typ: Grid<u8>,
    /// What the hero last saw at each location
    pub remembered: Grid<i32>,
    pub rooms: Vec<Room>,
    pub upstair: (i32, i32),
    pub dnstair: (i32, i32),
    pub objects: Vec<FloorObj>,
    pub monsters: Vec<Monster>,
}

impl Level {
    fn empty(depth: i32) -> Self {
        Self {
            depth,
            typ: [[S_STONE as u8; COLNO]; ROWNO],
            remembered: [[cmap_to_glyph(S_STONE); COLNO]; ROWNO],
            rooms: Vec::new(),
            upstair: (0, 0),
            dnstair: (0, 0),
            objects: Vec::new(),
            monsters: Vec::new(),
        }
    }

    /// Make a new level: rooms, corridors, stairs and floor objects.
    pub fn generate(depth: i32, rng: &mut GameRng) -> Self {
        let mut lev = Self::empty(depth);

        let mut order: Vec<(usize, usize)> =
            (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        rng.shuffle(&mut order);
        let mut used = [[false; 3]; 3];
        for &(r, c) in &order {
            if rng.rn2(4) != 0 {
                lev.add_room(r, c, rng);
                used[r][c] = true;
            }
        }
        for &(r, c) in &order {
            if lev.rooms.len() >= 2 {
                break;
            }
            if !used[r][c] {
                lev.add_room(r, c, rng);
                used[r][c] = true;
            }
        }
        lev.rooms.sort_by_key(|room| room.cell);
        lev.join_rooms(rng);

        let up = rng.rn2(lev.rooms.len() as u32) as usize;
        let mut dn = rng.rn2(lev.rooms.len() as u32 - 1) as usize;
        if dn >= up {
            dn += 1;
        }
        lev.upstair = lev.rooms[up].random_spot(rng);
        lev.dnstair = lev.rooms[dn].random_spot(rng);
        lev.set_typ(lev.upstair.0, lev.upstair.1, S_UPSTAIR);
        lev.set_typ(lev.dnstair.0, lev.dnstair.1, S_DNSTAIR);

        for i in 0..lev.rooms.len() {
            if !rng.one_in(3) {
                continue;
            }
            let Some(&kind) = rng.choose(&RANDOM_FLOOR_OBJECTS) else {
                continue;
            };
            let quan = if kind == GOLD_PIECE {
                rng.rnd(10 + 30 * depth.max(1) as u32)
            } else {
                1
            };
            let (x, y) = lev.rooms[i].random_spot(rng);
            lev.place_object(x, y, Obj::new(kind, quan));
        }
        lev
    }

    fn add_room(&mut self, band: usize, col: usize, rng: &mut GameRng) {
        let (x0, x1) = CELL_X[col];
        let (y0, y1) = CELL_Y[band];
        let w = rng.between(5, (x1 - x0 + 1).min(14));
        let h = rng.between(4, (y1 - y0 + 1).min(6));
        let wx = rng.between(x0, x1 - w + 1);
        let wy = rng.between(y0, y1 - h + 1);
        let lit = rng.rnd(1 + self.depth.unsigned_abs()) < 11 && rng.rn2(77) != 0;
        let room = Room {
            lx: wx + 1,
            ly: wy + 1,
            hx: wx + w - 2,
            hy: wy + h - 2,
            lit,
            cell: (band, col),
        };
        for y in room.ly - 1..=room.hy + 1 {
            for x in room.lx - 1..=room.hx + 1 {
                let top = y == room.ly - 1;
                let bottom = y == room.hy + 1;
                let left = x == room.lx - 1;
                let right = x == room.hx + 1;
                let t = match (top, bottom, left, right) {
                    (true, _, true, _) => S_TLCORN,
                    (true, _, _, true) => S_TRCORN,
                    (_, true, true, _) => S_BLCORN,
                    (_, true, _, true) => S_BRCORN,
                    (true, ..) | (_, true, ..) => S_HWALL,
                    (_, _, true, _) | (.., true) => S_VWALL,
                    _ => S_ROOM,
                };
                self.set_typ(x, y, t);
            }
        }
        self.rooms.push(room);
    }

    fn join_rooms(&mut self, rng: &mut GameRng) {
        let mut bands: Vec<Vec<Room>> = vec![Vec::new(); 3];
        for room in &self.rooms {
            bands[room.cell.0].push(*room);
        }
        for band in &bands {
            for pair in band.windows(2) {
                self.join_across(pair[0], pair[1], rng);
            }
        }
        let filled: Vec<&Vec<Room>> = bands.iter().filter(|b| !b.is_empty()).collect();
        for pair in filled.windows(2) {
            let Some(&a) = rng.choose(pair[0]) else { continue };
            let Some(&b) = rng.choose(pair[1]) else { continue };
            self.join_down(a, b, rng);
        }
    }

    /// Corridor from the right wall of `a` to the left wall of `b`, same band
    fn join_across(&mut self, a: Room, b: Room, rng: &mut GameRng) {
        let ya = rng.between(a.ly, a.hy);
        let yb = rng.between(b.ly, b.hy);
        let bx = CELL_X[b.cell.1].0 - 1;
        self.set_typ(a.hx + 1, ya, S_NDOOR);
        self.set_typ(b.lx - 1, yb, S_NDOOR);
        for x in a.hx + 2..=bx {
            self.dig(x, ya);
        }
        for y in ya.min(yb)..=ya.max(yb) {
            self.dig(bx, y);
        }
        for x in bx..=b.lx - 2 {
            self.dig(x, yb);
        }
    }

    /// Corridor from the bottom wall of `a` to the top wall of `b`, a lower band
    fn join_down(&mut self, a: Room, b: Room, rng: &mut GameRng) {
        let xa = rng.between(a.lx, a.hx);
        let xb = rng.between(b.lx, b.hx);
        let by = CELL_Y[b.cell.0].0 - 1;
        self.set_typ(xa, a.hy + 1, S_NDOOR);
        self.set_typ(xb, b.ly - 1, S_NDOOR);
        for y in a.hy + 2..=by {
            self.dig(xa, y);
        }
        for x in xa.min(xb)..=xa.max(xb) {
            self.dig(x, by);
        }
        for y in by..=b.ly - 2 {
            self.dig(xb, y);
        }
    }

    fn dig(&mut self, x: i32, y: i32) {
        if self.typ(x, y) == S_STONE {
            self.set_typ(x, y, S_CORR);
        }
    }

    fn set_typ(&mut self, x: i32, y: i32, t: usize) {
        if is_ok(x, y) {
            self.typ[y as usize][x as usize] = t as u8;
        }
    }

    /// Terrain at a location; off-map counts as stone
    pub fn typ(&self, x: i32, y: i32) -> usize {
        if is_ok(x, y) {
            self.typ[y as usize][x as usize] as usize
        } else {
            S_STONE
        }
    }

    pub fn walkable(&self, x: i32, y: i32) -> bool {
        matches!(
            self.typ(x, y),
            S_ROOM | S_DARKROOM | S_CORR | S_NDOOR | S_UPSTAIR | S_DNSTAIR
        )
    }

    pub fn room_at(&self, x: i32, y: i32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.encloses(x, y))
    }

    pub fn monster_at(&self, x: i32, y: i32) -> Option<usize> {
        self.monsters.iter().position(|m| m.x == x && m.y == y)
    }

    pub fn objects_at(&self, x: i32, y: i32) -> impl Iterator<Item = &FloorObj> {
        self.objects.iter().filter(move |o| o.x == x && o.y == y)
    }

    /// Glyph of the location ignoring monsters: top object, else terrain
    pub fn back_glyph(&self, x: i32, y: i32) -> i32 {
        match self.objects_at(x, y).last() {
            Some(fo) => fo.obj.glyph(),
            None => cmap_to_glyph(self.typ(x, y)),
        }
    }

    /// Drop an object, merging it into a matching stack already there.
    pub fn place_object(&mut self, x: i32, y: i32, obj: Obj) {
        if let Some(fo) = self
            .objects
            .iter_mut()
            .find(|fo| fo.x == x && fo.y == y && fo.obj.mergeable(&obj))
        {
            fo.obj.quan += obj.quan;
            return;
        }
        self.objects.push(FloorObj { x, y, obj });
    }

    /// Random free floor spot in some room, skipping spots `avoid` rejects.
    pub fn random_spot(
        &self,
        rng: &mut GameRng,
        avoid: impl Fn(i32, i32) -> bool,
    ) -> Option<(i32, i32)> {
        for _ in 0..50 {
            let room = rng.choose(&self.rooms)?;
            let (x, y) = room.random_spot(rng);
            if self.monster_at(x, y).is_none() && !avoid(x, y) {
                return Some((x, y));
            }
        }
        None
    }
}

/// Inside the map; column 0 is never used
pub fn is_ok(x: i32, y: i32) -> bool {
    x >= 1 && x < COLNO as i32 && y >= 0 && y < ROWNO as i32
}
