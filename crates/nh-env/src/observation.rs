//! Observation buffers
//!
//! An [`Observation`] owns one array per requested key, allocated when the
//! driver is built and overwritten in place after every step. Copies happen
//! only while the engine is stopped waiting for input.

use std::collections::HashSet;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1, ArrayViewD};
use nh_core::EngineMemory;
use nh_data::{COLNO, MSG_BUFSZ, NLE_BLSTATS_SIZE, NLE_INTERNAL_SIZE, NLE_PROGRAM_STATE_SIZE, ROWNO};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{NethackError, Result};

/// Map columns in an observation; column 0 of the map is never shown
pub const MAP_COLS: usize = COLNO - 1;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ObsKey {
    Glyphs,
    Chars,
    Colors,
    Blstats,
    Message,
    ProgramState,
    Internal,
}

impl ObsKey {
    pub fn shape(&self) -> &'static [usize] {
        match self {
            ObsKey::Glyphs | ObsKey::Chars | ObsKey::Colors => &[ROWNO, MAP_COLS],
            ObsKey::Blstats => &[NLE_BLSTATS_SIZE],
            ObsKey::Message => &[MSG_BUFSZ],
            ObsKey::ProgramState => &[NLE_PROGRAM_STATE_SIZE],
            ObsKey::Internal => &[NLE_INTERNAL_SIZE],
        }
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            ObsKey::Glyphs => "i16",
            ObsKey::Chars | ObsKey::Colors | ObsKey::Message => "u8",
            ObsKey::Blstats => "i64",
            ObsKey::ProgramState | ObsKey::Internal => "i32",
        }
    }

    /// Every key, in catalog order
    pub fn all() -> Vec<ObsKey> {
        ObsKey::iter().collect()
    }
}

/// Borrowed view of one buffer
#[derive(Debug, Clone)]
pub enum BufferRef<'a> {
    I16(ArrayViewD<'a, i16>),
    U8(ArrayViewD<'a, u8>),
    I32(ArrayViewD<'a, i32>),
    I64(ArrayViewD<'a, i64>),
}

impl BufferRef<'_> {
    pub fn shape(&self) -> &[usize] {
        match self {
            BufferRef::I16(a) => a.shape(),
            BufferRef::U8(a) => a.shape(),
            BufferRef::I32(a) => a.shape(),
            BufferRef::I64(a) => a.shape(),
        }
    }
}

/// The observation record: one optional field per key
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    keys: Vec<ObsKey>,
    pub glyphs: Option<Array2<i16>>,
    pub chars: Option<Array2<u8>>,
    pub colors: Option<Array2<u8>>,
    pub blstats: Option<Array1<i64>>,
    /// NUL-padded top line
    pub message: Option<Array1<u8>>,
    pub program_state: Option<Array1<i32>>,
    pub internal: Option<Array1<i32>>,
}

impl Observation {
    /// Allocate buffers for `keys`, keeping their order. Unknown and
    /// repeated keys are rejected here, never at extraction time.
    pub fn new<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(keys.len());
        let mut seen = HashSet::new();
        for key in keys {
            let name = key.as_ref();
            let k = ObsKey::from_str(name)
                .map_err(|_| NethackError::UnknownObservationKey(name.to_string()))?;
            if !seen.insert(k) {
                return Err(NethackError::InvalidConfig(format!(
                    "observation key {name:?} requested twice"
                )));
            }
            parsed.push(k);
        }
        if parsed.is_empty() {
            return Err(NethackError::InvalidConfig(
                "no observation keys requested".to_string(),
            ));
        }
        Ok(Self::with_keys(parsed))
    }

    fn with_keys(keys: Vec<ObsKey>) -> Self {
        let has = |k: ObsKey| keys.contains(&k);
        let grid = || (ROWNO, MAP_COLS);
        Self {
            glyphs: has(ObsKey::Glyphs).then(|| Array2::zeros(grid())),
            chars: has(ObsKey::Chars).then(|| Array2::zeros(grid())),
            colors: has(ObsKey::Colors).then(|| Array2::zeros(grid())),
            blstats: has(ObsKey::Blstats).then(|| Array1::zeros(NLE_BLSTATS_SIZE)),
            message: has(ObsKey::Message).then(|| Array1::zeros(MSG_BUFSZ)),
            program_state: has(ObsKey::ProgramState)
                .then(|| Array1::zeros(NLE_PROGRAM_STATE_SIZE)),
            internal: has(ObsKey::Internal).then(|| Array1::zeros(NLE_INTERNAL_SIZE)),
            keys,
        }
    }

    /// Requested keys in the order they were given
    pub fn keys(&self) -> &[ObsKey] {
        &self.keys
    }

    pub fn get(&self, key: ObsKey) -> Option<BufferRef<'_>> {
        match key {
            ObsKey::Glyphs => self.glyphs.as_ref().map(|a| BufferRef::I16(a.view().into_dyn())),
            ObsKey::Chars => self.chars.as_ref().map(|a| BufferRef::U8(a.view().into_dyn())),
            ObsKey::Colors => self.colors.as_ref().map(|a| BufferRef::U8(a.view().into_dyn())),
            ObsKey::Blstats => self.blstats.as_ref().map(|a| BufferRef::I64(a.view().into_dyn())),
            ObsKey::Message => self.message.as_ref().map(|a| BufferRef::U8(a.view().into_dyn())),
            ObsKey::ProgramState => self
                .program_state
                .as_ref()
                .map(|a| BufferRef::I32(a.view().into_dyn())),
            ObsKey::Internal => self.internal.as_ref().map(|a| BufferRef::I32(a.view().into_dyn())),
        }
    }

    /// Buffers in key order
    pub fn buffers(&self) -> impl Iterator<Item = (ObsKey, BufferRef<'_>)> {
        self.keys.iter().filter_map(|&k| self.get(k).map(|b| (k, b)))
    }

    /// Copy the engine's memory into the buffers.
    pub fn extract(&mut self, mem: &EngineMemory<'_>) {
        if let Some(a) = self.glyphs.as_mut() {
            for ((r, c), v) in a.indexed_iter_mut() {
                *v = mem.glyphs[r][c + 1];
            }
        }
        if let Some(a) = self.chars.as_mut() {
            for ((r, c), v) in a.indexed_iter_mut() {
                *v = mem.chars[r][c + 1];
            }
        }
        if let Some(a) = self.colors.as_mut() {
            for ((r, c), v) in a.indexed_iter_mut() {
                *v = mem.colors[r][c + 1];
            }
        }
        if let Some(a) = self.blstats.as_mut() {
            a.assign(&ArrayView1::from(&mem.blstats[..]));
        }
        if let Some(a) = self.message.as_mut() {
            a.assign(&ArrayView1::from(&mem.message[..]));
        }
        if let Some(a) = self.program_state.as_mut() {
            a.assign(&ArrayView1::from(&mem.program_state[..]));
        }
        if let Some(a) = self.internal.as_mut() {
            a.assign(&ArrayView1::from(&mem.internal[..]));
        }
    }

    /// Top line as text, without the padding
    pub fn message_text(&self) -> Option<String> {
        let msg = self.message.as_ref()?;
        let bytes: Vec<u8> = msg.iter().copied().take_while(|&b| b != 0).collect();
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_core::{Engine, GameOptions, NetHackEngine, Seeds};

    #[test]
    fn test_keys_keep_order() {
        let obs = Observation::new(&["chars", "blstats"]).unwrap();
        assert_eq!(obs.keys(), &[ObsKey::Chars, ObsKey::Blstats]);
        assert!(obs.glyphs.is_none());
        assert_eq!(obs.chars.as_ref().unwrap().dim(), (21, 79));
        assert_eq!(obs.blstats.as_ref().unwrap().len(), 25);
        let shapes: Vec<Vec<usize>> = obs.buffers().map(|(_, b)| b.shape().to_vec()).collect();
        assert_eq!(shapes, vec![vec![21, 79], vec![25]]);
    }

    #[test]
    fn test_bad_keys() {
        assert!(matches!(
            Observation::new(&["chars", "tty_chars"]),
            Err(NethackError::UnknownObservationKey(k)) if k == "tty_chars"
        ));
        assert!(matches!(
            Observation::new(&["chars", "chars"]),
            Err(NethackError::InvalidConfig(_))
        ));
        let none: [&str; 0] = [];
        assert!(Observation::new(&none).is_err());
    }

    #[test]
    fn test_catalog_shapes() {
        for key in ObsKey::all() {
            let obs = Observation::new(&[key.as_ref()]).unwrap();
            let buf = obs.get(key).unwrap();
            assert_eq!(buf.shape(), key.shape(), "{key}");
        }
        assert_eq!(ObsKey::ProgramState.to_string(), "program_state");
        assert_eq!(ObsKey::Glyphs.dtype(), "i16");
    }

    #[test]
    fn test_extract_drops_column_zero() {
        let mut engine = NetHackEngine::new();
        let opts = GameOptions {
            legacy: false,
            ..GameOptions::default()
        };
        engine.new_game(&opts, Seeds::new(9, 9)).unwrap();
        let mut obs = Observation::new(&ObsKey::all().iter().map(ObsKey::as_ref).collect::<Vec<_>>()).unwrap();
        obs.extract(&engine.memory());
        assert!(obs.message_text().unwrap().starts_with("Hello Agent"));
        while engine.window_status().xwaitforspace {
            engine.feed(b'\r').unwrap();
        }
        obs.extract(&engine.memory());

        let blstats = obs.blstats.as_ref().unwrap();
        let (x, y) = (blstats[0] as usize, blstats[1] as usize);
        let chars = obs.chars.as_ref().unwrap();
        assert_eq!(chars[[y, x]], b'@');
        assert_eq!(chars.iter().filter(|&&c| c == b'@').count(), 1);
        assert_eq!(obs.program_state.as_ref().unwrap()[3], 1);
        assert_eq!(obs.internal.as_ref().unwrap()[0], 1);
    }
}
