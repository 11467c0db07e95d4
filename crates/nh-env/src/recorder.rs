//! Session log
//!
//! Every byte fed to the engine and every byte it paints goes into an
//! append-only ttyrec-style file, one file per session inside a per-run
//! directory. Each frame is a 13-byte little-endian header followed by the
//! payload:
//!
//! | bytes | field                                   |
//! |-------|-----------------------------------------|
//! | 0..4  | seconds since the epoch                 |
//! | 4..8  | microseconds                            |
//! | 8..12 | payload length                          |
//! | 12    | channel: 0 engine output, 1 agent input |

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{debug, warn};

use crate::error::RecorderError;

pub const FRAME_HEADER_LEN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Output = 0,
    Input = 1,
}

/// One decoded frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub sec: u32,
    pub usec: u32,
    pub channel: u8,
    pub data: Vec<u8>,
}

/// Read every frame of an uncompressed log.
pub fn read_frames(mut reader: impl Read) -> io::Result<Vec<Frame>> {
    let mut frames = Vec::new();
    let mut header = [0u8; FRAME_HEADER_LEN];
    loop {
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(frames),
            Err(e) => return Err(e),
        }
        let word = |i: usize| u32::from_le_bytes([header[i], header[i + 1], header[i + 2], header[i + 3]]);
        let mut data = vec![0u8; word(8) as usize];
        reader.read_exact(&mut data)?;
        frames.push(Frame {
            sec: word(0),
            usec: word(4),
            channel: header[12],
            data,
        });
    }
}

/// Directory name for one run of the driver: `nle-<timestamp>-<pid>`
pub fn run_dir_name() -> String {
    format!(
        "nle-{}-{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        std::process::id()
    )
}

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Plain(w) => w,
            Sink::Gzip(w) => w,
        }
    }

    fn finish(self) -> io::Result<()> {
        match self {
            Sink::Plain(mut w) => w.flush(),
            Sink::Gzip(w) => w.finish()?.flush(),
        }
    }
}

pub struct SessionRecorder {
    sink: Option<Sink>,
    path: PathBuf,
    frames: u64,
}

impl std::fmt::Debug for SessionRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRecorder")
            .field("path", &self.path)
            .field("frames", &self.frames)
            .field("open", &self.sink.is_some())
            .finish()
    }
}

impl SessionRecorder {
    /// Start a new log in `run_dir`, named after the session start time.
    pub fn create(run_dir: &Path, compress: bool) -> Result<Self, RecorderError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| RecorderError::Io { path, source }
        };
        fs::create_dir_all(run_dir).map_err(io_err(run_dir))?;

        let name = format!(
            "session-{}.ttyrec{}",
            Utc::now().format("%Y%m%dT%H%M%S%.6f"),
            if compress { ".gz" } else { "" }
        );
        let path = run_dir.join(name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(io_err(&path))?;
        let writer = BufWriter::new(file);
        let sink = if compress {
            Sink::Gzip(GzEncoder::new(writer, Compression::default()))
        } else {
            Sink::Plain(writer)
        };
        debug!(path = %path.display(), compress, "session log opened");
        Ok(Self {
            sink: Some(sink),
            path,
            frames: 0,
        })
    }

    /// Append one frame. Empty payloads are skipped.
    pub fn record(&mut self, channel: Channel, data: &[u8]) -> Result<(), RecorderError> {
        if data.is_empty() {
            return Ok(());
        }
        let sink = self.sink.as_mut().ok_or(RecorderError::Closed)?;
        let now = Utc::now();
        let mut header = [0u8; FRAME_HEADER_LEN];
        header[0..4].copy_from_slice(&(now.timestamp() as u32).to_le_bytes());
        header[4..8].copy_from_slice(&now.timestamp_subsec_micros().to_le_bytes());
        header[8..12].copy_from_slice(&(data.len() as u32).to_le_bytes());
        header[12] = channel as u8;

        let w = sink.writer();
        w.write_all(&header)
            .and_then(|()| w.write_all(data))
            .map_err(|source| RecorderError::Io {
                path: self.path.clone(),
                source,
            })?;
        self.frames += 1;
        Ok(())
    }

    /// Flush and close the log. Later calls do nothing.
    pub fn finish(&mut self) -> Result<(), RecorderError> {
        let Some(sink) = self.sink.take() else {
            return Ok(());
        };
        sink.finish().map_err(|source| RecorderError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), frames = self.frames, "session log closed");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }
}

impl Drop for SessionRecorder {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            warn!(error = %e, "failed to close session log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    #[test]
    fn test_frames_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = SessionRecorder::create(dir.path(), false).unwrap();
        rec.record(Channel::Output, b"\x1b[H\x1b[2JHello").unwrap();
        rec.record(Channel::Input, b"k").unwrap();
        rec.record(Channel::Input, b"").unwrap();
        assert_eq!(rec.frames(), 2);
        rec.finish().unwrap();

        let frames = read_frames(File::open(rec.path()).unwrap()).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].channel, 0);
        assert_eq!(frames[0].data, b"\x1b[H\x1b[2JHello");
        assert_eq!(frames[1].channel, 1);
        assert_eq!(frames[1].data, b"k");
        assert!(frames[1].usec < 1_000_000);
    }

    #[test]
    fn test_gzip_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = SessionRecorder::create(dir.path(), true).unwrap();
        assert!(rec.path().to_string_lossy().ends_with(".ttyrec.gz"));
        rec.record(Channel::Input, b"#pray\r").unwrap();
        rec.finish().unwrap();

        let frames = read_frames(GzDecoder::new(File::open(rec.path()).unwrap())).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, b"#pray\r");
    }

    #[test]
    fn test_closed_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = SessionRecorder::create(dir.path(), false).unwrap();
        rec.finish().unwrap();
        rec.finish().unwrap();
        assert!(!rec.is_open());
        assert!(matches!(
            rec.record(Channel::Output, b"x"),
            Err(RecorderError::Closed)
        ));
    }

    #[test]
    fn test_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        File::create(&blocker).unwrap();
        let err = SessionRecorder::create(&blocker.join("sub"), false).unwrap_err();
        assert!(matches!(err, RecorderError::Io { .. }));
    }

    #[test]
    fn test_run_dir_name() {
        let name = run_dir_name();
        assert!(name.starts_with("nle-"));
        assert!(name.ends_with(&format!("-{}", std::process::id())));
    }
}
