//! nh-env: a steppable NetHack environment
//!
//! Wraps an [`Engine`](nh_core::Engine) in a reset/step/close interface for
//! agents. One action id goes in, the engine runs until it needs a real
//! decision, and a typed [`Observation`] comes out.
//!
//! ```no_run
//! use nh_env::{Command, Nethack, NethackConfig};
//!
//! let mut env = Nethack::new(NethackConfig::default())?;
//! env.reset(Some(42))?;
//! let (obs, done) = env.step(Command::Search.into())?;
//! println!("{:?} {done}", obs.message_text());
//! env.close();
//! # Ok::<(), nh_env::NethackError>(())
//! ```

pub mod actions;
pub mod classify;
pub mod config;
pub mod driver;
pub mod error;
pub mod guard;
pub mod observation;
pub mod recorder;
pub mod sync;

pub use actions::{
    ActionEncoder, Command, CompassDirection, CompassDirectionLonger, MiscAction, MiscDirection,
    TextCharacter,
};
pub use classify::{classify, WindowEvent};
pub use config::{NethackConfig, RecorderConfig};
pub use driver::Nethack;
pub use error::{NethackError, RecorderError, Result};
pub use guard::{InstanceGuard, InstanceLease};
pub use observation::{BufferRef, ObsKey, Observation};
pub use recorder::SessionRecorder;
pub use sync::{Advance, AutoDismiss, WindowSync};

pub use nh_core::{HowDone, Seeds};
