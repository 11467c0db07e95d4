//! Window synchronization
//!
//! The engine stops for input in many places an agent does not care about.
//! [`WindowSync`] feeds the bytes of one action, lets the engine run to its
//! next stop after each byte and classifies that stop. It returns once the
//! engine reaches the command prompt, finishes the game, or stops at a
//! prompt that neither the action nor the auto-dismiss policy answers.

use std::collections::VecDeque;

use bitflags::bitflags;
use nh_core::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::classify::{classify, WindowEvent};
use crate::error::Result;
use crate::recorder::{Channel, SessionRecorder};

bitflags! {
    /// Prompts the driver answers by itself when the caller's action has
    /// been used up.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AutoDismiss: u8 {
        const MORE = 0x01;
        const MENU = 0x02;
        const LINE = 0x04;
        /// Every prompt once the game is over (the death screens)
        const DEATH_SCREENS = 0x08;
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        AutoDismiss::DEATH_SCREENS
    }
}

impl AutoDismiss {
    /// Whether the policy answers `event` by itself.
    pub fn covers(&self, event: WindowEvent, gameover: bool) -> bool {
        if !event.is_prompt() {
            return false;
        }
        if gameover && self.contains(AutoDismiss::DEATH_SCREENS) {
            return true;
        }
        match event {
            WindowEvent::AwaitingMore => self.contains(AutoDismiss::MORE),
            WindowEvent::AwaitingMenuInput => self.contains(AutoDismiss::MENU),
            WindowEvent::AwaitingLineInput => self.contains(AutoDismiss::LINE),
            _ => false,
        }
    }

    /// Default answer to a prompt: Return for `--More--` and menus, Escape
    /// for questions.
    pub fn dismiss_key(event: WindowEvent) -> u8 {
        match event {
            WindowEvent::AwaitingLineInput => 0x1b,
            _ => b'\r',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Running,
}

/// Where one advance ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub event: WindowEvent,
    pub done: bool,
    /// Bytes fed, the caller's and the policy's
    pub fed: usize,
    pub auto_dismissed: usize,
}

#[derive(Debug, Default)]
pub struct WindowSync {
    state: SyncState,
    policy: AutoDismiss,
}

impl WindowSync {
    pub fn new(policy: AutoDismiss) -> Self {
        Self {
            state: SyncState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn policy(&self) -> AutoDismiss {
        self.policy
    }

    /// Feed `input` and run the engine to its next stop.
    ///
    /// Every byte of `input` goes to whatever the engine is waiting for, so
    /// a multi-byte action can open a prompt and answer it. Once the input
    /// has been used, the command prompt and the end of the game stop the
    /// advance; other prompts stop it unless the policy covers them. Input
    /// left over when the game ends, or when the command prompt comes back
    /// early, is dropped.
    pub fn advance<E: Engine>(
        &mut self,
        engine: &mut E,
        input: &[u8],
        mut recorder: Option<&mut SessionRecorder>,
    ) -> Result<Advance> {
        self.state = SyncState::Running;
        let mut pending: VecDeque<u8> = input.iter().copied().collect();
        let mut fed = 0;
        let mut auto_dismissed = 0;

        let result = loop {
            let status = engine.window_status();
            let event = classify(&status);
            trace!(%event, pending = pending.len(), "engine stopped");

            let key = match event {
                WindowEvent::GameOver => {
                    if !pending.is_empty() {
                        debug!(dropped = pending.len(), "game over with input left");
                    }
                    break Advance {
                        event,
                        done: true,
                        fed,
                        auto_dismissed,
                    };
                }
                WindowEvent::AwaitingCommand if fed > 0 && !pending.is_empty() => {
                    debug!(dropped = pending.len(), "command prompt reached with input left");
                    break Advance {
                        event,
                        done: false,
                        fed,
                        auto_dismissed,
                    };
                }
                _ if !pending.is_empty() => pending.pop_front(),
                WindowEvent::AwaitingCommand => None,
                _ if self.policy.covers(event, status.gameover) => {
                    debug!(%event, gameover = status.gameover, "auto-dismissing prompt");
                    auto_dismissed += 1;
                    Some(AutoDismiss::dismiss_key(event))
                }
                _ => None,
            };
            let Some(key) = key else {
                break Advance {
                    event,
                    done: false,
                    fed,
                    auto_dismissed,
                };
            };

            if let Err(e) = feed(engine, key, recorder.as_deref_mut()) {
                self.state = SyncState::Idle;
                return Err(e);
            }
            fed += 1;
        };

        self.state = SyncState::Idle;
        Ok(result)
    }
}

fn feed<E: Engine>(engine: &mut E, key: u8, recorder: Option<&mut SessionRecorder>) -> Result<()> {
    engine.feed(key)?;
    if let Some(rec) = recorder {
        let output = engine.drain_output();
        let logged = rec
            .record(Channel::Input, &[key])
            .and_then(|()| rec.record(Channel::Output, &output));
        if let Err(e) = logged {
            warn!(error = %e, "session log write failed");
        }
    }
    Ok(())
}
