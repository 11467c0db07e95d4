//! The game loop driver
//!
//! [`Nethack`] owns one engine and turns it into a step function: `reset`
//! starts an episode, `step` feeds one action and runs the engine to the next
//! decision, and `close` gives up the process-wide instance.

use std::path::{Path, PathBuf};

use nh_core::{Engine, GameOptions, HowDone, NetHackEngine, Seeds};
use tracing::{debug, info, warn};

use crate::actions::ActionEncoder;
use crate::classify::WindowEvent;
use crate::config::NethackConfig;
use crate::error::{NethackError, Result};
use crate::guard::{InstanceGuard, InstanceLease};
use crate::observation::Observation;
use crate::recorder::{run_dir_name, Channel, SessionRecorder};
use crate::sync::WindowSync;

/// Display seed paired with a core seed when only the core seed is given
pub fn derive_disp_seed(core: u64) -> u64 {
    // splitmix64 finalizer
    let mut z = core.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[derive(Debug)]
pub struct Nethack<E: Engine = NetHackEngine> {
    config: NethackConfig,
    options: GameOptions,
    engine: E,
    lease: Option<InstanceLease>,
    sync: WindowSync,
    encoder: ActionEncoder,
    observation: Observation,
    recorder: Option<SessionRecorder>,
    run_dir: PathBuf,
    /// Seeds set by `set_initial_seeds`, used by `reset(None)`
    initial_seeds: Option<Seeds>,
    /// Seeds of the current episode
    seeds: Option<Seeds>,
    event: Option<WindowEvent>,
    done: bool,
    steps: u64,
}

impl Nethack<NetHackEngine> {
    /// Driver over the built-in engine
    pub fn new(config: NethackConfig) -> Result<Self> {
        Self::with_engine(config, NetHackEngine::new())
    }
}

impl<E: Engine> Nethack<E> {
    /// Driver over any engine. Nothing is started and the instance is not
    /// taken until the first `reset`.
    pub fn with_engine(config: NethackConfig, engine: E) -> Result<Self> {
        config.validate()?;
        let observation = Observation::new(&config.observation_keys)?;
        let run_dir = config.recorder.root.join(run_dir_name());
        Ok(Self {
            options: config.game_options(),
            sync: WindowSync::new(config.auto_dismiss),
            initial_seeds: config.seeds,
            engine,
            lease: None,
            encoder: ActionEncoder::new(),
            observation,
            recorder: None,
            run_dir,
            seeds: None,
            event: None,
            done: false,
            steps: 0,
            config,
        })
    }

    /// Start a new episode and return its first observation.
    ///
    /// With `Some(seed)` the core seed is `seed` and the display seed is
    /// derived from it. With `None` the seeds set by
    /// [`set_initial_seeds`](Self::set_initial_seeds) or the config are
    /// reused, or fresh ones drawn if there are none.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<&Observation> {
        let fresh_lease = !self.is_active();
        if fresh_lease {
            self.lease = Some(InstanceGuard::acquire()?);
        }
        if let Err(e) = self.start_episode(seed) {
            if fresh_lease && let Some(mut lease) = self.lease.take() {
                lease.release();
            }
            return Err(e);
        }
        Ok(&self.observation)
    }

    fn start_episode(&mut self, seed: Option<u64>) -> Result<()> {
        self.finish_recorder();

        let seeds = match seed {
            Some(core) => Seeds::new(core, derive_disp_seed(core)),
            None => self.initial_seeds.unwrap_or_else(Seeds::from_entropy),
        };
        self.engine.new_game(&self.options, seeds)?;
        self.seeds = Some(seeds);
        self.done = false;
        self.steps = 0;

        self.recorder = self.open_recorder();
        let initial = self.engine.drain_output();
        if let Some(rec) = self.recorder.as_mut()
            && let Err(e) = rec.record(Channel::Output, &initial)
        {
            warn!(error = %e, "session log write failed");
        }

        let adv = self
            .sync
            .advance(&mut self.engine, &[], self.recorder.as_mut())?;
        self.event = Some(adv.event);
        self.done = adv.done;
        self.observation.extract(&self.engine.memory());
        info!(
            core = seeds.core,
            disp = seeds.disp,
            event = %adv.event,
            "episode started"
        );
        Ok(())
    }

    fn open_recorder(&self) -> Option<SessionRecorder> {
        if !self.config.recorder.enabled {
            return None;
        }
        match SessionRecorder::create(&self.run_dir, self.config.recorder.compress) {
            Ok(rec) => Some(rec),
            Err(e) => {
                warn!(error = %e, "session log disabled for this episode");
                None
            }
        }
    }

    fn finish_recorder(&mut self) {
        if let Some(mut rec) = self.recorder.take()
            && let Err(e) = rec.finish()
        {
            warn!(error = %e, "failed to close session log");
        }
    }

    /// Feed one action and run the engine to its next stop.
    ///
    /// Returns the refreshed observation and whether the episode is over.
    pub fn step(&mut self, action: u32) -> Result<(&Observation, bool)> {
        if !self.is_active() {
            return Err(NethackError::InactiveSession);
        }
        if self.done {
            return Err(NethackError::EpisodeFinished);
        }
        let input = self.encoder.encode(action)?;
        let adv = self
            .sync
            .advance(&mut self.engine, input, self.recorder.as_mut())?;
        self.event = Some(adv.event);
        self.done = adv.done;
        self.steps += 1;
        self.observation.extract(&self.engine.memory());

        if adv.done {
            info!(
                steps = self.steps,
                how = ?self.engine.how_done(),
                "episode finished"
            );
        }
        Ok((&self.observation, adv.done))
    }

    /// End the session: close the log and release the instance. Safe to
    /// call any number of times, with or without a reset.
    pub fn close(&mut self) {
        self.finish_recorder();
        if let Some(mut lease) = self.lease.take() {
            lease.release();
            debug!(steps = self.steps, "session closed");
        }
        self.event = None;
    }

    pub fn set_initial_seeds(&mut self, core: u64, disp: u64) {
        self.initial_seeds = Some(Seeds::new(core, disp));
    }

    /// Seeds of the current episode, or the ones the next `reset(None)`
    /// will use
    pub fn seeds(&self) -> Option<Seeds> {
        self.seeds.or(self.initial_seeds)
    }

    pub fn how_done(&self) -> Option<HowDone> {
        self.engine.how_done()
    }

    /// In the move loop of a game that is still going
    pub fn in_normal_game(&self) -> bool {
        if !self.is_active() || self.done {
            return false;
        }
        let status = self.engine.window_status();
        status.in_moveloop && !status.gameover
    }

    pub fn is_active(&self) -> bool {
        self.lease.as_ref().is_some_and(InstanceLease::is_held)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Where the engine stopped after the last reset or step
    pub fn last_event(&self) -> Option<WindowEvent> {
        self.event
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    pub fn encoder(&self) -> &ActionEncoder {
        &self.encoder
    }

    pub fn config(&self) -> &NethackConfig {
        &self.config
    }

    /// Directory this driver writes its session logs to
    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    pub fn session_log(&self) -> Option<&Path> {
        self.recorder.as_ref().map(SessionRecorder::path)
    }
}

impl<E: Engine> Drop for Nethack<E> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_disp_seed() {
        assert_eq!(derive_disp_seed(7), derive_disp_seed(7));
        assert_ne!(derive_disp_seed(7), derive_disp_seed(8));
        assert_ne!(derive_disp_seed(0), 0);
    }

    #[test]
    fn test_bad_config_is_rejected_up_front() {
        let config = NethackConfig::default().with_observation_keys(&["glyphs", "nope"]);
        assert!(matches!(
            Nethack::new(config),
            Err(NethackError::UnknownObservationKey(k)) if k == "nope"
        ));
    }
}
