//! Driver tests against the built-in engine.
//!
//! Every test here takes the process-wide instance, so they run serially.

use std::fs::File;
use std::time::Instant;

use nh_data::{glyph_is_monster, glyph_to_mon, permonst, ClassSym};
use nh_env::recorder::read_frames;
use nh_env::{
    AutoDismiss, Command, CompassDirection, HowDone, InstanceGuard, MiscAction, MiscDirection,
    Nethack, NethackConfig, NethackError, ObsKey, Observation, WindowEvent,
};
use serial_test::serial;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn config() -> NethackConfig {
    init_tracing();
    NethackConfig::default().without_recorder()
}

/// Step MORE until the game reaches the move loop.
fn to_moveloop(env: &mut Nethack) {
    for _ in 0..10 {
        if env.observation().program_state.as_ref().unwrap()[3] == 1 {
            return;
        }
        env.step(MiscAction::More.into()).unwrap();
    }
    panic!("never reached the move loop");
}

fn hero(obs: &Observation) -> (usize, usize) {
    let blstats = obs.blstats.as_ref().unwrap();
    (blstats[0] as usize, blstats[1] as usize)
}

#[test]
#[serial]
fn test_close_and_restart() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(1)).unwrap();
    env.close();
    assert!(!InstanceGuard::is_held());

    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(2)).unwrap();
    env.close();
}

#[test]
#[serial]
fn test_second_instance_conflicts() {
    let mut first = Nethack::new(config()).unwrap();
    first.reset(None).unwrap();

    let mut second = Nethack::new(config()).unwrap();
    assert!(matches!(second.reset(None), Err(NethackError::Conflict)));
    // The failed reset must leave the first session alone
    assert!(first.is_active());
    assert!(!second.is_active());
    first.step(MiscAction::More.into()).unwrap();

    first.close();
    second.reset(None).unwrap();
    assert!(second.is_active());
}

#[test]
#[serial]
fn test_reset_again_keeps_the_instance() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(5)).unwrap();
    to_moveloop(&mut env);
    env.step(Command::Search.into()).unwrap();
    env.reset(Some(6)).unwrap();
    assert!(env.is_active());
    assert_eq!(env.steps(), 0);
    assert_eq!(env.observation().program_state.as_ref().unwrap()[3], 0);
}

#[test]
#[serial]
fn test_close_is_idempotent() {
    let mut env = Nethack::new(config()).unwrap();
    env.close();
    env.close();
    env.reset(None).unwrap();
    env.close();
    env.close();
    assert!(!InstanceGuard::is_held());
}

#[test]
#[serial]
fn test_step_needs_a_session() {
    let mut env = Nethack::new(config()).unwrap();
    assert!(matches!(
        env.step(MiscAction::More.into()),
        Err(NethackError::InactiveSession)
    ));
    env.reset(None).unwrap();
    env.close();
    assert!(matches!(
        env.step(MiscAction::More.into()),
        Err(NethackError::InactiveSession)
    ));
}

#[test]
#[serial]
fn test_invalid_action() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(3)).unwrap();
    assert!(matches!(env.step(10), Err(NethackError::InvalidAction(10))));
    assert!(matches!(env.step(4096), Err(NethackError::InvalidAction(4096))));
    assert_eq!(env.steps(), 0);
    env.step(MiscAction::More.into()).unwrap();
}

#[test]
#[serial]
fn test_initial_observation() {
    let mut env = Nethack::new(config()).unwrap();
    let obs = env.reset(Some(7)).unwrap();

    assert_eq!(obs.chars.as_ref().unwrap().dim(), (21, 79));
    assert_eq!(obs.glyphs.as_ref().unwrap().dim(), (21, 79));
    assert_eq!(obs.blstats.as_ref().unwrap().len(), 25);
    assert_eq!(obs.message.as_ref().unwrap().len(), 256);
    // The legacy text is still up
    assert_eq!(obs.program_state.as_ref().unwrap()[3], 0);
    assert_eq!(env.last_event(), Some(WindowEvent::AwaitingMore));
    assert!(!env.in_normal_game());

    to_moveloop(&mut env);
    assert!(env.in_normal_game());
    let obs = env.observation();
    assert!(
        obs.message_text()
            .unwrap()
            .contains("Hello Agent, welcome to NetHack!")
    );
    assert_eq!(obs.internal.as_ref().unwrap()[0], 1);
}

#[test]
#[serial]
fn test_moveloop_flag_marks_first_decision() {
    let mut env = Nethack::new(config()).unwrap();
    for seed in 0..64 {
        env.reset(Some(seed)).unwrap();
        to_moveloop(&mut env);
        assert_eq!(
            env.last_event(),
            Some(WindowEvent::AwaitingCommand),
            "seed {seed}: {:?}",
            env.observation().message_text()
        );
        assert_eq!(env.observation().internal.as_ref().unwrap()[3], 0);
        assert!(env.in_normal_game());
    }
}

#[test]
#[serial]
fn test_hero_is_the_monk() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(11)).unwrap();
    to_moveloop(&mut env);
    let obs = env.observation();

    let (x, y) = hero(obs);
    let chars = obs.chars.as_ref().unwrap();
    assert_eq!(chars.iter().filter(|&&c| c == b'@').count(), 1);
    assert_eq!(chars[[y, x]], b'@');
    assert_eq!(obs.colors.as_ref().unwrap()[[y, x]], 15);

    let glyph = obs.glyphs.as_ref().unwrap()[[y, x]] as i32;
    assert!(glyph_is_monster(glyph));
    let mon = permonst(glyph_to_mon(glyph)).unwrap();
    assert_eq!(mon.mname, "monk");
    assert_eq!(mon.mlevel, 10);
    let class = ClassSym::from_mlet(mon.mlet).unwrap();
    assert_eq!(class.sym, '@');
    assert_eq!(class.explain, "human or elf");
}

#[test]
#[serial]
fn test_inventory_waits_for_space() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(13)).unwrap();
    to_moveloop(&mut env);
    let (obs, done) = env.step(Command::Inventory.into()).unwrap();
    assert!(!done);
    assert_eq!(obs.internal.as_ref().unwrap()[3], 1);
    assert_eq!(env.last_event(), Some(WindowEvent::AwaitingMenuInput));
    let (obs, _) = env.step(MiscAction::More.into()).unwrap();
    assert_eq!(obs.internal.as_ref().unwrap()[3], 0);
}

#[test]
#[serial]
fn test_quit_ends_the_episode() {
    let mut env = Nethack::new(config()).unwrap();
    env.reset(Some(17)).unwrap();
    to_moveloop(&mut env);

    let (_, done) = env.step(Command::Quit.into()).unwrap();
    assert!(!done);
    assert_eq!(env.last_event(), Some(WindowEvent::AwaitingLineInput));
    assert!(
        env.observation()
            .message_text()
            .unwrap()
            .starts_with("Really quit?")
    );

    // 'y' doubles as the north-west move
    let (_, done) = env.step(CompassDirection::NW.into()).unwrap();
    assert!(done);
    assert!(env.is_done());
    assert_eq!(env.how_done(), Some(HowDone::Quit));
    assert!(!env.in_normal_game());
    assert!(matches!(
        env.step(MiscAction::More.into()),
        Err(NethackError::EpisodeFinished)
    ));

    env.reset(None).unwrap();
    assert!(!env.is_done());
    assert_eq!(env.how_done(), None);
}

#[test]
#[serial]
fn test_seeds() {
    let mut env = Nethack::new(config()).unwrap();
    assert_eq!(env.seeds(), None);
    env.set_initial_seeds(21, 22);
    env.reset(None).unwrap();
    let seeds = env.seeds().unwrap();
    assert_eq!((seeds.core, seeds.disp), (21, 22));
    to_moveloop(&mut env);
    let first = env.observation().clone();

    env.reset(None).unwrap();
    to_moveloop(&mut env);
    assert_eq!(env.observation().glyphs, first.glyphs);

    env.reset(Some(99)).unwrap();
    assert_eq!(env.seeds().unwrap().core, 99);
}

#[test]
#[serial]
fn test_observation_subset() {
    let config = config().with_observation_keys(&["blstats", "chars"]);
    let mut env = Nethack::new(config).unwrap();
    let obs = env.reset(Some(4)).unwrap();
    assert_eq!(obs.keys(), &[ObsKey::Blstats, ObsKey::Chars]);
    assert!(obs.glyphs.is_none());
    assert!(obs.get(ObsKey::Message).is_none());
    assert_eq!(obs.get(ObsKey::Chars).unwrap().shape(), &[21, 79]);
}

#[test]
#[serial]
fn test_auto_dismiss_more() {
    let config = config().with_auto_dismiss(AutoDismiss::MORE | AutoDismiss::DEATH_SCREENS);
    let mut env = Nethack::new(config).unwrap();
    let obs = env.reset(Some(8)).unwrap();
    assert_eq!(obs.program_state.as_ref().unwrap()[3], 1);
    assert_eq!(env.last_event(), Some(WindowEvent::AwaitingCommand));
}

#[test]
#[serial]
fn test_session_log() {
    let root = tempfile::tempdir().unwrap();
    let config = NethackConfig::default().with_recorder(root.path(), false);
    let mut env = Nethack::new(config).unwrap();
    env.reset(Some(31)).unwrap();
    let path = env.session_log().unwrap().to_path_buf();
    assert!(path.starts_with(env.run_dir()));
    assert!(
        env.run_dir()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("nle-")
    );
    to_moveloop(&mut env);
    env.step(CompassDirection::N.into()).unwrap();
    env.step(MiscDirection::Wait.into()).unwrap();
    env.close();

    let frames = read_frames(File::open(&path).unwrap()).unwrap();
    assert_eq!(frames[0].channel, 0);
    let inputs: Vec<u8> = frames
        .iter()
        .filter(|f| f.channel == 1)
        .flat_map(|f| f.data.clone())
        .collect();
    assert!(inputs.ends_with(b"k."));
    assert!(frames.iter().any(|f| f.channel == 0 && f.data.len() > 100));
}

#[test]
#[serial]
fn test_unwritable_log_does_not_abort() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("not-a-dir");
    File::create(&blocker).unwrap();
    let config = NethackConfig::default().with_recorder(&blocker, true);
    let mut env = Nethack::new(config).unwrap();
    env.reset(Some(2)).unwrap();
    assert!(env.session_log().is_none());
    env.step(MiscAction::More.into()).unwrap();
}

#[test]
#[serial]
fn test_random_actions_never_fail() {
    let mut env = Nethack::new(config()).unwrap();
    let actions: Vec<u32> = env.encoder().actions().collect();
    env.reset(Some(123)).unwrap();

    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let action = actions[(state % actions.len() as u64) as usize];
        let (obs, done) = env.step(action).unwrap();
        assert_eq!(obs.chars.as_ref().unwrap().dim(), (21, 79));
        assert_eq!(obs.message.as_ref().unwrap().len(), 256);
        let in_moveloop = obs.program_state.as_ref().unwrap()[3] == 1;
        if done {
            env.reset(None).unwrap();
        } else if in_moveloop {
            let obs = env.observation();
            let (x, y) = hero(obs);
            let chars = obs.chars.as_ref().unwrap();
            assert_eq!(chars.iter().filter(|&&c| c == b'@').count(), 1);
            assert_eq!(chars[[y, x]], b'@');
        }
    }
}

/// Steps per second over `steps` searches, restarting when an episode ends
fn throughput(env: &mut Nethack, steps: u32) -> f64 {
    env.reset(Some(42)).unwrap();
    to_moveloop(env);

    let start = Instant::now();
    for _ in 0..steps {
        let (_, done) = env.step(Command::Search.into()).unwrap();
        if done {
            env.reset(None).unwrap();
            to_moveloop(env);
        }
    }
    let elapsed = start.elapsed();
    let rate = steps as f64 / elapsed.as_secs_f64();
    tracing::info!(steps, ?elapsed, rate, "throughput");
    rate
}

/// Optimized builds must keep up with an agent; debug builds only need to
/// finish.
fn throughput_floor() -> f64 {
    if cfg!(debug_assertions) { 100.0 } else { 10_000.0 }
}

#[test]
#[serial]
fn test_step_throughput() {
    let mut env = Nethack::new(config().with_hunger(false)).unwrap();
    let rate = throughput(&mut env, 5000);
    assert!(rate > throughput_floor(), "{rate:.0} steps/s");
}

#[test]
#[serial]
fn test_step_throughput_with_session_log() {
    let root = tempfile::tempdir().unwrap();
    let config = NethackConfig::default()
        .with_hunger(false)
        .with_recorder(root.path(), false);
    let mut env = Nethack::new(config).unwrap();
    let rate = throughput(&mut env, 5000);
    assert!(env.session_log().is_some());
    assert!(rate > throughput_floor(), "{rate:.0} steps/s");
}
