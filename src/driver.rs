//! Screen state and the cooperative frame loop.
//!
//! One thread owns everything: the loop reads input, polls the asset loader,
//! ticks the session on the frame interval and redraws. Flaps are applied as
//! soon as the key is read, between ticks.

use crate::assets::{AssetError, AssetGate, AssetLoader, AssetSource, GateTransition, SoundClip};
use crate::audio::{cue_for, SoundPlayer};
use crate::core::constants::IDLE_POLL_MS;
use crate::core::{tick, GameConfig, Session, TickEvent};
use crate::input::{map_key, InputAction};
use crossterm::event::{self, Event};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// What the player is looking at.
pub enum Screen {
    /// Images still loading. No session exists yet.
    Loading {
        gate: AssetGate,
        loader: AssetLoader,
    },
    /// Loading failed or timed out; waiting for retry or quit.
    LoadFailed { error: AssetError },
    Playing { session: Session },
}

pub struct App {
    config: GameConfig,
    source: AssetSource,
    screen: Screen,
    rng: ChaCha8Rng,
    player: Box<dyn SoundPlayer>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, source: AssetSource, player: Box<dyn SoundPlayer>) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let screen = loading_screen(&source, &config);
        Self {
            config,
            source,
            screen,
            rng,
            player,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the loop should keep ticking on the frame interval.
    ///
    /// False on the game-over and load-failed screens, where the loop only
    /// waits for input.
    pub fn wants_frames(&self) -> bool {
        match &self.screen {
            Screen::Loading { .. } => true,
            Screen::LoadFailed { .. } => false,
            Screen::Playing { session } => session.is_running(),
        }
    }

    pub fn handle_action(&mut self, action: InputAction) {
        if action == InputAction::Quit {
            log::info!("quit requested");
            self.should_quit = true;
            return;
        }

        let reload = match (&mut self.screen, action) {
            (Screen::Playing { session }, InputAction::Flap) => {
                let first = !session.has_started();
                if session.flap() {
                    if first {
                        log::info!("session started");
                    }
                    self.player.play(SoundClip::Flap);
                }
                false
            }
            (Screen::Playing { session }, InputAction::Restart) => {
                if !session.is_running() {
                    *session = session.restarted();
                    log::info!("new session");
                }
                false
            }
            (Screen::LoadFailed { .. }, InputAction::Restart) => true,
            _ => false,
        };

        if reload {
            log::info!("retrying asset load");
            self.screen = loading_screen(&self.source, &self.config);
        }
    }

    /// One frame's worth of work: poll the loader or tick the session.
    pub fn update(&mut self) {
        let next = match &mut self.screen {
            Screen::Loading { gate, loader } => match loader.poll(gate) {
                GateTransition::Opened(sprites) => {
                    log::info!("all assets ready");
                    Some(Screen::Playing {
                        session: Session::new(&self.config, sprites),
                    })
                }
                GateTransition::Failed(error) => {
                    log::error!("asset load failed: {error}");
                    Some(Screen::LoadFailed { error })
                }
                GateTransition::Waiting | GateTransition::Ignored => None,
            },
            Screen::Playing { session } => {
                for event in tick(session, &mut self.rng) {
                    match event {
                        TickEvent::Scored { score } => log::debug!("score {score}"),
                        TickEvent::Crashed { score, cause } => {
                            log::info!("game over: {cause}, score {score}")
                        }
                    }
                    self.player.play(cue_for(&event));
                }
                None
            }
            Screen::LoadFailed { .. } => None,
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
    }
}

fn loading_screen(source: &AssetSource, config: &GameConfig) -> Screen {
    match source {
        AssetSource::Builtin => log::info!("using built-in sprite dimensions"),
        AssetSource::Directory(dir) => log::info!("loading assets from {}", dir.display()),
    }
    Screen::Loading {
        gate: AssetGate::new(),
        loader: AssetLoader::spawn(source, config.asset_timeout),
    }
}

/// Run until the player quits.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let frame_interval = app.config().frame_interval;
    let mut last_frame = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        let timeout = if app.wants_frames() {
            frame_interval.saturating_sub(last_frame.elapsed())
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    app.handle_action(action);
                }
            }
        }

        if app.wants_frames() && last_frame.elapsed() >= frame_interval {
            app.update();
            last_frame = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingPlayer {
        played: Rc<RefCell<Vec<SoundClip>>>,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play(&self, clip: SoundClip) {
            self.played.borrow_mut().push(clip);
        }
    }

    fn app_with(config: GameConfig, source: AssetSource) -> (App, Rc<RefCell<Vec<SoundClip>>>) {
        let player = RecordingPlayer::default();
        let played = player.played.clone();
        (App::new(config, source, Box::new(player)), played)
    }

    fn playing_app(config: GameConfig) -> (App, Rc<RefCell<Vec<SoundClip>>>) {
        let (mut app, played) = app_with(config, AssetSource::Builtin);
        app.update();
        assert!(matches!(app.screen(), Screen::Playing { .. }));
        (app, played)
    }

    fn session_mut(app: &mut App) -> &mut Session {
        match &mut app.screen {
            Screen::Playing { session } => session,
            _ => panic!("not playing"),
        }
    }

    #[test]
    fn test_builtin_assets_open_on_first_update() {
        let (app, _) = app_with(GameConfig::seeded(1), AssetSource::Builtin);
        assert!(matches!(app.screen(), Screen::Loading { .. }));
        assert!(app.wants_frames());

        let (app, _) = playing_app(GameConfig::seeded(1));
        match app.screen() {
            Screen::Playing { session } => assert_eq!(session.phase(), Phase::Ready),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_flap_plays_sound_and_starts() {
        let (mut app, played) = playing_app(GameConfig::seeded(1));
        app.handle_action(InputAction::Flap);
        assert_eq!(*played.borrow(), vec![SoundClip::Flap]);
        assert_eq!(session_mut(&mut app).phase(), Phase::Flying);
    }

    #[test]
    fn test_crash_plays_collision_once_and_idles() {
        let (mut app, played) = playing_app(GameConfig::seeded(1));
        app.handle_action(InputAction::Flap);
        session_mut(&mut app).bird_mut().y = 600.0;

        for _ in 0..5 {
            app.update();
        }
        let collisions = played
            .borrow()
            .iter()
            .filter(|c| **c == SoundClip::Collision)
            .count();
        assert_eq!(collisions, 1);
        assert!(!app.wants_frames());

        // Flap after game over is silent
        app.handle_action(InputAction::Flap);
        assert_eq!(played.borrow().last(), Some(&SoundClip::Collision));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let (mut app, _) = playing_app(GameConfig::seeded(1));
        app.handle_action(InputAction::Flap);
        app.update();
        let ticks = session_mut(&mut app).tick_count();
        app.handle_action(InputAction::Restart);
        assert_eq!(session_mut(&mut app).tick_count(), ticks);

        session_mut(&mut app).bird_mut().y = 600.0;
        app.update();
        assert!(!session_mut(&mut app).is_running());

        app.handle_action(InputAction::Restart);
        let session = session_mut(&mut app);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_count(), 0);
        assert!(app.wants_frames());
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app_with(GameConfig::default(), AssetSource::Builtin);
        assert!(!app.should_quit());
        app.handle_action(InputAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_missing_directory_fails_then_retries() {
        let dir = std::env::temp_dir().join(format!(
            "skyward-driver-missing-{}",
            std::process::id()
        ));
        let config = GameConfig {
            asset_timeout: Duration::from_secs(5),
            ..GameConfig::seeded(3)
        };
        let (mut app, _) = app_with(config, AssetSource::Directory(dir));

        let started = Instant::now();
        while matches!(app.screen(), Screen::Loading { .. })
            && started.elapsed() < Duration::from_secs(5)
        {
            app.update();
            std::thread::sleep(Duration::from_millis(5));
        }
        match app.screen() {
            Screen::LoadFailed { error } => {
                assert!(matches!(error, AssetError::Missing { .. }))
            }
            _ => panic!("expected load failure"),
        }
        assert!(!app.wants_frames());

        // Flap does nothing here; restart retries
        app.handle_action(InputAction::Flap);
        assert!(matches!(app.screen(), Screen::LoadFailed { .. }));
        app.handle_action(InputAction::Restart);
        assert!(matches!(app.screen(), Screen::Loading { .. }));
    }
}
