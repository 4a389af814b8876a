//! Frame-paced playback of a sort session
//!
//! [`Playback`] is the presentation-independent half of the render loop. It
//! owns the array (through the active [`Session`]), drains a bounded number
//! of steps per frame, and applies user [`Command`]s. The terminal UI only
//! reads from it and forwards key presses.

use crate::sort::{generate_permutation, Algorithm, Highlight, Session, SortError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use thiserror::Error;

pub const MIN_STEPS_PER_FRAME: usize = 1;
pub const MAX_STEPS_PER_FRAME: usize = 100;
/// Change applied by one speed up/down command
pub const SPEED_STEP: usize = 1;

pub const DEFAULT_ITEM_COUNT: usize = 64;
pub const DEFAULT_STEPS_PER_FRAME: usize = 50;
pub const DEFAULT_FRAME_RATE: u32 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("steps per frame must be within {min}..={max}, got {value}")]
    StepsPerFrameOutOfRange { value: usize, min: usize, max: usize },

    #[error("frame rate must be at least 1 frame per second")]
    InvalidFrameRate,
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;

/// Settings for a playback loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Length of each generated permutation
    pub item_count: usize,
    /// Initial number of steps pulled per frame
    pub steps_per_frame: usize,
    /// Frames per second
    pub frame_rate: u32,
    /// Seed for permutation generation; entropy when `None`
    pub seed: Option<u64>,
    /// Algorithm of the first session
    pub algorithm: Algorithm,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            item_count: DEFAULT_ITEM_COUNT,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
            algorithm: Algorithm::Quick,
        }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> PlaybackResult<()> {
        if self.item_count == 0 {
            return Err(SortError::InvalidItemCount(self.item_count).into());
        }
        if !(MIN_STEPS_PER_FRAME..=MAX_STEPS_PER_FRAME).contains(&self.steps_per_frame) {
            return Err(PlaybackError::StepsPerFrameOutOfRange {
                value: self.steps_per_frame,
                min: MIN_STEPS_PER_FRAME,
                max: MAX_STEPS_PER_FRAME,
            });
        }
        if self.frame_rate == 0 {
            return Err(PlaybackError::InvalidFrameRate);
        }
        Ok(())
    }
}

/// User commands accepted by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch to the next algorithm on a fresh permutation
    NextAlgorithm,
    /// Restart the current algorithm on a fresh permutation
    Reset,
    TogglePause,
    SpeedUp,
    SpeedDown,
    Quit,
}

/// What one frame did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Steps pulled this frame
    pub pulled: usize,
    /// The session ran out of steps during this frame
    pub finished: bool,
}

/// Owner of the active session and the playback controls
pub struct Playback {
    config: PlaybackConfig,
    rng: StdRng,
    session: Session,
    steps_per_frame: usize,
    paused: bool,
    highlight: Option<Highlight>,
    should_quit: bool,
}

impl Playback {
    pub fn new(config: PlaybackConfig) -> PlaybackResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Self::fresh_session(config.algorithm, config.item_count, &mut rng)?;

        Ok(Playback {
            steps_per_frame: config.steps_per_frame,
            config,
            rng,
            session,
            paused: false,
            highlight: None,
            should_quit: false,
        })
    }

    fn fresh_session(
        algorithm: Algorithm,
        item_count: usize,
        rng: &mut StdRng,
    ) -> PlaybackResult<Session> {
        let values = generate_permutation(item_count, rng)?;
        let session = Session::from_permutation(algorithm, values)?;
        log::info!("starting {} on {} items", algorithm, item_count);
        Ok(session)
    }

    /// Replace the session; the old one is dropped with its remaining steps
    fn restart(&mut self, algorithm: Algorithm) -> PlaybackResult<()> {
        self.session = Self::fresh_session(algorithm, self.config.item_count, &mut self.rng)?;
        self.highlight = None;
        self.paused = false;
        Ok(())
    }

    /// Pull up to `steps_per_frame` steps unless paused
    pub fn tick(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if self.paused {
            return report;
        }

        let was_running = !self.session.is_exhausted();
        for _ in 0..self.steps_per_frame {
            match self.session.next_step() {
                Some(highlight) => {
                    self.highlight = Some(highlight);
                    report.pulled += 1;
                }
                None => {
                    self.highlight = None;
                    self.paused = true;
                    report.finished = true;
                    break;
                }
            }
        }

        if report.finished && was_running {
            let stats = self.session.stats();
            log::info!(
                "{} sorted {} items: {} comparisons, {} array accesses",
                self.session.algorithm(),
                self.session.values().len(),
                stats.comparisons,
                stats.array_accesses
            );
        }
        log::trace!("frame pulled {} step(s)", report.pulled);
        report
    }

    pub fn apply(&mut self, command: Command) -> PlaybackResult<()> {
        log::debug!("command {:?}", command);
        match command {
            Command::NextAlgorithm => self.restart(self.session.algorithm().next())?,
            Command::Reset => self.restart(self.session.algorithm())?,
            Command::TogglePause => self.paused = !self.paused,
            Command::SpeedUp => {
                self.steps_per_frame = (self.steps_per_frame + SPEED_STEP).min(MAX_STEPS_PER_FRAME);
            }
            Command::SpeedDown => {
                self.steps_per_frame = self
                    .steps_per_frame
                    .saturating_sub(SPEED_STEP)
                    .max(MIN_STEPS_PER_FRAME);
            }
            Command::Quit => self.should_quit = true,
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn algorithm(&self) -> Algorithm {
        self.session.algorithm()
    }

    /// Highlight of the most recent step; cleared when a session ends or restarts
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Wall-clock time budget of one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.config.frame_rate))
    }
}
