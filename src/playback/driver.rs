//! Playback state machine that moves the time window forward.
//!
//! The driver never owns a clock. A scheduler (the [`Player`] task, a UI
//! frame callback, a test) calls [`AnimationDriver::tick`] with the handle it
//! got from [`AnimationDriver::start`]. Stopping bumps the generation, so a
//! tick that was already scheduled with an older handle is a no-op.
//!
//! [`Player`]: crate::playback::Player

use crate::config::Config;
use strikeview_types::range::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// Token identifying one playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The window moved and playback continues.
    Advanced(TimeRange),
    /// The window reached the upper bound; playback is now idle.
    Finished(TimeRange),
    /// The handle was stale; nothing changed.
    Cancelled,
}

impl TickOutcome {
    /// New window to store, if any.
    pub fn window(&self) -> Option<TimeRange> {
        match self {
            TickOutcome::Advanced(window) | TickOutcome::Finished(window) => Some(*window),
            TickOutcome::Cancelled => None,
        }
    }

    /// Whether the scheduler should stop issuing ticks.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TickOutcome::Advanced(_))
    }
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    state: PlaybackState,
    generation: u64,
    step_fraction: f64,
    min_width_divisor: f64,
}

impl AnimationDriver {
    pub fn new(step_fraction: f64, min_width_divisor: f64) -> Self {
        Self {
            state: PlaybackState::Idle,
            generation: 0,
            step_fraction,
            min_width_divisor,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.step_fraction, config.min_width_divisor)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Enter `Playing` and return a fresh handle. Handles from earlier runs
    /// stop working.
    pub fn start(&mut self) -> TimerHandle {
        self.generation += 1;
        self.state = PlaybackState::Playing;
        log::debug!("Playback started (generation {})", self.generation);
        TimerHandle {
            generation: self.generation,
        }
    }

    /// Enter `Idle` and invalidate the current handle. Returns whether
    /// playback was running.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.generation += 1;
        self.state = PlaybackState::Idle;
        if was_playing {
            log::debug!("Playback stopped");
        }
        was_playing
    }

    /// Whether ticks with `handle` still take effect.
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.is_playing() && handle.generation == self.generation
    }

    /// Window after one step, ignoring playback state.
    ///
    /// The window moves by `step_fraction` of its width. A window whose step
    /// would not move its end (zero width, or too narrow for the magnitude
    /// of its timestamps) moves as if it were `1 / min_width_divisor` of the
    /// full bounds wide. The end never passes `bounds.end` and the start
    /// never passes the end.
    pub fn next_window(&self, window: TimeRange, bounds: TimeRange) -> TimeRange {
        let mut step = window.width() * self.step_fraction;
        if window.end + step <= window.end {
            step = bounds.width() / self.min_width_divisor * self.step_fraction;
        }
        let end = (window.end + step).min(bounds.end);
        let start = (window.start + step).min(end);
        TimeRange { start, end }
    }

    /// Advance `window` within `bounds` if `handle` is current.
    pub fn tick(&mut self, handle: TimerHandle, window: TimeRange, bounds: TimeRange) -> TickOutcome {
        if !self.is_current(handle) {
            return TickOutcome::Cancelled;
        }

        if window.end >= bounds.end {
            self.finish();
            return TickOutcome::Finished(window);
        }

        let next = self.next_window(window, bounds);
        if next.end <= window.end {
            // No forward progress possible (zero-width bounds).
            self.finish();
            return TickOutcome::Finished(window);
        }

        if next.end >= bounds.end {
            self.finish();
            TickOutcome::Finished(next)
        } else {
            TickOutcome::Advanced(next)
        }
    }

    fn finish(&mut self) {
        self.generation += 1;
        self.state = PlaybackState::Idle;
        log::debug!("Playback reached the end of the time range");
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
