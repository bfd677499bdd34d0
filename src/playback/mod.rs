//! Animation of the time window.
//!
//! - `driver`: the Idle/Playing state machine and step policy
//! - `player`: a tokio task that ticks a shared filter (feature `playback`)

pub mod driver;
#[cfg(feature = "playback")]
pub mod player;

pub use driver::{AnimationDriver, PlaybackState, TickOutcome, TimerHandle};
#[cfg(feature = "playback")]
pub use player::Player;
