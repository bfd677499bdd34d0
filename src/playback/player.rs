//! Background playback on a tokio runtime.

use crate::error::Result;
use crate::playback::driver::{TickOutcome, TimerHandle};
use crate::sync::SyncTimeFilter;
use tokio::task::JoinHandle;

/// Drives a [`SyncTimeFilter`] forward on a repeating timer.
///
/// Each iteration sleeps for the filter's current animation interval and
/// then ticks, so a speed change applies from the next tick on. The task
/// ends when playback finishes, is stopped, or the dataset goes away.
///
/// Must be started from within a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use strikeview::{Dataset, Event, Player, SyncTimeFilter, TimeRange};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let filter = SyncTimeFilter::new();
/// filter.load_dataset(Dataset::new(vec![
///     Event::new(0.0, 20.0, 60.0, 1.0),
///     Event::new(100.0, 20.0, 60.0, 1.0),
/// ]))?;
/// filter.set_active_range(Some(TimeRange::new(0.0, 10.0)))?;
/// filter.set_animation_speed_ms(5.0)?;
///
/// let mut player = Player::new(filter.clone());
/// player.start()?;
/// player.stop();
/// assert!(!filter.is_playing());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Player {
    filter: SyncTimeFilter,
    handle: Option<TimerHandle>,
    task: Option<JoinHandle<()>>,
}

impl Player {
    pub fn new(filter: SyncTimeFilter) -> Self {
        Self {
            filter,
            handle: None,
            task: None,
        }
    }

    pub fn filter(&self) -> &SyncTimeFilter {
        &self.filter
    }

    /// Start (or restart) playback from the current window.
    pub fn start(&mut self) -> Result<()> {
        self.abort_task();
        let handle = self.filter.start_animation()?;
        self.handle = Some(handle);
        let filter = self.filter.clone();
        self.task = Some(tokio::spawn(run(filter, handle)));
        Ok(())
    }

    /// Stop the run this player started.
    ///
    /// The filter is only stopped while this player's handle is still
    /// current, checked and invalidated under one write lock. A run started
    /// elsewhere on the same filter keeps going.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.filter.write(|filter| {
                if filter.is_current(handle) {
                    filter.stop_animation();
                }
            });
        }
        self.abort_task();
    }

    /// Whether the background task is still alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Wait for the current run to end on its own.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
            && !e.is_cancelled()
        {
            log::error!("Playback task failed: {}", e);
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(filter: SyncTimeFilter, handle: TimerHandle) {
    loop {
        tokio::time::sleep(filter.animation_interval()).await;
        match filter.tick(handle) {
            Ok(TickOutcome::Advanced(window)) => {
                log::trace!("Playback advanced to {}", window);
            }
            Ok(TickOutcome::Finished(window)) => {
                log::debug!("Playback finished at {}", window);
                break;
            }
            Ok(TickOutcome::Cancelled) => break,
            Err(e) => {
                log::warn!("Playback aborted: {}", e);
                break;
            }
        }
    }
}
