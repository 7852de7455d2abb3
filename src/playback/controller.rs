//! Playback state machine.
//!
//! The controller never owns a thread. The host polls it (once per frame, say)
//! and a tick fires only when the pending deadline has passed. There is at
//! most one pending deadline: `play` replaces it, `pause` drops it. A poll
//! fires at most one tick and schedules the next one `delay_ms` after the
//! poll, so a host that stalls does not get a burst of catch-up ticks.

use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::config::{Action, ConfigReport, Direction, PlaybackConfig, PlaybackUpdate};
use crate::cube::Cube;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Drives repeated shifts of a [`Cube`].
#[derive(Debug)]
pub struct AnimationController<C: Clock = SystemClock> {
    config: PlaybackConfig,
    clock: C,
    /// Deadline of the single pending tick, if playing.
    next_due: Option<Duration>,
    ticks: u64,
}

impl Default for AnimationController<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> AnimationController<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, PlaybackConfig::default())
    }

    pub fn with_config(clock: C, config: PlaybackConfig) -> Self {
        AnimationController {
            config,
            clock,
            next_due: None,
            ticks: 0,
        }
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    pub fn state(&self) -> PlaybackState {
        if self.next_due.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    /// When the pending tick is due, measured on the controller's clock.
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Ticks performed so far, by the timer and by [`step`](Self::step).
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Merge `update` into the configuration and (re)start the timer.
    ///
    /// Calling this while already playing replaces the pending deadline, so
    /// there is never more than one.
    pub fn play(&mut self, update: &PlaybackUpdate) -> ConfigReport {
        let report = self.config.merge(update);
        let was_playing = self.is_playing();
        self.schedule_from(self.clock.now());
        tracing::info!(
            delay_ms = self.config.delay_ms,
            direction = %self.config.direction,
            step_size = self.config.step_size,
            wrap = self.config.wrap,
            restarted = was_playing,
            "Playback started"
        );
        report
    }

    /// Cancel the pending tick. The configuration is kept.
    pub fn pause(&mut self) {
        if self.next_due.take().is_some() {
            tracing::info!(ticks = self.ticks, "Playback paused");
        }
    }

    /// Flip between playing and idle, or force one of them. Returns whether
    /// the controller is playing afterwards.
    pub fn toggle(&mut self, force: Option<bool>) -> bool {
        let play = force.unwrap_or(!self.is_playing());
        match (play, self.is_playing()) {
            (true, false) => {
                self.play(&PlaybackUpdate::default());
            }
            (false, true) => self.pause(),
            _ => {}
        }
        self.is_playing()
    }

    /// Fire the pending tick if it is due. Returns whether a tick fired.
    pub fn poll(&mut self, cube: &mut Cube) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        let now = self.clock.now();
        if now < due {
            return false;
        }

        self.apply(cube, self.config.direction);
        self.schedule_from(now);
        true
    }

    /// One tick in the configured direction, outside the timer.
    pub fn tick(&mut self, cube: &mut Cube) {
        self.apply(cube, self.config.direction);
    }

    /// Perform `|n|` ticks now. A negative `n` steps in the opposite
    /// direction for this call only; the configured direction is unchanged.
    pub fn step(&mut self, cube: &mut Cube, n: i32) {
        let direction = if n < 0 {
            self.config.direction.opposite()
        } else {
            self.config.direction
        };
        for _ in 0..n.unsigned_abs() {
            self.apply(cube, direction);
        }
        tracing::debug!(n, %direction, "Stepped playback");
    }

    fn schedule_from(&mut self, now: Duration) {
        self.next_due = Some(now + Duration::from_millis(self.config.delay_ms));
    }

    fn apply(&mut self, cube: &mut Cube, direction: Direction) {
        match self.config.action {
            Action::Slide => {
                let (axis, sign) = direction.axis_shift();
                cube.shift(axis, sign.saturating_mul(self.config.step_size), self.config.wrap);
            }
        }
        self.ticks += 1;
    }
}
