//! Timing wrapper around a pattern mapper
//!
//! A runner tracks when its mapping was activated, how often it wants a new
//! frame, and how long it should stay active before the controller rotates
//! to the next one.

use embassy_time::{Duration, Instant};

use crate::color::{Palette16, Rgb};
use crate::mapper::PatternMapper;

/// Default delay between frames (50 FPS)
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Default time a mapping stays active
pub const DEFAULT_DURATION: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Minimum time between two frames
    pub frame_delay: Duration,
    /// Time after which the mapping is considered expired
    pub duration: Duration,
}

impl RunnerConfig {
    pub const DEFAULT: Self = Self {
        frame_delay: DEFAULT_FRAME_DELAY,
        duration: DEFAULT_DURATION,
    };

    #[must_use]
    pub const fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub struct MappingRunner<'a> {
    name: &'static str,
    mapper: &'a mut dyn PatternMapper,
    config: RunnerConfig,
    started_at: Instant,
    last_frame: Option<Instant>,
    frame_time: Duration,
}

impl<'a> MappingRunner<'a> {
    pub fn new(name: &'static str, mapper: &'a mut dyn PatternMapper) -> Self {
        Self::with_config(name, mapper, RunnerConfig::DEFAULT)
    }

    pub fn with_config(
        name: &'static str,
        mapper: &'a mut dyn PatternMapper,
        config: RunnerConfig,
    ) -> Self {
        Self {
            name,
            mapper,
            config,
            started_at: Instant::from_ticks(0),
            last_frame: None,
            frame_time: Duration::from_ticks(0),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Time since activation as of the last rendered frame
    pub const fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Activate the mapping at `now`
    pub fn reset(&mut self, now: Instant) {
        self.started_at = now;
        self.last_frame = None;
        self.frame_time = Duration::from_ticks(0);
        self.mapper.reset();
    }

    /// Whether the frame delay has passed since the last frame
    pub fn frame_ready(&self, now: Instant) -> bool {
        self.last_frame
            .is_none_or(|last| now.saturating_duration_since(last) >= self.config.frame_delay)
    }

    /// Instant at which the next frame becomes ready
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame
            .map_or(self.started_at, |last| last + self.config.frame_delay)
    }

    /// Render one frame at `now`
    pub fn new_frame(&mut self, leds: &mut [Rgb], now: Instant) {
        self.frame_time = now.saturating_duration_since(self.started_at);
        self.last_frame = Some(now);
        self.mapper.new_frame(leds, self.frame_time);
    }

    /// Whether the mapping has been active for its full duration
    pub fn expired(&self) -> bool {
        self.frame_time >= self.config.duration
    }

    pub fn set_palette(&mut self, palette: Palette16) {
        self.mapper.set_palette(palette);
    }

    pub fn reset_palette(&mut self) {
        self.mapper.reset_palette();
    }
}
