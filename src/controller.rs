//! Mapping rotation and frame pacing
//!
//! The controller owns the LED frame buffer and the output driver and cycles
//! through its mapping runners. It does not sleep: every tick returns the
//! deadline of the next frame and the caller waits on its own timer.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = PatternController::<_, 60, 4>::new(driver);
//! controller.add(MappingRunner::new("pulse", &mut pulse_mapper)).ok();
//! controller.start(Instant::now());
//!
//! loop {
//!     let result = controller.tick(Instant::now());
//!     Timer::at(result.next_deadline).await;
//! }
//! ```

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::OutputDriver;
use crate::color::{BLACK, Palette16, Rgb};
use crate::math8::mix64;
use crate::runner::{DEFAULT_FRAME_DELAY, MappingRunner};

/// Result of a controller tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame
    pub next_deadline: Instant,
    /// How long to wait until the next frame, zero when behind schedule
    pub sleep_duration: Duration,
}

impl FrameResult {
    fn at(next_deadline: Instant, now: Instant) -> Self {
        Self {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }
}

pub struct PatternController<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const MAX_MAPPINGS: usize,
> {
    output: O,
    leds: [Rgb; MAX_LEDS],
    runners: Vec<MappingRunner<'a>, MAX_MAPPINGS>,
    current: usize,
    started: bool,
    /// Rotate to the next mapping when the current one expires
    auto_change: bool,
    /// Seed for picking the next mapping at random, `None` rotates in order
    random_seed: Option<u64>,
    rotations: u64,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const MAX_MAPPINGS: usize>
    PatternController<'a, O, MAX_LEDS, MAX_MAPPINGS>
{
    pub fn new(driver: O) -> Self {
        Self {
            output: driver,
            leds: [BLACK; MAX_LEDS],
            runners: Vec::new(),
            current: 0,
            started: false,
            auto_change: true,
            random_seed: None,
            rotations: 0,
        }
    }

    #[must_use]
    pub fn with_auto_change(mut self, auto_change: bool) -> Self {
        self.auto_change = auto_change;
        self
    }

    pub fn set_auto_change(&mut self, auto_change: bool) {
        self.auto_change = auto_change;
    }

    /// Pick the next mapping pseudo-randomly instead of in order
    ///
    /// The same seed gives the same sequence. The current mapping may be
    /// picked again.
    #[must_use]
    pub fn with_random_order(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Register a mapping runner
    ///
    /// # Errors
    ///
    /// Returns the runner back when all `MAX_MAPPINGS` slots are taken.
    pub fn add(&mut self, runner: MappingRunner<'a>) -> Result<(), MappingRunner<'a>> {
        self.runners.push(runner)
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    /// Index of the active mapping
    pub const fn current(&self) -> usize {
        self.current
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.runners.get(self.current).map(MappingRunner::name)
    }

    /// Last frame written to the driver
    pub const fn leds(&self) -> &[Rgb; MAX_LEDS] {
        &self.leds
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Activate the first mapping
    pub fn start(&mut self, now: Instant) {
        self.started = true;
        self.activate(0, now);
    }

    /// Switch to the mapping at `id`
    ///
    /// Returns `false` and keeps the current mapping when `id` is out of range.
    pub fn set_mapping(&mut self, id: usize, now: Instant) -> bool {
        if id >= self.runners.len() {
            return false;
        }
        self.clear();
        self.started = true;
        self.activate(id, now);
        true
    }

    /// Switch to the next mapping, wrapping after the last one
    pub fn next_mapping(&mut self, now: Instant) {
        if self.runners.is_empty() {
            return;
        }
        let next = self.next_index();
        debug_log!("pattern controller: rotating to mapping {}", next);
        self.clear();
        self.activate(next, now);
    }

    /// Override the palette of the active mapping
    pub fn set_palette(&mut self, palette: Palette16) {
        if let Some(runner) = self.runners.get_mut(self.current) {
            runner.set_palette(palette);
        }
    }

    pub fn reset_palette(&mut self) {
        if let Some(runner) = self.runners.get_mut(self.current) {
            runner.reset_palette();
        }
    }

    /// Process one tick and return timing information
    ///
    /// Rotates away from an expired mapping when auto change is on, renders a
    /// frame when the active mapping is due and writes it to the driver.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if self.runners.is_empty() {
            return FrameResult::at(now + DEFAULT_FRAME_DELAY, now);
        }
        if !self.started {
            self.start(now);
        }

        if self.auto_change && self.runners[self.current].expired() {
            self.next_mapping(now);
        }

        let runner = &mut self.runners[self.current];
        if runner.frame_ready(now) {
            runner.new_frame(&mut self.leds, now);
            self.output.write(&self.leds);
        }

        FrameResult::at(runner.next_frame_at(), now)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_index(&mut self) -> usize {
        let len = self.runners.len();
        match self.random_seed {
            Some(seed) => {
                self.rotations = self.rotations.wrapping_add(1);
                (mix64(seed, self.rotations) % len as u64) as usize
            }
            None => (self.current + 1) % len,
        }
    }

    /// Black out the buffer and the strip
    fn clear(&mut self) {
        self.leds = [BLACK; MAX_LEDS];
        self.output.write(&self.leds);
    }

    fn activate(&mut self, id: usize, now: Instant) {
        let Some(runner) = self.runners.get_mut(id) else {
            return;
        };
        self.current = id;
        runner.reset(now);
        debug_log!("pattern controller: activated {}", runner.name());
    }
}
