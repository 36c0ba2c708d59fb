//! Several mappers driven as one
//!
//! Calls fan out to the registered mappers in registration order, so later
//! mappers win where segments overlap.

use embassy_time::Duration;
use heapless::Vec;

use super::PatternMapper;
use crate::color::{Palette16, Rgb};

pub struct MultiplePatternMapper<'a, const N: usize> {
    mappers: Vec<&'a mut dyn PatternMapper, N>,
}

impl<const N: usize> Default for MultiplePatternMapper<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> MultiplePatternMapper<'a, N> {
    pub const fn new() -> Self {
        Self {
            mappers: Vec::new(),
        }
    }

    /// Register a mapper
    ///
    /// # Errors
    ///
    /// Returns the mapper back when all `N` slots are taken.
    pub fn push(
        &mut self,
        mapper: &'a mut dyn PatternMapper,
    ) -> Result<(), &'a mut dyn PatternMapper> {
        self.mappers.push(mapper)
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl<const N: usize> PatternMapper for MultiplePatternMapper<'_, N> {
    fn reset(&mut self) {
        for mapper in &mut self.mappers {
            mapper.reset();
        }
    }

    fn new_frame(&mut self, leds: &mut [Rgb], frame_time: Duration) {
        for mapper in &mut self.mappers {
            mapper.new_frame(leds, frame_time);
        }
    }

    fn set_palette(&mut self, palette: Palette16) {
        for mapper in &mut self.mappers {
            mapper.set_palette(palette);
        }
    }

    fn reset_palette(&mut self) {
        for mapper in &mut self.mappers {
            mapper.reset_palette();
        }
    }
}
