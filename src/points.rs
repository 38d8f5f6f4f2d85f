//! Reward amounts for newly shared boops.

use std::ops::RangeInclusive;

use rand::Rng;

/// Lowest reward for a share.
pub const MIN_SHARE_POINTS: u32 = 20;
/// Highest reward for a share.
pub const MAX_SHARE_POINTS: u32 = 69;

pub trait PointsSource: Send + Sync {
    fn draw(&self) -> u32;
}

/// Uniform draw over an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomPoints {
    range: RangeInclusive<u32>,
}

impl RandomPoints {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(min: u32, max: u32) -> Self {
        let range = if min <= max { min..=max } else { max..=min };
        Self { range }
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }
}

impl Default for RandomPoints {
    fn default() -> Self {
        Self::new(MIN_SHARE_POINTS, MAX_SHARE_POINTS)
    }
}

impl PointsSource for RandomPoints {
    fn draw(&self) -> u32 {
        rand::thread_rng().gen_range(self.range.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedPoints(pub u32);

impl PointsSource for FixedPoints {
    fn draw(&self) -> u32 {
        self.0
    }
}
