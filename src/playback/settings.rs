//! User-adjustable playback configuration
//!
//! [`Settings`] is seeded from the command line and edited from the UI. The
//! algorithm selection is stored as raw text and only resolved when a run is
//! created, so an unknown name surfaces as `InvalidAlgorithm` on start/step.

use crate::algorithms::Algorithm;
use crate::array::{
    CONTROL_MAX_SIZE, CONTROL_MIN_SIZE, DEFAULT_ARRAY_SIZE, MAX_VALUE, MIN_VALUE,
};
use crate::errors::{Result, VisualizerError};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 200;
pub const DEFAULT_SPEED: u32 = 50;
pub const DEFAULT_TARGET: i64 = 10;

/// Delay at speed zero, in milliseconds; each speed unit takes one off
const DELAY_BASE_MS: u32 = 300;

/// A setting that can be typed in as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Speed,
    Target,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Size => "size",
            Field::Speed => "speed",
            Field::Target => "target",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Algorithm selection as entered; resolved when a run is created
    pub algorithm: String,
    /// Requested array size; clamped when an array is generated
    pub size: usize,
    speed: u32,
    /// Subset-sum target
    pub target: i64,
    pub value_range: RangeInclusive<u32>,
    /// Seed for array generation; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            algorithm: Algorithm::Bubble.name().to_string(),
            size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            target: DEFAULT_TARGET,
            value_range: MIN_VALUE..=MAX_VALUE,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with the given algorithm selection
    pub fn new(algorithm: impl Into<String>) -> Self {
        Settings {
            algorithm: algorithm.into(),
            ..Settings::default()
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn adjust_speed(&mut self, delta: i32) {
        let speed = (self.speed as i64 + delta as i64).clamp(MIN_SPEED as i64, MAX_SPEED as i64);
        self.speed = speed as u32;
    }

    /// Time between two auto-advance pulls
    pub fn delay(&self) -> Duration {
        let ms = DELAY_BASE_MS.saturating_sub(self.speed).max(1);
        Duration::from_millis(ms as u64)
    }

    /// Move the size by `delta` within the size control's range
    pub fn step_size(&mut self, delta: i32) {
        let size = (self.size as i64 + delta as i64)
            .clamp(CONTROL_MIN_SIZE as i64, CONTROL_MAX_SIZE as i64);
        self.size = size as usize;
    }

    /// Resolve the algorithm selection
    pub fn resolve_algorithm(&self) -> Result<Algorithm> {
        self.algorithm.parse()
    }

    /// Select the next (or previous) algorithm in selector order
    pub fn cycle_algorithm(&mut self, forward: bool) {
        let next = match self.resolve_algorithm() {
            Ok(current) if forward => current.next(),
            Ok(current) => current.prev(),
            Err(_) => Algorithm::ALL[0],
        };
        self.algorithm = next.name().to_string();
    }

    /// Apply text typed by the user to `field`
    ///
    /// Nothing is changed when the text is not a number.
    pub fn apply_input(&mut self, field: Field, input: &str) -> Result<()> {
        let text = input.trim();
        let invalid = || VisualizerError::invalid_configuration(field.label(), input);
        match field {
            Field::Size => self.size = text.parse().map_err(|_| invalid())?,
            Field::Speed => self.set_speed(text.parse().map_err(|_| invalid())?),
            Field::Target => self.target = text.parse().map_err(|_| invalid())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_from_speed() {
        let mut settings = Settings::default();
        assert_eq!(settings.delay(), Duration::from_millis(250));

        settings.set_speed(200);
        assert_eq!(settings.delay(), Duration::from_millis(100));

        settings.set_speed(0);
        assert_eq!(settings.speed(), MIN_SPEED);
        assert_eq!(settings.delay(), Duration::from_millis(299));
    }

    #[test]
    fn test_new_keeps_defaults() {
        let settings = Settings::new("quick");
        assert_eq!(settings.algorithm, "quick");
        assert_eq!(settings.speed(), DEFAULT_SPEED);
        assert_eq!(settings.size, DEFAULT_ARRAY_SIZE);
        assert_eq!(settings.resolve_algorithm(), Ok(Algorithm::Quick));
    }

    #[test]
    fn test_size_control_range() {
        let mut settings = Settings::default();
        settings.step_size(500);
        assert_eq!(settings.size, CONTROL_MAX_SIZE);
        settings.step_size(-500);
        assert_eq!(settings.size, CONTROL_MIN_SIZE);
    }

    #[test]
    fn test_apply_input() {
        let mut settings = Settings::default();
        settings.apply_input(Field::Target, " -12 ").unwrap();
        assert_eq!(settings.target, -12);

        settings.apply_input(Field::Size, "150").unwrap();
        assert_eq!(settings.size, 150);

        settings.apply_input(Field::Speed, "999").unwrap();
        assert_eq!(settings.speed(), MAX_SPEED);
    }

    #[test]
    fn test_invalid_input_leaves_settings_untouched() {
        let mut settings = Settings::default();
        let before = settings.clone();

        let err = settings.apply_input(Field::Target, "ten").unwrap_err();
        assert_eq!(err, VisualizerError::invalid_configuration("target", "ten"));

        assert!(settings.apply_input(Field::Size, "-3").is_err());
        assert!(settings.apply_input(Field::Speed, "").is_err());
        assert_eq!(settings, before);
    }

    #[test]
    fn test_cycle_algorithm() {
        let mut settings = Settings::default();
        settings.cycle_algorithm(true);
        assert_eq!(settings.algorithm, "Selection Sort");
        settings.cycle_algorithm(false);
        settings.cycle_algorithm(false);
        assert_eq!(settings.algorithm, "Subset Sum");

        settings.algorithm = "nonsense".to_string();
        settings.cycle_algorithm(true);
        assert_eq!(settings.algorithm, "Bubble Sort");
    }
}
