//! Draw configuration value objects.

use std::fmt;

use lotto_core::error::DomainError;

/// How many numbers to draw and from which inclusive range.
///
/// Fields are private: a `DrawConfig` can only be obtained through
/// [`DrawConfig::new`], so every instance satisfies
/// `count >= 1`, `min <= max` and `max - min + 1 >= count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    count: u32,
    min: i32,
    max: i32,
}

impl DrawConfig {
    /// Validates and creates a draw configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if `count` is zero, if
    /// `min > max`, or if the range holds fewer than `count` distinct values.
    pub fn new(count: u32, min: i32, max: i32) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::InvalidConfiguration(
                "count must be at least 1".to_owned(),
            ));
        }
        if min > max {
            return Err(DomainError::InvalidConfiguration(format!(
                "min ({min}) must not exceed max ({max})"
            )));
        }

        let available = range_size(min, max);
        if u64::from(count) > available {
            return Err(DomainError::InvalidConfiguration(format!(
                "cannot draw {count} distinct numbers from [{min}, {max}] ({available} available)"
            )));
        }

        Ok(Self { count, min, max })
    }

    /// Number of values in one draw.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Smallest value that can be drawn.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest value that can be drawn.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of distinct values in `[min, max]`. At most `2^32`.
    #[must_use]
    pub fn range_size(&self) -> u64 {
        range_size(self.min, self.max)
    }
}

impl fmt::Display for DrawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from [{}, {}]", self.count, self.min, self.max)
    }
}

#[allow(clippy::cast_sign_loss)]
fn range_size(min: i32, max: i32) -> u64 {
    // Caller guarantees min <= max, so the difference is non-negative.
    (i64::from(max) - i64::from(min) + 1) as u64
}

/// The two independently drawn groups that make up one lottery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryConfig {
    name: String,
    main_numbers: DrawConfig,
    bonus_numbers: DrawConfig,
}

impl LotteryConfig {
    /// Creates a lottery from two already validated groups.
    #[must_use]
    pub fn new(name: impl Into<String>, main_numbers: DrawConfig, bonus_numbers: DrawConfig) -> Self {
        Self {
            name: name.into(),
            main_numbers,
            bonus_numbers,
        }
    }

    /// EuroMillions: five main numbers from 1-50 and two Lucky Stars from 1-13.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if either group is invalid.
    pub fn euromillions() -> Result<Self, DomainError> {
        Ok(Self::new(
            "EuroMillions",
            DrawConfig::new(5, 1, 50)?,
            DrawConfig::new(2, 1, 13)?,
        ))
    }

    /// Display name of the lottery.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration of the main group.
    #[must_use]
    pub fn main_numbers(&self) -> &DrawConfig {
        &self.main_numbers
    }

    /// Configuration of the bonus group.
    #[must_use]
    pub fn bonus_numbers(&self) -> &DrawConfig {
        &self.bonus_numbers
    }
}
