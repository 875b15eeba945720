//! The drawer: uniform sampling without replacement.

use std::collections::BTreeSet;
use std::fmt;

use lotto_core::rng::RandomSource;

use super::config::DrawConfig;

/// One group of drawn numbers: distinct, in range, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw(Vec<i32>);

impl Draw {
    /// The drawn numbers in ascending order.
    #[must_use]
    pub fn numbers(&self) -> &[i32] {
        &self.0
    }

    /// Number of values in the draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a draw produced by [`draw`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the numbers in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.0.iter()
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Draw {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Draws `config.count()` distinct numbers from `[config.min(), config.max()]`.
///
/// Uses Floyd's subset sampling over offsets from `min`: for each
/// `j` in `range_size - count .. range_size`, pick `t` uniformly in `[0, j]`
/// and keep `t` unless already taken, in which case keep `j`. Every
/// `count`-subset is equally likely and exactly `count` random values are
/// consumed. The ordered set yields the result already sorted.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn draw(config: &DrawConfig, rng: &mut dyn RandomSource) -> Draw {
    let size = config.range_size();
    let count = u64::from(config.count());
    let mut offsets = BTreeSet::new();

    for j in (size - count)..size {
        // j < size <= 2^32, so it fits in a u32.
        let t = u64::from(rng.next_u32_range(0, j as u32));
        if !offsets.insert(t) {
            offsets.insert(j);
        }
    }

    let min = i64::from(config.min());
    // min + offset <= max, so the sum fits in an i32.
    Draw(
        offsets
            .into_iter()
            .map(|offset| (min + offset as i64) as i32)
            .collect(),
    )
}
