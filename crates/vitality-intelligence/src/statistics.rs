// ABOUTME: Small statistical helpers shared by the scoring sub-algorithms
// ABOUTME: Mean, sample variance, first-encountered mode, weighted sums and score truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

//! Statistical helpers
//!
//! Every helper is total: empty input yields `None` (or zero for sums) so the
//! scoring code never divides by zero.

use crate::scoring_constants::score_bounds::{MAX_SCORE, MIN_SCORE};

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (n - 1 denominator), `None` with fewer than two values
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let squared_deviations: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(squared_deviations / (values.len() - 1) as f64)
}

/// Most frequent item, ties resolved in favour of the first item encountered
#[must_use]
pub fn first_mode<T, I>(items: I) -> Option<T>
where
    T: PartialEq + Copy,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(T, usize)>, (item, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((item, count)),
        })
        .map(|(item, _)| item)
}

/// Weighted sum of `(value, weight)` pairs, folded left to right
// Safe: left fold without mul_add, truncated scores depend on exact rounding
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn weighted_sum(components: &[(f64, f64)]) -> f64 {
    components
        .iter()
        .fold(0.0, |acc, (value, weight)| acc + value * weight)
}

/// Clamp a raw score to `[0, 100]`
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Truncate a raw score toward zero into the `0..=100` integer range
#[must_use]
pub fn truncate_score(score: f64) -> u8 {
    clamp_score(score).trunc() as u8
}

/// Round to one decimal place
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_sample_variance_uses_bessel_correction() {
        let variance = sample_variance(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((variance - 1.666_666_666_666_666_7).abs() < 1e-12);
        assert_eq!(sample_variance(&[5.0]), None);
    }

    #[test]
    fn test_first_mode_prefers_first_encountered_on_ties() {
        assert_eq!(first_mode(['b', 'a', 'a', 'b']), Some('b'));
        assert_eq!(first_mode(['b', 'a', 'a']), Some('a'));
        assert_eq!(first_mode(Vec::<char>::new()), None);
    }

    #[test]
    fn test_truncate_score_clamps_and_truncates() {
        assert_eq!(truncate_score(89.99), 89);
        assert_eq!(truncate_score(-4.0), 0);
        assert_eq!(truncate_score(140.0), 100);
        assert_eq!(truncate_score(f64::NAN), 0);
    }

    #[test]
    fn test_weighted_sum() {
        let sum = weighted_sum(&[(100.0, 0.4), (50.0, 0.6)]);
        assert!((sum - 70.0).abs() < 1e-9);
    }
}
