//! Numeric helpers: range checks, clamping, dice rolls and rounding.

use rand::Rng;

use crate::error::DelverError;

/// Returns true if `number` lies between `min` and `max`.
///
/// Bounds given in reverse order are swapped. Either bound can be made
/// exclusive.
///
/// # Errors
/// `EmptyRange` if a bound is exclusive and `min == max`, since no number could
/// ever satisfy the check.
pub fn is_between(number: i64, min: i64, max: i64, max_inclusive: bool, min_inclusive: bool) -> Result<bool, DelverError> {
    let (min, max) = ordered(min, max);
    if min == max && !(max_inclusive && min_inclusive) {
        return Err(DelverError::EmptyRange { min, max });
    }
    let above_min = if min_inclusive { number >= min } else { number > min };
    let below_max = if max_inclusive { number <= max } else { number < max };
    Ok(above_min && below_max)
}

/// Clamp `value` into `min..=max`. Bounds given in reverse order are swapped.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Roll a random integer between `min` and `max` with selectable inclusivity.
///
/// # Errors
/// `EmptyRange` if the bounds leave no integer to pick.
pub fn random_int(min: i64, max: i64, max_inclusive: bool, min_inclusive: bool) -> Result<i64, DelverError> {
    let (min, max) = ordered(min, max);
    let low = if min_inclusive { Some(min) } else { min.checked_add(1) };
    let high = if max_inclusive { Some(max) } else { max.checked_sub(1) };
    match (low, high) {
        (Some(low), Some(high)) if low <= high => Ok(rand::rng().random_range(low..=high)),
        _ => Err(DelverError::EmptyRange { min, max }),
    }
}

/// Roll against a percentage chance (0-100).
///
/// `0` never succeeds and `100` always does.
///
/// # Errors
/// `ChanceOutOfRange` for percentages outside `0..=100`.
pub fn is_chance_successful(percentage: i64) -> Result<bool, DelverError> {
    if !(0..=100).contains(&percentage) {
        return Err(DelverError::ChanceOutOfRange(percentage));
    }
    Ok(rand::rng().random_range(0..100) < percentage)
}

/// Round `value` to `digits` decimal places.
///
/// When the scaling factor is too large to represent, `value` already carries
/// all the precision it can and is returned unchanged.
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let factor = i32::try_from(digits).map_or(f64::INFINITY, |exp| 10f64.powi(exp));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Straight-line distance between two grid points.
pub fn distance(x1: i64, y1: i64, x2: i64, y2: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let (dx, dy) = ((i128::from(x2) - i128::from(x1)) as f64, (i128::from(y2) - i128::from(y1)) as f64);
    dx.hypot(dy)
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a > b { (b, a) } else { (a, b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_between_inclusive_bounds() {
        assert!(is_between(1, 0, 10, true, true).unwrap());
        assert!(is_between(0, 0, 10, true, true).unwrap());
        assert!(is_between(10, 0, 10, true, true).unwrap());
        assert!(is_between(-5, -10, -2, true, true).unwrap());
        assert!(!is_between(11, 0, 10, true, true).unwrap());
    }

    #[test]
    fn is_between_swaps_reversed_bounds() {
        assert!(is_between(5, 10, 1, true, true).unwrap());
        assert!(is_between(5, 10, -1, true, true).unwrap());
    }

    #[test]
    fn is_between_exclusive_bounds() {
        assert!(!is_between(10, 1, 10, false, true).unwrap());
        assert!(!is_between(1, 1, 10, true, false).unwrap());
        assert!(is_between(2, 1, 10, false, false).unwrap());
    }

    #[test]
    fn is_between_rejects_empty_exclusive_range() {
        assert!(matches!(
            is_between(1, 1, 1, false, false),
            Err(DelverError::EmptyRange { min: 1, max: 1 })
        ));
        assert!(is_between(1, 1, 1, true, true).unwrap());
    }

    #[test]
    fn clamp_integers() {
        let value = 6;
        assert_eq!(clamp(value, 1, 5), 5);
        assert_eq!(clamp(value, 7, 10), 7);
        assert_eq!(clamp(value, 5, 5), 5);
        assert_eq!(clamp(value, -10, -2), -2);
        assert_eq!(clamp(value, 6, 7), 6);
        assert_eq!(clamp(value, 10, 1), 6);
    }

    #[test]
    fn clamp_floats() {
        let value = 3.14_f64;
        assert_eq!(clamp(value, 3.14, 10.0), 3.14);
        assert_eq!(clamp(value, 3.72, 10.0), 3.72);
        assert_eq!(clamp(value, 1.1, 2.12), 2.12);
        assert_eq!(clamp(value, -10.0, -5.3), -5.3);
    }

    #[test]
    fn random_int_covers_inclusive_range() {
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let roll = random_int(1, 100, true, true).unwrap();
            assert!((1..=100).contains(&roll));
            seen_min |= roll == 1;
            seen_max |= roll == 100;
        }
        assert!(seen_min && seen_max);
        assert!(random_int(-10, -5, true, true).unwrap() < 0);
    }

    #[test]
    fn random_int_respects_exclusive_bounds() {
        for _ in 0..200 {
            let roll = random_int(1, 4, false, false).unwrap();
            assert!((2..=3).contains(&roll));
        }
        assert_eq!(random_int(1, 2, false, true).unwrap(), 1);
        assert!(matches!(random_int(1, 2, false, false), Err(DelverError::EmptyRange { .. })));
    }

    #[test]
    fn chance_bounds() {
        assert!(is_chance_successful(100).unwrap());
        assert!(!is_chance_successful(0).unwrap());
        assert!(matches!(is_chance_successful(-1), Err(DelverError::ChanceOutOfRange(-1))));
        assert!(matches!(is_chance_successful(101), Err(DelverError::ChanceOutOfRange(101))));
    }

    #[test]
    fn chance_fifty_fifty_yields_both_outcomes() {
        let rolls: Vec<bool> = (0..60).map(|_| is_chance_successful(50).unwrap()).collect();
        assert!(rolls.contains(&true));
        assert!(rolls.contains(&false));
    }

    #[test]
    fn distance_between_points() {
        assert!((distance(2, 4, 4, 2) - 8f64.sqrt()).abs() < 1e-9);
        assert_eq!(distance(0, 0, 3, 4), 5.0);
    }

    #[test]
    fn distance_handles_extreme_coordinates() {
        let span = distance(i64::MIN, 0, i64::MAX, 0);
        assert!(span.is_finite());
        assert!((span - 2f64.powi(64)).abs() <= 2f64.powi(12));
        assert_eq!(distance(i64::MAX, i64::MAX, i64::MAX, i64::MAX), 0.0);
    }

    #[test]
    fn round_to_precision_rounds_to_digits() {
        let pi = 3.141_592;
        assert_eq!(round_to_precision(pi, 2), 3.14);
        assert_eq!(round_to_precision(pi, 3), 3.142);
        assert_eq!(round_to_precision(pi, 0), 3.0);
        assert!((round_to_precision(pi, 200) - pi).abs() < 1e-12);
        assert_eq!(round_to_precision(pi, 400), pi);
    }
}
