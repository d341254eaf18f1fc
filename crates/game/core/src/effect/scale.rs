//! Integer percentage arithmetic shared by the transforms.
//!
//! Percentages are whole numbers (`10` = +10%, `-30` = -30%). All math runs in
//! `i64` so large stats cannot overflow, and results saturate into `u32`.

fn scaled_numerator(value: u32, percent: i32) -> i64 {
    i64::from(value) * (100 + i64::from(percent))
}

fn saturate(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// `floor(value * (100 + percent) / 100)`.
pub fn percent_floor(value: u32, percent: i32) -> u32 {
    saturate(scaled_numerator(value, percent).div_euclid(100))
}

/// `ceil(value * (100 + percent) / 100)`.
///
/// A positive bonus on a non-zero value therefore always adds at least one.
pub fn percent_ceil(value: u32, percent: i32) -> u32 {
    let numerator = scaled_numerator(value, percent);
    let rounded = numerator.div_euclid(100) + i64::from(numerator.rem_euclid(100) != 0);
    saturate(rounded)
}

/// Floors a percentage reduction and clamps it to a positive minimum.
pub fn percent_floor_min(value: u32, percent: i32, min: u32) -> u32 {
    percent_floor(value, percent).max(min)
}

/// Adds a signed delta, saturating at zero and `u32::MAX`.
pub fn offset(value: u32, delta: i32) -> u32 {
    saturate(i64::from(value) + i64::from(delta))
}

/// Scales a float stat by a percentage, never going negative.
pub fn percent_f32(value: f32, percent: i32) -> f32 {
    (value * (100 + percent) as f32 / 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_down() {
        assert_eq!(percent_floor(10, 10), 11);
        assert_eq!(percent_floor(15, 10), 16); // 16.5
        assert_eq!(percent_floor(1000, -30), 700);
        assert_eq!(percent_floor(7, -15), 5); // 5.95
    }

    #[test]
    fn ceil_rounds_up() {
        assert_eq!(percent_ceil(10, 10), 11);
        assert_eq!(percent_ceil(10, 30), 13);
        assert_eq!(percent_ceil(3, 10), 4); // 3.3
        assert_eq!(percent_ceil(0, 50), 0);
    }

    #[test]
    fn reductions_never_reach_zero() {
        assert_eq!(percent_floor_min(100, -100, 20), 20);
        assert_eq!(percent_floor_min(100, -250, 20), 20);
    }

    #[test]
    fn saturates() {
        assert_eq!(offset(3, -10), 0);
        assert_eq!(percent_floor(u32::MAX, 100), u32::MAX);
        assert_eq!(percent_f32(2.0, -150), 0.0);
    }
}
