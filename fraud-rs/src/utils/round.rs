/// Round `value` to `decimals` places (half away from zero)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.30 * 0.7, 3), 0.21);
        assert_eq!(round_to(1.0 - 0.21, 3), 0.79);
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(0.94876 * 100.0, 2), 94.88);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
