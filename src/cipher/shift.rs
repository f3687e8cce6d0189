// src/cipher/shift.rs

/// Fallback shift when an orbital string carries no usable numbers.
pub const DEFAULT_SHIFT: i64 = 1;

/// Derives the rotation amount for an element:
/// sum of every integer embedded in `orbital`, times `outer_shell_count`.
///
/// "3d5 4s2" with 2 outer electrons -> (3 + 5 + 4 + 2) * 2 = 28.
///
/// Never fails. No digits, or a sum too large to represent, yields
/// [`DEFAULT_SHIFT`]. A zero outer shell count yields 0 (identity rotation),
/// which is distinct from the fallback.
pub fn derive_shift(orbital: &str, outer_shell_count: u32) -> i64 {
    let mut found = false;
    let mut sum: i64 = 0;

    for run in orbital
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
    {
        found = true;
        let Some(next) = run.parse::<i64>().ok().and_then(|n| sum.checked_add(n)) else {
            log::warn!("Unparsable orbital '{}', using default shift", orbital);
            return DEFAULT_SHIFT;
        };
        sum = next;
    }

    if !found {
        return DEFAULT_SHIFT;
    }

    sum.checked_mul(i64::from(outer_shell_count))
        .unwrap_or(DEFAULT_SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_times_shell() {
        assert_eq!(derive_shift("1s1", 1), 2);
        assert_eq!(derive_shift("3d5 4s2", 2), 28);
        assert_eq!(derive_shift("2s2 2p6", 8), 96);
        // multi-digit runs count as one number
        assert_eq!(derive_shift("3d10 4s1", 1), 18);
        assert_eq!(derive_shift("4d10", 10), 140);
    }

    #[test]
    fn test_no_digits_defaults_to_one() {
        assert_eq!(derive_shift("", 5), DEFAULT_SHIFT);
        assert_eq!(derive_shift("sp d f", 3), DEFAULT_SHIFT);
    }

    #[test]
    fn test_zero_shell_gives_zero() {
        assert_eq!(derive_shift("1s1", 0), 0);
        // no digits still wins over the zero multiplier
        assert_eq!(derive_shift("s", 0), DEFAULT_SHIFT);
    }

    #[test]
    fn test_overflow_defaults_to_one() {
        assert_eq!(derive_shift("99999999999999999999999", 1), DEFAULT_SHIFT);
        assert_eq!(derive_shift("9223372036854775807", 2), DEFAULT_SHIFT);
    }
}
