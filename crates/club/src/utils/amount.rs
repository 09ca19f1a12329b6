// club/utils/amount.rs

//! 18-decimal fixed-point amounts.
//!
//! Every eligibility comparison in the flows happens on base-unit [`U256`]
//! values; the base-unit value is the single canonical representation, and
//! decimal strings exist only at the configuration and display boundaries.
//! Floats never feed an eligibility decision.

// external dependencies
use alloy_primitives::U256;

// local dependencies
use crate::{constants::DECIMALS, errors::FlowError};

const SECONDS_PER_DAY: u64 = 86_400;

fn scale() -> U256 {
    U256::from(10).pow(U256::from(DECIMALS))
}

/// Whole tokens to base units. Convenience for configuration values.
pub fn units(whole: u64) -> U256 {
    U256::from(whole) * scale()
}

/// Parse a decimal string ("369000", "0.369") into base units.
pub fn parse_units(dec: &str) -> Result<U256, FlowError> {
    let invalid = || FlowError::InvalidAmount(dec.to_string());

    let (int_part, frac_part) = match dec.split_once('.') {
        Some((i, f)) => (i, f),
        None => (dec, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if frac_part.len() > DECIMALS as usize {
        // more precision than the token carries
        return Err(invalid());
    }

    let int: U256 = if int_part.is_empty() {
        U256::ZERO
    } else {
        int_part.parse().map_err(|_| invalid())?
    };

    let frac: U256 = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{frac_part:0<width$}", width = DECIMALS as usize);
        padded.parse().map_err(|_| invalid())?
    };

    int.checked_mul(scale())
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(invalid)
}

/// Base units to a full-precision decimal string, trailing zeros trimmed.
pub fn format_units(value: U256) -> String {
    let int = value / scale();
    let rem = value % scale();

    if rem.is_zero() {
        return int.to_string();
    }

    let digits = rem.to_string();
    let mut frac = "0".repeat(DECIMALS as usize - digits.len());
    frac.push_str(&digits);
    let frac = frac.trim_end_matches('0');
    format!("{int}.{frac}")
}

/// Base units to a decimal string with exactly `places` fractional digits,
/// truncating. Used for the 4- and 6-decimal reward displays.
pub fn format_units_fixed(value: U256, places: usize) -> String {
    let int = value / scale();
    if places == 0 {
        return int.to_string();
    }

    let digits = (value % scale()).to_string();
    let mut frac = "0".repeat(DECIMALS as usize - digits.len());
    frac.push_str(&digits);
    frac.truncate(places);
    format!("{int}.{frac}")
}

/// Per-second reward rate ("0.369") to base units accrued per day.
pub fn per_day(rate_per_sec: &str) -> Result<U256, FlowError> {
    parse_units(rate_per_sec)?
        .checked_mul(U256::from(SECONDS_PER_DAY))
        .ok_or_else(|| FlowError::InvalidAmount(rate_per_sec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_units("369000").unwrap(), units(369_000));
        assert_eq!(
            parse_units("0.369").unwrap(),
            U256::from(369_000_000_000_000_000u64)
        );
        assert_eq!(parse_units(".5").unwrap(), units(1) / U256::from(2));
        assert_eq!(parse_units("0").unwrap(), U256::ZERO);
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(parse_units("").is_err());
        assert!(parse_units(".").is_err());
        assert!(parse_units("1.2.3").is_err());
        assert!(parse_units("abc").is_err());
        // 19 fractional digits exceeds token precision
        assert!(parse_units("0.0000000000000000001").is_err());
    }

    #[test]
    fn formats_round_trip() {
        assert_eq!(format_units(units(369_000)), "369000");
        assert_eq!(format_units(parse_units("0.369").unwrap()), "0.369");
        assert_eq!(format_units(U256::ZERO), "0");
        assert_eq!(format_units(U256::from(1)), "0.000000000000000001");
    }

    #[test]
    fn fixed_precision_truncates() {
        let v = parse_units("1.23456789").unwrap();
        assert_eq!(format_units_fixed(v, 4), "1.2345");
        assert_eq!(format_units_fixed(v, 6), "1.234567");
        assert_eq!(format_units_fixed(units(2), 4), "2.0000");
        assert_eq!(format_units_fixed(v, 0), "1");
    }

    #[test]
    fn per_day_matches_the_panel_math() {
        // 0.369 PLS/s ≈ 31,881.6 PLS/day
        assert_eq!(per_day("0.369").unwrap(), parse_units("31881.6").unwrap());
    }
}
