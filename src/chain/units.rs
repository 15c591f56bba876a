use alloy::primitives::U256;

/// Scales a raw token amount down by `decimals`, keeping full precision.
///
/// Operates on the decimal string representation of the amount, so
/// values with more digits than any fixed-width decimal type holds
/// still format exactly. Integral results keep a single trailing zero
/// ("1.0"), fractional results trim trailing zeros ("1.5").
pub fn format_units(amount: U256, decimals: u8) -> String {
    let raw = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return raw;
    }

    // Pad so there is always at least one integer digit.
    let padded = format!("{:0>width$}", raw, width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        format!("{}.0", int_part)
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}
