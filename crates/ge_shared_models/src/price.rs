use crate::Error;

/// Parses a Grand Exchange price such as `"123"`, `"1,234"`, `"1.2k"`,
/// `"3m"` or `"-4.5b"`.
///
/// Everything except digits, `-`, `.` and the lowercase unit letters
/// `k`/`m`/`b` is dropped first. A trailing unit scales the decimal prefix
/// by one thousand, one million or one billion and the result is truncated
/// toward zero; without a unit the whole string must be an integer.
pub fn parse_price(text: &str) -> Result<i64, Error> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'k' | 'm' | 'b'))
        .collect();

    let multiple = match cleaned.chars().last() {
        Some('k') => 1_000f64,
        Some('m') => 1_000_000f64,
        Some('b') => 1_000_000_000f64,
        _ => {
            return cleaned
                .parse::<i64>()
                .map_err(|e| Error::format(format!("invalid price {text:?}: {e}")));
        }
    };

    let amount = cleaned[..cleaned.len() - 1]
        .parse::<f64>()
        .map_err(|e| Error::format(format!("invalid price {text:?}: {e}")))?;

    Ok((amount * multiple) as i64)
}

/// Parses a percentage string like `"+12.34%"` into a ratio, `1.0` being 100%.
pub fn parse_percent(text: &str) -> Result<f64, Error> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.'))
        .collect();

    cleaned
        .parse::<f64>()
        .map(|percent| percent / 100f64)
        .map_err(|e| Error::format(format!("invalid percentage {text:?}: {e}")))
}
