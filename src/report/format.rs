//! Compact money labels for chart axes and summary tables

/// SI prefixes from yocto (1e-24) to yotta (1e24)
const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Significant digits kept before trailing zeros are trimmed
const PRECISION: usize = 6;

/// Format a value with an SI prefix, trimming insignificant zeros
/// (`1500000` → `1.5M`, `250000` → `250k`).
pub fn format_si(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // `{:e}` yields e.g. "1.50000e9"; mantissa digits and exponent are split out
    let formatted = format!("{:.*e}", PRECISION - 1, value.abs());
    let (mantissa, exponent) = match formatted.split_once('e') {
        Some(parts) => parts,
        None => return value.to_string(),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return value.to_string(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let prefix_exponent = (exponent.div_euclid(3)).clamp(-8, 8) * 3;
    let integer_len = exponent - prefix_exponent + 1;
    let n = digits.len() as i32;

    let body = if integer_len >= n {
        format!("{}{}", digits, "0".repeat((integer_len - n) as usize))
    } else if integer_len > 0 {
        let (int_part, frac_part) = digits.split_at(integer_len as usize);
        format!("{}.{}", int_part, frac_part)
    } else {
        format!("0.{}{}", "0".repeat((-integer_len) as usize), digits)
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let prefix = PREFIXES[(prefix_exponent / 3 + 8) as usize];
    format!("{}{}{}", sign, trim_zeros(&body), prefix)
}

fn trim_zeros(body: &str) -> String {
    if body.contains('.') {
        body.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        body.to_string()
    }
}

/// Axis label for money values: SI format with `M`/`G`/`T` spelled out
/// as ` mil`/` bil`/` tril`.
pub fn format_tick_label(value: f64) -> String {
    format_si(value)
        .replacen('M', " mil", 1)
        .replacen('G', " bil", 1)
        .replacen('T', " tril", 1)
}
