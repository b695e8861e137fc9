//! pt-BR number formatting helpers.
//!
//! The dashboard renders Brazilian-locale numbers: `.` as the thousands
//! separator and `,` as the decimal separator. Fixed-precision metric
//! values (scores, percentages) keep the plain `.` decimal point, matching
//! how the deployed panel has always displayed them.

/// Insert `.` thousands separators into a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a value as a pt-BR grouped integer, e.g. `1234567.0` → `"1.234.567"`.
pub fn grouped_int(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}", sign, group_digits(&digits))
}

/// Format a value with pt-BR grouping and a fixed number of decimals,
/// e.g. `1234.5` with 2 decimals → `"1.234,50"`.
pub fn grouped_decimal(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, value.abs());
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{},{}", sign, group_digits(int_part), frac_part)
        }
        None => format!("{}{}", sign, group_digits(&fixed)),
    }
}

/// Render a threshold for a legend label: shortest representation,
/// no grouping, `.` decimal point (`0.48` → `"0.48"`, `800.0` → `"800"`).
pub fn legend_number(value: f64) -> String {
    value.to_string()
}

/// Display form of an all-caps municipality name: first letter uppercase,
/// the rest lowercase.
pub fn display_municipio(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.as_str().to_lowercase();
            format!("{}{}", first.to_uppercase(), rest)
        }
        None => String::new(),
    }
}
