// crates/worldmap-core/src/text.rs
//! Text helpers: query folding, number formatting and HTML escaping.

/// Fold a string for case-insensitive comparison.
///
/// Only case is folded; accents are significant, so `"cote"` does not match
/// `"Côte d'Ivoire"`.
///
/// # Examples
/// ```rust
/// use worldmap_core::text::fold_query;
///
/// assert_eq!(fold_query("FRAnce"), "france");
/// ```
pub fn fold_query(s: &str) -> String {
    s.to_lowercase()
}

/// Format a number the way `Number.prototype.toLocaleString("en-US")` does:
/// thousands separators, at most three fraction digits, trailing zeros
/// dropped.
///
/// The sign survives rounding, so `-0.0001` renders as `-0`. Non-finite
/// values are rendered as-is (`NaN`, `inf`).
///
/// # Examples
/// ```rust
/// use worldmap_core::text::format_number;
///
/// assert_eq!(format_number(1_000_000_000.0), "1,000,000,000");
/// assert_eq!(format_number(40_886.25), "40,886.25");
/// assert_eq!(format_number(-1234.5678), "-1,234.568");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 4);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Escape text for interpolation into popup/result markup.
///
/// Apostrophes are left alone: popup attributes are always double-quoted.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(12_345.0), "12,345");
        assert_eq!(format_number(2_782_905_000_000.0), "2,782,905,000,000");
        assert_eq!(format_number(1.5e12), "1,500,000,000,000");
    }

    #[test]
    fn formats_like_locale_string() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0001), "-0");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(999.9996), "1,000");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn escapes_markup_but_not_apostrophes() {
        assert_eq!(
            escape_html("<b>\"Côte d'Ivoire\" & co</b>"),
            "&lt;b&gt;&quot;Côte d'Ivoire&quot; &amp; co&lt;/b&gt;"
        );
    }
}
