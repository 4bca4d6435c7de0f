//! Numeric helpers shared by the transform and the renderer: cell coercion,
//! tick-unit rounding, and locale-aware tick labels.

use num_format::{Locale, ToFormattedString};

/// Coerce a table cell into a number.
///
/// Surrounding whitespace is ignored. Anything that is not a finite float in
/// standard notation (`12`, `-3.5`, `1e3`, `+7`) yields `None`, which callers
/// treat as "skip this cell". Empty cells are never numbers.
pub fn try_parse_number(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Round to the nearest integer, halves towards positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Number of decimal digits of `n`, ignoring the sign.
fn digit_count(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |d| d + 1)
}

/// Round a raw tick unit down to its leading digit times a power of ten.
///
/// Single-digit units are kept as-is: `7 -> 7`, `47 -> 40`, `238 -> 200`.
pub fn round_tick_unit(raw: i64) -> i64 {
    let digits = digit_count(raw);
    if digits > 1 {
        let pow = 10i64.pow(digits - 1);
        (raw / pow) * pow
    } else {
        raw
    }
}

/// Value step between two gridlines for a given absolute maximum.
///
/// `ceil(abs_max / 3)` rounded with [`round_tick_unit`], never below 1.
pub fn tick_unit(abs_max: i64) -> i64 {
    let raw = (abs_max as f64 / 3.0).ceil() as i64;
    round_tick_unit(raw).max(1)
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Unknown tags fall back to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Format a tick label. Without a locale the plain integer is used (`12000`);
/// with one, thousands are grouped (`12,000` / `12.000`).
pub fn format_tick_label(value: i64, locale: Option<&str>) -> String {
    match locale {
        Some(tag) => value.to_formatted_string(map_locale(tag)),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(try_parse_number("5"), Some(5.0));
        assert_eq!(try_parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(try_parse_number("1e3"), Some(1000.0));
        assert_eq!(try_parse_number("+7"), Some(7.0));
    }

    #[test]
    fn rejects_text_and_non_finite() {
        assert_eq!(try_parse_number(""), None);
        assert_eq!(try_parse_number("   "), None);
        assert_eq!(try_parse_number("abc"), None);
        assert_eq!(try_parse_number("12abc"), None);
        assert_eq!(try_parse_number("inf"), None);
        assert_eq!(try_parse_number("NaN"), None);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(1.4), 1.0);
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-238), 3);
    }

    #[test]
    fn rounds_to_leading_digit() {
        assert_eq!(round_tick_unit(7), 7);
        assert_eq!(round_tick_unit(47), 40);
        assert_eq!(round_tick_unit(80), 80);
        assert_eq!(round_tick_unit(238), 200);
        assert_eq!(round_tick_unit(1999), 1000);
    }

    #[test]
    fn tick_unit_follows_ceil_then_round_down() {
        // ceil(238 / 3) = 80, two digits, multiple of 10 -> 80
        assert_eq!(tick_unit(238), 80);
        // ceil(5 / 3) = 2
        assert_eq!(tick_unit(5), 2);
        // ceil(100 / 3) = 34 -> 30
        assert_eq!(tick_unit(100), 30);
        assert_eq!(tick_unit(0), 1);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick_label(12000, None), "12000");
        assert_eq!(format_tick_label(-40, None), "-40");
        assert_eq!(format_tick_label(12000, Some("en")), "12,000");
        assert_eq!(format_tick_label(12000, Some("de")), "12.000");
    }
}
