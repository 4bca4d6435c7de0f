//! Text measurement heuristics for backends without glyph metrics.

/// Average advance of a glyph relative to the font size.
const AVG_GLYPH_WIDTH: f64 = 0.60;

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring
/// that works without a registered font).
pub fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    ((text.chars().count() as f64) * font_px * AVG_GLYPH_WIDTH).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_chars_and_size() {
        assert_eq!(estimate_text_width("", 12.0), 0.0);
        assert_eq!(estimate_text_width("abc", 10.0), 18.0);
        assert_eq!(estimate_text_width("äöü", 10.0), 18.0);
        assert!(estimate_text_width("abc", 20.0) > estimate_text_width("abc", 12.0));
    }
}
