//! Small rendering helpers shared by the TUI views.

use ratatui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

/// Truncate `text` to at most `max_graphemes` graphemes, appending `…` when
/// anything was cut. Grapheme-aware so emoji avatars and accented names never
/// split mid-cluster.
pub fn truncate_with_ellipsis(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let kept: String = graphemes.by_ref().take(max_graphemes).collect();
    if graphemes.next().is_some() {
        format!("{kept}…")
    } else {
        kept
    }
}

/// Parse a `#RGB` or `#RRGGBB` hex color into a terminal color.
///
/// The classification tables use both forms (`#666` for the fallback,
/// `#4CAF50` for the rest). Anything unparseable falls back to gray rather
/// than failing a draw.
pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(Color::Gray)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    let (r, g, b) = match digits.len() {
        3 => {
            let nibble = |i| u8::from_str_radix(digits.get(i..=i)?, 16).ok();
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let byte = |i| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
            (byte(0)?, byte(2)?, byte(4)?)
        }
        _ => return None,
    };
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("Standup", 10), "Standup");
        assert_eq!(truncate_with_ellipsis("", 4), "");
    }

    #[test]
    fn long_text_gains_an_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Review Q4 Financial Reports", 9), "Review Q4…");
    }

    #[test]
    fn truncation_counts_graphemes_not_bytes() {
        assert_eq!(truncate_with_ellipsis("👩🏽‍💻👨‍👩‍👧", 1), "👩🏽‍💻…");
    }

    #[test]
    fn parses_both_hex_forms() {
        assert_eq!(hex_color("#4CAF50"), Color::Rgb(0x4C, 0xAF, 0x50));
        assert_eq!(hex_color("#666"), Color::Rgb(0x66, 0x66, 0x66));
    }

    #[test]
    fn invalid_hex_falls_back_to_gray() {
        assert_eq!(hex_color("red"), Color::Gray);
        assert_eq!(hex_color("#12345"), Color::Gray);
        assert_eq!(hex_color("#GGHHII"), Color::Gray);
    }
}
