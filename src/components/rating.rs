use crate::data::MAX_RATING;
use crate::styles::theme;
use ratatui::text::{Line, Span};

const STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// Row of five stars, the first `rating` filled
pub fn stars(rating: u8) -> Line<'static> {
    let t = theme();
    (1..=MAX_RATING)
        .map(|n| {
            let active = n <= rating;
            Span::styled(
                if active { STAR } else { EMPTY_STAR },
                t.star_style(active),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

/// Spaced stars for the review composer
pub fn large_stars(rating: u8) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, span) in stars(rating).spans.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(span);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_stars_fill_rating() {
        assert_eq!(text(&stars(3)), "★★★☆☆");
        assert_eq!(text(&stars(0)), "☆☆☆☆☆");
        assert_eq!(text(&stars(5)), "★★★★★");
    }

    #[test]
    fn test_large_stars_are_spaced() {
        assert_eq!(text(&large_stars(1)), "★  ☆  ☆  ☆  ☆");
    }
}
