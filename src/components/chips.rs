use crate::styles::theme;
use ratatui::text::{Line, Span};

/// Row of filter chips with one selected
pub fn chip_row<'a>(labels: impl IntoIterator<Item = &'a str>, selected: usize) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let is_selected = i == selected;
        let text = if is_selected {
            format!(" ✓ {} ", label)
        } else {
            format!(" {} ", label)
        };
        spans.push(Span::styled(text, t.chip_style(is_selected)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_chip_is_marked() {
        let line = chip_row(["Paisajes", "Playas"], 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Paisajes   ✓ Playas ");
    }
}
