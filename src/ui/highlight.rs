use crate::core::search::fuzzy::indices_to_ranges;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;

/// Splits `text` into spans, styling the chars at `positions` (char indices,
/// strictly increasing) with `highlight_style` layered over `base_style`.
pub fn render_positions(
    text: &str,
    positions: &[usize],
    base_style: Style,
    highlight_style: Style,
) -> SpanLine {
    if positions.is_empty() {
        return vec![Span::styled(text, base_style)];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut spans = SpanLine::new();
    let mut cursor = 0usize;
    for (start, end) in indices_to_ranges(positions) {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > cursor {
            spans.push(Span::styled(
                chars[cursor..start].iter().collect::<String>(),
                base_style,
            ));
        }
        if end > start.max(cursor) {
            spans.push(Span::styled(
                chars[start.max(cursor)..end].iter().collect::<String>(),
                base_style.merge(highlight_style),
            ));
        }
        cursor = end.max(cursor);
    }
    if cursor < chars.len() {
        spans.push(Span::styled(
            chars[cursor..].iter().collect::<String>(),
            base_style,
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(text, base_style));
    }

    spans
}
