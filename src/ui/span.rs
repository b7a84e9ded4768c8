use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

pub type SpanLine = Vec<Span>;

pub fn line_width(line: &[Span]) -> usize {
    line.iter().map(Span::width).sum()
}

/// Cuts a line down to `max_width` display columns, dropping spans that no
/// longer fit. Line breaks inside spans are removed.
pub fn clip_line(line: &[Span], max_width: usize) -> SpanLine {
    let mut used = 0usize;
    let mut out = SpanLine::new();
    for span in line {
        if used >= max_width {
            break;
        }
        let clipped = clip_to_width(&span.text, max_width - used);
        if clipped.is_empty() {
            continue;
        }
        used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        out.push(Span::styled(clipped, span.style));
    }
    out
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}
