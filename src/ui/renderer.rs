use crate::core::search::fuzzy::{Matcher, SCORE_MIN};
use crate::core::search::report::format_score;
use crate::core::state::{DEFAULT_VISIBLE_ROWS, SelectionState};
use crate::terminal::Surface;
use crate::ui::highlight::render_positions;
use crate::ui::span::{Span, SpanLine, clip_line, line_width};
use crate::ui::style::{Color, Style};
use std::io;

pub const PROMPT: &str = "> ";
const EMPTY_ROW: &str = "...";

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub visible_rows: usize,
    pub highlight: Color,
    pub show_scores: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            visible_rows: DEFAULT_VISIBLE_ROWS,
            highlight: Color::Yellow,
            show_scores: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderFrame {
    pub prompt: SpanLine,
    pub rows: Vec<SpanLine>,
    /// Column the cursor returns to after painting (end of the prompt).
    pub cursor_col: u16,
}

/// Draws the prompt line followed by a fixed block of candidate rows
/// directly below it. The block height never changes, so each repaint
/// overwrites the previous one in place.
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    config: RendererConfig,
    // Highlight positions are recomputed per visible row on every redraw.
    matcher: Matcher,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            matcher: Matcher::new(),
        }
    }

    pub fn frame(&mut self, state: &SelectionState, width: u16) -> RenderFrame {
        // One spare column so the terminal never auto-wraps a full row.
        let max_width = (width as usize).saturating_sub(1).max(1);
        let highlight = Style::new().color(self.config.highlight);
        let query = state.query();

        let prompt = clip_line(&[Span::new(format!("{PROMPT}{query}"))], max_width);
        let cursor_col = line_width(&prompt).min(u16::MAX as usize) as u16;

        let mut rows = Vec::with_capacity(self.config.visible_rows);
        for entry in state.visible_matches().into_iter().take(self.config.visible_rows) {
            let base = if entry.selected {
                Style::new().inverted()
            } else {
                Style::new()
            };
            let positions = if query.is_empty() || entry.score == SCORE_MIN {
                Vec::new()
            } else {
                self.matcher.positions(query, entry.text)
            };

            let mut line = SpanLine::new();
            if self.config.show_scores {
                line.push(Span::styled(
                    format!("{} ", format_score(entry.score)),
                    base,
                ));
            }
            line.extend(render_positions(entry.text, &positions, base, highlight));
            rows.push(clip_line(&line, max_width));
        }
        while rows.len() < self.config.visible_rows {
            rows.push(vec![Span::new(EMPTY_ROW)]);
        }

        RenderFrame {
            prompt,
            rows,
            cursor_col,
        }
    }

    pub fn render<S: Surface>(
        &mut self,
        state: &SelectionState,
        surface: &mut S,
    ) -> io::Result<()> {
        let width = surface.width();
        let frame = self.frame(state, width);
        self.paint(&frame, surface)
    }

    pub fn paint<S: Surface>(&self, frame: &RenderFrame, surface: &mut S) -> io::Result<()> {
        surface.move_to_column(0)?;
        paint_line(&frame.prompt, surface)?;
        surface.clear_line()?;

        for row in &frame.rows {
            surface.next_line()?;
            surface.clear_line()?;
            paint_line(row, surface)?;
        }

        surface.move_up(frame.rows.len() as u16)?;
        surface.move_to_column(frame.cursor_col)?;
        surface.flush()
    }

    /// Erases the prompt and the row block, leaving the cursor at column 0
    /// of the prompt line.
    pub fn clear<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        surface.reset_style()?;
        surface.move_to_column(0)?;
        surface.clear_line()?;
        for _ in 0..self.config.visible_rows {
            surface.next_line()?;
            surface.clear_line()?;
        }
        surface.move_up(self.config.visible_rows as u16)?;
        surface.move_to_column(0)?;
        surface.flush()
    }
}

fn paint_line<S: Surface>(line: &[Span], surface: &mut S) -> io::Result<()> {
    for span in line {
        surface.set_inverted(span.style.inverted)?;
        surface.set_foreground(span.style.color.unwrap_or_default())?;
        surface.print(&span.text)?;
    }
    surface.reset_style()
}
