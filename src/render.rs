// File: src/render.rs
//! Terminal presentation of a [`Report`].
//!
//! The renderer owns its output sink behind a mutex. Every render call holds
//! the guard for its whole duration, so reports produced on different threads
//! come out whole instead of interleaved.

use crate::config::ReportConfig;
use crate::core::types::Annotation;
use crate::error::{BiasError, Result};
use crate::report::{Palette, Report};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use std::io::Write;
use std::sync::Mutex;

const TITLE_WIDTH: usize = 22;

pub struct TerminalRenderer<W: Write> {
    sink: Mutex<W>,
    palette: Palette,
    config: ReportConfig,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(sink: W, config: ReportConfig) -> Self {
        Self {
            sink: Mutex::new(sink),
            palette: Palette::default(),
            config,
        }
    }

    /// Writes all report sections under `heading`.
    pub fn render(&self, heading: &str, report: &Report) -> Result<()> {
        let mut sink = self.sink.lock().map_err(|_| BiasError::RenderLockPoisoned)?;
        let out = &mut *sink;

        writeln!(out, "=== {} ===", heading)?;

        writeln!(out, "\nHighlighted text:")?;
        self.write_highlighted(out, &report.analysis.annotations)?;
        writeln!(out)?;

        if report.analysis.counts.is_empty() {
            writeln!(out, "\nNo bias-indicative words detected.")?;
            writeln!(out)?;
            return Ok(out.flush()?);
        }

        writeln!(out, "\nBias category breakdown:")?;
        let max = report.analysis.counts.values().copied().max().unwrap_or(1);
        for (category, &count) in &report.analysis.counts {
            let cells = bar_cells(count, max, self.config.bar_width);
            write!(out, "  {:<width$} ", category.title(), width = TITLE_WIDTH)?;
            if self.config.color {
                let color = parse_hex(self.palette.style_for(*category).color);
                queue!(out, SetForegroundColor(color), Print("█".repeat(cells)), ResetColor)?;
            } else {
                write!(out, "{}", "#".repeat(cells))?;
            }
            writeln!(out, " {}", count)?;
        }

        writeln!(out, "\nBias summary:")?;
        writeln!(out, "  {:<width$} {:>5}  Explanation", "Category", "Words", width = TITLE_WIDTH)?;
        for row in &report.summary {
            writeln!(
                out,
                "  {:<width$} {:>5}  {}",
                row.title,
                row.count,
                row.explanation,
                width = TITLE_WIDTH
            )?;
        }

        writeln!(out, "\nMost frequent biased words:")?;
        for entry in report.word_frequency.iter().take(self.config.top_words) {
            writeln!(out, "  {:<20} {}", entry.word, entry.count)?;
        }
        writeln!(out)?;

        Ok(out.flush()?)
    }

    fn write_highlighted(&self, out: &mut W, annotations: &[Annotation]) -> Result<()> {
        for (i, annotation) in annotations.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            let word = &annotation.token.text;
            match annotation.category {
                Some(category) if self.config.color => {
                    let color = parse_hex(self.palette.style_for(category).color);
                    queue!(
                        out,
                        SetBackgroundColor(color),
                        SetForegroundColor(Color::Black),
                        Print(word),
                        ResetColor
                    )?;
                }
                Some(category) => write!(out, "[{}|{}]", word, category.title())?,
                None => write!(out, "{}", word)?,
            }
        }
        Ok(())
    }

    /// Returns the sink, e.g. to inspect buffered output.
    pub fn into_inner(self) -> Result<W> {
        self.sink.into_inner().map_err(|_| BiasError::RenderLockPoisoned)
    }
}

/// Bar length scaled so the largest count spans `width` cells. A non-zero
/// count always gets at least one cell.
fn bar_cells(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count * width) / max).max(1)
}

/// "#rrggbb" to an RGB color; anything malformed renders yellow.
fn parse_hex(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Yellow,
    }
}
