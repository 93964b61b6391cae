//! Line-oriented terminal backend for the screen contracts.
//!
//! Renders the current [`ScreenView`] as plain text and parses one input per
//! line. The scripted constructor feeds a fixed input sequence instead of
//! stdin so sessions can run unattended.

use std::io::{self, BufRead, Cursor, Write};

use anyhow::{Context, Result};
use basecraft_core::RowIndex;
use basecraft_rendering::{
    ListPresentation, ScreenBackend, ScreenFlow, ScreenInput, ScreenView, SummaryPresentation,
};

/// Approximate glyph width used to map panel units onto character columns.
const UNITS_PER_CHARACTER: f32 = 6.0;

pub(crate) struct TerminalBackend {
    input: Box<dyn BufRead>,
}

impl TerminalBackend {
    /// Creates a backend reading player input from stdin.
    pub(crate) fn interactive() -> Self {
        Self {
            input: Box::new(io::stdin().lock()),
        }
    }

    /// Creates a backend replaying a comma-separated input sequence.
    pub(crate) fn scripted(script: &str) -> Self {
        let lines = script
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            input: Box::new(Cursor::new(lines)),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading player input")?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_owned()))
        }
    }
}

impl ScreenBackend for TerminalBackend {
    fn run<F>(mut self, mut view: ScreenView, mut update: F) -> Result<()>
    where
        F: FnMut(ScreenInput, &mut ScreenView) -> ScreenFlow + 'static,
    {
        loop {
            render(&view)?;
            let Some(line) = self.next_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            let Some(input) = parse_input(&line) else {
                println!("Unrecognized input '{line}' (row number, 'ok', 'back' or 'quit').");
                continue;
            };
            if update(input, &mut view) == ScreenFlow::Closed {
                break;
            }
        }
        Ok(())
    }
}

/// Maps one trimmed input line onto a screen input.
pub(crate) fn parse_input(line: &str) -> Option<ScreenInput> {
    match line {
        "ok" | "done" | "start" => Some(ScreenInput::Acknowledge),
        "back" | "cancel" => Some(ScreenInput::Cancel),
        "quit" | "exit" => Some(ScreenInput::Quit),
        other => other
            .parse::<u32>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .map(|index| ScreenInput::Select(RowIndex::new(index))),
    }
}

fn render(view: &ScreenView) -> Result<()> {
    match view {
        ScreenView::List(list) => render_list(list),
        ScreenView::Summary(summary) => render_summary(summary),
    }
    io::stdout().flush().context("flushing screen output")
}

fn render_list(list: &ListPresentation) {
    let name_width = (list.layout.item_column_width() / UNITS_PER_CHARACTER) as usize;
    println!();
    println!("=== {} ===", list.title);
    println!("     {:<name_width$} {}", list.item_header, list.category_header);
    for (position, row) in list.rows.iter().enumerate() {
        println!("{:>3}. {:<name_width$} {}", position + 1, row.name, row.category);
    }
    if list.rows.is_empty() {
        println!("     (nothing can be produced right now)");
    }
    println!("(row number to select, 'ok' to close, 'quit' to exit)");
}

fn render_summary(summary: &SummaryPresentation) {
    println!();
    println!("=== {} ===", summary.title);
    for line in &summary.lines {
        println!("  {line}");
    }
    println!("('start' to begin production, 'back' to cancel)");
}
