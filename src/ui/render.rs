//! Table and notification drawing.
//!
//! The table is a fixed three-column box centered in the terminal:
//!
//! ```text
//! ┌bundle.bndl──────┬────────────┬───────────┐
//! │ Name            │ Size       │ Offset    │
//! ├─────────────────┼────────────┼───────────┤
//! │player.png       │ 1.5kB      │ 40        │
//! │README           │ 999 bytes  │ 1540      │
//! └─────────────────┴────────────┴───────────┘
//! ```
//!
//! Every cell is produced by a pure function of the record so that the
//! startup draw and later selection repaints emit identical text. Widths are
//! display columns, so wide characters cannot push the separators out of
//! line.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::bndl::{ArchiveTable, DISPLAY_NAME_MAX, FileRecord};

use super::model::SelectionChange;
use super::notification::{Notification, NotificationKind};

pub const NAME_WIDTH: usize = DISPLAY_NAME_MAX;
pub const SIZE_WIDTH: usize = 12;
pub const OFFSET_WIDTH: usize = 11;
pub const TABLE_WIDTH: u16 = (NAME_WIDTH + SIZE_WIDTH + OFFSET_WIDTH + 4) as u16;
/// Top border, column headings and the separator below them
pub const HEADER_ROWS: u16 = 3;

const SIZE_SEP: usize = 1 + NAME_WIDTH;
const OFFSET_SEP: usize = SIZE_SEP + 1 + SIZE_WIDTH;

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

/// Format a byte count for display.
///
/// Thresholds are decimal and strict: exactly 1000 bytes is still
/// `"1000 bytes"`.
pub fn humanized_size(size: u64) -> String {
    if size > BILLION {
        format!("{:.1}GB", size as f64 / BILLION as f64)
    } else if size > MILLION {
        format!("{:.1}MB", size as f64 / MILLION as f64)
    } else if size > THOUSAND {
        format!("{:.1}kB", size as f64 / THOUSAND as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Longest prefix of `text` that fits in `width` columns, and its width.
///
/// Control characters are shown as U+FFFD; they never reach the terminal.
fn clip(text: &str, width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let c = if c.is_control() {
            char::REPLACEMENT_CHARACTER
        } else {
            c
        };
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    (out, used)
}

/// Truncate or space-pad `text` to exactly `width` display columns
pub fn fit(text: &str, width: usize) -> String {
    let (mut out, used) = clip(text, width);
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

pub fn name_cell(record: &FileRecord) -> String {
    fit(&record.display_name(), NAME_WIDTH)
}

pub fn size_cell(size: u64) -> String {
    fit(&format!(" {}", humanized_size(size)), SIZE_WIDTH)
}

pub fn offset_cell(offset: u64) -> String {
    fit(&format!(" {:<10}", offset), OFFSET_WIDTH)
}

/// Horizontal rule across the table with `tee` at both column separators
fn rule(left: char, tee: char, right: char) -> String {
    (0..TABLE_WIDTH as usize)
        .map(|col| match col {
            0 => left,
            c if c == SIZE_SEP || c == OFFSET_SEP => tee,
            c if c == TABLE_WIDTH as usize - 1 => right,
            _ => '─',
        })
        .collect()
}

/// Top border with the bundle name written over it
fn top_border(title: &str) -> String {
    let (title, used) = clip(title, TABLE_WIDTH as usize - 2);
    let mut line = String::from('┌');
    line.push_str(&title);
    line.extend(rule('┌', '┬', '┐').chars().skip(1 + used));
    line
}

fn heading() -> String {
    format!(
        "│{}│{}│{}│",
        fit(" Name", NAME_WIDTH),
        fit(" Size", SIZE_WIDTH),
        fit(" Offset", OFFSET_WIDTH)
    )
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Where the table sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Layout {
    /// Center a table of `rows` entries in a terminal of `(columns, lines)`.
    ///
    /// A terminal smaller than the table pins it to the top-left corner.
    pub fn centered(terminal: (u16, u16), rows: usize) -> Self {
        let (columns, lines) = terminal;
        let width = TABLE_WIDTH;
        let height = clamp_u16(rows).saturating_add(HEADER_ROWS + 1);
        Self {
            x: columns.saturating_sub(width) / 2,
            y: lines.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Screen line of table row `row`
    pub fn row_y(&self, row: usize) -> u16 {
        self.y
            .saturating_add(HEADER_ROWS)
            .saturating_add(clamp_u16(row))
    }
}

/// Draws the table and modal notifications onto a terminal-like writer
pub struct Renderer<W: Write> {
    out: W,
    title: String,
    terminal: (u16, u16),
    layout: Layout,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, title: impl Into<String>, terminal: (u16, u16), rows: usize) -> Self {
        Self {
            out,
            title: title.into(),
            terminal,
            layout: Layout::centered(terminal, rows),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Recompute the layout for a new terminal size
    pub fn resize(&mut self, terminal: (u16, u16), rows: usize) {
        self.terminal = terminal;
        self.layout = Layout::centered(terminal, rows);
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the screen and draw the whole table
    pub fn draw_table(&mut self, table: &ArchiveTable, selection: Option<usize>) -> io::Result<()> {
        let Layout { x, y, height, .. } = self.layout;

        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(x, y),
            Print(top_border(&self.title)),
            MoveTo(x, y.saturating_add(1)),
            Print(heading()),
            MoveTo(x, y.saturating_add(2)),
            Print(rule('├', '┼', '┤')),
        )?;

        for (row, record) in table.records().iter().enumerate() {
            queue!(self.out, MoveTo(x, self.layout.row_y(row)), Print('│'))?;
            self.draw_name_cell(row, record, selection == Some(row))?;
            queue!(
                self.out,
                Print(format!(
                    "│{}│{}│",
                    size_cell(record.size),
                    offset_cell(record.offset)
                ))
            )?;
        }

        queue!(
            self.out,
            MoveTo(x, y.saturating_add(height - 1)),
            Print(rule('└', '┴', '┘')),
        )?;
        self.out.flush()
    }

    /// Repaint only the two rows touched by a selection move
    pub fn update_selection(
        &mut self,
        table: &ArchiveTable,
        change: SelectionChange,
    ) -> io::Result<()> {
        if let Some(record) = table.get(change.old) {
            self.draw_name_cell(change.old, record, false)?;
        }
        if let Some(record) = table.get(change.new) {
            self.draw_name_cell(change.new, record, true)?;
        }
        self.out.flush()
    }

    fn draw_name_cell(
        &mut self,
        row: usize,
        record: &FileRecord,
        highlighted: bool,
    ) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(self.layout.x.saturating_add(1), self.layout.row_y(row))
        )?;
        if highlighted {
            queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(name_cell(record)),
                SetAttribute(Attribute::NoReverse)
            )
        } else {
            queue!(self.out, Print(name_cell(record)))
        }
    }

    /// Draw a bordered box over the middle of the screen
    pub fn show_notification(&mut self, note: &Notification) -> io::Result<()> {
        let (columns, lines) = self.terminal;
        let title = note.title();

        let longest = note
            .lines()
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0);
        let inner = longest.max(title.len() + 2);
        let width = (inner + 4).min(columns as usize).max(4);
        let height = note.lines().len() + 2;

        let x = clamp_u16((columns as usize).saturating_sub(width) / 2);
        let y = clamp_u16((lines as usize).saturating_sub(height) / 2);

        let color = match note.kind() {
            NotificationKind::Error => Color::Red,
            NotificationKind::Success => Color::Green,
        };
        let (label, _) = clip(&format!(" {} ", title), width - 2);

        queue!(
            self.out,
            MoveTo(x, y),
            Print(format!("┌{}┐", "─".repeat(width - 2))),
            MoveTo(x.saturating_add(1), y),
            SetForegroundColor(color),
            Print(label),
            ResetColor,
        )?;

        for (i, line) in note.lines().iter().enumerate() {
            queue!(
                self.out,
                MoveTo(x, y.saturating_add(clamp_u16(i + 1))),
                Print(format!("│ {} │", fit(line, width - 4)))
            )?;
        }

        queue!(
            self.out,
            MoveTo(x, y.saturating_add(clamp_u16(height - 1))),
            Print(format!("└{}┘", "─".repeat(width - 2)))
        )?;
        self.out.flush()
    }
}
