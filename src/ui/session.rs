//! The input/command loop.
//!
//! A [`Session`] owns everything one browsing session touches: the file
//! table, the selection, the renderer and the extractor. It reads one event
//! at a time and handles it completely before reading the next.

use std::io::Write;

use tracing::{debug, trace};

use crate::bndl::{ArchiveTable, Extractor};
use crate::error::Result;
use crate::io::ReadAt;

use super::input::{Command, InputEvent, InputSource};
use super::model::{Direction, TableModel};
use super::notification::Notification;
use super::render::Renderer;

/// Whether the loop keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Explicit context of one browsing session
pub struct Session<R: ReadAt, W: Write> {
    table: ArchiveTable,
    model: TableModel,
    renderer: Renderer<W>,
    extractor: Extractor<R>,
    state: LoopState,
}

impl<R: ReadAt, W: Write> Session<R, W> {
    /// Create a session drawing onto `out`, a terminal of `terminal` size.
    ///
    /// `title` is shown in the table's top border.
    pub fn new(
        table: ArchiveTable,
        extractor: Extractor<R>,
        out: W,
        title: impl Into<String>,
        terminal: (u16, u16),
    ) -> Self {
        let model = TableModel::new(table.len());
        let renderer = Renderer::new(out, title, terminal, table.len());
        Self {
            table,
            model,
            renderer,
            extractor,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn selection(&self) -> Option<usize> {
        self.model.selection()
    }

    pub fn table(&self) -> &ArchiveTable {
        &self.table
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// Draw the table, then handle events until the user quits.
    pub fn run<I: InputSource>(&mut self, input: &mut I) -> Result<()> {
        debug!(entries = self.table.len(), "session started");
        self.redraw()?;

        while self.state == LoopState::Running {
            let event = input.next_event()?;
            self.handle(event, input)?;
        }

        debug!("session stopped");
        Ok(())
    }

    /// Apply a single event.
    ///
    /// `input` is only read from while a notification waits to be dismissed.
    pub fn handle<I: InputSource>(
        &mut self,
        event: InputEvent,
        input: &mut I,
    ) -> Result<LoopState> {
        match event {
            InputEvent::Key(Command::Quit) => self.state = LoopState::Stopped,
            InputEvent::Key(Command::MoveUp) => self.move_selection(Direction::Up)?,
            InputEvent::Key(Command::MoveDown) => self.move_selection(Direction::Down)?,
            InputEvent::Key(Command::Extract) => self.extract_selected(input)?,
            InputEvent::Key(Command::Other) => {}
            InputEvent::Resize(columns, lines) => self.resize((columns, lines))?,
        }
        Ok(self.state)
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.draw_table(&self.table, self.model.selection())?;
        Ok(())
    }

    fn resize(&mut self, terminal: (u16, u16)) -> Result<()> {
        self.renderer.resize(terminal, self.table.len());
        self.redraw()
    }

    fn move_selection(&mut self, direction: Direction) -> Result<()> {
        if let Some(change) = self.model.move_selection(direction) {
            trace!(old = change.old, new = change.new, "selection moved");
            self.renderer.update_selection(&self.table, change)?;
        }
        Ok(())
    }

    /// Extract the highlighted entry and report the outcome in a modal box.
    ///
    /// Failures that only concern this one entry are shown to the user; the
    /// session carries on either way.
    fn extract_selected<I: InputSource>(&mut self, input: &mut I) -> Result<()> {
        let Some(record) = self
            .model
            .selection()
            .and_then(|index| self.table.get(index))
        else {
            return Ok(());
        };

        let name = record.display_name();
        let note = match self.extractor.extract(record) {
            Ok(path) => Notification::success([
                format!("Extracted {}", name),
                format!("to {}", path.display()),
            ]),
            Err(e) if e.is_recoverable() => {
                Notification::error([format!("Could not extract {}", name), e.to_string()])
            }
            Err(e) => return Err(e),
        };

        self.notify(&note, input)
    }

    /// Show `note` until any key is pressed, then restore the table.
    fn notify<I: InputSource>(&mut self, note: &Notification, input: &mut I) -> Result<()> {
        self.renderer.show_notification(note)?;
        loop {
            match input.next_event()? {
                InputEvent::Key(_) => break,
                InputEvent::Resize(columns, lines) => {
                    self.resize((columns, lines))?;
                    self.renderer.show_notification(note)?;
                }
            }
        }
        self.redraw()
    }
}
