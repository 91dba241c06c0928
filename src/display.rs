//! Display projection and sinks.

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

/// Receiver for the calculator's display output.
pub trait DisplaySink {
    fn set_primary(&mut self, text: &str);
    fn set_secondary(&mut self, text: &str);
    fn set_secondary_visible(&mut self, visible: bool);
}

/// Snapshot of what the calculator shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Display {
    /// Current value.
    pub primary: String,
    /// History line.
    pub secondary: String,
    /// Whether the history line is shown.
    pub secondary_visible: bool,
}

impl Display {
    /// Push this snapshot into a sink.
    pub fn render_to<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        sink.set_primary(&self.primary);
        sink.set_secondary(&self.secondary);
        sink.set_secondary_visible(self.secondary_visible);
    }
}

/// A `Display` records whatever is pushed into it.
impl DisplaySink for Display {
    fn set_primary(&mut self, text: &str) {
        self.primary = text.to_string();
    }

    fn set_secondary(&mut self, text: &str) {
        self.secondary = text.to_string();
    }

    fn set_secondary_visible(&mut self, visible: bool) {
        self.secondary_visible = visible;
    }
}

/// Writes the display to a terminal or any other writer.
///
/// The primary line is written when visibility is set, which is the last
/// call of every projection. The history line precedes it when visible.
pub struct TerminalDisplay<W: Write> {
    out: W,
    current: Display,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current: Display::default(),
        }
    }

    /// The last projection received.
    pub fn current(&self) -> &Display {
        &self.current
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        if self.current.secondary_visible {
            writeln!(self.out, "  {}", self.current.secondary.trim_start())?;
        }
        writeln!(self.out, "= {}", self.current.primary)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn set_primary(&mut self, text: &str) {
        self.current.set_primary(text);
    }

    fn set_secondary(&mut self, text: &str) {
        self.current.set_secondary(text);
    }

    fn set_secondary_visible(&mut self, visible: bool) {
        self.current.set_secondary_visible(visible);
        if let Err(e) = self.flush_frame() {
            warn!("Failed to write display: {}", e);
        }
    }
}
