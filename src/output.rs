//! Output sinks for diagnostic trace lines.
//!
//! The comparison algorithm never prints directly; it writes through an
//! injected [`OutputSink`] so it stays testable without capturing process-wide
//! stdout. Sinks are trace-only: nothing ever reads them back for correctness.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Destination for human-readable diagnostic lines.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);

    /// Writes the keyword header line. Sinks may restyle it; the default
    /// renders `[keyword]`.
    fn write_keyword(&mut self, keyword: &str) {
        self.write_line(&format!("[{keyword}]"));
    }
}

/// Discards all output; for runs where the trace is unwanted.
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _text: &str) {}
}

/// Writes each line to stdout, uncolored.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects lines for programmatic inspection; the capture sink used by this
/// crate's own tests.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The captured output joined back into a single newline-separated block.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for OutputBuffer {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Stdout sink that highlights keyword headers when attached to a terminal.
pub struct ConsoleSink {
    stream: StandardStream,
}

impl ConsoleSink {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, text: &str) {
        let _ = writeln!(self.stream, "{text}");
    }

    fn write_keyword(&mut self, keyword: &str) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        let _ = writeln!(self.stream, "[{keyword}]");
        let _ = self.stream.reset();
    }
}
