//! Output targets for report rendering.

/// Line-oriented console target.
///
/// Reports decide *what* lines to emit; implementations decide where they
/// go (terminal, a capture buffer in tests).
pub trait Output {
    /// Emit one line.
    fn line(&mut self, text: &str);

    /// Emit an empty line.
    fn blank(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes report lines to stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn blank(&mut self) {
        println!();
    }
}

/// Captures report lines for transcript assertions in tests.
#[derive(Debug, Default)]
pub struct RecordedOutput {
    buffer: String,
}

impl RecordedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured transcript, one line per `line`/`blank` call.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Output for RecordedOutput {
    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn blank(&mut self) {
        self.buffer.push('\n');
    }
}
