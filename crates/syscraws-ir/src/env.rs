//! Runtime environment handed to the evaluator.

/// Collects output written by `print`.
#[derive(Debug, Default)]
pub struct Env {
    output: Vec<String>,
    echo: bool,
}

impl Env {
    /// An environment that only records output.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment that records output and echoes each line to stdout.
    pub fn stdout() -> Self {
        Self {
            output: Vec::new(),
            echo: true,
        }
    }

    /// Write one line of output.
    pub fn print(&mut self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.output.push(line);
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Take the recorded lines, leaving the buffer empty.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}
