//! Result sink
//!
//! Writes the surviving words either to the console or, when an output path
//! is given, one word per line to a buffered file writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default buffer size for file writing (1MB)
const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Buffered one-word-per-line file writer.
pub struct OutputWriter {
    writer: BufWriter<File>,
    lines_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file.
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
            lines_written: 0,
        })
    }

    /// Write one word on its own line.
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flush the buffer to disk.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get number of lines written.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write the filtered words to `destination`, or to stdout when none is
/// given. An unwritable destination is a fatal boundary error.
pub fn write_results(words: &[String], destination: Option<&Path>) -> anyhow::Result<()> {
    match destination {
        Some(path) => {
            let mut writer = OutputWriter::new(path)
                .map_err(|e| anyhow::anyhow!("cannot open output {:?}: {}", path, e))?;
            for word in words {
                writer.write_line(word)?;
            }
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for word in words {
                writeln!(handle, "{}", word)?;
            }
        }
    }
    Ok(())
}
