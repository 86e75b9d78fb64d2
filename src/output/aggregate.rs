//! Aggregated text output
//!
//! Layout:
//!
//! ```text
//! # Aggregated contents of /abs/root
//! # Created by collate
//!
//!
//! ================================================================================
//! 📄 FILE: src/main.rs
//! ================================================================================
//!
//! <content>
//!
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::file_utils::FileContent;
use crate::select::ContentSink;

/// Width of the `=` delimiter lines around each file header.
pub const DELIMITER_WIDTH: usize = 80;

/// Tool identity written in the preamble.
pub const TOOL_NAME: &str = "collate";

/// Streams the preamble and file blocks into any writer.
pub struct AggregateWriter<W: Write> {
    out: W,
    delimiter: String,
    bytes_written: u64,
}

impl<W: Write> AggregateWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delimiter: "=".repeat(DELIMITER_WIDTH),
            bytes_written: 0,
        }
    }

    /// Write the two-line preamble naming the scan root and the tool.
    pub fn write_preamble(&mut self, root: &Path) -> io::Result<()> {
        let preamble = format!(
            "# Aggregated contents of {}\n# Created by {}\n\n",
            root.display(),
            TOOL_NAME
        );
        self.write_str(&preamble)
    }

    /// Flush and hand back the writer with the number of bytes written.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        self.out.flush()?;
        Ok((self.out, self.bytes_written))
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())?;
        self.bytes_written += s.len() as u64;
        Ok(())
    }
}

impl<W: Write> ContentSink for AggregateWriter<W> {
    fn emit_file(&mut self, header: &str, content: &FileContent) -> io::Result<()> {
        let block_header = format!(
            "\n{delim}\n📄 FILE: {header}\n{delim}\n\n",
            delim = self.delimiter,
            header = header
        );
        self.write_str(&block_header)?;

        match content {
            FileContent::Text(text) => self.write_str(text)?,
            FileContent::Unreadable(reason) => {
                self.write_str(&format!("[Could not read file: {}]\n", reason))?
            }
        }

        self.write_str("\n\n")
    }
}
