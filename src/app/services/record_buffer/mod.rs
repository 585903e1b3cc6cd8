//! Line buffer for fixed-column SWAT text files
//!
//! A [`Document`] keeps the lines of one file as three sequences:
//!
//! - `initial` - the text as loaded, used to restore the file
//! - `original` - the last committed text, source of all value reads
//! - `working` - the text being edited, written out on commit
//!
//! Every line keeps its own terminator so that a commit without edits
//! reproduces the loaded bytes exactly. Columns are counted in characters of
//! the decoded text, which equals bytes for the 8-bit codecs SWAT uses.
//!
//! ## Usage
//!
//! ```rust
//! use swat_processor::app::services::record_buffer::{Document, TextEncoding};
//!
//! let mut doc = Document::from_text("basins.bsn", "title\n      1.0000    | SFTMP\n", TextEncoding::Latin1);
//! doc.write_span(2, 0, 12, "-1.5000").unwrap();
//! assert_eq!(doc.working_text(), "title\n     -1.5000    | SFTMP\n");
//! ```

pub mod encoding;

#[cfg(test)]
pub mod tests;

pub use encoding::{
    ByteHeuristic, EncodingDetector, FixedEncoding, TextEncoding, detect_file_encoding,
    resolve_encoding,
};

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Line terminator as found in the loaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line without a terminator
    None,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of text without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub ending: LineEnding,
}

impl Line {
    /// Length in characters, excluding the terminator
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Length used when probing for repeated slots: the line break counts as
    /// one character, as it does for a reader that keeps it
    pub fn probe_len(&self) -> usize {
        match self.ending {
            LineEnding::None => self.char_len(),
            LineEnding::Lf | LineEnding::CrLf => self.char_len() + 1,
        }
    }

    /// Characters in `start..end`, clamped to the line like a slice would be
    pub fn span(&self, start: usize, end: usize) -> String {
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Replace `start..end` with `replacement`, which must be exactly as wide
    /// as the span; short lines are padded with spaces up to `start`
    fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut rebuilt = String::with_capacity(self.text.len().max(end));

        rebuilt.extend(chars.iter().take(start));
        for _ in chars.len()..start {
            rebuilt.push(' ');
        }
        rebuilt.push_str(replacement);
        rebuilt.extend(chars.iter().skip(end));

        self.text = rebuilt;
    }
}

/// Split decoded text into lines, keeping each terminator
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find('\n') {
            Some(pos) => {
                let (body, ending) = match rest[..pos].strip_suffix('\r') {
                    Some(body) => (body, LineEnding::CrLf),
                    None => (&rest[..pos], LineEnding::Lf),
                };
                lines.push(Line {
                    text: body.to_string(),
                    ending,
                });
                rest = &rest[pos + 1..];
            }
            None => {
                lines.push(Line {
                    text: rest.to_string(),
                    ending: LineEnding::None,
                });
                rest = "";
            }
        }
    }

    lines
}

fn render(lines: &[Line]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(&line.text);
        text.push_str(line.ending.as_str());
    }
    text
}

/// Editable state of one fixed-column text file
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    encoding: TextEncoding,
    initial: Vec<Line>,
    original: Vec<Line>,
    working: Vec<Line>,
}

impl Document {
    /// Read and decode a file
    ///
    /// # Errors
    /// * `Error::Io` if the file cannot be read
    /// * `Error::Decode` if its bytes are invalid under `encoding`
    pub fn load(path: &Path, encoding: TextEncoding) -> Result<Self> {
        let name = path.display().to_string();
        let bytes =
            std::fs::read(path).map_err(|e| Error::io(format!("Failed to read {}", name), e))?;
        let text = encoding.decode(&name, &bytes)?;

        let document = Self::from_text(name, &text, encoding);
        debug!(
            "Loaded {} ({} lines, {})",
            document.name,
            document.line_count(),
            encoding
        );
        Ok(document)
    }

    /// Build a document from already decoded text
    pub fn from_text(name: impl Into<String>, text: &str, encoding: TextEncoding) -> Self {
        let lines = split_lines(text);
        Self {
            name: name.into(),
            encoding,
            initial: lines.clone(),
            original: lines.clone(),
            working: lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn line_count(&self) -> usize {
        self.original.len()
    }

    /// Whether the working text differs from the last committed text
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    fn index(&self, line: usize) -> Result<usize> {
        if line == 0 || line > self.original.len() {
            return Err(Error::out_of_range(format!(
                "line {} of '{}' (document has {} lines)",
                line,
                self.name,
                self.original.len()
            )));
        }
        Ok(line - 1)
    }

    /// Committed line (1-indexed)
    pub fn line(&self, line: usize) -> Result<&Line> {
        let index = self.index(line)?;
        Ok(&self.original[index])
    }

    /// Working line (1-indexed)
    pub fn working_line(&self, line: usize) -> Result<&Line> {
        let index = self.index(line)?;
        Ok(&self.working[index])
    }

    /// Committed text of `start..end` on a 1-indexed line
    pub fn read_span(&self, line: usize, start: usize, end: usize) -> Result<String> {
        Ok(self.line(line)?.span(start, end))
    }

    /// Working text of `start..end` on a 1-indexed line
    pub fn read_working_span(&self, line: usize, start: usize, end: usize) -> Result<String> {
        Ok(self.working_line(line)?.span(start, end))
    }

    /// Replace `start..end` of a 1-indexed working line
    ///
    /// Shorter text is right-justified with leading spaces. Text wider than
    /// the span is rejected with `Error::FormatOverflow` and nothing changes.
    pub fn write_span(&mut self, line: usize, start: usize, end: usize, text: &str) -> Result<()> {
        let index = self.index(line)?;
        if start >= end {
            return Err(Error::out_of_range(format!(
                "empty column span {}..{} on line {} of '{}'",
                start, end, line, self.name
            )));
        }

        let width = end - start;
        let text_width = text.chars().count();
        if text_width > width {
            return Err(Error::FormatOverflow {
                line,
                col_start: start,
                col_end: end,
                width,
                text: text.to_string(),
            });
        }

        let justified = format!("{:>width$}", text, width = width);
        self.working[index].splice(start, end, &justified);
        Ok(())
    }

    /// Discard uncommitted edits
    pub fn discard_changes(&mut self) {
        self.working = self.original.clone();
    }

    pub fn working_text(&self) -> String {
        render(&self.working)
    }

    pub fn committed_text(&self) -> String {
        render(&self.original)
    }

    pub fn initial_text(&self) -> String {
        render(&self.initial)
    }

    /// Write the working text to `path` and make it the committed text
    ///
    /// # Errors
    /// * `Error::Encode` if the text cannot be represented in the encoding
    /// * `Error::Io` if the file cannot be written
    pub fn commit(&mut self, path: &Path) -> Result<()> {
        let bytes = self.encoding.encode(&self.name, &self.working_text())?;
        std::fs::write(path, bytes)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        self.original = self.working.clone();
        debug!("Committed {} to {}", self.name, path.display());
        Ok(())
    }

    /// Write the load-time text back to `path` and reset to it
    pub fn restore(&mut self, path: &Path) -> Result<()> {
        let bytes = self.encoding.encode(&self.name, &self.initial_text())?;
        std::fs::write(path, bytes)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        self.original = self.initial.clone();
        self.working = self.initial.clone();
        debug!("Restored {} at {}", self.name, path.display());
        Ok(())
    }
}
