use std::io::Write;

use ssosim_core::{Document, Result, SsoError, RESULT_ELEMENT_ID};

/// Document with a single `result` element rendered to a writer.
///
/// Each write prints the element's new text on its own line.
pub struct TerminalDocument<W: Write> {
    out: W,
    text: String,
}

impl<W: Write> TerminalDocument<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Document for TerminalDocument<W> {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        if id != RESULT_ELEMENT_ID {
            return Err(SsoError::ElementNotFound(id.to_string()));
        }
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        self.text = text.to_string();
        Ok(())
    }
}
