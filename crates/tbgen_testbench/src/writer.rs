use std::io;

use crate::error::GenerateError;

/// Line-oriented writer that prefixes each line with one tab per indent level.
pub struct CodeWriter<'a, W: io::Write> {
    w: &'a mut W,
    indent_level: u32,
}

impl<'a, W: io::Write> CodeWriter<'a, W> {
    pub fn new(w: &'a mut W) -> CodeWriter<'a, W> {
        CodeWriter { w, indent_level: 0 }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn unindent(&mut self) -> Result<(), GenerateError> {
        if self.indent_level == 0 {
            return Err(GenerateError::IndentUnderflow);
        }
        self.indent_level -= 1;
        Ok(())
    }

    pub fn append_indent(&mut self) -> Result<(), GenerateError> {
        for _ in 0..self.indent_level {
            write!(self.w, "\t")?;
        }
        Ok(())
    }

    pub fn append_newline(&mut self) -> Result<(), GenerateError> {
        writeln!(self.w)?;
        Ok(())
    }

    pub fn append(&mut self, s: &str) -> Result<(), GenerateError> {
        write!(self.w, "{s}")?;
        Ok(())
    }

    pub fn append_line(&mut self, s: &str) -> Result<(), GenerateError> {
        self.append_indent()?;
        self.append(s)?;
        self.append_newline()
    }
}
