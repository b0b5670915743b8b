//! Input and output helpers for the CLI boundary.
//!
//! Standard output gets a trailing newline when the content lacks one, so
//! the shell prompt does not end up glued to the payload. Named files are
//! written byte-exact.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{FormatError, Result};

/// Path spelling that stands for stdin/stdout
pub const STDIO_PATH: &str = "-";

/// Where encoded or decoded bytes are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Process standard output
    Stdout,
    /// Named file, created or truncated
    File(PathBuf),
}

impl Destination {
    /// `None` or `-` selects stdout, anything else a file
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new(STDIO_PATH) => Destination::File(path.to_path_buf()),
            _ => Destination::Stdout,
        }
    }

    /// Whether a missing trailing newline is appended
    pub fn appends_newline(&self) -> bool {
        matches!(self, Destination::Stdout)
    }
}

/// Write `data` to `writer`, adding `\n` if requested and missing.
pub fn write_to<W: Write>(writer: &mut W, data: &[u8], append_newline: bool) -> io::Result<()> {
    writer.write_all(data)?;
    if append_newline && !data.ends_with(b"\n") {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write output to its destination
pub fn write_output(destination: &Destination, data: &[u8]) -> Result<()> {
    let append_newline = destination.appends_newline();
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_to(&mut lock, data, append_newline)?;
        },
        Destination::File(path) => {
            tracing::debug!("writing {} bytes to {}", data.len(), path.display());
            let mut file = fs::File::create(path)?;
            write_to(&mut file, data, append_newline)?;
        },
    }
    Ok(())
}

/// Read raw input bytes from a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new(STDIO_PATH) {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read(path)?)
    }
}

/// Interpret input bytes as envelope text
pub fn into_text(bytes: Vec<u8>) -> std::result::Result<String, FormatError> {
    String::from_utf8(bytes).map_err(|_| FormatError::NotText)
}
