//! Operation selected on the command line.

use std::str::FromStr;

use crate::error::EcError;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Bytes to envelope
    Encode,
    /// Envelope to bytes
    Decode,
}

impl FromStr for Mode {
    type Err = EcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            other => Err(EcError::Usage(format!(
                "unknown mode '{other}', expected encode or decode"
            ))),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        })
    }
}
