use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The input document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed markup: {0}")]
    Xml(#[from] xml_rs::reader::Error),
}

/// Why a single path could not be turned into polylines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path data contains no commands")]
    EmptyPath,

    #[error("malformed path data: {0}")]
    MalformedPath(#[from] Malformation),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Malformation {
    #[error("no commands")]
    NoCommands,

    #[error("expected move-to command, found '{letter}'")]
    MissingMoveTo { letter: char },

    /// Positions are in UTF-8 bytes from the start of the path data.
    #[error("unsupported command '{letter}' around byte {position}")]
    UnsupportedCommand { letter: char, position: usize },

    /// A command with more or fewer numbers than one repetition takes,
    /// given to a stage that expects expanded commands.
    #[error("'{letter}' command with {found} number(s) instead of {expected}")]
    Unexpanded { letter: char, expected: usize, found: usize },

    #[error("invalid number {token:?} around byte {position}")]
    InvalidNumber { token: String, position: usize },
}

/// A `<path>` element that was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFailure {
    /// Index of the `<path>` element among all of them, in document order.
    pub index: usize,
    pub id: String,
    pub error: PathError,
    /// What was noticed before the path failed.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "path #{} (id {:?}): {}", self.index, self.id, self.error)
    }
}

impl std::error::Error for PathFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Something suspicious that did not stop a path from being processed.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A number that could not be parsed and was replaced with zero.
    InvalidNumber { token: String, position: usize },

    /// Numbers after the last complete group of a command, which were ignored.
    TrailingNumbers { letter: char, dropped: usize },

    /// Numbers before the first command letter, which were ignored.
    StrayNumbers { count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::InvalidNumber { token, position } => {
                write!(f, "invalid number {:?} around byte {} replaced with 0", token, position)
            }
            Diagnostic::TrailingNumbers { letter, dropped } => {
                write!(f, "ignored {} trailing number(s) after '{}' command", dropped, letter)
            }
            Diagnostic::StrayNumbers { count } => {
                write!(f, "ignored {} number(s) before the first command", count)
            }
        }
    }
}
