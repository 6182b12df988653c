use crate::errors::Malformation;
use std::fmt;

/// One drawing command as written in path data: a letter and the numbers that follow it.
///
/// Before expansion `numbers` may hold any number of repetitions of the command’s arguments,
/// after expansion exactly one (see `CommandKind::arity`).
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub letter: char,
    pub numbers: Vec<f64>,
    /// Byte offset of the letter in the path data, for error reporting.
    pub position: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Relative,
    Absolute,
}

/// https://www.w3.org/TR/SVG/paths.html#PathData
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    ClosePath,
}

impl CommandKind {
    /// Case-insensitive. `None` for letters outside `M L H V C Z`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'm' => Some(CommandKind::MoveTo),
            'l' => Some(CommandKind::LineTo),
            'h' => Some(CommandKind::HorizontalLineTo),
            'v' => Some(CommandKind::VerticalLineTo),
            'c' => Some(CommandKind::CurveTo),
            'z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// How many numbers one repetition of this command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::CurveTo => 6,
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::ClosePath => 0,
        }
    }
}

impl Command {
    pub fn new(letter: char, numbers: Vec<f64>) -> Self {
        Command {
            letter,
            numbers,
            position: 0,
        }
    }

    /// Lowercase letters are relative to the current point, uppercase are absolute.
    pub fn origin(&self) -> Origin {
        if self.letter.is_ascii_lowercase() {
            Origin::Relative
        } else {
            Origin::Absolute
        }
    }

    pub fn kind(&self) -> Result<CommandKind, Malformation> {
        CommandKind::from_letter(self.letter).ok_or(Malformation::UnsupportedCommand {
            letter: self.letter,
            position: self.position,
        })
    }

    pub fn classify(&self) -> Result<(CommandKind, Origin), Malformation> {
        Ok((self.kind()?, self.origin()))
    }

    pub fn is_move_to(&self) -> bool {
        matches!(self.letter, 'm' | 'M')
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [", self.letter)?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}
