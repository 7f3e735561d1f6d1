use lyon::geom::vector;
use strum_macros::Display;

use crate::Vector;

/// Whether the arguments of a command are offsets from the cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Position {
    Absolute,
    Relative,
}

impl Position {
    pub fn of_letter(letter: char) -> Self {
        if letter.is_ascii_lowercase() {
            Position::Relative
        } else {
            Position::Absolute
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum Command {
    MoveTo(Position, Vector),
    LineTo(Position, Vector),
    HorizontalLineTo(Position, f64),
    VerticalLineTo(Position, f64),
    CubicTo {
        position: Position,
        ctrl1: Vector,
        ctrl2: Vector,
        to: Vector,
    },
    Close(Position),
}

impl Command {
    pub const LETTERS: &'static str = "MmLlHhVvCcZz";

    /// Number of numeric arguments that follow `letter`, or `None` for letters
    /// outside the supported set.
    pub fn arity(letter: char) -> Option<usize> {
        match letter {
            'M' | 'm' | 'L' | 'l' => Some(2),
            'H' | 'h' | 'V' | 'v' => Some(1),
            'C' | 'c' => Some(6),
            'Z' | 'z' => Some(0),
            _ => None,
        }
    }

    pub fn from_parts(letter: char, args: &[f64]) -> Option<Command> {
        let position = Position::of_letter(letter);
        let command = match (letter.to_ascii_uppercase(), args) {
            ('M', &[x, y]) => Command::MoveTo(position, vector(x, y)),
            ('L', &[x, y]) => Command::LineTo(position, vector(x, y)),
            ('H', &[x]) => Command::HorizontalLineTo(position, x),
            ('V', &[y]) => Command::VerticalLineTo(position, y),
            ('C', &[x1, y1, x2, y2, x, y]) => Command::CubicTo {
                position,
                ctrl1: vector(x1, y1),
                ctrl2: vector(x2, y2),
                to: vector(x, y),
            },
            ('Z', &[]) => Command::Close(position),
            _ => return None,
        };
        Some(command)
    }

    pub fn position(&self) -> Position {
        match *self {
            Command::MoveTo(p, _)
            | Command::LineTo(p, _)
            | Command::HorizontalLineTo(p, _)
            | Command::VerticalLineTo(p, _)
            | Command::Close(p) => p,
            Command::CubicTo { position, .. } => position,
        }
    }

    pub fn letter(&self) -> char {
        let letter = match self {
            Command::MoveTo(..) => 'M',
            Command::LineTo(..) => 'L',
            Command::HorizontalLineTo(..) => 'H',
            Command::VerticalLineTo(..) => 'V',
            Command::CubicTo { .. } => 'C',
            Command::Close(_) => 'Z',
        };
        match self.position() {
            Position::Absolute => letter,
            Position::Relative => letter.to_ascii_lowercase(),
        }
    }

    pub fn arguments(&self) -> Vec<f64> {
        match *self {
            Command::MoveTo(_, v) | Command::LineTo(_, v) => vec![v.x, v.y],
            Command::HorizontalLineTo(_, v) | Command::VerticalLineTo(_, v) => vec![v],
            Command::CubicTo { ctrl1, ctrl2, to, .. } => {
                vec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]
            }
            Command::Close(_) => vec![],
        }
    }
}
