//! Line-oriented command front end over stdin/stdout.
//!
//! One command per line:
//!
//! | command | effect |
//! |---|---|
//! | `position startpos \| fen <6 fields> [moves m1 m2 ...]` | set up a position |
//! | `check <move>` | validate without committing |
//! | `play <move>` | validate and commit |
//! | `targets <square>` | legal destinations of the piece there |
//! | `fen` | print the position as FEN |
//! | `show` | print the board diagram |
//! | `encode <square>` | print the 4-bit identity of the piece there |
//! | `quit` | stop reading |
//!
//! Failures print as `error: ...` and the loop carries on.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{
    parse_move_text, validate_move, Board, BoardQuery, Coordinate, FenError, PlayError,
    SquareError,
};

pub mod command;

use command::{parse_command, Command};

/// Error type for a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// A move could not be parsed or played
    InvalidMove { move_str: String, error: PlayError },
    /// Invalid square argument
    InvalidSquare(SquareError),
    /// The command needs a piece on this square
    EmptySquare(Coordinate),
    /// Missing required parts in the command
    MissingParts { command: &'static str },
    Unknown(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CliError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            CliError::InvalidSquare(e) => write!(f, "{e}"),
            CliError::EmptySquare(square) => write!(f, "No piece on {square}"),
            CliError::MissingParts { command } => {
                write!(f, "Missing required parts in {command} command")
            }
            CliError::Unknown(line) => write!(f, "Unknown command '{line}'"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FenError> for CliError {
    fn from(e: FenError) -> Self {
        CliError::InvalidFen(e)
    }
}

impl From<SquareError> for CliError {
    fn from(e: SquareError) -> Self {
        CliError::InvalidSquare(e)
    }
}

/// Read commands from `input` until `quit` or end of input, answering on `output`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut board = Board::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if cmd == Command::Quit {
            break;
        }
        match execute(&mut board, cmd) {
            Ok(Some(reply)) => writeln!(output, "{reply}")?,
            Ok(None) => {}
            Err(e) => {
                debug_log!("command '{}' failed: {e}", line.trim());
                writeln!(output, "error: {e}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

/// Run one command against `board`, returning the text to print, if any.
pub fn execute(board: &mut Board, cmd: Command) -> Result<Option<String>, CliError> {
    match cmd {
        Command::Position(parts) => {
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            *board = try_parse_position_command(&parts)?;
            Ok(None)
        }
        Command::Check(text) => {
            let text = text.ok_or(CliError::MissingParts { command: "check" })?;
            let (from, to, _) = parse_move_text(&text).map_err(|e| CliError::InvalidMove {
                move_str: text.clone(),
                error: e.into(),
            })?;
            let piece = board.piece_at(from).ok_or(CliError::EmptySquare(from))?;
            Ok(Some(validate_move(piece, to, &*board).to_string()))
        }
        Command::Play(text) => {
            let text = text.ok_or(CliError::MissingParts { command: "play" })?;
            let mv = board
                .play_move_text(&text)
                .map_err(|error| CliError::InvalidMove {
                    move_str: text.clone(),
                    error,
                })?;
            Ok(Some(mv.to_string()))
        }
        Command::Targets(square) => {
            let square = parse_square(square, "targets")?;
            if board.piece_at(square).is_none() {
                return Err(CliError::EmptySquare(square));
            }
            let targets: Vec<String> = board
                .legal_destinations(square)
                .iter()
                .map(ToString::to_string)
                .collect();
            if targets.is_empty() {
                Ok(Some("-".to_string()))
            } else {
                Ok(Some(targets.join(" ")))
            }
        }
        Command::Fen => Ok(Some(board.to_fen())),
        Command::Show => Ok(Some(board.to_string())),
        Command::Encode(square) => {
            let square = parse_square(square, "encode")?;
            let identity = board
                .piece_at(square)
                .ok_or(CliError::EmptySquare(square))?
                .identity();
            Ok(Some(format!("{:04b} {identity}", identity.encode())))
        }
        Command::Quit => Ok(None),
        Command::Unknown(line) => Err(CliError::Unknown(line)),
    }
}

fn parse_square(arg: Option<String>, command: &'static str) -> Result<Coordinate, CliError> {
    let arg = arg.ok_or(CliError::MissingParts { command })?;
    Ok(arg.parse()?)
}

/// Parse a position command into a fresh board.
///
/// Supports both "position startpos" and "position fen <fen>" formats, optionally
/// followed by "moves <move1> <move2> ...". The FEN must carry all six fields.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Board, CliError> {
    let missing = CliError::MissingParts {
        command: "position",
    };
    let mut i = 1;

    if i >= parts.len() {
        return Err(missing);
    }

    let mut board = if parts[i] == "startpos" {
        i += 1;
        Board::new()
    } else if parts[i] == "fen" {
        if i + 6 >= parts.len() {
            return Err(missing);
        }
        let fen = parts[i + 1..i + 7].join(" ");
        i += 7;
        Board::try_from_fen(&fen)?
    } else {
        return Err(missing);
    };

    if i < parts.len() && parts[i] == "moves" {
        for &text in &parts[i + 1..] {
            board
                .play_move_text(text)
                .map_err(|error| CliError::InvalidMove {
                    move_str: text.to_string(),
                    error,
                })?;
        }
    }

    Ok(board)
}
