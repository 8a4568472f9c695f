//! Player input parsing.
//!
//! Two stages:
//! 1. [`Input::parse`] classifies a line as a command or as a list of
//!    numbers, without looking at the board.
//! 2. [`MoveInput::to_move`] turns the numbers into a [`Move`] for the
//!    side and phase to move, converting 1-based to 0-based coordinates.
//!
//! Out-of-range numbers are not rejected here; they become off-board
//! coordinates and fail validation like any other illegal move.

use smallvec::SmallVec;

use crate::core::{Coord, Move, MoveError, Phase, Side};

/// Commands accepted in place of a move, case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `undo` or `u`
    Undo,
    /// `redo` or `r`
    Redo,
    /// `exit`
    Exit,
}

impl Command {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "u" | "undo" => Some(Command::Undo),
            "r" | "redo" => Some(Command::Redo),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Raw 1-based numbers from a move line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveInput {
    values: SmallVec<[i32; 4]>,
}

/// A classified input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Move(MoveInput),
}

impl Input {
    /// Stage one: command or numbers.
    pub fn parse(line: &str) -> Result<Self, MoveError> {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(MoveError::MalformedInput("empty input".to_string())),
            [only] => match Command::from_token(only) {
                Some(command) => Ok(Input::Command(command)),
                None => MoveInput::parse(&tokens).map(Input::Move),
            },
            _ => MoveInput::parse(&tokens).map(Input::Move),
        }
    }
}

impl MoveInput {
    fn parse(tokens: &[&str]) -> Result<Self, MoveError> {
        let values = tokens
            .iter()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| MoveError::MalformedInput(format!("'{token}' is not a number")))
            })
            .collect::<Result<SmallVec<[i32; 4]>, _>>()?;
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Stage two: a placement takes `row col`, every other move takes
    /// `from_row from_col to_row to_col`.
    pub fn to_move(&self, side: Side, phase: Phase) -> Result<Move, MoveError> {
        let placing = side == Side::Goat && phase == Phase::Placement;
        match (placing, self.values.as_slice()) {
            (true, &[row, col]) => Ok(Move::Place(Coord::from_one_based(row, col))),
            (false, &[r1, c1, r2, c2]) => Ok(Move::step(
                Coord::from_one_based(r1, c1),
                Coord::from_one_based(r2, c2),
            )),
            (placing, values) => Err(MoveError::MalformedInput(format!(
                "expected {} numbers, got {}",
                if placing { 2 } else { 4 },
                values.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_case_insensitive() {
        assert_eq!(Input::parse("undo"), Ok(Input::Command(Command::Undo)));
        assert_eq!(Input::parse("  U "), Ok(Input::Command(Command::Undo)));
        assert_eq!(Input::parse("Redo"), Ok(Input::Command(Command::Redo)));
        assert_eq!(Input::parse("r"), Ok(Input::Command(Command::Redo)));
        assert_eq!(Input::parse("EXIT"), Ok(Input::Command(Command::Exit)));
    }

    #[test]
    fn test_placement_numbers() {
        let Ok(Input::Move(input)) = Input::parse("1 2") else {
            panic!("expected move input");
        };
        assert_eq!(input.values(), &[1, 2]);
        assert_eq!(
            input.to_move(Side::Goat, Phase::Placement),
            Ok(Move::Place(Coord::new(0, 1)))
        );
    }

    #[test]
    fn test_step_numbers() {
        let Ok(Input::Move(input)) = Input::parse("1 1 1 3") else {
            panic!("expected move input");
        };
        assert_eq!(
            input.to_move(Side::Tiger, Phase::Placement),
            Ok(Move::step(Coord::new(0, 0), Coord::new(0, 2)))
        );
        assert_eq!(
            input.to_move(Side::Goat, Phase::Movement),
            Ok(Move::step(Coord::new(0, 0), Coord::new(0, 2)))
        );
    }

    #[test]
    fn test_wrong_count() {
        let Ok(Input::Move(input)) = Input::parse("1 1 1 3") else {
            panic!("expected move input");
        };
        assert!(matches!(
            input.to_move(Side::Goat, Phase::Placement),
            Err(MoveError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(Input::parse(""), Err(MoveError::MalformedInput(_))));
        assert!(matches!(Input::parse("   "), Err(MoveError::MalformedInput(_))));
        assert!(matches!(Input::parse("2 x"), Err(MoveError::MalformedInput(_))));
        assert!(matches!(Input::parse("undo 2"), Err(MoveError::MalformedInput(_))));
        assert!(matches!(Input::parse("hello"), Err(MoveError::MalformedInput(_))));
    }

    #[test]
    fn test_out_of_range_is_parsed() {
        let Ok(Input::Move(input)) = Input::parse("0 6") else {
            panic!("expected move input");
        };
        let mv = input.to_move(Side::Goat, Phase::Placement).unwrap();
        assert!(!mv.target().is_in_bounds());
    }
}
