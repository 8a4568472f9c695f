//! Turn orchestration.
//!
//! - [`GameSession`]: owns the live state, the history, and the rules
//! - [`Input`]: two-stage parsing of player input lines
//! - [`TurnTimer`]: advisory per-turn time limit
//!
//! ## Example Usage
//!
//! ```
//! use bagh_chal::core::{Cell, Coord, SessionConfig, Side};
//! use bagh_chal::session::{GameSession, TurnEvent};
//!
//! let mut session = GameSession::new(SessionConfig::default());
//!
//! // Goats open by placing, 1-based row and column.
//! let event = session.handle_line("1 2").unwrap();
//! assert!(matches!(event, TurnEvent::Moved { .. }));
//! assert_eq!(session.turn(), Side::Tiger);
//!
//! // The corner tiger jumps the new goat.
//! session.handle_line("1 1 1 3").unwrap();
//! assert_eq!(session.captures(), (1, 5));
//! assert!(session.board().holds(Coord::new(0, 1), Cell::Empty));
//! ```

mod game;
mod input;
mod timer;

pub use game::{GameSession, TurnEvent};
pub use input::{Command, Input, MoveInput};
pub use timer::TurnTimer;
