//! Ошибки модели стадиона.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatingError>;

/// Every failure the seating core can report. All of them are raised at the
/// call that detects them and none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("invalid capacity: general={general}, vip={vip} ({reason})")]
    InvalidCapacity {
        general: i64,
        vip: i64,
        reason: &'static str,
    },

    #[error("floor {floor} must be between 1 and {max}")]
    InvalidFloor { floor: u32, max: u32 },

    #[error("invalid section letter {0:?}")]
    InvalidSectionLetter(String),

    #[error("row {row} must be between 1 and {max}")]
    InvalidRow { row: u32, max: u32 },

    #[error("seat number {seat} must be between 1 and {max}")]
    InvalidSeatNumber { seat: u32, max: u32 },

    #[error("seat code must be 8 characters long, got {0}")]
    InvalidCodeLength(usize),

    #[error("malformed seat code {code:?}: {reason}")]
    InvalidCodeFormat { code: String, reason: &'static str },

    #[error("no seat with code {0}")]
    SeatNotFound(String),

    #[error("stadium {0} not found")]
    StadiumNotFound(String),

    #[error("stadium {0} is already registered")]
    DuplicateStadium(String),
}

impl SeatingError {
    /// True for the kinds that mean "the thing asked for does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SeatingError::SeatNotFound(_) | SeatingError::StadiumNotFound(_)
        )
    }
}
