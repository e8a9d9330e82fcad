//! Rejection Types

use thiserror::Error;

use crate::rows::RowId;

/// Why a dot click was refused. State is never modified on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickRejected {
    #[error("cell {index} is outside a track of {len} dots")]
    OutOfRange { index: usize, len: u8 },

    #[error("cannot drop below the {base} free dot(s)")]
    BelowBase { target: u8, base: u8 },

    #[error("select an item before assigning dots")]
    Unassigned,

    #[error("select a priority before assigning dots")]
    NoPriority,

    #[error("score {target} exceeds the creation limit of {max}")]
    ExceedsCeiling { target: u8, max: u8 },

    #[error("costs {cost}, but only {remaining} left")]
    InsufficientPoints { cost: i32, remaining: i32 },

    #[error("no such trait or row")]
    UnknownTarget,
}

/// Structural row errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row {0:?} does not exist")]
    UnknownRow(RowId),

    #[error("row {0:?} is permanent and cannot be removed")]
    PermanentRow(RowId),
}
