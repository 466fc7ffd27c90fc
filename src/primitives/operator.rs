//! Operator tags for binary matrix operations.
//!
//! ## Purpose
//!
//! This module defines `Operator`, the tag that selects which of the four
//! binary operations an operation request performs. Callers that collect the
//! operation as text (a menu choice, a command-line argument) parse it with
//! `FromStr`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt;
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::MatrixError;

// ============================================================================
// Operator
// ============================================================================

/// Binary matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Element-wise `A + B`.
    Add,

    /// Element-wise `A - B`.
    Subtract,

    /// Matrix product `A * B`.
    Multiply,

    /// `A * inverse(B)` for equal-sized square `A` and `B`.
    Divide,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Lowercase operation name.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Single-character arithmetic symbol.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| {
                trimmed.eq_ignore_ascii_case(op.name())
                    || (trimmed.len() == 1 && trimmed.starts_with(op.symbol()))
            })
            .ok_or_else(|| MatrixError::UnknownOperator(trimmed.to_string()))
    }
}
