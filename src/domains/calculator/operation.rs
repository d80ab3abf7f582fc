//! Operation registry.
//!
//! The closed set of arithmetic operations known to the server, each tagged
//! with a wire name and a display symbol. Membership in the registry does not
//! imply the operation can be evaluated: see [`Operation::is_supported`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::CalculationError;

/// An arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Declared in the registry but not wired into evaluation.
    Exponential,
}

impl Operation {
    /// Every registry member, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Exponential,
    ];

    /// Wire name of the operation (e.g. `ADDITION`).
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "ADDITION",
            Operation::Subtraction => "SUBTRACTION",
            Operation::Multiplication => "MULTIPLICATION",
            Operation::Division => "DIVISION",
            Operation::Exponential => "EXPONENTIAL",
        }
    }

    /// Display symbol of the operation (e.g. `+`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
            Operation::Exponential => "^^",
        }
    }

    /// Whether the calculator engine can evaluate this operation.
    pub const fn is_supported(self) -> bool {
        !matches!(self, Operation::Exponential)
    }

    /// Look up an operation by wire name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Look up an operation by display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    /// Accepts either the wire name or the symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::from_name(tag)
            .or_else(|| Self::from_symbol(tag))
            .ok_or_else(|| CalculationError::unsupported(tag))
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
