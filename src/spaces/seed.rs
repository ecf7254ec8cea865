//! Seed specifications accepted by `Space::seed`.

use serde_json::Value;

use crate::core::{GymError, Result};

/// How a space should be seeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SeedSpec {
    /// No seed: spaces draw fresh entropy.
    #[default]
    None,
    /// A single integer seed.
    Int(u64),
    /// One entry per child of a composite space, index aligned.
    List(Vec<SeedSpec>),
}

impl SeedSpec {
    pub(crate) fn unsupported() -> GymError {
        GymError::InvalidSeed("seed must be an integer, a list, or absent".into())
    }

    pub(crate) fn single_only() -> GymError {
        GymError::InvalidSeed("leaf spaces take a single integer seed or none".into())
    }
}

impl From<u64> for SeedSpec {
    fn from(v: u64) -> Self { SeedSpec::Int(v) }
}

impl From<Option<u64>> for SeedSpec {
    fn from(v: Option<u64>) -> Self { v.map_or(SeedSpec::None, SeedSpec::Int) }
}

impl From<Vec<u64>> for SeedSpec {
    fn from(v: Vec<u64>) -> Self { SeedSpec::List(v.into_iter().map(SeedSpec::Int).collect()) }
}

impl From<Vec<SeedSpec>> for SeedSpec {
    fn from(v: Vec<SeedSpec>) -> Self { SeedSpec::List(v) }
}

/// Parse a seed arriving through JSON: `null`, a non-negative integer, or an
/// array of those (recursively). Anything else is rejected.
impl TryFrom<&Value> for SeedSpec {
    type Error = GymError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(SeedSpec::None),
            Value::Number(n) => n.as_u64().map(SeedSpec::Int).ok_or_else(SeedSpec::unsupported),
            Value::Array(items) => items
                .iter()
                .map(SeedSpec::try_from)
                .collect::<Result<Vec<_>>>()
                .map(SeedSpec::List),
            Value::Bool(_) | Value::String(_) | Value::Object(_) => Err(SeedSpec::unsupported()),
        }
    }
}
