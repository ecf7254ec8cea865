//! Building spaces from JSON descriptions.
//!
//! This is the one place where "is this a space?" is a runtime question: a
//! tuple description whose element does not describe a space is rejected with
//! the index of the offending element.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{GymError, Result};
use crate::spaces::{BoxSpace, Discrete, MultiBinary, MultiDiscrete, SeedSpec, Space, Tuple};

/// Serializable description of a space, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpaceConfig {
    Discrete { n: u32 },
    MultiBinary { n: usize },
    MultiDiscrete { nvec: Vec<u32> },
    Box { low: Vec<f64>, high: Vec<f64> },
    Tuple {
        spaces: Vec<Value>,
        #[serde(default)]
        seed: Value,
    },
}

impl SpaceConfig {
    /// Validate parameters and construct the space.
    pub fn build(&self) -> Result<Box<dyn Space>> {
        match self {
            SpaceConfig::Discrete { n } => {
                if *n == 0 {
                    return Err(invalid("Discrete requires n > 0"));
                }
                Ok(Box::new(Discrete::new(*n)))
            }
            SpaceConfig::MultiBinary { n } => {
                if *n == 0 {
                    return Err(invalid("MultiBinary requires n > 0"));
                }
                Ok(Box::new(MultiBinary::new(*n)))
            }
            SpaceConfig::MultiDiscrete { nvec } => {
                if nvec.is_empty() || nvec.contains(&0) {
                    return Err(invalid("MultiDiscrete requires a non-empty nvec of positive sizes"));
                }
                Ok(Box::new(MultiDiscrete::new(nvec.clone())))
            }
            SpaceConfig::Box { low, high } => {
                if low.len() != high.len() {
                    return Err(invalid("Box bounds must have the same length"));
                }
                let ordered = low
                    .iter()
                    .zip(high)
                    .all(|(lo, hi)| lo.is_finite() && hi.is_finite() && lo <= hi);
                if !ordered {
                    return Err(invalid("Box bounds must be finite with low <= high"));
                }
                if !low.iter().zip(high).all(|(lo, hi)| (hi - lo).is_finite()) {
                    return Err(invalid("Box bounds must span a finite range"));
                }
                Ok(Box::new(BoxSpace::new(low.clone(), high.clone())))
            }
            SpaceConfig::Tuple { spaces, seed } => {
                let children = spaces
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        SpaceConfig::deserialize(child)
                            .map_err(|e| {
                                GymError::InvalidSpace(format!(
                                    "element {i} of the tuple is not a space: {e}"
                                ))
                            })?
                            .build()
                    })
                    .collect::<Result<Vec<_>>>()?;
                let seed = SeedSpec::try_from(seed)?;
                Ok(Box::new(Tuple::with_seed(children, seed)?))
            }
        }
    }
}

fn invalid(msg: &str) -> GymError {
    GymError::InvalidSpace(msg.to_string())
}

/// Build a space from its JSON description.
pub fn space_from_json(value: &Value) -> Result<Box<dyn Space>> {
    let config = SpaceConfig::deserialize(value).map_err(|e| GymError::InvalidSpace(e.to_string()))?;
    config.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::Element;
    use serde_json::json;

    #[test]
    fn builds_nested_tuples() {
        let space = space_from_json(&json!({
            "type": "tuple",
            "spaces": [
                {"type": "discrete", "n": 2},
                {"type": "tuple", "spaces": [
                    {"type": "multi_binary", "n": 3},
                    {"type": "box", "low": [0.0], "high": [1.0]}
                ]}
            ]
        }))
        .unwrap();
        let tuple = space.downcast_ref::<Tuple>().unwrap();
        assert_eq!(tuple.len(), 2);
        assert!(tuple[0].is::<Discrete>());
        assert_eq!(
            tuple.to_string(),
            "Tuple(Discrete(2), Tuple(MultiBinary(3), Box([0.0], [1.0], (1,))))"
        );
    }

    #[test]
    fn seeded_configs_are_reproducible() {
        let config = json!({
            "type": "tuple",
            "seed": 11,
            "spaces": [{"type": "discrete", "n": 10}, {"type": "multi_discrete", "nvec": [3, 4]}]
        });
        let mut a = space_from_json(&config).unwrap();
        let mut b = space_from_json(&config).unwrap();
        for _ in 0..5 {
            let s = a.sample();
            assert!(a.contains(&s));
            assert_eq!(s, b.sample());
        }
        assert!(matches!(a.sample(), Element::Tuple(ref parts) if parts.len() == 2));
    }

    #[test]
    fn rejects_non_space_elements() {
        let err = space_from_json(&json!({
            "type": "tuple",
            "spaces": [{"type": "discrete", "n": 2}, 5]
        }))
        .unwrap_err();
        match err {
            GymError::InvalidSpace(msg) => assert!(msg.starts_with("element 1 of the tuple")),
            other => panic!("Expected InvalidSpace, got {:?}", other),
        }
        assert!(space_from_json(&json!({"type": "sphere"})).is_err());
    }

    #[test]
    fn rejects_bad_parameters_without_panicking() {
        for bad in [
            json!({"type": "discrete", "n": 0}),
            json!({"type": "multi_discrete", "nvec": [2, 0]}),
            json!({"type": "box", "low": [1.0], "high": [0.0]}),
            json!({"type": "box", "low": [0.0, 0.0], "high": [1.0]}),
            json!({"type": "box", "low": [-1e308], "high": [1e308]}),
        ] {
            assert!(matches!(space_from_json(&bad), Err(GymError::InvalidSpace(_))), "{bad}");
        }
    }

    #[test]
    fn overflowing_box_span_is_rejected_inside_tuples() {
        let err = space_from_json(&json!({
            "type": "tuple",
            "seed": 1,
            "spaces": [{"type": "box", "low": [-1e308], "high": [1e308]}]
        }))
        .unwrap_err();
        assert!(matches!(err, GymError::InvalidSpace(ref msg) if msg.contains("finite range")));
    }

    #[test]
    fn nested_build_errors_pass_through() {
        let err = space_from_json(&json!({
            "type": "tuple",
            "spaces": [{"type": "discrete", "n": 0}]
        }))
        .unwrap_err();
        match err {
            GymError::InvalidSpace(msg) => assert_eq!(msg, "Discrete requires n > 0"),
            other => panic!("Expected InvalidSpace, got {:?}", other),
        }

        let err = space_from_json(&json!({
            "type": "tuple",
            "spaces": [{"type": "tuple", "seed": "abc", "spaces": [{"type": "discrete", "n": 2}]}]
        }))
        .unwrap_err();
        assert!(matches!(err, GymError::InvalidSeed(_)));
    }

    #[test]
    fn rejects_bad_seeds() {
        let err = space_from_json(&json!({
            "type": "tuple",
            "seed": "abc",
            "spaces": [{"type": "discrete", "n": 2}]
        }))
        .unwrap_err();
        assert!(matches!(err, GymError::InvalidSeed(_)));

        let err = space_from_json(&json!({
            "type": "tuple",
            "seed": [1, 2],
            "spaces": [{"type": "discrete", "n": 2}]
        }))
        .unwrap_err();
        assert!(matches!(err, GymError::InvalidSeed(_)));
    }
}
