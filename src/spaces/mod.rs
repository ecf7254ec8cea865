//! Space implementations: leaf spaces plus the `Tuple` product space.

pub mod config;
pub mod element;
pub mod seed;
pub mod space;
pub mod tuple;

use std::fmt;

use rand::distributions::{Distribution, Uniform};
use serde_json::Value;

use crate::core::{GymError, Result};
use crate::utils::rng::{RngStream, entropy_seed, rng_from_seed};

pub use config::{SpaceConfig, space_from_json};
pub use element::Element;
pub use seed::SeedSpec;
pub use space::Space;
pub use tuple::Tuple;

/// Leaf seeding: one integer (or fresh entropy) becomes the RNG's new seed.
fn reseed_leaf(rng: &mut RngStream, seed: SeedSpec) -> Result<Vec<u64>> {
    let seed = match seed {
        SeedSpec::Int(s) => s,
        SeedSpec::None => entropy_seed(),
        SeedSpec::List(_) => return Err(SeedSpec::single_only()),
    };
    *rng = rng_from_seed(seed);
    Ok(vec![seed])
}

fn json_array<'a>(data: &'a Value, space: &str) -> Result<&'a Vec<Value>> {
    data.as_array()
        .ok_or_else(|| GymError::Serialization(format!("{space} expects a JSON array, got {data}")))
}

fn int_rows_to_json(batch: &[Element], space: &str) -> Result<Value> {
    batch
        .iter()
        .map(|e| {
            e.to_ints()
                .map(|v| Value::from(v.into_owned()))
                .ok_or_else(|| GymError::Serialization(format!("{space} cannot encode {e}")))
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn int_rows_from_json(data: &Value, space: &str) -> Result<Vec<Element>> {
    json_array(data, space)?
        .iter()
        .map(|row| {
            json_array(row, space)?
                .iter()
                .map(|v| {
                    v.as_i64()
                        .ok_or_else(|| {
                            GymError::Serialization(format!("{space} expects integers, got {v}"))
                        })
                })
                .collect::<Result<Vec<_>>>()
                .map(Element::IntArray)
        })
        .collect()
}

/// A discrete space of integers in [0, n).
pub struct Discrete {
    n: u32,
    rng: RngStream,
}

impl Discrete {
    pub fn new(n: u32) -> Self {
        assert!(n > 0, "Discrete space requires n > 0");
        Self { n, rng: rng_from_seed(entropy_seed()) }
    }

    pub fn n(&self) -> u32 { self.n }
}

impl PartialEq for Discrete {
    fn eq(&self, other: &Self) -> bool { self.n == other.n }
}

impl fmt::Debug for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discrete").field("n", &self.n).finish_non_exhaustive()
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Discrete({})", self.n) }
}

impl Space for Discrete {
    fn sample(&mut self) -> Element {
        // Uniform over [0, n)
        if self.n == 1 { return Element::Int(0); }
        let dist = Uniform::from(0..self.n);
        Element::Int(dist.sample(&mut self.rng) as i64)
    }

    fn contains(&self, elem: &Element) -> bool {
        elem.as_int().is_some_and(|v| 0 <= v && v < self.n as i64)
    }

    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>> { reseed_leaf(&mut self.rng, seed) }

    fn to_jsonable(&self, batch: &[Element]) -> Result<Value> {
        batch
            .iter()
            .map(|e| {
                e.as_int()
                    .map(Value::from)
                    .ok_or_else(|| GymError::Serialization(format!("Discrete cannot encode {e}")))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>> {
        json_array(data, "Discrete")?
            .iter()
            .map(|v| {
                v.as_i64()
                    .map(Element::Int)
                    .ok_or_else(|| {
                        GymError::Serialization(format!("Discrete expects integers, got {v}"))
                    })
            })
            .collect()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }

    fn dyn_eq(&self, other: &dyn Space) -> bool { space::same_kind_eq(self, other) }
}

/// A fixed-length binary vector space of size `n`.
/// Elements are integer arrays of 0/1 values.
pub struct MultiBinary {
    n: usize,
    rng: RngStream,
}

impl MultiBinary {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "MultiBinary requires n > 0");
        Self { n, rng: rng_from_seed(entropy_seed()) }
    }

    pub fn n(&self) -> usize { self.n }
}

impl PartialEq for MultiBinary {
    fn eq(&self, other: &Self) -> bool { self.n == other.n }
}

impl fmt::Debug for MultiBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiBinary").field("n", &self.n).finish_non_exhaustive()
    }
}

impl fmt::Display for MultiBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "MultiBinary({})", self.n) }
}

impl Space for MultiBinary {
    fn sample(&mut self) -> Element {
        // Sample each bit independently with p=0.5 using a uniform over {0,1}
        let dist = Uniform::from(0i64..=1i64);
        Element::IntArray((0..self.n).map(|_| dist.sample(&mut self.rng)).collect())
    }

    fn contains(&self, elem: &Element) -> bool {
        elem.to_ints()
            .is_some_and(|v| v.len() == self.n && v.iter().all(|&b| b == 0 || b == 1))
    }

    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>> { reseed_leaf(&mut self.rng, seed) }

    fn to_jsonable(&self, batch: &[Element]) -> Result<Value> { int_rows_to_json(batch, "MultiBinary") }

    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>> {
        int_rows_from_json(data, "MultiBinary")
    }

    fn as_any(&self) -> &dyn std::any::Any { self }

    fn dyn_eq(&self, other: &dyn Space) -> bool { space::same_kind_eq(self, other) }
}

/// A multi-dimensional discrete space with per-dimension sizes nvec[i] (values in [0, nvec[i])).
pub struct MultiDiscrete {
    nvec: Vec<u32>,
    rng: RngStream,
}

impl MultiDiscrete {
    pub fn new<I: Into<Vec<u32>>>(nvec: I) -> Self {
        let nvec = nvec.into();
        assert!(!nvec.is_empty(), "MultiDiscrete requires at least one dimension");
        for (i, &n) in nvec.iter().enumerate() {
            assert!(n > 0, "MultiDiscrete nvec[{i}] must be > 0");
        }
        Self { nvec, rng: rng_from_seed(entropy_seed()) }
    }

    pub fn nvec(&self) -> &[u32] { &self.nvec }
    pub fn ndim(&self) -> usize { self.nvec.len() }
}

impl PartialEq for MultiDiscrete {
    fn eq(&self, other: &Self) -> bool { self.nvec == other.nvec }
}

impl fmt::Debug for MultiDiscrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiDiscrete").field("nvec", &self.nvec).finish_non_exhaustive()
    }
}

impl fmt::Display for MultiDiscrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultiDiscrete({:?})", self.nvec)
    }
}

impl Space for MultiDiscrete {
    fn sample(&mut self) -> Element {
        let rng = &mut self.rng;
        Element::IntArray(
            self.nvec
                .iter()
                .map(|&n| if n == 1 { 0 } else { Uniform::from(0..n).sample(rng) as i64 })
                .collect(),
        )
    }

    fn contains(&self, elem: &Element) -> bool {
        let Some(v) = elem.to_ints() else { return false };
        v.len() == self.nvec.len()
            && v.iter().zip(self.nvec.iter()).all(|(&x, &n)| 0 <= x && x < n as i64)
    }

    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>> { reseed_leaf(&mut self.rng, seed) }

    fn to_jsonable(&self, batch: &[Element]) -> Result<Value> {
        int_rows_to_json(batch, "MultiDiscrete")
    }

    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>> {
        int_rows_from_json(data, "MultiDiscrete")
    }

    fn as_any(&self) -> &dyn std::any::Any { self }

    fn dyn_eq(&self, other: &dyn Space) -> bool { space::same_kind_eq(self, other) }
}

/// A Box-like space of `f64` vectors with a fixed length.
/// Uses per-dimension inclusive lower/upper bounds for validation and sampling.
pub struct BoxSpace {
    low: Vec<f64>,
    high: Vec<f64>,
    rng: RngStream,
}

impl BoxSpace {
    pub fn new<I: Into<Vec<f64>>>(low: I, high: I) -> Self {
        let (low, high) = (low.into(), high.into());
        assert_eq!(low.len(), high.len(), "low and high must have the same length");
        // Validate low <= high elementwise
        for i in 0..low.len() {
            assert!(low[i].is_finite() && high[i].is_finite(), "bounds[{i}] must be finite");
            assert!(low[i] <= high[i], "low[{i}] > high[{i}]");
            assert!((high[i] - low[i]).is_finite(), "high[{i}] - low[{i}] overflows");
        }
        Self { low, high, rng: rng_from_seed(entropy_seed()) }
    }

    pub fn low(&self) -> &[f64] { &self.low }
    pub fn high(&self) -> &[f64] { &self.high }
    pub fn ndim(&self) -> usize { self.low.len() }
}

impl PartialEq for BoxSpace {
    fn eq(&self, other: &Self) -> bool { self.low == other.low && self.high == other.high }
}

impl fmt::Debug for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxSpace")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box({:?}, {:?}, ({},))", self.low, self.high, self.low.len())
    }
}

impl Space for BoxSpace {
    fn sample(&mut self) -> Element {
        // Sample each dimension independently from Uniform[low, high]
        let rng = &mut self.rng;
        Element::FloatArray(
            self.low
                .iter()
                .zip(self.high.iter())
                .map(|(&lo, &hi)| Uniform::new_inclusive(lo, hi).sample(rng))
                .collect(),
        )
    }

    fn contains(&self, elem: &Element) -> bool {
        let Some(v) = elem.to_floats() else { return false };
        v.len() == self.low.len()
            && (0..v.len()).all(|i| self.low[i] <= v[i] && v[i] <= self.high[i])
    }

    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>> { reseed_leaf(&mut self.rng, seed) }

    fn to_jsonable(&self, batch: &[Element]) -> Result<Value> {
        batch
            .iter()
            .map(|e| {
                e.to_floats()
                    .map(|v| Value::from(v.into_owned()))
                    .ok_or_else(|| GymError::Serialization(format!("Box cannot encode {e}")))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>> {
        json_array(data, "Box")?
            .iter()
            .map(|row| {
                json_array(row, "Box")?
                    .iter()
                    .map(|v| {
                        v.as_f64()
                            .ok_or_else(|| {
                                GymError::Serialization(format!("Box expects numbers, got {v}"))
                            })
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Element::FloatArray)
            })
            .collect()
    }

    fn as_any(&self) -> &dyn std::any::Any { self }

    fn dyn_eq(&self, other: &dyn Space) -> bool { space::same_kind_eq(self, other) }
}
