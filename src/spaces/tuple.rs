//! The `Tuple` product space.
//!
//! A `Tuple` owns an ordered, fixed-arity list of child spaces of any kind and
//! is itself a [`Space`], so tuples nest. Seeding, sampling, membership and
//! JSON conversion are delegated child by child, always in child order.

use std::any::Any;
use std::fmt;
use std::ops::Index;

use serde_json::Value;

use crate::core::{GymError, Result};
use crate::spaces::{Element, SeedSpec, Space};
use crate::utils::rng::{RngStream, draw_subseeds, entropy_seed, rng_from_seed};

/// A product of simpler spaces; elements are `Element::Tuple`s.
///
/// ```
/// use rust_gymnasium_spaces::{Discrete, Element, SeedSpec, Space, Tuple};
///
/// let mut space = Tuple::new([
///     Box::new(Discrete::new(2)) as Box<dyn Space>,
///     Box::new(Discrete::new(3)),
/// ]);
/// space.seed(SeedSpec::Int(0)).unwrap();
/// assert!(space.contains(&Element::from((1, 2))));
/// assert!(!space.contains(&Element::from((1, 3))));
/// ```
pub struct Tuple {
    spaces: Box<[Box<dyn Space>]>,
    // Only used to derive child sub-seeds from a single integer seed.
    rng: RngStream,
}

impl Tuple {
    /// Build a tuple from its children. Children keep whatever RNG state they have.
    pub fn new<I>(spaces: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Space>>,
    {
        Self {
            spaces: spaces.into_iter().collect(),
            rng: rng_from_seed(entropy_seed()),
        }
    }

    /// Build a tuple and seed it immediately.
    pub fn with_seed<I>(spaces: I, seed: SeedSpec) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Space>>,
    {
        let mut tuple = Self::new(spaces);
        tuple.seed(seed)?;
        Ok(tuple)
    }

    /// Number of child spaces.
    pub fn len(&self) -> usize { self.spaces.len() }

    pub fn is_empty(&self) -> bool { self.spaces.is_empty() }

    pub fn get(&self, index: usize) -> Option<&dyn Space> {
        self.spaces.get(index).map(|s| &**s)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Space> + '_ {
        self.spaces.iter().map(|s| &**s)
    }

    fn check_seeds(&self, seeds: &[SeedSpec]) -> Result<()> {
        if seeds.len() != self.spaces.len() {
            return Err(GymError::InvalidSeed(format!(
                "expected {} seeds for {}, got {}",
                self.spaces.len(),
                self,
                seeds.len()
            )));
        }
        self.spaces.iter().zip(seeds).try_for_each(|(space, seed)| space.check_seed(seed))
    }

    fn seed_each(&mut self, seeds: Vec<SeedSpec>) -> Result<Vec<u64>> {
        // Every entry is checked before any child is reseeded.
        self.check_seeds(&seeds)?;
        let mut applied = Vec::new();
        for (space, seed) in self.spaces.iter_mut().zip(seeds) {
            applied.extend(space.seed(seed)?);
        }
        Ok(applied)
    }

    fn seed_from_int(&mut self, seed: u64) -> Result<Vec<u64>> {
        self.rng = rng_from_seed(seed);
        let mut applied = vec![seed];
        let subseeds = draw_subseeds(&mut self.rng, self.spaces.len());
        for (space, subseed) in self.spaces.iter_mut().zip(subseeds) {
            // A child reports its own seed first; nested seeds stay internal.
            let reported = space.seed(SeedSpec::Int(subseed))?;
            applied.extend(reported.first().copied());
        }
        log::debug!("seeded {} from {}: {:?}", self, seed, applied);
        Ok(applied)
    }

    fn seed_unseeded(&mut self) -> Result<Vec<u64>> {
        let mut applied = Vec::new();
        for space in self.spaces.iter_mut() {
            applied.extend(space.seed(SeedSpec::None)?);
        }
        Ok(applied)
    }
}

/// Column pass: split a batch of tuples into one column per child.
pub(crate) fn columns(batch: &[Element], arity: usize) -> Result<Vec<Vec<Element>>> {
    let mut cols = vec![Vec::with_capacity(batch.len()); arity];
    for sample in batch {
        let parts = sample
            .as_parts()
            .filter(|parts| parts.len() == arity)
            .ok_or_else(|| {
                GymError::Serialization(format!(
                    "expected a tuple of {arity} elements, got {sample}"
                ))
            })?;
        for (col, part) in cols.iter_mut().zip(parts.iter()) {
            col.push(part.clone());
        }
    }
    Ok(cols)
}

/// Row pass: zip decoded columns back into tuples, truncating to the shortest column.
pub(crate) fn transpose(cols: Vec<Vec<Element>>) -> Vec<Element> {
    let rows = cols.iter().map(Vec::len).min().unwrap_or(0);
    let mut iters: Vec<_> = cols.into_iter().map(Vec::into_iter).collect();
    (0..rows)
        .map(|_| Element::Tuple(iters.iter_mut().filter_map(Iterator::next).collect()))
        .collect()
}

impl Space for Tuple {
    fn sample(&mut self) -> Element {
        Element::Tuple(self.spaces.iter_mut().map(|s| s.sample()).collect())
    }

    fn contains(&self, elem: &Element) -> bool {
        let Some(parts) = elem.as_parts() else { return false };
        parts.len() == self.spaces.len()
            && self.spaces.iter().zip(parts.iter()).all(|(space, part)| space.contains(part))
    }

    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>> {
        match seed {
            SeedSpec::List(seeds) => self.seed_each(seeds),
            SeedSpec::Int(seed) => self.seed_from_int(seed),
            SeedSpec::None => self.seed_unseeded(),
        }
    }

    fn check_seed(&self, seed: &SeedSpec) -> Result<()> {
        match seed {
            SeedSpec::List(seeds) => self.check_seeds(seeds),
            SeedSpec::Int(_) | SeedSpec::None => Ok(()),
        }
    }

    fn to_jsonable(&self, batch: &[Element]) -> Result<Value> {
        let cols = columns(batch, self.spaces.len())?;
        self.spaces
            .iter()
            .zip(cols)
            .map(|(space, col)| space.to_jsonable(&col))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>> {
        let encoded = data
            .as_array()
            .filter(|cols| cols.len() == self.spaces.len())
            .ok_or_else(|| {
                GymError::Serialization(format!(
                    "expected a JSON array of {} columns for {}, got {}",
                    self.spaces.len(),
                    self,
                    data
                ))
            })?;
        let cols = self
            .spaces
            .iter()
            .zip(encoded)
            .map(|(space, col)| space.from_jsonable(col))
            .collect::<Result<Vec<_>>>()?;
        Ok(transpose(cols))
    }

    fn as_any(&self) -> &dyn Any { self }

    fn dyn_eq(&self, other: &dyn Space) -> bool {
        other.downcast_ref::<Tuple>().is_some_and(|o| self == o)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool { self.spaces == other.spaces }
}

impl Index<usize> for Tuple {
    type Output = dyn Space;

    fn index(&self, index: usize) -> &Self::Output { &*self.spaces[index] }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a dyn Space;
    type IntoIter = Box<dyn Iterator<Item = &'a dyn Space> + 'a>;

    fn into_iter(self) -> Self::IntoIter { Box::new(self.iter()) }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tuple").field(&self.spaces).finish()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tuple(")?;
        for (i, space) in self.spaces.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{space}")?;
        }
        f.write_str(")")
    }
}
