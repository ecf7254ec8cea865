// Common trait for Gymnasium spaces

use std::any::Any;
use std::fmt;

use serde_json::Value;

use crate::core::Result;
use crate::spaces::{Element, SeedSpec};

/// A trait implemented by all spaces, leaf or composite.
///
/// The trait is object safe so that composite spaces can own heterogeneous
/// children as `Box<dyn Space>`. Every space owns its PRNG; `seed` replaces
/// it and reports the seeds that were applied.
pub trait Space: Any + fmt::Debug + fmt::Display + Send {
    /// Draw a sample from the space using its own RNG.
    fn sample(&mut self) -> Element;

    /// Return true if the given element is a valid member of the space.
    /// Never fails: malformed shapes are simply not members.
    fn contains(&self, elem: &Element) -> bool;

    /// Reseed the space's RNG and return the seeds actually applied.
    fn seed(&mut self, seed: SeedSpec) -> Result<Vec<u64>>;

    /// Check that [`Space::seed`] would accept `seed`, without reseeding anything.
    /// Leaf spaces take a single integer or no seed.
    fn check_seed(&self, seed: &SeedSpec) -> Result<()> {
        match seed {
            SeedSpec::List(_) => Err(SeedSpec::single_only()),
            SeedSpec::Int(_) | SeedSpec::None => Ok(()),
        }
    }

    /// Convert a batch of samples into a JSON-compatible value.
    fn to_jsonable(&self, batch: &[Element]) -> Result<Value>;

    /// Convert a JSON-compatible value back into a batch of samples.
    fn from_jsonable(&self, data: &Value) -> Result<Vec<Element>>;

    fn as_any(&self) -> &dyn Any;

    /// Equality against a space of unknown concrete type.
    fn dyn_eq(&self, other: &dyn Space) -> bool;
}

impl<'a> dyn Space + 'a {
    pub fn is<T: Space>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Space>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<'a> PartialEq for dyn Space + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

/// `dyn_eq` for spaces whose equality is their `PartialEq`: equal only when
/// `other` is the same concrete kind.
pub(crate) fn same_kind_eq<T: Space + PartialEq>(this: &T, other: &dyn Space) -> bool {
    other.downcast_ref::<T>().is_some_and(|o| this == o)
}
