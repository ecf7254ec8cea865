pub mod core;
pub mod spaces;
pub mod utils;

pub use crate::core::{GymError, Result};
pub use crate::spaces::{
    BoxSpace, Discrete, Element, MultiBinary, MultiDiscrete, SeedSpec, Space, SpaceConfig, Tuple,
    space_from_json,
};
pub use crate::utils::{RngStream, draw_subseeds, rng_from_seed};
