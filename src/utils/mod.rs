pub mod rng;

pub use rng::{RngStream, SUBSEED_DOMAIN, draw_subseeds, entropy_seed, rng_from_seed};
