pub mod arena;
pub mod body;
pub mod rng;
pub mod time;
