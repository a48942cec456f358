pub mod api;
pub mod core;
pub mod input;
pub mod render;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::galaxy::{Galaxy, BOOST_KEY};
pub use api::types::{BodyId, ToneEvent, Waveform};
pub use core::arena::BodyArena;
pub use core::body::{Body, BodyKind, SpawnOrigin, TRAIL_CAP};
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use render::canvas::{Canvas, CanvasVertex, Rgba};
pub use systems::starfield::Starfield;
