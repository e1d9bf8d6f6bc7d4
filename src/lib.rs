pub mod error;
pub mod generator;
pub mod markers;
pub mod params;
pub mod quality;
pub mod random;
pub mod sampler;
pub mod paths {
    pub mod path;
    pub mod random_path;
}

pub use error::{PathError, Result};
pub use generator::{Decision, PathGenerator};
pub use params::{ConfigurationHazard, GenerationParameters, TurnWindow};
pub use quality::Quality;
pub use sampler::sample_at;
