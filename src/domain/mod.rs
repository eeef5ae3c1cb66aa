// Domain types and value objects
mod classification;
mod sample;

// Re-export commonly used types to the world
pub use classification::{Classification, EventKind};
pub use sample::Sample;
