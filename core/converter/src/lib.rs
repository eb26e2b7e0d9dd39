pub mod normalizer;
pub mod width;
pub mod dakuten;
pub mod case;
pub mod engine;

pub use normalizer::*;
pub use width::*;
pub use dakuten::*;
pub use case::*;
pub use engine::*;

#[cfg(test)]
mod proptests;
