pub mod character_map;
pub mod inverse_map;
pub mod style;
pub mod builtin;
pub mod catalog;
pub mod registry;

pub use character_map::*;
pub use inverse_map::*;
pub use style::*;
pub use catalog::*;
pub use registry::*;
