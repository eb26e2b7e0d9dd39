pub mod error;
pub mod style;
pub mod options;
pub mod config;

pub use error::*;
pub use style::*;
pub use options::*;
pub use config::*;
