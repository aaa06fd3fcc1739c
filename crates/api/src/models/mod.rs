pub mod class;
pub mod markers;
pub mod name;
pub mod test_config;
pub mod types;

pub use class::*;
pub use name::*;
pub use test_config::*;
pub use types::*;
