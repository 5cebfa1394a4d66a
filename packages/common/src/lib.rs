pub mod error;
pub mod loader;
pub mod result;

pub use error::*;
pub use loader::*;
pub use result::*;
