pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;

pub use error::{ErrorKind, KernelError, Result};
