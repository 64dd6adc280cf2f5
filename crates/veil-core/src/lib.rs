pub mod error;
pub mod types;

pub use error::{VeilError, VeilResult};
pub use types::*;
