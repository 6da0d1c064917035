pub mod enriched;
pub mod error;
pub mod feed;

pub use enriched::*;
pub use error::{Error, Result};
pub use feed::*;
