pub mod config;
pub mod equality;
pub mod error;
pub mod selection;
pub mod tally;
pub mod telemetry;
pub mod validate;
pub mod value;

pub use error::{Error, Result};
pub use value::NonBlankTrimmedString;
