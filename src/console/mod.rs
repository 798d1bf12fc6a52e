pub mod driver;
pub mod error;
pub mod resolve;

pub use driver::run;
pub use error::{ConsoleError, Result};
