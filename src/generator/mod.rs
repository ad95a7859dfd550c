//! Generator module - batch generation, CSV sink, and the invocation driver.

mod batch;
mod run;
mod writer;

pub use batch::*;
pub use run::*;
pub use writer::*;
