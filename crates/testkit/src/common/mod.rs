pub mod consts;
pub mod logging;

pub use consts::*;
pub use logging::*;
