pub mod analyze;
pub mod logging;
