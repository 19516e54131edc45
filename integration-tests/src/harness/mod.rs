pub mod fixture;
pub mod tracing;

pub use self::fixture::LogFixture;
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
