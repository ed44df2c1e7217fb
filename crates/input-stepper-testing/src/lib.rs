//! Testing utilities and harness for input steppers

pub mod fake_dom;
pub mod robot;
pub mod robot_assertions;

pub use fake_dom::*;
pub use robot::*;

/// Routes `log` output to the test harness. Safe to call from every test.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::fake_dom::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
