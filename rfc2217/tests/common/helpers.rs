// helpers.rs — shared setup for integration tests

pub use rfc2217::test_support::{established_mock_port, feed_server_bodies, subnegotiation};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
