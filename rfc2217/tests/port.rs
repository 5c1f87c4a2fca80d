// Aggregator for port model integration tests in `tests/port/`.

#[path = "port/startup_test.rs"]
mod startup_test;

#[path = "port/events_test.rs"]
mod events_test;
