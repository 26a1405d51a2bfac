//! Integration tests exercising the HTTP API end to end.
//!
//! Database-backed tests require `TIMEPOOL_TEST_DATABASE_URL` to point at a
//! disposable PostgreSQL database and skip themselves when it is unset.

mod helpers;

mod health_test;
mod prediction_test;
mod session_test;
mod user_test;
mod winner_test;
