//! Stock service integration tests.

mod http;
