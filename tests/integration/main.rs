//! Integration tests

mod e2e_test;
mod stream_test;
