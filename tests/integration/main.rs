//! Integration tests against a mock chart provider

mod common;
mod fetcher_test;
