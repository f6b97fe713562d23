//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

pub mod shop_fixture;
pub mod stub_assertions;
