//! End-to-end generation tests over the shop fixture.

pub mod tests_driver;
pub mod tests_properties;
