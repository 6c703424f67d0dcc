//! Environment-driven test profiles shared by CI and local runs.

pub mod property_test_profile;
