//! Test module for zod-runtime
//!
//! Unit and property-based tests (proptest) for schema parsing,
//! coercion, issue reporting and configuration.


#[cfg(test)]
pub mod number_tests;



#[cfg(test)]
pub mod collection_tests;

#[cfg(test)]
pub mod effects_tests;

#[cfg(test)]
pub mod error_tests;

#[cfg(test)]
pub mod config_tests;
