//! Hint extraction tests
//!
//! Tests for:
//! - Kind capturers (selectors, imports, variables, mixins, functions)
//! - Argument extraction and signatures
//! - Nesting depth, scopes and visibility filters
//! - Lazy, idempotent capture and timeouts

pub mod tests_arguments;
pub mod tests_extraction;
pub mod tests_lazy_capture;
