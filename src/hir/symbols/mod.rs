//! Hint extraction from the annotated tree.
//!
//! # Module structure
//!
//! - [`types`]: public and internal type definitions (Hint, HintKind, Capture)
//! - [`capture`]: per-kind capturers matched by type-path suffix
//! - [`arguments`]: parameter list classification and argument hints
//! - [`extract`]: the deadline-checked traversal entry point

mod arguments;
mod capture;
mod extract;
mod types;

pub use types::{Capture, CaptureSet, Hint, HintKind, UnknownHintKind, captures_for};

pub use extract::{Deadline, ExtractionStats, extract_hints};
