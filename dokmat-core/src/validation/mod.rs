//! Validation utilities for matrix coordinates and matrix text
//!
//! Pure functions with no I/O. The matrix type and the text parser
//! both go through these so bounds and format rules live in one place.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_dimensions, validate_index};
pub use parsing::{parse_element, parse_header, ElementLine};
