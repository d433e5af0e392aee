// ISO 8601 Duration Library
//
// This library converts between the textual ISO 8601 duration notation
// (e.g. "P1Y2DT3H4M5S") and a structured numeric representation, and
// converts that representation into a fixed-length std::time::Duration.

// Duration Value Type
// The structured representation, its canonical text form, and the
// fixed-length conversion to std::time::Duration
pub mod duration;

// Grammar
// Parsing of the textual notation into the structured representation
mod parse;

// Error Handling
// Classified parse failures, comparable by value
pub mod error;

// Re-export important types to simplify imports
pub use duration::Duration;
pub use error::{Error, Field};
