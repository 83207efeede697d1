//! Classification module - asset class and sub-category heuristics.
//!
//! Classification is a pure function over a position plus a rule table, so
//! the heuristic patterns are data rather than inline control flow.

mod classification_model;
mod classification_rules;
mod classification_service;


// Re-export the public interface
pub use classification_model::{Classification, SubCategory};
pub use classification_rules::{default_rules, ClassificationRules};
pub use classification_service::classify;
