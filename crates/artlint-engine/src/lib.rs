//! Artlint Rule Engine
//!
//! Runs style and accessibility checks against a design document and
//! aggregates structured violation reports.
//!
//! A run takes three inputs: a [`Document`](artlint_document::Document)
//! (produced by an external loader), a [`RuleSetConfig`] mapping rule names
//! to per-rule configuration, and the registered rules. The engine indexes
//! the document once, then drives every active rule sequentially; each rule
//! reads the index through a fresh [`RuleContext`] and reports violations.
//! Rule failures are isolated: a broken rule contributes one
//! [`RuleError`] and never suppresses violations from the others.
//!
//! # Example
//!
//! ```
//! use artlint_document::{Document, Frame, Layer};
//! use artlint_engine::{rules, RuleRegistry};
//!
//! let doc = Document::new(vec![Layer::artboard(
//!     "screen-1",
//!     "Odd Screen",
//!     Frame::sized(123.0, 456.0),
//! )]);
//!
//! let registry = RuleRegistry::default_rules();
//! let report = registry.run(&doc, &rules::recommended_config()).unwrap();
//!
//! for violation in &report.violations {
//!     println!("[{}] {}: {}", violation.rule_name, violation.node_id, violation.message);
//! }
//! ```
//!
//! # Modules
//!
//! - [`index`]: kind-keyed object index over the document tree
//! - [`options`]: option schemas, values, validation, and resolution
//! - [`config`]: caller-supplied rule-set configuration
//! - [`rule`]: the [`Rule`] trait and check errors
//! - [`context`]: the per-invocation facade handed to checks
//! - [`runner`]: the registry and the sequential run loop
//! - [`report`]: violations, rule errors, and the aggregate report
//! - [`rules`]: the built-in rule set

pub mod config;
pub mod context;
pub mod error;
pub mod index;
pub mod options;
pub mod report;
pub mod rule;
pub mod rules;
pub mod runner;

pub use config::{RuleConfig, RuleSetConfig};
pub use context::RuleContext;
pub use error::EngineError;
pub use index::{ObjectClass, ObjectIndex};
pub use options::{OptionError, OptionKind, OptionSchema, OptionValue, ResolvedOptions};
pub use report::{RuleError, RunReport, RunSummary, Severity, Violation};
pub use rule::{CheckError, Rule, RuleText};
pub use runner::{RuleMetadata, RuleRegistry};
