//! Common utilities for the lenient HTML scanner.
//!
//! This crate provides shared infrastructure used by all scanner components:
//! - **Positions** - 1-based line/column locations for nodes and anomalies
//! - **Diagnostics** - the closed set of anomaly codes and the sink they flow into
//! - **Warning System** - colored, deduplicated terminal output

pub mod diagnostic;
pub mod position;
pub mod warning;

pub use diagnostic::{Diagnostic, DiagnosticCode, DiagnosticLog, DiagnosticSink};
pub use position::Position;
pub use warning::{WarningSink, clear_warnings, warn_once};
