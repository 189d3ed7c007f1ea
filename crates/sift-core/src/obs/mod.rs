//! Observability: best-effort query diagnostics and sink abstractions.
//!
//! Query code never logs directly. Every notice flows through `Diagnostic`
//! and an injected `DiagnosticsSink`; delivery is never relied upon.

mod sink;

pub use sink::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticsSink, NoopSink, Severity, TRACING_TARGET,
    TracingSink,
};
pub(crate) use sink::{NOOP_SINK, Reporter};
