//! Diagnostics sink boundary.
//!
//! Evaluator, ordering engine and façade MUST NOT log directly.
//! All notices flow through `Diagnostic` and `DiagnosticsSink`.
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    fmt::{self, Display},
};

/// Target used for every `tracing` event emitted by `TracingSink`.
pub const TRACING_TARGET: &str = "sift::query";

pub(crate) static NOOP_SINK: NoopSink = NoopSink;

///
/// Severity
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Debug,
    Info,
    Warn,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        };
        write!(f, "{label}")
    }
}

///
/// DiagnosticKind
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    /// Right-hand `match` text could not be compiled; the match is false.
    PatternCompileFailed { pattern: String, error: String },

    /// `containedIn` reached with operands other than a property and a value set.
    NonCanonicalContainedIn,

    /// A non-boolean result was fed to `and`, `or` or `negate`.
    NonBooleanOperand { operator: &'static str },

    /// Entities absent from an explicit identifier sequence were appended.
    UnlistedIdentifiers { count: usize },

    /// Filter answered by identifier lookups instead of a scan.
    IdentifierFastPath { requested: usize, found: usize },

    /// Explicit identifier ordering answered directly from the identifier map.
    ExplicitSequenceFastPath { listed: usize },
}

impl DiagnosticKind {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::PatternCompileFailed { .. } => Severity::Warn,
            Self::NonCanonicalContainedIn
            | Self::NonBooleanOperand { .. }
            | Self::UnlistedIdentifiers { .. }
            | Self::IdentifierFastPath { .. }
            | Self::ExplicitSequenceFastPath { .. } => Severity::Debug,
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternCompileFailed { pattern, error } => {
                write!(f, "pattern '{pattern}' failed to compile: {error}")
            }
            Self::NonCanonicalContainedIn => {
                write!(f, "containedIn requires a property and a value set; evaluated to false")
            }
            Self::NonBooleanOperand { operator } => {
                write!(f, "non-boolean operand to '{operator}' treated as false")
            }
            Self::UnlistedIdentifiers { count } => {
                write!(f, "{count} entities absent from explicit order appended")
            }
            Self::IdentifierFastPath { requested, found } => {
                write!(f, "identifier lookup filter: {found} of {requested} found")
            }
            Self::ExplicitSequenceFastPath { listed } => {
                write!(f, "explicit order emitted from identifier map ({listed} listed)")
            }
        }
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(kind: DiagnosticKind) -> Self {
        Self {
            severity: kind.severity(),
            kind,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.kind)
    }
}

///
/// DiagnosticsSink
///

pub trait DiagnosticsSink {
    fn record(&self, diagnostic: &Diagnostic);
}

///
/// NoopSink
/// Discards everything. Default for engines built without a sink.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&self, _: &Diagnostic) {}
}

///
/// TracingSink
/// Forwards diagnostics as `tracing` events under `TRACING_TARGET`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Debug => tracing::debug!(target: TRACING_TARGET, "{}", diagnostic.kind),
            Severity::Info => tracing::info!(target: TRACING_TARGET, "{}", diagnostic.kind),
            Severity::Warn => tracing::warn!(target: TRACING_TARGET, "{}", diagnostic.kind),
        }
    }
}

///
/// CollectingSink
/// Keeps every diagnostic in arrival order for later inspection.
///

#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}

///
/// Reporter
///
/// Sink handle carried by the engines: applies the configured severity
/// floor before anything reaches the sink.
///

#[derive(Clone, Copy)]
pub(crate) struct Reporter<'s> {
    sink: &'s dyn DiagnosticsSink,
    min_severity: Severity,
}

impl<'s> Reporter<'s> {
    pub(crate) const fn new(sink: &'s dyn DiagnosticsSink, min_severity: Severity) -> Self {
        Self { sink, min_severity }
    }

    pub(crate) fn report(&self, kind: DiagnosticKind) {
        if kind.severity() >= self.min_severity {
            self.sink.record(&Diagnostic::new(kind));
        }
    }
}

impl fmt::Debug for Reporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("min_severity", &self.min_severity)
            .finish_non_exhaustive()
    }
}

///
/// TESTS
///
