use tracing::{debug, warn};

/// Per-entry extraction outcomes. None of these fail the page; the extractor
/// reports them through a sink and moves on to the next entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// One of the required sub-fields was absent from the entry.
    MissingData { name: String },
    /// The rating phrase did not start with a numeric token.
    RatingMalformed { name: String, text: String },
    /// The entry parsed fine but fell below the configured threshold.
    BelowMinRating { name: String, rating: f64 },
}

/// Where the extractor sends its per-entry diagnostics. Keeps the extraction
/// core free of logging side effects.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink: forwards to the log stream.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MissingData { name } => {
                warn!("skipping '{}': missing data", name);
            }
            Diagnostic::RatingMalformed { name, text } => {
                warn!("skipping '{}': unparseable rating '{}'", name, text);
            }
            Diagnostic::BelowMinRating { name, rating } => {
                debug!("skipping '{}': rating {} below threshold", name, rating);
            }
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
