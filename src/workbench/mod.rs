//! Workbench: the client-side minification workflow as an explicit state
//! object.
//!
//! The browser page implements the same workflow in `static/app.js`; this
//! module is the canonical model of it, driven directly by the CLI and by
//! tests. All operations act on injected state (the gateway behind the
//! [`MinifyGateway`] trait, the buffers inside [`Workbench`]) rather than
//! ambient lookups, so the workflow is testable without a display surface.

use async_trait::async_trait;

use crate::minify::{self, ContentKind, MinifyOutcome, TransformError};
use crate::utils::byte_size::reduction_percent;

/// Error surfaced by a gateway implementation.
///
/// Carries only the message text; the workbench presents it verbatim, the
/// way the page surfaces an error alert.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct GatewayError(pub String);

impl From<TransformError> for GatewayError {
    fn from(e: TransformError) -> Self {
        Self(e.to_string())
    }
}

/// Anything that can answer a minify request for the workbench.
#[async_trait]
pub trait MinifyGateway: Send + Sync {
    async fn minify(&self, kind: ContentKind, code: &str) -> Result<MinifyOutcome, GatewayError>;
}

/// Gateway backed by the in-process engine.
///
/// Used by the CLI and integration tests; the browser workbench talks to
/// the same engine over `POST /minify` instead.
pub struct LocalGateway;

#[async_trait]
impl MinifyGateway for LocalGateway {
    async fn minify(&self, kind: ContentKind, code: &str) -> Result<MinifyOutcome, GatewayError> {
        Ok(minify::minify(kind, code)?)
    }
}

/// Errors in the workbench workflow itself, before or instead of a request.
#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    /// The source buffer is empty or whitespace-only; no request is made.
    #[error("Add some code first.")]
    EmptySource,

    /// A request is already outstanding; the trigger stays disabled until
    /// it resolves.
    #[error("A minify request is already in flight.")]
    RequestInFlight,

    /// The gateway reported a failure.
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

/// The minification workbench: two text buffers and the workflow around
/// them.
pub struct Workbench<G> {
    gateway: G,
    source: String,
    result: String,
    kind: ContentKind,
    in_flight: bool,
    last_outcome: Option<MinifyOutcome>,
}

impl<G: MinifyGateway> Workbench<G> {
    /// Creates a workbench with an empty source buffer and the script kind
    /// selected, matching the page's initial selector state.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            source: String::new(),
            result: String::new(),
            kind: ContentKind::Script,
            in_flight: false,
            last_outcome: None,
        }
    }

    /// Replaces the source buffer with directly entered text.
    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source = text.into();
    }

    /// Current source buffer.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// UTF-8 byte length of the source buffer, for the size readout.
    pub fn source_size(&self) -> usize {
        self.source.len()
    }

    /// Result buffer, empty until a minify succeeds.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Selected content kind.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Selects the content kind explicitly.
    pub fn set_kind(&mut self, kind: ContentKind) {
        self.kind = kind;
    }

    /// Whether a request is outstanding (the trigger control is disabled).
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Loads a picked or dropped file into the source buffer.
    ///
    /// The kind is inferred from the file extension, case-insensitively;
    /// unrecognized extensions leave the current selection unchanged.
    pub fn ingest_file(&mut self, file_name: &str, contents: String) {
        self.source = contents;
        if let Some(kind) = ContentKind::from_file_name(file_name) {
            self.kind = kind;
        }
    }

    /// Sends the source buffer through the gateway and stores the result.
    ///
    /// Refuses when the source is empty/whitespace-only or a request is
    /// already outstanding. The in-flight flag clears regardless of
    /// outcome, the way the page re-enables its trigger button.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError::EmptySource`], [`WorkbenchError::RequestInFlight`]
    /// or the gateway's error message.
    pub async fn minify(&mut self) -> Result<MinifyOutcome, WorkbenchError> {
        if self.source.trim().is_empty() {
            return Err(WorkbenchError::EmptySource);
        }
        if self.in_flight {
            return Err(WorkbenchError::RequestInFlight);
        }

        self.in_flight = true;
        let response = self.gateway.minify(self.kind, &self.source).await;
        self.in_flight = false;

        let outcome = response?;
        self.result = outcome.minified.clone();
        self.last_outcome = Some(outcome.clone());

        Ok(outcome)
    }

    /// Size reduction of the last successful minify, as a percentage.
    ///
    /// `None` before the first success or when the original was empty.
    pub fn reduction(&self) -> Option<f64> {
        let outcome = self.last_outcome.as_ref()?;
        reduction_percent(outcome.original_size, outcome.minified_size)
    }

    /// File name for exporting the result, by selected kind.
    pub fn output_file_name(&self) -> &'static str {
        self.kind.output_file_name()
    }
}
