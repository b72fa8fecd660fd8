//! # QR Collaborator Seam
//!
//! The external image generator that turns an encoded offer string into a
//! scannable visual. Pixel rendering lives outside this workspace; this
//! module only defines the seam the presenter awaits on.

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Image Source
// =============================================================================

/// An image reference the rendering layer can mount directly, e.g. a
/// `data:` URI or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        ImageSource(source.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Generator Seam
// =============================================================================

/// Image generation failure, as reported by the collaborator.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct QrError(pub String);

/// Asynchronous code-image generator.
///
/// One-shot per invocation: the presenter awaits a single `generate` call
/// and owns no retry policy. Implementations may fail; the failure
/// propagates to the presentation caller.
pub trait QrGenerator {
    /// Requests a scannable image for the given encoded offer string.
    fn generate(&self, data: &str) -> impl Future<Output = Result<ImageSource, QrError>> + Send;
}
