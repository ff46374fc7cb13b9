//! Signature capture gate.
//!
//! Drawing and rendering are delegated to an external signature-pad
//! collaborator; the gate only compares the pad's serialized output against
//! a baseline captured at page load, which is how an untouched pad is told
//! apart from a signed one.

use crate::error::{submission_guard_error, TallyResult};
use tracing::debug;

/// External signature-capture collaborator
pub trait SignaturePad {
    /// Wipe the pad back to its blank state
    fn clear(&mut self);

    /// Serialize the current drawing
    fn to_data_url(&self) -> String;

    /// Restore a previously serialized drawing
    fn from_data_url(&mut self, data: &str);
}

/// Gate blocking submission while the signature pad is untouched
#[derive(Debug, Clone)]
pub struct SignatureGate {
    baseline: String,
}

impl SignatureGate {
    /// Capture the pad's blank output as the comparison baseline.
    /// Call once, before the user can draw.
    pub fn capture(pad: &impl SignaturePad) -> Self {
        Self {
            baseline: pad.to_data_url(),
        }
    }

    /// Whether the pad output still matches the load-time baseline
    pub fn is_blank(&self, pad: &impl SignaturePad) -> bool {
        pad.to_data_url() == self.baseline
    }

    /// Check that the pad has been drawn on before allowing submission
    pub fn check_submit(&self, pad: &impl SignaturePad) -> TallyResult<()> {
        if self.is_blank(pad) {
            Err(submission_guard_error("Signature is required!"))
        } else {
            Ok(())
        }
    }

    /// Boolean form of the submit check: true means the submission may
    /// proceed, false means it was blocked. The user may retry.
    pub fn handle_submit(&self, pad: &impl SignaturePad) -> bool {
        match self.check_submit(pad) {
            Ok(()) => true,
            Err(err) => {
                debug!("Submission blocked: {}", err);
                false
            }
        }
    }
}
