//! Best-effort enrichment of a finished step sequence with student-facing
//! comments. Annotation is cosmetic: every failure mode degrades the single
//! affected step to a fixed fallback string and never aborts the request.

use crate::client::{GenerationRequest, TextGenerator};
use crate::prompts::{teaching_prompt, TUTOR_SYSTEM_PROMPT};
use tracing::debug;
use tutor_solver::{SolveStep, ORIGINAL_EQUATION};

/// Comment substituted when the generation call fails for any reason.
pub const FALLBACK_COMMENT: &str = "Great job following along with this step!";

const ANNOTATION_MAX_TOKENS: u32 = 100;
const ANNOTATION_TEMPERATURE: f32 = 0.7;

/// Fill in `teaching_comment` for every step except the original equation.
/// Calls run sequentially in step order; the sequence order is never changed.
pub async fn annotate_steps<G>(generator: &G, steps: &mut [SolveStep])
where
    G: TextGenerator + ?Sized,
{
    for step in steps.iter_mut() {
        if step.description.is_empty() || step.description == ORIGINAL_EQUATION {
            continue;
        }

        let request = GenerationRequest {
            system: TUTOR_SYSTEM_PROMPT.to_string(),
            user: teaching_prompt(&step.description),
            max_tokens: ANNOTATION_MAX_TOKENS,
            temperature: ANNOTATION_TEMPERATURE,
        };

        step.teaching_comment = match generator.generate(&request).await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, step = %step.description, "annotation fell back");
                FALLBACK_COMMENT.to_string()
            }
        };
    }
}
