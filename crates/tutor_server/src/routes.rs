//! Route handlers for the two endpoints the whiteboard frontend calls.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tutor_api_models::{DrawErrorReply, DrawRequest, MathStepsReply, MathStepsRequest, StepJson};
use tutor_llm::prompts::WHITEBOARD_SYSTEM_PROMPT;
use tutor_llm::{annotate_steps, ChatClient, GenerationError};
use tutor_solver::{steps_for, SolveStep};

const DRAW_MAX_TOKENS: u32 = 1000;
const DRAW_TEMPERATURE: f32 = 0.0;

pub struct AppState {
    pub client: ChatClient,
}

/// Build the application router. The frontend is served from another origin,
/// so CORS is fully permissive.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/math_steps", post(math_steps))
        .route("/draw", post(draw))
        .layer(cors)
        .with_state(state)
}

/// Solve an equation into annotated steps. Solver failures come back as an
/// `{ "error": ... }` body with HTTP 200; only the enrichment pass talks to
/// the network, and it never fails the request.
async fn math_steps(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MathStepsRequest>,
) -> Json<MathStepsReply> {
    let mut steps = match steps_for(request.equation.trim()) {
        Ok(steps) => steps,
        Err(err) => {
            info!(equation = %request.equation, error = %err, "solve rejected");
            return Json(MathStepsReply::error(describe_failure(&err)));
        }
    };

    annotate_steps(&state.client, &mut steps).await;

    Json(MathStepsReply::steps(steps.iter().map(step_json).collect()))
}

/// Forward a drawing instruction to the upstream model and relay its JSON
/// verbatim, or a structured error descriptor when the call fails.
async fn draw(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DrawRequest>,
) -> Result<Json<serde_json::Value>, Json<DrawErrorReply>> {
    let result = state
        .client
        .chat_raw(
            WHITEBOARD_SYSTEM_PROMPT,
            &request.instruction,
            DRAW_MAX_TOKENS,
            DRAW_TEMPERATURE,
        )
        .await;

    match result {
        Ok(body) => Ok(Json(body)),
        Err(err) => {
            warn!(error = %err, "draw proxy failed");
            let upstream_body = match &err {
                GenerationError::Status { body, .. } => body.clone(),
                _ => String::new(),
            };
            Err(Json(DrawErrorReply {
                error: "upstream API returned error".to_string(),
                detail: err.to_string(),
                body: upstream_body,
            }))
        }
    }
}

fn step_json(step: &SolveStep) -> StepJson {
    StepJson {
        latex: step.latex.clone(),
        explanation: step.description.clone(),
        teaching_comment: step.teaching_comment.clone(),
    }
}

fn describe_failure(err: &tutor_solver::SolveError) -> String {
    use tutor_parser::ParseError;
    use tutor_solver::SolveError;

    match err {
        // The missing-delimiter hint reads as guidance, not as a failure.
        SolveError::Parse(ParseError::MissingEquals) => err.to_string(),
        _ => format!("Error solving equation: {}", err),
    }
}
