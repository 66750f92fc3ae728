//! Interaction Controller: drives one session through its discrete actions.
//!
//! Flow for "Analyze": extract text → build prompt → LLM → extract score.
//! Flow for "Ask follow-up": build follow-up prompt from the question, resume
//! text and latest response → LLM.
//!
//! Every action computes its result first and only then commits the new state,
//! so a failed action leaves the session exactly as it was.

use serde::Serialize;
use tracing::info;

use crate::analysis::mode::AnalysisMode;
use crate::analysis::prompt_builder::{build_follow_up_prompt, build_prompt};
use crate::analysis::score::extract_score;
use crate::document::{extract_text, UploadedDocument};
use crate::errors::AppError;
use crate::llm_client::LlmService;
use crate::session::{Analysis, FollowUp, InteractionState, Session};

/// Inputs of the "Analyze" action besides the uploaded document.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeParams {
    pub mode: AnalysisMode,
    pub job_description: Option<String>,
}

/// What the UI renders after an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub mode: AnalysisMode,
    pub score: Option<u32>,
    pub response: String,
}

/// Stores a freshly uploaded document. Any earlier analysis is discarded.
pub fn upload(session: &mut Session, document: UploadedDocument) {
    info!(
        "Session {}: received '{}' ({} bytes)",
        session.id,
        document.filename,
        document.size()
    );
    session.state = InteractionState::Uploaded { document };
    session.touch();
}

/// Runs an analysis. Fails with `MissingInput` without touching the LLM when
/// nothing was uploaded. Re-analysis reuses the already extracted resume text.
pub async fn analyze(
    session: &mut Session,
    llm: &dyn LlmService,
    params: AnalyzeParams,
) -> Result<AnalysisOutcome, AppError> {
    let resume_text = match session.state.analysis() {
        Some(previous) => previous.resume_text.clone(),
        None => extract_text(session.state.document()).await?,
    };

    let job_description = params
        .job_description
        .filter(|jd| !jd.trim().is_empty());

    let prompt = build_prompt(params.mode, &resume_text, job_description.as_deref());

    let response = llm
        .generate(&resume_text, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Analysis failed: {e}")))?;

    let score = extract_score(&response);

    info!(
        "Session {}: {} analysis complete (resume {} chars, score {:?})",
        session.id,
        params.mode,
        resume_text.len(),
        score
    );

    let outcome = AnalysisOutcome {
        mode: params.mode,
        score,
        response: response.clone(),
    };

    session.state = InteractionState::Analyzed {
        analysis: Analysis {
            mode: params.mode,
            resume_text,
            job_description,
            response,
            score,
        },
    };
    session.touch();

    Ok(outcome)
}

/// Answers a follow-up question against the resume and the latest response.
pub async fn ask_follow_up(
    session: &mut Session,
    llm: &dyn LlmService,
    question: &str,
) -> Result<FollowUp, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let (analysis, latest) = match (session.state.analysis(), session.state.latest_response()) {
        (Some(analysis), Some(latest)) => (analysis, latest),
        _ => {
            return Err(AppError::InvalidState(
                "Analyze a resume before asking follow-up questions".to_string(),
            ))
        }
    };

    let prompt = build_follow_up_prompt(question, &analysis.resume_text, latest);

    let answer = llm
        .generate(&analysis.resume_text, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Follow-up failed: {e}")))?;

    let exchange = FollowUp {
        question: question.to_string(),
        answer,
    };

    let state = std::mem::replace(&mut session.state, InteractionState::Idle);
    session.state = match state {
        InteractionState::Analyzed { analysis } => InteractionState::Answered {
            analysis,
            exchanges: vec![exchange.clone()],
        },
        InteractionState::Answered {
            analysis,
            mut exchanges,
        } => {
            exchanges.push(exchange.clone());
            InteractionState::Answered {
                analysis,
                exchanges,
            }
        }
        other => other,
    };
    session.touch();

    info!(
        "Session {}: follow-up answered ({} so far)",
        session.id,
        session.state.exchanges().len()
    );

    Ok(exchange)
}
