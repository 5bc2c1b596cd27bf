/// Submission lifecycle
///
/// One session per strategy: the presentation layer submits a
/// `ProfileSelection` snapshot and renders whatever state comes back. At
/// most one submission is in flight at a time; submitting while a request
/// is outstanding is ignored, and every new cycle replaces the previous
/// outcome wholesale.
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{RecommendError, RecommendResult, ValidationError},
    models::{ProfileSelection, RecommendationRecord, RecommendationSet, Strategy},
    services::{encoder, normalizer, RecommendationProvider},
};

/// Generic user-facing failure message; the precise cause goes to the
/// diagnostic log, never the screen.
const REQUEST_FAILED_MESSAGE: &str =
    "Erro ao buscar as recomendações. Verifique a API e tente novamente.";

/// Which stage of the cycle a failed submission died in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Request,
    Normalization,
}

/// What went wrong with the current submission, in user-facing form
#[derive(Debug, Clone, PartialEq)]
pub struct SessionError {
    pub kind: FailureKind,
    /// Message suitable for direct display.
    pub message: String,
}

impl SessionError {
    fn validation(error: &ValidationError) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: error.to_string(),
        }
    }

    fn failure(error: &RecommendError) -> Self {
        let kind = match error {
            RecommendError::Validation(_) => FailureKind::Validation,
            RecommendError::Request(_) => FailureKind::Request,
            RecommendError::Normalization(_) => FailureKind::Normalization,
        };
        Self {
            kind,
            message: REQUEST_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Lifecycle of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Validating,
    Requesting,
    Success(RecommendationSet),
    /// The service answered but nothing matched; distinct from `Error`.
    Empty,
    Error(SessionError),
}

/// Tracks one submission cycle against one strategy endpoint
pub struct RecommendationSession {
    provider: Box<dyn RecommendationProvider>,
    strategy: Strategy,
    state: SessionState,
}

impl RecommendationSession {
    pub fn new(provider: Box<dyn RecommendationProvider>, strategy: Strategy) -> Self {
        Self {
            provider,
            strategy,
            state: SessionState::Idle,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the UI should allow a submission right now
    ///
    /// The submit trigger must be disabled while this is false; the guard
    /// in `submit` enforces it regardless.
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, SessionState::Requesting)
    }

    /// User-facing message for the `Empty` state
    pub fn empty_message(&self) -> &'static str {
        self.strategy.empty_message()
    }

    /// Runs one full submission cycle and returns the resulting state
    ///
    /// A call while a request is outstanding is ignored. The previous
    /// outcome is discarded as soon as the new cycle starts validating; a
    /// validation reject surfaces without any network call.
    pub async fn submit(&mut self, selection: &ProfileSelection) -> &SessionState {
        if !self.can_submit() {
            tracing::warn!(
                strategy = %self.strategy,
                "Submission ignored: request already in flight"
            );
            return &self.state;
        }

        let submission_id = Uuid::new_v4();
        self.state = SessionState::Validating;

        let vector = match encoder::encode(selection, self.strategy) {
            Ok(vector) => vector,
            Err(e) => {
                tracing::warn!(
                    submission_id = %submission_id,
                    strategy = %self.strategy,
                    error = %e,
                    "Selection rejected before submission"
                );
                self.state = SessionState::Error(SessionError::validation(&e));
                return &self.state;
            }
        };

        self.state = SessionState::Requesting;

        match self.request(&vector).await {
            Ok(records) if records.is_empty() => {
                tracing::info!(
                    submission_id = %submission_id,
                    strategy = %self.strategy,
                    "No recommendations matched the profile"
                );
                self.state = SessionState::Empty;
            }
            Ok(records) => {
                tracing::info!(
                    submission_id = %submission_id,
                    strategy = %self.strategy,
                    records = records.len(),
                    provider = self.provider.name(),
                    "Recommendations received"
                );
                self.state = SessionState::Success(RecommendationSet {
                    records,
                    received_at: Utc::now(),
                });
            }
            Err(e) => {
                tracing::error!(
                    submission_id = %submission_id,
                    strategy = %self.strategy,
                    error = %e,
                    "Recommendation request failed"
                );
                self.state = SessionState::Error(SessionError::failure(&e));
            }
        }

        &self.state
    }

    async fn request(
        &self,
        vector: &encoder::FeatureVector,
    ) -> RecommendResult<Vec<RecommendationRecord>> {
        let raw = self.provider.submit(vector, self.strategy).await?;
        let records = normalizer::normalize(&raw, self.strategy)?;
        Ok(records)
    }
}
