//! # Coordinator
//!
//! Owns the UI state and wires form submissions to the recommendation
//! service. State changes go through [`reduce`], which replaces the state
//! wholesale on every event.
//!
//! Every request is tagged with a sequence number when it is dispatched.
//! A settlement carrying any number other than the latest is dropped, so an
//! older response can never overwrite a newer one.

use async_trait::async_trait;
use rec_client::{ClientError, RecommendResponse, Recommendation, RecommendationClient};
use tracing::debug;

use crate::form::FormSubmission;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub recommendations: Vec<Recommendation>,
    pub is_loading: bool,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Submitted { seq: u64 },
    Succeeded { seq: u64, items: Vec<Recommendation> },
    Failed { seq: u64, message: String },
}

/// Apply `event` given the latest dispatched sequence number.
pub fn reduce(state: UiState, latest_seq: u64, event: Event) -> UiState {
    match event {
        Event::Submitted { .. } => UiState {
            recommendations: state.recommendations,
            is_loading: true,
            error_message: String::new(),
        },
        Event::Succeeded { seq, items } if seq == latest_seq => UiState {
            recommendations: items,
            is_loading: false,
            error_message: state.error_message,
        },
        Event::Failed { seq, message } if seq == latest_seq => UiState {
            recommendations: state.recommendations,
            is_loading: false,
            error_message: message,
        },
        // Stale settlement
        _ => state,
    }
}

/// Text shown for a failed request: the body's `detail` string if present
/// and non-empty.
pub fn error_message(err: &ClientError) -> String {
    err.body()
        .and_then(|body| body.get("detail"))
        .and_then(|detail| detail.as_str())
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string())
}

/// Anything that can answer a form submission.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch(&self, submission: &FormSubmission) -> rec_client::Result<RecommendResponse>;
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn fetch(&self, submission: &FormSubmission) -> rec_client::Result<RecommendResponse> {
        self.get_recommendations(
            &submission.education,
            &submission.skills_raw,
            &submission.location,
        )
        .await
    }
}

pub struct Coordinator<S> {
    source: S,
    state: UiState,
    latest_seq: u64,
}

impl<S: RecommendationSource> Coordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: UiState::default(),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Mark a new request as in flight and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.dispatch(Event::Submitted { seq });
        seq
    }

    pub async fn fetch(
        &self,
        submission: &FormSubmission,
    ) -> rec_client::Result<RecommendResponse> {
        self.source.fetch(submission).await
    }

    /// Apply the outcome of request `seq`. Returns false if it was stale.
    pub fn settle(&mut self, seq: u64, result: rec_client::Result<RecommendResponse>) -> bool {
        if seq != self.latest_seq {
            debug!("Discarding stale result #{} (latest #{})", seq, self.latest_seq);
            return false;
        }

        let event = match result {
            Ok(response) => Event::Succeeded {
                seq,
                items: response.into_items(),
            },
            Err(err) => {
                debug!("Request #{} failed: {}", seq, err);
                Event::Failed {
                    seq,
                    message: error_message(&err),
                }
            }
        };
        self.dispatch(event);
        true
    }

    /// Run one full submission: begin, call the service, settle.
    pub async fn handle_submit(&mut self, submission: FormSubmission) {
        let seq = self.begin();
        let result = self.fetch(&submission).await;
        self.settle(seq, result);
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, self.latest_seq, event);
    }
}
