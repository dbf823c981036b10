use crate::{
    builder,
    capture::InputCapture,
    config::GeminiConfig,
    error::{AdError, GENERIC_FAILURE_MESSAGE},
    gemini::{ImageClient, ImageService},
    logger, resolver,
    models::GeneratedAd,
};
use std::sync::Arc;

/// Lifecycle of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Validating,
    Requesting,
    Succeeded(GeneratedAd),
    Failed(AdError),
}

impl AttemptState {
    pub fn name(&self) -> &'static str {
        match self {
            AttemptState::Idle => "idle",
            AttemptState::Validating => "validating",
            AttemptState::Requesting => "requesting",
            AttemptState::Succeeded(_) => "succeeded",
            AttemptState::Failed(_) => "failed",
        }
    }
}

fn log_transition(from: &AttemptState, to: &AttemptState) {
    log::debug!("Workflow state: {} -> {}", from.name(), to.name());
}

/// Holds the workflow in `Requesting` while the service call is pending.
/// Dropped unfinished, it fails the attempt so the busy flag is released.
struct InFlight<'a> {
    state: &'a mut AttemptState,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut AttemptState) -> Self {
        log_transition(state, &AttemptState::Requesting);
        *state = AttemptState::Requesting;
        Self {
            state,
            finished: false,
        }
    }

    fn finish(mut self, next: AttemptState) {
        log_transition(self.state, &next);
        *self.state = next;
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        log::warn!("Attempt abandoned before the service replied");
        let next = AttemptState::Failed(AdError::Transport(GENERIC_FAILURE_MESSAGE.to_string()));
        log_transition(self.state, &next);
        *self.state = next;
    }
}

/// Runs generation attempts one at a time and holds the latest outcome.
pub struct AdWorkflow {
    service: Arc<dyn ImageService>,
    credential: Option<String>,
    state: AttemptState,
}

impl AdWorkflow {
    pub fn new(service: Arc<dyn ImageService>, credential: Option<String>) -> Self {
        Self {
            service,
            credential,
            state: AttemptState::Idle,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(Arc::new(ImageClient::new(config)), config.api_key.clone())
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == AttemptState::Requesting
    }

    /// Whether the generate trigger should be enabled.
    pub fn can_generate(&self, capture: &InputCapture) -> bool {
        capture.has_cover() && !self.is_busy()
    }

    pub fn result(&self) -> Option<&GeneratedAd> {
        match &self.state {
            AttemptState::Succeeded(ad) => Some(ad),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            AttemptState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Back to idle, dropping any artifact or error.
    pub fn reset(&mut self) {
        self.transition(AttemptState::Idle);
    }

    /// Runs one attempt and returns the terminal state. Ignored while a
    /// request is still outstanding. Dropping the returned future mid-request
    /// leaves the workflow `Failed` with the generic message.
    pub async fn generate(&mut self, capture: &InputCapture) -> &AttemptState {
        if self.is_busy() {
            log::warn!("Generation already in progress, ignoring trigger");
            return &self.state;
        }

        self.transition(AttemptState::Validating);
        let request = match builder::build_request(capture, self.credential.as_deref()) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("Attempt rejected before sending: {}", err);
                self.transition(AttemptState::Failed(err));
                return &self.state;
            }
        };

        let payload = builder::build_payload(&request);
        // Validation guarantees a credential by now.
        let api_key = self.credential.clone().unwrap_or_default();
        let service = Arc::clone(&self.service);
        let attempt_id = request.attempt_id;

        let in_flight = InFlight::start(&mut self.state);
        let next = logger::scope_attempt(attempt_id, async move {
            log::info!(
                "Attempt {} for \"{}\" ({}) via {}",
                attempt_id,
                request.title,
                request.preset.id,
                service.model()
            );
            let timer = logger::timer(&format!("attempt {}", attempt_id));
            let outcome = service
                .generate_content(&api_key, &payload)
                .await
                .and_then(|response| resolver::resolve(&response));
            drop(timer);

            match outcome {
                Ok(ad) => {
                    log::info!(
                        "Generated {} ad for \"{}\" ({} bytes)",
                        request.preset.aspect_ratio,
                        request.title,
                        ad.bytes.len()
                    );
                    AttemptState::Succeeded(ad)
                }
                Err(err) => {
                    log::error!("Attempt {} failed: {}", attempt_id, err);
                    AttemptState::Failed(err)
                }
            }
        })
        .await;
        in_flight.finish(next);
        &self.state
    }

    fn transition(&mut self, next: AttemptState) {
        log_transition(&self.state, &next);
        self.state = next;
    }
}
