use std::time::Duration;

use tracing::{debug, error, info};

use crate::auth::{TokenSlot, TokenState};
use crate::geometry::{BoundingBox, Overlay, Selection};
use crate::imagery::{
    ImageryClient, ImageryError, ImageryParams, ImageryRequest, create_api_request_body,
};
use crate::presenter::{Notifier, Popup};

use super::AppContext;

pub const NO_SELECTION_MESSAGE: &str = "Please draw a rectangle first.";
pub const NO_TOKEN_MESSAGE: &str = "Access token not available.";
pub const NO_IMAGE_MESSAGE: &str = "No image received.";
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoSelection,
    NoToken,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::NoSelection => NO_SELECTION_MESSAGE,
            Rejection::NoToken => NO_TOKEN_MESSAGE,
        }
    }
}

/// Terminal state of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A precondition failed; no request was sent.
    Rejected(Rejection),
    Succeeded { image_url: String },
    Failed(ImageryError),
}

impl SubmitOutcome {
    pub fn image_url(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Succeeded { image_url } => Some(image_url),
            _ => None,
        }
    }
}

/// Everything one user session touches: the drawn selection, the bearer token,
/// the popup and the alert channel. The owner is the only writer.
pub struct Session<N: Notifier> {
    selection: Selection,
    token: TokenSlot,
    popup: Popup,
    imagery: ImageryClient,
    params: ImageryParams,
    notifier: N,
}

impl<N: Notifier> std::fmt::Debug for Session<N> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Session")
            .field("selection", &self.selection)
            .field("token", &self.token)
            .field("popup", &self.popup)
            .field("imagery", &self.imagery)
            .finish()
    }
}

impl<N: Notifier> Session<N> {
    pub fn new(context: &AppContext, notifier: N) -> Self {
        Self {
            selection: Selection::new(),
            token: TokenSlot::new(),
            popup: Popup::new(),
            imagery: context.imagery_client(),
            params: context.imagery_params().clone(),
            notifier,
        }
    }

    /// Creates the session and kicks off the token fetch without waiting on it.
    pub fn start(context: &AppContext, notifier: N) -> Self {
        let mut session = Self::new(context, notifier);
        session.request_token(context);
        session
    }

    pub fn request_token(&mut self, context: &AppContext) {
        self.token = match context.token_client() {
            Ok(client) => TokenSlot::spawn(client),
            Err(error) => TokenSlot::failed(error),
        };
    }

    /// Waits for an in-flight token fetch. Returns whether a token is available.
    pub fn wait_for_token(&mut self, timeout: Duration) -> bool {
        self.token.wait(timeout).is_some()
    }

    /// Why the token fetch failed, once it has.
    pub fn token_failure(&self) -> Option<&str> {
        self.token.failure()
    }

    pub fn token_state(&mut self) -> TokenState {
        self.token.poll();
        self.token.state()
    }

    pub fn on_overlay_complete(&mut self, overlay: Box<dyn Overlay>) -> BoundingBox {
        self.selection.on_overlay_complete(overlay)
    }

    pub fn create_api_request_body(&self) -> Option<ImageryRequest> {
        self.selection
            .bounding_box()
            .map(|bbox| create_api_request_body(&bbox, &self.params))
    }

    /// Runs one attempt: validate, send, then show the image or alert. Every
    /// failure path alerts exactly once.
    pub fn submit_coordinates(&mut self) -> SubmitOutcome {
        debug!("validating submission");
        let Some(request) = self.create_api_request_body() else {
            return self.reject(Rejection::NoSelection);
        };
        let Some(token) = self.token.poll().cloned() else {
            return self.reject(Rejection::NoToken);
        };

        debug!(bbox = ?request.input.bounds.bbox, "sending imagery request");
        let image_url = self
            .imagery
            .process(&token, &request)
            .and_then(|response| response.image_url().map(str::to_string));

        match image_url {
            Ok(image_url) => {
                self.popup.show(&image_url);
                SubmitOutcome::Succeeded { image_url }
            }
            Err(ImageryError::MissingImageUrl) => {
                self.notifier.alert(NO_IMAGE_MESSAGE);
                SubmitOutcome::Failed(ImageryError::MissingImageUrl)
            }
            Err(failure) => {
                error!(error = %failure, "error submitting request");
                self.notifier.alert(SUBMIT_ERROR_MESSAGE);
                SubmitOutcome::Failed(failure)
            }
        }
    }

    fn reject(&self, rejection: Rejection) -> SubmitOutcome {
        info!(?rejection, "submission rejected");
        self.notifier.alert(rejection.message());
        SubmitOutcome::Rejected(rejection)
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
