//! QR provisioning form
//!
//! Drives the QR management screen: `Idle → FormOpen → Validating →
//! Submitting → Idle` on success, back to `FormOpen` with an error message
//! on validation or submission failure. The validator re-runs on every
//! field change so the view can show the first failing reason as a
//! disabled-submit tooltip without blocking input.
//!
//! The machine is event-driven: [`QrForm::begin_submit`] validates and
//! moves to `Submitting`, [`QrForm::submission_completed`] /
//! [`QrForm::submission_failed`] resolve it. While a submission is in
//! flight, a second `begin_submit` is rejected and field edits are
//! ignored. [`QrForm::submit`] is the convenience driver that pairs the
//! events around an async call.

use async_trait::async_trait;
use shared::models::{Branch, Client, QrBatchRequest, QrCode};
use shared::qr::{BatchSelection, QrBatchError, build_batch, validate_batch};
use shared::service::Service;
use thiserror::Error;
use xquisito_client::{ClientResult, HttpClient};

/// Form lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFormState {
    /// No form on screen
    Idle,
    /// Form visible and editable
    FormOpen,
    /// Submit pressed, running client-side checks
    Validating,
    /// Batch request in flight; submit is rejected until it resolves
    Submitting,
}

/// Errors reported by form transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrFormError {
    #[error("form is not open")]
    NotOpen,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Validation(#[from] QrBatchError),
    #[error("submission failed: {0}")]
    Submission(String),
}

/// Where validated batches are sent
///
/// The form depends on this port, not on the HTTP client, so tests can
/// drive it with a stub backend.
#[async_trait]
pub trait QrBatchSubmitter: Send + Sync {
    async fn submit_batch(&self, request: &QrBatchRequest) -> ClientResult<Vec<QrCode>>;
}

#[async_trait]
impl QrBatchSubmitter for HttpClient {
    async fn submit_batch(&self, request: &QrBatchRequest) -> ClientResult<Vec<QrCode>> {
        self.create_qr_batch(request).await
    }
}

/// Editable fields of an open form
#[derive(Debug, Clone)]
struct Draft {
    client: Client,
    branch: Branch,
    existing: Vec<QrCode>,
    service: Service,
    start_number: u32,
    count: u32,
}

impl Draft {
    fn selection(&self) -> BatchSelection {
        BatchSelection {
            client_id: self.client.id.clone(),
            branch_id: self.branch.id.clone(),
            restaurant_id: self.branch.restaurant_id.clone().unwrap_or_default(),
            service: self.service,
            qr_type: None,
            start_number: self.start_number,
            count: self.count,
        }
    }
}

/// QR management form machine
#[derive(Debug, Clone)]
pub struct QrForm {
    state: QrFormState,
    draft: Option<Draft>,
    /// First failing precondition for the current draft, if any
    blocker: Option<QrBatchError>,
    /// Message attached when a submit attempt failed
    error: Option<String>,
    /// Set after a successful submission; the view refetches the QR list
    needs_refresh: bool,
}

impl QrForm {
    pub fn new() -> Self {
        Self {
            state: QrFormState::Idle,
            draft: None,
            blocker: None,
            error: None,
            needs_refresh: false,
        }
    }

    pub fn state(&self) -> QrFormState {
        self.state
    }

    /// Open the form for a client/branch with its current QR list
    pub fn open(&mut self, client: Client, branch: Branch, existing: Vec<QrCode>, service: Service) {
        self.draft = Some(Draft {
            client,
            branch,
            existing,
            service,
            start_number: 1,
            count: 1,
        });
        self.state = QrFormState::FormOpen;
        self.error = None;
        self.revalidate();
    }

    /// Close the form, dropping the draft (any in-flight call is abandoned)
    pub fn close(&mut self) {
        self.state = QrFormState::Idle;
        self.draft = None;
        self.blocker = None;
        self.error = None;
    }

    // ========== Field changes (live precondition preview) ==========

    pub fn set_service(&mut self, service: Service) {
        if let Some(draft) = self.editable_draft() {
            draft.service = service;
            self.revalidate();
        }
    }

    pub fn set_start_number(&mut self, start_number: u32) {
        if let Some(draft) = self.editable_draft() {
            draft.start_number = start_number;
            self.revalidate();
        }
    }

    pub fn set_count(&mut self, count: u32) {
        if let Some(draft) = self.editable_draft() {
            draft.count = count;
            self.revalidate();
        }
    }

    /// Refresh the QR list backing the duplicate-pickup check
    pub fn set_existing(&mut self, existing: Vec<QrCode>) {
        if let Some(draft) = self.editable_draft() {
            draft.existing = existing;
            self.revalidate();
        }
    }

    fn editable_draft(&mut self) -> Option<&mut Draft> {
        if self.state == QrFormState::FormOpen {
            self.draft.as_mut()
        } else {
            None
        }
    }

    fn revalidate(&mut self) {
        self.blocker = self.draft.as_ref().and_then(|draft| {
            let request = build_batch(&draft.selection());
            validate_batch(
                &request,
                &draft.existing,
                Some(&draft.branch),
                Some(&draft.client),
            )
            .err()
        });
    }

    /// First failing precondition, shown as the disabled-submit tooltip
    pub fn submit_blocker(&self) -> Option<&QrBatchError> {
        self.blocker.as_ref()
    }

    /// Error message from the last failed submit attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Batch request the current draft would submit
    pub fn request(&self) -> Option<QrBatchRequest> {
        self.draft.as_ref().map(|d| build_batch(&d.selection()))
    }

    /// Whether the QR list should be refetched; reading resets the flag
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    // ========== Submission events ==========

    /// Validate the draft and move to `Submitting`
    ///
    /// Returns the request to put on the wire. Rejected while another
    /// submission is in flight; on a validation failure the form returns to
    /// `FormOpen` with the message attached and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<QrBatchRequest, QrFormError> {
        match self.state {
            QrFormState::Submitting => return Err(QrFormError::SubmissionInFlight),
            QrFormState::FormOpen => {}
            _ => return Err(QrFormError::NotOpen),
        }
        let draft = self.draft.as_ref().ok_or(QrFormError::NotOpen)?;

        self.state = QrFormState::Validating;
        let request = build_batch(&draft.selection());
        if let Err(reason) = validate_batch(
            &request,
            &draft.existing,
            Some(&draft.branch),
            Some(&draft.client),
        ) {
            self.state = QrFormState::FormOpen;
            self.error = Some(reason.to_string());
            return Err(reason.into());
        }

        self.state = QrFormState::Submitting;
        tracing::debug!(
            branch_id = %request.branch_id,
            count = request.count,
            "QR batch submitted"
        );
        Ok(request)
    }

    /// The in-flight batch was accepted; close the form and flag a refresh
    pub fn submission_completed(&mut self) {
        if self.state != QrFormState::Submitting {
            tracing::warn!(state = ?self.state, "submission_completed outside Submitting, ignoring");
            return;
        }
        self.close();
        self.needs_refresh = true;
    }

    /// The in-flight batch was rejected; reopen the form with the message
    pub fn submission_failed(&mut self, message: impl Into<String>) {
        if self.state != QrFormState::Submitting {
            tracing::warn!(state = ?self.state, "submission_failed outside Submitting, ignoring");
            return;
        }
        self.state = QrFormState::FormOpen;
        self.error = Some(message.into());
    }

    /// Drive one full submission through the submitter
    ///
    /// On success the form returns to `Idle` and flags a list refresh; on
    /// any failure it returns to `FormOpen` with the message attached.
    pub async fn submit<S: QrBatchSubmitter + ?Sized>(
        &mut self,
        submitter: &S,
    ) -> Result<Vec<QrCode>, QrFormError> {
        let request = self.begin_submit()?;
        match submitter.submit_batch(&request).await {
            Ok(codes) => {
                tracing::info!(
                    branch_id = %request.branch_id,
                    count = request.count,
                    "QR batch created"
                );
                self.submission_completed();
                Ok(codes)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "QR batch submission failed"
                );
                let message = err.to_string();
                self.submission_failed(message.clone());
                Err(QrFormError::Submission(message))
            }
        }
    }
}

impl Default for QrForm {
    fn default() -> Self {
        Self::new()
    }
}
