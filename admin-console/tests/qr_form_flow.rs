//! End-to-end form flow against a stub backend

use admin_console::{QrBatchSubmitter, QrForm, QrFormError, QrFormState};
use async_trait::async_trait;
use shared::models::{Branch, Client, QrBatchRequest, QrCode};
use shared::qr::QrBatchError;
use shared::service::{QrType, Service};
use std::sync::Mutex;
use xquisito_client::{ClientError, ClientResult};

fn client() -> Client {
    Client {
        id: "c1".to_string(),
        name: "La Terraza".to_string(),
        owner_name: "Ana".to_string(),
        contact_email: None,
        contact_phone: None,
        is_active: true,
        services: vec![Service::TapOrderPay, Service::PickNGo],
        table_count: 10,
        room_count: Some(5),
    }
}

fn branch(tables: u32) -> Branch {
    Branch {
        id: "b1".to_string(),
        client_id: "c1".to_string(),
        restaurant_id: Some("rest-b1".to_string()),
        name: "Centro".to_string(),
        address: "Av. Juarez 10".to_string(),
        tables,
        is_active: true,
        room_range: None,
    }
}

fn pickup_qr() -> QrCode {
    QrCode {
        id: "qr-1".to_string(),
        client_id: "c1".to_string(),
        branch_id: "b1".to_string(),
        service: Service::PickNGo,
        qr_type: QrType::Pickup,
        table_number: None,
        room_number: None,
        code: "XQ-b1-PNG".to_string(),
        is_active: true,
    }
}

/// Stub backend: records the submitted request, answers from a queue
#[derive(Default)]
struct StubSubmitter {
    responses: Mutex<Vec<ClientResult<Vec<QrCode>>>>,
    last_request: Mutex<Option<QrBatchRequest>>,
}

impl StubSubmitter {
    fn replying(response: ClientResult<Vec<QrCode>>) -> Self {
        Self {
            responses: Mutex::new(vec![response]),
            last_request: Mutex::new(None),
        }
    }

    fn last_request(&self) -> Option<QrBatchRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl QrBatchSubmitter for StubSubmitter {
    async fn submit_batch(&self, request: &QrBatchRequest) -> ClientResult<Vec<QrCode>> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(ClientError::Internal("no stubbed response".to_string())))
    }
}

#[tokio::test]
async fn test_successful_submission_returns_to_idle() {
    let backend = StubSubmitter::replying(Ok(vec![]));
    let mut form = QrForm::new();
    assert_eq!(form.state(), QrFormState::Idle);

    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    assert_eq!(form.state(), QrFormState::FormOpen);
    form.set_start_number(8);
    form.set_count(3);
    assert!(form.submit_blocker().is_none());

    form.submit(&backend).await.unwrap();
    assert_eq!(form.state(), QrFormState::Idle);
    assert!(form.take_refresh());
    // Flag resets after reading
    assert!(!form.take_refresh());

    let sent = backend.last_request().unwrap();
    assert_eq!(sent.qr_type, QrType::Table);
    assert_eq!(sent.start_number, 8);
    assert_eq!(sent.count, 3);
    assert_eq!(sent.restaurant_id, "rest-b1");
}

#[tokio::test]
async fn test_validation_failure_never_reaches_backend() {
    let backend = StubSubmitter::default();
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    form.set_start_number(8);
    form.set_count(4); // ends at 11, branch has 10 tables

    let err = form.submit(&backend).await.unwrap_err();
    assert!(matches!(
        err,
        QrFormError::Validation(QrBatchError::ExceedsTableCapacity { end: 11, tables: 10 })
    ));
    assert_eq!(form.state(), QrFormState::FormOpen);
    assert!(form.error().is_some());
    assert!(backend.last_request().is_none());
    assert!(!form.take_refresh());
}

#[tokio::test]
async fn test_backend_rejection_reopens_form_with_message() {
    let backend = StubSubmitter::replying(Err(ClientError::Validation(
        "pickup code already exists".to_string(),
    )));
    let mut form = QrForm::new();
    // Stale empty list: client-side check passes, backend arbitrates
    form.open(client(), branch(10), vec![], Service::PickNGo);

    let err = form.submit(&backend).await.unwrap_err();
    assert!(matches!(err, QrFormError::Submission(_)));
    assert_eq!(form.state(), QrFormState::FormOpen);
    assert!(form.error().unwrap().contains("pickup code already exists"));
}

#[tokio::test]
async fn test_live_precondition_preview() {
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![], Service::TapOrderPay);

    form.set_count(50);
    assert!(matches!(
        form.submit_blocker(),
        Some(QrBatchError::ExceedsTableCapacity { .. })
    ));

    // Input is never blocked; fixing the field clears the tooltip
    form.set_count(10);
    assert!(form.submit_blocker().is_none());

    form.set_service(Service::RoomService);
    form.set_count(6); // client has 5 rooms
    assert!(matches!(
        form.submit_blocker(),
        Some(QrBatchError::ExceedsRoomCapacity { .. })
    ));
}

#[tokio::test]
async fn test_duplicate_pickup_blocks_submit() {
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![pickup_qr()], Service::PickNGo);
    assert_eq!(
        form.submit_blocker(),
        Some(&QrBatchError::DuplicatePickup)
    );

    // The pickup request pins the range; switching service clears the block
    form.set_service(Service::TapOrderPay);
    assert!(form.submit_blocker().is_none());
}

#[tokio::test]
async fn test_pickup_request_is_pinned_to_single_code() {
    let backend = StubSubmitter::replying(Ok(vec![]));
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![], Service::PickNGo);
    // Form values are ignored for the singleton code
    form.set_start_number(7);
    form.set_count(9);

    form.submit(&backend).await.unwrap();
    let sent = backend.last_request().unwrap();
    assert_eq!(sent.qr_type, QrType::Pickup);
    assert_eq!(sent.start_number, 1);
    assert_eq!(sent.count, 1);
}

#[test]
fn test_second_submit_rejected_while_in_flight() {
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    form.set_count(3);

    let request = form.begin_submit().unwrap();
    assert_eq!(form.state(), QrFormState::Submitting);
    assert!(matches!(
        form.begin_submit().unwrap_err(),
        QrFormError::SubmissionInFlight
    ));

    // Field edits are ignored until the in-flight call resolves
    form.set_count(9);
    form.submission_failed("backend unavailable");
    assert_eq!(form.state(), QrFormState::FormOpen);
    assert!(form.error().unwrap().contains("backend unavailable"));
    assert_eq!(form.request().unwrap().count, 3);

    // Retry sends the same request, then completion closes the form
    assert_eq!(form.begin_submit().unwrap(), request);
    form.submission_completed();
    assert_eq!(form.state(), QrFormState::Idle);
    assert!(form.take_refresh());
}

#[test]
fn test_completion_events_outside_submitting_are_ignored() {
    let mut form = QrForm::new();
    form.submission_completed();
    assert_eq!(form.state(), QrFormState::Idle);
    assert!(!form.take_refresh());

    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    form.submission_failed("late response");
    assert_eq!(form.state(), QrFormState::FormOpen);
    assert!(form.error().is_none());
}

#[test]
fn test_begin_submit_keeps_validation_failures_local() {
    let mut form = QrForm::new();
    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    form.set_start_number(8);
    form.set_count(4); // ends at 11, branch has 10 tables

    assert!(matches!(
        form.begin_submit().unwrap_err(),
        QrFormError::Validation(QrBatchError::ExceedsTableCapacity { .. })
    ));
    assert_eq!(form.state(), QrFormState::FormOpen);
}

#[tokio::test]
async fn test_submit_requires_open_form() {
    let backend = StubSubmitter::default();
    let mut form = QrForm::new();
    assert!(matches!(
        form.submit(&backend).await.unwrap_err(),
        QrFormError::NotOpen
    ));

    form.open(client(), branch(10), vec![], Service::TapOrderPay);
    form.close();
    assert!(matches!(
        form.submit(&backend).await.unwrap_err(),
        QrFormError::NotOpen
    ));
}
