mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::mock_api::{MockApi, MockResponse};
use roster::api::EmployeeApi;
use roster::config::ApiSettings;
use roster::vm::{ListPhase, ListViewModel};

fn vm_for(mock: &MockApi) -> Arc<ListViewModel> {
    let api = Arc::new(EmployeeApi::new(ApiSettings {
        base_url: mock.base_url(),
        customer_id: "acme".to_string(),
        api_key: "test-key".to_string(),
    }));
    Arc::new(ListViewModel::new(api))
}

fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

const TWO_EMPLOYEES: &str = r#"[
    {"Id":"e-1","FirstName":"Ada","LastName":"Lovelace","SSN":"123-45-6789","Status":0},
    {"Id":"e-2","FirstName":"Al","LastName":"Khwarizmi","SSN":"987-65-4321","Status":1}
]"#;

#[tokio::test]
async fn load_replaces_collection_and_notifies_twice() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::json(TWO_EMPLOYEES)).await;

    let vm = vm_for(&mock);
    let notifications = Arc::new(AtomicUsize::new(0));
    let _sub = vm.subscribe(counting(&notifications));

    vm.load().await;

    let state = vm.snapshot();
    assert_eq!(state.phase, ListPhase::Loaded);
    assert_eq!(state.employees.len(), 2);
    assert_eq!(state.error, None);
    // Once entering the loading phase, once when the result landed.
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn load_404_yields_loaded_and_empty() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::status(404, "")).await;

    let vm = vm_for(&mock);
    vm.load().await;

    let state = vm.snapshot();
    assert_eq!(state.phase, ListPhase::Loaded);
    assert!(state.employees.is_empty());
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn load_failure_clears_collection_and_stores_error() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::json(TWO_EMPLOYEES)).await;
    mock.push_response(MockResponse::error(500, "database offline"))
        .await;

    let vm = vm_for(&mock);
    vm.load().await;
    assert_eq!(vm.snapshot().employees.len(), 2);

    vm.load().await;
    let state = vm.snapshot();
    assert_eq!(state.phase, ListPhase::Error);
    assert!(state.employees.is_empty());
    assert!(state.error.unwrap().contains("database offline"));
}

#[tokio::test]
async fn delete_success_triggers_full_reload() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::status(204, "")).await;
    mock.push_response(MockResponse::json(
        r#"[{"Id":"e-2","FirstName":"Al","LastName":"Khwarizmi","SSN":"987-65-4321","Status":1}]"#,
    ))
    .await;

    let vm = vm_for(&mock);
    assert!(vm.delete("e-1").await);

    let state = vm.snapshot();
    assert_eq!(state.phase, ListPhase::Loaded);
    assert_eq!(state.employees.len(), 1);
    assert_eq!(state.employees[0].id, "e-2");

    // DELETE then a fresh GET of the whole collection.
    let requests = mock.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[1].method, "GET");
}

#[tokio::test]
async fn delete_failure_keeps_collection_and_phase() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::json(TWO_EMPLOYEES)).await;

    let vm = vm_for(&mock);
    vm.load().await;

    mock.push_response(MockResponse::error(403, "not allowed"))
        .await;
    let notifications = Arc::new(AtomicUsize::new(0));
    let _sub = vm.subscribe(counting(&notifications));

    assert!(!vm.delete("e-1").await);

    let state = vm.snapshot();
    assert_eq!(state.phase, ListPhase::Loaded);
    assert_eq!(state.employees.len(), 2);
    assert!(state.error.unwrap().contains("not allowed"));
    // No reload happened, just the single failure notification.
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
    assert_eq!(mock.request_count().await, 2);
}

#[tokio::test]
async fn unsubscribed_listener_is_not_called() {
    let mock = MockApi::start().await;
    mock.push_response(MockResponse::json("[]")).await;

    let vm = vm_for(&mock);
    let notifications = Arc::new(AtomicUsize::new(0));
    let sub = vm.subscribe(counting(&notifications));
    sub.unsubscribe();

    vm.load().await;
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}
