//! Shared helpers for the infra integration tests.

use std::sync::{Arc, Mutex};

use styleverse_common::{MemorySessionStore, Session, SessionManager};
use styleverse_core::{Navigator, Notifier, Route};
use styleverse_domain::UserProfile;
use styleverse_infra::{ApiClient, ApiClientConfig};
use wiremock::MockServer;

/// Token the signed-in harness establishes its session with.
pub const TEST_TOKEN: &str = "test-token";

/// Navigator that records every route it is sent to.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().expect("navigator mutex").last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.lock().expect("navigator mutex").is_empty()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("navigator mutex").push(route);
    }
}

/// Notifier that records success and failure messages.
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn last_error(&self) -> Option<String> {
        self.errors.lock().expect("notifier mutex").last().cloned()
    }

    pub fn last_success(&self) -> Option<String> {
        self.successes.lock().expect("notifier mutex").last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().expect("notifier mutex").push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().expect("notifier mutex").push(message.to_string());
    }
}

/// Fully wired API client over a mock server, with handles for assertions.
pub struct TestHarness {
    pub client: Arc<ApiClient>,
    pub store: Arc<MemorySessionStore>,
    pub session: Arc<SessionManager>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Build an anonymous harness (no session established).
pub async fn harness(server: &MockServer) -> TestHarness {
    let store = Arc::new(MemorySessionStore::new());
    let session = Arc::new(SessionManager::new(store.clone()));
    let navigator = Arc::new(RecordingNavigator::default());

    let client = ApiClient::builder()
        .config(ApiClientConfig { base_url: server.uri(), ..Default::default() })
        .session(session.clone())
        .navigator(navigator.clone())
        .build()
        .expect("api client should build");

    TestHarness { client: Arc::new(client), store, session, navigator }
}

/// Build a harness with an established session.
#[allow(dead_code)]
pub async fn signed_in_harness(server: &MockServer) -> TestHarness {
    let built = harness(server).await;
    built
        .session
        .establish(Session::new(TEST_TOKEN, UserProfile::with_id(1)))
        .await
        .expect("session should establish");
    built
}
