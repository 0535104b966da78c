//! Auth page controller - flow logic behind the login/registration forms

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use styleverse_domain::{Credentials, Registration, UserProfile};

use super::ports::{AuthGateway, Navigator, Notifier, Route};

/// Fallback shown when a login fails without a backend message
const LOGIN_FALLBACK: &str = "Invalid credentials";
/// Fallback shown when registration fails without a backend message
const REGISTER_FALLBACK: &str = "Could not create account";

const LOGIN_SUCCESS: &str = "Logged in successfully";
const REGISTER_SUCCESS: &str = "Account created, you can now sign in";

#[derive(Debug, Default)]
struct AuthFlowState {
    submitting: bool,
    current_user: Option<UserProfile>,
}

/// Controller for the authentication page
///
/// Each flow moves idle -> submitting -> settled; the submitting flag is
/// reset on every path out of a flow. Gateway errors are converted into
/// notifications here and never propagate past the controller.
pub struct AuthFlowController {
    gateway: Arc<dyn AuthGateway>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<AuthFlowState>,
}

impl AuthFlowController {
    /// Create a new controller
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { gateway, navigator, notifier, state: RwLock::new(AuthFlowState::default()) }
    }

    /// Submit the login form
    ///
    /// On success the returned profile is retained, a success notification
    /// is shown and the user is sent to the home route. On failure a
    /// notification carries the backend message or the generic fallback.
    pub async fn login(&self, credentials: Credentials) {
        self.set_submitting(true).await;
        debug!(email = %credentials.email, "submitting login");

        match self.gateway.login(&credentials).await {
            Ok(user) => {
                self.state.write().await.current_user = Some(user);
                self.notifier.success(LOGIN_SUCCESS);
                self.navigator.navigate(Route::Home);
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.notifier.error(err.user_message().unwrap_or(LOGIN_FALLBACK));
            }
        }

        self.set_submitting(false).await;
    }

    /// Submit the registration form
    ///
    /// Mirrors [`AuthFlowController::login`] except that no navigation
    /// happens on success: the user stays on the form to sign in.
    pub async fn register(&self, registration: Registration) {
        self.set_submitting(true).await;
        debug!(email = %registration.email, "submitting registration");

        match self.gateway.register(&registration).await {
            Ok(user) => {
                self.state.write().await.current_user = Some(user);
                self.notifier.success(REGISTER_SUCCESS);
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.notifier.error(err.user_message().unwrap_or(REGISTER_FALLBACK));
            }
        }

        self.set_submitting(false).await;
    }

    /// Whether a flow is currently in its submitting phase
    pub async fn is_submitting(&self) -> bool {
        self.state.read().await.submitting
    }

    /// Profile retained from the last successful flow
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.read().await.current_user.clone()
    }

    async fn set_submitting(&self, submitting: bool) {
        self.state.write().await.submitting = submitting;
    }
}
