//! Organization auth page controller
//!
//! Holds the page's view state in a signal and runs the loader, the redirect
//! guard and the three provider actions. All side effects go through the
//! injected API client, navigator and notifier, so the controller runs the
//! same in the browser and in tests.

use std::rc::Rc;

use leptos::*;
use orgauth_shared::{
    auth_configure_path, find_active_provider, AuthProvider, ConfigureProviderRequest,
    DisableProviderRequest, Organization, SendRemindersRequest,
};
use tracing::{debug, info, warn};

use crate::client::ApiHandle;
use crate::config::ConsoleConfig;
use crate::state::{Navigator, Notifier};

pub const REMINDERS_SENT: &str = "Sent reminders to members";
pub const REMINDERS_FAILED: &str = "Failed to send reminders";

// ============================================================================
// View State
// ============================================================================

/// A value fetched on mount. `Unset` while the request is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slot<T> {
    #[default]
    Unset,
    Loaded(T),
}

impl<T> Slot<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Slot::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Slot::Loaded(value) => Some(value),
            Slot::Unset => None,
        }
    }
}

/// In-memory state of the auth settings page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Every provider type available to the organization
    pub provider_list: Slot<Vec<AuthProvider>>,
    /// The configured provider, `Loaded(None)` when SSO is not set up
    pub provider: Slot<Option<AuthProvider>>,
    /// Configure or disable request in flight
    pub busy: bool,
    /// Reminder request in flight
    pub send_reminders_busy: bool,
}

impl ViewState {
    pub fn configured_provider(&self) -> Option<&AuthProvider> {
        self.provider.loaded().and_then(Option::as_ref)
    }

    /// The configured provider as listed in the catalog
    pub fn active_provider(&self) -> Option<&AuthProvider> {
        let providers = self.provider_list.loaded()?;
        find_active_provider(providers, self.configured_provider())
    }
}

/// What the page body shows
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Still loading; nothing rendered
    Empty,
    /// Leaving for the configuration page
    Loading,
    List {
        providers: Vec<AuthProvider>,
        active: Option<AuthProvider>,
    },
}

/// Whether the viewer should be sent to the provider configuration page.
///
/// True once a provider is configured and the viewer can change it.
pub fn should_redirect(state: &ViewState, organization: &Organization) -> bool {
    state.configured_provider().is_some() && organization.can_write()
}

/// Decide what the page body shows for the given state.
pub fn render_body(state: &ViewState, organization: &Organization) -> Body {
    let (Slot::Loaded(providers), Slot::Loaded(_)) = (&state.provider_list, &state.provider) else {
        return Body::Empty;
    };

    // Keep showing a spinner while the redirect happens so the list never flashes
    if should_redirect(state, organization) {
        return Body::Loading;
    }

    Body::List {
        providers: providers.clone(),
        active: state.active_provider().cloned(),
    }
}

/// `"Auth Settings - <slug>"`
pub fn page_title(slug: &str) -> String {
    format!("Auth Settings - {}", slug)
}

// ============================================================================
// Controller
// ============================================================================

/// Controller for one mounted auth settings page
#[derive(Clone)]
pub struct OrganizationAuth {
    organization: Organization,
    configure_path: String,
    state: RwSignal<ViewState>,
    api: ApiHandle,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl OrganizationAuth {
    pub fn new(
        organization: Organization,
        config: &ConsoleConfig,
        api: ApiHandle,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let configure_path = config.normalize_url(&auth_configure_path(&organization.slug));
        Self {
            organization,
            configure_path,
            state: create_rw_signal(ViewState::default()),
            api,
            navigator,
            notifier,
        }
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn state(&self) -> RwSignal<ViewState> {
        self.state
    }

    /// Legacy configuration page the redirect guard navigates to
    pub fn configure_path(&self) -> &str {
        &self.configure_path
    }

    /// Current body, tracked by the reactive system
    pub fn body(&self) -> Body {
        self.state.with(|state| render_body(state, &self.organization))
    }

    /// Mutate state, then run the redirect guard.
    ///
    /// Responses can land after the page has been unmounted (the redirect
    /// itself unmounts it); those are dropped.
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        if self.state.try_update(f).is_none() {
            debug!("Auth settings page unmounted, dropping state change");
            return;
        }
        self.check_redirect();
    }

    /// Navigate away if a provider is configured and the viewer can write.
    ///
    /// Runs after every state change. Repeated calls issue the same
    /// navigation again, which the browser treats as a no-op.
    pub fn check_redirect(&self) -> bool {
        let redirect = self
            .state
            .try_with_untracked(|state| should_redirect(state, &self.organization))
            .unwrap_or(false);
        if redirect {
            info!(path = %self.configure_path, "Provider configured, redirecting");
            // Replace first so the back button skips this page
            self.navigator.replace(&self.configure_path);
            self.navigator.redirect(&self.configure_path);
        }
        redirect
    }

    /// Fetch the provider catalog and the configured provider.
    ///
    /// Both requests run concurrently and land in their own slot. A failed
    /// request leaves its slot unset.
    pub async fn load(&self) {
        futures::join!(self.load_provider_list(), self.load_provider());
    }

    async fn load_provider_list(&self) {
        match self.api.list_providers(&self.organization.slug).await {
            Ok(providers) => {
                debug!(count = providers.len(), "Loaded auth providers");
                self.update(|state| state.provider_list = Slot::Loaded(providers));
            }
            Err(e) => warn!("Failed to load auth providers: {}", e),
        }
    }

    async fn load_provider(&self) {
        match self.api.get_provider(&self.organization.slug).await {
            Ok(provider) => {
                debug!(provider = ?provider.as_ref().map(|p| &p.key), "Loaded configured provider");
                self.update(|state| state.provider = Slot::Loaded(provider));
            }
            Err(e) => warn!("Failed to load configured provider: {}", e),
        }
    }

    /// Start configuring `provider`.
    ///
    /// On success the browser is sent to the returned `auth_url`, so `busy`
    /// stays set. Failures only clear `busy`.
    pub async fn configure(&self, provider: &AuthProvider) {
        self.update(|state| state.busy = true);

        let request = ConfigureProviderRequest::new(provider.clone());
        match self
            .api
            .configure_provider(&self.organization.slug, &request)
            .await
        {
            Ok(response) => {
                if let Some(url) = response.auth_url.filter(|url| !url.is_empty()) {
                    info!(provider = %provider.key, "Starting identity provider handshake");
                    self.navigator.redirect(&url);
                }
            }
            Err(e) => {
                warn!(provider = %provider.key, "Failed to configure provider: {}", e);
                self.update(|state| state.busy = false);
            }
        }
    }

    /// Remove the configured provider.
    pub async fn disable(&self, provider: &AuthProvider) {
        self.update(|state| state.busy = true);

        let request = DisableProviderRequest::new(provider.clone());
        match self
            .api
            .disable_provider(&self.organization.slug, &request)
            .await
        {
            Ok(()) => {
                info!(provider = %provider.key, "Provider disabled");
                self.update(|state| {
                    state.provider = Slot::Loaded(None);
                    state.busy = false;
                });
            }
            Err(e) => {
                warn!(provider = %provider.key, "Failed to disable provider: {}", e);
                self.update(|state| state.busy = false);
            }
        }
    }

    /// Email members who have not linked their SSO identity.
    ///
    /// The request body is always empty; `_provider` is not sent.
    pub async fn send_reminders(&self, _provider: &AuthProvider) {
        self.update(|state| state.send_reminders_busy = true);

        match self
            .api
            .send_reminders(&self.organization.slug, &SendRemindersRequest::default())
            .await
        {
            Ok(()) => self.notifier.notify_success(REMINDERS_SENT),
            Err(e) => {
                warn!("Failed to send reminders: {}", e);
                self.notifier.notify_error(REMINDERS_FAILED);
            }
        }

        self.update(|state| state.send_reminders_busy = false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use orgauth_shared::{ConfigureProviderResponse, ORG_WRITE};

    use super::*;
    use crate::client::{ApiError, AuthProviderApi};

    // ------------------------------------------------------------------------
    // Test doubles
    // ------------------------------------------------------------------------

    struct MockApi {
        providers: Result<Vec<AuthProvider>, ApiError>,
        provider: Result<Option<AuthProvider>, ApiError>,
        configure: Result<ConfigureProviderResponse, ApiError>,
        disable: Result<(), ApiError>,
        reminders: Result<(), ApiError>,
        calls: RefCell<Vec<String>>,
        configure_requests: RefCell<Vec<ConfigureProviderRequest>>,
        disable_requests: RefCell<Vec<DisableProviderRequest>>,
    }

    impl MockApi {
        fn new(providers: Vec<AuthProvider>, provider: Option<AuthProvider>) -> Self {
            Self {
                providers: Ok(providers),
                provider: Ok(provider),
                configure: Ok(ConfigureProviderResponse::default()),
                disable: Ok(()),
                reminders: Ok(()),
                calls: RefCell::new(Vec::new()),
                configure_requests: RefCell::new(Vec::new()),
                disable_requests: RefCell::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    #[async_trait(?Send)]
    impl AuthProviderApi for MockApi {
        async fn get_organization(&self, slug: &str) -> Result<Organization, ApiError> {
            Ok(Organization::new(slug))
        }

        async fn list_providers(&self, slug: &str) -> Result<Vec<AuthProvider>, ApiError> {
            self.record(format!("GET {}", orgauth_shared::auth_providers_path(slug)));
            self.providers.clone()
        }

        async fn get_provider(&self, slug: &str) -> Result<Option<AuthProvider>, ApiError> {
            self.record(format!("GET {}", orgauth_shared::auth_provider_path(slug)));
            self.provider.clone()
        }

        async fn configure_provider(
            &self,
            _slug: &str,
            request: &ConfigureProviderRequest,
        ) -> Result<ConfigureProviderResponse, ApiError> {
            self.record(format!("POST {}", serde_json::to_string(request).unwrap()));
            self.configure_requests.borrow_mut().push(request.clone());
            self.configure.clone()
        }

        async fn disable_provider(
            &self,
            _slug: &str,
            request: &DisableProviderRequest,
        ) -> Result<(), ApiError> {
            self.record(format!("DELETE {}", serde_json::to_string(request).unwrap()));
            self.disable_requests.borrow_mut().push(request.clone());
            self.disable.clone()
        }

        async fn send_reminders(
            &self,
            _slug: &str,
            request: &SendRemindersRequest,
        ) -> Result<(), ApiError> {
            self.record(format!("POST {}", serde_json::to_string(request).unwrap()));
            self.reminders.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Nav {
        Replace(String),
        Redirect(String),
    }

    #[derive(Default)]
    struct RecordingNavigator {
        events: RefCell<Vec<Nav>>,
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, path: &str) {
            self.events.borrow_mut().push(Nav::Replace(path.to_string()));
        }

        fn redirect(&self, url: &str) {
            self.events.borrow_mut().push(Nav::Redirect(url.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        success: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.success.borrow_mut().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    struct Harness {
        page: OrganizationAuth,
        api: Rc<MockApi>,
        navigator: Rc<RecordingNavigator>,
        notifier: Rc<RecordingNotifier>,
    }

    fn harness(api: MockApi, organization: Organization) -> Harness {
        harness_with_config(api, organization, &ConsoleConfig::default())
    }

    fn harness_with_config(
        api: MockApi,
        organization: Organization,
        config: &ConsoleConfig,
    ) -> Harness {
        let api = Rc::new(api);
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let page = OrganizationAuth::new(
            organization,
            config,
            api.clone(),
            navigator.clone(),
            notifier.clone(),
        );
        Harness {
            page,
            api,
            navigator,
            notifier,
        }
    }

    fn google() -> AuthProvider {
        AuthProvider::new("google", "Google")
    }

    fn saml2() -> AuthProvider {
        AuthProvider::new("saml2", "SAML2")
    }

    fn writer() -> Organization {
        Organization::new("acme").with_access("org:read").with_access(ORG_WRITE)
    }

    fn reader() -> Organization {
        Organization::new("acme").with_access("org:read")
    }

    fn network_error() -> ApiError {
        ApiError::ConnectionFailed("connection reset".to_string())
    }

    // ------------------------------------------------------------------------
    // Rendering decisions
    // ------------------------------------------------------------------------

    #[test]
    fn test_body_empty_until_both_slots_load() {
        let mut state = ViewState::default();
        assert_eq!(render_body(&state, &reader()), Body::Empty);

        state.provider_list = Slot::Loaded(vec![google()]);
        assert_eq!(render_body(&state, &reader()), Body::Empty);

        state.provider_list = Slot::Unset;
        state.provider = Slot::Loaded(None);
        assert_eq!(render_body(&state, &reader()), Body::Empty);
    }

    #[test]
    fn test_body_lists_providers_when_nothing_configured() {
        let state = ViewState {
            provider_list: Slot::Loaded(vec![google(), saml2()]),
            provider: Slot::Loaded(None),
            ..ViewState::default()
        };

        assert_eq!(
            render_body(&state, &writer()),
            Body::List {
                providers: vec![google(), saml2()],
                active: None,
            }
        );
    }

    #[test]
    fn test_body_loading_while_redirecting() {
        let state = ViewState {
            provider_list: Slot::Loaded(vec![google()]),
            provider: Slot::Loaded(Some(google())),
            ..ViewState::default()
        };

        // Every render shows the spinner, whatever else changes
        assert_eq!(render_body(&state, &writer()), Body::Loading);
        let busy = ViewState {
            busy: true,
            send_reminders_busy: true,
            ..state
        };
        assert_eq!(render_body(&busy, &writer()), Body::Loading);
    }

    #[test]
    fn test_reader_sees_active_provider() {
        let state = ViewState {
            provider_list: Slot::Loaded(vec![google()]),
            provider: Slot::Loaded(Some(google())),
            ..ViewState::default()
        };

        assert!(!should_redirect(&state, &reader()));
        assert_eq!(
            render_body(&state, &reader()),
            Body::List {
                providers: vec![google()],
                active: Some(google()),
            }
        );
    }

    #[test]
    fn test_unknown_configured_provider_is_not_active() {
        let state = ViewState {
            provider_list: Slot::Loaded(vec![google()]),
            provider: Slot::Loaded(Some(saml2())),
            ..ViewState::default()
        };

        assert_eq!(
            render_body(&state, &reader()),
            Body::List {
                providers: vec![google()],
                active: None,
            }
        );
    }

    #[test]
    fn test_active_provider_for_any_unknown_key() {
        let providers = vec![google(), saml2(), AuthProvider::new("github", "GitHub")];
        for key in ["okta", "azure", "", "GOOGLE", "google "] {
            let state = ViewState {
                provider_list: Slot::Loaded(providers.clone()),
                provider: Slot::Loaded(Some(AuthProvider::new(key, "Other"))),
                ..ViewState::default()
            };
            assert!(state.active_provider().is_none(), "key {:?}", key);
        }
    }

    #[test]
    fn test_should_redirect_requires_configured_provider() {
        let state = ViewState {
            provider_list: Slot::Loaded(vec![google()]),
            provider: Slot::Loaded(None),
            ..ViewState::default()
        };
        assert!(!should_redirect(&state, &writer()));
        assert!(!should_redirect(&ViewState::default(), &writer()));
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("acme"), "Auth Settings - acme");
    }

    // ------------------------------------------------------------------------
    // Loader and redirect guard
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_fills_both_slots() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google(), saml2()], None), writer());
        block_on(h.page.load());

        let state = h.page.state().get_untracked();
        assert_eq!(state.provider_list, Slot::Loaded(vec![google(), saml2()]));
        assert_eq!(state.provider, Slot::Loaded(None));
        assert!(h.navigator.events.borrow().is_empty());
        assert_eq!(
            *h.api.calls.borrow(),
            vec![
                "GET /organizations/acme/auth-providers/".to_string(),
                "GET /organizations/acme/auth-provider/".to_string(),
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_partial_load_failure_leaves_slot_unset() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], None);
        api.provider = Err(network_error());
        let h = harness(api, writer());
        block_on(h.page.load());

        let state = h.page.state().get_untracked();
        assert_eq!(state.provider_list, Slot::Loaded(vec![google()]));
        assert_eq!(state.provider, Slot::Unset);
        assert_eq!(h.page.body(), Body::Empty);

        runtime.dispose();
    }

    #[test]
    fn test_failed_provider_list_still_redirects_writer() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], Some(google()));
        api.providers = Err(network_error());
        let h = harness(api, writer());
        block_on(h.page.load());

        let state = h.page.state().get_untracked();
        assert_eq!(state.provider_list, Slot::Unset);
        assert_eq!(state.provider, Slot::Loaded(Some(google())));
        assert_eq!(h.page.body(), Body::Empty);

        let path = "/organizations/acme/auth/configure/".to_string();
        assert_eq!(
            *h.navigator.events.borrow(),
            vec![Nav::Replace(path.clone()), Nav::Redirect(path)]
        );

        runtime.dispose();
    }

    #[test]
    fn test_responses_after_unmount_are_dropped() {
        let runtime = create_runtime();

        let mount = as_child_of_current_owner(|_: ()| {
            harness(MockApi::new(vec![google()], Some(google())), writer())
        });
        let (h, disposer) = mount(());

        // Provider arrives first and the redirect unmounts the page
        block_on(h.page.load_provider());
        drop(disposer);

        block_on(h.page.load_provider_list());
        block_on(h.page.disable(&google()));
        block_on(h.page.send_reminders(&google()));
        assert!(!h.page.check_redirect());

        let path = "/organizations/acme/auth/configure/".to_string();
        assert_eq!(
            *h.navigator.events.borrow(),
            vec![Nav::Replace(path.clone()), Nav::Redirect(path)]
        );
        // Notifications outlive the page
        assert_eq!(*h.notifier.success.borrow(), vec![REMINDERS_SENT.to_string()]);

        runtime.dispose();
    }

    #[test]
    fn test_load_redirects_writer_with_configured_provider() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), writer());
        block_on(h.page.load());

        // Only the provider slot update satisfies the guard
        let path = "/organizations/acme/auth/configure/".to_string();
        assert_eq!(
            *h.navigator.events.borrow(),
            vec![Nav::Replace(path.clone()), Nav::Redirect(path)]
        );
        assert_eq!(h.page.body(), Body::Loading);

        runtime.dispose();
    }

    #[test]
    fn test_no_redirect_for_reader() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), reader());
        block_on(h.page.load());

        assert!(h.navigator.events.borrow().is_empty());
        assert_eq!(
            h.page.body(),
            Body::List {
                providers: vec![google()],
                active: Some(google()),
            }
        );

        runtime.dispose();
    }

    #[test]
    fn test_repeated_redirect_checks_repeat_same_navigation() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), writer());
        block_on(h.page.load());
        h.navigator.events.borrow_mut().clear();

        assert!(h.page.check_redirect());
        assert!(h.page.check_redirect());

        let path = "/organizations/acme/auth/configure/".to_string();
        assert_eq!(
            *h.navigator.events.borrow(),
            vec![
                Nav::Replace(path.clone()),
                Nav::Redirect(path.clone()),
                Nav::Replace(path.clone()),
                Nav::Redirect(path),
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_redirect_path_is_normalized_for_customer_domain() {
        let runtime = create_runtime();

        let config = ConsoleConfig {
            customer_domain: true,
            ..ConsoleConfig::default()
        };
        let h = harness_with_config(
            MockApi::new(vec![google()], Some(google())),
            writer(),
            &config,
        );
        assert_eq!(h.page.configure_path(), "/auth/configure/");

        block_on(h.page.load());
        assert_eq!(
            h.navigator.events.borrow().last(),
            Some(&Nav::Redirect("/auth/configure/".to_string()))
        );

        runtime.dispose();
    }

    // ------------------------------------------------------------------------
    // Configure
    // ------------------------------------------------------------------------

    #[test]
    fn test_configure_redirects_to_auth_url() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], None);
        api.configure = Ok(ConfigureProviderResponse {
            auth_url: Some("https://idp.example/start".to_string()),
        });
        let h = harness(api, writer());
        block_on(h.page.load());

        block_on(h.page.configure(&google()));

        assert_eq!(
            *h.navigator.events.borrow(),
            vec![Nav::Redirect("https://idp.example/start".to_string())]
        );
        assert_eq!(
            *h.api.configure_requests.borrow(),
            vec![ConfigureProviderRequest::new(google())]
        );
        // Page is navigating away; busy stays set
        assert!(h.page.state().get_untracked().busy);

        runtime.dispose();
    }

    #[test]
    fn test_configure_without_auth_url_does_not_navigate() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], None), writer());
        block_on(h.page.load());
        block_on(h.page.configure(&google()));

        assert!(h.navigator.events.borrow().is_empty());
        assert_eq!(h.page.state().get_untracked().provider, Slot::Loaded(None));

        runtime.dispose();
    }

    #[test]
    fn test_configure_failure_clears_busy_silently() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], None);
        api.configure = Err(ApiError::RequestFailed {
            status: 400,
            message: "invalid provider".to_string(),
        });
        let h = harness(api, writer());
        block_on(h.page.load());
        block_on(h.page.configure(&google()));

        let state = h.page.state().get_untracked();
        assert!(!state.busy);
        assert_eq!(state.provider, Slot::Loaded(None));
        assert!(h.navigator.events.borrow().is_empty());
        assert!(h.notifier.success.borrow().is_empty());
        assert!(h.notifier.errors.borrow().is_empty());

        runtime.dispose();
    }

    // ------------------------------------------------------------------------
    // Disable
    // ------------------------------------------------------------------------

    #[test]
    fn test_disable_clears_provider_and_busy() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), reader());
        block_on(h.page.load());
        block_on(h.page.disable(&google()));

        let state = h.page.state().get_untracked();
        assert_eq!(state.provider, Slot::Loaded(None));
        assert!(!state.busy);
        assert_eq!(
            *h.api.disable_requests.borrow(),
            vec![DisableProviderRequest::new(google())]
        );
        assert_eq!(
            h.page.body(),
            Body::List {
                providers: vec![google()],
                active: None,
            }
        );

        runtime.dispose();
    }

    #[test]
    fn test_disable_success_regardless_of_prior_provider() {
        let runtime = create_runtime();

        for prior in [None, Some(google()), Some(saml2())] {
            let h = harness(MockApi::new(vec![google()], prior), reader());
            block_on(h.page.load());
            block_on(h.page.disable(&google()));

            let state = h.page.state().get_untracked();
            assert_eq!(state.provider, Slot::Loaded(None));
            assert!(!state.busy);
        }

        runtime.dispose();
    }

    #[test]
    fn test_disable_failure_keeps_provider() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], Some(google()));
        api.disable = Err(network_error());
        let h = harness(api, reader());
        block_on(h.page.load());
        block_on(h.page.disable(&google()));

        let state = h.page.state().get_untracked();
        assert_eq!(state.provider, Slot::Loaded(Some(google())));
        assert!(!state.busy);
        assert!(h.notifier.errors.borrow().is_empty());

        runtime.dispose();
    }

    // ------------------------------------------------------------------------
    // Send reminders
    // ------------------------------------------------------------------------

    #[test]
    fn test_send_reminders_success() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), reader());
        block_on(h.page.load());
        block_on(h.page.send_reminders(&google()));

        assert!(!h.page.state().get_untracked().send_reminders_busy);
        assert_eq!(*h.notifier.success.borrow(), vec![REMINDERS_SENT.to_string()]);
        assert!(h.notifier.errors.borrow().is_empty());
        // The provider is not part of the request
        assert_eq!(h.api.calls.borrow().last(), Some(&"POST {}".to_string()));

        runtime.dispose();
    }

    #[test]
    fn test_send_reminders_failure() {
        let runtime = create_runtime();

        let mut api = MockApi::new(vec![google()], Some(google()));
        api.reminders = Err(ApiError::RequestFailed {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        let h = harness(api, reader());
        block_on(h.page.load());
        block_on(h.page.send_reminders(&google()));

        assert!(!h.page.state().get_untracked().send_reminders_busy);
        assert_eq!(*h.notifier.errors.borrow(), vec![REMINDERS_FAILED.to_string()]);
        assert!(h.notifier.success.borrow().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_send_reminders_leaves_busy_flag_alone() {
        let runtime = create_runtime();

        let h = harness(MockApi::new(vec![google()], Some(google())), reader());
        block_on(h.page.load());
        block_on(h.page.send_reminders(&google()));

        let state = h.page.state().get_untracked();
        assert!(!state.busy);
        assert_eq!(state.provider, Slot::Loaded(Some(google())));

        runtime.dispose();
    }
}
