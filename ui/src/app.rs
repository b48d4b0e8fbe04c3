//! Root Application Component
//!
//! Sets up:
//! - Console configuration, API client and notifications in context
//! - Routing for organization settings pages
//! - The global toast host

use std::rc::Rc;

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use tracing::warn;

use crate::client::{ApiHandle, HttpClient};
use crate::components::common::{ErrorIcon, ToastHost};
use crate::components::settings::OrganizationAuthPage;
use crate::config::ConsoleConfig;
use crate::state::Toasts;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::load();
    let api: ApiHandle = Rc::new(HttpClient::new(&config.api_base_url));
    provide_context(Toasts::new(config.toast_duration_ms));
    provide_context(api);
    provide_context(config);

    view! {
        <Router>
            <main class="min-h-screen flex flex-col bg-slate-900">
                <Routes>
                    <Route path="/settings/:org_slug/auth" view=OrganizationAuthRoute />
                    // Server-rendered; shown while the browser loads it
                    <Route path="/organizations/:org_slug/auth/configure" view=LoadingIndicator />
                    <Route path="/auth/configure" view=LoadingIndicator />
                    <Route path="/*" view=NotFoundPage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}

/// Loads the organization named in the route, then mounts the auth page
#[component]
fn OrganizationAuthRoute() -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("org_slug").cloned().unwrap_or_default());

    let organization = create_local_resource(slug, move |slug| {
        let api = api.clone();
        async move {
            let result = api.get_organization(&slug).await;
            if let Err(e) = &result {
                warn!(slug = %slug, "Failed to load organization: {}", e);
            }
            result
        }
    });

    move || match organization.get() {
        None => view! { <LoadingIndicator /> }.into_view(),
        Some(Ok(organization)) => view! { <OrganizationAuthPage organization=organization /> }.into_view(),
        Some(Err(e)) => view! {
            <div class="max-w-4xl mx-auto w-full p-6">
                <div class="bg-red-500/10 border border-red-500/30 rounded-lg p-4 flex items-start gap-3">
                    <ErrorIcon class="w-5 h-5 text-red-400 shrink-0 mt-0.5" />
                    <div>
                        <p class="text-red-400 font-medium">"Unable to load organization"</p>
                        <p class="text-red-400/80 text-sm">{e.to_string()}</p>
                    </div>
                </div>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <div class="animate-spin w-8 h-8 border-4 border-blue-500 border-t-transparent rounded-full" />
        </div>
    }
}

/// 404 page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-600 mb-4">"404"</h1>
                <p class="text-xl text-slate-400">"Page not found"</p>
            </div>
        </div>
    }
}
