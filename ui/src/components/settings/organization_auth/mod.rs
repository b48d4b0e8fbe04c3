//! Organization Auth Settings
//!
//! Lists the SSO providers available to an organization. Once a provider is
//! configured, viewers with `org:write` are sent to the server-rendered
//! configuration page instead.

mod controller;
mod list;

pub use controller::{
    page_title, render_body, should_redirect, Body, OrganizationAuth, Slot, ViewState,
    REMINDERS_FAILED, REMINDERS_SENT,
};
pub use list::{provider_status, OrganizationAuthList, ProviderStatus};

use std::rc::Rc;

use leptos::*;
use leptos_meta::Title;
use orgauth_shared::{AuthProvider, Organization};

use crate::client::ApiHandle;
use crate::config::ConsoleConfig;
use crate::state::{BrowserNavigator, Toasts};

/// Auth settings page for `organization`
#[component]
pub fn OrganizationAuthPage(organization: Organization) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let api = expect_context::<ApiHandle>();
    let toasts = expect_context::<Toasts>();

    let title = page_title(&organization.slug);
    let page = OrganizationAuth::new(
        organization,
        &config,
        api,
        Rc::new(BrowserNavigator::from_router()),
        Rc::new(toasts),
    );

    // Load once on mount
    {
        let page = page.clone();
        spawn_local(async move { page.load().await });
    }

    let on_configure = {
        let page = page.clone();
        Callback::new(move |provider: AuthProvider| {
            let page = page.clone();
            spawn_local(async move { page.configure(&provider).await });
        })
    };
    let on_disable = {
        let page = page.clone();
        Callback::new(move |provider: AuthProvider| {
            let page = page.clone();
            spawn_local(async move { page.disable(&provider).await });
        })
    };
    let on_send_reminders = {
        let page = page.clone();
        Callback::new(move |provider: AuthProvider| {
            let page = page.clone();
            spawn_local(async move { page.send_reminders(&provider).await });
        })
    };

    let state = page.state();
    let busy = Signal::derive(move || state.with(|s| s.busy));
    let send_reminders_busy = Signal::derive(move || state.with(|s| s.send_reminders_busy));
    let organization = page.organization().clone();

    view! {
        <Title text=title />
        <div class="flex-1 overflow-auto p-6 bg-slate-900">
            <div class="max-w-4xl mx-auto">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-white">"Authentication"</h1>
                    <p class="text-slate-400 mt-1">"Manage how members sign in to your organization"</p>
                </div>

                {move || match page.body() {
                    Body::Empty => view! {}.into_view(),
                    Body::Loading => view! { <Spinner /> }.into_view(),
                    Body::List { providers, active } => view! {
                        <OrganizationAuthList
                            providers=providers
                            active=active
                            organization=organization.clone()
                            busy=busy
                            send_reminders_busy=send_reminders_busy
                            on_configure=on_configure
                            on_disable=on_disable
                            on_send_reminders=on_send_reminders
                        />
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <div class="animate-spin w-8 h-8 border-4 border-blue-500 border-t-transparent rounded-full" />
        </div>
    }
}
