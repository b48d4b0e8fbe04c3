//! Provider list shown when SSO is not being configured

use leptos::*;
use orgauth_shared::{AuthProvider, Organization};

use crate::components::common::{CheckIcon, LockIcon, MailIcon, ShieldIcon};

/// How a provider row is presented
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderStatus {
    /// Configured for the organization
    Active,
    /// Can be configured
    Available,
    /// Needs a feature the organization does not have
    FeatureDisabled,
}

pub fn provider_status(
    provider: &AuthProvider,
    active: Option<&AuthProvider>,
    organization: &Organization,
) -> ProviderStatus {
    if active.is_some_and(|a| a.key == provider.key) {
        return ProviderStatus::Active;
    }
    match &provider.required_feature {
        Some(feature) if !organization.has_feature(feature) => ProviderStatus::FeatureDisabled,
        _ => ProviderStatus::Available,
    }
}

/// Provider list with per-provider actions
#[component]
pub fn OrganizationAuthList(
    providers: Vec<AuthProvider>,
    active: Option<AuthProvider>,
    organization: Organization,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] send_reminders_busy: Signal<bool>,
    on_configure: Callback<AuthProvider>,
    on_disable: Callback<AuthProvider>,
    on_send_reminders: Callback<AuthProvider>,
) -> impl IntoView {
    let can_write = organization.can_write();

    view! {
        <div class="space-y-6">
            <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
                <h2 class="text-lg font-semibold text-white mb-1">"Single Sign-On"</h2>
                <p class="text-sm text-slate-400 mb-4">
                    {if active.is_some() {
                        "Members sign in through the provider below."
                    } else {
                        "Choose an identity provider to let members sign in with SSO."
                    }}
                </p>

                {(!can_write).then(|| view! {
                    <div class="bg-slate-700/30 border border-slate-700 rounded-lg px-4 py-3 mb-4 flex items-center gap-2">
                        <LockIcon class="w-4 h-4 text-slate-400" />
                        <span class="text-sm text-slate-400">
                            "You do not have permission to change authentication settings."
                        </span>
                    </div>
                })}

                <div class="space-y-3">
                    {providers.into_iter().map(|provider| {
                        let status = provider_status(&provider, active.as_ref(), &organization);
                        view! {
                            <ProviderItem
                                provider=provider
                                status=status
                                can_write=can_write
                                busy=busy
                                send_reminders_busy=send_reminders_busy
                                on_configure=on_configure
                                on_disable=on_disable
                                on_send_reminders=on_send_reminders
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProviderItem(
    provider: AuthProvider,
    status: ProviderStatus,
    can_write: bool,
    busy: Signal<bool>,
    send_reminders_busy: Signal<bool>,
    on_configure: Callback<AuthProvider>,
    on_disable: Callback<AuthProvider>,
    on_send_reminders: Callback<AuthProvider>,
) -> impl IntoView {
    let row_class = match status {
        ProviderStatus::Active => "flex items-center justify-between p-4 rounded-lg border border-blue-500 bg-blue-500/10",
        ProviderStatus::Available => "flex items-center justify-between p-4 rounded-lg border border-slate-700",
        ProviderStatus::FeatureDisabled => "flex items-center justify-between p-4 rounded-lg border border-slate-700 opacity-60",
    };
    let name = provider.name.clone();
    let provider = store_value(provider);

    let actions = match (status, can_write) {
        (_, false) => view! {}.into_view(),
        (ProviderStatus::Active, true) => view! {
            <div class="flex items-center gap-2">
                <button
                    class="flex items-center gap-2 px-3 py-1.5 bg-slate-700 hover:bg-slate-600 text-white text-sm \
                           rounded-lg transition-colors disabled:opacity-50"
                    disabled=move || send_reminders_busy.get()
                    on:click=move |_| on_send_reminders.call(provider.get_value())
                >
                    <MailIcon class="w-4 h-4" />
                    "Send reminders"
                </button>
                <button
                    class="px-3 py-1.5 bg-red-500/10 hover:bg-red-500/20 border border-red-500/30 text-red-400 \
                           text-sm rounded-lg transition-colors disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| on_disable.call(provider.get_value())
                >
                    "Disable"
                </button>
            </div>
        }.into_view(),
        (ProviderStatus::Available, true) => view! {
            <button
                class="px-3 py-1.5 bg-blue-500 hover:bg-blue-600 text-white text-sm font-medium \
                       rounded-lg transition-colors disabled:opacity-50"
                disabled=move || busy.get()
                on:click=move |_| on_configure.call(provider.get_value())
            >
                "Configure"
            </button>
        }.into_view(),
        (ProviderStatus::FeatureDisabled, true) => view! {
            <button
                class="px-3 py-1.5 bg-slate-700 text-slate-400 text-sm rounded-lg opacity-50 cursor-not-allowed"
                disabled=true
                title="Your plan does not include this provider"
            >
                "Configure"
            </button>
        }.into_view(),
    };

    view! {
        <div class=row_class>
            <div class="flex items-center gap-3">
                <ShieldIcon class="w-5 h-5 text-slate-400" />
                <div>
                    <div class="text-sm font-medium text-white">{name}</div>
                    {match status {
                        ProviderStatus::Active => view! {
                            <div class="flex items-center gap-1 text-xs text-green-400 mt-0.5">
                                <CheckIcon class="w-3 h-3" />
                                "Active"
                            </div>
                        }.into_view(),
                        ProviderStatus::FeatureDisabled => view! {
                            <div class="text-xs text-slate-500 mt-0.5">"Not available on your plan"</div>
                        }.into_view(),
                        ProviderStatus::Available => view! {}.into_view(),
                    }}
                </div>
            </div>
            {actions}
        </div>
    }
}
