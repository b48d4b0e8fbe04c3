use leptos::*;

use super::{CheckIcon, CloseIcon, ErrorIcon};
use crate::state::{ToastLevel, Toasts};

/// Renders notifications from the [`Toasts`] in context
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start gap-3 border rounded-lg px-4 py-3 shadow-lg {}",
                            toast.level.class(),
                        )>
                            {match toast.level {
                                ToastLevel::Success => view! { <CheckIcon class="w-5 h-5 shrink-0" /> }.into_view(),
                                ToastLevel::Error => view! { <ErrorIcon class="w-5 h-5 shrink-0" /> }.into_view(),
                            }}
                            <p class="flex-1 text-sm">{toast.message}</p>
                            <button
                                class="opacity-60 hover:opacity-100 transition-opacity"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <CloseIcon class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
