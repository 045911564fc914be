//! Bank page: link the admin's bank account through Plaid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route. A click requests a link token; once the token arrives
//! and the hosted widget reports ready it opens automatically. A successful
//! widget session is exchanged server-side and flips the shared
//! `bank_linked` flag in the auth context.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use linkflow::LinkController;

use crate::components::plaid_link::PlaidLink;
use crate::state::auth::{AuthSession, AuthState};
use crate::state::bank::{link_button_label, visible_error};
use crate::util::auth::{install_role_redirect, may_render_privileged};

/// Bank page. Non-admin users are redirected to `/home` and see nothing.
#[component]
pub fn BankPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_redirect(auth, use_navigate());

    let flow = RwSignal::new(LinkController::new());
    let session = AuthSession(auth);
    let plaid = PlaidLink::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpLinkBackend;
        use crate::state::bank::FlowSignal;
        use linkflow::widget::WidgetEvent;

        let on_event = Callback::new(move |event: WidgetEvent| {
            leptos::task::spawn_local(async move {
                linkflow::driver::dispatch_widget_event(&FlowSignal(flow), &HttpLinkBackend, &session, &plaid, event)
                    .await;
            });
        });

        // One widget instance per token; a cleared token tears it down.
        Effect::new(move |prev: Option<Option<String>>| {
            let token = flow.with(|ctrl| ctrl.token().map(str::to_owned));
            if prev.as_ref() != Some(&token) {
                match token.as_deref() {
                    Some(token) => plaid.mount(token, on_event),
                    None => plaid.unmount(),
                }
            }
            token
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, plaid);

    let loading = move || flow.with(LinkController::is_loading);
    let bank_linked = move || auth.with(|a| a.bank_linked);
    let label = move || link_button_label(loading(), bank_linked());

    let on_link = move |_: leptos::ev::MouseEvent| {
        if flow.with_untracked(LinkController::is_loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            linkflow::driver::request_link_token(
                &crate::state::bank::FlowSignal(flow),
                &crate::net::api::HttpLinkBackend,
                &session,
            )
            .await;
        });
    };

    view! {
        <Show when=move || auth.with(may_render_privileged)>
            <div class="bank-page">
                <div class="page-header">
                    <h1 class="page-header__title">"Bank"</h1>
                    <span class="page-header__subtitle">"Link your bank account with Plaid"</span>
                </div>

                <section class="card">
                    <header class="card__header">
                        <h2 class="card__title">"Bank account"</h2>
                        <p class="card__description">
                            "Connect your bank securely via Plaid to receive payments and manage escrow."
                        </p>
                    </header>
                    <div class="card__content">
                        {move || {
                            flow.with(visible_error)
                                .map(|msg| view! { <p class="bank-page__error">{msg}</p> })
                        }}
                        <Show
                            when=bank_linked
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" on:click=on_link disabled=loading>
                                        {label}
                                    </button>
                                }
                            }
                        >
                            <div class="bank-page__linked">
                                <span class="bank-page__linked-status">"Your bank account is linked."</span>
                                <button class="btn btn--outline" on:click=on_link disabled=loading>
                                    {label}
                                </button>
                            </div>
                        </Show>
                    </div>
                </section>
            </div>
        </Show>
    }
}
