//! Landing page; the fallback target for role redirects.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_admin = move || auth.with(|a| a.user.as_ref().is_some_and(linkflow::SessionUser::is_privileged));

    view! {
        <div class="home-page">
            <div class="page-header">
                <h1 class="page-header__title">"Home"</h1>
            </div>
            <nav class="home-page__nav">
                <a class="home-page__link" href="/escrow">"Escrow"</a>
                <Show when=is_admin>
                    <a class="home-page__link" href="/bank">"Bank"</a>
                </Show>
            </nav>
        </div>
    }
}
