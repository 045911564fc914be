//! Escrow page listing the managed properties.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the escrow listing once per visit and hands the records, unchanged,
//! to `EscrowList`. A failed fetch shows an empty list, never an error.

use leptos::prelude::*;

use crate::components::escrow_list::EscrowList;
use crate::state::escrow::EscrowState;

/// Escrow page with a property count and the delegated list.
#[component]
pub fn EscrowPage() -> impl IntoView {
    let escrow = RwSignal::new(EscrowState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_escrow_records(crate::net::api::ESCROW_SCOPE).await;
        let _ = escrow.try_update(|state| state.apply(result));
    });

    let records = Signal::derive(move || escrow.with(|s| s.records.clone()));

    view! {
        <div class="escrow-page">
            <div class="page-header">
                <h1 class="page-header__title">"Escrow"</h1>
                <span class="page-header__subtitle">{move || escrow.with(EscrowState::count_label)}</span>
            </div>
            <EscrowList records=records/>
        </div>
    }
}
