//! List of escrow properties for the escrow page.
//!
//! DESIGN
//! ======
//! Records arrive exactly as the backend sent them; this component only reads
//! display fields and never filters or reorders.

use leptos::prelude::*;

use crate::net::types::EscrowRecord;

/// Renders one card per escrow record.
#[component]
pub fn EscrowList(#[prop(into)] records: Signal<Vec<EscrowRecord>>) -> impl IntoView {
    view! {
        <Show
            when=move || records.with(|r| !r.is_empty())
            fallback=|| view! { <p class="escrow-list__empty">"No properties yet."</p> }
        >
            <ul class="escrow-list">
                {move || {
                    records
                        .get()
                        .into_iter()
                        .map(|record| {
                            let title = record.title();
                            let status = record.status();
                            view! {
                                <li class="escrow-list__item">
                                    <span class="escrow-list__title">{title}</span>
                                    {status.map(|s| view! { <span class="escrow-list__status">{s}</span> })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
