//! Today Cards List Component
//!
//! The container the synchronizer renders into.

use leptos::prelude::*;
use today_cards_core::SyncState;

use super::node_view;
use crate::store::{use_today_store, TodayStateStoreFields};

#[component]
pub fn TodayCardsList() -> impl IntoView {
    let store = use_today_store();

    let is_loading = move || store.sync_state().get() == SyncState::Loading;
    let hint_class = move || match store.sync_state().get() {
        SyncState::Loading => "today-cards__loading",
        _ => "today-cards__cached",
    };

    view! {
        <section class="today-cards" aria-live="polite" aria-busy=move || is_loading().to_string()>
            {move || store.sync_state().get().status_hint().map(|hint| view! {
                <p class=hint_class>{hint}</p>
            })}
            {move || store.nodes().get().into_iter().map(node_view).collect_view()}
        </section>
    }
}
