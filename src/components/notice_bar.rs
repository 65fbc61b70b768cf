//! Notice Bar Component
//!
//! Shows the outcome of the last card submission.

use leptos::prelude::*;
use today_cards_core::NoticeKind;

use crate::store::{store_dismiss_notice, use_today_store, TodayStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_today_store();

    view! {
        {move || store.notice().get().map(|notice| {
            let (class, role) = match notice.kind {
                NoticeKind::Success => ("notice notice_success", "status"),
                NoticeKind::Failure => ("notice notice_failure", "alert"),
            };
            view! {
                <div class=class role=role>
                    <span class="notice__message">{notice.message}</span>
                    <button
                        type="button"
                        class="notice__close"
                        on:click=move |_| store_dismiss_notice(store)
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
