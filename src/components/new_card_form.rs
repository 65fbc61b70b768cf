//! New Card Form Component
//!
//! Title input plus submit button for creating a card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{store_show_notice, use_today_store};

#[component]
pub fn NewCardForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_today_store();

    let (title, set_title) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        let ctx = ctx.clone();
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = ctx.submitter.submit(&text).await;
            store_show_notice(store, outcome.notice(), ctx.config.notice_timeout_ms);
            if outcome.is_created() {
                set_title.set(String::new());
                // the submitter never touches the list; refreshing is our call
                if ctx.config.refresh_after_create {
                    ctx.reload();
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-card" on:submit=create_card>
            <label class="new-card__label" for="new-card-title">"New card"</label>
            <input
                id="new-card-title"
                class="new-card__input"
                type="text"
                placeholder="Card title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button class="new-card__button" type="submit" disabled=move || submitting.get()>
                "Create card"
            </button>
        </form>
    }
}
