//! Update Cards Button Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Re-runs the card list cycle. Stays enabled while loading; overlapping
/// cycles are resolved by the synchronizer.
#[component]
pub fn UpdateCardsButton() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <button class="btn btn_updateTodayCards" on:click=move |_| ctx.reload()>
            "Update cards for today"
        </button>
    }
}
