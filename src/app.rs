//! Today Cards App
//!
//! Root component: update button, new card form, card list, notices.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use reactive_stores::Store;
use today_cards_core::ClientConfig;

use crate::components::{NewCardForm, NoticeBar, TodayCardsList, UpdateCardsButton};
use crate::context::AppContext;
use crate::store::TodayState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    debug!("cards backend at {}", config.base_url);

    let store = Store::new(TodayState::default());
    provide_context(store);

    let ctx = AppContext::new(config, store, signal(0u32));
    provide_context(ctx.clone());

    // Load on mount, then once per update request
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let sync = ctx.sync.clone();
        spawn_local(async move {
            let outcome = if trigger == 0 {
                sync.load().await
            } else {
                sync.update().await
            };
            debug!("cards cycle for trigger {} finished: {:?}", trigger, outcome);
        });
    });

    view! {
        <div class="app-layout">
            <header class="header">
                <h1>"Cards for today"</h1>
                <UpdateCardsButton />
            </header>

            <main class="main">
                <NewCardForm />
                <TodayCardsList />
            </main>

            <NoticeBar />
        </div>
    }
}
