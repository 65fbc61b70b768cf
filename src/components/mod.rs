//! UI Components
//!
//! Leptos components of the today cards page.

mod card_node;
mod new_card_form;
mod notice_bar;
mod today_cards_list;
mod update_cards_button;

pub use card_node::node_view;
pub use new_card_form::NewCardForm;
pub use notice_bar::NoticeBar;
pub use today_cards_list::TodayCardsList;
pub use update_cards_button::UpdateCardsButton;
