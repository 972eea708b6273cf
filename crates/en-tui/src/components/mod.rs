//! Widgets making up the quick panel.
//!
//! - [`QueryInput`]: title and query line
//! - [`ChoiceList`]: stateful list of matching choices
//! - [`HintBar`]: match count and key bindings

mod choice_list;
mod hint_bar;
mod query_input;

pub use choice_list::ChoiceList;
pub use hint_bar::HintBar;
pub use query_input::QueryInput;
