mod nav_bar;
mod nav_button;
mod status_bar;
mod suggestions_popup;
mod url_input;

pub use nav_bar::{FLOATING_WIDTH, NavBar, NavBarLayout, NavBarState};
pub use nav_button::{BUTTON_WIDTH, NavButton, NavButtonKind};
pub use status_bar::{StatusBar, StatusLevel, StatusMessage};
pub use suggestions_popup::SuggestionsPopup;
pub use url_input::{InputChange, PLACEHOLDER, UrlInput, UrlInputView};
