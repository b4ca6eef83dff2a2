// browser-independent pieces of the portfolio page: the theme state machine,
// section navigation, and the static content catalog

pub mod catalog;
pub mod contact;
pub mod navigation;
pub mod theme;
