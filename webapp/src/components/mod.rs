pub mod navigation;
pub mod project_card;
pub mod section_header;
pub mod skill_bar;
pub mod social_links;
pub mod theme_toggle;
