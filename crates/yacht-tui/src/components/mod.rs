pub mod calendar_panel;
pub mod guests_panel;
pub mod help_overlay;
pub mod location_panel;
pub mod mode_tabs;
pub mod results;
pub mod search_bar;
