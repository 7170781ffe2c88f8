pub mod editor;
pub mod footer;
pub mod header;
pub mod history_panel;
pub mod modals;
pub mod query_builder;
pub mod results_table;
pub mod toasts;
