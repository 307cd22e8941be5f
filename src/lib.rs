pub mod api_client;
pub mod config;
pub mod logging;
pub mod models;
pub mod query_view;
pub mod table_display;
pub mod tui_app;
