//! Cotdesk TUI - terminal workbench for curating CoT training records
//!
//! Screens: the CoT list (filter/sort/paginate), the three-panel detail
//! editor with draft tracking, and settings with read-only reference
//! listings. All screen behavior lives in plain view-state structs so it
//! can be tested without a terminal.

pub mod app;
pub mod detail_view;
pub mod events;
pub mod list_view;
pub mod settings_view;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::App;
pub use state::AppState;
