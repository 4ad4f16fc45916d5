pub mod app;
pub mod config;
pub mod date;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tabs;
pub mod ui;
pub mod view;
pub mod widget;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, RatingsStore};
pub use widget::Widget;
