pub mod app;
pub mod chain;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod machine;
pub mod models;
pub mod prompt;
pub mod proxy;
pub mod selector;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use proxy::ModelProxy;
pub use state::AppState;
