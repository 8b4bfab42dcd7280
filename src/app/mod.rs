pub mod actions;
pub mod app;
pub mod handlers;
pub mod updates;

pub use app::App;
