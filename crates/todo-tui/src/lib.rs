pub mod app;
pub mod components;
pub mod events;
pub mod presenter;
pub mod prompt;
pub mod selection;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
pub use presenter::TuiPresenter;
