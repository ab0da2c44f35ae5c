pub mod app;
pub mod checklist;
pub mod data;
pub mod error;
pub mod game;
pub mod model;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::MedPrepApp;
