pub mod checklist;
pub mod game;
pub mod home;
