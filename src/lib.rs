pub mod app;
pub mod components;
pub mod domain;
pub mod infrastructure;
pub mod theme;
