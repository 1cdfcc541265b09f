pub mod app;
pub mod commands;
pub mod components;
pub mod events;
pub mod pages;
