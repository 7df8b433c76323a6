//! HTTP surface: the shoe grid as HTML pages and a JSON API.

pub mod app;
pub mod config;
pub mod middleware;
pub mod render;
