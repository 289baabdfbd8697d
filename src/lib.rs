//! Shopdeck - a terminal product catalog browser
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod controller;
pub mod models;
pub mod ui;
pub mod view_state;
