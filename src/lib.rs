//! Blogly - a small server-rendered blog management app
//!
//! This library provides the core functionality for the Blogly app.

pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod web;
