//! Todolist: a single-user todo list service.
//!
//! This crate stores todo tasks (title, description, completion flag,
//! priority, due date) and exposes create, read, update, and delete
//! operations through a service façade and a JSON HTTP API.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence, and service
//! - [`http`]: JSON API router
//! - [`config`]: Server configuration
//! - [`telemetry`]: Logging setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
