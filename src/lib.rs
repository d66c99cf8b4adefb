//! Bulletin board backend: article search/retrieval/CRUD over PostgreSQL
//! with explicit audit stamping and an Axum HTTP surface.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
