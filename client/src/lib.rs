//! Synchronous API client for the library-management backend.
//!
//! # Overview
//! Typed CRUD access to the five managed collections (authors, books,
//! borrowing, category, members) plus the static route table for the
//! navigation layer. Builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern); the caller
//! executes the actual HTTP round-trip, making the client fully
//! deterministic and testable.
//!
//! # Design
//! - [`ApiClient`] holds only its configuration (base URL from the
//!   environment, fixed timeout, fixed default headers) and is passed
//!   explicitly to each resource handle — no process-wide instance.
//! - Each resource operation is split into `build_*` (produces a request)
//!   and `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - Records are typed per resource; serde at the boundary is the only
//!   validation this layer performs. Errors propagate as [`ApiError`]
//!   values with no retry or recovery.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod routes;

pub use api::authors::{Author, Authors, NewAuthor};
pub use api::books::{Book, Books, NewBook};
pub use api::borrowing::{Borrowing, Borrowings, NewBorrowing};
pub use api::category::{Categories, Category, NewCategory};
pub use api::members::{Member, Members, NewMember};
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use routes::{by_name, resolve, Route, View, ROUTES};
