//! Host-facing API over `portfolio_core`.

pub mod api;
