//! Networking modules for the portfolio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls behind the `PortfolioApi` seam and `types` defines
//! the wire schema shared by requests, responses, and state.

pub mod api;
pub mod types;
