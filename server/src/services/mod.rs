//! Upstream lookup services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own outbound HTTP and response parsing so route
//! handlers can stay focused on query validation and status mapping.

pub mod encyclopedia;
pub mod geocode;
pub mod lookup;
