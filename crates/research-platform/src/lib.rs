//! Browser adapters for the `research-core` ports.

pub mod http;
pub mod timers;

pub use http::FetchTransport;
pub use timers::GlooTimers;
