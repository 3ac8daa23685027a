//! Client-side state synchronization for the research service.
//!
//! UI code calls [`api::ResearchApi`], which goes through [`client::ApiClient`]
//! and a platform [`ports::HttpTransport`], usually behind a
//! [`deadline::DeadlineTransport`]. Results land in the stores, which
//! announce every change on a shared [`store_bus::StoreBus`].

pub mod ports;
pub mod deadline;
pub mod client;
pub mod api;
pub mod store_bus;
pub mod research_store;
pub mod session_store;
pub mod progress;
