//! Everything the screens need short of drawing them: the submit and
//! history flows, a per-frame UI state projection, and display-ready views.

pub mod controller;
pub mod history;
pub mod state;
pub mod views;
