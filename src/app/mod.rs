// app/mod.rs - Authoring Session State
//
// This module contains the platform-independent session model.
// The iced front end, the renderer and the exporter all operate on it.

mod state;

pub use state::*;
