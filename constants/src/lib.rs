//! Shared tuning values for the model viewer.

pub mod framing;
pub mod interaction;
pub mod render_settings;
