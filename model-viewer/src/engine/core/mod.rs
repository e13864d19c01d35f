//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, launch overrides,
//! state transitions and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with config and model loading, scene construction,
/// interaction and platform-specific configuration.
pub mod app_setup;

/// Application state machine and loading transitions.
///
/// Moves from loading to running once the model is framed, or to a failed
/// state when the model cannot be loaded.
pub mod app_state;

/// Launch overrides from the command line (native) or URL query (WASM).
pub mod launch_options;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
