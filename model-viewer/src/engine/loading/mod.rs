//! Loading pipeline from viewer config to a framed, animated model.
//!
//! Each stage checks [`progress::LoadingProgress`] and runs once: the config
//! asset is resolved, scene elements are created, the glTF is requested and
//! spawned under the pivot, and finally the model is framed to fit the view.

/// Viewer config asset loading and launch override resolution.
pub mod config_loader;

/// Mesh bounds collection and fit-to-view framing of the spawned scene.
pub mod model_framer;

/// glTF request, scene spawning below the pivot, and load failure reporting.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Backdrop and title overlay creation once the config is known.
pub mod scene_creator;
