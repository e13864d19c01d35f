//! Runtime systems that act on the loaded model outside the loading
//! pipeline proper.

/// Playback of the model's embedded animation clips.
pub mod animation;
