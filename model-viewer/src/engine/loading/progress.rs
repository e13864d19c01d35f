use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_loaded: bool,
    pub scene_created: bool,
    pub model_requested: bool,
    pub gltf_loaded: bool,
    pub scene_spawned: bool,
    pub model_framed: bool,
    pub animations_started: bool,
    pub failure: Option<String>,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.model_framed && self.animations_started
    }
}
