use constants::interaction::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::engine::assets::viewer_config::ConfigError;

/// How a partial or full button release ends a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Any release ends the drag, whatever is still held.
    AnyRelease,
    /// A release always leaves pan mode; the drag itself ends only once no
    /// button is held any more.
    AllReleased,
}

/// Per-pixel sensitivities for one interaction profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivity {
    pub yaw: f32,
    pub pitch: f32,
    pub pan: f32,
    pub zoom: f32,
}

/// The two interaction variants the viewer ships with. They share the same
/// drag/zoom model and differ in sensitivities and release handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionProfile {
    /// Renderer-loop variant: fine-grained zoom, any release ends the drag.
    Direct,
    /// Entity-component variant: coarse zoom, the drag survives partial releases.
    #[default]
    Entity,
}

impl InteractionProfile {
    pub fn sensitivity(self) -> Sensitivity {
        match self {
            Self::Direct => Sensitivity {
                yaw: DIRECT_YAW_PER_PIXEL,
                pitch: DIRECT_PITCH_PER_PIXEL,
                pan: DIRECT_PAN_PER_PIXEL,
                zoom: DIRECT_ZOOM_PER_PIXEL,
            },
            Self::Entity => Sensitivity {
                yaw: ENTITY_YAW_PER_PIXEL,
                pitch: ENTITY_PITCH_PER_PIXEL,
                pan: ENTITY_PAN_PER_PIXEL,
                zoom: ENTITY_ZOOM_PER_PIXEL,
            },
        }
    }

    pub fn release_policy(self) -> ReleasePolicy {
        match self {
            Self::Direct => ReleasePolicy::AnyRelease,
            Self::Entity => ReleasePolicy::AllReleased,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Entity => "entity",
        }
    }
}

impl FromStr for InteractionProfile {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "entity" => Ok(Self::Entity),
            _ => Err(ConfigError::UnknownProfile(value.to_string())),
        }
    }
}
