//! Mouse interaction for the model pivot.
//!
//! Raw button, cursor and wheel events drive a small drag state machine;
//! its output rotates, pans or zooms the single pivot entity the model is
//! parented to. Sensitivities and release handling come from the
//! configured [`profile::InteractionProfile`].

use bevy::prelude::*;

/// Bevy systems translating window input into pivot updates.
pub mod input;

/// Pivot component holding yaw, pitch, offset and zoom with their limits.
pub mod pivot;

/// Button mask and drag state machine, independent of the ECS.
pub mod pointer;

/// Interaction profiles and their sensitivities.
pub mod profile;

use input::{ResetViewEvent, handle_pointer_events, handle_reset_view};
use pivot::sync_pivot_transform;
use pointer::PointerState;

/// Ordering for the interaction systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_event::<ResetViewEvent>()
            .add_systems(
                Update,
                (
                    handle_reset_view,
                    handle_pointer_events,
                    sync_pivot_transform,
                )
                    .chain()
                    .in_set(InteractionSet),
            );
    }
}
