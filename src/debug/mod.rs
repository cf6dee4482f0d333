//! Debug module: feature gated frame stats, periodic logging, overlay and sprite outlines.
//! Built only when compiled with `--features debug`; otherwise `DebugPlugin` is a no-op.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod outlines;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::system::DrawSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg_attr(not(feature = "debug"), allow(unused_variables))]
    fn build(&self, app: &mut App) {
        #[cfg(feature = "debug")]
        {
            use keys::debug_key_input_system;
            use logging::debug_logging_system;
            use outlines::debug_sprite_outlines;
            use overlay::{debug_overlay_spawn, debug_overlay_update};
            use stats::debug_stats_collect_system;

            app.init_resource::<DebugState>()
                .init_resource::<DebugStats>()
                .add_systems(PostStartup, debug_overlay_spawn)
                .add_systems(Update, (debug_key_input_system, debug_sprite_outlines))
                .add_systems(
                    PostUpdate,
                    (
                        debug_stats_collect_system,
                        debug_logging_system,
                        debug_overlay_update,
                    )
                        .chain()
                        .after(DrawSet),
                );
        }
    }
}
