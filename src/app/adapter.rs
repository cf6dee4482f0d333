//! Lifecycle wiring between the engine and a [`GameLogic`].
//!
//! ```text
//! Startup     load_content -> init_game_state          (LoadContent)
//! Update      capture_frame_input -> update_game_state (Update)
//! PostUpdate  draw_frame, before transform propagation (Draw)
//! ```
use bevy::prelude::*;
use bevy::transform::TransformSystem;
use std::marker::PhantomData;

use crate::core::config::GameConfig;
use crate::core::system::{DrawSet, InputCaptureSet, LogicUpdateSet};
use crate::interaction::input::{capture_frame_input, FrameInput, MouseTracker};
use crate::logic::{GameLogic, GameState};
use crate::rendering::{draw_frame, load_content, Content, SpriteBatch};

const LOG_TARGET: &str = "adapter";

/// Drives `L` from the engine loop. Needs the engine's input resources, an
/// `AssetServer`, and (optionally) a primary window.
pub struct AdapterPlugin<L: GameLogic>(PhantomData<fn() -> L>);

impl<L: GameLogic> Default for AdapterPlugin<L> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<L: GameLogic> Plugin for AdapterPlugin<L> {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();
        let logic = L::from_config(app.world().resource::<GameConfig>());
        app.insert_resource(logic)
            .init_resource::<Content>()
            .init_resource::<SpriteBatch>()
            .init_resource::<FrameInput>()
            .init_resource::<MouseTracker>()
            .configure_sets(Update, (InputCaptureSet, LogicUpdateSet.after(InputCaptureSet)))
            .configure_sets(
                PostUpdate,
                DrawSet.before(TransformSystem::TransformPropagate),
            )
            .add_systems(Startup, (load_content, init_game_state::<L>).chain())
            .add_systems(
                Update,
                (
                    capture_frame_input.in_set(InputCaptureSet),
                    apply_logic_config::<L>.before(LogicUpdateSet),
                    update_game_state::<L>.in_set(LogicUpdateSet),
                ),
            )
            .add_systems(PostUpdate, draw_frame::<L>.in_set(DrawSet));
    }
}

pub fn init_game_state<L: GameLogic>(mut commands: Commands, logic: Res<L>) {
    info!(target: LOG_TARGET, "initial game state created");
    commands.insert_resource(GameState(logic.initial_state()));
}

pub fn update_game_state<L: GameLogic>(
    time: Res<Time>,
    input: Res<FrameInput>,
    logic: Res<L>,
    state: Option<ResMut<GameState<L::State>>>,
) {
    let Some(mut state) = state else {
        return;
    };
    let next = logic.update_state(&input.keyboard, &input.mouse, time.delta_secs(), &state.0);
    state.0 = next;
}

/// Rebuilds the logic when the config resource is replaced after startup; the state is kept.
pub fn apply_logic_config<L: GameLogic>(cfg: Res<GameConfig>, mut logic: ResMut<L>) {
    if cfg.is_changed() && !cfg.is_added() {
        info!(target: LOG_TARGET, "game logic reconfigured");
        *logic = L::from_config(&cfg);
    }
}
