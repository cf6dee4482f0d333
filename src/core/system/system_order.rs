//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. InputCapture (`Update`): keyboard / mouse snapshots for this frame
//! 2. LogicUpdate (`Update`): pure state transition of the game logic
//! 3. Draw (`PostUpdate`, before transform propagation): sync sprites + HUD text
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCaptureSet; // engine input -> snapshots

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LogicUpdateSet; // snapshots + dt -> next game state

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DrawSet; // game state -> pooled sprite / text entities
