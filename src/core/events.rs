//! Global events used for cross-system communication.
//!
//! Entities never touch the scoreboard or the game state directly. Rocks,
//! ships and saucers send intent events, and only the coordinator systems in
//! `game` consume them.

use bevy::prelude::*;

/// Collision category carried by every collidable entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Ship,
    Rock,
    Saucer,
    PlayerBullet,
    SaucerBullet,
}

/// Sent when `entity` starts touching `other`.
///
/// The physics bridge sends one of these for each side of a rapier
/// collision, so every handler only needs to look at its own entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct Contact {
    pub entity: Entity,
    pub other: Entity,
    pub other_kind: BodyKind,
}

/// Intent: add points to the running score.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreEvent {
    pub points: u32,
}

/// Intent: the player lost `lives` lives.
#[derive(Event, Debug, Clone, Copy)]
pub struct LifeLostEvent {
    pub lives: i32,
}

/// Intent: put the ship back at the origin after a respawn.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetShipEvent;

/// One-shot sound effects the gameplay can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    ShipFire,
    ShieldUp,
    ShieldDown,
    ShipHit,
    RockHit,
    SaucerFire,
    SaucerHit,
}

impl SoundCue {
    pub const ALL: [SoundCue; 7] = [
        SoundCue::ShipFire,
        SoundCue::ShieldUp,
        SoundCue::ShieldDown,
        SoundCue::ShipHit,
        SoundCue::RockHit,
        SoundCue::SaucerFire,
        SoundCue::SaucerHit,
    ];

    /// Asset path of the clip played for this cue.
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundCue::ShipFire => "sounds/ship_fire.wav",
            SoundCue::ShieldUp => "sounds/shield_up.wav",
            SoundCue::ShieldDown => "sounds/shield_down.wav",
            SoundCue::ShipHit => "sounds/ship_hit.wav",
            SoundCue::RockHit => "sounds/rock_hit.wav",
            SoundCue::SaucerFire => "sounds/saucer_fire.wav",
            SoundCue::SaucerHit => "sounds/saucer_hit.wav",
        }
    }
}

/// Request to play a one-shot sound.
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundEvent {
    pub cue: SoundCue,
}

impl From<SoundCue> for SoundEvent {
    fn from(cue: SoundCue) -> Self {
        Self { cue }
    }
}
