//! Craft components.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::{SaucerConfig, ShipConfig};

/// Seconds a hit craft stays visible before it vanishes.
pub const HIT_FLASH_SECS: f32 = 0.1;

/// Fraction of thrust kept per coasting tick.
pub const COAST_DECAY: f32 = 0.99;

/// Visual state, mirrored by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CraftAnim {
    #[default]
    Idle,
    Accelerating,
    ShieldedIdle,
    ShieldedAccelerating,
    Hit,
}

/// Runtime state of a ship or saucer.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct Craft {
    /// Fraction of full thrust currently applied, 0.0 to 1.0
    pub accel_rate: f32,
    pub shielded: bool,
    pub hit: bool,
    /// Earliest clock time the next shot may leave
    pub next_fire: f64,
    /// Earliest clock time the next warp may happen
    pub next_warp: f64,
    pub anim: CraftAnim,
}

impl Craft {
    /// A craft that starts behind its shield.
    pub fn shielded() -> Self {
        Self {
            shielded: true,
            anim: CraftAnim::ShieldedIdle,
            ..default()
        }
    }

    /// Contacts only hurt while neither shielded nor already hit.
    pub fn is_vulnerable(&self) -> bool {
        !self.shielded && !self.hit
    }

    /// Rotate clockwise by `amount * turn_speed` degrees.
    pub fn turn_right(&self, transform: &mut Transform, amount: f32, stats: &CraftStats) {
        if self.hit {
            return;
        }
        transform.rotate_z(-(amount * stats.turn_speed).to_radians());
    }

    /// Rotate counter-clockwise by `amount * turn_speed` degrees.
    pub fn turn_left(&self, transform: &mut Transform, amount: f32, stats: &CraftStats) {
        if self.hit {
            return;
        }
        transform.rotate_z((amount * stats.turn_speed).to_radians());
    }

    /// Hold the given thrust fraction.
    pub fn thrust(&mut self, accel: f32) {
        if self.hit {
            return;
        }
        self.accel_rate = accel.clamp(0.0, 1.0);
        self.anim = if self.shielded {
            CraftAnim::ShieldedAccelerating
        } else {
            CraftAnim::Accelerating
        };
    }

    /// Let the thrust die off by 1% per tick.
    pub fn coast(&mut self) {
        if self.hit {
            return;
        }
        self.accel_rate *= COAST_DECAY;
        self.anim = if self.shielded {
            CraftAnim::ShieldedIdle
        } else {
            CraftAnim::Idle
        };
    }

    /// Claim the gun if its cooldown has passed. Excess requests are dropped.
    pub fn try_fire(&mut self, now: f64, fire_rate: f32) -> bool {
        if self.hit || now < self.next_fire {
            return false;
        }
        self.next_fire = now + f64::from(fire_rate);
        true
    }

    /// Claim the warp drive if its cooldown has passed.
    pub fn try_warp(&mut self, now: f64, cooldown: f32) -> bool {
        if self.hit || now < self.next_warp {
            return false;
        }
        self.next_warp = now + f64::from(cooldown);
        true
    }

    pub fn raise_shield(&mut self) {
        self.shielded = true;
        self.anim = CraftAnim::ShieldedIdle;
    }

    pub fn drop_shield(&mut self) {
        self.shielded = false;
        self.anim = CraftAnim::Idle;
    }

    /// Enter the hit state: all thrust is cut.
    pub fn take_hit(&mut self) {
        self.hit = true;
        self.accel_rate = 0.0;
        self.anim = CraftAnim::Hit;
    }

    pub fn recover(&mut self) {
        self.hit = false;
        self.anim = if self.shielded {
            CraftAnim::ShieldedIdle
        } else {
            CraftAnim::Idle
        };
    }
}

/// Fixed performance numbers of a craft.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CraftStats {
    pub speed: f32,
    pub turn_speed: f32,
    pub fire_rate: f32,
    pub warp_cooldown: f32,
}

impl From<&ShipConfig> for CraftStats {
    fn from(config: &ShipConfig) -> Self {
        Self {
            speed: config.speed,
            turn_speed: config.turn_speed,
            fire_rate: config.fire_rate,
            warp_cooldown: config.warp_cooldown,
        }
    }
}

impl From<&SaucerConfig> for CraftStats {
    fn from(config: &SaucerConfig) -> Self {
        Self {
            speed: config.speed,
            turn_speed: 0.0,
            fire_rate: config.fire_rate,
            warp_cooldown: 0.0,
        }
    }
}

/// Shield countdown, present only while the shield is up.
#[derive(Component)]
pub struct ShieldTimer(pub Timer);

impl ShieldTimer {
    pub fn new(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

/// Stage of the hit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPhase {
    /// Still visible, playing the hit state
    Exploding,
    /// Hidden with its collider off
    Respawning,
}

/// Drives a craft through being hit, present only while `Craft::hit`.
#[derive(Component)]
pub struct HitSequence {
    pub phase: HitPhase,
    pub timer: Timer,
}

impl Default for HitSequence {
    fn default() -> Self {
        Self {
            phase: HitPhase::Exploding,
            timer: Timer::from_seconds(HIT_FLASH_SECS, TimerMode::Once),
        }
    }
}

impl HitSequence {
    /// Switch to the hidden phase for `seconds`.
    pub fn start_respawn(&mut self, seconds: f32) {
        self.phase = HitPhase::Respawning;
        self.timer = Timer::new(Duration::from_secs_f32(seconds), TimerMode::Once);
    }
}
