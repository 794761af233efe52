//! Saucer behaviour systems.

use bevy::prelude::*;

use super::components::Saucer;
use crate::combat::{spawn_projectile, Faction};
use crate::config::GameConfig;
use crate::core::{BodyKind, Contact, ScoreEvent, SoundCue, SoundEvent};
use crate::craft::{Craft, CraftStats, HitSequence};
use crate::physics::heading;
use crate::player::Ship;

/// Fly straight ahead at full thrust and shoot at the ship.
///
/// With no ship around the saucer shoots straight ahead.
pub fn saucer_ai(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    ships: Query<&Transform, (With<Ship>, Without<Saucer>)>,
    mut saucers: Query<(&mut Craft, &CraftStats, &Transform), With<Saucer>>,
    mut sounds: EventWriter<SoundEvent>,
) {
    let now = time.elapsed_secs_f64();
    let target = ships
        .get_single()
        .ok()
        .map(|transform| transform.translation.truncate());

    for (mut craft, stats, transform) in saucers.iter_mut() {
        craft.thrust(1.0);

        if !craft.try_fire(now, stats.fire_rate) {
            continue;
        }

        let position = transform.translation.truncate();
        let aim = target.map_or_else(|| heading(transform), |target| target - position);
        spawn_projectile(&mut commands, &config.bullet, Faction::Saucer, position, aim);
        sounds.send(SoundCue::SaucerFire.into());
    }
}

/// Shoot down saucers hit by a player bullet or rammed by the ship.
pub fn saucer_contacts(
    mut commands: Commands,
    mut contacts: EventReader<Contact>,
    config: Res<GameConfig>,
    mut saucers: Query<&mut Craft, With<Saucer>>,
    mut scores: EventWriter<ScoreEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for contact in contacts.read() {
        if !matches!(contact.other_kind, BodyKind::PlayerBullet | BodyKind::Ship) {
            continue;
        }
        let Ok(mut craft) = saucers.get_mut(contact.entity) else {
            continue;
        };
        if !craft.is_vulnerable() {
            continue;
        }

        craft.take_hit();
        commands.entity(contact.entity).insert(HitSequence::default());
        sounds.send(SoundCue::SaucerHit.into());
        scores.send(ScoreEvent {
            points: config.saucer.score,
        });
        debug!("Saucer shot down");
    }
}

/// Remove shot-down saucers once their hit flash is over.
pub fn clear_wrecked_saucers(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitSequence), With<Saucer>>,
) {
    for (entity, mut sequence) in query.iter_mut() {
        if sequence.timer.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Projectile;
    use crate::enemies::spawn_saucer;
    use crate::game::ScoreBoard;
    use crate::test_support::*;

    /// Drop a saucer into a running game.
    fn add_saucer(app: &mut App, position: Vec2, aim_degrees: f32) -> Entity {
        let config = app.world().resource::<GameConfig>().saucer.clone();
        let now = app.world().resource::<Time>().elapsed_secs_f64();
        let saucer = {
            let mut commands = app.world_mut().commands();
            spawn_saucer(&mut commands, &config, position, aim_degrees, now)
        };
        app.world_mut().flush();
        saucer
    }

    fn saucer_bullets(app: &mut App) -> Vec<(Projectile, Transform)> {
        let world = app.world_mut();
        world
            .query::<(&Projectile, &Transform)>()
            .iter(world)
            .filter(|(projectile, _)| projectile.owner == Faction::Saucer)
            .map(|(projectile, transform)| (*projectile, *transform))
            .collect()
    }

    #[test]
    fn saucer_flies_flat_out_and_holds_fire_at_first() {
        let mut app = playing_app(GameConfig::default());
        let saucer = add_saucer(&mut app, Vec2::new(-10.0, -6.0), 45.0);

        app.update();

        let craft = app.world().get::<Craft>(saucer).unwrap();
        assert_eq!(craft.accel_rate, 1.0);
        assert!(!craft.shielded);
        assert!(saucer_bullets(&mut app).is_empty());
    }

    #[test]
    fn saucer_shoots_at_the_ship() {
        let mut app = playing_app(GameConfig::default());
        let fire_rate = GameConfig::default().saucer.fire_rate;
        add_saucer(&mut app, Vec2::new(-8.0, 0.0), 180.0);

        run(&mut app, ticks(fire_rate) + 1);

        let bullets = saucer_bullets(&mut app);
        assert_eq!(bullets.len(), 1);
        let (_, transform) = bullets[0];
        // The ship sits at the origin, due east of the saucer
        assert!(heading(&transform).abs_diff_eq(Vec2::X, 1e-5));
    }

    #[test]
    fn shot_down_saucer_scores_once_and_disappears() {
        let mut app = playing_app(GameConfig::default());
        let saucer = add_saucer(&mut app, Vec2::new(-10.0, -6.0), 45.0);

        touch(&mut app, saucer, saucer, BodyKind::PlayerBullet);
        touch(&mut app, saucer, saucer, BodyKind::PlayerBullet);
        app.update();

        let score = GameConfig::default().saucer.score;
        assert_eq!(app.world().resource::<ScoreBoard>().score, score);
        assert!(app.world().get::<Craft>(saucer).unwrap().hit);

        run(&mut app, ticks(0.1) + 1);
        assert!(app.world().get::<Saucer>(saucer).is_none());
        assert_eq!(app.world().resource::<ScoreBoard>().score, score);
    }

    #[test]
    fn saucer_wraps_like_the_ship() {
        let mut app = playing_app(GameConfig::default());
        let saucer = add_saucer(&mut app, Vec2::new(0.0, 0.0), 90.0);
        app.update();

        // Inside the padding nothing happens
        app.world_mut().get_mut::<Transform>(saucer).unwrap().translation.x = 10.5;
        app.update();
        assert_eq!(app.world().get::<Transform>(saucer).unwrap().translation.x, 10.5);

        app.world_mut().get_mut::<Transform>(saucer).unwrap().translation.x = 11.5;
        app.update();
        let position = app.world().get::<Transform>(saucer).unwrap().translation;
        assert_eq!(position.x, -10.0);
        assert_eq!(position.y, 0.0);
        assert!(app.world().get::<Saucer>(saucer).is_some());
    }
}
