//! Rock movement, breaking and removal.

use bevy::prelude::*;
use bevy_rapier2d::prelude::ExternalForce;

use super::components::{Rock, RockPopulation, Shatter};
use super::spawning::spawn_rock;
use crate::config::GameConfig;
use crate::core::{BodyKind, Contact, GameRng, ScoreEvent, SoundCue, SoundEvent};
use crate::physics::push_forward;

/// Push every rock forward at its generation's speed.
pub fn push_rocks(
    config: Res<GameConfig>,
    mut query: Query<(&Rock, &Transform, &mut ExternalForce)>,
) {
    for (rock, transform, mut force) in query.iter_mut() {
        let speed = config
            .rocks
            .generation(rock.generation)
            .map_or(0.0, |generation| generation.speed);
        push_forward(&mut force, transform, speed);
    }
}

/// Break rocks hit by a player bullet or rammed by the ship.
///
/// Children, sound and score happen at once; the rock itself goes away
/// after [`Shatter`] runs out.
pub fn rock_contacts(
    mut commands: Commands,
    mut contacts: EventReader<Contact>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut population: ResMut<RockPopulation>,
    mut rocks: Query<(&mut Rock, &Transform)>,
    mut scores: EventWriter<ScoreEvent>,
    mut sounds: EventWriter<SoundEvent>,
) {
    for contact in contacts.read() {
        if !matches!(contact.other_kind, BodyKind::PlayerBullet | BodyKind::Ship) {
            continue;
        }
        let Ok((mut rock, transform)) = rocks.get_mut(contact.entity) else {
            continue;
        };
        if rock.shattered {
            continue;
        }

        rock.shattered = true;
        commands.entity(contact.entity).insert(Shatter::default());

        let Some(generation) = config.rocks.generation(rock.generation) else {
            continue;
        };

        if let Some(child) = generation.child {
            let position = transform.translation.truncate();
            for _ in 0..generation.children {
                spawn_rock(
                    &mut commands,
                    &config.rocks,
                    child,
                    position,
                    &mut rng.0,
                    &mut population,
                );
            }
        }

        sounds.send(SoundCue::RockHit.into());
        scores.send(ScoreEvent {
            points: generation.score,
        });
    }
}

/// Remove broken rocks once their delay is over.
pub fn clear_shattered_rocks(
    mut commands: Commands,
    time: Res<Time>,
    mut population: ResMut<RockPopulation>,
    mut query: Query<(Entity, &mut Shatter)>,
) {
    for (entity, mut shatter) in query.iter_mut() {
        if shatter.0.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn_recursive();
            population.removed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScoreBoard;
    use crate::rocks::SHATTER_DELAY_SECS;
    use crate::test_support::*;

    fn score(app: &App) -> u32 {
        app.world().resource::<ScoreBoard>().score
    }

    fn population(app: &App) -> usize {
        app.world().resource::<RockPopulation>().count()
    }

    #[test]
    fn broken_rock_splits_once_even_when_hit_twice() {
        let config = GameConfig::default();
        let children = config.rocks.generations[0].children as usize;
        let points = config.rocks.generations[0].score;
        let mut app = playing_app(config);

        let rocks = entities_with::<Rock>(&mut app);
        assert_eq!(rocks.len(), 4);
        let target = rocks[0];

        touch(&mut app, target, target, BodyKind::PlayerBullet);
        touch(&mut app, target, target, BodyKind::Ship);
        app.update();

        assert_eq!(count::<Rock>(&mut app), 4 + children);
        assert_eq!(score(&app), points);
        assert!(app.world().get::<Rock>(target).unwrap().shattered);

        // Hit again while it lingers
        touch(&mut app, target, target, BodyKind::PlayerBullet);
        app.update();
        assert_eq!(count::<Rock>(&mut app), 4 + children);
        assert_eq!(score(&app), points);

        run(&mut app, ticks(SHATTER_DELAY_SECS) + 1);
        assert!(app.world().get::<Rock>(target).is_none());
        assert_eq!(count::<Rock>(&mut app), 3 + children);
        assert_eq!(population(&app), 3 + children);
    }

    #[test]
    fn children_belong_to_the_next_generation() {
        let mut app = playing_app(GameConfig::default());
        let target = entities_with::<Rock>(&mut app)[0];

        touch(&mut app, target, target, BodyKind::PlayerBullet);
        app.update();

        let world = app.world_mut();
        let generations: Vec<usize> = world
            .query::<&Rock>()
            .iter(world)
            .filter(|rock| !rock.shattered)
            .map(|rock| rock.generation)
            .collect();
        assert_eq!(generations.iter().filter(|&&g| g == 1).count(), 2);
    }

    #[test]
    fn terminal_rock_leaves_nothing_behind() {
        let mut config = GameConfig::default();
        config.rocks.starting_generation = 2;
        let points = config.rocks.generations[2].score;
        let mut app = playing_app(config);
        let target = entities_with::<Rock>(&mut app)[0];

        touch(&mut app, target, target, BodyKind::PlayerBullet);
        app.update();
        assert_eq!(count::<Rock>(&mut app), 4);
        assert_eq!(score(&app), points);

        run(&mut app, ticks(SHATTER_DELAY_SECS) + 1);
        assert_eq!(count::<Rock>(&mut app), 3);
        assert_eq!(population(&app), 3);
    }

    #[test]
    fn enemy_fire_does_not_break_rocks() {
        let mut app = playing_app(GameConfig::default());
        let target = entities_with::<Rock>(&mut app)[0];

        touch(&mut app, target, target, BodyKind::SaucerBullet);
        touch(&mut app, target, target, BodyKind::Saucer);
        touch(&mut app, target, target, BodyKind::Rock);
        app.update();

        assert!(!app.world().get::<Rock>(target).unwrap().shattered);
        assert_eq!(score(&app), 0);
    }

    #[test]
    fn rocks_and_ship_reappear_on_the_opposite_edge() {
        let mut app = playing_app(GameConfig::default());
        let rock = entities_with::<Rock>(&mut app)[0];
        let ship = entities_with::<crate::player::Ship>(&mut app)[0];

        let place = |app: &mut App, entity: Entity, at: Vec2| {
            let mut transform = app.world_mut().get_mut::<Transform>(entity).unwrap();
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        };
        let position = |app: &App, entity: Entity| {
            app.world().get::<Transform>(entity).unwrap().translation.truncate()
        };

        // Within the padding both stay put
        place(&mut app, rock, Vec2::new(-10.8, 2.0));
        place(&mut app, ship, Vec2::new(3.0, 6.9));
        app.update();
        assert_eq!(position(&app, rock), Vec2::new(-10.8, 2.0));
        assert_eq!(position(&app, ship), Vec2::new(3.0, 6.9));

        place(&mut app, rock, Vec2::new(-11.2, 2.0));
        place(&mut app, ship, Vec2::new(3.0, 7.1));
        app.update();
        assert_eq!(position(&app, rock), Vec2::new(10.0, 2.0));
        assert_eq!(position(&app, ship), Vec2::new(3.0, -6.0));
        assert!(!app.world().get::<Rock>(rock).unwrap().shattered);
    }
}
