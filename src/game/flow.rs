//! Game coordinator systems - starting, playing and ending a game.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use super::saucer_spawn::SaucerSpawner;
use super::scoreboard::ScoreBoard;
use crate::combat::{spawn_projectile, Faction, Projectile};
use crate::config::GameConfig;
use crate::core::{
    ControlInput, GameRng, GameState, LifeLostEvent, ResetShipEvent, ScoreEvent, ScreenBounds,
    SoundCue, SoundEvent,
};
use crate::craft::{Craft, CraftStats};
use crate::enemies::Saucer;
use crate::physics::heading;
use crate::player::{spawn_ship, Ship};
use crate::rocks::{spawn_rock_ring, Rock, RockPopulation};

/// Thrust axis values below this coast instead of accelerating.
pub const THRUST_THRESHOLD: f32 = 0.9;

/// Leave the title screen on confirm.
pub fn start_from_menu(input: Res<ControlInput>, mut next_state: ResMut<NextState<GameState>>) {
    if input.confirm {
        next_state.set(GameState::Playing);
    }
}

/// Clear the old field and start again on confirm.
pub fn restart_from_game_over(
    mut commands: Commands,
    input: Res<ControlInput>,
    mut population: ResMut<RockPopulation>,
    leftovers: Query<Entity, Or<(With<Rock>, With<Saucer>, With<Projectile>)>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !input.confirm {
        return;
    }

    for entity in leftovers.iter() {
        commands.entity(entity).despawn_recursive();
    }
    population.clear();
    next_state.set(GameState::Playing);
}

/// Spawn the ship and the starting rocks and arm the saucer countdown.
pub fn start_game(
    mut commands: Commands,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    mut population: ResMut<RockPopulation>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut sounds: EventWriter<SoundEvent>,
) {
    scoreboard.final_score = None;

    spawn_ship(&mut commands, &config.ship);
    sounds.send(SoundCue::ShieldUp.into());

    spawn_rock_ring(&mut commands, &config.rocks, &mut rng.0, &mut population);

    commands.insert_resource(SaucerSpawner::new(
        config.session.saucer_spawn_rate,
        bounds.corners(),
    ));

    info!(
        "Game started: score {}, lives {}",
        scoreboard.score, scoreboard.lives
    );
}

/// Record the final score, remove the ship and reset the scoreboard.
pub fn end_game(
    mut commands: Commands,
    mut scoreboard: ResMut<ScoreBoard>,
    ships: Query<Entity, With<Ship>>,
) {
    for ship in ships.iter() {
        commands.entity(ship).despawn_recursive();
    }

    let final_score = scoreboard.finish();
    info!("Game over, final score {}", final_score);
}

/// Hand this frame's controls to the ship. The ship's own state decides
/// what actually happens.
pub fn forward_input_to_ship(
    mut commands: Commands,
    input: Res<ControlInput>,
    time: Res<Time>,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    mut ships: Query<(&mut Craft, &CraftStats, &mut Transform), With<Ship>>,
    mut sounds: EventWriter<SoundEvent>,
) {
    let Ok((mut craft, stats, mut transform)) = ships.get_single_mut() else {
        return;
    };
    let now = time.elapsed_secs_f64();

    if input.turn > 0.0 {
        craft.turn_right(&mut transform, input.turn, stats);
    } else if input.turn < 0.0 {
        craft.turn_left(&mut transform, -input.turn, stats);
    }

    if input.thrust >= THRUST_THRESHOLD {
        craft.thrust(input.thrust);
    } else {
        craft.coast();
    }

    if input.fire && craft.try_fire(now, stats.fire_rate) {
        spawn_projectile(
            &mut commands,
            &config.bullet,
            Faction::Player,
            transform.translation.truncate(),
            heading(&transform),
        );
        sounds.send(SoundCue::ShipFire.into());
    }

    if input.warp && craft.try_warp(now, stats.warp_cooldown) {
        let target = bounds.random_point(&mut rng.0);
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}

/// Apply score intents. Points scored outside of play are dropped.
pub fn apply_score_events(
    state: Res<State<GameState>>,
    mut events: EventReader<ScoreEvent>,
    mut scoreboard: ResMut<ScoreBoard>,
) {
    for event in events.read() {
        if *state.get() == GameState::Playing {
            scoreboard.add_score(event.points);
        }
    }
}

/// Apply life intents and end the game once no lives are left.
pub fn apply_life_events(
    state: Res<State<GameState>>,
    mut events: EventReader<LifeLostEvent>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let playing = *state.get() == GameState::Playing;
    let mut out_of_lives = false;

    for event in events.read() {
        // Drain the rest once the game is over
        if !playing || out_of_lives {
            continue;
        }

        out_of_lives = scoreboard.lose_life(event.lives);
        info!("Life lost, {} left", scoreboard.lives);
    }

    if out_of_lives {
        next_state.set(GameState::GameOver);
    }
}

/// Put a respawning ship back at the origin, at rest.
pub fn reset_ship_position(
    mut events: EventReader<ResetShipEvent>,
    mut ships: Query<(&mut Transform, &mut Velocity), With<Ship>>,
) {
    if events.read().count() == 0 {
        return;
    }

    for (mut transform, mut velocity) in ships.iter_mut() {
        transform.translation = Vec3::ZERO;
        *velocity = Velocity::zero();
    }
}

/// Refill the field with a fresh ring whenever the last rock is gone.
pub fn maintain_rock_population(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut population: ResMut<RockPopulation>,
) {
    if !population.is_empty() {
        return;
    }

    spawn_rock_ring(&mut commands, &config.rocks, &mut rng.0, &mut population);
    debug!("Field cleared, spawned {} rocks", population.count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BodyKind;
    use crate::craft::ShieldTimer;
    use crate::test_support::*;

    fn scoreboard(app: &App) -> ScoreBoard {
        app.world().resource::<ScoreBoard>().clone()
    }

    fn ship(app: &mut App) -> Entity {
        entities_with::<Ship>(app)[0]
    }

    fn craft(app: &App, ship: Entity) -> Craft {
        app.world().get::<Craft>(ship).cloned().unwrap()
    }

    /// Short shield and respawn so hits can follow each other quickly.
    fn brisk_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.ship.shield_time = 0.1;
        config.ship.respawn_rate = 0.1;
        config.rocks.generations[0].score = 10;
        config
    }

    /// Wait until the ship can be hurt, then ram it into a rock.
    fn hit_ship(app: &mut App) {
        let ship = ship(app);
        for _ in 0..200 {
            if craft(app, ship).is_vulnerable() {
                break;
            }
            app.update();
        }
        assert!(craft(app, ship).is_vulnerable());

        touch(app, ship, ship, BodyKind::Rock);
        app.update();
    }

    #[test]
    fn confirm_starts_a_game() {
        let mut app = headless_app(GameConfig::default());
        assert_eq!(state(&app), GameState::MainMenu);
        assert_eq!(count::<Ship>(&mut app), 0);

        confirm(&mut app);

        assert_eq!(state(&app), GameState::Playing);
        assert_eq!(count::<Ship>(&mut app), 1);
        assert_eq!(count::<Rock>(&mut app), 4);
        assert_eq!(app.world().resource::<RockPopulation>().count(), 4);
        assert!(app.world().contains_resource::<SaucerSpawner>());

        let ship = ship(&mut app);
        assert!(craft(&app, ship).shielded);
        assert!(app.world().get::<ShieldTimer>(ship).is_some());
    }

    #[test]
    fn starting_rocks_sit_on_the_ring() {
        let mut app = playing_app(GameConfig::default());
        let radius = GameConfig::default().rocks.spawn_radius;

        let world = app.world_mut();
        for transform in world
            .query_filtered::<&Transform, With<Rock>>()
            .iter(world)
        {
            let distance = transform.translation.truncate().length();
            assert!((distance - radius).abs() < 1e-4, "rock at {distance}");
        }
    }

    #[test]
    fn full_game_scores_then_runs_out_of_lives() {
        let mut app = playing_app(brisk_config());
        assert_eq!(scoreboard(&app).score, 0);
        assert_eq!(scoreboard(&app).lives, 3);

        let rock = entities_with::<Rock>(&mut app)[0];
        touch(&mut app, rock, rock, BodyKind::PlayerBullet);
        app.update();
        assert_eq!(scoreboard(&app).score, 10);
        assert_eq!(scoreboard(&app).lives, 3);

        hit_ship(&mut app);
        assert_eq!(scoreboard(&app).lives, 2);
        hit_ship(&mut app);
        assert_eq!(scoreboard(&app).lives, 1);
        hit_ship(&mut app);
        assert_eq!(scoreboard(&app).lives, 0);

        app.update();
        assert_eq!(state(&app), GameState::GameOver);
        let board = scoreboard(&app);
        assert_eq!(board.final_score, Some(10));
        assert_eq!(board.score, 0);
        assert_eq!(board.lives, 3);
        assert_eq!(count::<Ship>(&mut app), 0);
        assert!(!app.world().contains_resource::<SaucerSpawner>());
    }

    #[test]
    fn extra_life_events_after_the_last_are_ignored() {
        let mut app = playing_app(GameConfig::default());
        app.world_mut().send_event(LifeLostEvent { lives: 2 });
        app.update();
        assert_eq!(scoreboard(&app).lives, 1);

        app.world_mut().send_event(LifeLostEvent { lives: 1 });
        app.world_mut().send_event(LifeLostEvent { lives: 1 });
        app.world_mut().send_event(LifeLostEvent { lives: 1 });
        app.update();
        assert_eq!(scoreboard(&app).lives, 0);

        app.update();
        assert_eq!(state(&app), GameState::GameOver);
        assert_eq!(scoreboard(&app).lives, 3);

        // Nothing is counted while the game is over
        app.world_mut().send_event(LifeLostEvent { lives: 1 });
        app.world_mut().send_event(ScoreEvent { points: 50 });
        app.update();
        assert_eq!(scoreboard(&app).lives, 3);
        assert_eq!(scoreboard(&app).score, 0);
    }

    #[test]
    fn game_over_confirm_clears_the_field_and_restarts() {
        let mut app = playing_app(GameConfig::default());
        let rock = entities_with::<Rock>(&mut app)[0];
        touch(&mut app, rock, rock, BodyKind::PlayerBullet);
        app.update();
        assert_eq!(count::<Rock>(&mut app), 6);

        app.world_mut().send_event(LifeLostEvent { lives: 3 });
        run(&mut app, 2);
        assert_eq!(state(&app), GameState::GameOver);
        assert_eq!(scoreboard(&app).final_score, Some(20));

        confirm(&mut app);
        assert_eq!(state(&app), GameState::Playing);
        assert_eq!(count::<Rock>(&mut app), 4);
        assert_eq!(app.world().resource::<RockPopulation>().count(), 4);
        assert_eq!(count::<Ship>(&mut app), 1);
        assert_eq!(scoreboard(&app).final_score, None);
    }

    #[test]
    fn empty_field_is_refilled_in_the_same_tick() {
        let mut config = GameConfig::default();
        config.rocks.starting_generation = 2;
        let mut app = playing_app(config);

        for rock in entities_with::<Rock>(&mut app) {
            touch(&mut app, rock, rock, BodyKind::PlayerBullet);
        }
        app.update();

        let old = entities_with::<Rock>(&mut app);
        for _ in 0..100 {
            app.update();
            if old.iter().all(|&rock| app.world().get::<Rock>(rock).is_none()) {
                break;
            }
        }

        // The last shards went this tick and a fresh ring replaced them
        assert!(old.iter().all(|&rock| app.world().get::<Rock>(rock).is_none()));
        assert_eq!(count::<Rock>(&mut app), 4);
        assert_eq!(app.world().resource::<RockPopulation>().count(), 4);
    }

    #[test]
    fn thrust_needs_a_firm_push_and_coasting_decays() {
        let mut app = playing_app(GameConfig::default());
        let ship = ship(&mut app);

        input(&mut app).thrust = 0.5;
        app.update();
        assert_eq!(craft(&app, ship).accel_rate, 0.0);

        input(&mut app).thrust = 1.0;
        app.update();
        assert_eq!(craft(&app, ship).accel_rate, 1.0);

        input(&mut app).thrust = 0.0;
        run(&mut app, 2);
        assert!((craft(&app, ship).accel_rate - 0.9801).abs() < 1e-5);
    }

    #[test]
    fn turning_follows_the_axis() {
        let mut app = playing_app(GameConfig::default());
        let ship = ship(&mut app);

        input(&mut app).turn = 1.0;
        app.update();
        let up = app.world().get::<Transform>(ship).unwrap().up();
        assert!(up.x > 0.0);

        input(&mut app).turn = -1.0;
        run(&mut app, 2);
        let up = app.world().get::<Transform>(ship).unwrap().up();
        assert!(up.x < 0.0);
    }

    #[test]
    fn held_fire_is_rate_limited() {
        let mut app = playing_app(GameConfig::default());
        input(&mut app).fire = true;

        // Just under two fire periods
        run(&mut app, ticks(2.0 * 0.5) - 2);

        let world = app.world_mut();
        let owners: Vec<Faction> = world
            .query::<&Projectile>()
            .iter(world)
            .map(|projectile| projectile.owner)
            .collect();
        assert_eq!(owners, vec![Faction::Player, Faction::Player]);
    }

    #[test]
    fn held_warp_respects_cooldown() {
        let mut app = playing_app(GameConfig::default());
        let ship = ship(&mut app);
        input(&mut app).warp = true;

        let mut warps = Vec::new();
        let mut last = app.world().get::<Transform>(ship).unwrap().translation;
        for frame in 0..ticks(2.0) {
            app.update();
            let now = app.world().get::<Transform>(ship).unwrap().translation;
            if now != last {
                warps.push(frame);
                last = now;
            }
        }

        assert_eq!(warps.len(), 4, "warped on frames {warps:?}");
        let cooldown = ticks(0.5);
        assert!(warps.windows(2).all(|pair| pair[1] - pair[0] >= cooldown));
    }

    #[test]
    fn warp_stays_on_screen() {
        let mut app = playing_app(GameConfig::default());
        let ship = ship(&mut app);
        input(&mut app).warp = true;

        for _ in 0..ticks(3.0) {
            app.update();
            let position = app.world().get::<Transform>(ship).unwrap().translation.truncate();
            let bounds = *app.world().resource::<ScreenBounds>();
            assert!(!bounds.is_outside(position, 0.0));
        }
    }
}
