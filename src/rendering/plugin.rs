//! Rendering plugin - 2D camera and simple vector shapes.
//!
//! Gameplay never touches meshes or materials. Shapes are attached to any
//! entity that gains a [`BodyKind`], and ship and saucer colours follow
//! their [`CraftAnim`].

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::core::{BodyKind, GameSet, ScreenBounds};
use crate::craft::{Craft, CraftAnim};
use crate::rocks::Rock;

/// Screen pixels per world unit.
pub const PIXELS_PER_UNIT: f32 = 50.0;

/// Rendering plugin - camera, screen bounds and entity visuals.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.04)))
            .add_systems(Startup, (setup_camera, setup_palette))
            .add_systems(PreUpdate, refresh_screen_bounds)
            .add_systems(
                Update,
                (attach_shapes, tint_crafts).after(GameSet::Bookkeeping),
            );
    }
}

/// Marker for the single game camera.
#[derive(Component)]
pub struct GameCamera;

/// Shared materials for every body.
#[derive(Resource)]
pub struct Palette {
    idle: Handle<ColorMaterial>,
    accelerating: Handle<ColorMaterial>,
    shielded: Handle<ColorMaterial>,
    hit: Handle<ColorMaterial>,
    rock: Handle<ColorMaterial>,
    saucer: Handle<ColorMaterial>,
    player_bullet: Handle<ColorMaterial>,
    saucer_bullet: Handle<ColorMaterial>,
}

impl Palette {
    fn craft(&self, kind: BodyKind, anim: CraftAnim) -> Handle<ColorMaterial> {
        match (kind, anim) {
            (_, CraftAnim::Hit) => self.hit.clone(),
            (BodyKind::Saucer, _) => self.saucer.clone(),
            (_, CraftAnim::Idle) => self.idle.clone(),
            (_, CraftAnim::Accelerating) => self.accelerating.clone(),
            (_, CraftAnim::ShieldedIdle | CraftAnim::ShieldedAccelerating) => {
                self.shielded.clone()
            }
        }
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        },
        GameCamera,
    ));
}

fn setup_palette(mut commands: Commands, mut materials: ResMut<Assets<ColorMaterial>>) {
    let mut add = |color: Color| materials.add(color);

    commands.insert_resource(Palette {
        idle: add(Color::srgb(0.85, 0.85, 0.9)),
        accelerating: add(Color::srgb(1.0, 0.75, 0.35)),
        shielded: add(Color::srgb(0.35, 0.75, 1.0)),
        hit: add(Color::srgb(1.0, 0.2, 0.15)),
        rock: add(Color::srgb(0.55, 0.5, 0.45)),
        saucer: add(Color::srgb(0.5, 1.0, 0.45)),
        player_bullet: add(Color::srgb(1.0, 1.0, 0.7)),
        saucer_bullet: add(Color::srgb(1.0, 0.45, 0.8)),
    });
}

/// Keep [`ScreenBounds`] in line with what the camera shows.
fn refresh_screen_bounds(
    cameras: Query<(&OrthographicProjection, &GlobalTransform), With<GameCamera>>,
    mut bounds: ResMut<ScreenBounds>,
) {
    let Ok((projection, transform)) = cameras.get_single() else {
        return;
    };
    if projection.area.width() <= 0.0 || projection.area.height() <= 0.0 {
        return;
    }

    let centre = transform.translation().truncate();
    let current = ScreenBounds::new(
        centre + projection.area.min,
        centre + projection.area.max,
    );
    if *bounds != current {
        *bounds = current;
    }
}

/// Give every new body a mesh and a material.
fn attach_shapes(
    mut commands: Commands,
    config: Res<GameConfig>,
    palette: Option<Res<Palette>>,
    mut meshes: ResMut<Assets<Mesh>>,
    added: Query<(Entity, &BodyKind, Option<&Rock>, Option<&Craft>), Added<BodyKind>>,
) {
    let Some(palette) = palette else {
        return;
    };

    for (entity, kind, rock, craft) in added.iter() {
        let (mesh, material) = match kind {
            BodyKind::Ship => {
                let r = config.ship.radius;
                let mesh = meshes.add(Triangle2d::new(
                    Vec2::new(0.0, r * 1.4),
                    Vec2::new(-r, -r),
                    Vec2::new(r, -r),
                ));
                let anim = craft.map_or(CraftAnim::Idle, |craft| craft.anim);
                (mesh, palette.craft(*kind, anim))
            }
            BodyKind::Saucer => (
                meshes.add(Ellipse::new(config.saucer.radius * 1.4, config.saucer.radius * 0.7)),
                palette.saucer.clone(),
            ),
            BodyKind::Rock => {
                let radius = rock
                    .and_then(|rock| config.rocks.generation(rock.generation))
                    .map_or(0.5, |generation| generation.radius);
                (
                    meshes.add(RegularPolygon::new(radius, 7)),
                    palette.rock.clone(),
                )
            }
            BodyKind::PlayerBullet => (
                meshes.add(Circle::new(config.bullet.radius)),
                palette.player_bullet.clone(),
            ),
            BodyKind::SaucerBullet => (
                meshes.add(Circle::new(config.bullet.radius)),
                palette.saucer_bullet.clone(),
            ),
        };

        // The body may already be gone by the time this applies
        commands
            .entity(entity)
            .try_insert((Mesh2d(mesh), MeshMaterial2d(material)));
    }
}

/// Swap craft colours when their animation state changes.
fn tint_crafts(
    palette: Option<Res<Palette>>,
    mut crafts: Query<(&Craft, &BodyKind, &mut MeshMaterial2d<ColorMaterial>), Changed<Craft>>,
) {
    let Some(palette) = palette else {
        return;
    };

    for (craft, kind, mut material) in crafts.iter_mut() {
        let wanted = palette.craft(*kind, craft.anim);
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}
