//! Visible play area in world coordinates.

use bevy::prelude::*;
use rand::Rng;

/// South-west and north-east corners of the screen in world space.
///
/// Refreshed from the camera by the rendering plugin; headless runs keep
/// whatever was inserted.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub south_west: Vec2,
    pub north_east: Vec2,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(Vec2::new(-10.0, -6.0), Vec2::new(10.0, 6.0))
    }
}

impl ScreenBounds {
    pub fn new(south_west: Vec2, north_east: Vec2) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Where `position` should teleport to, if it drifted more than
    /// `padding` past an edge. Each axis wraps independently.
    pub fn wrap(&self, position: Vec2, padding: f32) -> Option<Vec2> {
        let mut wrapped = position;

        if position.x < self.south_west.x - padding {
            wrapped.x = self.north_east.x;
        } else if position.x > self.north_east.x + padding {
            wrapped.x = self.south_west.x;
        }

        if position.y < self.south_west.y - padding {
            wrapped.y = self.north_east.y;
        } else if position.y > self.north_east.y + padding {
            wrapped.y = self.south_west.y;
        }

        (wrapped != position).then_some(wrapped)
    }

    /// True once `position` is more than `padding` outside any edge.
    pub fn is_outside(&self, position: Vec2, padding: f32) -> bool {
        position.x < self.south_west.x - padding
            || position.x > self.north_east.x + padding
            || position.y < self.south_west.y - padding
            || position.y > self.north_east.y + padding
    }

    /// Uniformly random point inside the bounds.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            sample_span(rng, self.south_west.x, self.north_east.x),
            sample_span(rng, self.south_west.y, self.north_east.y),
        )
    }

    /// The four screen corners in spawn order: SW, NW, NE, SE.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.south_west,
            Vec2::new(self.south_west.x, self.north_east.y),
            self.north_east,
            Vec2::new(self.north_east.x, self.south_west.y),
        ]
    }
}

/// Teleports its entity to the opposite edge after drifting `padding`
/// units off screen.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScreenWrap {
    pub padding: f32,
}

/// Wrap every [`ScreenWrap`] entity that left the screen.
pub fn wrap_at_edges(bounds: Res<ScreenBounds>, mut query: Query<(&mut Transform, &ScreenWrap)>) {
    for (mut transform, wrap) in query.iter_mut() {
        if let Some(wrapped) = bounds.wrap(transform.translation.truncate(), wrap.padding) {
            transform.translation.x = wrapped.x;
            transform.translation.y = wrapped.y;
        }
    }
}

fn sample_span(rng: &mut impl Rng, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
