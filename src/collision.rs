//! Loss detection: the actor against obstacles and the world edges.

use crate::actor::Actor;
use crate::obstacles::ObstacleField;

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ceiling,
    Floor,
    Obstacle,
}

impl Collision {
    pub fn describe(self) -> &'static str {
        match self {
            Collision::Ceiling => "Hit the ceiling",
            Collision::Floor => "Hit the ground",
            Collision::Obstacle => "Crashed into a wall",
        }
    }
}

/// Touching either vertical edge of the world ends the run.
pub fn check_world_bounds(actor: &Actor) -> Option<Collision> {
    if actor.position_y <= 0.0 {
        Some(Collision::Ceiling)
    } else if actor.position_y >= actor.max_y() {
        Some(Collision::Floor)
    } else {
        None
    }
}

pub fn check_obstacles(actor: &Actor, field: &ObstacleField) -> Option<Collision> {
    field
        .first_collision(&actor.bounds())
        .map(|_| Collision::Obstacle)
}

/// Obstacles are checked first, then the world edges.
pub fn resolve(actor: &Actor, field: &ObstacleField) -> Option<Collision> {
    check_obstacles(actor, field).or_else(|| check_world_bounds(actor))
}
