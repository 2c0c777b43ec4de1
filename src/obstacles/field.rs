//! The live set of obstacles and the spawn timer.

use super::types::ObstacleUnit;
use crate::core::{GameConfig, Rect};
use rand::Rng;

/// What happened to the field during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTick {
    /// Units whose trailing edge passed the actor this tick.
    pub scored_count: u32,
    /// Center x of each unit that scored, in world units.
    pub score_positions: Vec<f64>,
    /// Whether a new unit was spawned this tick.
    pub spawned: bool,
}

/// Ordered obstacles. Spawn order is left-to-right order and is never changed.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    units: Vec<ObstacleUnit>,
    /// Ticks accumulated toward the next spawn.
    ticks_since_last_spawn: u32,
    config: GameConfig,
}

impl ObstacleField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            units: Vec::new(),
            ticks_since_last_spawn: 0,
            config: *config,
        }
    }

    /// Advance the field by `dt_ticks`.
    ///
    /// The spawn timer is an accumulator: once it reaches the spawn interval a
    /// unit is spawned at the right edge and the interval is subtracted, so
    /// leftover ticks carry over. At most one unit spawns per call.
    pub fn tick<R: Rng>(
        &mut self,
        dt_ticks: u32,
        current_speed: f64,
        actor_x: f64,
        rng: &mut R,
    ) -> FieldTick {
        let mut result = FieldTick::default();

        self.ticks_since_last_spawn = self.ticks_since_last_spawn.saturating_add(dt_ticks);
        if self.ticks_since_last_spawn >= self.config.spawn_interval_ticks {
            self.units
                .push(ObstacleUnit::new(self.config.world_width, &self.config, rng));
            self.ticks_since_last_spawn -= self.config.spawn_interval_ticks;
            result.spawned = true;
        }

        for unit in &mut self.units {
            unit.advance(current_speed);
        }

        for unit in &mut self.units {
            if unit.check_passed(actor_x) {
                result.scored_count += 1;
                result.score_positions.push(unit.center_x());
            }
        }

        self.units.retain(|u| !u.is_expired());

        result
    }

    /// Remove every unit and restart the spawn timer.
    pub fn clear(&mut self) {
        self.units.clear();
        self.ticks_since_last_spawn = 0;
    }

    pub fn units(&self) -> &[ObstacleUnit] {
        &self.units
    }

    /// Insert a unit directly. Keeps left-to-right order only if `unit` is
    /// right of every live unit.
    pub fn push(&mut self, unit: ObstacleUnit) {
        self.units.push(unit);
    }

    pub fn ticks_since_last_spawn(&self) -> u32 {
        self.ticks_since_last_spawn
    }

    /// First unit whose walls overlap `bounds`, if any.
    pub fn first_collision(&self, bounds: &Rect) -> Option<&ObstacleUnit> {
        self.units.iter().find(|u| u.collides_with(bounds))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_config() -> GameConfig {
        GameConfig {
            spawn_interval_ticks: 10,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_first_spawn_after_full_interval() {
        let config = small_config();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..9 {
            let tick = field.tick(1, 5.0, 200.0, &mut rng);
            assert!(!tick.spawned);
        }
        assert!(field.is_empty());

        let tick = field.tick(1, 5.0, 200.0, &mut rng);
        assert!(tick.spawned);
        assert_eq!(field.len(), 1);
        // Spawned at the right edge, then advanced in the same tick.
        assert_eq!(field.units()[0].x, 1195.0);
        assert_eq!(field.ticks_since_last_spawn(), 0);
    }

    #[test]
    fn test_leftover_ticks_carry_over() {
        let config = small_config();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let tick = field.tick(13, 5.0, 200.0, &mut rng);
        assert!(tick.spawned);
        assert_eq!(field.ticks_since_last_spawn(), 3);
    }

    #[test]
    fn test_oversized_step_spawns_one_unit() {
        let config = small_config();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        field.tick(35, 5.0, 200.0, &mut rng);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_scoring_reported_once() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(ObstacleUnit::with_gap(96.0, 200.0, &config));

        let first = field.tick(1, 5.0, 200.0, &mut rng);
        assert_eq!(first.scored_count, 1);
        assert_eq!(first.score_positions, vec![141.0]);

        let second = field.tick(1, 5.0, 200.0, &mut rng);
        assert_eq!(second.scored_count, 0);
        assert!(second.score_positions.is_empty());
    }

    #[test]
    fn test_expired_units_are_removed_in_order() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        field.push(ObstacleUnit::with_gap(-98.0, 200.0, &config));
        field.push(ObstacleUnit::with_gap(300.0, 200.0, &config));
        field.push(ObstacleUnit::with_gap(700.0, 200.0, &config));

        field.tick(1, 5.0, 200.0, &mut rng);

        let xs: Vec<f64> = field.units().iter().map(|u| u.x).collect();
        assert_eq!(xs, vec![295.0, 695.0]);
    }

    #[test]
    fn test_clear_resets_timer() {
        let config = small_config();
        let mut field = ObstacleField::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..25 {
            field.tick(1, 5.0, 200.0, &mut rng);
        }
        assert!(!field.is_empty());

        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.ticks_since_last_spawn(), 0);
    }

    #[test]
    fn test_first_collision() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new(&config);
        field.push(ObstacleUnit::with_gap(180.0, 300.0, &config));
        let actor = Rect::new(200.0, 100.0, 60.0, 60.0);
        assert!(field.first_collision(&actor).is_some());
        let safe = Rect::new(200.0, 350.0, 60.0, 60.0);
        assert!(field.first_collision(&safe).is_none());
    }
}
