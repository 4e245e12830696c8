//! Collision detection between the actor, barriers and world bounds
//!
//! Pure functions. Callers must pass the actor box for the current tick;
//! a stale box gives stale answers.

use super::obstacles::ObstaclePair;
use super::rect::Rect;

/// Whether the actor box touches any barrier of any pair
pub fn hits_obstacle(actor: &Rect, obstacles: &[ObstaclePair]) -> bool {
    obstacles
        .iter()
        .flat_map(|p| p.barriers())
        .any(|barrier| actor.intersects(&barrier))
}

/// Whether the actor's top edge has reached the ceiling or the floor
#[inline]
pub fn out_of_bounds(actor: &Rect, world_height: f32) -> bool {
    actor.top() <= 0.0 || actor.top() >= world_height
}

/// Full collision check for one tick
pub fn check(actor: &Rect, obstacles: &[ObstaclePair], world_height: f32) -> bool {
    hits_obstacle(actor, obstacles) || out_of_bounds(actor, world_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const H: f32 = 600.0;

    fn actor_at(y: f32) -> Rect {
        Rect::new(100.0, y, 40.0, 30.0)
    }

    fn pair_at(x: f32, gap_top: f32) -> ObstaclePair {
        ObstaclePair::new(x, 60.0, gap_top, 150.0, H)
    }

    #[test]
    fn test_clear_flight_through_gap() {
        let obstacles = [pair_at(100.0, 250.0)];
        // gap is 250..400, actor spans 300..330
        assert!(!check(&actor_at(300.0), &obstacles, H));
    }

    #[test]
    fn test_hits_top_barrier() {
        let obstacles = [pair_at(100.0, 250.0)];
        assert!(check(&actor_at(240.0), &obstacles, H));
    }

    #[test]
    fn test_hits_bottom_barrier() {
        let obstacles = [pair_at(100.0, 250.0)];
        assert!(check(&actor_at(380.0), &obstacles, H));
    }

    #[test]
    fn test_touching_barrier_edge_counts() {
        // Barrier leading edge exactly at actor's right edge
        let obstacles = [pair_at(140.0, 100.0)];
        assert!(hits_obstacle(&actor_at(50.0), &obstacles));
        // One pixel further and it's clear
        let obstacles = [pair_at(141.0, 100.0)];
        assert!(!hits_obstacle(&actor_at(50.0), &obstacles));
    }

    #[test]
    fn test_world_bounds() {
        assert!(out_of_bounds(&actor_at(0.0), H));
        assert!(out_of_bounds(&actor_at(-5.0), H));
        assert!(out_of_bounds(&actor_at(H), H));
        assert!(out_of_bounds(&actor_at(H + 20.0), H));
        assert!(!out_of_bounds(&actor_at(0.5), H));
        assert!(!out_of_bounds(&actor_at(H - 0.5), H));
    }

    #[test]
    fn test_empty_field_in_bounds() {
        assert!(!check(&actor_at(300.0), &[], H));
    }

    proptest! {
        #[test]
        fn prop_disjoint_and_in_bounds_never_collides(
            y in 1.0f32..(H - 1.0),
            dx in 1.0f32..500.0,
        ) {
            // Pair entirely to the right of the actor box
            let obstacles = [pair_at(140.0 + dx, 250.0)];
            prop_assert!(!check(&actor_at(y), &obstacles, H));
        }

        #[test]
        fn prop_out_of_bounds_always_collides(
            above in 0.0f32..1000.0,
            below in 0.0f32..1000.0,
        ) {
            prop_assert!(check(&actor_at(-above), &[], H));
            prop_assert!(check(&actor_at(H + below), &[], H));
        }

        #[test]
        fn prop_overlap_matches_rect_test(
            y in 1.0f32..(H - 1.0),
            x in -100.0f32..300.0,
            gap_top in 100i32..=400,
        ) {
            let actor = actor_at(y);
            let pair = pair_at(x, gap_top as f32);
            let expected = actor.intersects(&pair.top()) || actor.intersects(&pair.bottom());
            prop_assert_eq!(check(&actor, &[pair], H), expected);
        }
    }
}
