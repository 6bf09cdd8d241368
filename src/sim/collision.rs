//! Collision detection
//!
//! Everything is axis-aligned: the avatar is a square, obstacles are two
//! rectangles separated by a gap. Touching the ground line or the top of
//! the playfield counts as a hit; touching an obstacle's side edge does not.

use super::state::{Avatar, CollisionKind, Gap, Obstacle};
use crate::tuning::Tuning;

/// Avatar's bottom edge reached the ground line
#[inline]
pub fn hits_ground(avatar: &Avatar, size: f32, ground_y: f32) -> bool {
    avatar.bottom(size) >= ground_y
}

/// Avatar's top edge reached the top of the playfield
#[inline]
pub fn hits_ceiling(avatar: &Avatar) -> bool {
    avatar.top() <= 0.0
}

/// Horizontal spans overlap (open intervals, so edge contact is a miss)
#[inline]
pub fn overlaps_horizontally(avatar_x: f32, size: f32, obstacle_x: f32, width: f32) -> bool {
    avatar_x + size > obstacle_x && avatar_x < obstacle_x + width
}

/// Avatar pokes out of the gap above or below
#[inline]
pub fn outside_gap(avatar: &Avatar, size: f32, gap: &Gap) -> bool {
    avatar.top() < gap.top || avatar.bottom(size) > gap.bottom()
}

/// Avatar hits one of this obstacle's segments
pub fn hits_obstacle(avatar: &Avatar, size: f32, obstacle: &Obstacle, width: f32) -> bool {
    overlaps_horizontally(avatar.pos.x, size, obstacle.x, width)
        && outside_gap(avatar, size, &obstacle.gap)
}

/// Check ground, ceiling, then every obstacle; first hit wins
pub fn check_collision(
    avatar: &Avatar,
    obstacles: &[Obstacle],
    tuning: &Tuning,
) -> Option<CollisionKind> {
    let size = tuning.avatar_size;

    if hits_ground(avatar, size, tuning.ground_y()) {
        return Some(CollisionKind::Ground);
    }
    if hits_ceiling(avatar) {
        return Some(CollisionKind::Ceiling);
    }

    obstacles
        .iter()
        .find(|o| hits_obstacle(avatar, size, o, tuning.obstacle_width))
        .map(|o| CollisionKind::Obstacle(o.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn avatar_at(x: f32, y: f32) -> Avatar {
        Avatar {
            pos: Vec2::new(x, y),
            vel: 0.0,
            rotation: 0.0,
        }
    }

    fn obstacle(x: f32, top: f32, height: f32) -> Obstacle {
        Obstacle {
            id: 7,
            x,
            gap: Gap { top, height },
            passed: false,
        }
    }

    #[test]
    fn test_ground_collision() {
        let tuning = Tuning::default();
        // 585 + 30 = 615 >= 550
        let avatar = avatar_at(100.0, 585.0);
        assert!(hits_ground(&avatar, 30.0, 550.0));
        assert_eq!(
            check_collision(&avatar, &[], &tuning),
            Some(CollisionKind::Ground)
        );

        // Exactly touching the ground line counts
        assert!(hits_ground(&avatar_at(100.0, 520.0), 30.0, 550.0));
        assert!(!hits_ground(&avatar_at(100.0, 519.5), 30.0, 550.0));
    }

    #[test]
    fn test_ceiling_collision() {
        let tuning = Tuning::default();
        let avatar = avatar_at(100.0, -1.0);
        assert!(hits_ceiling(&avatar));
        assert_eq!(
            check_collision(&avatar, &[], &tuning),
            Some(CollisionKind::Ceiling)
        );
        assert!(hits_ceiling(&avatar_at(100.0, 0.0)));
        assert!(!hits_ceiling(&avatar_at(100.0, 0.5)));
    }

    #[test]
    fn test_gap_collision_above_gap() {
        let tuning = Tuning::default();
        // Gap spans 200..350; avatar top 150 < 200
        let pipe = obstacle(100.0, 200.0, 150.0);
        let avatar = avatar_at(110.0, 150.0);
        assert!(hits_obstacle(&avatar, 30.0, &pipe, 60.0));
        assert_eq!(
            check_collision(&avatar, &[pipe], &tuning),
            Some(CollisionKind::Obstacle(7))
        );
    }

    #[test]
    fn test_gap_clear_inside_gap() {
        let tuning = Tuning::default();
        // 220 >= 200 and 250 <= 350
        let pipe = obstacle(100.0, 200.0, 150.0);
        let avatar = avatar_at(110.0, 220.0);
        assert!(!hits_obstacle(&avatar, 30.0, &pipe, 60.0));
        assert_eq!(check_collision(&avatar, &[pipe], &tuning), None);
    }

    #[test]
    fn test_gap_collision_below_gap() {
        let pipe = obstacle(100.0, 200.0, 150.0);
        // bottom edge 351 > 350
        assert!(hits_obstacle(&avatar_at(110.0, 321.0), 30.0, &pipe, 60.0));
        // bottom edge exactly on the gap bottom is safe
        assert!(!hits_obstacle(&avatar_at(110.0, 320.0), 30.0, &pipe, 60.0));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        // Avatar right edge touches obstacle left edge
        assert!(!overlaps_horizontally(100.0, 30.0, 130.0, 60.0));
        // Avatar left edge touches obstacle right edge
        assert!(!overlaps_horizontally(100.0, 30.0, 40.0, 60.0));
        assert!(overlaps_horizontally(100.0, 30.0, 129.0, 60.0));
        assert!(overlaps_horizontally(100.0, 30.0, 41.0, 60.0));
    }

    #[test]
    fn test_any_overlapping_obstacle_triggers() {
        let tuning = Tuning::default();
        let far = obstacle(600.0, 0.0, 150.0);
        let mut near = obstacle(90.0, 400.0, 100.0);
        near.id = 9;
        let avatar = avatar_at(100.0, 300.0);
        assert_eq!(
            check_collision(&avatar, &[far, near], &tuning),
            Some(CollisionKind::Obstacle(9))
        );
    }
}
