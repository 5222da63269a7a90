// Discrete axis-separated collision resolution against rectangles

use super::body::KinematicBody;
use crate::core::math::Rect;

/// How far a resting body's feet may sit from a surface and still count as on it
pub const CONTACT_EPSILON: f32 = 1e-3;

/// A rectangle that blocks movement, tagged with whatever the caller uses to identify it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid<T> {
    pub rect: Rect,
    pub tag: T,
}

impl<T> Solid<T> {
    pub fn new(rect: Rect, tag: T) -> Self {
        Self { rect, tag }
    }
}

/// Which face of the body touched the solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Body landed on top of the solid
    Floor,
    /// Body hit the underside of the solid
    Ceiling,
    /// Body was pushed back to the left of the solid
    Left,
    /// Body was pushed back to the right of the solid
    Right,
}

/// One resolved contact from a `resolve` pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<T> {
    pub tag: T,
    pub side: ContactSide,
}

/// Horizontal side one rectangle is on relative to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Result of an overlap-only query; nothing is displaced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Side of the target the body is on
    pub side: Side,
    /// Body's bottom edge is above the target's vertical midpoint
    pub from_above: bool,
}

/// Overlap-only test used for enemies, pickups, goal and trigger zones
pub fn touch(body: &Rect, target: &Rect) -> Option<Touch> {
    if !body.intersects(target) {
        return None;
    }
    let side = if body.center().x < target.center().x {
        Side::Left
    } else {
        Side::Right
    };
    Some(Touch {
        side,
        from_above: body.bottom() < target.center().y,
    })
}

/// Separate `body` from every overlapping solid, one solid at a time in the order given.
///
/// Each overlap is resolved along the axis of smaller penetration; equal depths resolve
/// vertically so a body sitting on a corner lands instead of being shoved sideways.
/// A body that approached from above lands (bottom snapped to the top, `vy = 0`,
/// grounded); otherwise it hits the ceiling (top snapped to the bottom, `vy = 0`).
/// Horizontal pushes only zero `vx`.
///
/// Grounded is cleared on entry and only set again by a floor contact. A body that was
/// already grounded and is not moving up keeps its footing on a surface it rests on
/// exactly, since grounded bodies receive no gravity and would otherwise never
/// penetrate the floor they stand on.
///
/// This is a single pass: dense geometry can leave small residual penetration, which
/// the next step cleans up.
pub fn resolve<T: Copy>(body: &mut KinematicBody, solids: &[Solid<T>]) -> Vec<Contact<T>> {
    let was_grounded = body.is_grounded();
    body.clear_ground();

    let mut contacts = Vec::new();

    for solid in solids {
        let bounds = body.rect();
        let platform = solid.rect;

        let overlap_x = bounds.overlap_x(&platform);
        let overlap_y = bounds.overlap_y(&platform);

        if overlap_x <= 0.0 {
            continue;
        }

        if overlap_y <= 0.0 {
            let resting = was_grounded
                && body.velocity.y >= 0.0
                && (bounds.bottom() - platform.top()).abs() <= CONTACT_EPSILON;
            if resting {
                body.position.y = platform.top() - bounds.h;
                body.velocity.y = 0.0;
                body.land();
                contacts.push(Contact {
                    tag: solid.tag,
                    side: ContactSide::Floor,
                });
            }
            continue;
        }

        let side = if overlap_y <= overlap_x {
            if bounds.top() < platform.top() {
                body.position.y = platform.top() - bounds.h;
                body.velocity.y = 0.0;
                body.land();
                ContactSide::Floor
            } else {
                body.position.y = platform.bottom();
                body.velocity.y = 0.0;
                ContactSide::Ceiling
            }
        } else if bounds.center().x < platform.center().x {
            body.position.x = platform.left() - bounds.w;
            body.velocity.x = 0.0;
            ContactSide::Left
        } else {
            body.position.x = platform.right();
            body.velocity.x = 0.0;
            ContactSide::Right
        };

        contacts.push(Contact {
            tag: solid.tag,
            side,
        });
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::{BodyBuilder, BodyProfile};
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn body_at(x: f32, y: f32, w: f32, h: f32) -> KinematicBody {
        BodyBuilder::new(BodyProfile::new(w, h).unwrap())
            .position(x, y)
            .build()
    }

    fn solids(rects: &[Rect]) -> Vec<Solid<usize>> {
        rects
            .iter()
            .enumerate()
            .map(|(i, r)| Solid::new(*r, i))
            .collect()
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        // 32x32 body sunk 12 into a platform top; full 32 overlap horizontally
        let mut body = body_at(0.0, 10.0, 32.0, 32.0);
        body.velocity = Vec2::new(0.0, 500.0);
        let platform = Rect::new(0.0, 30.0, 100.0, 20.0);

        let contacts = resolve(&mut body, &solids(&[platform]));

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].side, ContactSide::Floor);
        assert_relative_eq!(body.position.y, -2.0);
        assert_relative_eq!(body.rect().bottom(), platform.top());
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_ceiling_hit_keeps_grounded_unchanged() {
        let mut body = body_at(0.0, 45.0, 32.0, 32.0);
        body.velocity = Vec2::new(0.0, -300.0);
        let platform = Rect::new(0.0, 30.0, 100.0, 20.0);

        let contacts = resolve(&mut body, &solids(&[platform]));

        assert_eq!(contacts[0].side, ContactSide::Ceiling);
        assert_relative_eq!(body.position.y, 50.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_side_push_from_left() {
        // deep vertical overlap, shallow horizontal: pushed sideways
        let mut body = body_at(90.0, 0.0, 20.0, 40.0);
        body.velocity = Vec2::new(150.0, 20.0);
        let wall = Rect::new(100.0, -100.0, 50.0, 300.0);

        let contacts = resolve(&mut body, &solids(&[wall]));

        assert_eq!(contacts[0].side, ContactSide::Left);
        assert_relative_eq!(body.position.x, 80.0);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.y, 20.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_side_push_from_right() {
        let mut body = body_at(145.0, 0.0, 20.0, 40.0);
        body.velocity = Vec2::new(-150.0, 0.0);
        let wall = Rect::new(100.0, -100.0, 50.0, 300.0);

        let contacts = resolve(&mut body, &solids(&[wall]));

        assert_eq!(contacts[0].side, ContactSide::Right);
        assert_relative_eq!(body.position.x, 150.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_equal_depths_resolve_vertically() {
        // 10x10 overlap on a corner
        let mut body = body_at(90.0, 90.0, 20.0, 20.0);
        body.velocity = Vec2::new(50.0, 50.0);
        let platform = Rect::new(100.0, 100.0, 50.0, 50.0);

        let contacts = resolve(&mut body, &solids(&[platform]));

        assert_eq!(contacts[0].side, ContactSide::Floor);
        assert_relative_eq!(body.position.y, 80.0);
        assert_eq!(body.position.x, 90.0);
        assert_eq!(body.velocity.x, 50.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_touching_edges_are_not_collisions() {
        let mut body = body_at(0.0, 0.0, 10.0, 10.0);
        let beside = Rect::new(10.0, 0.0, 10.0, 10.0);
        let contacts = resolve(&mut body, &solids(&[beside]));
        assert!(contacts.is_empty());
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn test_grounded_cleared_without_support() {
        let mut body = body_at(0.0, 0.0, 10.0, 10.0);
        body.land();
        let far = Rect::new(500.0, 500.0, 10.0, 10.0);
        resolve(&mut body, &solids(&[far]));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut body = body_at(10.0, 60.0, 40.0, 40.0);
        body.land();

        let contacts = resolve(&mut body, &solids(&[platform]));

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].side, ContactSide::Floor);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_resting_contact_requires_previous_ground() {
        // exactly touching, but was airborne: no speculative grounding
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut body = body_at(10.0, 60.0, 40.0, 40.0);
        let contacts = resolve(&mut body, &solids(&[platform]));
        assert!(contacts.is_empty());
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_walking_off_ledge_loses_ground() {
        let platform = Rect::new(0.0, 100.0, 50.0, 20.0);
        let mut body = body_at(50.0, 60.0, 40.0, 40.0);
        body.land();
        let contacts = resolve(&mut body, &solids(&[platform]));
        assert!(contacts.is_empty());
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_rising_body_does_not_rest() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut body = body_at(10.0, 60.0, 40.0, 40.0);
        body.land();
        body.velocity.y = -600.0;
        resolve(&mut body, &solids(&[platform]));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_multiple_platforms_resolved_in_order() {
        let a = Rect::new(0.0, 100.0, 50.0, 20.0);
        let b = Rect::new(50.0, 100.0, 50.0, 20.0);
        let mut body = body_at(30.0, 65.0, 40.0, 40.0);
        body.velocity.y = 200.0;

        let contacts = resolve(&mut body, &solids(&[a, b]));

        // first landing snaps the body flush, the second platform is then only touched
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].tag, 0);
        assert_relative_eq!(body.rect().bottom(), 100.0);
    }

    #[test]
    fn test_touch_reports_side_and_stomp() {
        let enemy = Rect::new(100.0, 100.0, 24.0, 24.0);

        let above = Rect::new(95.0, 70.0, 20.0, 40.0);
        let t = touch(&above, &enemy).unwrap();
        assert!(t.from_above);
        assert_eq!(t.side, Side::Left);

        let beside = Rect::new(110.0, 90.0, 20.0, 30.0);
        let t = touch(&beside, &enemy).unwrap();
        assert!(!t.from_above);
        assert_eq!(t.side, Side::Right);

        let apart = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(touch(&apart, &enemy).is_none());
    }

    #[test]
    fn test_touch_does_not_move_anything() {
        let body = Rect::new(0.0, 0.0, 10.0, 10.0);
        let target = Rect::new(5.0, 5.0, 10.0, 10.0);
        let before = body;
        touch(&body, &target);
        assert_eq!(body, before);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(Side::Right.sign(), 1.0);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
