// Wind zones: rectangles that push the player while overlapped

use glam::Vec2;

use crate::core::math::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindZone {
    pub rect: Rect,
    /// Acceleration applied to a body inside the zone (units/s²)
    pub acceleration: Vec2,
}

impl WindZone {
    pub fn new(rect: Rect, acceleration: Vec2) -> Self {
        Self { rect, acceleration }
    }

    pub fn affects(&self, body: &Rect) -> bool {
        body.intersects(&self.rect)
    }
}

/// Sum the acceleration of every zone overlapping `body`.
/// The flag reports whether any zone overlapped at all.
pub fn wind_at(zones: &[WindZone], body: &Rect) -> (Vec2, bool) {
    zones
        .iter()
        .filter(|zone| zone.affects(body))
        .fold((Vec2::ZERO, false), |(total, _), zone| {
            (total + zone.acceleration, true)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_sums_overlapping_zones() {
        let zones = [
            WindZone::new(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(-600.0, 0.0)),
            WindZone::new(Rect::new(50.0, 0.0, 100.0, 100.0), Vec2::new(0.0, -200.0)),
            WindZone::new(Rect::new(500.0, 0.0, 100.0, 100.0), Vec2::new(100.0, 0.0)),
        ];
        let body = Rect::new(60.0, 10.0, 20.0, 20.0);
        let (total, inside) = wind_at(&zones, &body);
        assert!(inside);
        assert_eq!(total, Vec2::new(-600.0, -200.0));
    }

    #[test]
    fn test_no_wind_outside() {
        let zones = [WindZone::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Vec2::new(-600.0, 0.0),
        )];
        let (total, inside) = wind_at(&zones, &Rect::new(20.0, 20.0, 5.0, 5.0));
        assert!(!inside);
        assert_eq!(total, Vec2::ZERO);
    }
}
