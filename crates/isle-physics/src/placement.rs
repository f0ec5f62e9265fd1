//! World placement of the generated surfaces and the playable-area query.

use glam::{Vec2, Vec3};
use isle_config::SurfaceConfig;

/// World-space origins for the land and water surfaces.
///
/// The collision surface is attached to the land and shares its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub land_origin: Vec3,
    pub water_origin: Vec3,
}

impl Placement {
    /// Translate a point from land-local grid space into world space.
    pub fn land_to_world(&self, local: Vec3) -> Vec3 {
        local + self.land_origin
    }

    /// Translate a world-space point into land-local grid space.
    pub fn world_to_land(&self, world: Vec3) -> Vec3 {
        world - self.land_origin
    }
}

/// Center a `width × height` terrain on the world origin.
///
/// The land origin uses integer halving, so odd sizes sit half a cell off
/// center. Water shares the land's X/Z and is lowered by
/// `surface.water_vertical_offset`.
pub fn place(width: u32, height: u32, surface: &SurfaceConfig) -> Placement {
    let land_origin = Vec3::new(-((width / 2) as f32), 0.0, -((height / 2) as f32));
    let water_origin = Vec3::new(land_origin.x, surface.water_vertical_offset, land_origin.z);
    Placement {
        land_origin,
        water_origin,
    }
}

/// A circle in grid-local X/Z space inside which movement is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayableArea {
    pub center: Vec2,
    /// May be negative for grids narrower than twice the inset, in which
    /// case no point is in bounds.
    pub radius: f32,
}

impl PlayableArea {
    /// Circle centered at `(width / 2, height / 2)` with radius
    /// `min(width, height) / 2 - inset`.
    pub fn new(width: u32, height: u32, inset: f32) -> Self {
        let area = Self {
            center: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            radius: width.min(height) as f32 / 2.0 - inset,
        };
        if area.is_empty() {
            tracing::warn!(
                width,
                height,
                inset,
                "grid is too small for its bounds inset; playable area is empty"
            );
        }
        area
    }

    pub fn from_surface(width: u32, height: u32, surface: &SurfaceConfig) -> Self {
        Self::new(width, height, surface.bounds_inset)
    }

    /// `true` when no point can be in bounds.
    pub fn is_empty(&self) -> bool {
        self.radius < 0.0
    }

    /// Whether `position` is within the circle, boundary included. Y is ignored.
    pub fn is_within_bounds(&self, position: Vec3) -> bool {
        let planar = Vec2::new(position.x, position.z);
        planar.distance(self.center) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_even_grid() {
        let placement = place(100, 80, &SurfaceConfig::default());
        assert_eq!(placement.land_origin, Vec3::new(-50.0, 0.0, -40.0));
        assert_eq!(placement.water_origin, Vec3::new(-50.0, -10.0, -40.0));
    }

    #[test]
    fn test_place_odd_grid_uses_integer_halving() {
        let placement = place(101, 7, &SurfaceConfig::default());
        assert_eq!(placement.land_origin, Vec3::new(-50.0, 0.0, -3.0));
    }

    #[test]
    fn test_place_respects_water_offset() {
        let surface = SurfaceConfig {
            water_vertical_offset: -4.5,
            ..Default::default()
        };
        assert_eq!(place(10, 10, &surface).water_origin.y, -4.5);
    }

    #[test]
    fn test_world_round_trip() {
        let placement = place(64, 64, &SurfaceConfig::default());
        let local = Vec3::new(10.0, 3.0, 20.0);
        let world = placement.land_to_world(local);
        assert_eq!(world, Vec3::new(-22.0, 3.0, -12.0));
        assert_eq!(placement.world_to_land(world), local);
    }

    #[test]
    fn test_center_in_bounds() {
        let area = PlayableArea::new(100, 100, 20.0);
        assert!(area.is_within_bounds(Vec3::new(50.0, 0.0, 50.0)));
    }

    #[test]
    fn test_corner_out_of_bounds() {
        let area = PlayableArea::new(100, 100, 20.0);
        assert!(!area.is_within_bounds(Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let area = PlayableArea::new(100, 100, 20.0);
        assert_eq!(area.radius, 30.0);
        assert!(area.is_within_bounds(Vec3::new(80.0, 5.0, 50.0)));
        assert!(area.is_within_bounds(Vec3::new(50.0, -5.0, 20.0)));
        assert!(!area.is_within_bounds(Vec3::new(80.01, 0.0, 50.0)));
    }

    #[test]
    fn test_height_ignored() {
        let area = PlayableArea::new(100, 100, 20.0);
        assert!(area.is_within_bounds(Vec3::new(50.0, 1.0e6, 50.0)));
    }

    #[test]
    fn test_radius_uses_shorter_side() {
        let area = PlayableArea::new(200, 60, 20.0);
        assert_eq!(area.center, Vec2::new(100.0, 30.0));
        assert_eq!(area.radius, 10.0);
    }

    #[test]
    fn test_small_grid_has_empty_area() {
        let area = PlayableArea::from_surface(4, 4, &SurfaceConfig::default());
        assert!(area.is_empty());
        assert!(!area.is_within_bounds(Vec3::new(2.0, 0.0, 2.0)));
    }
}
