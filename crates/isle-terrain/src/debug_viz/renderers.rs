//! Color-banded renderings of land and ocean-floor grids.

use crate::HeightGrid;

use super::DebugImage;

/// Normalized land height below which a cell is drawn as sea.
pub const SEA_LEVEL: f32 = 0.3;

/// Map a normalized land height to an RGB color band.
pub fn height_to_color(normalized: f32) -> (u8, u8, u8) {
    if normalized < SEA_LEVEL + 0.03 {
        // Beach
        (220, 200, 130)
    } else if normalized < 0.6 {
        // Grassland, darkening with altitude
        let t = ((normalized - SEA_LEVEL) / (0.6 - SEA_LEVEL)).clamp(0.0, 1.0);
        (
            (40.0 + t * 60.0) as u8,
            (170.0 - t * 50.0) as u8,
            (40.0 + t * 10.0) as u8,
        )
    } else if normalized < 0.85 {
        // Rock
        let t = (normalized - 0.6) / 0.25;
        (
            (110.0 + t * 30.0) as u8,
            (100.0 - t * 20.0) as u8,
            (80.0 + t * 10.0) as u8,
        )
    } else {
        // Snow
        let t = ((normalized - 0.85) / 0.15).min(1.0);
        let v = (215.0 + t * 40.0) as u8;
        (v, v, v)
    }
}

fn depth_to_color(depth: f32) -> (u8, u8, u8) {
    let t = depth.clamp(0.0, 1.0);
    (
        (60.0 - t * 60.0) as u8,
        (140.0 - t * 100.0) as u8,
        (220.0 - t * 90.0) as u8,
    )
}

/// Render a top-down preview: image pixel `(x, y)` is grid cell `(x, z = y)`.
///
/// Land is normalized over its own range. Cells below [`SEA_LEVEL`] are
/// shaded by ocean-floor depth instead, darker where the floor is deeper.
pub fn render_heightmap_debug(land: &HeightGrid, ocean_floor: &HeightGrid) -> DebugImage {
    let (width, height) = land.dimensions();
    let mut image = DebugImage::new(width as u32, height as u32);
    let (Some(land_range), Some(floor_range)) = (land.range(), ocean_floor.range()) else {
        return image;
    };

    for x in 0..width {
        for z in 0..height {
            let normalized = land_range.normalize(land[(x, z)]);
            let color = if normalized < SEA_LEVEL {
                let depth = ocean_floor
                    .get(x, z)
                    .map_or(0.0, |d| floor_range.normalize(d));
                depth_to_color(depth)
            } else {
                height_to_color(normalized)
            };
            image.set_rgb(x as u32, z as u32, color);
        }
    }
    image
}
