//! Collision geometry and world placement for generated terrain.
//!
//! [`CollisionSurface`] is a position-only copy of the land mesh's triangle
//! list. No engine-specific shape is built here; callers read the faces
//! through `faces()` or `face_points()`.
//! [`Placement`] centers the land and water surfaces on the world origin, and
//! [`PlayableArea`] answers whether a point lies inside the walkable circle.

mod collision;
mod placement;

pub use collision::{Aabb, CollisionSurface};
pub use placement::{Placement, PlayableArea, place};
