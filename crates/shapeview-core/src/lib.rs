//! Core logic for an interactive parametric 3D shape viewer.
//!
//! Everything that is not rendering lives here: the shape registry (ids,
//! ordered parameters, defaults, geometry builders), the style resolver
//! (style + color -> renderable description), the interaction state machine
//! driven by host UI events, and the declarative startup scene.
//!
//! Geometry construction, materials, lighting, and rasterization belong to
//! the render host's engine. The core hands it [`shapes::geometry::GeometrySpec`]
//! and [`style::RenderableSpec`] values to instantiate, and a rebuild
//! generation counter that tells it when to destroy and recreate the
//! displayed object.

pub mod color;
pub mod params;
pub mod scene;
pub mod shapes;
pub mod style;
pub mod view;
