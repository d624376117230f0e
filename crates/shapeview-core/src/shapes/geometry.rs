//! Declarative geometry handles.
//!
//! The core never builds vertex buffers. A [`GeometrySpec`] names one of the
//! render engine's geometry constructors together with fully resolved
//! arguments; the host instantiates it 1:1.

/// Which engine geometry constructor to invoke, with resolved arguments in
/// the constructor's declaration order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryKind {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Dodecahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
    Icosahedron {
        radius: f32,
    },
    Tetrahedron {
        radius: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
    /// Tube extruded along a straight path spanning `[-radius, radius]` on X.
    Tube {
        radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

/// Opaque-to-the-core description of a shape surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySpec {
    pub kind: GeometryKind,
    /// Pre-rotation about X in radians, applied by the host right after
    /// construction. Only the pyramid uses a non-zero value.
    pub rotate_x: f32,
}

impl GeometrySpec {
    pub fn new(kind: GeometryKind) -> Self {
        Self { kind, rotate_x: 0.0 }
    }

    pub fn rotated_x(kind: GeometryKind, angle: f32) -> Self {
        Self {
            kind,
            rotate_x: angle,
        }
    }
}
