//! The immutable shape registry.
//!
//! Maps each shape id to its ordered parameter list, defaults, and a pure
//! geometry builder. Builders substitute the default for any missing or
//! non-finite value, so a partial or garbled [`ParamState`] always yields a
//! usable spec.

use std::f32::consts::FRAC_PI_2;

use thiserror::Error;

use super::geometry::{GeometryKind, GeometrySpec};
use crate::params::ParamState;

/// Lookup of a shape id that is not in the registry. The only hard,
/// user-triggerable error in the system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown shape id `{0}`")]
pub struct UnknownShape(pub String);

/// One registry entry.
#[derive(Debug)]
pub struct ShapeDefinition {
    pub id: &'static str,
    /// Parameter names in UI order, positionally paired with `defaults`.
    pub parameters: &'static [&'static str],
    pub defaults: &'static [f32],
    build: fn(&ParamState) -> GeometrySpec,
}

impl ShapeDefinition {
    /// Default value for `name`, if this shape has such a parameter.
    pub fn default_of(&self, name: &str) -> Option<f32> {
        self.parameters
            .iter()
            .position(|p| *p == name)
            .map(|i| self.defaults[i])
    }

    /// Fresh parameter state holding every default.
    pub fn default_params(&self) -> ParamState {
        ParamState::from_defaults(self.parameters, self.defaults)
    }

    /// Resolve `params` into a geometry spec, falling back to defaults for
    /// missing or non-finite entries.
    pub fn build_geometry(&self, params: &ParamState) -> GeometrySpec {
        (self.build)(params)
    }
}

fn dim(params: &ParamState, name: &str, default: f32) -> f32 {
    params
        .get(name)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn seg(params: &ParamState, name: &str, default: f32) -> u32 {
    dim(params, name, default).max(0.0) as u32
}

fn build_torus(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Torus {
        radius: dim(p, "radius", 7.0),
        tube: dim(p, "tube", 3.5),
        radial_segments: seg(p, "radialSegments", 100.0),
        tubular_segments: seg(p, "tubularSegments", 100.0),
    })
}

fn build_cube(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Box {
        width: dim(p, "width", 9.0),
        height: dim(p, "height", 9.0),
        depth: dim(p, "depth", 9.0),
    })
}

fn build_sphere(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Sphere {
        radius: dim(p, "radius", 7.0),
        width_segments: seg(p, "widthSegments", 50.0),
        height_segments: seg(p, "heightSegments", 50.0),
    })
}

fn build_dodecahedron(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Dodecahedron {
        radius: dim(p, "radius", 7.0),
    })
}

fn build_octahedron(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Octahedron {
        radius: dim(p, "radius", 7.0),
    })
}

fn build_icosahedron(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Icosahedron {
        radius: dim(p, "radius", 7.0),
    })
}

fn build_tetrahedron(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Tetrahedron {
        radius: dim(p, "radius", 7.0),
    })
}

fn build_cylinder(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Cylinder {
        radius_top: dim(p, "radiusTop", 7.0),
        radius_bottom: dim(p, "radiusBottom", 7.0),
        height: dim(p, "height", 7.0),
        radial_segments: seg(p, "radialSegments", 32.0),
    })
}

fn build_cone(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Cone {
        radius: dim(p, "radius", 7.0),
        height: dim(p, "height", 14.0),
        radial_segments: seg(p, "radialSegments", 100.0),
    })
}

fn build_torus_knot(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::TorusKnot {
        radius: dim(p, "radius", 6.0),
        tube: dim(p, "tube", 2.0),
        radial_segments: seg(p, "radialSegments", 200.0),
        tubular_segments: seg(p, "tubularSegments", 50.0),
    })
}

// A pyramid is a 4-sided cone stood on its face.
fn build_pyramid(p: &ParamState) -> GeometrySpec {
    GeometrySpec::rotated_x(
        GeometryKind::Cone {
            radius: dim(p, "radius", 7.0),
            height: dim(p, "height", 14.0),
            radial_segments: seg(p, "radialSegments", 4.0),
        },
        FRAC_PI_2,
    )
}

fn build_ring(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Ring {
        inner_radius: dim(p, "innerRadius", 5.0),
        outer_radius: dim(p, "outerRadius", 10.0),
        theta_segments: seg(p, "thetaSegments", 32.0),
    })
}

fn build_tube(p: &ParamState) -> GeometrySpec {
    GeometrySpec::new(GeometryKind::Tube {
        radius: dim(p, "radius", 5.0),
        radial_segments: seg(p, "radialSegments", 8.0),
        tubular_segments: seg(p, "tubularSegments", 64.0),
    })
}

static REGISTRY: [ShapeDefinition; 13] = [
    // Basic shapes
    ShapeDefinition {
        id: "torus",
        parameters: &["radius", "tube", "radialSegments", "tubularSegments"],
        defaults: &[7.0, 3.5, 100.0, 100.0],
        build: build_torus,
    },
    ShapeDefinition {
        id: "cube",
        parameters: &["width", "height", "depth"],
        defaults: &[9.0, 9.0, 9.0],
        build: build_cube,
    },
    ShapeDefinition {
        id: "sphere",
        parameters: &["radius", "widthSegments", "heightSegments"],
        defaults: &[7.0, 50.0, 50.0],
        build: build_sphere,
    },
    // Polyhedra
    ShapeDefinition {
        id: "dodecahedron",
        parameters: &["radius"],
        defaults: &[7.0],
        build: build_dodecahedron,
    },
    ShapeDefinition {
        id: "octahedron",
        parameters: &["radius"],
        defaults: &[7.0],
        build: build_octahedron,
    },
    ShapeDefinition {
        id: "icosahedron",
        parameters: &["radius"],
        defaults: &[7.0],
        build: build_icosahedron,
    },
    ShapeDefinition {
        id: "tetrahedron",
        parameters: &["radius"],
        defaults: &[7.0],
        build: build_tetrahedron,
    },
    // Cylindrical shapes
    ShapeDefinition {
        id: "cylinder",
        parameters: &["radiusTop", "radiusBottom", "height", "radialSegments"],
        defaults: &[7.0, 7.0, 7.0, 32.0],
        build: build_cylinder,
    },
    ShapeDefinition {
        id: "cone",
        parameters: &["radius", "height", "radialSegments"],
        defaults: &[7.0, 14.0, 100.0],
        build: build_cone,
    },
    // Advanced shapes
    ShapeDefinition {
        id: "torusKnot",
        parameters: &["radius", "tube", "radialSegments", "tubularSegments"],
        defaults: &[6.0, 2.0, 200.0, 50.0],
        build: build_torus_knot,
    },
    ShapeDefinition {
        id: "pyramid",
        parameters: &["radius", "height", "radialSegments"],
        defaults: &[7.0, 14.0, 4.0],
        build: build_pyramid,
    },
    ShapeDefinition {
        id: "ring",
        parameters: &["innerRadius", "outerRadius", "thetaSegments"],
        defaults: &[5.0, 10.0, 32.0],
        build: build_ring,
    },
    ShapeDefinition {
        id: "tube",
        parameters: &["radius", "radialSegments", "tubularSegments"],
        defaults: &[5.0, 8.0, 64.0],
        build: build_tube,
    },
];

/// Look up a shape definition by id.
pub fn lookup(id: &str) -> Result<&'static ShapeDefinition, UnknownShape> {
    REGISTRY
        .iter()
        .find(|shape| shape.id == id)
        .ok_or_else(|| UnknownShape(id.to_string()))
}

/// Registered shape ids in selector order.
pub fn list_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|shape| shape.id)
}

/// All registry entries, in selector order.
pub fn definitions() -> &'static [ShapeDefinition] {
    &REGISTRY
}

/// The startup shape (first registry entry).
pub fn default_shape() -> &'static ShapeDefinition {
    &REGISTRY[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("torus").map(|s| s.id), Ok("torus"));
        assert_eq!(
            lookup("klein-bottle").map(|s| s.id),
            Err(UnknownShape("klein-bottle".to_string()))
        );
    }

    #[test]
    fn test_default_shape_is_torus() {
        assert_eq!(default_shape().id, "torus");
        assert_eq!(list_ids().next(), Some("torus"));
    }

    #[test]
    fn test_default_of() {
        let torus = lookup("torus").unwrap();
        assert_eq!(torus.default_of("tube"), Some(3.5));
        assert_eq!(torus.default_of("width"), None);
    }

    #[test]
    fn test_builders_substitute_defaults_for_missing_params() {
        // An empty state resolves every argument from the default table
        let empty = ParamState::from_defaults(&[], &[]);
        let spec = lookup("sphere").unwrap().build_geometry(&empty);
        assert_eq!(
            spec.kind,
            GeometryKind::Sphere {
                radius: 7.0,
                width_segments: 50,
                height_segments: 50,
            }
        );
    }

    #[test]
    fn test_builders_substitute_defaults_for_non_finite_params() {
        let torus = lookup("torus").unwrap();
        let mut params = torus.default_params();
        params.set("radius", f32::NAN);
        params.set("tube", f32::INFINITY);
        let spec = torus.build_geometry(&params);
        assert_eq!(
            spec.kind,
            GeometryKind::Torus {
                radius: 7.0,
                tube: 3.5,
                radial_segments: 100,
                tubular_segments: 100,
            }
        );
    }
}
