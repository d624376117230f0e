//! Style resolution: a style id plus a color becomes a renderable
//! description the host maps onto the engine's mesh/points/line
//! constructors and materials.

use crate::color::Color;
use crate::shapes::geometry::GeometrySpec;

/// Point size for the points style.
const POINT_SIZE: f32 = 0.5;
/// Standard-material reflectivity for the lit solid/wireframe styles.
const STANDARD_METALNESS: f32 = 0.8;
const STANDARD_ROUGHNESS: f32 = 0.4;

/// Matcap capture texture the host loads asynchronously. A completion whose
/// captured rebuild generation no longer matches the viewer's must be
/// dropped, and a failed load renders the unlit flat-color material
/// instead.
pub const MATCAP_TEXTURE: &str = "assets/matcap.png";

/// Rendering style selected by the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMode {
    Solid,
    Wireframe,
    Basic,
    Points,
    Line,
    Matcap,
    Normal,
    Mirror,
}

impl StyleMode {
    /// Parse a host style-selector value. Unknown tokens resolve to
    /// `Solid`, the selector's default entry, never an error.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "wireframe" => StyleMode::Wireframe,
            "basic" => StyleMode::Basic,
            "points" => StyleMode::Points,
            "line" => StyleMode::Line,
            "matcap" => StyleMode::Matcap,
            "normal" => StyleMode::Normal,
            "mirror" => StyleMode::Mirror,
            _ => StyleMode::Solid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleMode::Solid => "solid",
            StyleMode::Wireframe => "wireframe",
            StyleMode::Basic => "basic",
            StyleMode::Points => "points",
            StyleMode::Line => "line",
            StyleMode::Matcap => "matcap",
            StyleMode::Normal => "normal",
            StyleMode::Mirror => "mirror",
        }
    }
}

/// Scene-graph node kind for the renderable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderKind {
    Mesh,
    /// Point cloud with a fixed point size.
    Points { size: f32 },
    /// Line segments derived from the geometry's edges.
    EdgeLines,
}

/// Shading model plus its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Unlit flat color.
    Flat,
    /// Lit standard (metalness/roughness) shading.
    Standard { metalness: f32, roughness: f32 },
    /// Color derived from the surface normal.
    Normal,
    /// Precomputed lighting capture texture ([`MATCAP_TEXTURE`]).
    Matcap,
}

/// Material portion of a renderable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialSpec {
    pub shading: Shading,
    /// Tint color. `None` for the normal style, whose material carries no
    /// color at all.
    pub color: Option<Color>,
    pub wireframe: bool,
    pub cast_shadow: bool,
}

/// The scene-graph node drawn every frame: geometry plus material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderableSpec {
    pub kind: RenderKind,
    pub geometry: GeometrySpec,
    pub material: MaterialSpec,
}

/// Resolve `style` and `color` against `geometry`. Pure; allocating the
/// described object (and releasing the previous one) is the host's job.
pub fn build_renderable(geometry: GeometrySpec, style: StyleMode, color: Color) -> RenderableSpec {
    let flat = |color| MaterialSpec {
        shading: Shading::Flat,
        color: Some(color),
        wireframe: false,
        cast_shadow: false,
    };
    let standard = |metalness, roughness, wireframe| MaterialSpec {
        shading: Shading::Standard {
            metalness,
            roughness,
        },
        color: Some(color),
        wireframe,
        cast_shadow: wireframe || style == StyleMode::Solid,
    };

    let (kind, material) = match style {
        StyleMode::Points => (RenderKind::Points { size: POINT_SIZE }, flat(color)),
        StyleMode::Line => (RenderKind::EdgeLines, flat(color)),
        StyleMode::Basic => (RenderKind::Mesh, flat(color)),
        StyleMode::Matcap => (
            RenderKind::Mesh,
            MaterialSpec {
                shading: Shading::Matcap,
                color: Some(color),
                wireframe: false,
                cast_shadow: false,
            },
        ),
        StyleMode::Normal => (
            RenderKind::Mesh,
            MaterialSpec {
                shading: Shading::Normal,
                color: None,
                wireframe: false,
                cast_shadow: false,
            },
        ),
        StyleMode::Mirror => (RenderKind::Mesh, standard(1.0, 0.0, false)),
        StyleMode::Wireframe => (
            RenderKind::Mesh,
            standard(STANDARD_METALNESS, STANDARD_ROUGHNESS, true),
        ),
        StyleMode::Solid => (
            RenderKind::Mesh,
            standard(STANDARD_METALNESS, STANDARD_ROUGHNESS, false),
        ),
    };

    RenderableSpec {
        kind,
        geometry,
        material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::geometry::GeometryKind;

    fn geometry() -> GeometrySpec {
        GeometrySpec::new(GeometryKind::Octahedron { radius: 7.0 })
    }

    #[test]
    fn test_parse_all_styles_round_trip() {
        for style in [
            StyleMode::Solid,
            StyleMode::Wireframe,
            StyleMode::Basic,
            StyleMode::Points,
            StyleMode::Line,
            StyleMode::Matcap,
            StyleMode::Normal,
            StyleMode::Mirror,
        ] {
            assert_eq!(StyleMode::parse(style.as_str()), style);
        }
    }

    #[test]
    fn test_parse_unknown_style_falls_back_to_solid() {
        assert_eq!(StyleMode::parse("celshaded"), StyleMode::Solid);
        assert_eq!(StyleMode::parse(""), StyleMode::Solid);
    }

    #[test]
    fn test_points_style() {
        let r = build_renderable(geometry(), StyleMode::Points, Color::RED);
        assert_eq!(r.kind, RenderKind::Points { size: 0.5 });
        assert_eq!(r.material.shading, Shading::Flat);
        assert_eq!(r.material.color, Some(Color::RED));
        assert!(!r.material.cast_shadow);
    }

    #[test]
    fn test_line_style_uses_edge_segments() {
        let r = build_renderable(geometry(), StyleMode::Line, Color::RED);
        assert_eq!(r.kind, RenderKind::EdgeLines);
        assert_eq!(r.material.shading, Shading::Flat);
    }

    #[test]
    fn test_normal_style_ignores_color() {
        let r = build_renderable(geometry(), StyleMode::Normal, Color::RED);
        assert_eq!(r.material.shading, Shading::Normal);
        assert_eq!(r.material.color, None);
    }

    #[test]
    fn test_matcap_style_is_tinted() {
        let r = build_renderable(geometry(), StyleMode::Matcap, Color::GREEN);
        assert_eq!(r.material.shading, Shading::Matcap);
        assert_eq!(r.material.color, Some(Color::GREEN));
    }

    #[test]
    fn test_mirror_style_max_reflectivity() {
        let r = build_renderable(geometry(), StyleMode::Mirror, Color::WHITE);
        assert_eq!(
            r.material.shading,
            Shading::Standard {
                metalness: 1.0,
                roughness: 0.0,
            }
        );
        assert!(!r.material.wireframe);
    }

    #[test]
    fn test_solid_and_wireframe_share_lit_shading() {
        let solid = build_renderable(geometry(), StyleMode::Solid, Color::RED);
        let wire = build_renderable(geometry(), StyleMode::Wireframe, Color::RED);
        assert_eq!(solid.material.shading, wire.material.shading);
        assert!(!solid.material.wireframe);
        assert!(wire.material.wireframe);
        assert!(solid.material.cast_shadow);
        assert!(wire.material.cast_shadow);
    }
}
