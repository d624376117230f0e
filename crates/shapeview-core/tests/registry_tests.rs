use std::f32::consts::FRAC_PI_2;

use shapeview_core::shapes::geometry::GeometryKind;
use shapeview_core::shapes::registry::{definitions, list_ids, lookup, UnknownShape};

#[test]
fn test_registry_contents_and_order() {
    let ids: Vec<_> = list_ids().collect();
    assert_eq!(
        ids,
        [
            "torus",
            "cube",
            "sphere",
            "dodecahedron",
            "octahedron",
            "icosahedron",
            "tetrahedron",
            "cylinder",
            "cone",
            "torusKnot",
            "pyramid",
            "ring",
            "tube",
        ]
    );
}

#[test]
fn test_every_id_looks_up_to_itself() {
    for id in list_ids() {
        let shape = lookup(id).unwrap_or_else(|e| panic!("{} should be registered: {}", id, e));
        assert_eq!(shape.id, id);
    }
}

#[test]
fn test_unknown_id_fails() {
    let err = lookup("mobius").unwrap_err();
    assert_eq!(err, UnknownShape("mobius".to_string()));
    assert_eq!(err.to_string(), "unknown shape id `mobius`");
}

#[test]
fn test_parameter_and_default_lists_pair() {
    for shape in definitions() {
        assert_eq!(
            shape.parameters.len(),
            shape.defaults.len(),
            "shape '{}' parameter/default lists must pair positionally",
            shape.id
        );
        assert!(
            !shape.parameters.is_empty(),
            "shape '{}' must expose at least one parameter",
            shape.id
        );
        for (i, name) in shape.parameters.iter().enumerate() {
            assert_eq!(
                shape.default_of(name),
                Some(shape.defaults[i]),
                "shape '{}' default_of('{}') must match the default table",
                shape.id,
                name
            );
        }
        // No duplicate parameter names
        for (i, a) in shape.parameters.iter().enumerate() {
            for b in &shape.parameters[i + 1..] {
                assert_ne!(a, b, "shape '{}' has duplicate parameter '{}'", shape.id, a);
            }
        }
    }
}

#[test]
fn test_default_params_hold_every_default() {
    for shape in definitions() {
        let params = shape.default_params();
        assert_eq!(params.len(), shape.parameters.len());
        for (name, default) in shape.parameters.iter().zip(shape.defaults) {
            assert_eq!(
                params.get(name),
                Some(*default),
                "shape '{}' param '{}'",
                shape.id,
                name
            );
        }
    }
}

#[test]
fn test_polyhedra_expose_only_radius() {
    for id in ["dodecahedron", "octahedron", "icosahedron", "tetrahedron"] {
        let shape = lookup(id).unwrap();
        assert_eq!(shape.parameters, ["radius"], "{}", id);
        assert_eq!(shape.defaults, [7.0], "{}", id);
    }
}

#[test]
fn test_multi_parameter_shapes_expose_three_or_four() {
    for shape in definitions() {
        if shape.parameters.len() != 1 {
            assert!(
                (3..=4).contains(&shape.parameters.len()),
                "shape '{}' exposes {} parameters",
                shape.id,
                shape.parameters.len()
            );
        }
    }
}

#[test]
fn test_torus_default_geometry() {
    let torus = lookup("torus").unwrap();
    let spec = torus.build_geometry(&torus.default_params());
    assert_eq!(spec.rotate_x, 0.0);
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

#[test]
fn test_pyramid_is_a_cone_rotated_about_x() {
    let pyramid = lookup("pyramid").unwrap();
    assert_eq!(pyramid.parameters, ["radius", "height", "radialSegments"]);
    assert_eq!(pyramid.defaults, [7.0, 14.0, 4.0]);

    let spec = pyramid.build_geometry(&pyramid.default_params());
    assert_eq!(
        spec.kind,
        GeometryKind::Cone {
            radius: 7.0,
            height: 14.0,
            radial_segments: 4,
        }
    );
    assert_eq!(spec.rotate_x, FRAC_PI_2);

    // The equivalent cone is not pre-rotated
    let cone = lookup("cone").unwrap();
    let cone_spec = cone.build_geometry(&cone.default_params());
    assert_eq!(cone_spec.rotate_x, 0.0);
}

#[test]
fn test_tube_spans_its_radius_on_x() {
    let tube = lookup("tube").unwrap();
    let spec = tube.build_geometry(&tube.default_params());
    assert_eq!(
        spec.kind,
        GeometryKind::Tube {
            radius: 5.0,
            radial_segments: 8,
            tubular_segments: 64,
        }
    );
}

#[test]
fn test_builders_ignore_other_shapes_parameters() {
    // A cube state carries no 'radius'; the sphere builder must fall back
    // to its own defaults rather than fail
    let cube = lookup("cube").unwrap();
    let sphere = lookup("sphere").unwrap();
    let spec = sphere.build_geometry(&cube.default_params());
    assert_eq!(
        spec.kind,
        GeometryKind::Sphere {
            radius: 7.0,
            width_segments: 50,
            height_segments: 50,
        }
    );
}
