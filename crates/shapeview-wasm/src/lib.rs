use shapeview_core::color::ColorMode;
use shapeview_core::scene::SceneConfig;
use shapeview_core::shapes::geometry::{GeometryKind, GeometrySpec};
use shapeview_core::shapes::registry;
use shapeview_core::style::{RenderKind, Shading, StyleMode, MATCAP_TEXTURE};
use shapeview_core::view::ViewState;
use wasm_bindgen::prelude::*;

/// Per-frame state mirror: 32 bytes, read by the JS host as one
/// Float32Array/Uint32Array view over wasm memory after each `tick`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameState {
    rotation: [f32; 2],  //  8 bytes
    color: [f32; 3],     // 12 bytes
    generation: u32,     //  4 bytes
    camera_resets: u32,  //  4 bytes
    flags: u32,          //  4 bytes: bit0 = rainbow, bit1 = interacting
}

/// One rect-area light row: 48 bytes, matches the host's light constructor.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuLight {
    color: [f32; 3],
    intensity: f32,
    position: [f32; 3],
    rotation_y: f32,
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Geometry constructor ids for `geometry_kind`, mirrored in the host glue.
fn geometry_desc(spec: GeometrySpec) -> (u32, Vec<f32>) {
    match spec.kind {
        GeometryKind::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => (
            0,
            vec![
                radius,
                tube,
                radial_segments as f32,
                tubular_segments as f32,
            ],
        ),
        GeometryKind::Box {
            width,
            height,
            depth,
        } => (1, vec![width, height, depth]),
        GeometryKind::Sphere {
            radius,
            width_segments,
            height_segments,
        } => (
            2,
            vec![radius, width_segments as f32, height_segments as f32],
        ),
        GeometryKind::Dodecahedron { radius } => (3, vec![radius]),
        GeometryKind::Octahedron { radius } => (4, vec![radius]),
        GeometryKind::Icosahedron { radius } => (5, vec![radius]),
        GeometryKind::Tetrahedron { radius } => (6, vec![radius]),
        GeometryKind::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => (
            7,
            vec![radius_top, radius_bottom, height, radial_segments as f32],
        ),
        GeometryKind::Cone {
            radius,
            height,
            radial_segments,
        } => (8, vec![radius, height, radial_segments as f32]),
        GeometryKind::TorusKnot {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => (
            9,
            vec![
                radius,
                tube,
                radial_segments as f32,
                tubular_segments as f32,
            ],
        ),
        GeometryKind::Ring {
            inner_radius,
            outer_radius,
            theta_segments,
        } => (10, vec![inner_radius, outer_radius, theta_segments as f32]),
        GeometryKind::Tube {
            radius,
            radial_segments,
            tubular_segments,
        } => (
            11,
            vec![radius, radial_segments as f32, tubular_segments as f32],
        ),
    }
}

#[wasm_bindgen]
pub struct Viewer {
    view: ViewState,
    scene: SceneConfig,
    frame: FrameState,
    lights: Vec<GpuLight>,
}

#[wasm_bindgen]
impl Viewer {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Viewer {
        let view = ViewState::new();
        web_sys::console::log_1(
            &format!("shapeview Viewer created: shape `{}`", view.shape_id()).into(),
        );

        let scene = SceneConfig::default();
        let lights = scene
            .lights
            .iter()
            .map(|light| GpuLight {
                color: [light.color.r, light.color.g, light.color.b],
                intensity: light.intensity,
                position: light.position.to_array(),
                rotation_y: light.rotation_y,
                size: [light.width, light.height],
                _pad: [0.0; 2],
            })
            .collect();

        let mut viewer = Viewer {
            view,
            scene,
            frame: bytemuck::Zeroable::zeroed(),
            lights,
        };
        viewer.write_frame_state();
        viewer
    }

    /// Advance one animation frame. Call before drawing; returns elapsed
    /// time in milliseconds.
    pub fn tick(&mut self) -> f32 {
        let start = js_sys::Date::now();
        self.view.tick();
        self.write_frame_state();
        (js_sys::Date::now() - start) as f32
    }

    /// Switch shape. Rejects an unknown id so the host can surface an
    /// invalid selector value; state is untouched on failure.
    pub fn select_shape(&mut self, id: &str) -> Result<(), JsError> {
        self.view
            .select_shape(id)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.write_frame_state();
        Ok(())
    }

    /// Set a parameter from the raw text-input value. Garbage falls back
    /// to the shape's default; unknown names are ignored.
    pub fn set_parameter(&mut self, name: &str, raw: &str) {
        self.view.set_parameter(name, raw);
        self.write_frame_state();
    }

    /// Set the rendering style from the style-selector value.
    pub fn set_style(&mut self, style: &str) {
        self.view.set_style(StyleMode::parse(style));
        self.write_frame_state();
    }

    /// Set the color mode from the color-selector value (`"rainbow"` or a
    /// hex color).
    pub fn set_color(&mut self, value: &str) {
        self.view.set_color_mode(ColorMode::parse(value));
        self.write_frame_state();
    }

    /// Pointer down anywhere in the viewport: freezes the idle rotation.
    pub fn pointer_down(&mut self) {
        self.view.begin_interaction();
        self.write_frame_state();
    }

    pub fn pointer_up(&mut self) {
        self.view.end_interaction();
        self.write_frame_state();
    }

    // ---------- selector population ----------

    /// Registered shape ids, in selector order.
    pub fn shape_ids(&self) -> Vec<String> {
        registry::list_ids().map(String::from).collect()
    }

    pub fn shape_id(&self) -> String {
        self.view.shape_id().to_string()
    }

    /// Parameter names of the current shape, in UI order.
    pub fn parameter_names(&self) -> Vec<String> {
        self.view
            .shape()
            .parameters
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Current value of a parameter, `NaN` when the current shape has no
    /// such parameter.
    pub fn parameter_value(&self, name: &str) -> f32 {
        self.view.params().get(name).unwrap_or(f32::NAN)
    }

    pub fn style(&self) -> String {
        self.view.style().as_str().to_string()
    }

    // ---------- rebuild-time renderable description ----------

    /// Geometry constructor id (see the host glue's constructor table).
    pub fn geometry_kind(&self) -> u32 {
        geometry_desc(self.view.renderable().geometry).0
    }

    /// Arguments for the geometry constructor, in declaration order.
    pub fn geometry_args(&self) -> Vec<f32> {
        geometry_desc(self.view.renderable().geometry).1
    }

    /// Pre-rotation about X (radians) applied right after construction.
    pub fn geometry_rotate_x(&self) -> f32 {
        self.view.renderable().geometry.rotate_x
    }

    /// Scene-graph node kind: 0 mesh, 1 point cloud, 2 edge lines.
    pub fn render_kind(&self) -> u32 {
        match self.view.renderable().kind {
            RenderKind::Mesh => 0,
            RenderKind::Points { .. } => 1,
            RenderKind::EdgeLines => 2,
        }
    }

    /// Point size when `render_kind` is a point cloud, 0 otherwise.
    pub fn point_size(&self) -> f32 {
        match self.view.renderable().kind {
            RenderKind::Points { size } => size,
            _ => 0.0,
        }
    }

    /// Shading model: 0 flat, 1 standard, 2 normal, 3 matcap.
    pub fn shading(&self) -> u32 {
        match self.view.renderable().material.shading {
            Shading::Flat => 0,
            Shading::Standard { .. } => 1,
            Shading::Normal => 2,
            Shading::Matcap => 3,
        }
    }

    pub fn metalness(&self) -> f32 {
        match self.view.renderable().material.shading {
            Shading::Standard { metalness, .. } => metalness,
            _ => 0.0,
        }
    }

    pub fn roughness(&self) -> f32 {
        match self.view.renderable().material.shading {
            Shading::Standard { roughness, .. } => roughness,
            _ => 0.0,
        }
    }

    pub fn wireframe(&self) -> bool {
        self.view.renderable().material.wireframe
    }

    pub fn cast_shadow(&self) -> bool {
        self.view.renderable().material.cast_shadow
    }

    /// Whether the material carries a color at all (false for the normal
    /// style).
    pub fn has_color(&self) -> bool {
        self.view.renderable().material.color.is_some()
    }

    /// Asset path of the matcap capture texture. The host loads it
    /// asynchronously and must drop the completion if `generation` has
    /// moved on; on load failure it renders the unlit flat-color material.
    pub fn matcap_texture(&self) -> String {
        MATCAP_TEXTURE.to_string()
    }

    // ---------- per-frame sync buffer ----------

    pub fn frame_state_ptr(&self) -> *const f32 {
        &self.frame as *const FrameState as *const f32
    }

    pub fn frame_state_byte_length(&self) -> usize {
        std::mem::size_of::<FrameState>()
    }

    // ---------- startup scene ----------

    pub fn lights_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }

    pub fn lights_byte_length(&self) -> usize {
        self.lights.len() * std::mem::size_of::<GpuLight>()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Camera defaults: fov, near, far, initial xyz, home xyz.
    pub fn camera_config(&self) -> Vec<f32> {
        let camera = self.scene.camera;
        let mut out = vec![camera.fov_degrees, camera.near, camera.far];
        out.extend(camera.initial_position.to_array());
        out.extend(camera.home_position.to_array());
        out
    }

    pub fn orbit_damping(&self) -> f32 {
        self.scene.orbit.damping
    }

    pub fn orbit_zoom_enabled(&self) -> bool {
        self.scene.orbit.zoom_enabled
    }

    /// Floor defaults: size xyz, rgb, roughness, metalness, position xyz.
    pub fn floor_config(&self) -> Vec<f32> {
        let floor = self.scene.floor;
        let mut out = Vec::with_capacity(11);
        out.extend(floor.size.to_array());
        out.extend([floor.color.r, floor.color.g, floor.color.b]);
        out.push(floor.roughness);
        out.push(floor.metalness);
        out.extend(floor.position.to_array());
        out
    }
}

impl Viewer {
    fn write_frame_state(&mut self) {
        let rotation = self.view.rotation();
        let color = self.view.current_color();
        let mut flags = 0u32;
        if self.view.color_mode() == ColorMode::Rainbow {
            flags |= 1;
        }
        if self.view.is_interacting() {
            flags |= 2;
        }
        self.frame = FrameState {
            rotation: rotation.to_array(),
            color: [color.r, color.g, color.b],
            generation: self.view.generation() as u32,
            camera_resets: self.view.camera_resets() as u32,
            flags,
        };
    }
}
