//! The interaction state machine.
//!
//! [`ViewState`] is the single owner of everything the host UI mutates:
//! selected shape, parameter values, style, color mode, and the renderable
//! description currently in the scene. Every transition that replaces the
//! renderable bumps a generation counter; the host destroys and recreates
//! its scene-graph object exactly when the counter changes, which also
//! serves as the staleness token for the deferred matcap texture load. The
//! rainbow recolor in [`ViewState::tick`] deliberately leaves the counter
//! alone and mutates the existing material in place.

use glam::Vec2;

use crate::color::{rainbow, Color, ColorMode};
use crate::params::ParamState;
use crate::shapes::geometry::GeometrySpec;
use crate::shapes::registry::{self, ShapeDefinition, UnknownShape};
use crate::style::{build_renderable, RenderableSpec, StyleMode};

/// Idle rotation advance per frame, radians on each axis.
pub const ROTATION_STEP: f32 = 0.01;
/// Rainbow hue cycle advance per frame, wrapping at 1.0.
pub const CYCLE_STEP: f64 = 0.001;

pub struct ViewState {
    shape: &'static ShapeDefinition,
    params: ParamState,
    style: StyleMode,
    color_mode: ColorMode,
    renderable: RenderableSpec,
    rotation: Vec2,
    cycle: f64,
    interacting: bool,
    generation: u64,
    camera_resets: u64,
}

impl ViewState {
    /// Startup state: the default shape with default parameters, solid
    /// style, rainbow color.
    pub fn new() -> Self {
        let shape = registry::default_shape();
        let params = shape.default_params();
        let style = StyleMode::Solid;
        let color_mode = ColorMode::Rainbow;
        let cycle = 0.0;
        let renderable = build_renderable(
            shape.build_geometry(&params),
            style,
            resolve_color(color_mode, cycle),
        );
        Self {
            shape,
            params,
            style,
            color_mode,
            renderable,
            rotation: Vec2::ZERO,
            cycle,
            interacting: false,
            generation: 0,
            camera_resets: 0,
        }
    }

    /// Switch to another registered shape: parameters reset to the new
    /// shape's defaults, style and color mode are kept, and the host is
    /// asked to reset the camera. Fails on an unknown id without touching
    /// any state.
    pub fn select_shape(&mut self, id: &str) -> Result<(), UnknownShape> {
        let shape = registry::lookup(id)?;
        self.shape = shape;
        self.params = shape.default_params();
        self.camera_resets += 1;
        self.rebuild();
        Ok(())
    }

    /// Set one parameter from raw host input. Unknown names for the current
    /// shape are ignored; unparsable or non-finite values fall back to that
    /// parameter's default, never to an error or a stale value.
    pub fn set_parameter(&mut self, name: &str, raw: &str) {
        let Some(default) = self.shape.default_of(name) else {
            return;
        };
        let value = raw
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(default);
        self.params.set(name, value);
        self.rebuild();
    }

    /// Change the rendering style. The existing geometry spec is reused;
    /// only the renderable is re-resolved.
    pub fn set_style(&mut self, style: StyleMode) {
        self.style = style;
        self.rebuild_with_geometry(self.renderable.geometry);
    }

    /// Switch between rainbow cycling and a fixed color.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
        self.rebuild_with_geometry(self.renderable.geometry);
    }

    /// Advance one animation frame: idle rotation while the user is not
    /// dragging, and the rainbow recolor when cycling. The recolor mutates
    /// the existing renderable in place and never bumps the generation.
    pub fn tick(&mut self) {
        if !self.interacting {
            self.rotation += Vec2::splat(ROTATION_STEP);
        }
        if self.color_mode == ColorMode::Rainbow {
            self.cycle += CYCLE_STEP;
            if self.cycle >= 1.0 {
                self.cycle = 0.0;
            }
            if self.renderable.material.color.is_some() {
                self.renderable.material.color = Some(rainbow(self.cycle as f32));
            }
        }
    }

    /// Pointer down: freeze the idle rotation while the user drags.
    pub fn begin_interaction(&mut self) {
        self.interacting = true;
    }

    /// Pointer up: resume the idle rotation.
    pub fn end_interaction(&mut self) {
        self.interacting = false;
    }

    pub fn shape(&self) -> &'static ShapeDefinition {
        self.shape
    }

    pub fn shape_id(&self) -> &'static str {
        self.shape.id
    }

    pub fn params(&self) -> &ParamState {
        &self.params
    }

    pub fn style(&self) -> StyleMode {
        self.style
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn renderable(&self) -> &RenderableSpec {
        &self.renderable
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn cycle(&self) -> f64 {
        self.cycle
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Bumped on every destructive rebuild of the renderable.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumped whenever the host should restore the camera's home framing.
    pub fn camera_resets(&self) -> u64 {
        self.camera_resets
    }

    /// Color the host should draw with this frame (the rainbow hue when
    /// cycling, the fixed color otherwise).
    pub fn current_color(&self) -> Color {
        resolve_color(self.color_mode, self.cycle)
    }

    fn rebuild(&mut self) {
        self.rebuild_with_geometry(self.shape.build_geometry(&self.params));
    }

    fn rebuild_with_geometry(&mut self, geometry: GeometrySpec) {
        self.renderable = build_renderable(
            geometry,
            self.style,
            resolve_color(self.color_mode, self.cycle),
        );
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_color(mode: ColorMode, cycle: f64) -> Color {
    match mode {
        ColorMode::Rainbow => rainbow(cycle as f32),
        ColorMode::Fixed(color) => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color(ColorMode::Fixed(Color::GREEN), 0.5), Color::GREEN);
        assert_eq!(resolve_color(ColorMode::Rainbow, 0.0), Color::RED);
    }

    #[test]
    fn test_startup_state() {
        let view = ViewState::new();
        assert_eq!(view.shape_id(), "torus");
        assert_eq!(view.style(), StyleMode::Solid);
        assert_eq!(view.color_mode(), ColorMode::Rainbow);
        assert_eq!(view.rotation(), Vec2::ZERO);
        assert_eq!(view.cycle(), 0.0);
        assert!(!view.is_interacting());
    }
}
