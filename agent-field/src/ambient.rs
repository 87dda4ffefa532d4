use crate::render::{self, LinkStyle};
use crate::simulation;
use crate::{AgentField, Bounds, Canvas, FieldConfig, Random, Viewport, WindowMetrics};
use log::{debug, info, trace, warn};

/// The ambient background: agents, the viewport they live in, and the canvas
/// they are drawn on. The host drives it with [`update`](Self::update),
/// [`clear`](Self::clear), [`render`](Self::render) and
/// [`on_resize`](Self::on_resize).
#[derive(Debug)]
pub struct AmbientField<C: Canvas> {
    config: FieldConfig,
    canvas: C,
    viewport: Viewport,
    agents: AgentField,
    rand: Random,
}

impl<C: Canvas> AmbientField<C> {
    pub fn new(canvas: C, config: FieldConfig, window: WindowMetrics, rand: Random) -> Self {
        let mut result = Self {
            config,
            canvas,
            viewport: Viewport::from_window(window),
            agents: AgentField::default(),
            rand,
        };
        result.on_resize(window);
        info!(
            "Ambient field ready: {} agents, link distance {}",
            result.config.agent_count, result.config.link_dist
        );
        result
    }

    pub fn update(&mut self) {
        let bounds = self.bounds();
        simulation::step(
            &mut self.agents,
            bounds,
            self.config.speed,
            self.config.jitter,
            &mut self.rand,
        );
    }

    pub fn clear(&mut self) {
        let bounds = self.bounds();
        render::clear(&mut self.canvas, bounds);
    }

    /// Grid, then links, then agents. Does not clear first.
    pub fn render(&mut self) {
        let bounds = self.bounds();
        render::draw_grid(
            &mut self.canvas,
            bounds,
            self.config.grid_gap,
            self.config.grid_alpha,
        );
        let style = self.link_style();
        let links = render::draw_links(&mut self.canvas, &self.agents, style);
        trace!("Drew {} links", links);
        render::draw_agents(&mut self.canvas, &self.agents, self.config.agent_size);
    }

    /// Resize the canvas to the new window and reseed every agent. Prior
    /// agent positions are not carried over.
    pub fn on_resize(&mut self, window: WindowMetrics) {
        self.viewport = Viewport::from_window(window);
        if self.viewport.is_empty() {
            warn!(
                "Viewport has no area ({}x{})",
                self.viewport.logical_width(),
                self.viewport.logical_height()
            );
        }

        let (backing_width, backing_height) = self.viewport.backing_size();
        self.canvas.resize(backing_width, backing_height);
        self.canvas.set_transform(self.viewport.pixel_ratio() as f32);
        debug!("Backing store {}x{}", backing_width, backing_height);

        self.agents = AgentField::create(
            self.config.agent_count,
            self.bounds(),
            self.config.speed,
            &mut self.rand,
        );
        info!(
            "Reseeded {} agents for {}x{} at pixel ratio {}",
            self.agents.len(),
            self.viewport.logical_width(),
            self.viewport.logical_height(),
            self.viewport.pixel_ratio()
        );
    }

    /// Logical viewport size.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.viewport.logical_width(), self.viewport.logical_height())
    }

    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn agents(&self) -> &AgentField {
        &self.agents
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// For sibling layers that draw into the same coordinate space.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    fn link_style(&self) -> LinkStyle {
        LinkStyle::new(
            self.config.link_dist,
            self.config.link_alpha_near,
            self.config.link_alpha_far,
        )
    }
}
