use crate::{Agent, AgentField, Bounds, Canvas, Point, Rect, Rgba, Segment};
use rayon::prelude::*;

pub const BACKGROUND_COLOR: Rgba = Rgba::rgb(0x0f, 0x0f, 0x12);
pub const GRID_COLOR: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
pub const LINK_COLOR: Rgba = Rgba::rgb(0xe6, 0xe6, 0xe6);
pub const AGENT_COLOR: Rgba = Rgba::rgb(0xe6, 0xe6, 0xe6);

/// Fields at least this large search for links on the rayon pool.
pub const PARALLEL_LINK_THRESHOLD: usize = 512;

pub fn clear(canvas: &mut impl Canvas, bounds: Bounds) {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, bounds.width, bounds.height),
        BACKGROUND_COLOR,
    );
}

/// Lines at every multiple of `gap` across the bounds, in one stroke call.
/// A non-positive gap draws nothing.
pub fn draw_grid(canvas: &mut impl Canvas, bounds: Bounds, gap: f32, alpha: f32) {
    if !is_positive(gap) {
        return;
    }

    let verticals = multiples(gap, bounds.width)
        .map(|x| Segment::new(Point::new(x, 0.0), Point::new(x, bounds.height)));
    let horizontals = multiples(gap, bounds.height)
        .map(|y| Segment::new(Point::new(0.0, y), Point::new(bounds.width, y)));
    let segments: Vec<Segment> = verticals.chain(horizontals).collect();

    canvas.stroke_path(&segments, GRID_COLOR.with_alpha(alpha));
}

fn multiples(step: f32, limit: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * step)
        .take_while(move |value| *value <= limit)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    pub dist: f32,
    pub alpha_near: f32,
    pub alpha_far: f32,
}

impl LinkStyle {
    pub fn new(dist: f32, alpha_near: f32, alpha_far: f32) -> Self {
        Self {
            dist,
            alpha_near,
            alpha_far,
        }
    }

    /// Opacity interpolated linearly from `alpha_near` at 0 to `alpha_far`
    /// at `dist`.
    pub fn alpha_at(&self, distance: f32) -> f32 {
        let t = distance / self.dist;
        self.alpha_near + (self.alpha_far - self.alpha_near) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub segment: Segment,
    pub alpha: f32,
}

/// Every unordered pair of agents within `style.dist` (inclusive), ordered
/// by first index then second.
pub fn find_links(field: &AgentField, style: LinkStyle) -> Vec<Link> {
    if !is_positive(style.dist) {
        return vec![];
    }

    let agents = field.agents();
    if agents.len() >= PARALLEL_LINK_THRESHOLD {
        (0..agents.len())
            .into_par_iter()
            .flat_map_iter(|i| links_from(agents, i, style))
            .collect()
    } else {
        (0..agents.len())
            .flat_map(|i| links_from(agents, i, style))
            .collect()
    }
}

fn links_from(agents: &[Agent], from: usize, style: LinkStyle) -> impl Iterator<Item = Link> + '_ {
    let a = agents[from];
    let cutoff_squared = style.dist * style.dist;
    agents[from + 1..]
        .iter()
        .enumerate()
        .filter_map(move |(offset, b)| {
            let distance_squared = a.distance_squared(b);
            (distance_squared <= cutoff_squared).then(|| Link {
                from,
                to: from + 1 + offset,
                segment: Segment::new(Point::new(a.x, a.y), Point::new(b.x, b.y)),
                alpha: style.alpha_at(distance_squared.sqrt()),
            })
        })
}

/// Returns the number of links drawn.
pub fn draw_links(canvas: &mut impl Canvas, field: &AgentField, style: LinkStyle) -> usize {
    let links = find_links(field, style);
    for link in &links {
        canvas.stroke_path(&[link.segment], LINK_COLOR.with_alpha(link.alpha));
    }
    links.len()
}

pub fn draw_agents(canvas: &mut impl Canvas, field: &AgentField, size: f32) {
    for agent in field.iter() {
        let rect = Rect::new(
            round_half_up(agent.x) - 1.0,
            round_half_up(agent.y) - 1.0,
            size,
            size,
        );
        canvas.fill_rect(rect, AGENT_COLOR);
    }
}

fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

fn is_positive(value: f32) -> bool {
    value > 0.0
}
