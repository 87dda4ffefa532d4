use crate::Random;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Agent {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Agent {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy }
    }

    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }

    pub fn distance_squared(&self, other: &Agent) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Logical extent of the area the agents live in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AgentField {
    agents: Vec<Agent>,
}

impl AgentField {
    /// Seed `count` agents uniformly over `bounds`, each velocity component
    /// uniform in `[-speed, speed]`.
    pub fn create(count: usize, bounds: Bounds, speed: f32, rand: &mut Random) -> Self {
        let agents = (0..count)
            .map(|_| Self::random_agent(bounds, speed, rand))
            .collect();
        Self { agents }
    }

    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    fn random_agent(bounds: Bounds, speed: f32, rand: &mut Random) -> Agent {
        Agent::new(
            rand.next_in_extent(bounds.width),
            rand.next_in_extent(bounds.height),
            rand.next_symmetric(speed),
            rand.next_symmetric(speed),
        )
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Agent> + Clone {
        self.agents.iter()
    }
}

impl Index<usize> for AgentField {
    type Output = Agent;

    fn index(&self, index: usize) -> &Self::Output {
        &self.agents[index]
    }
}

impl IndexMut<usize> for AgentField {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.agents[index]
    }
}
