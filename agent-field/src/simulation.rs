use crate::{Agent, AgentField, Bounds, Random};

/// How far past an edge an agent may drift before it reappears at the
/// opposite edge.
pub const WRAP_MARGIN: f32 = 2.0;

const JITTER_SCALE: f32 = 0.02;
const MIN_SPEED: f32 = 1e-6;

/// Advance every agent by one tick: jitter, clamp to `speed`, integrate, wrap.
pub fn step(field: &mut AgentField, bounds: Bounds, speed: f32, jitter: f32, rand: &mut Random) {
    for agent in field.agents_mut() {
        step_agent(agent, bounds, speed, jitter, rand);
    }
}

fn step_agent(agent: &mut Agent, bounds: Bounds, speed: f32, jitter: f32, rand: &mut Random) {
    agent.vx += rand.next_symmetric(jitter) * JITTER_SCALE;
    agent.vy += rand.next_symmetric(jitter) * JITTER_SCALE;
    clamp_velocity(agent, speed);

    agent.x += agent.vx;
    agent.y += agent.vy;
    agent.x = wrap(agent.x, bounds.width);
    agent.y = wrap(agent.y, bounds.height);
}

fn clamp_velocity(agent: &mut Agent, max_speed: f32) {
    let mut speed = agent.speed();
    if speed == 0.0 {
        speed = MIN_SPEED;
    }
    if speed > max_speed {
        agent.vx = agent.vx / speed * max_speed;
        agent.vy = agent.vy / speed * max_speed;
    }
}

fn wrap(position: f32, extent: f32) -> f32 {
    let mut result = position;
    if result < -WRAP_MARGIN {
        result = extent + WRAP_MARGIN;
    }
    if result > extent + WRAP_MARGIN {
        result = -WRAP_MARGIN;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 300.0,
        height: 200.0,
    };

    fn single(agent: Agent) -> AgentField {
        AgentField::from_agents(vec![agent])
    }

    #[test]
    fn speed_never_exceeds_cap() {
        let mut rand = Random::from_seed(11);
        let mut field = AgentField::create(100, BOUNDS, 0.4, &mut rand);
        for _ in 0..500 {
            step(&mut field, BOUNDS, 0.4, 5.0, &mut rand);
            for agent in field.iter() {
                assert!(agent.speed() <= 0.4 + 1e-5, "speed {}", agent.speed());
            }
        }
    }

    #[test]
    fn agents_stay_inside_wrap_band() {
        let mut rand = Random::from_seed(12);
        let mut field = AgentField::create(100, BOUNDS, 3.0, &mut rand);
        for _ in 0..1000 {
            step(&mut field, BOUNDS, 3.0, 2.0, &mut rand);
            for agent in field.iter() {
                assert!((-WRAP_MARGIN..=BOUNDS.width + WRAP_MARGIN).contains(&agent.x));
                assert!((-WRAP_MARGIN..=BOUNDS.height + WRAP_MARGIN).contains(&agent.y));
            }
        }
    }

    #[test]
    fn crossing_right_edge_wraps_in_one_step() {
        let mut field = single(Agent::new(BOUNDS.width + 1.9, 50.0, 0.1001, 0.0));
        step(&mut field, BOUNDS, 1.0, 0.0, &mut Random::from_seed(0));
        assert_eq!(field[0].x, -WRAP_MARGIN);
        assert_eq!(field[0].y, 50.0);
    }

    #[test]
    fn crossing_top_edge_wraps_to_bottom() {
        let mut field = single(Agent::new(10.0, -1.5, 0.0, -0.6));
        step(&mut field, BOUNDS, 1.0, 0.0, &mut Random::from_seed(0));
        assert_eq!(field[0].y, BOUNDS.height + WRAP_MARGIN);
    }

    #[test]
    fn agent_inside_band_is_not_wrapped() {
        let mut field = single(Agent::new(BOUNDS.width + 1.0, -1.0, 0.5, -0.5));
        step(&mut field, BOUNDS, 1.0, 0.0, &mut Random::from_seed(0));
        assert_eq!(field[0].x, BOUNDS.width + 1.5);
        assert_eq!(field[0].y, -1.5);
    }

    #[test]
    fn fast_agent_is_clamped_to_exact_speed() {
        let mut field = single(Agent::new(100.0, 100.0, 3.0, 4.0));
        step(&mut field, BOUNDS, 1.0, 0.0, &mut Random::from_seed(0));
        let agent = field[0];
        assert!((agent.speed() - 1.0).abs() < 1e-6);
        assert!((agent.vx - 0.6).abs() < 1e-6);
        assert!((agent.vy - 0.8).abs() < 1e-6);
        assert!((agent.x - 100.6).abs() < 1e-4);
    }

    #[test]
    fn slow_agent_keeps_velocity_without_jitter() {
        let mut field = single(Agent::new(10.0, 10.0, 0.1, -0.2));
        step(&mut field, BOUNDS, 1.0, 0.0, &mut Random::from_seed(0));
        assert_eq!(field[0].vx, 0.1);
        assert_eq!(field[0].vy, -0.2);
    }

    #[test]
    fn resting_agent_stays_finite() {
        let mut field = single(Agent::new(10.0, 10.0, 0.0, 0.0));
        step(&mut field, BOUNDS, 0.0, 0.0, &mut Random::from_seed(0));
        let agent = field[0];
        assert!(agent.vx.is_finite() && agent.vy.is_finite());
        assert_eq!((agent.x, agent.y), (10.0, 10.0));
    }

    #[test]
    fn empty_field_steps_without_effect() {
        let mut field = AgentField::default();
        step(&mut field, BOUNDS, 1.0, 1.0, &mut Random::from_seed(0));
        assert!(field.is_empty());
    }
}
