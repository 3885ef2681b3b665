//! Windowless runner: drives the simulation for a fixed number of ticks

use lucioles_runtime::{DrawList, InputFrame, SilentCues};
use lucioles_swarm::{LoopControl, Simulation};

/// What a headless run observed
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub ticks: u64,
    /// Primitives recorded by the last frame
    pub last_frame_commands: usize,
    pub fireflies: usize,
}

/// Run up to `ticks` ticks with idle input and a fixed `dt`, drawing every
/// tick into a `DrawList`
pub fn run(sim: &mut Simulation, ticks: u64, dt: f32) -> HeadlessReport {
    let mut list = DrawList::new();
    let mut cues = SilentCues;
    let input = InputFrame::idle(sim.playfield().center());

    for _ in 0..ticks {
        let control = sim.update(&input, dt, &mut cues);
        list.clear();
        sim.draw(&mut list, 1.0 / dt);
        if control == LoopControl::Exit {
            break;
        }
    }

    let report = HeadlessReport {
        ticks: sim.tick_count(),
        last_frame_commands: list.len(),
        fireflies: sim.fireflies().len(),
    };
    tracing::info!(
        ticks = report.ticks,
        commands = report.last_frame_commands,
        "headless run finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucioles_core::{LuciolesConfig, Vec2};
    use lucioles_swarm::{MessageState, SwarmRng};

    #[test]
    fn test_headless_run_counts_ticks() {
        let mut config = LuciolesConfig::default();
        config.simulation.fireflies = 25;
        let mut sim = Simulation::new(&config, SwarmRng::new(5));

        let report = run(&mut sim, 120, 1.0 / 60.0);

        assert_eq!(report.ticks, 120);
        assert_eq!(report.fireflies, 25);
        // Fill, message, one circle per firefly
        assert_eq!(report.last_frame_commands, 27);
    }

    #[test]
    fn test_headless_message_fully_revealed() {
        let mut sim = Simulation::new(&LuciolesConfig::default(), SwarmRng::new(5));
        run(&mut sim, 400, 1.0 / 60.0);
        assert_eq!(sim.message().state(), MessageState::FadeIn);
        assert!((sim.message().position() - Vec2::new(400.0, 50.0)).length() < 1e-3);
        for firefly in sim.fireflies() {
            assert!(firefly.position().is_finite());
        }
    }
}
