//! Simulation driver: per-step tree rebuild, force evaluation, leapfrog
//! integration, periodic wrap, and metric expansion.

use crate::gravity::{accelerations, build, PeriodicField, QuadNode};
use crate::models::{Body, Rect, Vec2};
use crate::simulation::{initial_bodies, FrameSink};
use crate::utils::{SimConfig, SimParams, SimulationError, UniverseParams};
use log::info;

/// A complete N-body run: the bodies, the evolving universe parameters, the
/// fixed numerical parameters, and the shared periodic force field.
///
/// Steps are strictly sequential; within a step the tree build and the force
/// evaluation parallelize internally.
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub universe: UniverseParams,
    params: SimParams,
    field: PeriodicField,
    time: f64,
    step_index: usize,
}

impl Simulation {
    /// Validates the configuration, lays out the initial bodies, and
    /// precomputes the periodic field.
    pub fn new(config: &SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let universe = config.universe_params();
        let bodies = initial_bodies(
            config.num_bodies,
            universe.domain_size,
            config.body_mass(),
            config.displacement_ratio,
            config.max_velocity,
            &mut rand::rng(),
        );
        let field = PeriodicField::build(config.mesh_resolution, config.tiling_radius);
        Ok(Simulation::from_parts(
            bodies,
            universe,
            config.sim_params(),
            field,
        ))
    }

    /// Assembles a simulation from externally prepared state. Useful when the
    /// caller provides its own bodies or reuses a precomputed field.
    pub fn from_parts(
        bodies: Vec<Body>,
        universe: UniverseParams,
        params: SimParams,
        field: PeriodicField,
    ) -> Self {
        Simulation {
            bodies,
            universe,
            params,
            field,
            time: 0.0,
            step_index: 0,
        }
    }

    /// Elapsed simulated time, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Fixed iteration count for a full run.
    pub fn num_steps(&self) -> usize {
        (self.params.total_time / self.params.time_step) as usize
    }

    /// Builds this step's quadtree over the current domain. The tree is
    /// discarded at the end of the step.
    pub fn build_tree(&self) -> QuadNode {
        build(Rect::square(self.universe.domain_size), self.bodies.clone())
    }

    /// Advances the simulation by one time step: rebuild the tree, evaluate
    /// accelerations from the pre-step positions, integrate, wrap, expand.
    pub fn step(&mut self) {
        let tree = self.build_tree();
        let accs = accelerations(
            &self.bodies,
            &tree,
            &self.field,
            &self.universe,
            &self.params,
        );
        self.leapfrog(&accs);
        self.border_wrap();
        self.metric_expansion();
        self.time += self.params.time_step;
        self.step_index += 1;
    }

    /// Runs the fixed number of steps, handing each frame to `sink` and
    /// reporting elapsed simulated time per step.
    pub fn run(&mut self, sink: &mut dyn FrameSink) {
        let steps = self.num_steps();
        for _ in 0..steps {
            info!("t = {:>12.4e} s (step {}/{})", self.time, self.step_index, steps);
            self.step();
            let positions: Vec<Vec2> = self.bodies.iter().map(|b| b.position).collect();
            sink.render_frame(self.step_index, self.universe.domain_size, &positions);
        }
    }

    /// Leapfrog update, kick-drift ordering held invariant across the run:
    /// velocities first (`v += a dt`), then positions with the updated
    /// velocities (`p += v dt`).
    fn leapfrog(&mut self, accs: &[Vec2]) {
        let dt = self.params.time_step;
        for (body, acc) in self.bodies.iter_mut().zip(accs) {
            body.velocity += *acc * dt;
            body.position += body.velocity * dt;
        }
    }

    /// Reduces every coordinate into `[0, domain_size)`.
    pub fn border_wrap(&mut self) {
        let size = self.universe.domain_size;
        for body in &mut self.bodies {
            body.position.x = body.position.x.rem_euclid(size);
            body.position.y = body.position.y.rem_euclid(size);
        }
    }

    /// Uniform expansion of space: the domain and every position scale by the
    /// same ratio, so relative separations (and hence forces) are unchanged
    /// by the rescaling itself.
    pub fn metric_expansion(&mut self) {
        let ratio = 1.0 + self.universe.hubble_rate * self.params.time_step;
        self.universe.domain_size *= ratio;
        for body in &mut self.bodies {
            body.position = body.position * ratio;
        }
    }
}
