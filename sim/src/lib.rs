use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use submarine::{
    catalog, step_vehicle, ControlInputs, RegistryEvent, StepReport, Vehicle, VehicleConstants,
    VehicleRegistry,
};
use tracing::{debug, info};
use uuid::Uuid;

mod args;
mod config;

pub use args::Args;
pub use config::{load_config, parse_config, Config, CustomVehicle, Segment};

/// A configured run: the vehicle registry plus fixed-step timing.
#[derive(Debug)]
pub struct Simulation {
    pub run_id: Uuid,
    pub registry: VehicleRegistry,
    schedule: Vec<Segment>,
    dt: f32,
    log_every: u32,
    tick: u64,
    switches: Rc<Cell<u32>>,
}

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub switches: u32,
    pub final_vehicle: String,
    pub final_depth: f32,
    pub final_mass: f32,
}

/// Build the registry (presets plus config-defined classes), select the start
/// vehicle and hook up switch logging.
pub fn build_simulation(cfg: Config) -> Result<Simulation> {
    anyhow::ensure!(cfg.tick_hz > 0, "tick_hz must be positive");
    let mut registry = catalog::default_registry().context("building preset vehicles")?;
    for custom in cfg.custom_vehicles {
        let constants = VehicleConstants::new(custom.constants)
            .with_context(|| format!("invalid constants for vehicle {}", custom.class))?;
        info!(class = %custom.class, "Registered custom vehicle");
        registry.insert(Vehicle::new(custom.class, constants));
    }

    let switches = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&switches);
    registry.subscribe(move |event| match event {
        RegistryEvent::VehicleSwitched => {
            counter.set(counter.get() + 1);
            debug!(?event, "Registry notification");
        }
    });

    registry
        .switch_vehicle(&cfg.start_vehicle)
        .with_context(|| format!("selecting start vehicle {}", cfg.start_vehicle))?;
    for segment in &cfg.schedule {
        if let Some(class) = &segment.vehicle {
            anyhow::ensure!(registry.contains(class), "schedule names unknown vehicle {class}");
        }
    }

    let run_id = Uuid::new_v4();
    info!(%run_id, vehicles = registry.len(), start = %registry.current_class(), "Simulation ready");
    Ok(Simulation {
        run_id,
        registry,
        schedule: cfg.schedule,
        dt: 1.0 / cfg.tick_hz as f32,
        log_every: cfg.log_every,
        tick: 0,
        switches,
    })
}

impl Simulation {
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of vehicle switches observed so far, including the start selection.
    pub fn switches(&self) -> u32 {
        self.switches.get()
    }

    pub fn schedule(&self) -> &[Segment] {
        &self.schedule
    }

    /// Replace the configured schedule, e.g. from a command-line override.
    pub fn set_schedule(&mut self, schedule: Vec<Segment>) {
        self.schedule = schedule;
    }

    /// Advance the active vehicle by one fixed step.
    pub fn step(&mut self, inputs: ControlInputs) -> StepReport {
        let report = step_vehicle(self.registry.current_mut(), inputs, self.dt);
        self.tick += 1;
        if self.log_every > 0 && self.tick % u64::from(self.log_every) == 0 {
            let state = self.registry.current().state();
            info!(
                tick = self.tick,
                vehicle = %self.registry.current_class(),
                depth = report.depth,
                surge = report.surge,
                mass = report.mass,
                front = state.water_mass_front_tank(),
                back = state.water_mass_back_tank(),
                pitch = report.forward.y,
                "Telemetry"
            );
        }
        report
    }

    /// Switch vehicle if the segment asks for it, then run its ticks.
    pub fn run_segment(&mut self, segment: &Segment) -> Result<Option<StepReport>> {
        if let Some(class) = &segment.vehicle {
            self.registry.switch_vehicle(class)?;
        }
        let inputs = segment.inputs();
        let mut last = None;
        for _ in 0..segment.ticks {
            last = Some(self.step(inputs));
        }
        Ok(last)
    }

    /// Run the whole schedule in order.
    pub fn run(&mut self) -> Result<RunSummary> {
        let schedule = std::mem::take(&mut self.schedule);
        let result = schedule.iter().try_for_each(|segment| self.run_segment(segment).map(|_| ()));
        self.schedule = schedule;
        result?;

        let current = self.registry.current();
        Ok(RunSummary {
            ticks: self.tick,
            switches: self.switches(),
            final_vehicle: current.class().to_string(),
            final_depth: current.state().depth(),
            final_mass: current.state().current_mass(),
        })
    }
}
