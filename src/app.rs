/// The `egui` re-export for building native GUIs with the eframe framework.
use eframe::egui::{self, Color32, Stroke};
/// The `egui_plot` crate for the per-species speed charts.
use egui_plot::{Bar, BarChart, Plot};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::SimulationParams;
use crate::core::ParticleEngine;
use crate::species::{Species, tag_color};
use crate::stats::RollingHistogram;

/// A discrete user command. Commands are applied between ticks, never
/// during one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Accelerate,
    Decelerate,
    /// Spawn a particle of a randomly chosen species.
    SpawnRandom,
    Spawn(Species),
    Clear,
    TogglePause,
}

impl Command {
    /// Maps the keys pressed this frame to commands, in a fixed order.
    fn from_input(input: &egui::InputState) -> Vec<Command> {
        let bindings = [
            (egui::Key::ArrowUp, Command::Accelerate),
            (egui::Key::ArrowDown, Command::Decelerate),
            (egui::Key::Enter, Command::SpawnRandom),
            (egui::Key::Delete, Command::Clear),
            (egui::Key::Num1, Command::Spawn(Species::Light)),
            (egui::Key::Num2, Command::Spawn(Species::Medium)),
            (egui::Key::Num3, Command::Spawn(Species::Heavy)),
            (egui::Key::Space, Command::TogglePause),
        ];
        bindings
            .into_iter()
            .filter(|(key, _)| input.key_pressed(*key))
            .map(|(_, cmd)| cmd)
            .collect()
    }
}

/// The application state:
/// - the physics engine, ticked once per frame while running
/// - one rolling speed histogram per species
/// - a random source for picking species on [`Command::SpawnRandom`]
pub struct IdealGasApp {
    params: SimulationParams,
    engine: ParticleEngine,
    histograms: Vec<(Species, RollingHistogram)>,
    rng: StdRng,
    running: bool,
}

impl IdealGasApp {
    pub fn new(params: SimulationParams) -> Self {
        let (engine, rng) = match params.seed {
            Some(seed) => (
                ParticleEngine::with_seed(params.box_size, seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (ParticleEngine::new(params.box_size), StdRng::from_os_rng()),
        };
        let histograms = Species::ALL
            .into_iter()
            .map(|s| {
                let hist = RollingHistogram::new(
                    s.tag(),
                    params.num_bins,
                    params.bin_width,
                    params.rolling_frames,
                );
                (s, hist)
            })
            .collect();

        Self {
            params,
            engine,
            histograms,
            rng,
            running: true,
        }
    }

    pub fn engine(&self) -> &ParticleEngine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Accelerate => self.engine.accelerate(),
            Command::Decelerate => self.engine.decelerate(),
            Command::SpawnRandom => {
                let idx = self.rng.random_range(0..Species::ALL.len());
                self.spawn(Species::ALL[idx]);
            }
            Command::Spawn(species) => self.spawn(species),
            Command::Clear => {
                self.engine.clear();
                for (_, hist) in &mut self.histograms {
                    hist.reset();
                }
            }
            Command::TogglePause => {
                self.running = !self.running;
                info!(running = self.running, "toggled simulation");
            }
        }
    }

    fn spawn(&mut self, species: Species) {
        self.engine
            .generate_random_particle(self.params.radius, species.mass(), species.tag());
    }

    /// One frame of simulation: tick the engine, then refresh the charts.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        self.engine.update();
        for (_, hist) in &mut self.histograms {
            hist.push(self.engine.particles());
        }
    }

    fn draw_box(&self, ui: &egui::Ui) {
        let painter = ui.painter();
        let rect = ui.max_rect();

        // Scale from simulation box to the drawing area:
        let scale = (rect.width() / self.params.box_size).min(rect.height() / self.params.box_size);
        let side = self.params.box_size * scale;
        let outline = egui::Rect::from_min_size(rect.min, egui::vec2(side, side));
        painter.rect_filled(outline, 0.0, Color32::WHITE);
        painter.rect_stroke(outline, 0.0, Stroke::new(1.0, Color32::BLACK));

        for p in self.engine.particles() {
            let pos = rect.min + egui::vec2(p.position().x * scale, p.position().y * scale);
            let radius = p.radius() * scale;
            painter.circle_filled(pos, radius, tag_color(p.kind()));
            painter.circle_stroke(pos, radius, Stroke::new(1.0, Color32::BLACK));
        }
    }

    fn draw_histograms(&self, ui: &mut egui::Ui) {
        let width = f64::from(self.params.bin_width);
        for (species, hist) in &self.histograms {
            ui.label(format!(
                "{} ({}) speed distribution, n = {}",
                species.name(),
                species.tag(),
                hist.current().total()
            ));
            let bars: Vec<Bar> = hist
                .smoothed()
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    // Bin k covers ((k - 1) w, k w].
                    let centre = (i as f64 + 0.5) * width;
                    Bar::new(centre, f64::from(count)).width(width)
                })
                .collect();
            let chart = BarChart::new(bars).color(species.color());

            Plot::new(format!("speed_histogram_{}", species.tag()))
                .height(160.0)
                .allow_scroll(false)
                .allow_drag(false)
                .allow_zoom(false)
                .include_y(0.0)
                .show(ui, |plot_ui| plot_ui.bar_chart(chart));
            ui.separator();
        }
    }
}

impl eframe::App for IdealGasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let commands = ctx.input(Command::from_input);
        for command in commands {
            self.apply(command);
        }

        self.step();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Ideal Gas Simulator");
            ui.label(format!(
                "Particles: {}   Tick: {}   Kinetic energy: {:.2}",
                self.engine.particles().len(),
                self.engine.ticks(),
                self.engine.kinetic_energy()
            ));
            ui.label("Enter: random particle, 1/2/3: by species, Up/Down: speed, Delete: clear, Space: pause");
        });

        egui::SidePanel::right("histogram_panel")
            .resizable(true)
            .show(ctx, |ui| self.draw_histograms(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_box(ui));

        if !self.engine.momentum().is_finite() {
            warn!("non-finite momentum; particle state is corrupt");
        }

        // Request another frame to keep animating.
        ctx.request_repaint();
    }
}
