use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::snake::{BOARD_SIZE, Cell, GameStatus, Point, SnakeGameState};
use eframe::egui;

use crate::config::ClientConfig;

/// Arrow keys and the raw key identifiers the engine recognizes.
const ARROW_KEYS: [(egui::Key, &str); 4] = [
    (egui::Key::ArrowDown, "ArrowDown"),
    (egui::Key::ArrowUp, "ArrowUp"),
    (egui::Key::ArrowRight, "ArrowRight"),
    (egui::Key::ArrowLeft, "ArrowLeft"),
];

/// Presentation adapter around the engine: reads key presses, owns the
/// tick deadline, and paints a snapshot of the board each frame.
pub struct SnakeApp {
    state: SnakeGameState,
    rng: SessionRng,
    tick_interval: Duration,
    // At most one armed deadline at a time. Cleared on every status
    // change so a stale deadline never ticks into mutated state.
    next_tick: Option<Instant>,
}

impl SnakeApp {
    pub fn new(config: &ClientConfig, rng: SessionRng) -> Self {
        Self {
            state: SnakeGameState::new(),
            rng,
            tick_interval: Duration::from_millis(u64::from(config.tick_interval_ms)),
            next_tick: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for (key, identifier) in ARROW_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                self.state.handle_key(identifier);
            }
        }
    }

    fn drive_ticks(&mut self) {
        if self.state.status() != GameStatus::Running {
            self.next_tick = None;
            return;
        }

        let now = Instant::now();
        match self.next_tick {
            None => self.next_tick = Some(now + self.tick_interval),
            Some(deadline) if now >= deadline => {
                self.state.tick(&mut self.rng);
                self.next_tick = if self.state.status() == GameStatus::Running {
                    Some(now + self.tick_interval)
                } else {
                    None
                };
            }
            Some(_) => {}
        }
    }

    fn toggle_play_pause(&mut self) {
        self.state.toggle_play_pause();
        // The armed deadline belongs to the previous status.
        self.next_tick = None;
    }

    fn button_caption(&self) -> &'static str {
        match self.state.status() {
            GameStatus::Running => "Pause",
            GameStatus::GameOver => "Restart",
            GameStatus::Idle => "Start",
        }
    }

    fn render_board(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let max_board = (available.x.min(available.y - 90.0)).min(440.0);
        let cell_size = (max_board / BOARD_SIZE as f32 - 4.0).max(16.0);

        for row in 0..BOARD_SIZE {
            ui.horizontal(|ui| {
                ui.add_space((available.x - (cell_size + 4.0) * BOARD_SIZE as f32) / 2.0);
                for col in 0..BOARD_SIZE {
                    render_cell(ui, self.state.cell(Point::new(row, col)), cell_size);
                }
            });
        }
    }
}

fn render_cell(ui: &mut egui::Ui, cell: Cell, cell_size: f32) {
    let fill = match cell {
        Cell::Snake => egui::Color32::from_rgb(80, 190, 90),
        Cell::Food => egui::Color32::from_rgb(220, 60, 60),
        Cell::Empty => egui::Color32::from_gray(40),
    };

    let size = egui::vec2(cell_size, cell_size);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect.shrink(2.0), 3.0, fill);
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drive_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(format!("Score: {}", self.state.score()));
                ui.add_space(8.0);

                self.render_board(ui);

                ui.add_space(12.0);
                if ui.button(self.button_caption()).clicked() {
                    self.toggle_play_pause();
                }

                if self.state.status() == GameStatus::GameOver {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Game Over")
                            .color(egui::Color32::RED)
                            .size(24.0),
                    );
                }
            });
        });

        if let Some(deadline) = self.next_tick {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
