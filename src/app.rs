use egui::Rect;

use crate::config::AppConfig;
use crate::input::InputHandler;
use crate::panels::status_panel;
use crate::state::SessionState;

/// The eframe shell around a [`SessionState`]
pub struct PaintApp {
    session: SessionState,
    input: InputHandler,
    config: AppConfig,
    // Drawing area from the previous frame, used to filter presses
    canvas_rect: Rect,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("{err}; falling back to defaults where needed");
        }

        Self {
            session: SessionState::new(config.initial_color, config.initial_tool),
            input: InputHandler::new(),
            config,
            canvas_rect: Rect::NOTHING,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl eframe::App for PaintApp {
    /// Runs once per frame: read input, advance the session, paint.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = self.input.process_input(ctx, self.canvas_rect);
        self.session.update(&input);

        if self.config.show_status_bar {
            status_panel(&self.session, ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas_rect = ui.max_rect();
                let mut painter = ui.painter_at(self.canvas_rect);
                self.session.render(&mut painter);
            });

        ctx.request_repaint_after(self.config.frame_interval());
    }
}
