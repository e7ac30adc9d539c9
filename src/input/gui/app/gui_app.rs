use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::value::config::ValueControllerConfig;
use crate::controllers::value::controller::ValueController;
use crate::core::actions::format_value::format_value;
use crate::core::data::unit::Unit;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::RedrawAdapter;

const FIELD_WIDTH: f32 = 68.0;
const BUTTON_SIZE: [f32; 2] = [36.0, 36.0];
const UNIT_BUTTON_SIZE: [f32; 2] = [70.0, 36.0];

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    controller: ValueController<RedrawAdapter>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        config: ValueControllerConfig,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            scale_factor,
            presenter,
            controller: ValueController::with_config(config, RedrawAdapter::default()),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// True when the controller changed since the last call.
    pub fn take_value_changed(&self) -> bool {
        self.controller.presenter().take_dirty()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let controller = &mut self.controller;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Stepper")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .collapsible(false)
                .show(ctx, |ui| {
                    unit_row(ui, controller);
                    ui.add_space(8.0);
                    value_row(ui, controller);
                    ui.separator();
                    ui.label(format!(
                        "Committed: {} {}",
                        format_value(controller.committed_value()),
                        controller.unit()
                    ));
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

fn unit_row(ui: &mut egui::Ui, controller: &mut ValueController<RedrawAdapter>) {
    ui.horizontal(|ui| {
        ui.label("Unit");
        for &unit in Unit::ALL {
            let selected = controller.unit() == unit;
            let button = egui::SelectableLabel::new(selected, unit.symbol());
            if ui.add_sized(UNIT_BUTTON_SIZE, button).clicked() {
                controller.switch_unit(unit);
            }
        }
    });
}

fn value_row(ui: &mut egui::Ui, controller: &mut ValueController<RedrawAdapter>) {
    ui.horizontal(|ui| {
        ui.label("Value");

        let can_decrement = controller.stepper_availability().can_decrement;
        let minus = ui.add_enabled_ui(can_decrement, |ui| {
            ui.add_sized(BUTTON_SIZE, egui::Button::new("-"))
        });
        if minus.inner.clicked() {
            controller.decrement();
        }

        let mut text = controller.draft_text().to_owned();
        let field = ui.add(egui::TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH));
        if field.changed() {
            controller.edit_draft(&text);
        }
        if field.lost_focus() {
            controller.commit_draft();
        }

        let can_increment = controller.stepper_availability().can_increment;
        let plus = ui.add_enabled_ui(can_increment, |ui| {
            ui.add_sized(BUTTON_SIZE, egui::Button::new("+"))
        });
        if plus.inner.clicked() {
            controller.increment();
        }
    });
}
