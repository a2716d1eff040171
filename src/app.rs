use eframe::egui;

use crate::config::WidgetBindings;
use crate::controller::TerminalSearch;
use crate::presenter::{DetailLine, DetailView, Suggestion, View, NOT_FOUND_MESSAGE};

const FONT_SIZE: f32 = 16.0;

/// Desktop front end for [`TerminalSearch`].
pub struct TerminalSearchApp {
    search: TerminalSearch,
    bindings: WidgetBindings,
    // Text edit buffer, kept in step with the controller's query
    input: String,
}

enum Action {
    Query,
    Select(usize),
    Clear,
}

impl TerminalSearchApp {
    pub fn new(search: TerminalSearch, bindings: WidgetBindings) -> Self {
        let input = search.query().to_string();
        Self {
            search,
            bindings,
            input,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Query => self.search.set_query(&self.input),
            Action::Select(index) => self.search.select(index),
            Action::Clear => self.search.clear(),
        }
        self.input = self.search.query().to_string();
    }

    fn query_row(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .id(egui::Id::new(self.bindings.query_input()))
                    .hint_text("Введите модель терминала")
                    .font(egui::FontId::proportional(FONT_SIZE))
                    .desired_width(ui.available_width() - 110.0),
            );
            if self.search.take_focus_request() {
                response.request_focus();
            }
            if response.changed() {
                action = Some(Action::Query);
            }

            let clear = ui
                .push_id(self.bindings.clear_button(), |ui| ui.button("Очистить"))
                .inner;
            if clear.clicked() {
                action = Some(Action::Clear);
            }
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) && !self.input.is_empty() {
            action = Some(Action::Clear);
        }
        action
    }

    fn suggestions_area(&self, ui: &mut egui::Ui, view: &View) -> Option<Action> {
        ui.push_id(self.bindings.suggestions(), |ui| match view {
            View::Suggestions(suggestions) => suggestion_list(ui, suggestions),
            View::NotFound => {
                ui.label(
                    egui::RichText::new(NOT_FOUND_MESSAGE)
                        .size(FONT_SIZE)
                        .color(ui.visuals().weak_text_color()),
                );
                None
            }
            View::Empty | View::Detail(_) => None,
        })
        .inner
    }

    fn result_area(&self, ui: &mut egui::Ui, view: &View) {
        if let View::Detail(detail) = view {
            egui::ScrollArea::vertical()
                .id_source(self.bindings.result())
                .auto_shrink([false, true])
                .show(ui, |ui| detail_panel(ui, detail));
        }
    }
}

fn suggestion_list(ui: &mut egui::Ui, suggestions: &[Suggestion]) -> Option<Action> {
    let mut action = None;
    for suggestion in suggestions {
        let entry = ui.selectable_label(
            false,
            egui::RichText::new(&suggestion.label).size(FONT_SIZE),
        );
        if entry.clicked() {
            action = Some(Action::Select(suggestion.index));
        }
    }
    action
}

fn detail_panel(ui: &mut egui::Ui, detail: &DetailView) {
    for line in detail.lines() {
        match line {
            DetailLine::Field {
                label,
                value,
                muted,
            } => {
                let color = if *muted {
                    ui.visuals().weak_text_color()
                } else {
                    ui.visuals().text_color()
                };
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{label}:"))
                            .size(FONT_SIZE)
                            .strong()
                            .color(color),
                    );
                    ui.label(egui::RichText::new(value).size(FONT_SIZE).color(color));
                });
            }
            DetailLine::Advisory(text) => {
                ui.add_space(2.0);
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(255, 243, 205))
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                    .rounding(egui::Rounding::same(6.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .size(FONT_SIZE)
                                .color(egui::Color32::from_rgb(133, 100, 4)),
                        );
                    });
                ui.add_space(2.0);
            }
        }
    }
}

impl eframe::App for TerminalSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                let mut action = self.query_row(ui);
                ui.add_space(8.0);

                // The view is replaced wholesale by any action, so render from a snapshot
                let view = self.search.view().clone();
                if let Some(selected) = self.suggestions_area(ui, &view) {
                    action = Some(selected);
                }
                ui.add_space(8.0);
                self.result_area(ui, &view);

                if let Some(action) = action {
                    self.apply(action);
                    ctx.request_repaint();
                }
            });
    }
}
