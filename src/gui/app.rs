use crate::reply::Role;
use crate::theme::{self, Theme};
use crate::widget::{ChatWidget, Origin};
use eframe::{
    egui::{
        self, menu, scroll_area::ScrollBarVisibility, Align, CentralPanel, Context, Layout,
        RichText, ScrollArea, TopBottomPanel,
    },
    App,
};
use std::time::Instant;

pub struct DemoChatApp {
    widget: ChatWidget,
    theme: Theme,
    presets: Vec<Theme>,
}

impl DemoChatApp {
    pub fn new(widget: ChatWidget, theme: Theme) -> Self {
        Self {
            widget,
            theme,
            presets: theme::presets(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let preset_names: Vec<String> =
                    self.presets.iter().map(|p| p.name.clone()).collect();
                for name in preset_names {
                    let selected = self.theme.name == name;
                    if ui.selectable_label(selected, name.clone()).clicked() {
                        if let Some(t) = theme::find(&name) {
                            self.theme = t;
                            theme::apply(&self.theme, ctx);
                        }
                        ui.close_menu();
                    }
                }
            });
        });
    }

    fn render_role_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for role in [Role::Teacher, Role::Student] {
                let selected = self.widget.role() == role;
                if ui.selectable_label(selected, role.label()).clicked() {
                    self.widget.set_role(role);
                }
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new("Demo replies only — no assistant backend connected")
                        .color(self.theme.muted_text)
                        .small(),
                );
            });
        });
    }

    fn render_messages(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("{} chat", self.widget.role().label()));
        ui.add_space(6.0);
        let log_height = ui.available_height();
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .max_height(log_height)
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysVisible)
            .show(ui, |ui| {
                ui.set_min_height(log_height);
                let max_width = ui.available_width() * 0.96;
                ui.set_max_width(max_width);
                let role = self.widget.role();
                if self.widget.messages(role).is_empty() {
                    ui.label(
                        RichText::new("No messages yet. Ask the assistant something below.")
                            .color(self.theme.muted_text),
                    );
                }
                for msg in self.widget.messages(role).iter() {
                    let is_user = msg.origin == Origin::User;
                    let bubble_fill = if is_user {
                        self.theme.accent_soft
                    } else {
                        self.theme.surface
                    };
                    let bubble_stroke = if is_user {
                        self.theme.accent
                    } else {
                        self.theme.border
                    };
                    let text_color = if is_user {
                        self.theme.accent
                    } else {
                        self.theme.text
                    };
                    let name = if is_user { "You" } else { "Assistant" };
                    let name_color = if is_user {
                        bubble_stroke
                    } else {
                        self.theme.muted_text
                    };

                    ui.add_space(4.0);
                    ui.with_layout(Layout::left_to_right(Align::Min), |ui| {
                        ui.add_space(8.0);
                        egui::Frame::none()
                            .fill(bubble_fill)
                            .stroke(egui::Stroke {
                                width: 1.0,
                                color: bubble_stroke,
                            })
                            .rounding(egui::Rounding::same(6.0))
                            .inner_margin(egui::vec2(10.0, 8.0))
                            .show(ui, |ui| {
                                ui.set_max_width(max_width * 0.9);
                                ui.label(RichText::new(name).strong().color(name_color));
                                ui.add_space(4.0);
                                // Plain text label: user input is never
                                // treated as markup.
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(&msg.text).color(text_color),
                                    )
                                    .wrap(true),
                                );
                            });
                    });
                }
                if self.widget.pending_len() > 0 {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Assistant is typing...")
                            .color(self.theme.muted_text)
                            .italics(),
                    );
                }
            });
    }

    fn render_input_bar(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.label("Message:");
            let input = ui.add(
                egui::TextEdit::singleline(self.widget.input_mut())
                    .hint_text("Ask the assistant something..."),
            );
            let can_send = !self.widget.input().trim().is_empty();
            let send_clicked = ui
                .add_enabled(can_send, egui::Button::new("Send"))
                .clicked();
            let enter_pressed =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if send_clicked || enter_pressed {
                if self.widget.submit(Instant::now()) && enter_pressed {
                    input.request_focus();
                }
            }
        });
    }
}

impl App for DemoChatApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        theme::apply(&self.theme, ctx);

        let now = Instant::now();
        self.widget.poll(now);
        if let Some(due) = self.widget.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }

        TopBottomPanel::top("menu_bar").show(ctx, |ui| self.render_menu_bar(ctx, ui));
        TopBottomPanel::top("role_tabs").show(ctx, |ui| self.render_role_tabs(ui));
        TopBottomPanel::bottom("chat_input").show(ctx, |ui| self.render_input_bar(ui));
        CentralPanel::default().show(ctx, |ui| self.render_messages(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop in-flight replies so nothing fires into a torn-down view.
        let dropped = self.widget.cancel_pending();
        if dropped > 0 {
            eprintln!("[gui] Dropped {dropped} pending demo replies on exit");
        }
    }
}

pub fn launch_gui(widget: ChatWidget, theme: Theme) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EduAssist Demo Chat")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EduAssist Demo Chat",
        native_options,
        Box::new(move |_cc| Box::new(DemoChatApp::new(widget, theme))),
    )
}
