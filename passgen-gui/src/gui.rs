pub mod message;

use crate::config::{Config, MAX_SCALE, MIN_SCALE};
use crate::gui::message::Message;
use crate::state::FormState;

use eframe::egui::{self, Color32, Key, Modifiers, RichText};
use log::{info, warn};
use passgen_lib::zeroize::Zeroize;

const ERROR_COLOR: Color32 = Color32::from_rgb(0xff, 0x0d, 0x10);

pub struct Gui {
    config: Config,
    update_scale: bool,
    update_visuals: bool,
    form: FormState,
    messages: Vec<Message>,
}

impl Gui {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            update_scale: true,
            update_visuals: true,
            form: FormState::default(),
            messages: Vec::new(),
        }
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.update_scale {
            ctx.set_pixels_per_point(self.config.scale);
        }

        if self.update_visuals {
            if self.config.dark {
                ctx.set_visuals(egui::Visuals::dark());
            } else {
                ctx.set_visuals(egui::Visuals::light());
            }
            self.update_visuals = false;
        }

        self.handle_keybinds(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.display_header(ui);
            self.display_form(ui);
            self.display_password(ui);
            self.display_messages(ui);
        });

        // Keep repainting while a message counts down
        if !self.messages.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

impl Gui {
    fn generate(&mut self) {
        if let Err(error) = self.form.submit() {
            warn!("rejected password length: {}", error);
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.messages.clear();
    }

    fn copy_password(&mut self, ctx: &egui::Context) {
        if let Some(password) = self.form.password() {
            ctx.output_mut(|o| set_copied_text(&mut o.copied_text, password));
            self.messages.push(Message::copied());
            info!("copied password to clipboard");
        }
    }

    fn display_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button("Options", |ui| {
                if !ui
                    .add(egui::Slider::new(&mut self.config.scale, MIN_SCALE..=MAX_SCALE).text("UI Scale"))
                    .dragged()
                {
                    self.update_scale = true;
                } else {
                    self.update_scale = false;
                };

                if ui.checkbox(&mut self.config.dark, "Dark mode").changed() {
                    self.update_visuals = true;
                }
            });
        });

        ui.separator();
    }

    fn display_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Password Generator").strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Password Length");
                if let Some(error) = self.form.visible_error() {
                    ui.label(RichText::new(error).small().color(ERROR_COLOR));
                }
            });

            let response = ui.add_sized(
                [100.0, 20.0],
                egui::TextEdit::singleline(&mut self.form.length_input).hint_text("Ex. 8"),
            );

            if response.lost_focus() {
                self.form.touched = true;
                if ui.input(|i| i.key_pressed(Key::Enter)) {
                    self.generate();
                }
            }
        });

        ui.checkbox(&mut self.form.use_upper_case, "Use Upper Case");
        ui.checkbox(&mut self.form.use_digits, "Use Digits");
        ui.checkbox(&mut self.form.use_special_chars, "Use Special Chars");

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.form.can_submit(), egui::Button::new("Generate Password"))
                .clicked()
            {
                self.generate();
            }
            if ui.button("Reset Password").clicked() {
                self.reset();
            }
        });

        ui.separator();
    }

    fn display_password(&mut self, ui: &mut egui::Ui) {
        let mut copy = false;

        if let Some(password) = self.form.password() {
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(RichText::new(password).size(22.0).monospace()).selectable(true));
                if ui.button("Copy").on_hover_text("Copy to clipboard").clicked() {
                    copy = true;
                }
            });
        }

        if copy {
            self.copy_password(ui.ctx());
        }
    }

    fn display_messages(&mut self, ui: &mut egui::Ui) {
        self.messages.retain(|message| !message.is_complete());

        for message in self.messages.iter() {
            message.display(ui);
        }
    }

    fn handle_keybinds(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.matches_exact(Modifiers::CTRL) && i.key_pressed(Key::G)) {
            info!("Generate");
            self.generate();
        }
        if ctx.input(|i| i.modifiers.matches_exact(Modifiers::CTRL) && i.key_pressed(Key::R)) {
            info!("Reset");
            self.reset();
        }
        if ctx.input(|i| {
            i.modifiers
                .matches_exact(Modifiers::CTRL | Modifiers::SHIFT)
                && i.key_pressed(Key::C)
        }) {
            self.copy_password(ctx);
        }
    }
}

impl Drop for Gui {
    fn drop(&mut self) {
        self.config.save();
    }
}

/// Wipes whatever was queued for the clipboard before writing the password in its place.
fn set_copied_text(copied_text: &mut String, password: &str) {
    copied_text.zeroize();
    copied_text.push_str(password);
}
