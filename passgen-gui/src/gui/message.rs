use std::time::Duration;

use eframe::egui::Ui;

use crate::timer::Timer;

/// Short-lived notice shown under the form, dropped once its timer runs out.
pub struct Message {
    text: String,
    show_countdown: bool,
    timer: Timer,
}

impl Message {
    pub fn new(text: String, show_countdown: bool, duration: Duration) -> Message {
        Message {
            text,
            show_countdown,
            timer: Timer::new(duration),
        }
    }

    pub fn copied() -> Message {
        Message::new(
            String::from("Copied to clipboard"),
            true,
            Duration::from_secs(3),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn display(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(self.text());
            if self.show_countdown {
                ui.weak(self.timer.remaining_time().as_secs().to_string());
            }
        });
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }
}
