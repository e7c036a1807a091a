//! Desktop preview app for myrtio-strip-animator
//!
//! Plays the sweep presets in a window. The window repaint is the main loop:
//! every repaint runs a number of animator ticks and flushes the last frame
//! into the preview driver.

use eframe::egui::{self};
use myrtio_strip_animator::{OutputDriver, Rgbw, StripPlayer, SweepConfig};

/// Number of pixels on the simulated strip
const PIXEL_COUNT: usize = 125;

/// Channels needed by the largest preset
const MAX_CHANNELS: usize = 3;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    Rainbow,
    Dot,
}

impl Preset {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Dot => "dot",
        }
    }

    const fn config(self) -> SweepConfig {
        match self {
            Self::Rainbow => SweepConfig::rainbow(),
            Self::Dot => SweepConfig::dot(),
        }
    }
}

/// Keeps the last flushed frame for drawing
#[derive(Default)]
struct PreviewDriver {
    frame: Vec<Rgbw>,
}

impl OutputDriver for PreviewDriver {
    fn write(&mut self, pixels: &[Rgbw]) {
        self.frame.clear();
        self.frame.extend_from_slice(pixels);
    }
}

type Player = StripPlayer<PreviewDriver, PIXEL_COUNT, MAX_CHANNELS>;

fn build_player(preset: Preset) -> Player {
    let animator = preset
        .config()
        .build()
        .expect("presets fit into MAX_CHANNELS");
    Player::new(animator, PreviewDriver::default()).expect("strip is not empty")
}

/// Approximate on-screen color of an RGBW pixel
fn display_color(pixel: Rgbw) -> egui::Color32 {
    egui::Color32::from_rgb(
        pixel.r.saturating_add(pixel.w),
        pixel.g.saturating_add(pixel.w),
        pixel.b.saturating_add(pixel.w),
    )
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Strip Animator Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-strip-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    player: Player,
    preset: Preset,
    /// Ticks played since the last reset
    ticks: u64,
    /// Whether animation is playing
    playing: bool,
    /// Animator ticks per window repaint
    ticks_per_frame: u32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let preset = Preset::Rainbow;
        Self {
            player: build_player(preset),
            preset,
            ticks: 0,
            playing: true,
            ticks_per_frame: 4,
            led_size: LED_SIZE,
        }
    }

    /// Start the current preset from scratch
    fn reset(&mut self) {
        self.player = build_player(self.preset);
        self.ticks = 0;
    }

    fn step(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.player.frame();
        }
        self.ticks += u64::from(ticks);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.playing {
            self.step(self.ticks_per_frame);
        }

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui.button("⏭ Step").clicked() {
                    self.step(1);
                }

                ui.add_space(8.0);
                ui.label(format!("Ticks: {}", self.ticks));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Ticks per frame:");
                ui.add(egui::Slider::new(&mut self.ticks_per_frame, 1..=50));

                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Preset:");
                let mut selected = self.preset;
                egui::ComboBox::from_id_salt("preset_selector")
                    .selected_text(self.preset.as_str())
                    .show_ui(ui, |ui| {
                        for preset in [Preset::Rainbow, Preset::Dot] {
                            ui.selectable_value(&mut selected, preset, preset.as_str());
                        }
                    });
                if selected != self.preset {
                    self.preset = selected;
                    self.reset();
                }

                let shared = self.player.animator().shared();
                ui.add_space(8.0);
                ui.label(format!(
                    "Direction: {:?}  Pixel: {}  Hue: {:.3}",
                    shared.direction, shared.last_pixel, shared.base_hue
                ));
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = &self.player.driver().frame;
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = PIXEL_COUNT.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(rect, 3.0, display_color(*pixel));
            }
        });
    }
}
