use super::event::{AppEvent, UiEvent};
use egui::{Color32, RichText, Stroke, Vec2};
use std::sync::mpsc::Sender;

pub fn emit(tx: &Sender<AppEvent>, ev: UiEvent) {
    if tx.send(AppEvent::Ui(ev)).is_err() {
        tracing::trace!("event channel closed; dropping click");
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub base: Color32,
    pub hover: Color32,
    pub pressed: Color32,
    pub text_size: f32,
}

pub const TRADER_BUTTON: ButtonStyle = ButtonStyle {
    base: Color32::from_rgb(0x00, 0x80, 0x80),
    hover: Color32::from_rgb(0x00, 0xa0, 0xa0),
    pressed: Color32::from_rgb(0x00, 0x4d, 0x4d),
    text_size: 18.0,
};

pub const CONNECT_BUTTON: ButtonStyle = ButtonStyle {
    base: Color32::from_rgb(0x32, 0xcd, 0x32),
    hover: Color32::from_rgb(0x28, 0xa4, 0x28),
    pressed: Color32::from_rgb(0x22, 0x8b, 0x22),
    text_size: 16.0,
};

pub const BACK_BUTTON: ButtonStyle = ButtonStyle {
    base: Color32::from_rgb(0xff, 0x63, 0x47),
    hover: Color32::from_rgb(0xff, 0x45, 0x00),
    pressed: Color32::from_rgb(0xcd, 0x37, 0x00),
    text_size: 14.0,
};

const BUTTON_ROUNDING: f32 = 10.0;
pub const BUTTON_PADDING: f32 = 10.0;
pub const BUTTON_GAP: f32 = 8.0;

const LIST_BG: Color32 = Color32::from_rgb(0xf9, 0xf9, 0xf9);
const LIST_BORDER: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
const LIST_TEXT_SIZE: f32 = 14.0;

/// Full-width button with its own base/hover/pressed fills and an uppercased label.
pub fn styled_button(ui: &mut egui::Ui, label: &str, style: ButtonStyle) -> egui::Response {
    ui.scope(|ui| {
        ui.spacing_mut().button_padding = Vec2::splat(BUTTON_PADDING);
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.weak_bg_fill = style.base;
        widgets.hovered.weak_bg_fill = style.hover;
        widgets.active.weak_bg_fill = style.pressed;
        widgets.inactive.bg_stroke = Stroke::NONE;

        let text = RichText::new(label.to_uppercase())
            .size(style.text_size)
            .color(Color32::BLACK);
        let width = ui.available_width();
        ui.add(
            egui::Button::new(text)
                .rounding(BUTTON_ROUNDING)
                .min_size(Vec2::new(width, 0.0)),
        )
    })
    .inner
}

pub fn trade_list(ui: &mut egui::Ui, items: &[String]) {
    egui::Frame::none()
        .fill(LIST_BG)
        .stroke(Stroke::new(1.0, LIST_BORDER))
        .inner_margin(BUTTON_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .id_source("recent_trades")
                .show(ui, |ui| {
                    for item in items {
                        ui.label(RichText::new(item).size(LIST_TEXT_SIZE).color(Color32::BLACK));
                    }
                });
        });
}
