use super::commands::{self, BACK_BUTTON, BUTTON_GAP, BUTTON_PADDING, CONNECT_BUTTON, TRADER_BUTTON};
use super::event::{AppEvent, UiEvent};
use super::state::*;
use egui::{Align, Color32, Layout, RichText};
use std::sync::mpsc::Sender;

const HEADING_SIZE: f32 = 20.0;
const SECTION_SIZE: f32 = 16.0;
const HEADING_GAP: f32 = 12.0;
const HEADER_BAND: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);

pub fn render(state: &AppState, ctx: &egui::Context, tx: &Sender<AppEvent>) {
    egui::CentralPanel::default().show(ctx, |ui| match state.screen {
        Screen::Home => render_home(state, ui, tx),
        Screen::TradeDetail => render_trade_detail(state, ui, tx),
    });
}

fn render_home(state: &AppState, ui: &mut egui::Ui, tx: &Sender<AppEvent>) {
    // vertically centre the heading + buttons block, using last frame's measured height
    let block_id = ui.id().with("home_block_h");
    let block_h = ui
        .ctx()
        .data(|d| d.get_temp::<f32>(block_id))
        .unwrap_or_else(|| estimated_home_block_height(state.traders().len()));
    let pad = ((ui.available_height() - block_h) / 2.0).max(0.0);
    ui.add_space(pad);
    let block_top = ui.cursor().top();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Select a Trader".to_uppercase())
                .size(HEADING_SIZE)
                .strong()
                .color(Color32::BLACK),
        );
    });
    ui.add_space(HEADING_GAP);

    for trader in state.traders() {
        if commands::styled_button(ui, trader.name, TRADER_BUTTON).clicked() {
            commands::emit(
                tx,
                UiEvent::TraderSelected {
                    name: trader.name.to_string(),
                },
            );
        }
        ui.add_space(BUTTON_GAP);
    }

    let measured = ui.cursor().top() - block_top;
    if (measured - block_h).abs() > 0.5 {
        ui.ctx().data_mut(|d| d.insert_temp(block_id, measured));
        ui.ctx().request_repaint();
    }
}

fn estimated_home_block_height(buttons: usize) -> f32 {
    let button_h = TRADER_BUTTON.text_size + 2.0 * BUTTON_PADDING;
    HEADING_SIZE + HEADING_GAP + buttons as f32 * (button_h + BUTTON_GAP)
}

fn render_trade_detail(state: &AppState, ui: &mut egui::Ui, tx: &Sender<AppEvent>) {
    ui.with_layout(Layout::top_down_justified(Align::Min), |ui| {
        egui::Frame::none()
            .fill(HEADER_BAND)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("CyCap - Recent Trades".to_uppercase())
                            .size(HEADING_SIZE)
                            .strong()
                            .color(Color32::WHITE),
                    );
                });
            });
        ui.add_space(BUTTON_GAP);

        if commands::styled_button(ui, "Follow Trader and Connect Robinhood", CONNECT_BUTTON)
            .clicked()
        {
            commands::emit(tx, UiEvent::ConnectBrokerage);
        }
        ui.add_space(BUTTON_GAP);

        ui.label(
            RichText::new("Recent Trades".to_uppercase())
                .size(SECTION_SIZE)
                .color(Color32::BLACK),
        );
        commands::trade_list(ui, &state.recent_trades);
        ui.add_space(BUTTON_GAP);

        if commands::styled_button(ui, "Back to Home", BACK_BUTTON).clicked() {
            commands::emit(tx, UiEvent::BackToHome);
        }
    });
}
