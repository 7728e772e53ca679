// MIT License
// Copyright (c) The FinPay Developers 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.


// installed
use eframe::egui::{Align, Label, Layout, RichText, ScrollArea, Sense, Ui};

use log::{debug, info};

// local
use crate::app::{FinPayApp, VERSION};
use crate::theme::ACCENT;
use crate::transaction::RECENT_TRANSACTIONS;
use crate::widgets::{render_card_panel, toggle_switch};


const USER_NAME: &str = "Dana Whitfield";

// Quick action buttons under the card, with their fixed logo glyphs
const ACTIONS: [(&str, &str); 4] = [
    ("Sent", "📤"),
    ("Receive", "📥"),
    ("Loan", "🏦"),
    ("Topup", "💰"),
];

// Settings rows above the theme switch, all placeholders for now
const SETTINGS_ITEMS: [&str; 5] = [
    "Language",
    "My Profile",
    "Contact Us",
    "Change Password",
    "Privacy Policy",
];


/// Renders the home screen: profile header, card, quick actions, transactions.
pub fn render_home_screen(app: &mut FinPayApp, ui: &mut Ui) {
    let theme = app.theme;

    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        // Profile header
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("👤").size(34.0));
            ui.add_space(4.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Welcome back,").size(13.0).color(theme.muted_text()));
                ui.label(RichText::new(USER_NAME).size(18.0).strong().color(theme.text()));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("🔍").size(18.0).color(theme.icon_color()));
            });
        });

        ui.add_space(14.0);
        render_card_panel(ui);
        ui.add_space(14.0);

        // Quick actions
        ui.columns(ACTIONS.len(), |cols| {
            for (col, (label, icon)) in cols.iter_mut().zip(ACTIONS) {
                let response = col
                    .vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(22.0).color(theme.icon_color()));
                        ui.add_space(4.0);
                        ui.label(RichText::new(label).size(13.0).color(theme.action_text()));
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    debug!("action tapped: {label}");
                }
            }
        });

        ui.add_space(18.0);

        // Transaction list header
        ui.horizontal(|ui| {
            ui.label(RichText::new("Transaction").size(18.0).strong().color(theme.text()));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let see_all = ui.add(
                    Label::new(RichText::new("See All").size(13.0).color(ACCENT))
                        .sense(Sense::click()),
                );
                if see_all.clicked() {
                    info!("see all tapped");
                    app.set_message("Full history is not available yet");
                }
            });
        });

        if app.show_home_message() {
            ui.label(RichText::new(&app.home_message).size(12.0).color(ACCENT));
        }

        ui.add_space(6.0);
        for tx in &RECENT_TRANSACTIONS {
            ui.horizontal(|ui| {
                let mut icon = RichText::new(tx.icon).size(24.0);
                if let Some(tint) = tx.icon_tint(theme) {
                    icon = icon.color(tint);
                }
                ui.label(icon);
                ui.add_space(6.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(tx.name).size(16.0).color(theme.text()));
                    ui.label(RichText::new(tx.category).size(11.0).color(theme.category_text()));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(tx.amount)
                            .size(15.0)
                            .color(tx.amount_color(theme)),
                    );
                });
            });
            ui.add_space(10.0);
        }
    });
}

/// Renders the settings screen: placeholder rows plus the theme switch.
pub fn render_settings_screen(app: &mut FinPayApp, ui: &mut Ui) {
    let theme = app.theme;

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Settings").size(22.0).color(theme.text()));
    });
    ui.add_space(10.0);

    for item in SETTINGS_ITEMS {
        let response = ui
            .horizontal(|ui| {
                ui.add_space(4.0);
                ui.label(RichText::new(item).size(16.0).color(theme.text()));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new("›").size(20.0).strong().color(theme.icon_color()));
                });
            })
            .response
            .interact(Sense::click());
        if response.clicked() {
            // Target screens do not exist yet, the tap only leaves a trace
            info!("settings row tapped: {item}");
            app.set_message(format!("{item} is not available yet"));
        }
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);
    }

    // Theme switch row
    ui.horizontal(|ui| {
        ui.add_space(4.0);
        ui.label(RichText::new("Theme").size(16.0).color(theme.text()));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let mut dark = app.theme.is_dark();
            if toggle_switch(ui, &mut dark).changed() {
                app.toggle_theme();
            }
        });
    });

    if app.show_settings_message() {
        ui.add_space(8.0);
        ui.label(RichText::new(&app.settings_message).size(12.0).color(ACCENT));
    }

    ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("FinPay v{VERSION}"))
                .size(11.0)
                .color(theme.muted_text()),
        );
    });
}

/// Renders the cards placeholder screen.
pub fn render_cards_screen(app: &mut FinPayApp, ui: &mut Ui) {
    render_placeholder(app, ui, "💳", "My Cards");
}

/// Renders the statistics placeholder screen.
pub fn render_stats_screen(app: &mut FinPayApp, ui: &mut Ui) {
    render_placeholder(app, ui, "📊", "Statistics");
}

fn render_placeholder(app: &mut FinPayApp, ui: &mut Ui, icon: &str, title: &str) {
    let theme = app.theme;
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(40.0));
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(20.0).color(theme.text()));
        ui.label(RichText::new("Coming soon").size(13.0).color(theme.muted_text()));
    });
}
