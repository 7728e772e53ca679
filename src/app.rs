// MIT License
// Copyright (c) The FinPay Developers 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions.
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


// External crates
use eframe::egui::{CentralPanel, Context, Frame, Margin, Visuals};
use log::{debug, info};
use paste::paste;

// Standard library
use std::time::Instant;

// local
use crate::define_generic_messages;
use crate::define_screen_messages;
use crate::timed_message;
use crate::footer::render_footer;
use crate::screens::{
    render_cards_screen, render_home_screen, render_settings_screen, render_stats_screen,
};
use crate::theme::{Screen, Theme};


pub static VERSION: &str = "0.1.0";


pub struct FinPayApp {
    // Core application state
    pub active_screen: Screen, // Currently visible screen (Home, Cards, ...)
    pub theme: Theme,          // UI theme (Light or Dark)

    // Inline status messages, one slot per screen
    pub home_message: String,
    pub home_message_time: Option<Instant>,
    pub cards_message: String,
    pub cards_message_time: Option<Instant>,
    pub stats_message: String,
    pub stats_message_time: Option<Instant>,
    pub settings_message: String,
    pub settings_message_time: Option<Instant>,
}

impl Default for FinPayApp {
    fn default() -> Self {
        Self {
            active_screen: Screen::Home, // Start on the home screen
            theme: Theme::Light,         // Light mode is the base palette

            home_message: String::new(),
            home_message_time: None,
            cards_message: String::new(),
            cards_message_time: None,
            stats_message: String::new(),
            stats_message_time: None,
            settings_message: String::new(),
            settings_message_time: None,
        }
    }
}

impl FinPayApp {
    define_screen_messages!(home, 3.0);
    define_screen_messages!(cards, 3.0);
    define_screen_messages!(stats, 3.0);
    define_screen_messages!(settings, 3.0);

    // Switches to the given screen, a no-op when it is already active
    pub fn navigate(&mut self, screen: Screen) {
        if self.active_screen == screen {
            return;
        }
        info!("navigate: {:?} -> {:?}", self.active_screen, screen);
        self.active_screen = screen;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("theme switched to {:?}", self.theme);
    }
}

impl eframe::App for FinPayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Apply theme
        ctx.set_visuals(match self.theme {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        });

        // Bottom navigation, shared by every screen
        render_footer(self, ctx);

        // Main content panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .fill(self.theme.background())
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| match self.active_screen {
                Screen::Home => render_home_screen(self, ui),
                Screen::Cards => render_cards_screen(self, ui),
                Screen::Stats => render_stats_screen(self, ui),
                Screen::Settings => render_settings_screen(self, ui),
            });

        ctx.request_repaint();
    }
}

define_generic_messages!(
    (Home, home),
    (Cards, cards),
    (Stats, stats),
    (Settings, settings)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_in_light_mode() {
        let app = FinPayApp::default();
        assert_eq!(app.active_screen, Screen::Home);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn navigate_switches_to_the_requested_screen() {
        let mut app = FinPayApp::default();
        app.navigate(Screen::Settings);
        assert_eq!(app.active_screen, Screen::Settings);

        // Navigating to the active screen changes nothing
        app.navigate(Screen::Settings);
        assert_eq!(app.active_screen, Screen::Settings);
    }

    #[test]
    fn toggle_theme_flips_both_ways() {
        let mut app = FinPayApp::default();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn message_targets_the_active_screen() {
        let mut app = FinPayApp::default();
        app.set_message("history is not available yet");
        assert!(app.show_home_message());
        assert!(!app.show_settings_message());
        assert_eq!(app.home_message, "history is not available yet");

        app.navigate(Screen::Settings);
        app.set_message("Language is not available yet");
        assert!(app.show_settings_message());
        assert_eq!(app.settings_message, "Language is not available yet");
    }

    #[test]
    fn clear_message_hides_it() {
        let mut app = FinPayApp::default();
        app.set_message("hello");
        assert!(app.show_message());
        app.clear_message();
        assert!(!app.show_message());
    }
}
