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

use eframe::egui::Color32;

/// Accent color used for the active route, "See All" and positive amounts.
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);

const LIGHT_BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf2, 0xf5);
const DARK_BACKGROUND: Color32 = Color32::from_rgb(0x00, 0x04, 0x35);
const DARK_FOOTER: Color32 = Color32::from_rgb(0x08, 0x0e, 0x4b);
const INK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const MUTED: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
const FADED: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
const NEAR_BLACK: Color32 = Color32::from_rgb(0x05, 0x05, 0x05);

// UI theme settings for the application
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    Light, // Light mode visuals
    Dark,  // Dark mode visuals
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    // The other variant, used by the settings switch
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // Screen background
    pub fn background(self) -> Color32 {
        match self {
            Theme::Light => LIGHT_BACKGROUND,
            Theme::Dark => DARK_BACKGROUND,
        }
    }

    // Bottom navigation background
    pub fn footer_background(self) -> Color32 {
        match self {
            Theme::Light => LIGHT_BACKGROUND,
            Theme::Dark => DARK_FOOTER,
        }
    }

    // Primary text (names, titles, amounts)
    pub fn text(self) -> Color32 {
        match self {
            Theme::Light => INK,
            Theme::Dark => Color32::WHITE,
        }
    }

    // Secondary text (the greeting line)
    pub fn muted_text(self) -> Color32 {
        match self {
            Theme::Light => MUTED,
            Theme::Dark => Color32::WHITE,
        }
    }

    // Transaction category text
    pub fn category_text(self) -> Color32 {
        match self {
            Theme::Light => FADED,
            Theme::Dark => Color32::WHITE,
        }
    }

    // Quick action labels
    pub fn action_text(self) -> Color32 {
        match self {
            Theme::Light => NEAR_BLACK,
            Theme::Dark => Color32::WHITE,
        }
    }

    // Default icon color for untinted icons (search, inactive footer items)
    pub fn icon_color(self) -> Color32 {
        match self {
            Theme::Light => Color32::BLACK,
            Theme::Dark => Color32::WHITE,
        }
    }
}

// Screens reachable from the bottom navigation
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Home,     // Profile header, card, actions, transactions
    Cards,    // Placeholder
    Stats,    // Placeholder
    Settings, // Settings rows and the theme switch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn dark_theme_resolves_dark_palette() {
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::Dark.background(), DARK_BACKGROUND);
        assert_eq!(Theme::Dark.footer_background(), DARK_FOOTER);
        assert_eq!(Theme::Dark.text(), Color32::WHITE);
        assert_eq!(Theme::Dark.muted_text(), Color32::WHITE);
        assert_eq!(Theme::Dark.category_text(), Color32::WHITE);
        assert_eq!(Theme::Dark.action_text(), Color32::WHITE);
        assert_eq!(Theme::Dark.icon_color(), Color32::WHITE);
    }

    #[test]
    fn light_theme_resolves_light_palette() {
        assert!(!Theme::Light.is_dark());
        assert_eq!(Theme::Light.background(), LIGHT_BACKGROUND);
        assert_eq!(Theme::Light.footer_background(), LIGHT_BACKGROUND);
        assert_eq!(Theme::Light.text(), INK);
        assert_eq!(Theme::Light.muted_text(), MUTED);
        assert_eq!(Theme::Light.category_text(), FADED);
        assert_eq!(Theme::Light.action_text(), NEAR_BLACK);
        assert_eq!(Theme::Light.icon_color(), Color32::BLACK);
    }
}
