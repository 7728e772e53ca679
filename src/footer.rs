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
use eframe::egui::{Color32, Context, Frame, Margin, RichText, Sense, TopBottomPanel};

// local
use crate::app::FinPayApp;
use crate::theme::{ACCENT, Screen, Theme};

// One entry of the bottom navigation bar
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: Screen,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", icon: "🏠", screen: Screen::Home },
    NavItem { label: "Cards", icon: "💳", screen: Screen::Cards },
    NavItem { label: "Stats", icon: "📊", screen: Screen::Stats },
    NavItem { label: "Settings", icon: "⚙", screen: Screen::Settings },
];

// The item matching the active screen is highlighted, the rest follow the theme
pub fn icon_color(item: Screen, active: Screen, theme: Theme) -> Color32 {
    if item == active { ACCENT } else { theme.icon_color() }
}

/// Renders the shared bottom navigation footer.
pub fn render_footer(app: &mut FinPayApp, ctx: &Context) {
    TopBottomPanel::bottom("footer")
        .frame(
            Frame::default()
                .fill(app.theme.footer_background())
                .inner_margin(Margin::symmetric(8, 12)),
        )
        .show(ctx, |ui| {
            ui.columns(NAV_ITEMS.len(), |cols| {
                for (col, item) in cols.iter_mut().zip(&NAV_ITEMS) {
                    let color = icon_color(item.screen, app.active_screen, app.theme);
                    let response = col
                        .vertical_centered(|ui| {
                            ui.label(RichText::new(item.icon).size(18.0).color(color));
                            ui.label(RichText::new(item.label).size(11.0).color(color));
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        app.navigate(item.screen);
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_is_highlighted() {
        assert_eq!(icon_color(Screen::Home, Screen::Home, Theme::Light), ACCENT);
        assert_eq!(icon_color(Screen::Settings, Screen::Settings, Theme::Dark), ACCENT);
    }

    #[test]
    fn inactive_items_follow_the_theme() {
        assert_eq!(
            icon_color(Screen::Cards, Screen::Home, Theme::Light),
            Color32::BLACK
        );
        assert_eq!(
            icon_color(Screen::Cards, Screen::Home, Theme::Dark),
            Color32::WHITE
        );
    }

    #[test]
    fn every_screen_has_one_nav_item() {
        for screen in [Screen::Home, Screen::Cards, Screen::Stats, Screen::Settings] {
            assert_eq!(
                NAV_ITEMS.iter().filter(|i| i.screen == screen).count(),
                1,
                "{screen:?}"
            );
        }
    }
}
