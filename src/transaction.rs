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


// External crates
use eframe::egui::Color32;

// local
use crate::theme::{ACCENT, Theme};

// A single entry of the home screen transaction list
// Amounts are pre-formatted display strings, not numeric values
#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    // Merchant or counterparty name
    pub name: &'static str,

    // Spending category shown under the name
    pub category: &'static str,

    // Pre-formatted amount, sign included
    pub amount: &'static str,

    // Logo glyph shown on the left of the row
    pub icon: &'static str,

    // True for incoming amounts, always rendered in the accent color
    pub positive: bool,

    // Tint the logo white when dark mode is active
    pub apply_tint: bool,

    // Extra dark-mode tint for logos drawn in dark ink
    pub dark_mode_tint: bool,
}

impl Transaction {
    // Color of the amount text under the given theme
    pub fn amount_color(&self, theme: Theme) -> Color32 {
        if self.positive { ACCENT } else { theme.text() }
    }

    // White logo tint when dark mode asks for one, None keeps the logo untouched
    pub fn icon_tint(&self, theme: Theme) -> Option<Color32> {
        if theme.is_dark() && (self.apply_tint || self.dark_mode_tint) {
            Some(Color32::WHITE)
        } else {
            None
        }
    }
}

// The hardcoded rows shown under "Transaction" on the home screen
pub const RECENT_TRANSACTIONS: [Transaction; 4] = [
    Transaction {
        name: "Apple Store",
        category: "Entertainment",
        amount: "- $5.99",
        icon: "🍎",
        positive: false,
        apply_tint: true,
        dark_mode_tint: false,
    },
    Transaction {
        name: "Spotify",
        category: "Music",
        amount: "- $12.99",
        icon: "🎵",
        positive: false,
        apply_tint: false,
        dark_mode_tint: false,
    },
    Transaction {
        name: "Money Transfer",
        category: "Transaction",
        amount: "$300",
        icon: "💱",
        positive: true,
        apply_tint: false,
        dark_mode_tint: true,
    },
    Transaction {
        name: "Grocery",
        category: "Shopping",
        amount: "- $88",
        icon: "🛒",
        positive: false,
        apply_tint: false,
        dark_mode_tint: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> Transaction {
        *RECENT_TRANSACTIONS
            .iter()
            .find(|t| t.name == name)
            .expect("row present")
    }

    #[test]
    fn positive_amount_is_accent_in_both_themes() {
        let transfer = row("Money Transfer");
        assert!(transfer.positive);
        assert_eq!(transfer.amount_color(Theme::Light), ACCENT);
        assert_eq!(transfer.amount_color(Theme::Dark), ACCENT);
    }

    #[test]
    fn negative_amount_follows_theme_text() {
        let spotify = row("Spotify");
        assert_eq!(spotify.amount_color(Theme::Light), Theme::Light.text());
        assert_eq!(spotify.amount_color(Theme::Dark), Color32::WHITE);
    }

    #[test]
    fn icon_tint_only_in_dark_mode_with_a_flag() {
        let apple = row("Apple Store");
        let transfer = row("Money Transfer");
        let grocery = row("Grocery");

        assert_eq!(apple.icon_tint(Theme::Light), None);
        assert_eq!(apple.icon_tint(Theme::Dark), Some(Color32::WHITE));
        assert_eq!(transfer.icon_tint(Theme::Dark), Some(Color32::WHITE));
        assert_eq!(grocery.icon_tint(Theme::Dark), None);
    }

    #[test]
    fn list_matches_the_fixed_rows() {
        let names: Vec<&str> = RECENT_TRANSACTIONS.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Apple Store", "Spotify", "Money Transfer", "Grocery"]
        );
    }
}
