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

mod app;
mod footer;
mod helper;
mod screens;
mod theme;
mod transaction;
mod widgets;

#[macro_use]
mod macros;


// External crates
use eframe::{self, App, NativeOptions, egui};
use log::info;

// local
use crate::app::FinPayApp;
use crate::helper::init_logging;


fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    init_logging("debug.log");
    info!("starting FinPay");

    // Window options, sized like a phone screen
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 760.0])
            .with_min_inner_size([320.0, 600.0]),
        ..Default::default()
    };

    // Run native eframe app
    eframe::run_native(
        "FinPay",
        options,
        Box::new(|_cc| Ok(Box::new(FinPayApp::default()) as Box<dyn App>)),
    )
}
