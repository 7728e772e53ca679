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

/// ---------------------- Timed message macro ----------------------
/// Generates setter and checker for a message with a display duration
#[macro_export]
macro_rules! timed_message {
    ($set_fn:ident, $show_fn:ident, $field:ident, $time_field:ident, $duration:expr) => {
        pub fn $set_fn(&mut self, msg: impl Into<String>) {
            self.$field = msg.into();
            self.$time_field = Some(std::time::Instant::now());
        }

        pub fn $show_fn(&self) -> bool {
            match self.$time_field {
                Some(t) => t.elapsed().as_secs_f32() < $duration,
                None => false,
            }
        }
    };
}

/// ---------------------- Screen-specific messages ----------------------
/// Generates the inline status message helpers for one screen
#[macro_export]
macro_rules! define_screen_messages {
    ($screen:ident, $inline_dur:expr) => {
        paste! {
            timed_message!(
                [<set_ $screen _message>],
                [<show_ $screen _message>],
                [<$screen _message>],
                [<$screen _message_time>],
                $inline_dur
            );
        }
    };
}

/// ---------------------- Generic active-screen messages ----------------------
/// Generates generic methods for all screens passed: set/show/clear message
#[macro_export]
macro_rules! define_generic_messages {
    ($(($enum_variant:ident, $name:ident)),+) => {
        paste! {
            impl FinPayApp {
                pub fn set_message(&mut self, msg: impl Into<String>) {
                    match self.active_screen {
                        $(Screen::$enum_variant => self.[<set_ $name _message>](msg),)+
                    }
                }

                pub fn show_message(&self) -> bool {
                    match self.active_screen {
                        $(Screen::$enum_variant => self.[<show_ $name _message>](),)+
                    }
                }

                pub fn clear_message(&mut self) {
                    match self.active_screen {
                        $(Screen::$enum_variant => self.[<$name _message_time>] = None,)+
                    }
                }
            }
        }
    }
}
