// SPDX-License-Identifier: MPL-2.0
use feedline::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        display_name: args.opt_value_from_str("--user").unwrap_or(None),
    };

    app::run(flags)
}
