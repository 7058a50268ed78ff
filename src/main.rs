// SPDX-License-Identifier: MPL-2.0
use tafel::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        config_path: args.opt_value_from_str("--config").ok().flatten(),
    };

    app::run(flags)
}
