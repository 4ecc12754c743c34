// SPDX-License-Identifier: MPL-2.0
use tujiinue::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap_or(None),
    };

    app::run(flags)
}
