// SPDX-License-Identifier: MPL-2.0
use promptlens::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
