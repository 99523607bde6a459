use iced_compare::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let mut positional = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());

    let flags = Flags {
        lang,
        left: positional.next(),
        right: positional.next(),
    };

    app::run(flags)
}
