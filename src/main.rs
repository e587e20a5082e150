// SPDX-License-Identifier: MPL-2.0
use iced_chip::app::{self, Flags};

const USAGE: &str = "\
Usage: iced_chip [OPTIONS]

Options:
  --title <TEXT>      Chip title
  --subtitle <TEXT>   Chip subtitle
  --progress          Show a progress indicator instead of the icon
  --sticky            Keep the chip up until dismissed
  -h, --help          Print this help";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        title: args.opt_value_from_str("--title")?,
        subtitle: args.opt_value_from_str("--subtitle")?,
        progress: args.contains("--progress"),
        sticky: args.contains("--sticky"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            println!("{USAGE}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}
