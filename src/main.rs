// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
IcedFolio - architecture portfolio viewer

USAGE:
  iced_folio [OPTIONS] [SLUG]

ARGS:
  <SLUG>                Project to open directly in its gallery

OPTIONS:
      --lang <LOCALE>       UI language override (e.g. de-DE, en-US)
      --config-dir <DIR>    Directory holding settings.toml
      --assets-dir <DIR>    Directory holding the catalog images
  -h, --help                Print this help
  -V, --version             Print the version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains(["-V", "--version"]) {
        println!("iced_folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap();
    let config_dir = args.opt_value_from_str("--config-dir").unwrap();
    let assets_dir = args.opt_value_from_str("--assets-dir").unwrap();

    // Directory overrides must be in place before anything resolves paths.
    paths::init_cli_overrides(config_dir, assets_dir);

    let flags = Flags {
        lang,
        slug: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
