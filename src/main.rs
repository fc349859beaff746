// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, Flags};
use folio::error::Result;
use folio::logging;
use folio::ui::state::Panel;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Folio - personal portfolio viewer

USAGE:
  folio [OPTIONS] [IMAGE]...

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --content <FILE>       Portfolio TOML replacing the built-in content
  --panel <NAME>         Panel shown at startup: overview, journey or gallery

ARGS:
  [IMAGE]...             Images preloaded into the gallery
";

fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let content = args.opt_value_from_os_str("--content", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let panel = args
        .opt_value_from_str::<_, Panel>("--panel")?
        .unwrap_or_default();
    let image_paths = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect::<Vec<_>>();

    Ok(Some(Flags {
        lang,
        config_dir,
        content,
        panel,
        image_paths,
    }))
}

fn main() -> ExitCode {
    logging::init();

    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "folio exited with an error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn no_arguments_give_defaults() {
        let flags = parse_args(args(&[])).unwrap().unwrap();
        assert_eq!(flags.panel, Panel::Overview);
        assert!(flags.lang.is_none());
        assert!(flags.image_paths.is_empty());
    }

    #[test]
    fn options_and_images_are_parsed() {
        let flags = parse_args(args(&[
            "--lang", "fr", "--panel", "Gallery", "--content", "me.toml", "a.png", "b.jpg",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.panel, Panel::Gallery);
        assert_eq!(flags.content, Some(PathBuf::from("me.toml")));
        assert_eq!(
            flags.image_paths,
            [PathBuf::from("a.png"), PathBuf::from("b.jpg")]
        );
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn unknown_panel_is_an_error() {
        assert!(parse_args(args(&["--panel", "blog"])).is_err());
    }
}
