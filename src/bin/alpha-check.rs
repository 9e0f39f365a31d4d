use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use alpha_check::report::{self, MISSING_PATH_MESSAGE};

#[derive(Parser)]
#[command(
    name = "alpha-check",
    about = "Report whether an image contains any non-opaque pixels",
    version,
    after_help = "Images without an alpha channel are converted to RGBA before scanning.\n\
                  Set RUST_LOG=debug for decoder diagnostics on stderr."
)]
struct Cli {
    /// Image file to inspect
    #[arg(allow_hyphen_values = true)]
    image: Option<PathBuf>,

    /// Anything after the image path is accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(path) = cli.image else {
        println!("{MISSING_PATH_MESSAGE}");
        return;
    };
    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.extra.len());
    }

    // Check failures are reported on stdout and still exit 0; only a broken
    // stdout is fatal.
    let stdout = io::stdout();
    if let Err(e) = report::write_report(&mut stdout.lock(), &path) {
        eprintln!("Fatal: failed to write report: {e}");
        process::exit(1);
    }
}
