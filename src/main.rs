//! lw - Lanework CLI entry point.

use lanework::cli;
use lanework::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
