//! fuellog main entrypoint.

use fuellog::run;
use fuellog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
