//! ics2csv main entrypoint.

use ics2csv::run;
use ics2csv::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
