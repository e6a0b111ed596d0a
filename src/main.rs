//! groombook main entrypoint.

use groombook::run;
use groombook::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
