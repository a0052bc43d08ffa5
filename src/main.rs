//! VeroTrade main entrypoint.

use verotrade::run;
use verotrade::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
