//! clockon main entrypoint.

use clockon::run;
use clockon::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
