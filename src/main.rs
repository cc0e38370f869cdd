//! vacaplan main entrypoint.

use vacaplan::run;

fn main() {
    if let Err(e) = run() {
        vacaplan::ui::messages::error(e);
        std::process::exit(1);
    }
}
