//! Racebench binary entry point.

fn main() {
    if let Err(e) = racebench::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
