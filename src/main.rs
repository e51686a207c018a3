fn main() {
    if let Err(e) = rentcar::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
