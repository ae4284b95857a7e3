fn main() {
    if let Err(error) = imagery_rs::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
