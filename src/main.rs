fn main() {
    if let Err(e) = pourbaix_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
