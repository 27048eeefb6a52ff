fn main() {
    if let Err(e) = file_search_engine::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
