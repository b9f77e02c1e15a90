fn main() {
    // Delegate to the CLI runner; only I/O failures reach this channel.
    if let Err(err) = bitcols::cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
