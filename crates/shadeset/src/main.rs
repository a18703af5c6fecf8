#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = shadeset::run_from_env() {
        eprintln!("shadeset: {error}");
        std::process::exit(error.exit_code());
    }
}
