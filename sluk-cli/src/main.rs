//! Binary entrypoint for sluk-cli.

fn main() {
    if let Err(err) = sluk_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
