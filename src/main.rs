use std::io;

fn main() -> io::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    chess_rules::cli::run(stdin.lock(), stdout.lock())
}
