use clap::Parser;

fn main() {
    // a missing .env is fine; keys may come from the shell instead
    let _ = dotenvy::dotenv();

    let cli = gpr_deploy::cli::Cli::parse();

    if let Err(err) = gpr_deploy::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
