use clap::Parser;
use seqi::{script, Cli, Error};

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprint!("error ({:?})", e.get_kind());
        if let Some(e) = e.get_error() {
            eprint!(": {}", e)
        }
        eprintln!();
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let stdout = std::io::stdout();
    script::run(cli, cli.input()?, &mut stdout.lock())?;
    Ok(())
}
