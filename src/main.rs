use clap::Parser;
use forecourt::cli::{self, Args};

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli::run(&args) {
        Ok(path) => println!("Saved editable PPTX to {}", path.display()),
        Err(e) if e.is_validation() => {
            eprintln!("Validation error: {}", e);
            std::process::exit(2);
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}
