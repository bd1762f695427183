use anyhow::Result;
use clap::{arg, command};
use mosaic::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("Mosaic Check")
        .about("Checks the mosaic configuration file")
        .args(&[
            arg!(-v --verbose "Outputs the loaded configuration."),
            arg!([INPUT] "Sets the config file to check. Uses the default location otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    if verbose {
        mosaic::logging::setup_logging("debug")?;
    }
    let path = match matches.get_one::<String>("INPUT") {
        Some(path) => PathBuf::from(path),
        None => mosaic::default_path()?,
    };

    println!(
        "\x1b[0;94m::\x1b[0m Mosaic version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m Loading configuration from {} . . .",
        path.display()
    );
    let config = match mosaic::load_from_path(&path) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed: {err:?} \x1b[0m");
            return Ok(());
        }
    };
    if verbose {
        print_effective(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking values . . .");
    match config.check() {
        Ok(()) => println!("\x1b[0;92m    -> Values OK \x1b[0m"),
        Err(err) => println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m"),
    }
    Ok(())
}

fn print_effective(config: &Config) {
    use mosaic_core::Config as _;
    println!(":: log_level: {}", config.log_level);
    println!(":: window spacing: {}px", config.window_spacing());
    println!(":: drag tick: {:?}", config.drag_tick());
    println!(":: settle delay: {:?}", config.settle_delay());
    println!(":: startup delay: {:?}", config.startup_delay());
    println!(":: sweep interval: {:?}", config.sweep_interval());
}
