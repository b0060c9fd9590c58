use std::env;

use cookstack::{load_cookbook, AppConfig, CookStackError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the cookbook name from command-line arguments
    let args: Vec<String> = env::args().collect();
    let name = args
        .get(1)
        .ok_or("Please provide a cookbook file as an argument")?;

    let config = AppConfig::load().map_err(CookStackError::Config)?;
    let book = load_cookbook(config.resolve_path(name))?;
    println!("{}", book);

    Ok(())
}
