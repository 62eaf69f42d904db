use cidr_set::config::Config;
use cidr_set::output::print_set;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!("log4rs config '{}' not loaded: {e}", config.log_config);
    }
    if let Some(color) = config.color {
        colored::control::set_override(color);
    }
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cidr_set::build_set(&args) {
        Ok(set) => print_set(&set),
        Err(e) => {
            log::error!("ERR {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
