use std::io;
use std::process;

use hotelsql::config;
use hotelsql::core::db::ConnectionHandle;
use hotelsql::input::Prompter;
use hotelsql::menu;
use tracing::{info, warn};

const USAGE: &str = "Usage: hotelsql <dbname> <port> <user>";

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting hotelsql...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    let dbname = &args[0];
    let port: u16 = match args[1].parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("invalid port '{}'", args[1]);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    let user = &args[2];

    let cfg = config::load().unwrap_or_else(|e| {
        warn!("ignoring configuration: {}", e);
        config::Config::default()
    });

    menu::greeting();

    println!("Connecting to database...");
    let mut handle = match ConnectionHandle::connect(&cfg.host, port, dbname, user, &cfg.password)
    {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error - Unable to Connect to Database: {}", e);
            eprintln!("Make sure postgres is running on {}:{}", cfg.host, port);
            process::exit(1);
        }
    };
    println!("Done");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let outcome = menu::run(&mut handle, &mut prompter);
    drop(prompter);

    println!("Disconnecting from database...");
    handle.close();
    println!("Done\n\nBye !");

    if let Err(e) = outcome {
        eprintln!("{}", e);
        process::exit(1);
    }
}
