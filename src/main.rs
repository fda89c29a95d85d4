use std::net::IpAddr;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;

use clap::parser::MatchesError;
use clap::{value_parser, Arg, Command};

use albums_client::actions::album_actions::HttpAlbumApi;
use albums_client::config::{AlbumsConfig, DEFAULT_CONFIG_PATH};
use albums_client::logging;
use albums_client::ui::{terminal, web};

enum Mode {
    Serve {
        address: Option<IpAddr>,
        port: Option<u16>,
    },
    Tui,
}

struct Args {
    config_path: String,
    api_base: Option<String>,
    mode: Mode,
}

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .required(false)
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("api")
                .long("api")
                .required(false)
                .help("Base URL of the album API"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Serve the album page to the browser")
                .arg(
                    Arg::new("address")
                        .long("address")
                        .value_parser(value_parser!(IpAddr)),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .value_parser(value_parser!(u16)),
                ),
        )
        .subcommand(Command::new("tui").about("Browse albums in the terminal"))
}

fn parse_cli_args() -> Result<Args, MatchesError> {
    let matches = cli().get_matches();
    let mode = match matches.subcommand() {
        Some(("serve", serve)) => Mode::Serve {
            address: serve.try_get_one::<IpAddr>("address")?.copied(),
            port: serve.try_get_one::<u16>("port")?.copied(),
        },
        _ => Mode::Tui,
    };
    let args = Args {
        config_path: matches
            .try_get_one::<String>("config")?
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
        api_base: matches.try_get_one::<String>("api")?.cloned(),
        mode,
    };
    Ok(args)
}

#[rocket::main]
async fn main() {
    let args = parse_cli_args().unwrap_or_else(|err| {
        eprintln!("Error parsing arguments: {}", err);
        exit(1);
    });

    let mut config = AlbumsConfig::load(Path::new(&args.config_path)).unwrap_or_else(|err| {
        eprintln!("{}", err);
        exit(1);
    });
    if let Some(api_base) = args.api_base {
        config.api_base = api_base;
    }
    let api_base = config.api_base_url().unwrap_or_else(|err| {
        eprintln!("{}", err);
        exit(1);
    });
    let api = HttpAlbumApi::new(api_base);

    match args.mode {
        Mode::Serve { address, port } => {
            logging::init_stderr();
            let address = address.unwrap_or(config.address);
            let port = port.unwrap_or(config.port);
            if let Err(err) = web::serve(Arc::new(api), address, port).await {
                eprintln!("Server error: {}", err);
                exit(1);
            }
        }
        Mode::Tui => {
            if let Err(err) = logging::init_file(&config.log_file) {
                eprintln!(
                    "Cannot open log file {}: {}",
                    config.log_file.display(),
                    err
                );
                exit(1);
            }
            tracing::info!(api = %config.api_base, "Starting terminal front-end");
            if let Err(err) = terminal::run(api).await {
                eprintln!("{}", err);
                exit(1);
            }
        }
    }
}
