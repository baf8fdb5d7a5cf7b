use clap::{ArgGroup, Parser};

mod config;
mod provision;

#[derive(Parser, Debug)]
#[command(name = "mprov")]
#[command(about = "mprov - provisions slave registrations against a cluster master")]
#[command(group(ArgGroup::new("action").required(true)))]
struct Args {
    /// IP/hostname of the master
    #[arg(short, long)]
    master: Option<String>,

    /// Use https
    #[arg(short = 's', long)]
    https: bool,

    /// Creates slaves for the docker slaves and activates them
    #[arg(short = 'c', long = "createSlaves", group = "action")]
    create_slaves: bool,
}

fn main() {
    let args = Args::parse();

    let config = match config::parse_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let (master, https) = config::resolve(args.master, args.https, config);

    if args.create_slaves {
        if let Err(e) = provision::handle_create_slaves(&master, https) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
