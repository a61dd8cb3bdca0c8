use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use chatmark::host::StyleRule;
use chatmark::{Config, EscapePolicy, Renderer, parse, tokenize};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = chatmark::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, escape_html } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if escape_html {
                cfg.escape = EscapePolicy::Html;
            }

            let input = read_all(file.as_ref())?;
            print!("{}", Renderer::new(&cfg).render(&input));
            Ok(())
        }
        Commands::Tokens { file, json } => {
            let input = read_all(file.as_ref())?;
            let tokens = tokenize(&input);

            if json {
                let out = serde_json::to_string_pretty(&tokens)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{out}");
            } else {
                for token in &tokens {
                    println!("{:?} {:?}", token.kind, token.text);
                }
            }
            Ok(())
        }
        Commands::Parse { file } => {
            let input = read_all(file.as_ref())?;
            let tree = parse(&input);
            println!("{:#?}", tree);
            Ok(())
        }
        Commands::Css => {
            let cfg = load_config(cli.config.as_deref(), &None)?;
            println!("{}", StyleRule::strike(&cfg.strike_class));
            Ok(())
        }
    }
}
