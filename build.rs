use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

#[path = "src/cli.rs"]
mod cli;

const BIN_NAME: &str = "chatmark";

/// Completion scripts go to `$OUT_DIR/completions`.
fn generate_completions(cmd: &mut Command, out_dir: &Path) -> Result<()> {
    let dir = out_dir.join("completions");
    fs::create_dir_all(&dir)?;
    for shell in [Shell::Bash, Shell::Fish, Shell::Zsh, Shell::PowerShell] {
        generate_to(shell, cmd, BIN_NAME, &dir)?;
    }
    Ok(())
}

fn write_man_page(cmd: Command, title: &str, dir: &Path) -> Result<()> {
    let mut page = Vec::new();
    Man::new(cmd).title(title).render(&mut page)?;
    fs::write(dir.join(format!("{title}.1")), page)
}

/// One page for `chatmark` and one per subcommand (`chatmark-render.1`, ...)
/// under `$OUT_DIR/man`.
fn generate_man_pages(cmd: &Command, out_dir: &Path) -> Result<()> {
    let dir = out_dir.join("man");
    fs::create_dir_all(&dir)?;

    write_man_page(cmd.clone(), BIN_NAME, &dir)?;
    for sub in cmd.get_subcommands().filter(|sub| sub.get_name() != "help") {
        let title = format!("{BIN_NAME}-{}", sub.get_name());
        write_man_page(sub.clone(), &title, &dir)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };

    let mut cmd = cli::Cli::command();
    cmd.build();
    generate_completions(&mut cmd, &out_dir)?;
    generate_man_pages(&cmd, &out_dir)?;
    Ok(())
}
