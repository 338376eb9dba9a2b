#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_complete::{generate_to, shells::Shell, Generator};

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...",
        );
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut clap::Command, out_dir: &Path) -> Result<()>
where
    G: Generator,
{
    generate_to(to_generate, cmd, "tblsort", out_dir)?;

    Ok(())
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/tblsort/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/tblsort/manpage/";

    match env::var_os("TBLSORT_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut app = args::Args::command();
            generate_completions(Shell::Bash, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut app, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut app, &completion_out_dir)?;

            // Generate manpage
            let app = app.name("tblsort");
            let man = clap_mangen::Man::new(app);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("tblsort.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=TBLSORT_GENERATE");

    Ok(())
}
