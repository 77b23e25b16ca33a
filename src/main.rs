mod archive;
mod cli;
mod collapse;
mod config;
mod errors;
mod export;
mod input;
mod logging;
mod render;
mod session;
mod tree;

use clap::Parser;
use cli::Args;
use config::FileConfig;
use errors::Result;
use session::{Session, Toggle};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(msg) = args.validate() {
        eprintln!("Error: {}", msg);
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let mut session = Session::new(args.settings(&file_config));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(archive) = &args.archive {
        session.load(archive)?;

        for path in &args.collapse {
            if session.collapse(path)? == Toggle::Ignored {
                eprintln!("Warning: '{}' is not a directory; not collapsed", path);
            }
        }

        let views = session.views()?;
        input::write_views(&mut out, &views, &args.view.views())?;

        for target in &args.export {
            let path = session.export(*target)?;
            eprintln!("Exported {}", path.display());
        }
    }

    if args.interactive {
        let prompt = atty::is(atty::Stream::Stdin);
        let stdin = io::stdin();
        input::run(&mut session, stdin.lock(), &mut out, &mut io::stderr(), prompt)?;
    }

    out.flush()?;
    Ok(())
}
