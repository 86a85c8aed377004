use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use list_tree::cli::Cli;
use list_tree::core::render_tree;
use list_tree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    list_tree::logging::init_logging();

    let root = match list_tree::resolve_root(cli.path.as_deref()) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("list-tree: {err:#}");
            return ExitCode::from(1);
        }
    };

    match std::fs::metadata(&root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            eprintln!("list-tree: {}: Not a directory", root.display());
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("list-tree: {}: {}", root.display(), err);
            return ExitCode::from(1);
        }
    }

    let options = cli.render_options();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = writeln!(out, "{}", list_tree::banner(&root)) {
        eprintln!("list-tree: {err}");
        return ExitCode::from(1);
    }

    match render_tree(&RealFileSystem, &root, &options, &mut out).await {
        Ok(summary) => {
            debug!(
                directories = summary.directories,
                files = summary.files,
                others = summary.others,
                "render complete"
            );
            if !summary.errors.is_empty() {
                warn!(count = summary.errors.len(), "some entries could not be read");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = out.flush();
            eprintln!("list-tree: {err:#}");
            ExitCode::from(1)
        }
    }
}
