//! Command-line host: prints one level of a library manifest.
//!
//! ```text
//! folio --path Reports --filter 20
//! folio --manifest library.json --path Reports/2023 --preview q4-summary.pdf
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use thiserror::Error;
    use tracing_subscriber::EnvFilter;

    use folio::config::{LIBRARY_MANIFEST, ROOT_LABEL};
    use folio::core::{LevelView, Listing, ManifestError, Navigator, PathError, TextPreview};
    use folio::models::{DirectoryNode, Manifest};

    #[derive(Parser, Debug)]
    #[command(
        name = "folio",
        about = "Browse a library manifest one folder at a time",
        version = env!("CARGO_PKG_VERSION")
    )]
    struct Args {
        /// Manifest file (defaults to the embedded demo library)
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Folder to show, slash separated
        #[arg(short, long, default_value = "")]
        path: String,

        /// Case-sensitive substring filter on entry names
        #[arg(short, long, value_name = "QUERY")]
        filter: Option<String>,

        /// File in the folder to preview
        #[arg(long, value_name = "NAME")]
        preview: Option<String>,

        /// Label of the library root
        #[arg(long, default_value = ROOT_LABEL)]
        root_name: String,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    }

    #[derive(Debug, Error)]
    enum CliError {
        #[error(transparent)]
        Manifest(#[from] ManifestError),
        #[error(transparent)]
        Path(#[from] PathError),
    }

    pub fn main() -> ExitCode {
        let args = Args::parse();

        let level = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        match run(&args) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        }
    }

    fn run(args: &Args) -> Result<String, CliError> {
        let manifest = match &args.manifest {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading manifest");
                Manifest::from_path(path)?
            }
            None => Manifest::from_json(LIBRARY_MANIFEST)?,
        };
        let tree = DirectoryNode::from_manifest(&args.root_name, &manifest);

        let mut nav = Navigator::new(tree, &args.path);
        if let Some(query) = &args.filter {
            nav.set_filter(query);
        }
        if let Some(name) = &args.preview {
            nav.select_file(name)?;
        }

        match nav.view(&TextPreview) {
            LevelView::Listing(listing) => Ok(render_listing(&args.root_name, &listing)),
            LevelView::Unresolved(unresolved) => Err(unresolved.error.into()),
        }
    }

    fn render_listing(root_name: &str, listing: &Listing<String>) -> String {
        let mut lines = Vec::new();

        let trail: Vec<String> = std::iter::once(root_name.to_string())
            .chain(listing.breadcrumbs.iter().map(|crumb| {
                if crumb.is_current {
                    format!("[{}]", crumb.label)
                } else {
                    crumb.label.clone()
                }
            }))
            .collect();
        lines.push(trail.join(" / "));
        lines.push(format!("{} ({})", listing.name, listing.item_count));
        if let Some(query) = &listing.filter {
            lines.push(format!("filter: {:?}", query));
        }
        lines.push(String::new());

        for folder in &listing.folders {
            let label = format!("{}/", folder.label);
            lines.push(format!("  {:<8} {:<30} {}", "[DIR]", label, folder.item_count));
        }
        for file in &listing.files {
            lines.push(format!(
                "  {:<8} {:<30} {} MB",
                file.thumbnail, file.label, file.size_mb
            ));
        }
        if listing.no_matches() {
            lines.push(format!("  {}", folio::config::labels::NO_MATCHES));
        }

        if let Some(preview) = &listing.preview {
            lines.push(String::new());
            lines.push(format!("{}: {}", preview.title, preview.name));
            lines.push(preview.content.clone());
        }

        lines.join("\n")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(argv: &[&str]) -> Args {
            Args::try_parse_from(std::iter::once("folio").chain(argv.iter().copied()))
                .expect("arguments should parse")
        }

        #[test]
        fn test_run_lists_level() {
            let output = run(&args(&["--path", "Reports/2023"])).expect("path resolves");
            assert!(output.starts_with("Library / Reports / [2023]"));
            assert!(output.contains("q4-summary.pdf"));
            assert!(output.contains("3.000 MB"));
        }

        #[test]
        fn test_run_unresolved_is_single_error() {
            let err = run(&args(&["--path", "Reports/2025"])).unwrap_err();
            match err {
                CliError::Path(path_err) => {
                    assert!(path_err.is_not_found());
                    assert_eq!(path_err.segment, "2025");
                }
                CliError::Manifest(_) => panic!("manifest should load"),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
