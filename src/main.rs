//! Importer CLI - load scripts and directories, report every failure

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use importer::cli::Args;
use importer::output::json::format_json_with_scope;
use importer::{
    format_report, format_scope, ErrorRecord, ImportError, ImportRequest, Importer, Loader,
    OutputFormat, RecordingLoader, ScopeLoader, Settings,
};

fn main() -> ExitCode {
    let args = Args::parse();
    importer::logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let settings = load_settings(&args)?;
    let paths = collect_paths(&args)?;

    if paths.is_empty() {
        bail!(ImportError::InvalidArgument(
            "no paths to import".to_string()
        ));
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let (errors, scope) = if args.dry_run {
        let (errors, loader) = import_paths(&settings, RecordingLoader::new(), &paths, &format);
        if args.verbose {
            for path in loader.loaded() {
                eprintln!("would load: {}", path.display());
            }
        }
        (errors, None)
    } else {
        let (errors, loader) = import_paths(&settings, ScopeLoader::new(), &paths, &format);
        let scope = loader.into_scope();
        if args.verbose {
            for unit in scope.units() {
                eprintln!(
                    "loaded: {} ({} definitions)",
                    unit.path.display(),
                    unit.definitions
                );
            }
        }
        (errors, Some(scope))
    };

    match (format, scope.filter(|_| args.show_scope)) {
        (OutputFormat::Json, Some(scope)) => {
            println!("{}", format_json_with_scope(&errors, &scope));
        }
        (OutputFormat::Json, None) => {
            println!("{}", format_report(&errors, &format));
        }
        (OutputFormat::Human, scope) => {
            if let Some(scope) = scope {
                println!("{}", format_scope(&scope, &format));
            }
            // Echoed messages already went to stdout
            if !errors.is_empty() && !settings.echo_errors {
                println!("{}", format_report(&errors, &format));
            }
        }
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Run the import; echo goes to stderr when stdout carries JSON
fn import_paths<L: Loader>(
    settings: &Settings,
    loader: L,
    paths: &[String],
    format: &OutputFormat,
) -> (Vec<ErrorRecord>, L) {
    match format {
        OutputFormat::Json => {
            let mut importer = Importer::with_sink(settings.clone(), loader, io::stderr());
            let errors = importer.import(paths);
            (errors, importer.into_parts().0)
        }
        OutputFormat::Human => {
            let mut importer = Importer::new(settings.clone(), loader);
            let errors = importer.import(paths);
            (errors, importer.into_parts().0)
        }
    }
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if args.echo {
        settings = settings.with_echo(true);
    }
    if args.html {
        settings = settings.with_html(true);
    }
    if let Some(ref extension) = args.extension {
        settings = settings.with_extension(extension);
    }

    Ok(settings)
}

fn collect_paths(args: &Args) -> anyhow::Result<Vec<String>> {
    let mut paths = args.paths.clone();

    if let Some(ref request) = args.request {
        let parsed = if request.as_os_str() == "-" {
            ImportRequest::from_reader(io::stdin().lock())
                .context("failed to read import request from stdin")?
        } else {
            let file = File::open(request)
                .with_context(|| format!("failed to open {}", request.display()))?;
            ImportRequest::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid import request in {}", request.display()))?
        };
        paths.extend(parsed.into_paths());
    }

    Ok(paths)
}
