//! The import loop

use std::io::{self, Write};

use serde_json::Value;
use tracing::{debug, info};

use super::record::{render_trace, ErrorRecord};
use super::request::ImportRequest;
use super::resolver::{Candidate, Resolver, Step};
use crate::error::Result;
use crate::loader::Loader;
use crate::output::Echo;
use crate::settings::Settings;

/// Validates requested paths and loads the conforming ones
pub struct Importer<L, W = io::Stdout> {
    settings: Settings,
    resolver: Resolver,
    loader: L,
    echo: Echo<W>,
}

impl<L: Loader> Importer<L> {
    /// Create an importer that echoes to stdout
    pub fn new(settings: Settings, loader: L) -> Self {
        Importer::with_sink(settings, loader, io::stdout())
    }
}

impl<L: Loader, W: Write> Importer<L, W> {
    /// Create an importer that echoes to `sink`
    pub fn with_sink(settings: Settings, loader: L, sink: W) -> Self {
        Self {
            resolver: Resolver::new(settings.extension.clone()),
            echo: Echo::new(sink, &settings),
            settings,
            loader,
        }
    }

    /// Import every path in order, returning one record per failure
    pub fn import<I, S>(&mut self, paths: I) -> Vec<ErrorRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut errors = Vec::new();

        for item in paths {
            let item = item.as_ref();
            debug!(item, "resolving import path");

            for step in self.resolver.resolve(item) {
                let failure = match step {
                    Step::Load(candidate) => self.load(candidate),
                    Step::Reject(record) => Some(record),
                };

                if let Some(record) = failure {
                    debug!(item = %record.item, kind = %record.kind, "import error");
                    self.echo.error(&record);
                    errors.push(record);
                }
            }
        }

        if !errors.is_empty() {
            info!(count = errors.len(), "import finished with errors");
        }
        self.echo.summary(errors.len());
        errors
    }

    pub fn import_request(&mut self, request: &ImportRequest) -> Vec<ErrorRecord> {
        self.import(request.paths())
    }

    /// Import from an untyped JSON value, which must be an array of strings
    pub fn import_value(&mut self, value: &Value) -> Result<Vec<ErrorRecord>> {
        let request = ImportRequest::from_value(value)?;
        Ok(self.import_request(&request))
    }

    fn load(&mut self, candidate: Candidate) -> Option<ErrorRecord> {
        match self.loader.load(&candidate.path) {
            Ok(()) => {
                debug!(item = %candidate.item, "loaded");
                None
            }
            Err(e) => {
                let trace = render_trace(e.frames.into_iter().chain(candidate.origin.frames()));
                Some(ErrorRecord::load_failure(
                    &candidate.item,
                    e.message,
                    e.file.display().to_string(),
                    e.line,
                    trace,
                ))
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn sink(&self) -> &W {
        self.echo.sink()
    }

    pub fn into_parts(self) -> (L, W) {
        (self.loader, self.echo.into_sink())
    }
}
