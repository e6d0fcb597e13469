//! Loader for definition scripts
//!
//! A script is read line by line. Each line is one of:
//!
//! - blank, a `#` or `//` comment, or a `<?php` / `?>` tag (ignored)
//! - `include "other.php";` (also `require`, `*_once`, optional parentheses)
//! - `NAME = VALUE;` with an optional leading `$` and optional `;`
//!
//! VALUE is a quoted string, `true`/`false`, or a number. A unit's
//! definitions are committed only once every line of it evaluated, and a
//! unit is never loaded twice into the same scope.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::scope::{Definition, Scope, ScopeValue};
use super::{LoadError, Loader};

fn include_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(?:include|require)(?:_once)?\s*\(?\s*["']([^"']+)["']\s*\)?\s*;?$"#)
            .expect("include pattern is valid")
    })
}

fn define_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.+?)\s*;?$")
            .expect("definition pattern is valid")
    })
}

#[derive(Debug, PartialEq)]
enum Statement {
    Skip,
    Include(String),
    Define(String, ScopeValue),
}

fn parse_statement(line: &str) -> Result<Statement, String> {
    let line = line.trim();

    if line.is_empty()
        || line.starts_with('#')
        || line.starts_with("//")
        || line == "<?php"
        || line == "?>"
    {
        return Ok(Statement::Skip);
    }

    if let Some(caps) = include_regex().captures(line) {
        return Ok(Statement::Include(caps[1].to_string()));
    }

    if let Some(caps) = define_regex().captures(line) {
        let value = parse_value(&caps[2])?;
        return Ok(Statement::Define(caps[1].to_string(), value));
    }

    Err(format!("syntax error, unexpected '{}'", line))
}

fn parse_value(raw: &str) -> Result<ScopeValue, String> {
    let quoted = raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')));

    if quoted {
        Ok(ScopeValue::String(raw[1..raw.len() - 1].to_string()))
    } else if raw.eq_ignore_ascii_case("true") {
        Ok(ScopeValue::Boolean(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(ScopeValue::Boolean(false))
    } else {
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(ScopeValue::Number(n)),
            _ => Err(format!("invalid value '{}'", raw)),
        }
    }
}

/// A unit still being evaluated, with the definitions it made so far
#[derive(Debug)]
struct PendingUnit {
    key: PathBuf,
    staged: Vec<(String, Definition)>,
}

/// Loads definition scripts into a shared [`Scope`]
#[derive(Debug, Default)]
pub struct ScopeLoader {
    scope: Scope,
    /// Include stack, outermost first
    loading: Vec<PendingUnit>,
}

impl ScopeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_scope(self) -> Scope {
        self.scope
    }

    fn load_unit(&mut self, path: &Path) -> Result<(), LoadError> {
        let key = path.canonicalize().map_err(|e| LoadError::io(path, &e))?;

        if self.scope.is_loaded(&key) || self.loading.iter().any(|u| u.key == key) {
            debug!(path = %path.display(), "unit already loaded");
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, &e))?;

        self.loading.push(PendingUnit {
            key,
            staged: Vec::new(),
        });
        let evaluated = self.evaluate(path, &content);
        let unit = self.loading.pop();
        evaluated?;

        if let Some(unit) = unit {
            debug!(
                path = %path.display(),
                definitions = unit.staged.len(),
                "unit loaded"
            );
            self.scope.commit(unit.key, unit.staged);
        }
        Ok(())
    }

    /// Earlier definition of `name`, committed or staged by an enclosing unit
    fn lookup(&self, name: &str) -> Option<&Definition> {
        self.scope.get(name).or_else(|| {
            self.loading
                .iter()
                .flat_map(|u| u.staged.iter())
                .find(|(n, _)| n == name)
                .map(|(_, d)| d)
        })
    }

    fn evaluate(&mut self, path: &Path, content: &str) -> Result<(), LoadError> {
        for (index, raw) in content.lines().enumerate() {
            let line = index as u32 + 1;

            match parse_statement(raw).map_err(|msg| LoadError::at(path, line, msg))? {
                Statement::Skip => {}
                Statement::Include(target) => {
                    let target = Path::new(&target);
                    let resolved = if target.is_absolute() {
                        target.to_path_buf()
                    } else {
                        path.parent()
                            .unwrap_or_else(|| Path::new(""))
                            .join(target)
                    };
                    self.load_unit(&resolved)
                        .map_err(|e| e.included_from(path, line))?;
                }
                Statement::Define(name, value) => {
                    if let Some(previous) = self.lookup(&name) {
                        return Err(LoadError::at(
                            path,
                            line,
                            format!(
                                "cannot redeclare '{}' (previously declared in {}:{})",
                                name,
                                previous.file.display(),
                                previous.line
                            ),
                        ));
                    }

                    if let Some(unit) = self.loading.last_mut() {
                        unit.staged.push((
                            name,
                            Definition {
                                value,
                                file: path.to_path_buf(),
                                line,
                            },
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Loader for ScopeLoader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.load_unit(path)
    }
}
