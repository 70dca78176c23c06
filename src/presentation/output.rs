//! Output Rendering
//!
//! Event sinks that turn sync events into terminal text or NDJSON.

use std::io::Write;
use std::sync::Arc;

use crate::domain::ports::{SyncEvent, SyncEventSink};
use crate::domain::value_objects::TargetEnvironment;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text on stderr
    #[default]
    Text,
    /// One JSON object per event on stdout
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    write: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            write: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            write: "->",
            warn: "[!]",
        }
    }
}

fn join_targets(targets: &[TargetEnvironment]) -> String {
    targets
        .iter()
        .map(TargetEnvironment::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "variable"
    } else {
        "variables"
    }
}

/// Render one event as a text line, or `None` if hidden at this verbosity
///
/// Levels: 0 shows the run header, dry-run plan and summary; 1 adds each
/// added variable; 2 adds removals and duplicate-key overrides.
/// Failures are left to the caller's final error line.
pub fn format_event(event: &SyncEvent, verbose: u8, unicode: bool) -> Option<String> {
    let icons = if unicode {
        Icons::unicode()
    } else {
        Icons::ascii()
    };

    match event {
        SyncEvent::Started {
            source,
            keys,
            targets,
            dry_run,
            ..
        } => Some(format!(
            "{} {} {} from {} to {}",
            if *dry_run { "Would push" } else { "Pushing" },
            keys.len(),
            plural(keys.len()),
            source.display(),
            join_targets(targets)
        )),
        SyncEvent::DuplicateKey {
            key,
            first_line,
            overriding_line,
        } if verbose >= 2 => Some(format!(
            "{} {} set on line {} is overridden by line {}",
            icons.warn, key, first_line, overriding_line
        )),
        SyncEvent::Planned { key, target } => {
            Some(format!("  {} {} ({})", icons.write, key, target))
        }
        SyncEvent::Removed {
            key, target, error, ..
        } if verbose >= 2 => Some(match error {
            None => format!("  removed {} ({})", key, target),
            Some(e) => format!("  remove {} ({}) skipped: {}", key, target, e),
        }),
        SyncEvent::Added { key, target } if verbose >= 1 => {
            Some(format!("  {} {} ({})", icons.check, key, target))
        }
        SyncEvent::Completed {
            synced, dry_run, ..
        } => Some(if *dry_run {
            "Dry run: nothing was changed".to_string()
        } else {
            format!("{} Synced {} {}", icons.check, synced, plural(*synced))
        }),
        _ => None,
    }
}

/// Human-readable progress on stderr
pub struct ConsoleEventSink {
    pub verbose: u8,
    pub unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: u8, unicode: bool) -> Self {
        Self { verbose, unicode }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Some(line) = format_event(&event, self.verbose, self.unicode) {
            eprintln!("{}", line);
        }
    }
}

/// NDJSON event stream on stdout
pub struct JsonEventSink;

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{}", line);
            let _ = stdout.flush();
        }
    }
}

/// Create an event sink for the chosen format
pub fn create_event_sink(
    format: OutputFormat,
    verbose: u8,
    unicode: bool,
) -> Arc<dyn SyncEventSink> {
    match format {
        OutputFormat::Text => Arc::new(ConsoleEventSink::new(verbose, unicode)),
        OutputFormat::Json => Arc::new(JsonEventSink),
    }
}
