use std::sync::atomic::{AtomicUsize, Ordering};

use log::{trace, warn, SetLoggerError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Records the current depth of the tracer
static TRACE_DEPTH: AtomicUsize = AtomicUsize::new(0);

/// Tracer representing one stage of the pipeline
pub struct Tracer {
    title: String,
    depth: usize,
}

impl Tracer {
    /// Enter a stage
    pub fn new<S: Into<String>>(title: S) -> Self {
        let title = title.into();
        let depth = TRACE_DEPTH.fetch_add(1, Ordering::SeqCst);
        trace!("{}-> {}", "  ".repeat(depth), title);
        Self { title, depth }
    }

    /// Record a new event
    pub fn log(&self, event: &str) {
        trace!("{} {}", "  ".repeat(self.depth), event);
    }
}

impl Drop for Tracer {
    fn drop(&mut self) {
        let Self { title, depth } = self;
        trace!("{}<- {}", "  ".repeat(*depth), title);
        if TRACE_DEPTH
            .compare_exchange(*depth + 1, *depth, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("trace depth out of sync when leaving {}", title);
            TRACE_DEPTH.store(*depth, Ordering::SeqCst);
        }
    }
}

/// Setup the logging globally
pub fn setup(verbose: usize) -> Result<(), SetLoggerError> {
    let verbosity = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        verbosity,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}
