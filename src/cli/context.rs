use std::io::{BufRead, Write};

use crate::cli::console::{Console, Severity};
use crate::config::Config;
use crate::error::{ContactError, ContactResult};
use crate::store::ContactStore;

pub struct CLIContext<R, W> {
    pub store: ContactStore,
    pub console: Console<R, W>,
}

impl<R: BufRead, W: Write> CLIContext<R, W> {
    pub fn new(store: ContactStore, input: R, output: W, config: Config) -> Self {
        Self {
            store,
            console: Console::new(input, output, config),
        }
    }

    pub fn into_parts(self) -> (ContactStore, W) {
        (self.store, self.console.into_output())
    }

    /// Print a recoverable error as-is.
    pub fn print_error(&mut self, e: &ContactError) -> ContactResult<()> {
        self.console.say(Severity::Error, &e.to_string())
    }
}
