//! Interactive session: read an action, run it, redraw
//!
//! The session reads one line at a time from any `BufRead` and writes the
//! view to any `Write`, so it runs the same against a terminal or a test
//! buffer. Each action runs to completion before the next line is read.

use crate::GradeBookHandler;
use crate::command::Action;
use crate::handlers::Response;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub struct Session<R, W> {
    handler: GradeBookHandler,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(handler: GradeBookHandler, input: R, output: W) -> Self {
        Self {
            handler,
            input,
            output,
        }
    }

    fn draw(&mut self) -> Result<()> {
        let view = self.handler.render();
        self.output
            .write_all(view.as_bytes())
            .context("Failed to write view")
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "{}", self.handler.config().labels.prompt)
            .context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        self.draw()?;

        let mut line = String::new();
        loop {
            self.prompt()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("end of input");
                writeln!(self.output).context("Failed to write output")?;
                break;
            }

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(self.output, "{}", e).context("Failed to write output")?;
                    continue;
                }
            };

            match self.handler.dispatch(action) {
                Response::Redraw => self.draw()?,
                Response::Message(message) => {
                    writeln!(self.output, "{}", message).context("Failed to write output")?
                }
                Response::Ignored => {}
                Response::Quit => break,
            }
        }

        info!(courses = self.handler.book().courses().len(), "session ended");
        Ok(())
    }

    pub fn handler(&self) -> &GradeBookHandler {
        &self.handler
    }

    /// Give back the output stream, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }
}
