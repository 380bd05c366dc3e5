//! This module could be a separate crate on its own, to bootstrap [`passbook`]
//! within a binary, but for simplicity purposes it lives in the library so the
//! integration tests can run whole sessions against it.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    command::MenuChoice,
    engine::{TransactionEngine, in_memory_engine::InMemoryTransactionEngine},
};

pub mod menu;

/// Interactive menu session over arbitrary input/output. Production wires
/// stdin/stdout; tests feed a scripted session and capture the transcript.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs the menu loop until the user picks Exit or the input ends.
    pub fn run(mut self) -> Result<()> {
        let mut engine = InMemoryTransactionEngine::default();

        loop {
            menu::write_menu(self.output)?;
            let Some(choice) =
                menu::prompt_line(&mut self.input, self.output, menu::CHOICE_PROMPT)?
            else {
                break;
            };

            match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::ViewBalance) => {
                    writeln!(self.output, "{}", engine.view_balance())?;
                }
                Ok(MenuChoice::CreditAccount) => {
                    let Some(raw) =
                        menu::prompt_line(&mut self.input, self.output, menu::CREDIT_PROMPT)?
                    else {
                        break;
                    };
                    writeln!(self.output, "{}", engine.credit_account(&raw))?;
                }
                Ok(MenuChoice::DebitAccount) => {
                    let Some(raw) =
                        menu::prompt_line(&mut self.input, self.output, menu::DEBIT_PROMPT)?
                    else {
                        break;
                    };
                    writeln!(self.output, "{}", engine.debit_account(&raw))?;
                }
                Ok(MenuChoice::Exit) => break,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        writeln!(self.output, "Exiting the program. Goodbye!")?;
        Ok(())
    }
}

/// Installs the log sink for the binary. Events go to stderr so the menu
/// transcript on stdout stays clean.
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passbook=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
