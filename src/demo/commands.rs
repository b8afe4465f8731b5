//! # Demo Commands
//!
//! Startup is a macro command that prepares the model and then the view;
//! the remaining commands act on the counter.

use std::rc::Rc;

use anyhow::{anyhow, Result};

use super::console_mediator::{ConsoleLines, ConsoleMediator};
use super::counter_proxy::CounterProxy;
use crate::patterns::{
    command_factory, Command, CommandFactory, CoreLink, MacroCommand, Notification, Notifier,
};

/// Startup sequence: model first, then view
pub fn startup_command() -> CommandFactory {
    MacroCommand::factory(|command| {
        command.add_sub_command(command_factory::<PrepareModelCommand>());
        command.add_sub_command(command_factory::<PrepareViewCommand>());
    })
}

#[derive(Default)]
pub struct PrepareModelCommand {
    link: CoreLink,
}

impl Notifier for PrepareModelCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for PrepareModelCommand {
    fn execute(&self, _notification: &Notification) -> Result<()> {
        self.facade()?
            .register_proxy(Rc::new(CounterProxy::default()));
        Ok(())
    }
}

/// Registers the console mediator around the line buffer carried as body
#[derive(Default)]
pub struct PrepareViewCommand {
    link: CoreLink,
}

impl Notifier for PrepareViewCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for PrepareViewCommand {
    fn execute(&self, notification: &Notification) -> Result<()> {
        let lines = notification
            .body_as::<ConsoleLines>()
            .ok_or_else(|| anyhow!("startup needs a console line buffer"))?;
        self.facade()?
            .register_mediator(Rc::new(ConsoleMediator::new(Rc::clone(lines))));
        Ok(())
    }
}

/// Adds the step carried as body (default 1) to the counter
#[derive(Default)]
pub struct IncrementCommand {
    link: CoreLink,
}

impl Notifier for IncrementCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for IncrementCommand {
    fn execute(&self, notification: &Notification) -> Result<()> {
        let step = notification.body_as::<i64>().copied().unwrap_or(1);
        let counter = self
            .facade()?
            .retrieve_proxy_as::<CounterProxy>(CounterProxy::NAME)
            .ok_or_else(|| anyhow!("counter proxy is not registered"))?;
        counter.increment(step)
    }
}

#[derive(Default)]
pub struct ResetCommand {
    link: CoreLink,
}

impl Notifier for ResetCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for ResetCommand {
    fn execute(&self, _notification: &Notification) -> Result<()> {
        match self
            .facade()?
            .retrieve_proxy_as::<CounterProxy>(CounterProxy::NAME)
        {
            Some(counter) => counter.reset(),
            None => Ok(()),
        }
    }
}
