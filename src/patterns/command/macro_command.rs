//! # Macro Command
//!
//! A command that runs a queue of sub-commands against one notification.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::trace;

use super::{Command, CommandFactory};
use crate::patterns::observer::{CoreLink, Notification, Notifier};

/// Runs its sub-commands in the order they were added
///
/// Each sub-command is built fresh, bound to the macro's core and executed
/// with the same notification. The queue is drained as it runs, and the
/// first failing sub-command stops the run: later sub-commands are not
/// executed and the error is returned to the caller.
#[derive(Default)]
pub struct MacroCommand {
    sub_commands: RefCell<VecDeque<CommandFactory>>,
    link: CoreLink,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory building a macro command per dispatch, filled by `initialize`
    pub fn factory<F>(initialize: F) -> CommandFactory
    where
        F: Fn(&MacroCommand) + 'static,
    {
        Rc::new(move || {
            let command = MacroCommand::new();
            initialize(&command);
            Box::new(command) as Box<dyn Command>
        })
    }

    pub fn add_sub_command(&self, factory: CommandFactory) {
        self.sub_commands.borrow_mut().push_back(factory);
    }

    pub fn with_sub_command(self, factory: CommandFactory) -> Self {
        self.add_sub_command(factory);
        self
    }

    pub fn pending(&self) -> usize {
        self.sub_commands.borrow().len()
    }
}

impl Notifier for MacroCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for MacroCommand {
    fn execute(&self, notification: &Notification) -> anyhow::Result<()> {
        loop {
            let next = self.sub_commands.borrow_mut().pop_front();
            let Some(factory) = next else {
                break;
            };
            let command = factory();
            if let Some(binding) = self.core_link().binding() {
                command.initialize_notifier(binding);
            }
            trace!("Executing sub-command for '{}'", notification.name());
            command.execute(notification)?;
        }
        Ok(())
    }
}
