//! Test mediators shared by the cucumber steps and the plain integration tests

use puremvc::{CoreLink, Mediator, Notification, Notifier};

use super::world::DispatchLog;

/// Logs its name for every notification; optionally removes itself
pub struct RecordingMediator {
    name: String,
    interests: Vec<String>,
    remove_self: bool,
    log: DispatchLog,
    link: CoreLink,
}

impl RecordingMediator {
    pub fn new(name: &str, interests: &[&str], log: &DispatchLog) -> Self {
        Self {
            name: name.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            remove_self: false,
            log: log.clone(),
            link: CoreLink::new(),
        }
    }

    pub fn removing_itself(mut self) -> Self {
        self.remove_self = true;
        self
    }
}

impl Notifier for RecordingMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for RecordingMediator {
    fn mediator_name(&self) -> &str {
        &self.name
    }

    fn list_notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    fn handle_notification(&self, _notification: &Notification) -> anyhow::Result<()> {
        self.log.borrow_mut().push(self.name.clone());
        if self.remove_self {
            self.facade()?.remove_mediator(&self.name);
        }
        Ok(())
    }
}
