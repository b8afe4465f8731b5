use std::cell::RefCell;
use std::rc::Rc;

use cucumber::World;

use puremvc::demo::DemoApp;
use puremvc::{CoreRegistry, Facade};

/// Shared record of what observers, mediators and commands saw
pub type DispatchLog = Rc<RefCell<Vec<String>>>;

/// State carried through one scenario
#[derive(World)]
#[world(init = Self::new)]
pub struct PureMvcWorld {
    /// Fresh registry per scenario, so cores never leak between scenarios
    pub registry: CoreRegistry,

    /// Key of the core the scenario works on
    pub key: String,

    /// Facades kept to compare instances across steps
    pub facades: Vec<Rc<Facade>>,

    pub log: DispatchLog,

    /// Demo application, when the scenario started one
    pub app: Option<DemoApp>,

    /// Last error returned by a step
    pub last_error: Option<String>,
}

impl std::fmt::Debug for PureMvcWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PureMvcWorld")
            .field("registry", &self.registry)
            .field("key", &self.key)
            .field("log", &self.log.borrow())
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl PureMvcWorld {
    pub fn new() -> Self {
        Self {
            registry: CoreRegistry::new(),
            key: String::new(),
            facades: Vec::new(),
            log: Rc::new(RefCell::new(Vec::new())),
            app: None,
            last_error: None,
        }
    }

    /// Facade of the scenario's core
    pub fn facade(&self) -> Rc<Facade> {
        self.registry.facade(&self.key)
    }

    pub fn logged(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn app(&self) -> &DemoApp {
        self.app.as_ref().expect("demo application not started")
    }
}
