//! Step definitions for the counter demo application

use cucumber::{given, then, when};
use tracing::info;

use crate::common::world::PureMvcWorld;
use puremvc::demo::{ConsoleMediator, CounterProxy, DemoApp};

fn start_demo(world: &mut PureMvcWorld, key: String) {
    info!("Starting demo core '{}'", key);
    let app = DemoApp::start(&world.registry, &key).expect("demo startup");
    world.key = key;
    world.app = Some(app);
}

#[given(regex = r#"^the demo application is started as "([^"]+)"$"#)]
async fn given_demo_started(world: &mut PureMvcWorld, key: String) {
    start_demo(world, key);
}

#[when(regex = r#"^the demo application is started as "([^"]+)"$"#)]
async fn when_demo_started(world: &mut PureMvcWorld, key: String) {
    start_demo(world, key);
}

#[when(regex = r"^the counter is incremented by (-?\d+)$")]
async fn when_incremented(world: &mut PureMvcWorld, amount: i64) {
    world.app().increment(amount).expect("increment");
}

#[when("the counter is reset")]
async fn when_reset(world: &mut PureMvcWorld) {
    world.app().reset().expect("reset");
}

#[when("the demo application shuts down")]
async fn when_shutdown(world: &mut PureMvcWorld) {
    world.app().shutdown().expect("shutdown");
}

#[then(regex = r"^the counter is (-?\d+)$")]
async fn then_counter(world: &mut PureMvcWorld, expected: i64) {
    assert_eq!(world.app().counter(), Some(expected));
}

#[then(regex = r#"^the console last printed "([^"]+)"$"#)]
async fn then_console_last(world: &mut PureMvcWorld, expected: String) {
    let lines = world.app().lines();
    assert_eq!(lines.last(), Some(&expected));
}

#[then("the console mediator is detached")]
async fn then_console_detached(world: &mut PureMvcWorld) {
    let facade = world.facade();
    assert!(!facade.has_mediator(ConsoleMediator::NAME));
    assert!(facade.has_proxy(CounterProxy::NAME));
}
