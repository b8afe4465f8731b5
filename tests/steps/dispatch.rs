//! Step definitions for notification fan-out, mediators and commands

use std::rc::Rc;

use cucumber::{given, then, when};

use crate::common::mediators::RecordingMediator;
use crate::common::world::PureMvcWorld;
use puremvc::{NotifyContext, Observer, SimpleCommand};

#[given(regex = r#"^observers "([^"]+)" listen for "([^"]+)"$"#)]
async fn given_observers(world: &mut PureMvcWorld, labels: String, note: String) {
    let view = Rc::clone(world.facade().view());
    for label in labels.split(',').map(str::trim) {
        let label = Rc::new(label.to_string());
        let log = world.log.clone();
        let context = NotifyContext::of(&*label);
        view.register_observer(
            &note,
            Observer::from_fn(context, move |_| {
                log.borrow_mut().push(label.to_string());
                Ok(())
            }),
        );
    }
}

#[given(regex = r#"^(\d+) mediators that remove themselves on "([^"]+)"$"#)]
async fn given_self_removing_mediators(world: &mut PureMvcWorld, count: usize, note: String) {
    let facade = world.facade();
    for index in 1..=count {
        let mediator =
            RecordingMediator::new(&format!("Mediator{index}"), &[note.as_str()], &world.log)
                .removing_itself();
        facade.register_mediator(Rc::new(mediator));
    }
}

#[given(regex = r#"^a command for "([^"]+)" that logs "([^"]+)"$"#)]
async fn given_logging_command(world: &mut PureMvcWorld, note: String, entry: String) {
    let log = world.log.clone();
    world.facade().register_command(
        &note,
        SimpleCommand::factory(move |_, _| {
            log.borrow_mut().push(entry.clone());
            Ok(())
        }),
    );
}

#[when(regex = r#"^"([^"]+)" is sent$"#)]
async fn when_sent(world: &mut PureMvcWorld, note: String) {
    world.clear_log();
    if let Err(error) = world.facade().send_notification(&note, None, None) {
        world.last_error = Some(error.to_string());
    }
}

#[when(regex = r#"^the command for "([^"]+)" is removed$"#)]
async fn when_command_removed(world: &mut PureMvcWorld, note: String) {
    world.facade().remove_command(&note);
}

#[then(regex = r#"^the dispatch log is "([^"]*)"$"#)]
async fn then_dispatch_log(world: &mut PureMvcWorld, expected: String) {
    assert_eq!(world.logged().join(","), expected);
}

#[then(regex = r#"^(\d+) mediators? (?:was|were) notified$"#)]
async fn then_mediators_notified(world: &mut PureMvcWorld, count: usize) {
    assert_eq!(world.logged().len(), count);
}

#[then(regex = r#"^"([^"]+)" has (\d+) observers?$"#)]
async fn then_observer_count(world: &mut PureMvcWorld, note: String, count: usize) {
    assert_eq!(world.facade().view().observer_count(&note), count);
}
