//! Step definitions for multiton core creation and teardown

use std::rc::Rc;

use cucumber::{given, then, when};
use tracing::debug;

use crate::common::world::PureMvcWorld;
use puremvc::{Facade, SimpleProxy};

#[given(regex = r#"^the facade for "([^"]+)" exists$"#)]
async fn given_facade_exists(world: &mut PureMvcWorld, key: String) {
    debug!("Creating facade for core '{}'", key);
    world.key = key;
    let facade = world.facade();
    world.facades.push(facade);
}

#[given(regex = r#"^a proxy named "([^"]+)" is registered$"#)]
async fn given_proxy_registered(world: &mut PureMvcWorld, name: String) {
    world.facade().register_proxy(Rc::new(SimpleProxy::new(name)));
}

#[when(regex = r#"^I get the facade for "([^"]+)" twice$"#)]
async fn when_get_facade_twice(world: &mut PureMvcWorld, key: String) {
    world.key = key;
    let first = world.facade();
    let second = world.facade();
    world.facades.push(first);
    world.facades.push(second);
}

#[when(regex = r#"^I remove the core "([^"]+)"$"#)]
async fn when_remove_core(world: &mut PureMvcWorld, key: String) {
    world.registry.remove_core(&key);
}

#[when(regex = r#"^I construct another facade for "([^"]+)"$"#)]
async fn when_construct_duplicate(world: &mut PureMvcWorld, key: String) {
    world.last_error = Facade::create(&world.registry, &key)
        .err()
        .map(|error| error.to_string());
}

#[then("both facades are the same instance")]
async fn then_same_instance(world: &mut PureMvcWorld) {
    let [first, second] = &world.facades[..] else {
        panic!("expected exactly two facades, got {}", world.facades.len());
    };
    assert!(Rc::ptr_eq(first, second));
}

#[then(regex = r#"^the core "([^"]+)" (exists|does not exist)$"#)]
async fn then_core_presence(world: &mut PureMvcWorld, key: String, presence: String) {
    assert_eq!(world.registry.has_core(&key), presence == "exists");
}

#[then(regex = r#"^the facade for "([^"]+)" is a fresh instance without proxies$"#)]
async fn then_fresh_facade(world: &mut PureMvcWorld, key: String) {
    let facade = world.registry.facade(&key);
    let previous = world.facades.last().expect("an earlier facade");
    assert!(!Rc::ptr_eq(&facade, previous));
    assert!(facade.proxy_names().is_empty());
}

#[then(regex = r#"^construction fails with "([^"]+)"$"#)]
async fn then_construction_fails(world: &mut PureMvcWorld, message: String) {
    assert_eq!(world.last_error.as_deref(), Some(message.as_str()));
}
