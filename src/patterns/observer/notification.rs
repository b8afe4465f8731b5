//! # Notification
//!
//! Named messages carried between actors. A notification has a name, an
//! optional body of any type and an optional type tag that lets receivers
//! tell apart notifications sharing a name.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Object-safe view of a body value
trait BodyValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> BodyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared, dynamically typed notification payload
///
/// Cloning a `Body` shares the underlying value, so a sender that keeps a
/// clone observes any interior mutation performed by receivers.
#[derive(Clone)]
pub struct Body(Rc<dyn BodyValue>);

impl Body {
    pub fn new<T: Any + fmt::Debug>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Borrow the payload as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Whether both bodies share the same payload
    pub fn ptr_eq(&self, other: &Body) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Strings render as their text, everything else through `Debug`
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = (*self.0).as_any();
        if let Some(text) = value.downcast_ref::<String>() {
            f.write_str(text)
        } else if let Some(text) = value.downcast_ref::<&'static str>() {
            f.write_str(text)
        } else {
            fmt::Debug::fmt(&*self.0, f)
        }
    }
}

/// A named message with optional body and type tag
///
/// The name is fixed at construction. Body and type can be replaced before
/// the notification is dispatched; during dispatch receivers only get a
/// shared reference.
#[derive(Debug, Clone)]
pub struct Notification {
    name: String,
    body: Option<Body>,
    notification_type: Option<String>,
}

impl Notification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            notification_type: None,
        }
    }

    /// Build a notification from all three parts at once
    pub fn with_parts(
        name: impl Into<String>,
        body: Option<Body>,
        notification_type: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            body,
            notification_type: notification_type.map(str::to_string),
        }
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Borrow the body as a concrete type, `None` if absent or of another type
    pub fn body_as<T: Any>(&self) -> Option<&T> {
        self.body.as_ref().and_then(Body::downcast_ref::<T>)
    }

    pub fn set_body(&mut self, body: Option<Body>) {
        self.body = body;
    }

    pub fn notification_type(&self) -> Option<&str> {
        self.notification_type.as_deref()
    }

    pub fn set_type(&mut self, notification_type: Option<String>) {
        self.notification_type = notification_type;
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            Some(body) => write!(f, "\nBody:{body}")?,
            None => write!(f, "\nBody:null")?,
        }
        match &self.notification_type {
            Some(notification_type) => write!(f, "\nType:{notification_type}"),
            None => write!(f, "\nType:null"),
        }
    }
}
