use log::debug;

use crate::console::Console;
use crate::traits::listener::Listener;

/// A person following listings
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    console: Console,
}

impl User {
    pub fn new(name: impl Into<String>, console: &Console) -> Self {
        Self { name: name.into(), console: console.clone() }
    }
}

impl Listener for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) {
        debug!("Delivering update to {}", self.name);
        self.console.emit(format!("User {} received update: {}", self.name, message));
    }
}
