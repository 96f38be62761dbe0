/// Whether the dashboard user passed the admin gate. Lives in the
/// presentation layer; no controller reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    /// Key under which the browser keeps the flag.
    pub const STORAGE_KEY: &'static str = "adminAuth";

    /// Rebuilds the session from the stored flag. Anything but `"true"`
    /// means signed out.
    pub fn restore(stored: Option<&str>) -> Self {
        Self {
            authenticated: stored == Some("true"),
        }
    }

    pub fn sign_in(&mut self) {
        self.authenticated = true;
    }

    pub fn sign_out(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Value to persist under [`Self::STORAGE_KEY`]; `None` removes it.
    pub fn stored_value(&self) -> Option<&'static str> {
        self.authenticated.then_some("true")
    }
}
