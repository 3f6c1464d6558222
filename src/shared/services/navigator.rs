/// Performs application-level page transitions.
///
/// Callers hand over a path and move on; implementations report their own
/// failures (through logging) instead of returning them.
pub trait PageNavigator {
    fn navigate(&self, path: &str);
}


/// Navigator that only remembers the paths it was handed
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl PageNavigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
