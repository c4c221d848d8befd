// ---------------------------------------------------------------------------
// Signal – a multicast notification with explicitly registered handlers
// ---------------------------------------------------------------------------

type Slot<T> = Box<dyn FnMut(&T)>;

/// Handlers run in registration order, synchronously, on the caller's thread.
pub struct Signal<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Signal<T> {
    pub fn connect(&mut self, handler: impl FnMut(&T) + 'static) {
        self.slots.push(Box::new(handler));
    }

    pub fn emit(&mut self, value: &T) {
        for slot in &mut self.slots {
            slot(value);
        }
    }
}
