use super::model::SelectState;

/// Owner of the document-level outside-interaction listener for one list.
///
/// Holds at most one host handle `H`. Registration is deferred by the host; [`arm`](Self::arm)
/// runs when the deferred tick fires and only registers when that open is still current.
#[derive(Debug)]
pub struct OutsideListenerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for OutsideListenerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> OutsideListenerSlot<H> {
    /// Registers through `register` when `generation` is still the open list's generation and no
    /// listener is held. Returns whether a listener was registered.
    pub fn arm(
        &mut self,
        state: &SelectState,
        generation: u64,
        register: impl FnOnce() -> H,
    ) -> bool {
        if self.handle.is_some() || !state.should_arm(generation) {
            return false;
        }
        self.handle = Some(register());
        true
    }

    /// Releases the held listener, if any, for the caller to unregister.
    pub fn disarm(&mut self) -> Option<H> {
        self.handle.take()
    }

    /// Whether a listener is held.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}
