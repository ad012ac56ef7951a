//! A reusable decode buffer with claim/release discipline.
//!
//! The tokenizer only needs a scratch string while it is decoding one escaped
//! string literal, and string literals never nest, so a single buffer can be
//! recycled across the whole parse. `claim` hands the buffer out, `release`
//! hands it back (cleared, capacity kept). Claiming while claimed is a
//! programming error and panics rather than silently aliasing the buffer.

#[derive(Debug)]
pub(crate) struct ScratchBuffer {
    slot: Option<String>,
}

impl ScratchBuffer {
    pub(crate) fn new() -> Self {
        Self {
            slot: Some(String::with_capacity(8)),
        }
    }

    /// Takes exclusive ownership of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is already claimed.
    pub(crate) fn claim(&mut self) -> String {
        match self.slot.take() {
            Some(buffer) => buffer,
            None => panic!("cannot claim a scratch buffer that is in use"),
        }
    }

    /// Returns a claimed buffer, clearing it for the next use.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was never claimed.
    pub(crate) fn release(&mut self, mut buffer: String) {
        assert!(
            self.slot.is_none(),
            "cannot release a scratch buffer that is unclaimed"
        );
        buffer.clear();
        self.slot = Some(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchBuffer;

    #[test]
    fn claim_release_cycle_keeps_capacity() {
        let mut scratch = ScratchBuffer::new();
        let mut buffer = scratch.claim();
        buffer.push_str("some decoded text");
        let capacity = buffer.capacity();
        scratch.release(buffer);

        let buffer = scratch.claim();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
        scratch.release(buffer);
    }

    #[test]
    #[should_panic(expected = "cannot claim a scratch buffer that is in use")]
    fn nested_claim_panics() {
        let mut scratch = ScratchBuffer::new();
        let _held = scratch.claim();
        let _ = scratch.claim();
    }

    #[test]
    #[should_panic(expected = "cannot release a scratch buffer that is unclaimed")]
    fn unmatched_release_panics() {
        let mut scratch = ScratchBuffer::new();
        scratch.release(String::new());
    }
}
