//! Scratch buffer pool
//!
//! Packet encode and decode run for every packet of every session, so both
//! paths borrow their scratch space from a process-wide free list instead of
//! allocating. A checked-out buffer is cleared before hand-out and returned
//! on drop; it must not escape the function that checked it out.

use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

const MAX_POOLED_BUFFERS: usize = 256;

static POOL: LazyLock<Mutex<Vec<Vec<u8>>>> = LazyLock::new(|| Mutex::new(Vec::new()));

/// A scratch buffer checked out of the pool
///
/// Dereferences to a `Vec<u8>`; dropping it returns the buffer.
pub(crate) struct PooledBuffer {
    buffer: Vec<u8>,
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let mut pool = POOL.lock();
        if pool.len() < MAX_POOLED_BUFFERS {
            pool.push(std::mem::take(&mut self.buffer));
        }
    }
}

/// Check a cleared scratch buffer out of the pool
pub(crate) fn get() -> PooledBuffer {
    let buffer = {
        let mut pool = POOL.lock();
        pool.pop().unwrap_or_default()
    };
    let mut buffer = buffer;
    buffer.clear();
    PooledBuffer { buffer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_is_cleared_and_returned() {
        {
            let mut buffer = get();
            buffer.extend_from_slice(b"scratch");
        }

        let buffer = get();
        assert!(buffer.is_empty());
    }
}
