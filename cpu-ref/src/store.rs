use fnv::FnvHashMap;
use obliv_backend::{RuntimeError, RuntimeResult, layouts::Handle};
use obliv_sampling::Source;

/// Width of the entries backing an `FheBool`.
pub(crate) const BOOL_BITS: u32 = 1;

struct Entry {
    bits: u32,
    value: u128,
}

#[inline(always)]
fn mask(bits: u32) -> u128 {
    if bits >= u128::BITS { u128::MAX } else { (1u128 << bits) - 1 }
}

/// Handle-indexed plaintext store. Handles are allocated monotonically and
/// never reused.
pub(crate) struct Store {
    entries: FnvHashMap<u64, Entry>,
    next: u64,
    source: Source,
}

impl Store {
    pub(crate) fn new(source: Source) -> Self {
        Self {
            entries: FnvHashMap::default(),
            next: 0,
            source,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value mod 2^bits` under a fresh handle.
    pub(crate) fn insert(&mut self, bits: u32, value: u128) -> Handle {
        let handle: Handle = Handle(self.next);
        self.next += 1;
        self.entries.insert(
            handle.0,
            Entry {
                bits,
                value: value & mask(bits),
            },
        );
        handle
    }

    pub(crate) fn get(&self, handle: Handle, bits: u32) -> RuntimeResult<u128> {
        let entry: &Entry = self
            .entries
            .get(&handle.0)
            .ok_or(RuntimeError::UnknownHandle(handle))?;
        if entry.bits != bits {
            return Err(RuntimeError::WidthMismatch {
                handle,
                expected: bits,
                found: entry.bits,
            });
        }
        Ok(entry.value)
    }

    pub(crate) fn release(&mut self, handle: Handle) -> RuntimeResult<()> {
        self.entries
            .remove(&handle.0)
            .map(|_| ())
            .ok_or(RuntimeError::UnknownHandle(handle))
    }

    pub(crate) fn random(&mut self, bits: u32) -> Handle {
        let value: u128 = self.source.next_u128_masked(bits);
        self.insert(bits, value)
    }

    pub(crate) fn unary<F>(&mut self, a: Handle, bits_in: u32, bits_out: u32, f: F) -> RuntimeResult<Handle>
    where
        F: FnOnce(u128) -> RuntimeResult<u128>,
    {
        let a: u128 = self.get(a, bits_in)?;
        let value: u128 = f(a)?;
        Ok(self.insert(bits_out, value))
    }

    pub(crate) fn binary<F>(&mut self, a: Handle, b: Handle, bits_in: u32, bits_out: u32, f: F) -> RuntimeResult<Handle>
    where
        F: FnOnce(u128, u128) -> u128,
    {
        let a: u128 = self.get(a, bits_in)?;
        let b: u128 = self.get(b, bits_in)?;
        Ok(self.insert(bits_out, f(a, b)))
    }

    pub(crate) fn select(&mut self, cond: Handle, a: Handle, b: Handle, bits: u32) -> RuntimeResult<Handle> {
        let cond: u128 = self.get(cond, BOOL_BITS)?;
        let a: u128 = self.get(a, bits)?;
        let b: u128 = self.get(b, bits)?;
        // Both operands are resolved before the choice so that an invalid
        // handle fails regardless of the condition.
        Ok(self.insert(bits, if cond == 1 { a } else { b }))
    }
}
