//! Per-actor resumption memory.

/// A flat, fixed-capacity array of memory slots, owned by one actor.
///
/// Each [`MemorySequence`] in a tree names one slot; the slot holds the child
/// index that sequence resumes at. Slots are plain small integers addressed
/// by id rather than a map, so traversal stays allocation-free.
///
/// Size the array with [`Brain::memory`] (or `with_slots(brain
/// .required_slots())`) when the actor is created. Addressing a slot outside
/// the array is a configuration error and panics.
///
/// [`MemorySequence`]: crate::MemorySequence
/// [`Brain::memory`]: crate::Brain::memory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BtMemory {
    slots: Box<[u16]>,
}

impl BtMemory {
    /// Creates a memory array with `slots` slots, all initialized to 0.
    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots: vec![0; slots].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reads a slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    #[inline]
    pub fn get(&self, slot: usize) -> u16 {
        match self.slots.get(slot) {
            Some(value) => *value,
            None => panic!(
                "memory slot {slot} out of range (actor has {} slots)",
                self.slots.len()
            ),
        }
    }

    /// Writes a slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    #[inline]
    pub fn set(&mut self, slot: usize, value: u16) {
        match self.slots.get_mut(slot) {
            Some(stored) => *stored = value,
            None => panic!(
                "memory slot {slot} out of range (actor has {} slots)",
                self.slots.len()
            ),
        }
    }

    /// Resets every slot to 0, restarting all memory sequences from their
    /// first child.
    pub fn reset(&mut self) {
        self.slots.fill(0);
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.slots
    }
}
