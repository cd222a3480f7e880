//! Bump allocator for BER decoder nodes.
//!
//! Mirrors the block-list memory pool the original C++ parser used (a
//! static inline block, with dynamic overflow blocks linked after it once
//! exhausted), translated to safe Rust: blocks are plain `Vec<T>` and
//! allocations hand back a `(block, slot)` handle instead of a raw pointer.
//! Handles stay valid for the life of the arena; `reset` drops every block
//! but the first.

use std::mem;

const DEFAULT_INLINE_BYTES: usize = 64 * 1024;
const DEFAULT_DYNAMIC_BYTES: usize = 64 * 1024;

/// A stable handle to a value stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    block: u32,
    slot: u32,
}

impl NodeId {
    fn new(block: usize, slot: usize) -> Self {
        NodeId {
            block: block as u32,
            slot: slot as u32,
        }
    }
}

/// Bump-allocated storage for parser nodes, freed en masse on drop or `reset`.
///
/// Not thread-safe: one arena per parse.
pub struct Arena<T> {
    blocks: Vec<Vec<T>>,
    block_capacity: usize,
}

fn block_capacity_for<T>(budget_bytes: usize) -> usize {
    let size = mem::size_of::<T>().max(1);
    (budget_bytes / size).max(16)
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        let block_capacity = block_capacity_for::<T>(DEFAULT_INLINE_BYTES);
        Arena {
            blocks: vec![Vec::with_capacity(block_capacity)],
            block_capacity,
        }
    }

    /// Stores `value` in the arena and returns a handle to it.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let mut block_idx = self.blocks.len() - 1;
        if self.blocks[block_idx].len() == self.blocks[block_idx].capacity() {
            let new_capacity = block_capacity_for::<T>(DEFAULT_DYNAMIC_BYTES).max(self.block_capacity);
            self.blocks.push(Vec::with_capacity(new_capacity));
            block_idx += 1;
        }
        let slot = self.blocks[block_idx].len();
        self.blocks[block_idx].push(value);
        NodeId::new(block_idx, slot)
    }

    pub fn get(&self, id: NodeId) -> &T {
        &self.blocks[id.block as usize][id.slot as usize]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.blocks[id.block as usize][id.slot as usize]
    }

    /// Invalidates all outstanding handles and returns the arena to its
    /// just-constructed state.
    pub fn reset(&mut self) {
        self.blocks.truncate(1);
        self.blocks[0].clear();
    }

    pub fn len(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
