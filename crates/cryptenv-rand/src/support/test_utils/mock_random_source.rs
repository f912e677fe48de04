// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::error::EntropyError;
use crate::traits::{RandomReader, RandomSource};

/// Configurable behavior for [`MockRandomSource::open`](RandomSource::open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRandomSourceBehaviour {
    /// Opening succeeds.
    None,
    /// Opening always fails with [`EntropyError::SourceUnavailable`].
    FailOpen,
}

/// One scripted outcome of [`RandomReader::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRead {
    /// Writes `min(n, dest.len())` bytes and reports that count.
    Bytes(usize),
    /// Reports end of data (`Ok(0)`).
    Eof,
    /// Fails with [`EntropyError::ReadFailed`].
    Error,
    /// Writes nothing and reports one byte more than requested.
    Overrun,
}

/// Mock random source for testing.
///
/// Replays a script of [`MockRead`] steps across all reads (the position is
/// shared by every reader opened from this source). Once the script is
/// exhausted, each read fills the whole remaining slice.
///
/// Counts opens, closes, and reads, and records the length requested by each
/// read, so tests can check the cursor and handle release.
pub struct MockRandomSource {
    behaviour: MockRandomSourceBehaviour,
    script: Vec<MockRead>,
    fill_byte: u8,
    open_count: Cell<usize>,
    close_count: Cell<usize>,
    read_count: Cell<usize>,
    requested: RefCell<Vec<usize>>,
}

impl MockRandomSource {
    /// Creates a new mock random source with the specified behavior and an
    /// empty script.
    pub fn new(behaviour: MockRandomSourceBehaviour) -> Self {
        Self {
            behaviour,
            script: Vec::new(),
            fill_byte: 0xA5,
            open_count: Cell::new(0),
            close_count: Cell::new(0),
            read_count: Cell::new(0),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Creates a mock that replays `script`.
    pub fn with_script(script: &[MockRead]) -> Self {
        let mut mock = Self::new(MockRandomSourceBehaviour::None);
        mock.script = script.to_vec();
        mock
    }

    /// Byte written by successful reads.
    pub fn with_fill_byte(mut self, fill_byte: u8) -> Self {
        self.fill_byte = fill_byte;
        self
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockRandomSourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of successful opens.
    pub fn open_count(&self) -> usize {
        self.open_count.get()
    }

    /// Number of readers dropped.
    pub fn close_count(&self) -> usize {
        self.close_count.get()
    }

    /// Number of reads attempted.
    pub fn read_count(&self) -> usize {
        self.read_count.get()
    }

    /// Length of the slice passed to each read, in order.
    pub fn requested_lengths(&self) -> Vec<usize> {
        self.requested.borrow().clone()
    }

    /// Resets all counters and the script position.
    pub fn reset_count(&self) {
        self.open_count.set(0);
        self.close_count.set(0);
        self.read_count.set(0);
        self.requested.borrow_mut().clear();
    }

    fn next_step(&self, dest_len: usize) -> MockRead {
        let index = self.read_count.get();
        self.read_count.set(index + 1);
        self.requested.borrow_mut().push(dest_len);

        self.script
            .get(index)
            .copied()
            .unwrap_or(MockRead::Bytes(dest_len))
    }
}

impl RandomSource for MockRandomSource {
    type Reader<'a> = MockReader<'a>;

    fn open(&self) -> Result<MockReader<'_>, EntropyError> {
        match self.behaviour {
            MockRandomSourceBehaviour::None => {
                self.open_count.set(self.open_count.get() + 1);
                Ok(MockReader { source: self })
            }
            MockRandomSourceBehaviour::FailOpen => Err(EntropyError::SourceUnavailable),
        }
    }
}

/// Reader handed out by [`MockRandomSource`]. Counts a close on drop.
pub struct MockReader<'a> {
    source: &'a MockRandomSource,
}

impl RandomReader for MockReader<'_> {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        match self.source.next_step(dest.len()) {
            MockRead::Bytes(n) => {
                let n = n.min(dest.len());
                dest[..n].fill(self.source.fill_byte);
                Ok(n)
            }
            MockRead::Eof => Ok(0),
            MockRead::Error => Err(EntropyError::ReadFailed),
            MockRead::Overrun => Ok(dest.len() + 1),
        }
    }
}

impl Drop for MockReader<'_> {
    fn drop(&mut self) {
        let closed = self.source.close_count.get();
        self.source.close_count.set(closed + 1);
    }
}
