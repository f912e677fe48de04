// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockRandomSource, MockRandomSourceBehaviour, MockRead};
use crate::traits::{RandomReader, RandomSource};

#[test]
fn test_mock_random_source_behaviour_none() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 32];

    let mut reader = mock.open().expect("Failed to open()");
    let read = reader.read(&mut buf).expect("Failed to read(..)");

    assert_eq!(read, 32);
    assert!(buf.iter().all(|&b| b == 0xA5));
}

#[test]
fn test_mock_random_source_behaviour_fail_open() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::FailOpen);

    let result = mock.open();

    assert!(matches!(result, Err(EntropyError::SourceUnavailable)));
    assert_eq!(mock.open_count(), 0);
}

#[test]
fn test_mock_random_source_change_behaviour() {
    let mut mock = MockRandomSource::new(MockRandomSourceBehaviour::None);

    // First works
    assert!(mock.open().is_ok());

    // Change behaviour
    mock.change_behaviour(MockRandomSourceBehaviour::FailOpen);

    // Now fails
    assert!(mock.open().is_err());

    // Change back
    mock.change_behaviour(MockRandomSourceBehaviour::None);

    // Works again
    assert!(mock.open().is_ok());
}

#[test]
fn test_mock_random_source_script_steps() {
    let mock = MockRandomSource::with_script(&[
        MockRead::Bytes(3),
        MockRead::Eof,
        MockRead::Error,
        MockRead::Overrun,
    ]);
    let mut buf = [0u8; 8];
    let mut reader = mock.open().expect("Failed to open()");

    assert_eq!(reader.read(&mut buf), Ok(3));
    assert_eq!(reader.read(&mut buf), Ok(0));
    assert_eq!(reader.read(&mut buf), Err(EntropyError::ReadFailed));
    assert_eq!(reader.read(&mut buf), Ok(9));
    // Script exhausted: fills everything.
    assert_eq!(reader.read(&mut buf), Ok(8));
}

#[test]
fn test_mock_random_source_bytes_clamped_to_dest() {
    let mock = MockRandomSource::with_script(&[MockRead::Bytes(100)]);
    let mut buf = [0u8; 4];
    let mut reader = mock.open().expect("Failed to open()");

    assert_eq!(reader.read(&mut buf), Ok(4));
}

#[test]
fn test_mock_random_source_counts_and_reset() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 4];

    {
        let mut reader = mock.open().expect("Failed to open()");
        reader.read(&mut buf).expect("Failed to read(..)");
        reader.read(&mut buf[..2]).expect("Failed to read(..)");

        assert_eq!(mock.close_count(), 0);
    }

    assert_eq!(mock.open_count(), 1);
    assert_eq!(mock.close_count(), 1);
    assert_eq!(mock.read_count(), 2);
    assert_eq!(mock.requested_lengths(), vec![4, 2]);

    mock.reset_count();

    assert_eq!(mock.open_count(), 0);
    assert_eq!(mock.close_count(), 0);
    assert_eq!(mock.read_count(), 0);
    assert!(mock.requested_lengths().is_empty());
}
