// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::EntropyError;
use crate::fill::fill_random;
use crate::support::test_utils::{MockRandomSource, MockRandomSourceBehaviour, MockRead};

#[test]
fn test_fill_random_empty_slice_does_not_open() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::FailOpen);
    let mut buf = [];

    assert!(fill_random(&mock, &mut buf).is_ok());
    assert_eq!(mock.open_count(), 0);
    assert_eq!(mock.read_count(), 0);
}

#[test]
fn test_fill_random_single_read_fills_buffer() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert!(fill_random(&mock, &mut buf).is_ok());
    assert!(buf.iter().all(|&b| b == 0xA5));
    assert_eq!(mock.read_count(), 1);
    assert_eq!(mock.open_count(), 1);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn test_fill_random_partial_reads_complete() {
    // 32 bytes delivered as 10 + 22
    let mock = MockRandomSource::with_script(&[MockRead::Bytes(10), MockRead::Bytes(22)]);
    let mut buf = [0u8; 32];

    let result = fill_random(&mock, &mut buf);

    assert!(result.is_ok());
    assert!(buf.iter().all(|&b| b == 0xA5));
    assert_eq!(mock.requested_lengths(), vec![32, 22]);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn test_fill_random_eof_after_partial_read_fails() {
    // 32 bytes requested, source yields 10 then ends
    let mock = MockRandomSource::with_script(&[MockRead::Bytes(10), MockRead::Eof]);
    let mut buf = [0u8; 32];

    let result = fill_random(&mock, &mut buf);

    assert!(matches!(result, Err(EntropyError::UnexpectedEof)));
    assert_eq!(mock.read_count(), 2);
    assert_eq!(mock.close_count(), 1);
    // First 10 bytes were written and are not rolled back.
    assert!(buf[..10].iter().all(|&b| b == 0xA5));
    assert!(buf[10..].iter().all(|&b| b == 0));
}

#[test]
fn test_fill_random_zero_byte_read_is_eof() {
    let mock = MockRandomSource::with_script(&[MockRead::Bytes(10), MockRead::Bytes(0)]);
    let mut buf = [0u8; 32];

    let result = fill_random(&mock, &mut buf);

    assert!(matches!(result, Err(EntropyError::UnexpectedEof)));
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn test_fill_random_eof_on_first_read_fails() {
    let mock = MockRandomSource::with_script(&[MockRead::Eof]);
    let mut buf = [0u8; 8];

    assert!(matches!(
        fill_random(&mock, &mut buf),
        Err(EntropyError::UnexpectedEof)
    ));
    assert_eq!(mock.read_count(), 1);
}

#[test]
fn test_fill_random_read_error_aborts() {
    let mock = MockRandomSource::with_script(&[
        MockRead::Bytes(4),
        MockRead::Error,
        MockRead::Bytes(28),
    ]);
    let mut buf = [0u8; 32];

    let result = fill_random(&mock, &mut buf);

    assert!(matches!(result, Err(EntropyError::ReadFailed)));
    // No retry after the error.
    assert_eq!(mock.read_count(), 2);
    assert_eq!(mock.open_count(), 1);
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn test_fill_random_overrun_is_read_failure() {
    let mock = MockRandomSource::with_script(&[MockRead::Overrun]);
    let mut buf = [0u8; 16];

    assert!(matches!(
        fill_random(&mock, &mut buf),
        Err(EntropyError::ReadFailed)
    ));
    assert_eq!(mock.close_count(), 1);
}

#[test]
fn test_fill_random_open_failure() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::FailOpen);
    let mut buf = [0u8; 16];

    let result = fill_random(&mock, &mut buf);

    assert!(matches!(result, Err(EntropyError::SourceUnavailable)));
    assert_eq!(mock.read_count(), 0);
    assert_eq!(mock.close_count(), 0);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_fill_random_opens_new_handle_per_call() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 16];

    for _ in 0..3 {
        fill_random(&mock, &mut buf).expect("Failed to fill_random(..)");
    }

    assert_eq!(mock.open_count(), 3);
    assert_eq!(mock.close_count(), 3);
}

#[test]
fn test_fill_random_one_byte_at_a_time() {
    let script = [MockRead::Bytes(1); 16];
    let mock = MockRandomSource::with_script(&script).with_fill_byte(0x11);
    let mut buf = [0u8; 16];

    assert!(fill_random(&mock, &mut buf).is_ok());
    assert!(buf.iter().all(|&b| b == 0x11));
    assert_eq!(mock.read_count(), 16);
    assert_eq!(mock.requested_lengths(), (1..=16).rev().collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn prop_partial_reads_always_complete(
        len in 2usize..512,
        chunks in proptest::collection::vec(1usize..64, 1..64),
    ) {
        let script: Vec<MockRead> = chunks.iter().map(|&n| MockRead::Bytes(n)).collect();
        let mock = MockRandomSource::with_script(&script).with_fill_byte(0xFF);
        let mut buf = vec![0u8; len];

        prop_assert!(fill_random(&mock, &mut buf).is_ok());
        prop_assert!(buf.iter().all(|&b| b == 0xFF));
        prop_assert_eq!(mock.open_count(), 1);
        prop_assert_eq!(mock.close_count(), 1);
    }

    #[test]
    fn prop_early_eof_always_fails(len in 2usize..512, first in 1usize..512) {
        let first = first.min(len - 1);
        let mock = MockRandomSource::with_script(&[MockRead::Bytes(first), MockRead::Eof]);
        let mut buf = vec![0u8; len];

        prop_assert_eq!(fill_random(&mock, &mut buf), Err(EntropyError::UnexpectedEof));
        prop_assert_eq!(mock.close_count(), 1);
    }
}
