// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide backend used by the engine callbacks.
//!
//! One-time initialization with a spin lock: the first caller of [`install`]
//! stores the backend, concurrent callers wait for it to finish.

use core::sync::atomic::{AtomicU8, Ordering};

use cryptenv_rand::{EntropyError, RandomBackend};

use crate::environment::Environment;
use crate::error::InstallError;

/// Initialization state: not yet installed
const STATE_UNINIT: u8 = 0;
/// Initialization state: in progress by another thread
const STATE_IN_PROGRESS: u8 = 1;
/// Initialization state: completed
const STATE_DONE: u8 = 2;

static INIT_STATE: AtomicU8 = AtomicU8::new(STATE_UNINIT);
static BACKEND: AtomicU8 = AtomicU8::new(0);

/// Installs `backend` for the engine callbacks.
///
/// Call once during process setup. Installing the same backend again is a
/// no-op.
///
/// # Errors
///
/// Returns [`InstallError::AlreadyInstalled`] if a different backend is
/// already installed.
pub fn install(backend: RandomBackend) -> Result<(), InstallError> {
    match INIT_STATE.compare_exchange(
        STATE_UNINIT,
        STATE_IN_PROGRESS,
        Ordering::Acquire,
        Ordering::Relaxed,
    ) {
        Ok(_) => {
            BACKEND.store(backend.as_u8(), Ordering::Relaxed);
            INIT_STATE.store(STATE_DONE, Ordering::Release);

            Ok(())
        }
        Err(_) => {
            while INIT_STATE.load(Ordering::Acquire) != STATE_DONE {
                core::hint::spin_loop();
            }

            match installed_backend() {
                Some(installed) if installed != backend => {
                    Err(InstallError::AlreadyInstalled { installed })
                }
                _ => Ok(()),
            }
        }
    }
}

/// Backend installed by [`install`], if any.
pub fn installed_backend() -> Option<RandomBackend> {
    if INIT_STATE.load(Ordering::Acquire) != STATE_DONE {
        return None;
    }

    RandomBackend::from_u8(BACKEND.load(Ordering::Relaxed))
}

/// [`Environment`] for the installed backend.
///
/// # Errors
///
/// Returns [`EntropyError::NotInitialized`] if [`install`] was never called.
pub fn installed_environment() -> Result<Environment, EntropyError> {
    installed_backend()
        .map(Environment::with_backend)
        .ok_or(EntropyError::NotInitialized)
}

/// Random source standing in for a backend that was never installed.
///
/// Opening always fails with [`EntropyError::NotInitialized`], so the
/// null-buffer and zero-length checks of a fill still run first.
#[cfg(any(test, feature = "engine-callbacks"))]
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct NotInstalled;

#[cfg(any(test, feature = "engine-callbacks"))]
impl cryptenv_rand::RandomSource for NotInstalled {
    type Reader<'a> = cryptenv_rand::SystemReader;

    fn open(&self) -> Result<cryptenv_rand::SystemReader, EntropyError> {
        Err(EntropyError::NotInitialized)
    }
}

#[cfg(test)]
pub(crate) fn reset_for_test() {
    INIT_STATE.store(STATE_UNINIT, Ordering::SeqCst);
    BACKEND.store(0, Ordering::SeqCst);
}
