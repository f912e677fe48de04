// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use cryptenv_rand::RandomBackend;

/// Errors from [`install`](crate::install()).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstallError {
    /// A different backend was installed first.
    #[error("random backend already installed: {installed:?}")]
    AlreadyInstalled {
        /// Backend that won.
        installed: RandomBackend,
    },
}
