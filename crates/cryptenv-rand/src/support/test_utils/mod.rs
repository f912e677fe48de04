// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod mock_random_source;

pub use mock_random_source::{MockRandomSource, MockRandomSourceBehaviour, MockRead, MockReader};
