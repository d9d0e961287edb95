// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for `understory_radar`. See the `examples/` directory.
