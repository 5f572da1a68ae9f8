// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Wishgram integration tests.
//!
//! Provides an instrumented in-memory [`wishgram_core::WishStore`] so engine
//! tests run fast, deterministically, and without a database file.

pub mod memory_store;

pub use memory_store::MemoryWishStore;
