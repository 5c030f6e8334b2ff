// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for the ranking invariants.
//!
//! The contracts panic in debug builds when an invariant is violated and
//! compile away in release. They catch algorithmic slips (weights that stop
//! summing to 1, a selection that places a candidate twice) the moment tests
//! run, instead of as a subtly wrong ranking later.

pub mod contracts;
