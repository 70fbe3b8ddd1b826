// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Core computation services.

pub mod impact;
pub mod validation;

pub use impact::ImpactCalculator;
pub use validation::SubmissionValidator;
