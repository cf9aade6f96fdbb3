//! Session orchestration
//!
//! This module contains the cycle-level logic:
//! - The state machine and its operator/viewer collaborators
//! - Payment tiers
//! - Row usage limits per face

/// State machine driving input, processing, payment and validation
pub mod machine;
/// Payment classification and composite selection parsing
pub mod payment;
/// Per-face row usage tracking
pub mod usage;
