//! Application layer.
//!
//! This module defines the `Teller`, which drives one account and keeps the
//! transaction store in step with it.

pub mod teller;
