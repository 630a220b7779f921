//! Provides build-time configuration helpers shared by the other crates of the workspace.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

pub mod env;
