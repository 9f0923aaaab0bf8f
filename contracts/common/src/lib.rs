//! Shared utilities for the CareLedger contract suite.
//!
//! This crate provides:
//! - [`validation`] — the input limits every layer enforces: clients
//!   pre-validate before issuing a call, the contract validates
//!   authoritatively on entry.
//! - [`timestamp`] — the comma-grouped decimal codec used for report
//!   timestamps on the wire.
//!
//! Everything here is pure `core` so both the `no_std` contract crates and
//! host-side consumers can share a single definition of "valid".

#![cfg_attr(not(feature = "std"), no_std)]

pub mod timestamp;
pub mod validation;
