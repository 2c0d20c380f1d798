//! Credential issuance and authentication core for caseworker accounts.
//!
//! The crate covers the one part of the accounts system with real
//! engineering risk: deriving and verifying peppered password hashes,
//! minting unique human-readable staff identifiers, and arbitrating
//! duplicate registrations, all under timing-attack resistance and strict
//! secret-material hygiene requirements. HTTP routing, request-shape validation, and the
//! relational store itself are collaborators behind the [`domain::ports`]
//! boundary.

pub mod domain;
pub mod outbound;
pub mod security;
