//! `pt-ledger` — paw prints and the ledger that bounds them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`print`]   | `Print` — one immutable footprint; placement and jitter      |
//! | [`ledger`]  | `PrintLedger` — insertion-ordered, capacity- and age-bounded |
//!
//! # Lifetime of a print
//!
//! ```text
//!   stamp ──► append ──► (age ≥ fade_after) fading ──► (age ≥ max_age) pruned
//!                  └──► evicted early if the ledger overflows, oldest first
//! ```
//!
//! A print is never mutated after it is stamped.  Fading is derived from its
//! age on read, so the ledger never has to revisit old entries except to
//! delete them.

pub mod ledger;
pub mod print;


pub use ledger::PrintLedger;
pub use print::Print;
