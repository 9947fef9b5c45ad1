//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one answer list and one
//! allowed-guess list per supported length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));
