//! Layout engine test suite
//!
//! Allocation, capping, style overhead, width probing and the
//! orchestrator that applies a plan to a table.

mod probe_tests;
mod redistribute_tests;
