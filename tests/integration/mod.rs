//! Integration Tests Module
//!
//! Integration tests for Easy Prompt. Tests cover document serialization,
//! form state transitions, preview editing and copy, persistence, catalogs,
//! and the command layer including the interactive session.

// Shared fixtures
mod support;

// Serializer document properties
mod serializer_test;


// Preview regime and copy indicator
mod preview_test;

// Snapshot restore, debounce and flush
mod persistence_test;

// Built-in and user catalogs
mod catalog_test;

// Command layer and session
mod commands_test;
