//! # FT Test Suite
//!
//! End-to-end tests that drive the fully layered gateway
//! (`ApiGatewayService::app`) in process, without binding a socket.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── mod.rs         # Harness: request builders, JSON decoding
//!     ├── auth_flow.rs   # Register, login, token checks
//!     ├── file_flow.rs   # Upload, sent/received lists, detail
//!     ├── chain_flow.rs  # Receiver lookup, blockchain and IPFS mocks
//!     ├── compat_flow.rs # Wallet mocks, /api/user, diagnostics
//!     └── envelope.rs    # Address normalization, prefixes, 404s, CORS
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ft-tests
//! cargo test -p ft-tests integration::file_flow
//!
//! # Benchmarks
//! cargo bench -p ft-tests
//! ```

#![allow(dead_code)]

pub mod integration;
