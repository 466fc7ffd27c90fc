//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer turns operation requests into kernel calls:
//! - `validator` checks shapes, values, and configuration
//! - `executor` dispatches each operator to its kernel
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operation dispatch.
pub mod executor;

/// Shape, value, and parameter validation.
pub mod validator;
