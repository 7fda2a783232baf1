//! Fixed-size vectors, matrices, and homogeneous transforms.
//!
//! # Motivation
//!
//! Graphics and simulation code often needs a handful of small numeric
//! primitives: 2-, 3- and 4-element vectors, small matrices, and the
//! homogeneous transforms built out of them. This crate provides exactly
//! that, as plain value types with compile-time dimensions and no heap
//! allocation, without the complexity cost of a fully general linear algebra
//! package.
//!
//! # Goals & Non-Goals
//!
//! - Vector and matrix dimensions are const generic parameters. Shape
//!   agreement between operands is a compile-time guarantee wherever the
//!   types can express it; the few runtime-sized entry points validate their
//!   input and return an [`Error`] instead.
//! - Matrices use a single, row-major, unpadded data layout.
//! - Element types are generic, but assumed to be plain [`Copy`] numbers;
//!   "big decimal" style types are out of scope.
//! - No decomposition, inversion, or determinant routines, and no explicit
//!   SIMD. Code that outgrows this crate should move to a full linear
//!   algebra library.
//!
//! # Concurrency
//!
//! Every type in this crate is a plain value that owns its storage, and all
//! arithmetic returns fresh values. Instances can be freely shared across
//! threads for reading; the crate provides no internal synchronization, so
//! concurrent mutation of a shared instance requires external locking.

mod error;
mod matrix;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
