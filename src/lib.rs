//! # optika
//!
//! Composable optics for immutable data in Rust.
//!
//! ## Overview
//!
//! An optic is a first-class accessor: a value that knows how to read or
//! rewrite part of a larger structure. This crate provides five kinds,
//! ordered by what they can do:
//!
//! - **Getter**: read a focus
//! - **Setter**: rewrite a focus
//! - **Lens**: read and rewrite a focus that is always present
//! - **Prism**: match a case that may be absent, and build it back
//! - **Iso**: convert losslessly in both directions
//!
//! Any two optics compose with `>>` into the strongest kind both can act as.
//! Pairs without a common kind are rejected at compile time.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]` (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optika::prelude::*;
//! use optika::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape { Circle(f64), Square(f64) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Canvas { shape: Shape, title: String }
//!
//! let radius = lens!(Canvas, shape) >> prism!(Shape, Circle);
//!
//! let canvas = Canvas { shape: Shape::Circle(1.0), title: "c".to_string() };
//! let grown = radius.modify(canvas, |r| r * 3.0);
//! assert_eq!(grown.shape, Shape::Circle(3.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the concrete optic types and [`Either`].
///
/// # Usage
///
/// ```rust
/// use optika::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use optika_derive::{Lenses, Prisms};
}

pub mod either;
pub mod optics;

pub use either::Either;

#[cfg(feature = "derive")]
pub use optika_derive::{Lenses, Prisms};
