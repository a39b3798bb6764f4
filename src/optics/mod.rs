//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics focus on a part of a structure and let you read
//! it, rewrite it, or both, always producing a new structure.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens  <: Getter
//! Iso <: Lens  <: Setter
//! Iso <: Prism <: Setter
//! ```
//!
//! # Available Optics
//!
//! - [`Getter`]: Read a focus (`get`)
//! - [`Setter`]: Rewrite every focus (`modify`, `set`)
//! - [`Lens`]: Focus on a part that is always present (Getter + Setter)
//! - [`Prism`]: Focus on a case that may be absent (`try_get`, `reverse_get`)
//! - [`Iso`]: Lossless conversion between two types
//!
//! Each kind has a trait describing the capability and a `Function*` struct
//! implementing it. All optics support polymorphic update: the four type
//! parameters `S, T, A, B` say that replacing a focus `A` with a `B` turns an
//! `S` into a `T`. The `Simple*` aliases fix `T = S` and `B = A`.
//!
//! # Example with Lens
//!
//! ```
//! use optika::optics::Getter;
//! use optika::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Compose lenses to focus on nested fields
//! let person_street = lens!(Person, address) >> lens!(Address, street);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set("Oak Ave".to_string(), person);
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Lens and Prism
//!
//! ```
//! use optika::optics::Setter;
//! use optika::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Payment { Card(u32), Cash }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Order { payment: Payment }
//!
//! // Lens >> Prism is a Setter: it can rewrite but not read
//! let card = lens!(Order, payment) >> prism!(Payment, Card);
//!
//! let paid = Order { payment: Payment::Card(1234) };
//! assert_eq!(card.modify(paid, |n| n + 1), Order { payment: Payment::Card(1235) });
//!
//! let cash = Order { payment: Payment::Cash };
//! assert_eq!(card.modify(cash.clone(), |n| n + 1), cash);
//! ```

mod compose;
mod getter;
mod iso;
mod lens;
mod prism;
mod setter;
mod standard_optics;

pub use compose::Compose;

pub use getter::FunctionGetter;
pub use getter::Getter;

pub use setter::FunctionSetter;
pub use setter::Setter;
pub use setter::SimpleSetter;

pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::SimpleLens;

pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::SimplePrism;

pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::SimpleIso;

pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::lens_first;
pub use standard_optics::lens_second;
pub use standard_optics::prism_left;
pub use standard_optics::prism_right;
pub use standard_optics::prism_some;
