//! Derive macros for optika optics.
//!
//! This crate provides procedural macros for automatically generating
//! optics (Lens and Prism) constructors for Rust types.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optika::Lenses;
//! use optika::optics::Getter;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> SimpleLens<Point, i32>
//! // - Point::y_lens() -> SimpleLens<Point, i32>
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optika::Prisms;
//! use optika::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> SimplePrism<Shape, f64>
//! // - Shape::rectangle_prism() -> SimplePrism<Shape, (f64, f64)>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens constructors for struct fields.
///
/// This macro generates a method for each field in the struct that returns
/// a lens focusing on that field. The method name follows the pattern
/// `{field_name}_lens()`.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - Every field type must implement `Clone`, since `get` returns an owned copy
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> ::optika::optics::SimpleLens<Self, T> { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use optika::Lenses;
/// use optika::optics::Getter;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person {
///     name: "Alice".to_string(),
///     age: 30,
/// };
///
/// let name_lens = Person::name_lens();
/// assert_eq!(name_lens.get(&person), "Alice");
///
/// let updated = name_lens.set("Bob".to_string(), person);
/// assert_eq!(updated.name, "Bob");
/// ```
///
/// # Generics
///
/// Generic structs are supported. Call the lens method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.get(&Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism constructors for enum variants.
///
/// This macro generates a method for each variant in the enum that returns
/// a prism focusing on that variant. The method name follows the pattern
/// `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Empty`): `SimplePrism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `SimplePrism<Enum, T>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `SimplePrism<Enum, (T1, T2, ...)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `SimplePrism<Enum, (T1, T2, ...)>`
///
/// Matching is by value, so every kind of variant can be extracted, and
/// the fields of a struct variant become a tuple in definition order.
///
/// # Example
///
/// ```rust,ignore
/// use optika::Prisms;
/// use optika::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
///     Point,
/// }
///
/// assert_eq!(Shape::circle_prism().preview(Shape::Circle(5.0)), Some(5.0));
/// assert_eq!(Shape::rectangle_prism().preview(Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
/// assert_eq!(Shape::point_prism().preview(Shape::Point), Some(()));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
