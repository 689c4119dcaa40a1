//! `chiolab` is a small library of coursework data structures. Some features include:
//! - dense, row-major matrices of `f64` with elementwise addition, multiplication and transpose
//! - determinants by [Chio's condensation](https://en.wikipedia.org/wiki/Chi%C3%B2_condensation),
//!   with a Laplace expansion kept around as a reference
//! - a persistent singly-linked list whose operations never modify their input
//! - a mutable singly-linked list with single-owner links
//!
//! The main data structures provided by this crate are:
//! - [`Matrix`]: a two-dimensional matrix of `f64` cells, accessed by `(row, col)` or row by row
//!   through [`Row`]
//! - [`persistent::List`]: an immutable list sharing its nodes through reference counting
//! - [`LinkedList`]: a list that owns its chain of nodes and is modified in place
//!
//! Both lists are generic, but the intended payload is [`University`].

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::should_implement_trait
)]
pub mod determinant;
pub mod error;
pub mod linked_list;
pub mod matrix;
pub mod persistent;
pub mod record;

pub use determinant::determinant_2x2;
pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use matrix::{Matrix, Row};
pub use record::University;
