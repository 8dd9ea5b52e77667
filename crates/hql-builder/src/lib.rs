//! # hql-builder
//!
//! A line-oriented builder for HQL/JPQL-style query strings with `:name`
//! parameters.
//!
//! ## Features
//!
//! - **Line composition**: every `push`/`add` call appends one line, joined by `\n`
//! - **Positional binding**: `:name` placeholders bind the call's values left to right
//! - **Anonymous placeholders**: a bare `:` is renamed to a synthetic `_param_N`
//! - **Conditional lines**: `add_next_if` drops the next line and its bindings in one shot
//! - **Debug rendering**: `render()` substitutes literal values for inspection
//! - **Session handoff**: `build()` hands text and named bindings to any [`Session`]
//!
//! ## Example
//!
//! ```
//! use hql_builder::{HqlBuilder, params};
//!
//! let mut q = HqlBuilder::new();
//! q.push("SELECT u FROM User u WHERE 1=1")?;
//! q.add("  AND u.status = :status", params!["active"])?;
//! q.add_next_if(false);
//! q.add("  AND u.age > :age", params![18_i64])?;
//!
//! assert_eq!(
//!     q.query_text(),
//!     "SELECT u FROM User u WHERE 1=1\n  AND u.status = :status"
//! );
//! assert_eq!(
//!     q.render(),
//!     "SELECT u FROM User u WHERE 1=1\n  AND u.status = active"
//! );
//! # Ok::<(), hql_builder::HqlError>(())
//! ```

pub mod builder;
pub mod error;
pub mod param;
pub mod session;
pub mod value;

pub use builder::{HqlBuilder, hql};
pub use error::{HqlError, HqlResult};
pub use param::{ParamPos, next_param};
pub use session::Session;
pub use value::Value;
