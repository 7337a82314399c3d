//! # zod-runtime
//!
//! Runtime schema validation and coercion in the style of [Zod](https://zod.dev/).
//!
//! Build a schema once from immutable nodes, then parse any number of dynamic
//! values against it. A parse either returns the validated value (possibly
//! coerced and transformed) or every issue found, each with the path of the
//! offending value.
//!
//! ## Quick Start
//!
//! ```rust
//! use zod_runtime::{z, Value, ZodType};
//!
//! let schema = z::string().max(5).min(3);
//! assert_eq!(schema.parse("irda").unwrap(), Value::from("irda"));
//!
//! let err = schema.parse("ir").unwrap_err();
//! assert!(err.issues[0].code.is_range_violation());
//! ```
//!
//! ## Two Result Modes
//!
//! | Method | Returns |
//! |--------|---------|
//! | [`ZodType::parse`] | `Result<Value, ZodError>`; the error aggregates all issues |
//! | [`ZodType::safe_parse`] | [`ParseResult`]: `Success(value)` or `Failure(issues)` |
//! | [`ZodType::parse_as`] | Any `DeserializeOwned` type, via the validated value |
//!
//! ## Schemas
//!
//! | Constructor | Checks |
//! |-------------|--------|
//! | `z::string()` | `min`, `max`, `length`, `nonempty`, `email`, `url`, `uuid`, `datetime`, `regex`, `starts_with`, `ends_with`, `includes`; `trim`, `to_lowercase`, `to_uppercase` |
//! | `z::number()` | `min`, `max`, `gt`, `lt`, `int`, `positive`, `negative`, `nonnegative`, `nonpositive`, `multiple_of`, `finite` |
//! | `z::boolean()` | |
//! | `z::date()` | `min`, `max` |
//! | `z::object()` | `field`, `extend`, `merge`, `pick`, `omit`, `partial`, `strict`, `strip`, `passthrough` |
//! | `z::array(s)` | `min`, `max`, `length`, `nonempty` |
//! | `z::set(s)` | `min`, `max`, `size`, `nonempty` |
//! | `z::map(k, v)` | |
//!
//! Every schema also has `optional`, `nullable`, `with_default`, `refine`,
//! `super_refine`, `transform`, `try_transform` and `boxed` from [`ZodType`].
//! Checks take a custom message via `.message(..)`; type errors via
//! `required_error(..)` and `invalid_type_error(..)`.
//!
//! ## Coercion
//!
//! `z::coerce::{string, number, boolean, date}` convert input before the type
//! check, following JavaScript's conversion rules:
//!
//! ```rust
//! use zod_runtime::{z, Value, ZodType};
//!
//! assert_eq!(z::coerce::string().parse(123).unwrap(), Value::from("123"));
//! assert_eq!(z::coerce::boolean().parse(Value::Null).unwrap(), Value::Bool(false));
//! assert_eq!(z::coerce::number().parse("100000").unwrap(), Value::from(100_000));
//! ```
//!
//! ## Transforms That Reject
//!
//! ```rust
//! use zod_runtime::{z, Issue, Value, ZodType};
//!
//! let port = z::string().try_transform(|value| {
//!     value
//!         .as_str()
//!         .and_then(|s| s.parse::<u16>().ok())
//!         .map(Value::from)
//!         .ok_or_else(|| vec![Issue::custom("Not a port number")])
//! });
//! assert_eq!(port.parse("8080").unwrap(), Value::from(8080));
//! assert!(port.parse("http").is_err());
//! ```

pub mod coerce;
pub mod config;
pub mod context;
pub mod error;
pub mod formats;
pub mod issue;
pub mod result;
pub mod schema;
pub mod value;
pub mod z;

#[cfg(test)]
mod tests;

pub use config::{ConfigValidationError, ParseConfig, UnknownKeys};
pub use context::{Aborted, ParseContext, Step};
pub use error::{Error, FlattenedErrors, Result, ZodError};
pub use issue::{Issue, IssueCode, PathSegment};
pub use result::ParseResult;
pub use schema::{
    ArraySchema, BooleanSchema, DateSchema, MapSchema, Nullable, NumberSchema, ObjectSchema,
    Optional, Refinement, Schema, SetSchema, StringSchema, Transform, WithDefault, ZodType,
};
pub use value::{Value, ValueKind};
