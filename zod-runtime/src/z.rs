//! Schema constructors, named after their Zod counterparts.
//!
//! ```rust
//! use zod_runtime::{z, ZodType};
//!
//! let user = z::object()
//!     .field("email", z::string().email())
//!     .field("isAdmin", z::boolean())
//!     .field("balance", z::number().min(100).max(10_000_000));
//!
//! let out = user.parse(serde_json::json!({
//!     "email": "i@gmail.com",
//!     "isAdmin": true,
//!     "balance": 10_000,
//! }));
//! assert!(out.is_ok());
//! ```

use crate::schema::{
    ArraySchema, BooleanSchema, DateSchema, MapSchema, NumberSchema, ObjectSchema, SetSchema,
    StringSchema, ZodType,
};

pub fn string() -> StringSchema {
    StringSchema::new(false)
}

pub fn number() -> NumberSchema {
    NumberSchema::new(false)
}

pub fn boolean() -> BooleanSchema {
    BooleanSchema::new(false)
}

pub fn date() -> DateSchema {
    DateSchema::new(false)
}

/// An object with no declared keys; add them with [`ObjectSchema::field`].
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

pub fn array(element: impl ZodType + 'static) -> ArraySchema {
    ArraySchema::new(element.boxed())
}

pub fn set(element: impl ZodType + 'static) -> SetSchema {
    SetSchema::new(element.boxed())
}

pub fn map(key: impl ZodType + 'static, value: impl ZodType + 'static) -> MapSchema {
    MapSchema::new(key.boxed(), value.boxed())
}

/// Primitive schemas that convert their input before the type check.
///
/// See [`crate::coerce`] for the conversion rules.
pub mod coerce {
    use crate::schema::{BooleanSchema, DateSchema, NumberSchema, StringSchema};

    pub fn string() -> StringSchema {
        StringSchema::new(true)
    }

    pub fn number() -> NumberSchema {
        NumberSchema::new(true)
    }

    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new(true)
    }

    pub fn date() -> DateSchema {
        DateSchema::new(true)
    }
}
