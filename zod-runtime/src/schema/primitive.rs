//! `z.boolean()`

use super::{TypeMessages, ZodType};
use crate::coerce;
use crate::context::{ParseContext, Step};
use crate::value::Value;

/// Boolean schema. With coercion, any input converts by JavaScript truthiness.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    coerce: bool,
    messages: TypeMessages,
}

super::impl_type_messages!(BooleanSchema);

impl BooleanSchema {
    pub(crate) fn new(coerce: bool) -> Self {
        Self {
            coerce,
            ..Self::default()
        }
    }
}

impl ZodType for BooleanSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let input = if self.coerce {
            coerce::to_boolean(input)
        } else {
            input
        };
        match input {
            Value::Bool(b) => Ok(Value::Bool(b)),
            other => Err(self.messages.reject(ctx, "boolean", &other)),
        }
    }

    fn expr(&self) -> String {
        if self.coerce {
            "z.coerce.boolean()".to_string()
        } else {
            "z.boolean()".to_string()
        }
    }
}
