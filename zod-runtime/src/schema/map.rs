//! `z.map(key, value)`

use super::{Schema, TypeMessages, ZodType};
use crate::context::{Aborted, ParseContext, Step};
use crate::issue::PathSegment;
use crate::value::Value;

/// Map schema.
///
/// Each entry's key and value are validated against their own schemas. Issues
/// are reported under the display form of the entry's input key, followed by
/// `key` or `value` for the side that failed.
#[derive(Debug, Clone)]
pub struct MapSchema {
    key: Schema,
    value: Schema,
    messages: TypeMessages,
}

super::impl_type_messages!(MapSchema);

impl MapSchema {
    pub(crate) fn new(key: Schema, value: Schema) -> Self {
        Self {
            key,
            value,
            messages: TypeMessages::default(),
        }
    }
}

impl ZodType for MapSchema {
    fn parse_value(&self, input: Value, ctx: &mut ParseContext<'_>) -> Step {
        let entries = match input {
            Value::Map(entries) => entries,
            other => return Err(self.messages.reject(ctx, "map", &other)),
        };

        let mut output = Vec::with_capacity(entries.len());
        let mut aborted = false;
        for (key, value) in entries {
            if ctx.is_halted() {
                break;
            }
            let segment = PathSegment::Key(key.to_string());
            let parsed_key = ctx.nested(segment.clone(), |ctx| {
                ctx.nested("key", |ctx| self.key.parse_value(key, ctx))
            });
            let parsed_value = ctx.nested(segment, |ctx| {
                ctx.nested("value", |ctx| self.value.parse_value(value, ctx))
            });
            match (parsed_key, parsed_value) {
                (Ok(k), Ok(v)) => output.push((k, v)),
                _ => aborted = true,
            }
        }

        if aborted {
            Err(Aborted)
        } else {
            Ok(Value::map(output))
        }
    }

    fn expr(&self) -> String {
        format!("z.map({}, {})", self.key.expr(), self.value.expr())
    }
}
