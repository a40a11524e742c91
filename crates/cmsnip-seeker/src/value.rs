//! Runtime field values.
//!
//! Records expose their fields to a query through an accessor function
//! returning [`Value`]s borrowed from the record.

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use cmsnip_seeker::Value;
///
/// struct Template {
///     name: String,
///     active: bool,
/// }
///
/// fn accessor<'a>(template: &'a Template, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&template.name),
///         "active" => Value::Bool(template.active),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Boolean value.
    Bool(bool),
    /// Field not present or not set.
    None,
}

impl<'a> Value<'a> {
    /// Wraps an optional string, mapping `None` to [`Value::None`].
    pub fn opt_str(value: Option<&'a str>) -> Self {
        value.map_or(Value::None, Value::String)
    }
}
