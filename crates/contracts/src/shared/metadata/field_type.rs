//! Field type enumeration for metadata system

/// Input kind of a field; drives parsing and the form widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    TextArea,
    Email,
    /// Floating point value (prices, discounts)
    Number,
    /// Whole number (stock, sort order, limits)
    Integer,
    Bool,
    /// ISO date, `YYYY-MM-DD`
    Date,
    /// One of `FieldMetadata::enum_values`
    Enum,
    /// Id of another aggregate
    AggregateRef,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Email => "email",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Enum => "enum",
            Self::AggregateRef => "aggregate_ref",
        }
    }

    /// HTML input type used by the form renderer
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Number | Self::Integer => "number",
            Self::Date => "date",
            Self::Bool => "checkbox",
            _ => "text",
        }
    }
}
