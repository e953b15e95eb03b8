use super::field_type::FieldType;
use super::validation::ValidationRules;

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Key in DTO JSON and in form values (camelCase)
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Create wizard step the field belongs to
    pub step: usize,
    pub enum_values: Option<&'static [&'static str]>,
    pub ref_aggregate: Option<&'static str>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            step: 0,
            enum_values: None,
            ref_aggregate: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub const fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.validation.min = min;
        self.validation.max = max;
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    pub const fn hidden_in_form(mut self) -> Self {
        self.ui.visible_in_form = false;
        self
    }

    pub const fn values(mut self, values: &'static [&'static str]) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub const fn references(mut self, aggregate: &'static str) -> Self {
        self.ref_aggregate = Some(aggregate);
        self
    }

    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Validates a raw form value according to the field type and rules
    pub fn validate(&self, value: &str) -> Result<(), String> {
        let label = self.ui.label;
        self.validation.validate_string(value, label)?;

        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        match self.field_type {
            FieldType::Number => {
                let n: f64 = value
                    .parse()
                    .map_err(|_| format!("{} must be a number", label))?;
                self.validation.validate_number(n, label)
            }
            FieldType::Integer => {
                let n: i64 = value
                    .parse()
                    .map_err(|_| format!("{} must be a whole number", label))?;
                self.validation.validate_number(n as f64, label)
            }
            FieldType::Bool => match value {
                "true" | "false" => Ok(()),
                _ => Err(format!("{} must be true or false", label)),
            },
            FieldType::Date => chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label)),
            FieldType::Email => {
                let valid = value
                    .split_once('@')
                    .map_or(false, |(user, domain)| !user.is_empty() && domain.contains('.'));
                if valid {
                    Ok(())
                } else {
                    Err(format!("{} must be an e-mail address", label))
                }
            }
            FieldType::Enum => match self.enum_values {
                Some(values) if !values.contains(&value) => {
                    Err(format!("{} has an unknown value '{}'", label, value))
                }
                _ => Ok(()),
            },
            FieldType::AggregateRef => uuid::Uuid::parse_str(value)
                .map(|_| ())
                .map_err(|_| format!("{} must reference an existing record", label)),
            FieldType::Text | FieldType::TextArea => Ok(()),
        }
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            hint: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labeled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE: FieldMetadata = FieldMetadata::new("price", "Price", FieldType::Number)
        .required()
        .range(Some(0.0), None);

    #[test]
    fn test_number_field() {
        assert!(PRICE.validate("19.99").is_ok());
        assert!(PRICE.validate("-1").is_err());
        assert!(PRICE.validate("abc").is_err());
        assert!(PRICE.validate("").is_err());
    }

    #[test]
    fn test_optional_field_accepts_empty() {
        let f = FieldMetadata::new("validUntil", "Valid until", FieldType::Date);
        assert!(f.validate("").is_ok());
        assert!(f.validate("2025-02-30").is_err());
        assert!(f.validate("2025-02-28").is_ok());
    }

    #[test]
    fn test_enum_and_email() {
        let role = FieldMetadata::new("role", "Role", FieldType::Enum).values(&["admin", "support"]);
        assert!(role.validate("admin").is_ok());
        assert!(role.validate("root").is_err());

        let email = FieldMetadata::new("email", "E-mail", FieldType::Email);
        assert!(email.validate("ann@shop.example").is_ok());
        assert!(email.validate("ann").is_err());
        assert!(email.validate("@shop.example").is_err());
    }
}
