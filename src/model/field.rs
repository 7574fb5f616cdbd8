//! Field descriptors: type, provenance, and storage constraint.

use crate::validate::{ConstraintKind, LengthConstraint, TextEncoding};

/// Storage type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    Int,
    Long,
    Double,
    Text,
    Date,
    Time,
    DateTime,
    StringList,
    Map,
    Binary,
    Unknown,
}

impl FieldType {
    /// Types the panel offers in-place editing for
    pub fn supports_editing(&self) -> bool {
        matches!(
            self,
            FieldType::Bool
                | FieldType::Int
                | FieldType::Long
                | FieldType::Double
                | FieldType::Text
                | FieldType::Date
                | FieldType::Time
                | FieldType::DateTime
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Bool => "boolean",
            FieldType::Int => "integer",
            FieldType::Long => "integer (64 bit)",
            FieldType::Double => "decimal",
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::DateTime => "date & time",
            FieldType::StringList => "string list",
            FieldType::Map => "map",
            FieldType::Binary => "binary",
            FieldType::Unknown => "unknown",
        }
    }
}

/// Where a field's values come from; determines default editability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    /// Raw provider storage
    Provider,
    /// Unsaved edit buffer
    Edit,
    /// Computed (expression/virtual field)
    Expression,
    /// Joined from another source
    Join,
    Unknown,
}

impl FieldOrigin {
    /// Only values backed by storage or the edit buffer can be written back
    pub fn supports_editing(&self) -> bool {
        matches!(self, FieldOrigin::Provider | FieldOrigin::Edit)
    }
}

/// Descriptor for one field of the record source
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    /// Optional display alias; empty = use `name`
    pub alias: String,
    pub field_type: FieldType,
    pub origin: FieldOrigin,
    pub constraint: LengthConstraint,
    /// Generation clause of an auto-generated key, shown in place of the
    /// unset placeholder value
    pub generator_clause: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let constraint = match field_type {
            FieldType::Int | FieldType::Long => LengthConstraint::integer(0, false),
            FieldType::Double => LengthConstraint::decimal(0, 0, false),
            _ => LengthConstraint::byte_text(0, TextEncoding::Utf8, false),
        };
        Self {
            name: name.into(),
            alias: String::new(),
            field_type,
            origin: FieldOrigin::Provider,
            constraint,
            generator_clause: None,
        }
    }

    pub fn with_constraint(mut self, constraint: LengthConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn with_origin(mut self, origin: FieldOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_generator_clause(mut self, clause: impl Into<String>) -> Self {
        self.generator_clause = Some(clause.into());
        self
    }

    /// Name shown in the field column (alias when present)
    pub fn display_name(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }

    /// Whether this field's rows are editable at all (the panel-wide
    /// editable state still gates actual editing)
    pub fn supports_editing(&self) -> bool {
        self.origin.supports_editing() && self.field_type.supports_editing()
    }

    /// Human-readable type/constraint description for the empty-selection
    /// placeholder row
    pub fn type_summary(&self) -> String {
        let c = &self.constraint;
        match c.kind {
            ConstraintKind::Integer if c.total_digits > 0 => {
                format!(
                    "{} ({} digits)",
                    self.field_type.display_name(),
                    c.total_digits
                )
            }
            ConstraintKind::Decimal if c.total_digits > 0 => format!(
                "{} ({}, {})",
                self.field_type.display_name(),
                c.total_digits,
                c.fraction_digits
            ),
            ConstraintKind::ByteText if c.byte_limit > 0 && self.field_type == FieldType::Text => {
                format!(
                    "{} ({} bytes, {})",
                    self.field_type.display_name(),
                    c.byte_limit,
                    c.encoding.name()
                )
            }
            _ => self.field_type.display_name().to_string(),
        }
    }
}
