//! Fixed column schemas of the two datasets and the default-filling rule.

use crate::errors::{AppError, AppResult};
use std::fmt;

/// Column names as they appear in the CSV header.
pub mod col {
    pub const FILL_UP_ID: &str = "idCarga";
    pub const DEDUCTION_ID: &str = "idRestaLitros";
    pub const VEHICLE: &str = "coche";
    pub const DATE: &str = "fecha";
    pub const TIME: &str = "hora";
    pub const FILL_LOCATION: &str = "lugarCarga";
    pub const METER_START: &str = "contadorLitrosInicio";
    pub const METER_END: &str = "contadorLitrosCierre";
    pub const LITERS_FILLED: &str = "litrosCargados";
    pub const PRICE: &str = "precio";
    pub const OLD_SEAL: &str = "numeroPrecintoViejo";
    pub const NEW_SEAL: &str = "numeroPrecintoNuevo";
    pub const LITERS_DEDUCTED: &str = "litrosRestados";
    pub const COMMENT: &str = "comentario";
    pub const USER: &str = "usuario";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Date,
    Time,
}

impl ColumnKind {
    pub fn default_value(self) -> &'static str {
        match self {
            ColumnKind::Integer => "0",
            ColumnKind::Text | ColumnKind::Date | ColumnKind::Time => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn int(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Integer,
    }
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Text,
    }
}

#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub id_column: &'static str,
    pub date_column: &'static str,
    pub columns: &'static [Column],
}

impl Schema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}

pub const FILL_UP: Schema = Schema {
    name: "fuel fill-ups",
    id_column: col::FILL_UP_ID,
    date_column: col::DATE,
    columns: &[
        int(col::FILL_UP_ID),
        int(col::VEHICLE),
        Column {
            name: col::DATE,
            kind: ColumnKind::Date,
        },
        Column {
            name: col::TIME,
            kind: ColumnKind::Time,
        },
        text(col::FILL_LOCATION),
        int(col::METER_START),
        int(col::METER_END),
        int(col::LITERS_FILLED),
        int(col::PRICE),
        int(col::OLD_SEAL),
        int(col::NEW_SEAL),
        text(col::COMMENT),
        text(col::USER),
    ],
};

pub const DEDUCTION: Schema = Schema {
    name: "fuel deductions",
    id_column: col::DEDUCTION_ID,
    date_column: col::DATE,
    columns: &[
        int(col::DEDUCTION_ID),
        int(col::VEHICLE),
        Column {
            name: col::DATE,
            kind: ColumnKind::Date,
        },
        Column {
            name: col::TIME,
            kind: ColumnKind::Time,
        },
        int(col::LITERS_DEDUCTED),
        text(col::COMMENT),
        text(col::USER),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(u64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Caller-supplied values for one new row. May be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_int(mut self, column: &str, value: u64) -> Self {
        self.set(column, FieldValue::Int(value));
        self
    }

    pub fn with_text(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, FieldValue::Text(value.into()));
        self
    }

    /// Insert or replace the value of `column`.
    pub fn set(&mut self, column: &str, value: FieldValue) {
        match self.entries.iter_mut().find(|(c, _)| c == column) {
            Some((_, v)) => *v = value,
            None => self.entries.push((column.to_string(), value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }
}

/// One value per schema column, in schema order: the supplied value when
/// present, otherwise the column default (`0` for integers, `""` otherwise).
///
/// Fields naming columns outside the schema are ignored. A text value given
/// for an integer column must parse as a non-negative integer.
pub fn fill_defaults(schema: &Schema, fields: &Fields) -> AppResult<Vec<(&'static str, String)>> {
    schema
        .columns
        .iter()
        .map(|column| -> AppResult<(&'static str, String)> {
            let value = match (fields.get(column.name), column.kind) {
                (None, kind) => kind.default_value().to_string(),
                (Some(FieldValue::Text(s)), ColumnKind::Integer) => s
                    .trim()
                    .parse::<u64>()
                    .map(|n| n.to_string())
                    .map_err(|_| AppError::InvalidNumber {
                        column: column.name.to_string(),
                        value: s.clone(),
                    })?,
                (Some(v), _) => v.to_string(),
            };
            Ok((column.name, value))
        })
        .collect()
}
