//! Column-oriented storage for generated values.

use std::collections::BTreeMap;
use std::fmt;

/// Every column the generator can emit.
///
/// Declaration order is the canonical column order used on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Name,
    Sin,
    Address,
    Address1,
    Address2,
    City,
    Province,
    Postal,
    Wage,
    Job,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Name,
        Field::Sin,
        Field::Address,
        Field::Address1,
        Field::Address2,
        Field::City,
        Field::Province,
        Field::Postal,
        Field::Wage,
        Field::Job,
    ];

    /// Column name used in exported tables.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Name => "name",
            Field::Sin => "sin",
            Field::Address => "address",
            Field::Address1 => "address1",
            Field::Address2 => "address2",
            Field::City => "city",
            Field::Province => "province",
            Field::Postal => "postal",
            Field::Wage => "wage",
            Field::Job => "job",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A group of fields produced by one generator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Name,
    Sin,
    Address,
    Wage,
    Job,
}

impl Category {
    /// All categories in batch generation order.
    pub const ALL: [Category; 5] = [
        Category::Name,
        Category::Sin,
        Category::Address,
        Category::Wage,
        Category::Job,
    ];

    /// Fields one call of this category appends to.
    pub fn fields(self, split_name: bool, split_address: bool) -> &'static [Field] {
        match self {
            Category::Name if split_name => &[Field::FirstName, Field::LastName],
            Category::Name => &[Field::Name],
            Category::Sin => &[Field::Sin],
            Category::Address if split_address => &[
                Field::Address1,
                Field::Address2,
                Field::City,
                Field::Province,
                Field::Postal,
            ],
            Category::Address => &[Field::Address],
            Category::Wage => &[Field::Wage],
            Category::Job => &[Field::Job],
        }
    }
}

/// Generated values keyed by field, one entry appended per generator call.
///
/// A field is absent until its first value is pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    columns: BTreeMap<Field, Vec<String>>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an accumulator from ready-made columns.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (Field, Vec<String>)>,
    {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Append a value to a field's column.
    pub fn push(&mut self, field: Field, value: impl Into<String>) {
        self.columns.entry(field).or_default().push(value.into());
    }

    /// Values generated for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.columns.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    /// Populated fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.columns.keys().copied()
    }

    /// Populated columns in canonical order.
    pub fn columns(&self) -> impl Iterator<Item = (Field, &[String])> + '_ {
        self.columns
            .iter()
            .map(|(field, values)| (*field, values.as_slice()))
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Shared column length, or `None` if columns disagree.
    ///
    /// An empty accumulator has zero rows.
    pub fn row_count(&self) -> Option<usize> {
        let mut lengths = self.columns.values().map(Vec::len);
        match lengths.next() {
            None => Some(0),
            Some(first) => lengths.all(|len| len == first).then_some(first),
        }
    }

    /// Drop all values, e.g. before a new batch.
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
