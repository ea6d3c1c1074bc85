//! Loggers bind their fields in phases: identifiers once at construction,
//! per-unit identifiers once per unit of work, the timestamp and message on
//! every call. Compiling a catalog into a segment list up front means each
//! print only touches the slots that are still open.

use super::field::Field;

/// One compiled position in a line layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and already-bound values pass through untouched.
    Literal(String),
    /// Open slots are substituted with field values at render time.
    Field(Field),
}

/// Pre-compiled line layout: compile once, bind early phases once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTemplate {
    segments: Vec<FormatSegment>,
}

impl FieldTemplate {
    /// Catalog joined by `|`, every slot open.
    #[must_use]
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut segments = Vec::with_capacity(fields.len() * 2);
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                segments.push(FormatSegment::Literal("|".to_string()));
            }
            segments.push(FormatSegment::Field(*field));
        }
        Self { segments }
    }

    /// Catalog joined by `|` with the supplied values bound in place;
    /// fields without a value stay open for a later phase.
    #[must_use]
    pub fn compile(fields: &[Field], values: &FieldValues) -> Self {
        Self::from_fields(fields).bind(values)
    }

    /// Pure binding pass: returns a new template with every supplied value
    /// frozen into its slot. All occurrences of a field bind in one pass.
    /// A slot bound here cannot be re-bound on the result; callers that
    /// need last-write-wins re-bind from the template they derived from.
    #[must_use]
    pub fn bind(&self, values: &FieldValues) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                FormatSegment::Field(field) => values.get(*field).map_or_else(
                    || segment.clone(),
                    |value| FormatSegment::Literal(value.to_string()),
                ),
                FormatSegment::Literal(_) => segment.clone(),
            })
            .collect();
        Self { segments }
    }

    /// Final substitution pass, the hot path for every line. Open slots
    /// with no supplied value render as the empty string.
    #[must_use]
    pub fn render(&self, values: &FieldValues) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => line.push_str(s),
                FormatSegment::Field(field) => line.push_str(values.get(*field).unwrap_or("")),
            }
        }
        line
    }

    /// Tests and diagnostics need direct access to verify compiled layouts.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Fields still awaiting a later binding phase.
    #[must_use]
    pub fn open_fields(&self) -> Vec<Field> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                FormatSegment::Field(field) => Some(*field),
                FormatSegment::Literal(_) => None,
            })
            .collect()
    }
}

/// Typed value bag keyed by [`Field`]. No token strings, no typo risk.
#[derive(Debug, Clone)]
pub struct FieldValues {
    slots: [Option<String>; Field::COUNT],
}

impl FieldValues {
    /// Empty bag; callers chain `with` for just the fields their phase binds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining setter.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.slots[field as usize] = Some(value.into());
        self
    }

    /// In-place setter for loop-driven callers.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.slots[field as usize] = Some(value.into());
    }

    /// Value bound for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slots[field as usize].as_deref()
    }

    /// Overlay: every field set in `other` wins over this bag.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (slot, incoming) in self.slots.iter_mut().zip(&other.slots) {
            if let Some(value) = incoming {
                *slot = Some(value.clone());
            }
        }
        self
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}
