//! Section renderers and the table machinery they share.
//!
//! A section is a heading plus an ordered table of [`Subsection`]s. Each row
//! pairs a presence predicate with a render function; the heading is written
//! only when some row's predicate holds, and only rows whose predicate holds
//! are rendered.

pub mod amenities;
pub mod identity;
pub mod reviews;

pub(crate) struct Subsection<C: ?Sized> {
    pub present: fn(&C) -> bool,
    pub render: fn(&C, &mut String),
}

/// Probe every row, then render the heading and the present rows.
pub(crate) fn render_section<C: ?Sized>(
    heading: &str,
    rows: &[Subsection<C>],
    ctx: &C,
    out: &mut String,
) {
    if !rows.iter().any(|row| (row.present)(ctx)) {
        return;
    }
    heading_line(out, 1, heading);
    for row in rows {
        if (row.present)(ctx) {
            (row.render)(ctx, out);
        }
    }
}

/// A boolean amenity flag and the line it renders as when set.
pub(crate) struct Flag<T> {
    pub get: fn(&T) -> Option<bool>,
    pub label: &'static str,
    pub value: &'static str,
}

impl<T> Flag<T> {
    fn is_set(&self, target: &T) -> bool {
        (self.get)(target) == Some(true)
    }
}

pub(crate) fn any_flag_set<T>(flags: &[Flag<T>], target: &T) -> bool {
    flags.iter().any(|flag| flag.is_set(target))
}

/// Writes one fact line per set flag, in table order.
pub(crate) fn render_flags<T>(flags: &[Flag<T>], target: &T, out: &mut String) {
    for flag in flags.iter().filter(|flag| flag.is_set(target)) {
        fact(out, flag.label, flag.value);
    }
}

pub(crate) fn heading_line(out: &mut String, level: usize, text: &str) {
    out.push_str(&"#".repeat(level));
    out.push(' ');
    out.push_str(text);
    out.push_str("\n\n");
}

/// `label: value` followed by a blank line.
pub(crate) fn fact(out: &mut String, label: &str, value: &str) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
    out.push_str("\n\n");
}

pub(crate) fn paragraph(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n");
}

/// An optional string field, treating `""` as absent.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
