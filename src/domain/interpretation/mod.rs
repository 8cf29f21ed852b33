//! Interpretation module - static clinical interpretation lookup.

mod table;

pub use table::{
    lookup, reachable_severities, severity_label, validate_completeness, Interpretation,
};
