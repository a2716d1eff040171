//! Turns a match set into what the user sees.
//!
//! The result policy has one decision point, the number of matches:
//! none gives a not-found notice, one gives the detail view directly and
//! several give a suggestion list whose entries each lead back to the
//! single-match path.

use crate::advisory::sbp_advisory;
use crate::catalog::Catalog;
use crate::labels::label_for;
use crate::record::{TerminalRecord, MODEL_FIELD, TERMINAL_TYPE_FIELD};

pub const NOT_FOUND_MESSAGE: &str = "Модель не найдена";

const NEGATIVE_VALUE: &str = "нет";
const SBP_FIELD: &str = "sbp";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// No query.
    #[default]
    Empty,
    NotFound,
    Suggestions(Vec<Suggestion>),
    Detail(DetailView),
}

/// A selectable entry in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    /// Catalog index of the record this entry selects.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub header: Vec<DetailLine>,
    pub body: Vec<DetailLine>,
}

impl DetailView {
    pub fn lines(&self) -> impl Iterator<Item = &DetailLine> {
        self.header.iter().chain(self.body.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Field {
        label: String,
        value: String,
        muted: bool,
    },
    Advisory(String),
}

impl DetailLine {
    fn field(name: &str, value: &str) -> Self {
        DetailLine::Field {
            label: label_for(name).to_string(),
            value: value.to_string(),
            muted: is_muted(value),
        }
    }
}

/// Whether a value reads as a plain "no" and should be de-emphasized.
pub fn is_muted(value: &str) -> bool {
    value.trim().to_lowercase() == NEGATIVE_VALUE
}

/// Apply the result policy to the catalog indices a filter produced.
pub fn present(catalog: &Catalog, matches: &[usize]) -> View {
    match matches {
        [] => View::NotFound,
        [index] => match catalog.get(*index) {
            Some(record) => View::Detail(detail_view(record)),
            None => View::NotFound,
        },
        _ => View::Suggestions(
            matches
                .iter()
                .filter_map(|&index| {
                    catalog.get(index).map(|record| Suggestion {
                        label: record.model().to_string(),
                        index,
                    })
                })
                .collect(),
        ),
    }
}

/// Full detail view for one record.
pub fn detail_view(record: &TerminalRecord) -> DetailView {
    let header = vec![
        DetailLine::Field {
            label: label_for(MODEL_FIELD).to_string(),
            value: record.model().to_string(),
            muted: false,
        },
        DetailLine::Field {
            label: label_for(TERMINAL_TYPE_FIELD).to_string(),
            value: record.terminal_type().to_string(),
            muted: false,
        },
    ];

    let mut body = Vec::new();
    for (name, value) in record.fields() {
        if name == MODEL_FIELD || value.is_empty() {
            continue;
        }
        body.push(DetailLine::field(name, value));
        if name == SBP_FIELD {
            if let Some(advisory) = sbp_advisory(record) {
                body.push(DetailLine::Advisory(advisory.to_string()));
            }
        }
    }

    DetailView { header, body }
}
