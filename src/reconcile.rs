//! Reconciliation engine: diffs freshly scraped titles against the
//! current item state and computes the minimal additive write-set.
//!
//! The engine only ever fills gaps. Existing labels are never
//! overwritten, existing aliases never duplicated, existing statements
//! never replaced; the worst it does to present data is merge a missing
//! reference onto a statement that already says the same thing.

use chrono::NaiveDate;
use tracing::debug;

use crate::enrich::law_item::LawItem;
use crate::eurlex::title::WIKIDATA_TEXT_LIMIT;
use crate::extract::Euid;
use crate::wikibase::ItemView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelWrite {
    pub language: String,
    pub text: String,
}

/// All new aliases for one language, applied as a single addition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasWrite {
    pub language: String,
    pub values: Vec<String>,
}

/// Provenance attached to every statement write: where the title was
/// scraped from and when.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceBundle {
    pub source_url: String,
    pub retrieved: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatementOp {
    Append {
        property: String,
        language: String,
        text: String,
        reference: ReferenceBundle,
    },
    /// The statement already exists but does not cite EUR-Lex yet.
    MergeReference {
        statement_id: String,
        reference: ReferenceBundle,
    },
}

#[derive(Clone, Debug, Default)]
pub struct WriteSet {
    pub labels: Vec<LabelWrite>,
    pub aliases: Vec<AliasWrite>,
    pub statements: Vec<StatementOp>,
}

impl WriteSet {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.aliases.is_empty() && self.statements.is_empty()
    }
}

/// Computes the writes needed to bring `item` up to date with what was
/// scraped into `law`. Checks accumulate across languages; one language
/// finding nothing to do never suppresses another.
pub fn reconcile(
    item: &ItemView,
    law: &LawItem,
    title_property: &str,
    retrieved: NaiveDate,
) -> WriteSet {
    let mut writes = WriteSet::default();

    for language in crate::LANGUAGES {
        let language_lower = language.to_lowercase();
        let title = law.title_for(language).filter(|title| !title.too_long());
        let existing_label = item.label(&language_lower);
        let existing_aliases = item.aliases(&language_lower);

        let mut queued_label: Option<String> = None;
        if let Some(title) = title {
            match existing_label {
                None => {
                    queued_label = Some(title.value.clone());
                    writes.labels.push(LabelWrite {
                        language: language_lower.clone(),
                        text: title.value.clone(),
                    });
                }
                Some(label) if label == title.value => {
                    debug!(
                        "Label for {} already matches the scraped title, nothing to add",
                        language_lower
                    );
                }
                Some(_) => {} // becomes an alias candidate below
            }
        }

        // Alias candidates: the title itself when a different label is
        // already in place, then the identifier forms. Identifier aliases
        // only make sense on a language that has (or is getting) a label.
        let has_label = existing_label.is_some() || queued_label.is_some();
        let mut candidates: Vec<String> = Vec::new();
        if let Some(title) = title {
            if existing_label.is_some_and(|label| label != title.value) {
                candidates.push(title.value.clone());
            }
            if let Some(short_name) = title.short_name_without_institution() {
                candidates.push(short_name);
            }
            if let Some(short_name) = title.short_name_with_institution() {
                candidates.push(short_name);
            }
            if let Some(eec_id) = title.extracted_eec_id() {
                candidates.push(eec_id);
            }
        }
        if has_label {
            if let Some(euid) = &law.euid {
                let euid = Euid::new(euid.clone(), language_lower.as_str());
                candidates.push(euid.localized_value());
                candidates.push(euid.localized_without_parens());
            }
        }

        let mut values: Vec<String> = Vec::new();
        for candidate in candidates {
            if candidate.chars().count() > WIKIDATA_TEXT_LIMIT {
                continue;
            }
            if existing_label == Some(candidate.as_str())
                || queued_label.as_deref() == Some(candidate.as_str())
            {
                continue;
            }
            // Case-sensitive exact match against what is already there
            if existing_aliases.iter().any(|alias| *alias == candidate) {
                continue;
            }
            if values.contains(&candidate) {
                continue;
            }
            values.push(candidate);
        }
        if !values.is_empty() {
            writes.aliases.push(AliasWrite {
                language: language_lower,
                values,
            });
        }
    }

    // Statement track: every accepted title gets an official-name
    // statement with an EUR-Lex reference, unless one is already there.
    for title in &law.accepted_titles {
        let language_lower = title.language.to_lowercase();
        let reference = ReferenceBundle {
            source_url: title.eurlex_url(),
            retrieved,
        };

        let existing = item
            .statements(title_property)
            .iter()
            .find(|statement| statement.language == language_lower && statement.text == title.value);

        match existing {
            None => writes.statements.push(StatementOp::Append {
                property: title_property.to_string(),
                language: language_lower,
                text: title.value.clone(),
                reference,
            }),
            Some(statement) => {
                if !statement.reference_urls.contains(&reference.source_url) {
                    if let Some(statement_id) = &statement.id {
                        writes.statements.push(StatementOp::MergeReference {
                            statement_id: statement_id.clone(),
                            reference,
                        });
                    }
                }
            }
        }
    }

    writes
}
