use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A themed column of clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Builds a category out of the service's clue records.
    ///
    /// The title comes from the first record, so an empty list or a first
    /// record without a category title is rejected.
    pub fn from_records(id: CategoryId, records: &[ClueRecord]) -> Result<Self> {
        let first = records.first().ok_or(TriviaError::EmptyCategory(id))?;
        let title = first
            .category
            .as_ref()
            .and_then(|category| category.title.as_deref())
            .ok_or(TriviaError::MissingTitle(id))?;

        let clues = records
            .iter()
            .map(|record| {
                Clue::new(
                    strip_markup(record.question.as_deref().unwrap_or_default()),
                    strip_markup(record.answer.as_deref().unwrap_or_default()),
                )
            })
            .collect();

        Ok(Self::new(strip_markup(title), clues))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}

const ENTITIES: [(&str, char); 6] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
];

/// Renders the service's HTML snippets as plain text.
///
/// Inline tags such as `<i>` are dropped and the common entities decoded. A
/// `<` that isn't followed by a letter or `/` is an ordinary less-than sign.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if ch == '<' && opens_tag(&rest[1..]) {
            if let Some(end) = rest.find('>') {
                rest = &rest[end + 1..];
                continue;
            }
        } else if ch == '&' {
            let entity = ENTITIES
                .iter()
                .find(|(entity, _)| rest.starts_with(*entity));
            if let Some(&(entity, decoded)) = entity {
                out.push(decoded);
                rest = &rest[entity.len()..];
                continue;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    String::from(out.trim())
}

fn opens_tag(after: &str) -> bool {
    after.starts_with(|ch: char| ch.is_ascii_alphabetic() || ch == '/')
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn record(question: &str, answer: &str, title: Option<&str>) -> ClueRecord {
        ClueRecord {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            category: Some(ClueCategory {
                title: title.map(|t| t.to_string()),
            }),
        }
    }

    #[test]
    fn title_comes_from_first_record() {
        let records = [
            record("2+2", "4", Some("Math")),
            record("1+1", "2", Some("Something else")),
        ];

        let category = Category::from_records(10, &records).unwrap();

        assert_eq!(category.title(), "Math");
        assert_eq!(category.clues().len(), 2);
        assert_eq!(category.clues()[1].question(), "1+1");
        assert!(category.clues().iter().all(|c| c.state().is_hidden()));
    }

    #[test]
    fn empty_records_are_rejected() {
        assert_eq!(
            Category::from_records(3, &[]),
            Err(TriviaError::EmptyCategory(3))
        );
    }

    #[test]
    fn missing_title_is_rejected() {
        let untitled = [record("q", "a", None)];
        assert_eq!(
            Category::from_records(4, &untitled),
            Err(TriviaError::MissingTitle(4))
        );

        let no_category = [ClueRecord {
            question: Some("q".to_string()),
            answer: Some("a".to_string()),
            category: None,
        }];
        assert_eq!(
            Category::from_records(5, &no_category),
            Err(TriviaError::MissingTitle(5))
        );
    }

    #[test]
    fn missing_text_becomes_empty() {
        let records = vec![ClueRecord {
            question: None,
            answer: None,
            category: Some(ClueCategory {
                title: Some("Literature".to_string()),
            }),
        }];

        let category = Category::from_records(1, &records).unwrap();
        assert_eq!(category.clues()[0].question(), "");
        assert_eq!(category.clues()[0].answer(), "");
    }

    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("<i>Hamlet</i>"), "Hamlet");
        assert_eq!(strip_markup("  the <b>Bell</b> Jar "), "the Bell Jar");
        assert_eq!(strip_markup("x < 3"), "x < 3");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn strip_markup_keeps_bare_less_than() {
        assert_eq!(strip_markup("x < 3 and <i>y</i>"), "x < 3 and y");
        assert_eq!(strip_markup("1<2 but 3 > 2"), "1<2 but 3 > 2");
        assert_eq!(strip_markup("dangling <b"), "dangling <b");
    }

    #[test]
    fn strip_markup_decodes_entities() {
        assert_eq!(strip_markup("Simon &amp; Garfunkel"), "Simon & Garfunkel");
        assert_eq!(strip_markup("&quot;Ulysses&quot;"), "\"Ulysses\"");
        assert_eq!(strip_markup("Rock &#39;n&#39; roll"), "Rock 'n' roll");
        assert_eq!(strip_markup("&lt;i&gt; stays text"), "<i> stays text");
        assert_eq!(strip_markup("AT&T"), "AT&T");
    }

    #[test]
    fn from_records_cleans_question_and_answer() {
        let records = [record(
            "x < 3 &amp; <i>y</i>",
            "<b>Hamlet</b>",
            Some("Books &amp; Authors"),
        )];

        let category = Category::from_records(8, &records).unwrap();

        assert_eq!(category.title(), "Books & Authors");
        assert_eq!(category.clues()[0].question(), "x < 3 & y");
        assert_eq!(category.clues()[0].answer(), "Hamlet");
    }
}
