use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::Result;

// The document shape is a compatibility contract with the web application:
// term answers are keyed by question text, not stored as an ordered array.

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub categories: Vec<ExportCategory>,
    pub questions: Vec<ExportQuestion>,
    pub terms: Vec<ExportTerm>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportQuestion {
    pub id: i64,
    pub text: String,
    pub order: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTerm {
    pub id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub name: String,
    pub definition: String,
    pub answers: BTreeMap<String, String>,
}

pub fn build(db: &Database) -> Result<ExportDocument> {
    let categories = db
        .list_categories()?
        .into_iter()
        .map(|c| ExportCategory {
            id: c.id,
            name: c.name,
            description: c.description,
        })
        .collect();

    let questions = db
        .list_questions()?
        .into_iter()
        .map(|q| ExportQuestion {
            id: q.id,
            text: q.text,
            order: q.order_num,
        })
        .collect();

    let mut terms = Vec::new();
    for term in db.list_all_terms()? {
        let mut answers = BTreeMap::new();
        for qa in db.term_answers(term.id)? {
            answers.insert(qa.question, qa.answer);
        }
        terms.push(ExportTerm {
            id: term.id,
            category_id: term.category_id,
            name: term.name,
            definition: term.definition,
            answers,
        });
    }

    Ok(ExportDocument {
        categories,
        questions,
        terms,
    })
}

pub fn write_json<P: AsRef<Path>>(db: &Database, path: P) -> Result<ExportDocument> {
    let document = build(db)?;
    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> (Database, i64) {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        let cat = db.insert_category(1, "General", "Foundational concepts").unwrap();
        for (i, text) in crate::seed::STANDARD_QUESTIONS.iter().enumerate() {
            db.insert_question(i as i64 + 1, text).unwrap();
        }
        (db, cat)
    }

    fn qid(db: &Database, order: i64) -> i64 {
        db.list_questions()
            .unwrap()
            .into_iter()
            .find(|q| q.order_num == order)
            .unwrap()
            .id
    }

    #[test]
    fn document_has_three_top_level_collections() {
        let (db, cat) = setup_db();
        db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();

        let doc = build(&db).unwrap();
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.questions.len(), 7);
        assert_eq!(doc.terms.len(), 1);
    }

    #[test]
    fn question_order_is_exported() {
        let (db, _cat) = setup_db();
        let doc = build(&db).unwrap();
        assert_eq!(doc.questions[0].order, 1);
        assert_eq!(doc.questions[0].text, "What does it mean?");
        assert_eq!(doc.questions[6].order, 7);
    }

    #[test]
    fn term_answers_are_keyed_by_question_text() {
        let (db, cat) = setup_db();
        let term = db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();
        let q1 = qid(&db, 1);
        let q2 = qid(&db, 2);
        db.insert_answer(term, q1, "It means ease of use.").unwrap();
        db.insert_answer(term, q2, "Because users give up otherwise.").unwrap();

        let doc = build(&db).unwrap();
        let exported = &doc.terms[0];
        assert_eq!(
            exported.answers.get("What does it mean?").map(String::as_str),
            Some("It means ease of use.")
        );
        assert_eq!(
            exported.answers.get("Why is it important?").map(String::as_str),
            Some("Because users give up otherwise.")
        );
    }

    #[test]
    fn category_id_uses_camel_case_key() {
        let (db, cat) = setup_db();
        db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();

        let doc = build(&db).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"categoryId\""));
        assert!(!json.contains("\"category_id\""));
    }

    #[test]
    fn round_trip_preserves_answer_pairs_regardless_of_insert_order() {
        let (db, cat) = setup_db();
        let term = db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();
        // Answers inserted against questions 3, 1, 2 in that order.
        for order in [3, 1, 2] {
            let question_id = qid(&db, order);
            db.insert_answer(term, question_id, &format!("answer {}", order)).unwrap();
        }

        let json = serde_json::to_string(&build(&db).unwrap()).unwrap();
        let parsed: ExportDocument = serde_json::from_str(&json).unwrap();

        let expected: BTreeMap<String, String> = db
            .term_answers(term)
            .unwrap()
            .into_iter()
            .map(|qa| (qa.question, qa.answer))
            .collect();
        assert_eq!(parsed.terms[0].answers, expected);
        assert_eq!(parsed.terms[0].answers.len(), 3);
    }

    #[test]
    fn terms_exported_in_category_then_sibling_order() {
        let (db, cat) = setup_db();
        let second = db.insert_category(2, "Design", "Design topics").unwrap();
        db.insert_term(second, None, "Later Category", "d", 1).unwrap();
        db.insert_term(cat, None, "Second Sibling", "d", 2).unwrap();
        db.insert_term(cat, None, "First Sibling", "d", 1).unwrap();

        let doc = build(&db).unwrap();
        let names: Vec<&str> = doc.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First Sibling", "Second Sibling", "Later Category"]);
    }

    #[test]
    fn write_json_creates_the_file() {
        let (db, cat) = setup_db();
        db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();

        let dir = std::env::temp_dir().join("hci_review_export_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hci_data.json");
        write_json(&db, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"categories\""));
        assert!(contents.contains("\"questions\""));
        assert!(contents.contains("\"terms\""));
        fs::remove_file(&path).ok();
    }
}
