use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{
    Category, CategoryOverview, Question, QuestionAnswer, SearchHit, Term, TermDetail,
    TermSummary,
};

const NIELSEN_PARENT: &str = "Nielsen's Original Heuristics";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database file. The file must already exist; the
    /// study tool never creates the store implicitly.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::StoreUnavailable(path.to_path_buf()));
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// Open (creating if necessary) a database file for the population pass.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::from_connection(Connection::open(path.as_ref())?)?;
        db.init()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Self::from_connection(Connection::open_in_memory()?)?;
        db.init()?;
        Ok(db)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_num INTEGER NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_num INTEGER NOT NULL,
                question_text TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS terms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER NOT NULL,
                parent_term_id INTEGER,
                name TEXT NOT NULL,
                definition TEXT NOT NULL,
                hierarchy_level INTEGER NOT NULL DEFAULT 0,
                order_num INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (category_id) REFERENCES categories(id),
                FOREIGN KEY (parent_term_id) REFERENCES terms(id)
            );

            CREATE TABLE IF NOT EXISTS answers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                term_id INTEGER NOT NULL,
                question_id INTEGER NOT NULL,
                answer_text TEXT NOT NULL,
                UNIQUE (term_id, question_id),
                FOREIGN KEY (term_id) REFERENCES terms(id),
                FOREIGN KEY (question_id) REFERENCES questions(id)
            );

            CREATE INDEX IF NOT EXISTS idx_terms_category ON terms(category_id);
            CREATE INDEX IF NOT EXISTS idx_terms_parent ON terms(parent_term_id);
            CREATE INDEX IF NOT EXISTS idx_answers_term ON answers(term_id);
            "#,
        )?;
        Ok(())
    }

    // Write operations (population pass only)

    pub fn insert_category(&self, order_num: i64, name: &str, description: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO categories (order_num, name, description) VALUES (?1, ?2, ?3)",
            params![order_num, name, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_question(&self, order_num: i64, text: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO questions (order_num, question_text) VALUES (?1, ?2)",
            params![order_num, text],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a term. The hierarchy level is derived from the parent here,
    /// never supplied by the caller, so a child is always exactly one level
    /// below its parent and a root is always level 0.
    pub fn insert_term(
        &self,
        category_id: i64,
        parent_term_id: Option<i64>,
        name: &str,
        definition: &str,
        order_num: i64,
    ) -> Result<i64> {
        let category_exists = self
            .conn
            .prepare("SELECT 1 FROM categories WHERE id = ?1")?
            .exists(params![category_id])?;
        if !category_exists {
            return Err(Error::Integrity(format!(
                "category {} does not exist",
                category_id
            )));
        }

        let hierarchy_level = match parent_term_id {
            None => 0,
            Some(parent_id) => {
                let parent: Option<(i64, i64)> = self
                    .conn
                    .query_row(
                        "SELECT hierarchy_level, category_id FROM terms WHERE id = ?1",
                        params![parent_id],
                        |row| Ok((row.get(0)?, row.get(1)?)),
                    )
                    .optional()?;
                match parent {
                    None => {
                        return Err(Error::Integrity(format!(
                            "parent term {} does not exist",
                            parent_id
                        )))
                    }
                    Some((_, parent_category)) if parent_category != category_id => {
                        return Err(Error::Integrity(format!(
                            "parent term {} belongs to category {}, not {}",
                            parent_id, parent_category, category_id
                        )))
                    }
                    Some((parent_level, _)) => parent_level + 1,
                }
            }
        };

        self.conn.execute(
            r#"
            INSERT INTO terms (category_id, parent_term_id, name, definition, hierarchy_level, order_num)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                category_id,
                parent_term_id,
                name,
                definition,
                hierarchy_level,
                order_num
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_answer(&self, term_id: i64, question_id: i64, text: &str) -> Result<i64> {
        let term_exists = self
            .conn
            .prepare("SELECT 1 FROM terms WHERE id = ?1")?
            .exists(params![term_id])?;
        if !term_exists {
            return Err(Error::Integrity(format!("term {} does not exist", term_id)));
        }

        let question_exists = self
            .conn
            .prepare("SELECT 1 FROM questions WHERE id = ?1")?
            .exists(params![question_id])?;
        if !question_exists {
            return Err(Error::Integrity(format!(
                "question {} does not exist",
                question_id
            )));
        }

        let already_answered = self
            .conn
            .prepare("SELECT 1 FROM answers WHERE term_id = ?1 AND question_id = ?2")?
            .exists(params![term_id, question_id])?;
        if already_answered {
            return Err(Error::Integrity(format!(
                "term {} already has an answer for question {}",
                term_id, question_id
            )));
        }

        self.conn.execute(
            "INSERT INTO answers (term_id, question_id, answer_text) VALUES (?1, ?2, ?3)",
            params![term_id, question_id, text],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    // Read operations (query layer)

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, order_num, name, description FROM categories ORDER BY order_num",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                order_num: row.get(1)?,
                name: row.get(2)?,
                description: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn category_overview(&self) -> Result<Vec<CategoryOverview>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT c.name, c.description, COUNT(t.id)
            FROM categories c
            LEFT JOIN terms t ON c.id = t.category_id
            GROUP BY c.id
            ORDER BY c.order_num
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryOverview {
                name: row.get(0)?,
                description: row.get(1)?,
                term_count: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn list_questions(&self) -> Result<Vec<Question>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, order_num, question_text FROM questions ORDER BY order_num")?;
        let rows = stmt.query_map([], |row| {
            Ok(Question {
                id: row.get(0)?,
                order_num: row.get(1)?,
                text: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn list_terms_by_category(&self, category_id: i64) -> Result<Vec<TermSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, definition FROM terms WHERE category_id = ?1 ORDER BY order_num",
        )?;
        let rows = stmt.query_map(params![category_id], Self::term_summary_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring search over name and definition. An empty
    /// query matches nothing rather than everything.
    pub fn search_terms(&self, query: &str) -> Result<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT t.name, t.definition, c.name
            FROM terms t
            JOIN categories c ON t.category_id = c.id
            WHERE t.name LIKE ?1 OR t.definition LIKE ?1
            ORDER BY t.name
            "#,
        )?;
        let rows = stmt.query_map(params![pattern], |row| {
            Ok(SearchHit {
                name: row.get(0)?,
                definition: row.get(1)?,
                category: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Exact-name lookup joining the category and every recorded answer in
    /// question order. Duplicate names resolve to the lowest term id.
    pub fn get_term_detail(&self, name: &str) -> Result<TermDetail> {
        let found: Option<(i64, String, String, String)> = self
            .conn
            .query_row(
                r#"
                SELECT t.id, t.name, t.definition, c.name
                FROM terms t
                JOIN categories c ON t.category_id = c.id
                WHERE t.name = ?1
                ORDER BY t.id
                LIMIT 1
                "#,
                params![name],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        let (term_id, name, definition, category) = found
            .ok_or_else(|| Error::NotFound(format!("term '{}'", name)))?;

        Ok(TermDetail {
            name,
            definition,
            category,
            answers: self.term_answers(term_id)?,
        })
    }

    /// All answers for a term, ordered by the question's position in the
    /// fixed set rather than by insertion order.
    pub fn term_answers(&self, term_id: i64) -> Result<Vec<QuestionAnswer>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT q.question_text, a.answer_text
            FROM answers a
            JOIN questions q ON a.question_id = q.id
            WHERE a.term_id = ?1
            ORDER BY q.order_num
            "#,
        )?;
        let rows = stmt.query_map(params![term_id], |row| {
            Ok(QuestionAnswer {
                question: row.get(0)?,
                answer: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// The "why is it important?" and "when/where is it used?" answers,
    /// shown as recall prompts in quiz mode.
    pub fn key_answers(&self, term_id: i64) -> Result<Vec<QuestionAnswer>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT q.question_text, a.answer_text
            FROM answers a
            JOIN questions q ON a.question_id = q.id
            WHERE a.term_id = ?1 AND q.order_num IN (2, 3)
            ORDER BY q.order_num
            "#,
        )?;
        let rows = stmt.query_map(params![term_id], |row| {
            Ok(QuestionAnswer {
                question: row.get(0)?,
                answer: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn random_term(&self) -> Result<Option<TermSummary>> {
        use rand::seq::SliceRandom;
        let all = self.all_term_summaries()?;
        let mut rng = rand::thread_rng();
        Ok(all.choose(&mut rng).cloned())
    }

    /// Up to `n` distinct terms in random order. A request larger than the
    /// term population returns every term once (a short read, not an error).
    pub fn random_terms(&self, n: usize) -> Result<Vec<TermSummary>> {
        use rand::seq::SliceRandom;
        let all = self.all_term_summaries()?;
        let mut rng = rand::thread_rng();
        Ok(all.choose_multiple(&mut rng, n).cloned().collect())
    }

    pub fn list_children(&self, parent_term_id: i64) -> Result<Vec<Term>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, category_id, parent_term_id, name, definition, hierarchy_level, order_num
            FROM terms
            WHERE parent_term_id = ?1
            ORDER BY order_num
            "#,
        )?;
        let rows = stmt.query_map(params![parent_term_id], Self::term_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Convenience wrapper over `list_children` for the hard-coded
    /// heuristics view. Returns an empty list when the parent term has not
    /// been populated.
    pub fn nielsen_heuristics(&self) -> Result<Vec<TermSummary>> {
        match self.find_term_id(NIELSEN_PARENT)? {
            None => Ok(Vec::new()),
            Some(parent_id) => Ok(self
                .list_children(parent_id)?
                .into_iter()
                .map(|t| TermSummary {
                    id: t.id,
                    name: t.name,
                    definition: t.definition,
                })
                .collect()),
        }
    }

    pub fn find_term_id(&self, name: &str) -> Result<Option<i64>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id FROM terms WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Every term in export order: by category, then sibling order.
    pub fn list_all_terms(&self) -> Result<Vec<Term>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, category_id, parent_term_id, name, definition, hierarchy_level, order_num
            FROM terms
            ORDER BY category_id, order_num
            "#,
        )?;
        let rows = stmt.query_map([], Self::term_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn term_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM terms", [], |row| row.get(0))?)
    }

    pub fn answer_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM answers", [], |row| row.get(0))?)
    }

    fn all_term_summaries(&self) -> Result<Vec<TermSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, definition FROM terms ORDER BY id")?;
        let rows = stmt.query_map([], Self::term_summary_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn term_summary_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TermSummary> {
        Ok(TermSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            definition: row.get(2)?,
        })
    }

    fn term_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Term> {
        Ok(Term {
            id: row.get(0)?,
            category_id: row.get(1)?,
            parent_term_id: row.get(2)?,
            name: row.get(3)?,
            definition: row.get(4)?,
            hierarchy_level: row.get(5)?,
            order_num: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().expect("Failed to create in-memory database")
    }

    // A category with id returned, plus the seven standard questions.
    fn setup_with_questions() -> (Database, i64) {
        let db = setup_db();
        let cat = db.insert_category(1, "General", "Foundational concepts").unwrap();
        for (i, text) in crate::seed::STANDARD_QUESTIONS.iter().enumerate() {
            db.insert_question(i as i64 + 1, text).unwrap();
        }
        (db, cat)
    }

    // Question id for a given position in the fixed set.
    fn qid(db: &Database, order: i64) -> i64 {
        db.list_questions()
            .unwrap()
            .into_iter()
            .find(|q| q.order_num == order)
            .unwrap()
            .id
    }

    mod init_tests {
        use super::*;

        #[test]
        fn init_creates_tables() {
            let db = setup_db();
            assert_eq!(db.term_count().unwrap(), 0);
            assert_eq!(db.answer_count().unwrap(), 0);
            assert!(db.list_categories().unwrap().is_empty());
            assert!(db.list_questions().unwrap().is_empty());
        }

        #[test]
        fn init_is_idempotent() {
            let db = setup_db();
            db.insert_category(1, "General", "desc").unwrap();
            db.init().expect("Re-init should succeed");
            assert_eq!(db.list_categories().unwrap().len(), 1);
        }

        #[test]
        fn open_missing_file_is_store_unavailable() {
            let result = Database::open("definitely_not_here.db");
            assert!(matches!(result, Err(Error::StoreUnavailable(_))));
        }
    }

    mod category_tests {
        use super::*;

        #[test]
        fn list_categories_ordered_by_order_num() {
            let db = setup_db();
            db.insert_category(3, "Evaluation", "c").unwrap();
            db.insert_category(1, "General", "a").unwrap();
            db.insert_category(2, "Design", "b").unwrap();

            let cats = db.list_categories().unwrap();
            let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["General", "Design", "Evaluation"]);
        }

        #[test]
        fn list_categories_empty_store() {
            let db = setup_db();
            assert!(db.list_categories().unwrap().is_empty());
        }

        #[test]
        fn category_overview_counts_terms() {
            let db = setup_db();
            let a = db.insert_category(1, "A", "first").unwrap();
            db.insert_category(2, "B", "second").unwrap();
            db.insert_term(a, None, "T1", "d", 1).unwrap();
            db.insert_term(a, None, "T2", "d", 2).unwrap();

            let overview = db.category_overview().unwrap();
            assert_eq!(overview.len(), 2);
            assert_eq!(overview[0].term_count, 2);
            assert_eq!(overview[1].term_count, 0);
        }
    }

    mod term_write_tests {
        use super::*;

        #[test]
        fn insert_term_rejects_missing_category() {
            let db = setup_db();
            let result = db.insert_term(999, None, "Orphan", "d", 1);
            assert!(matches!(result, Err(Error::Integrity(_))));
        }

        #[test]
        fn insert_term_rejects_missing_parent() {
            let db = setup_db();
            let cat = db.insert_category(1, "General", "d").unwrap();
            let result = db.insert_term(cat, Some(999), "Child", "d", 1);
            assert!(matches!(result, Err(Error::Integrity(_))));
        }

        #[test]
        fn insert_term_rejects_cross_category_parent() {
            let db = setup_db();
            let a = db.insert_category(1, "A", "d").unwrap();
            let b = db.insert_category(2, "B", "d").unwrap();
            let parent = db.insert_term(a, None, "Parent", "d", 1).unwrap();

            let result = db.insert_term(b, Some(parent), "Child", "d", 1);
            assert!(matches!(result, Err(Error::Integrity(_))));
        }

        #[test]
        fn root_term_has_level_zero() {
            let db = setup_db();
            let cat = db.insert_category(1, "General", "d").unwrap();
            let id = db.insert_term(cat, None, "Root", "d", 1).unwrap();

            let terms = db.list_all_terms().unwrap();
            let root = terms.iter().find(|t| t.id == id).unwrap();
            assert_eq!(root.hierarchy_level, 0);
            assert!(root.parent_term_id.is_none());
        }

        #[test]
        fn child_level_is_parent_plus_one() {
            let db = setup_db();
            let cat = db.insert_category(1, "General", "d").unwrap();
            let root = db.insert_term(cat, None, "Root", "d", 1).unwrap();
            let child = db.insert_term(cat, Some(root), "Child", "d", 1).unwrap();
            let grandchild = db.insert_term(cat, Some(child), "Grandchild", "d", 1).unwrap();
            let great = db
                .insert_term(cat, Some(grandchild), "Great-grandchild", "d", 1)
                .unwrap();

            let terms = db.list_all_terms().unwrap();
            let level = |id: i64| terms.iter().find(|t| t.id == id).unwrap().hierarchy_level;
            assert_eq!(level(root), 0);
            assert_eq!(level(child), 1);
            assert_eq!(level(grandchild), 2);
            // Deeper than the current content ever nests, still supported.
            assert_eq!(level(great), 3);
        }
    }

    mod answer_write_tests {
        use super::*;

        #[test]
        fn insert_answer_basic() {
            let (db, cat) = setup_with_questions();
            let term = db.insert_term(cat, None, "Usability", "d", 1).unwrap();
            let q1 = qid(&db, 1);

            let id = db.insert_answer(term, q1, "It means ease of use.").unwrap();
            assert!(id > 0);
            assert_eq!(db.answer_count().unwrap(), 1);
        }

        #[test]
        fn insert_answer_rejects_missing_term() {
            let (db, _cat) = setup_with_questions();
            let q1 = qid(&db, 1);
            let result = db.insert_answer(999, q1, "text");
            assert!(matches!(result, Err(Error::Integrity(_))));
        }

        #[test]
        fn insert_answer_rejects_missing_question() {
            let (db, cat) = setup_with_questions();
            let term = db.insert_term(cat, None, "Usability", "d", 1).unwrap();
            let result = db.insert_answer(term, 999, "text");
            assert!(matches!(result, Err(Error::Integrity(_))));
        }

        #[test]
        fn insert_answer_rejects_duplicate_pair() {
            let (db, cat) = setup_with_questions();
            let term = db.insert_term(cat, None, "Usability", "d", 1).unwrap();
            let q1 = qid(&db, 1);

            db.insert_answer(term, q1, "first").unwrap();
            let result = db.insert_answer(term, q1, "second");
            assert!(matches!(result, Err(Error::Integrity(_))));
            assert_eq!(db.answer_count().unwrap(), 1);
        }
    }

    mod browse_tests {
        use super::*;

        #[test]
        fn list_terms_by_category_ordered_and_scoped() {
            let db = setup_db();
            let a = db.insert_category(1, "A", "d").unwrap();
            let b = db.insert_category(2, "B", "d").unwrap();
            db.insert_term(a, None, "Second", "d", 2).unwrap();
            db.insert_term(a, None, "First", "d", 1).unwrap();
            db.insert_term(b, None, "Elsewhere", "d", 1).unwrap();

            let terms = db.list_terms_by_category(a).unwrap();
            let names: Vec<&str> = terms.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["First", "Second"]);
        }

        #[test]
        fn list_terms_by_unknown_category_is_empty() {
            let db = setup_db();
            assert!(db.list_terms_by_category(42).unwrap().is_empty());
        }

        #[test]
        fn list_children_ordered_by_order_num() {
            let db = setup_db();
            let cat = db.insert_category(1, "A", "d").unwrap();
            let parent = db.insert_term(cat, None, "Parent", "d", 1).unwrap();
            db.insert_term(cat, Some(parent), "Third", "d", 3).unwrap();
            db.insert_term(cat, Some(parent), "First", "d", 1).unwrap();
            db.insert_term(cat, Some(parent), "Second", "d", 2).unwrap();

            let children = db.list_children(parent).unwrap();
            let names: Vec<&str> = children.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["First", "Second", "Third"]);
        }

        #[test]
        fn list_children_of_leaf_is_empty() {
            let db = setup_db();
            let cat = db.insert_category(1, "A", "d").unwrap();
            let leaf = db.insert_term(cat, None, "Leaf", "d", 1).unwrap();
            assert!(db.list_children(leaf).unwrap().is_empty());
        }
    }

    mod search_tests {
        use super::*;

        fn setup_search_db() -> Database {
            let db = setup_db();
            let cat = db.insert_category(1, "General", "d").unwrap();
            db.insert_term(
                cat,
                None,
                "Usability",
                "The extent to which a product can be used effectively.",
                1,
            )
            .unwrap();
            db.insert_term(
                cat,
                None,
                "Heuristic Evaluation",
                "Experts judge usability against established heuristics.",
                2,
            )
            .unwrap();
            db.insert_term(cat, None, "Ethnography", "The study of people and cultures.", 3)
                .unwrap();
            db
        }

        #[test]
        fn search_matches_name_case_insensitively() {
            let db = setup_search_db();
            let hits = db.search_terms("usability").unwrap();
            assert!(hits.iter().any(|h| h.name == "Usability"));
        }

        #[test]
        fn search_matches_definition_substring() {
            let db = setup_search_db();
            let hits = db.search_terms("usability").unwrap();
            assert!(hits.iter().any(|h| h.name == "Heuristic Evaluation"));
        }

        #[test]
        fn search_results_ordered_by_name() {
            let db = setup_search_db();
            let hits = db.search_terms("usability").unwrap();
            let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
            assert_eq!(names, vec!["Heuristic Evaluation", "Usability"]);
        }

        #[test]
        fn search_includes_category_name() {
            let db = setup_search_db();
            let hits = db.search_terms("Ethnography").unwrap();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].category, "General");
        }

        #[test]
        fn empty_query_matches_nothing() {
            let db = setup_search_db();
            assert!(db.search_terms("").unwrap().is_empty());
            assert!(db.search_terms("   ").unwrap().is_empty());
        }

        #[test]
        fn no_match_returns_empty() {
            let db = setup_search_db();
            assert!(db.search_terms("quantum chromodynamics").unwrap().is_empty());
        }
    }

    mod detail_tests {
        use super::*;

        #[test]
        fn detail_not_found_for_unknown_name() {
            let (db, _cat) = setup_with_questions();
            let result = db.get_term_detail("No Such Term");
            assert!(matches!(result, Err(Error::NotFound(_))));
        }

        #[test]
        fn detail_includes_category_and_definition() {
            let (db, cat) = setup_with_questions();
            db.insert_term(cat, None, "Usability", "Ease of use.", 1).unwrap();

            let detail = db.get_term_detail("Usability").unwrap();
            assert_eq!(detail.category, "General");
            assert_eq!(detail.definition, "Ease of use.");
            assert!(detail.answers.is_empty());
        }

        #[test]
        fn answers_come_back_in_question_order() {
            let (db, cat) = setup_with_questions();
            let term = db.insert_term(cat, None, "Usability", "d", 1).unwrap();

            // Insert deliberately out of question order.
            for order in [5, 1, 7, 3, 2, 6, 4] {
                let question_id = qid(&db, order);
                db.insert_answer(term, question_id, &format!("answer {}", order)).unwrap();
            }

            let detail = db.get_term_detail("Usability").unwrap();
            assert_eq!(detail.answers.len(), 7);
            let answers: Vec<&str> = detail.answers.iter().map(|a| a.answer.as_str()).collect();
            assert_eq!(
                answers,
                vec![
                    "answer 1", "answer 2", "answer 3", "answer 4", "answer 5", "answer 6",
                    "answer 7"
                ]
            );
            assert_eq!(detail.answers[0].question, "What does it mean?");
        }

        #[test]
        fn duplicate_names_resolve_to_lowest_id() {
            let (db, cat) = setup_with_questions();
            db.insert_term(cat, None, "Design", "The first definition.", 1).unwrap();
            db.insert_term(cat, None, "Design", "The second definition.", 2).unwrap();

            let detail = db.get_term_detail("Design").unwrap();
            assert_eq!(detail.definition, "The first definition.");
        }

        #[test]
        fn key_answers_only_cover_questions_two_and_three() {
            let (db, cat) = setup_with_questions();
            let term = db.insert_term(cat, None, "Usability", "d", 1).unwrap();
            for order in 1..=7 {
                let question_id = qid(&db, order);
                db.insert_answer(term, question_id, &format!("answer {}", order)).unwrap();
            }

            let key = db.key_answers(term).unwrap();
            assert_eq!(key.len(), 2);
            assert_eq!(key[0].answer, "answer 2");
            assert_eq!(key[1].answer, "answer 3");
        }
    }

    mod random_tests {
        use super::*;

        fn setup_ten_terms() -> Database {
            let db = setup_db();
            let cat = db.insert_category(1, "A", "d").unwrap();
            for i in 1..=10 {
                db.insert_term(cat, None, &format!("Term {}", i), "d", i).unwrap();
            }
            db
        }

        #[test]
        fn random_term_on_empty_store_is_none() {
            let db = setup_db();
            assert!(db.random_term().unwrap().is_none());
        }

        #[test]
        fn random_term_returns_a_real_term() {
            let db = setup_ten_terms();
            let term = db.random_term().unwrap().unwrap();
            assert!(term.name.starts_with("Term "));
        }

        #[test]
        fn random_terms_are_distinct() {
            let db = setup_ten_terms();
            for _ in 0..20 {
                let picked = db.random_terms(5).unwrap();
                assert_eq!(picked.len(), 5);
                let mut ids: Vec<i64> = picked.iter().map(|t| t.id).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 5, "random_terms returned a duplicate");
            }
        }

        #[test]
        fn random_terms_short_read_when_asking_for_too_many() {
            let db = setup_ten_terms();
            let picked = db.random_terms(25).unwrap();
            assert_eq!(picked.len(), 10);
            let mut ids: Vec<i64> = picked.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 10);
        }

        #[test]
        fn random_terms_zero_is_empty() {
            let db = setup_ten_terms();
            assert!(db.random_terms(0).unwrap().is_empty());
        }
    }

    mod heuristics_tests {
        use super::*;

        #[test]
        fn heuristics_empty_when_parent_missing() {
            let db = setup_db();
            assert!(db.nielsen_heuristics().unwrap().is_empty());
        }

        #[test]
        fn heuristics_are_children_of_named_parent_in_order() {
            let db = setup_db();
            let cat = db.insert_category(5, "Design", "d").unwrap();
            let parent = db
                .insert_term(cat, None, "Nielsen's Original Heuristics", "Ten heuristics.", 1)
                .unwrap();
            db.insert_term(cat, Some(parent), "Help and Documentation", "d", 2).unwrap();
            db.insert_term(cat, Some(parent), "Visibility of System Status", "d", 1)
                .unwrap();

            let heuristics = db.nielsen_heuristics().unwrap();
            assert_eq!(heuristics.len(), 2);
            assert_eq!(heuristics[0].name, "Visibility of System Status");
            assert_eq!(heuristics[1].name, "Help and Documentation");
        }
    }
}
