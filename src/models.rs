use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub order_num: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub order_num: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub category_id: i64,
    pub parent_term_id: Option<i64>,
    pub name: String,
    pub definition: String,
    pub hierarchy_level: i64,
    pub order_num: i64,
}

// Slim projection used by browse, flashcards, and the heuristics view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermSummary {
    pub id: i64,
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub definition: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

// A term joined with its category and all recorded answers, in question order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDetail {
    pub name: String,
    pub definition: String,
    pub category: String,
    pub answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOverview {
    pub name: String,
    pub description: String,
    pub term_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_detail_serializes_answers_in_place() {
        let detail = TermDetail {
            name: "Usability".to_string(),
            definition: "The extent to which a product can be used.".to_string(),
            category: "General".to_string(),
            answers: vec![QuestionAnswer {
                question: "What does it mean?".to_string(),
                answer: "A quality of a system.".to_string(),
            }],
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"name\":\"Usability\""));
        assert!(json.contains("\"question\":\"What does it mean?\""));
    }

    #[test]
    fn term_summary_round_trips() {
        let summary = TermSummary {
            id: 3,
            name: "Ethnography".to_string(),
            definition: "The study of people and cultures.".to_string(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: TermSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 3);
        assert_eq!(back.name, "Ethnography");
    }
}
