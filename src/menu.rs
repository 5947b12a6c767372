use std::io::{self, BufRead, Write};

use crate::db::Database;
use crate::error::{Error, Result};

const QUIZ_SIZE: usize = 10;
const DEFINITION_PREVIEW_LEN: usize = 100;

pub fn run(db: &Database) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        show_menu();
        let choice = match prompt(&mut lines, "Select option (1-8): ")? {
            Some(choice) => choice,
            None => break, // EOF behaves like exit
        };

        match choice.as_str() {
            "1" => browse_by_category(db, &mut lines)?,
            "2" => search_term(db, &mut lines)?,
            "3" => random_flashcard(db, &mut lines)?,
            "4" => quiz_mode(db, &mut lines)?,
            "5" => show_nielsens_heuristics(db, &mut lines)?,
            "6" => view_all_categories(db, &mut lines)?,
            "7" => compare_terms(db, &mut lines)?,
            "8" => {
                println!("\nGood luck on your exam!");
                break;
            }
            _ => println!("Invalid choice. Please select 1-8."),
        }
    }

    Ok(())
}

fn show_menu() {
    println!("\n{}", "=".repeat(50));
    println!("HCI EXAM REVIEW - STUDY TOOL");
    println!("{}", "=".repeat(50));
    println!("\n1. Browse by Category");
    println!("2. Search for a Term");
    println!("3. Random Flashcard");
    println!("4. Quiz Mode (Random {} terms)", QUIZ_SIZE);
    println!("5. View Nielsen's Heuristics");
    println!("6. View All Categories");
    println!("7. Compare Terms");
    println!("8. Exit");
    println!();
}

fn browse_by_category<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("\nCategories:");
    let categories = db.list_categories()?;
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, category.name);
    }

    let choice = match prompt(lines, "\nSelect category (number): ")? {
        Some(choice) => choice,
        None => return Ok(()),
    };
    match parse_index(&choice, categories.len()) {
        Some(idx) => show_category_terms(db, lines, categories[idx].id),
        None => {
            println!("Invalid choice");
            Ok(())
        }
    }
}

fn show_category_terms<I>(db: &Database, lines: &mut I, category_id: i64) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let terms = db.list_terms_by_category(category_id)?;
    println!("\nFound {} terms:", terms.len());

    for (i, term) in terms.iter().enumerate() {
        println!("\n{}. {}", i + 1, term.name);
        println!("   {}", truncate(&term.definition, DEFINITION_PREVIEW_LEN));
    }

    println!("\nOptions:");
    println!("- Enter term number for details");
    println!("- Press Enter to return to main menu");

    if let Some(choice) = prompt(lines, "\nYour choice: ")? {
        if let Some(idx) = parse_index(&choice, terms.len()) {
            show_term_details(db, lines, &terms[idx].name)?;
        }
    }
    Ok(())
}

fn search_term<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let query = match prompt(lines, "\nEnter search term: ")? {
        Some(query) => query,
        None => return Ok(()),
    };

    let results = db.search_terms(&query)?;
    if results.is_empty() {
        println!("No terms found.");
        return Ok(());
    }

    println!("\nFound {} term(s):", results.len());
    for (i, hit) in results.iter().enumerate() {
        println!("\n{}. {} ({})", i + 1, hit.name, hit.category);
        println!("   {}", truncate(&hit.definition, DEFINITION_PREVIEW_LEN));
    }

    if results.len() == 1 {
        show_term_details(db, lines, &results[0].name)?;
    } else if let Some(choice) = prompt(lines, "\nEnter number for details (or Enter to skip): ")? {
        if let Some(idx) = parse_index(&choice, results.len()) {
            show_term_details(db, lines, &results[idx].name)?;
        }
    }
    Ok(())
}

// A miss here is recoverable: report it and fall back to the menu.
fn show_term_details<I>(db: &Database, lines: &mut I, name: &str) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let detail = match db.get_term_detail(name) {
        Ok(detail) => detail,
        Err(Error::NotFound(_)) => {
            println!("Term not found");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("\n{}", "=".repeat(50));
    println!("TERM: {}", detail.name);
    println!("{}", "=".repeat(50));
    println!("Category: {}", detail.category);
    println!("\nDefinition:\n{}", detail.definition);

    if !detail.answers.is_empty() {
        println!("\n{}", "-".repeat(50));
        for qa in &detail.answers {
            println!("\n{}", qa.question);
            println!("{}", qa.answer);
        }
    }

    pause(lines)
}

fn random_flashcard<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let term = match db.random_term()? {
        Some(term) => term,
        None => {
            println!("\nNo terms in the database yet.");
            return Ok(());
        }
    };

    println!("\n{}", "=".repeat(50));
    println!("RANDOM FLASHCARD");
    println!("{}", "=".repeat(50));
    println!("\nTerm: {}", term.name);
    prompt(lines, "\nPress Enter to see definition...")?;
    println!("\nDefinition:\n{}", term.definition);

    if let Some(answer) = prompt(lines, "\nSee all 7 questions? (y/n): ")? {
        if answer.eq_ignore_ascii_case("y") {
            show_term_details(db, lines, &term.name)?;
        }
    }
    Ok(())
}

fn quiz_mode<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let questions = db.random_terms(QUIZ_SIZE)?;
    if questions.is_empty() {
        println!("\nNo terms in the database yet.");
        return Ok(());
    }

    let total = questions.len();
    let mut score = 0usize;

    println!("\n{}", "=".repeat(50));
    println!("QUIZ MODE - {} Random Terms", total);
    println!("{}", "=".repeat(50));
    println!("\nYou'll see a term name. Try to recall:");
    println!("1. The definition");
    println!("2. Why it's important");
    println!("3. When/where it's used");
    prompt(lines, "\nPress Enter to start...")?;

    for (i, term) in questions.iter().enumerate() {
        println!("\n{}", "-".repeat(50));
        println!("Question {}/{}", i + 1, total);
        println!("{}", "-".repeat(50));
        println!("\nTerm: {}", term.name);
        prompt(lines, "\nPress Enter to see answer...")?;

        println!("\nDefinition:\n{}", term.definition);
        for qa in db.key_answers(term.id)? {
            println!("\n{}", qa.question);
            println!("{}", qa.answer);
        }

        if let Some(answer) = prompt(lines, "\nDid you know this? (y/n): ")? {
            if answer.eq_ignore_ascii_case("y") {
                score += 1;
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("QUIZ COMPLETE!");
    println!("Score: {}/{} ({}%)", score, total, score * 100 / total);
    println!("{}", "=".repeat(50));
    pause(lines)
}

fn show_nielsens_heuristics<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("\n{}", "=".repeat(50));
    println!("NIELSEN'S 10 USABILITY HEURISTICS");
    println!("{}", "=".repeat(50));

    let heuristics = db.nielsen_heuristics()?;
    if heuristics.is_empty() {
        println!("\nHeuristics have not been populated.");
        return Ok(());
    }
    for (i, heuristic) in heuristics.iter().enumerate() {
        println!("\n{}. {}", i + 1, heuristic.name);
        println!("   {}", heuristic.definition);
    }

    pause(lines)
}

fn view_all_categories<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("\n{}", "=".repeat(50));
    println!("ALL CATEGORIES");
    println!("{}", "=".repeat(50));

    for overview in db.category_overview()? {
        println!("\n{} ({} terms)", overview.name, overview.term_count);
        println!("  {}", overview.description);
    }

    pause(lines)
}

fn compare_terms<I>(db: &Database, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("\n{}", "=".repeat(50));
    println!("COMPARE TERMS");
    println!("{}", "=".repeat(50));

    println!("\nCommon comparisons:");
    println!("1. UX vs UI vs HCI");
    println!("2. Usability vs Usefulness vs UX");
    println!("3. Formative vs Summative");
    println!("4. Analytic vs Empirical");
    println!("5. Custom search");

    let choice = match prompt(lines, "\nSelect comparison (1-5): ")? {
        Some(choice) => choice,
        None => return Ok(()),
    };

    let canned: Option<&[&str]> = match choice.as_str() {
        "1" => Some(&[
            "User Experience (UX)",
            "User Interface (UI)",
            "Human-Computer Interaction (HCI)",
        ]),
        "2" => Some(&["Usability", "Usefulness", "User Experience (UX)"]),
        "3" => Some(&["Formative vs. Summative"]),
        "4" => Some(&["Analytic vs. Empirical"]),
        _ => None,
    };

    if let Some(names) = canned {
        for name in names {
            show_matching_term(db, lines, name)?;
        }
    } else if choice == "5" {
        if let Some(first) = prompt(lines, "Enter first term: ")? {
            show_matching_term(db, lines, &first)?;
        }
        if let Some(second) = prompt(lines, "Enter second term: ")? {
            show_matching_term(db, lines, &second)?;
        }
    } else {
        println!("Invalid choice");
    }
    Ok(())
}

// Substring lookup so a partial name like "Usability" still resolves.
fn show_matching_term<I>(db: &Database, lines: &mut I, query: &str) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    match db.search_terms(query)?.first() {
        Some(hit) => {
            let name = hit.name.clone();
            show_term_details(db, lines, &name)
        }
        None => {
            println!("Term not found");
            Ok(())
        }
    }
}

fn pause<I>(lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    prompt(lines, "\nPress Enter to continue...")?;
    Ok(())
}

fn prompt<I>(lines: &mut I, message: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

// 1-based menu selection against a list of `len` entries.
fn parse_index(input: &str, len: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod truncate_tests {
        use super::*;

        #[test]
        fn truncate_short_string() {
            assert_eq!(truncate("usability", 20), "usability");
        }

        #[test]
        fn truncate_exact_length() {
            assert_eq!(truncate("hello", 5), "hello");
        }

        #[test]
        fn truncate_long_string() {
            assert_eq!(truncate("hello world", 8), "hello...");
        }

        #[test]
        fn truncate_empty_string() {
            assert_eq!(truncate("", 10), "");
        }
    }

    mod parse_index_tests {
        use super::*;

        #[test]
        fn accepts_values_in_range() {
            assert_eq!(parse_index("1", 3), Some(0));
            assert_eq!(parse_index("3", 3), Some(2));
        }

        #[test]
        fn rejects_zero_and_out_of_range() {
            assert_eq!(parse_index("0", 3), None);
            assert_eq!(parse_index("4", 3), None);
        }

        #[test]
        fn rejects_non_numeric_input() {
            assert_eq!(parse_index("", 3), None);
            assert_eq!(parse_index("abc", 3), None);
            assert_eq!(parse_index("-1", 3), None);
        }

        #[test]
        fn rejects_anything_when_list_is_empty() {
            assert_eq!(parse_index("1", 0), None);
        }
    }

    mod menu_flow_tests {
        use super::*;

        fn input(lines: &[&str]) -> impl Iterator<Item = io::Result<String>> {
            lines
                .iter()
                .map(|l| Ok(l.to_string()))
                .collect::<Vec<_>>()
                .into_iter()
        }

        fn seeded_db() -> Database {
            let db = Database::open_in_memory().unwrap();
            crate::seed::populate(&db).unwrap();
            db
        }

        #[test]
        fn show_term_details_handles_missing_term() {
            let db = seeded_db();
            let mut lines = input(&[]);
            // Must not propagate NotFound; it is recoverable at the menu.
            show_term_details(&db, &mut lines, "No Such Term").unwrap();
        }

        #[test]
        fn show_term_details_prints_known_term() {
            let db = seeded_db();
            let mut lines = input(&[""]);
            show_term_details(&db, &mut lines, "Usability").unwrap();
        }

        #[test]
        fn quiz_mode_runs_to_completion_on_scripted_input() {
            let db = seeded_db();
            // Start prompt, then (reveal, y/n) per question.
            let mut script = vec![""];
            for _ in 0..QUIZ_SIZE {
                script.push("");
                script.push("y");
            }
            let mut lines = input(&script);
            quiz_mode(&db, &mut lines).unwrap();
        }

        #[test]
        fn compare_terms_canned_selection_runs() {
            let db = seeded_db();
            // Choice 2 shows three terms, each followed by a pause.
            let mut lines = input(&["2", "", "", ""]);
            compare_terms(&db, &mut lines).unwrap();
        }

        #[test]
        fn browse_handles_invalid_selection() {
            let db = seeded_db();
            let mut lines = input(&["not-a-number"]);
            browse_by_category(&db, &mut lines).unwrap();
        }
    }
}
