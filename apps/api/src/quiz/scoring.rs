//! Career scoring: a pluggable scorer that turns a user's quiz answers
//! into a ranked list of career matches.
//!
//! Default: `KeywordCareerScorer` (pure-Rust, deterministic, no I/O).
//!
//! `QuizService` holds an `Arc<dyn CareerScorer>`; persistence is the caller's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::careers::catalog::CareerCatalog;
use crate::errors::AppError;
use crate::models::career::{Career, GrowthProspects};
use crate::models::quiz::{Answer, Choice, Question, QuestionCategory};
use crate::quiz::questions::QuestionBank;

/// Score assigned when no answered question relates to a career.
pub const NEUTRAL_SCORE: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One scored career, before it is stamped with a user and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_id: i32,
    pub career_name: String,
    pub match_score: f64, // 0 – 100
    pub reasoning: String,
    pub growth_prospects: GrowthProspects,
    pub matched_questions: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the submission flow.
pub trait CareerScorer: Send + Sync {
    /// Returns at most `limit` careers, best first.
    fn score(
        &self,
        answers: &[Answer],
        questions: &QuestionBank,
        catalog: &CareerCatalog,
        limit: usize,
    ) -> Result<Vec<CareerMatch>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordCareerScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-based scorer.
///
/// Algorithm:
/// 1. Weight each question by its answer: strongly_dislike=-2 … strongly_like=+2,
///    unanswered = 0.
/// 2. A question relates to a career when one of the career's interest keywords or
///    required skills (plus degree requirements on degree questions, plus the
///    career name on career questions) starts a word in the question text (terms
///    of three characters or fewer must be a whole word), or
///    equals the question's category label. Each question counts once per career.
/// 3. raw = Σ weights of related questions, max = 2 × related questions,
///    score = 50 + 50 × raw / max (50 when max = 0).
/// 4. Sort by score desc, growth prospects desc, name asc; keep the top `limit`.
pub struct KeywordCareerScorer;

impl CareerScorer for KeywordCareerScorer {
    fn score(
        &self,
        answers: &[Answer],
        questions: &QuestionBank,
        catalog: &CareerCatalog,
        limit: usize,
    ) -> Result<Vec<CareerMatch>, AppError> {
        Ok(compute_career_matches(answers, questions, catalog, limit))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

struct WeightedQuestion<'a> {
    question: &'a Question,
    text_lower: String,
    choice: Choice,
}

fn compute_career_matches(
    answers: &[Answer],
    questions: &QuestionBank,
    catalog: &CareerCatalog,
    limit: usize,
) -> Vec<CareerMatch> {
    let choices: HashMap<i32, Choice> = answers
        .iter()
        .map(|a| (a.question_id, a.choice))
        .collect();

    let weighted: Vec<WeightedQuestion<'_>> = questions
        .all()
        .iter()
        .map(|question| WeightedQuestion {
            question,
            text_lower: question.text.to_lowercase(),
            choice: choices
                .get(&question.id)
                .copied()
                .unwrap_or(Choice::Neutral),
        })
        .collect();

    let mut matches: Vec<CareerMatch> = catalog
        .all()
        .iter()
        .map(|career| score_career(career, &weighted))
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then_with(|| b.growth_prospects.cmp(&a.growth_prospects))
            .then_with(|| a.career_name.cmp(&b.career_name))
    });
    matches.truncate(limit);
    matches
}

fn score_career(career: &Career, questions: &[WeightedQuestion<'_>]) -> CareerMatch {
    let mut raw = 0_i32;
    let mut matched = 0_usize;
    let mut liked: Vec<String> = Vec::new();
    let mut disliked: Vec<String> = Vec::new();

    for wq in questions {
        let Some(term) = matching_term(career, wq) else {
            continue;
        };
        matched += 1;
        raw += wq.choice.weight();

        let bucket = if wq.choice.weight() > 0 {
            &mut liked
        } else if wq.choice.is_negative() {
            &mut disliked
        } else {
            continue;
        };
        let term = term.to_lowercase();
        if !bucket.contains(&term) {
            bucket.push(term);
        }
    }

    let max = Choice::MAX_WEIGHT * matched as i32;
    let match_score = if max == 0 {
        NEUTRAL_SCORE
    } else {
        let normalized = NEUTRAL_SCORE + NEUTRAL_SCORE * f64::from(raw) / f64::from(max);
        round_one_decimal(normalized.clamp(0.0, 100.0))
    };

    CareerMatch {
        career_id: career.id,
        career_name: career.name.clone(),
        match_score,
        reasoning: build_reasoning(match_score, matched, &liked, &disliked),
        growth_prospects: career.growth_prospects,
        matched_questions: matched,
    }
}

/// Returns the first career term that relates the career to this question.
fn matching_term<'c>(career: &'c Career, wq: &WeightedQuestion<'_>) -> Option<&'c str> {
    let category_terms: &[String] = match wq.question.category {
        QuestionCategory::Degree => &career.degree_requirements,
        _ => &[],
    };
    let name = match wq.question.category {
        QuestionCategory::Career => Some(career.name.as_str()),
        _ => None,
    };

    career
        .interest_keywords
        .iter()
        .chain(career.required_skills.iter())
        .chain(category_terms.iter())
        .map(String::as_str)
        .chain(name)
        .find(|term| term_matches(term, &wq.text_lower, wq.question.category))
}

fn term_matches(term: &str, text_lower: &str, category: QuestionCategory) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return false;
    }
    term == category.as_str() || contains_at_word_start(text_lower, &term)
}

/// Terms this short (acronyms like "CA" or "B.A") must also end on a word boundary.
const SHORT_TERM_CHARS: usize = 3;

/// Substring match anchored at the start of a word, so "logic" finds "logical"
/// but "art" does not find "start". Short terms must match a whole word:
/// "ca" does not find "careers" and "b.a" does not find "b.arch".
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    let whole_word = needle.chars().count() <= SHORT_TERM_CHARS;
    haystack.match_indices(needle).any(|(pos, _)| {
        let starts_word = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_alphanumeric());
        let ends_word = !whole_word
            || haystack[pos + needle.len()..]
                .chars()
                .next()
                .map_or(true, |next| !next.is_alphanumeric());
        starts_word && ends_word
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds a human-readable explanation of what drove the score.
fn build_reasoning(score: f64, matched: usize, liked: &[String], disliked: &[String]) -> String {
    if matched == 0 {
        return "None of your answers touched this career's profile, so it carries a neutral score."
            .to_string();
    }

    let mut parts = Vec::new();
    if !liked.is_empty() {
        parts.push(format!("you responded well to {}", liked.join(", ")));
    }
    if !disliked.is_empty() {
        parts.push(format!("you were less keen on {}", disliked.join(", ")));
    }
    if parts.is_empty() {
        parts.push("your related answers were neutral".to_string());
    }

    let noun = if matched == 1 { "answer" } else { "answers" };
    format!(
        "{score:.1}/100 from {matched} related {noun}: {}.",
        parts.join("; ")
    )
}

/// Careers the user turned down outright: their name appears in a career question
/// answered dislike or strongly_dislike. Sorted and de-duplicated.
pub fn disliked_careers(
    answers: &[Answer],
    questions: &QuestionBank,
    catalog: &CareerCatalog,
) -> Vec<String> {
    let mut names: Vec<String> = answers
        .iter()
        .filter(|a| a.choice.is_negative())
        .filter_map(|a| questions.get(a.question_id))
        .filter(|q| q.category == QuestionCategory::Career)
        .flat_map(|q| {
            let text = q.text.to_lowercase();
            catalog
                .all()
                .iter()
                .filter(move |c| contains_at_word_start(&text, &c.name.to_lowercase()))
                .map(|c| c.name.clone())
        })
        .collect();
    names.sort();
    names.dedup();
    names
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_question(id: i32, text: &str, category: QuestionCategory) -> Question {
        Question {
            id,
            text: text.to_string(),
            category,
        }
    }

    fn make_career(
        id: i32,
        name: &str,
        keywords: &[&str],
        growth_prospects: GrowthProspects,
    ) -> Career {
        Career {
            id,
            name: name.to_string(),
            category: "Test".to_string(),
            description: String::new(),
            required_skills: vec![],
            interest_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            degree_requirements: vec![],
            salary_range: String::new(),
            growth_prospects,
            work_environment: String::new(),
        }
    }

    fn make_answer(question_id: i32, choice: Choice) -> Answer {
        let now = Utc::now();
        Answer {
            user_id: Uuid::nil(),
            question_id,
            choice,
            created_at: now,
            updated_at: now,
        }
    }

    fn abc_catalog() -> CareerCatalog {
        CareerCatalog::new(vec![
            make_career(1, "A", &["code", "logic"], GrowthProspects::Medium),
            make_career(2, "B", &["design"], GrowthProspects::Medium),
            make_career(3, "C", &[], GrowthProspects::High),
        ])
    }

    fn abc_questions() -> QuestionBank {
        QuestionBank::new(vec![
            make_question(1, "Do you enjoy writing code?", QuestionCategory::Interest),
            make_question(2, "Do you enjoy gardening?", QuestionCategory::Interest),
        ])
    }

    fn score(answers: &[Answer], questions: &QuestionBank, catalog: &CareerCatalog) -> Vec<CareerMatch> {
        compute_career_matches(answers, questions, catalog, usize::MAX)
    }

    #[test]
    fn test_single_strong_like_ranks_matching_career_first() {
        let answers = vec![make_answer(1, Choice::StronglyLike)];
        let matches = score(&answers, &abc_questions(), &abc_catalog());

        assert_eq!(matches[0].career_name, "A");
        assert_eq!(matches[0].match_score, 100.0);
        // B and C tie on the neutral score; C wins on growth prospects.
        assert_eq!(matches[1].career_name, "C");
        assert_eq!(matches[2].career_name, "B");
        assert_eq!(matches[1].match_score, matches[2].match_score);
        assert!(matches[0].match_score > matches[1].match_score);
    }

    #[test]
    fn test_tie_on_score_and_growth_falls_back_to_name() {
        let catalog = CareerCatalog::new(vec![
            make_career(1, "Zoologist", &[], GrowthProspects::High),
            make_career(2, "Architect", &[], GrowthProspects::High),
        ]);
        let matches = score(&[], &abc_questions(), &catalog);
        let names: Vec<&str> = matches.iter().map(|m| m.career_name.as_str()).collect();
        assert_eq!(names, vec!["Architect", "Zoologist"]);
    }

    #[test]
    fn test_rescoring_is_identical() {
        let answers = vec![
            make_answer(1, Choice::Like),
            make_answer(2, Choice::Dislike),
        ];
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let first = score(&answers, &questions, &catalog);
        let second = score(&answers, &questions, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let forward = vec![
            make_answer(6, Choice::StronglyLike),
            make_answer(8, Choice::Like),
            make_answer(20, Choice::StronglyDislike),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            score(&forward, &questions, &catalog),
            score(&reversed, &questions, &catalog)
        );
    }

    #[test]
    fn test_scores_bounded_for_empty_and_extreme_answers() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();

        for choice in Choice::ALL {
            let answers: Vec<Answer> = questions
                .all()
                .iter()
                .map(|q| make_answer(q.id, choice))
                .collect();
            for m in score(&answers, &questions, &catalog) {
                assert!((0.0..=100.0).contains(&m.match_score), "{m:?}");
            }
        }

        for m in score(&[], &questions, &catalog) {
            assert_eq!(m.match_score, NEUTRAL_SCORE);
        }
    }

    #[test]
    fn test_output_sorted_descending() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let answers = vec![
            make_answer(6, Choice::StronglyLike),
            make_answer(7, Choice::StronglyDislike),
            make_answer(12, Choice::Like),
        ];
        let matches = score(&answers, &questions, &catalog);
        assert!(matches
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let answers = vec![make_answer(1, Choice::StronglyLike)];
        let matches = score(&answers, &abc_questions(), &CareerCatalog::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_no_matches_yields_neutral_list() {
        let catalog = CareerCatalog::new(vec![
            make_career(1, "Pilot", &["aviation"], GrowthProspects::Low),
            make_career(2, "Chef", &["cuisine"], GrowthProspects::Medium),
        ]);
        let answers = vec![make_answer(1, Choice::StronglyLike)];
        let matches = score(&answers, &abc_questions(), &catalog);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.match_score == NEUTRAL_SCORE));
        assert!(matches[0].reasoning.contains("neutral"));
    }

    #[test]
    fn test_dislike_pulls_score_below_neutral() {
        let answers = vec![make_answer(1, Choice::StronglyDislike)];
        let matches = score(&answers, &abc_questions(), &abc_catalog());
        let a = matches.iter().find(|m| m.career_name == "A").unwrap();
        assert_eq!(a.match_score, 0.0);
        assert!(a.reasoning.contains("less keen on code"));
    }

    #[test]
    fn test_unanswered_related_question_dilutes_score() {
        let questions = QuestionBank::new(vec![
            make_question(1, "Do you like to code?", QuestionCategory::Interest),
            make_question(2, "Is logic your thing?", QuestionCategory::Interest),
        ]);
        let answers = vec![make_answer(1, Choice::StronglyLike)];
        let matches = score(&answers, &questions, &abc_catalog());
        let a = matches.iter().find(|m| m.career_name == "A").unwrap();
        assert_eq!(a.matched_questions, 2);
        assert_eq!(a.match_score, 75.0);
    }

    #[test]
    fn test_truncates_to_limit() {
        let matches = compute_career_matches(&[], &QuestionBank::seeded(), &CareerCatalog::seeded(), 3);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_word_start_matching() {
        assert!(contains_at_word_start("logical thinking", "logic"));
        assert!(!contains_at_word_start("starting a business", "art"));
        assert!(contains_at_word_start("fine art, music", "art"));
    }

    #[test]
    fn test_short_terms_need_whole_word() {
        assert!(!contains_at_word_start("careers in law", "ca"));
        assert!(!contains_at_word_start("b.arch (bachelor of architecture)", "b.a"));
        assert!(contains_at_word_start("a b.a or b.sc degree", "b.a"));
        assert!(contains_at_word_start("an llb (bachelor of laws)", "llb"));
        assert!(contains_at_word_start("knowledge of law.", "law"));
    }

    #[test]
    fn test_seeded_llb_fan_does_not_lift_chartered_accountant() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let llb = questions
            .all()
            .iter()
            .find(|q| q.text.contains("LLB (Bachelor of Laws)"))
            .unwrap();
        let answers = vec![make_answer(llb.id, Choice::StronglyLike)];
        let matches = score(&answers, &questions, &catalog);

        let accountant = matches
            .iter()
            .find(|m| m.career_name == "Chartered Accountant")
            .unwrap();
        assert_eq!(accountant.match_score, NEUTRAL_SCORE);
        assert!(!accountant.reasoning.contains("responded well"));

        let lawyer = matches.iter().find(|m| m.career_name == "Lawyer").unwrap();
        assert!(lawyer.match_score > NEUTRAL_SCORE);
        assert!(lawyer.reasoning.contains("law"));
    }

    #[test]
    fn test_degree_requirements_only_match_degree_questions() {
        let mut career = make_career(1, "Lawyer", &[], GrowthProspects::High);
        career.degree_requirements = vec!["LLB".to_string()];
        let catalog = CareerCatalog::new(vec![career]);
        let questions = QuestionBank::new(vec![
            make_question(1, "What about an LLB degree?", QuestionCategory::Degree),
            make_question(2, "Friends with an LLB graduate?", QuestionCategory::Interest),
        ]);
        let answers = vec![
            make_answer(1, Choice::Like),
            make_answer(2, Choice::StronglyDislike),
        ];
        let matches = score(&answers, &questions, &catalog);
        assert_eq!(matches[0].matched_questions, 1);
        assert_eq!(matches[0].match_score, 75.0);
    }

    #[test]
    fn test_seeded_computer_fan_scores_software_engineer_above_neutral() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let computers = questions
            .all()
            .iter()
            .find(|q| q.text.contains("working with computers"))
            .unwrap();
        let it_sector = questions
            .all()
            .iter()
            .find(|q| q.text.contains("IT sector"))
            .unwrap();
        let answers = vec![
            make_answer(computers.id, Choice::StronglyLike),
            make_answer(it_sector.id, Choice::StronglyLike),
        ];
        let matches = score(&answers, &questions, &catalog);
        let engineer = matches
            .iter()
            .find(|m| m.career_name == "Software Engineer")
            .unwrap();
        assert!(engineer.match_score > NEUTRAL_SCORE);
        assert!(engineer.reasoning.contains("computers"));
        assert!(engineer.reasoning.contains("software"));
    }

    #[test]
    fn test_disliked_careers_from_career_questions() {
        let questions = QuestionBank::seeded();
        let catalog = CareerCatalog::seeded();
        let lawyer_q = questions
            .all()
            .iter()
            .find(|q| q.text.contains("becoming a lawyer"))
            .unwrap();
        let doctor_q = questions
            .all()
            .iter()
            .find(|q| q.text.contains("becoming a doctor"))
            .unwrap();
        let answers = vec![
            make_answer(lawyer_q.id, Choice::StronglyDislike),
            make_answer(doctor_q.id, Choice::Like),
        ];
        assert_eq!(disliked_careers(&answers, &questions, &catalog), vec!["Lawyer"]);
    }
}
