use crate::quiz_engine::{
    bank::QuestionBank,
    models::{EnrichedQuestion, Quiz},
};

/// Merge every category's questions into one list ordered by `number`.
///
/// Each question is tagged with its category name. The sort is stable, so
/// duplicate numbers keep their source order. An absent quiz, a quiz with no
/// categories, or categories with no questions all yield an empty list.
pub fn flatten(quiz: Option<&Quiz>) -> Vec<EnrichedQuestion> {
    let Some(quiz) = quiz else {
        return Vec::new();
    };

    let mut questions: Vec<EnrichedQuestion> = quiz
        .categories
        .iter()
        .flat_map(|category| {
            category.questions.iter().map(move |q| EnrichedQuestion {
                category: category.name.clone(),
                question: q.clone(),
            })
        })
        .collect();

    questions.sort_by_key(EnrichedQuestion::number);
    questions
}

/// Resolve a quiz id against the bank and flatten it.
pub fn select(bank: &QuestionBank, quiz_id: &str) -> Vec<EnrichedQuestion> {
    flatten(bank.get(quiz_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{Category, Question};
    use std::collections::BTreeMap;

    fn q(number: u32) -> Question {
        Question {
            number,
            prompt: format!("prompt {number}"),
            choices: BTreeMap::from([("A".to_string(), "a".to_string())]),
            correct_answer: "A".to_string(),
            why_correct: "because".to_string(),
            why_incorrect: BTreeMap::new(),
        }
    }

    fn cat(name: &str, numbers: &[u32]) -> Category {
        Category {
            name: name.to_string(),
            questions: numbers.iter().copied().map(q).collect(),
        }
    }

    fn numbers(list: &[EnrichedQuestion]) -> Vec<u32> {
        list.iter().map(EnrichedQuestion::number).collect()
    }

    #[test]
    fn interleaves_categories_by_number() {
        let quiz = Quiz {
            categories: vec![cat("Syntax", &[4, 1]), cat("Types", &[3, 2, 5])],
        };
        let flat = flatten(Some(&quiz));
        assert_eq!(numbers(&flat), vec![1, 2, 3, 4, 5]);
        let cats: Vec<&str> = flat.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(cats, vec!["Syntax", "Types", "Types", "Syntax", "Types"]);
    }

    #[test]
    fn absent_or_empty_quiz_flattens_to_nothing() {
        assert!(flatten(None).is_empty());
        assert!(flatten(Some(&Quiz::default())).is_empty());
        let hollow = Quiz { categories: vec![cat("a", &[]), cat("b", &[])] };
        assert!(flatten(Some(&hollow)).is_empty());
    }

    #[test]
    fn duplicate_numbers_keep_source_order() {
        let quiz = Quiz {
            categories: vec![cat("first", &[7]), cat("second", &[7, 1])],
        };
        let flat = flatten(Some(&quiz));
        assert_eq!(numbers(&flat), vec![1, 7, 7]);
        assert_eq!(flat[1].category, "first");
        assert_eq!(flat[2].category, "second");
    }

    #[test]
    fn select_unknown_id_is_empty() {
        let bank = QuestionBank::default().insert("quiz1", Quiz { categories: vec![cat("c", &[1])] });
        assert_eq!(select(&bank, "quiz1").len(), 1);
        assert!(select(&bank, "quizX").is_empty());
    }
}
