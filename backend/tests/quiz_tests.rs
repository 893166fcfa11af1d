//! Tests for quiz grading

use proptest::prelude::*;
use shared::{grade_quiz, QuizAnswer, QuizKey};
use uuid::Uuid;

fn key(id: Uuid, answer: &str) -> QuizKey {
    QuizKey {
        question_id: id,
        correct_answer: answer.to_string(),
    }
}

fn answer(id: Uuid, text: &str) -> QuizAnswer {
    QuizAnswer {
        question_id: id,
        answer: text.to_string(),
    }
}

// =============================================================================
// Grading tests
// =============================================================================

mod grading {
    use super::*;

    #[test]
    fn all_correct_scores_full_marks() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let keys: Vec<QuizKey> = ids.iter().map(|id| key(*id, "right")).collect();
        let answers: Vec<QuizAnswer> = ids.iter().map(|id| answer(*id, "right")).collect();

        let grade = grade_quiz(&keys, &answers);
        assert_eq!(grade.score, 3);
        assert_eq!(grade.total, 3);
        assert!(grade.results.iter().all(|r| r.correct));
    }

    #[test]
    fn wrong_answer_is_marked_with_the_correct_one() {
        let id = Uuid::new_v4();
        let grade = grade_quiz(&[key(id, "The fox")], &[answer(id, "The crow")]);
        assert_eq!(grade.score, 0);
        assert!(!grade.results[0].correct);
        assert_eq!(grade.results[0].correct_answer, "The fox");
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let keys = vec![key(Uuid::new_v4(), "A"), key(Uuid::new_v4(), "B")];
        let grade = grade_quiz(&keys, &[]);
        assert_eq!(grade.score, 0);
        assert_eq!(grade.total, 2);
        assert_eq!(grade.results.len(), 2);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let id = Uuid::new_v4();
        let grade = grade_quiz(
            &[key(id, "A")],
            &[answer(Uuid::new_v4(), "A"), answer(id, "A")],
        );
        assert_eq!(grade.score, 1);
        assert_eq!(grade.total, 1);
    }

    #[test]
    fn comparison_is_whitespace_tolerant() {
        let id = Uuid::new_v4();
        let grade = grade_quiz(&[key(id, " সততা ")], &[answer(id, "সততা")]);
        assert_eq!(grade.score, 1);
    }

    #[test]
    fn empty_quiz_grades_to_zero_of_zero() {
        let grade = grade_quiz(&[], &[]);
        assert_eq!(grade.score, 0);
        assert_eq!(grade.total, 0);
        assert!(grade.results.is_empty());
    }
}

// =============================================================================
// Property tests
// =============================================================================

fn quiz_strategy() -> impl Strategy<Value = (Vec<QuizKey>, Vec<QuizAnswer>)> {
    proptest::collection::vec(("[a-d]", any::<bool>()), 1..10).prop_map(|entries| {
        let mut keys = Vec::new();
        let mut answers = Vec::new();
        for (correct_answer, answer_correctly) in entries {
            let id = Uuid::new_v4();
            keys.push(key(id, &correct_answer));
            let submitted = if answer_correctly {
                correct_answer.clone()
            } else {
                "z".to_string()
            };
            answers.push(answer(id, &submitted));
        }
        (keys, answers)
    })
}

proptest! {
    /// Score never exceeds the number of questions
    #[test]
    fn prop_score_bounded_by_total((keys, answers) in quiz_strategy()) {
        let grade = grade_quiz(&keys, &answers);
        prop_assert!(grade.score <= grade.total);
        prop_assert_eq!(grade.total, keys.len() as u32);
        prop_assert_eq!(grade.results.len(), keys.len());
    }

    /// Score equals the count of per-question correct flags
    #[test]
    fn prop_score_matches_results((keys, answers) in quiz_strategy()) {
        let grade = grade_quiz(&keys, &answers);
        let correct = grade.results.iter().filter(|r| r.correct).count() as u32;
        prop_assert_eq!(grade.score, correct);
    }

    /// Answer order does not change the grade
    #[test]
    fn prop_answer_order_irrelevant((keys, mut answers) in quiz_strategy()) {
        let forward = grade_quiz(&keys, &answers);
        answers.reverse();
        let reversed = grade_quiz(&keys, &answers);
        prop_assert_eq!(forward.score, reversed.score);
        prop_assert_eq!(forward.total, reversed.total);
    }

    /// Results come back in question order regardless of answer order
    #[test]
    fn prop_results_follow_question_order((keys, mut answers) in quiz_strategy()) {
        answers.reverse();
        let grade = grade_quiz(&keys, &answers);
        for (result, key) in grade.results.iter().zip(keys.iter()) {
            prop_assert_eq!(result.question_id, key.question_id);
        }
    }
}
