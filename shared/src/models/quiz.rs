//! Quiz models and grading

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quiz question as produced by story generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestionPayload {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Answer key for one stored question
#[derive(Debug, Clone)]
pub struct QuizKey {
    pub question_id: Uuid,
    pub correct_answer: String,
}

/// One submitted answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: Uuid,
    pub answer: String,
}

/// Per-question grading outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: Uuid,
    pub correct: bool,
    pub correct_answer: String,
}

/// Graded answer sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizGrade {
    pub score: u32,
    pub total: u32,
    pub results: Vec<QuestionResult>,
}

/// Grade a submitted answer sheet against the stored answer key.
/// Unanswered questions count as incorrect; answers for unknown question
/// ids are ignored.
pub fn grade_quiz(keys: &[QuizKey], answers: &[QuizAnswer]) -> QuizGrade {
    let mut results = Vec::with_capacity(keys.len());
    let mut score = 0;

    for key in keys {
        let submitted = answers
            .iter()
            .find(|a| a.question_id == key.question_id)
            .map(|a| a.answer.trim());
        let correct = submitted == Some(key.correct_answer.trim());
        if correct {
            score += 1;
        }
        results.push(QuestionResult {
            question_id: key.question_id,
            correct,
            correct_answer: key.correct_answer.clone(),
        });
    }

    QuizGrade {
        score,
        total: keys.len() as u32,
        results,
    }
}
