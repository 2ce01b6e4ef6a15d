use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_QUESTIONS: &str = include_str!("../../assets/questions.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
}

/// Ordered list of quiz questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// The fixed three-question set shipped with the app
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_QUESTIONS).context("built-in question bank is malformed")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bank: QuestionBank = serde_json::from_str(json)?;
        if bank.questions.is_empty() {
            anyhow::bail!("question bank must contain at least one question");
        }
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
