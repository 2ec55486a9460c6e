use std::collections::HashMap;

pub type Descriptors = [String; 4];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rubric {
    questions: Vec<String>,
    coefficients: HashMap<String, f64>,
    descriptors: HashMap<String, Descriptors>,
}

impl Rubric {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn coefficients(&self) -> &HashMap<String, f64> {
        &self.coefficients
    }

    pub fn coefficient(&self, question: &str) -> Option<f64> {
        self.coefficients.get(question).copied()
    }

    pub fn descriptors(&self, question: &str) -> Option<&Descriptors> {
        self.descriptors.get(question)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.questions.iter().any(|q| q == question)
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn push_question(&mut self, question: &str) -> bool {
        if self.contains(question) {
            return false;
        }
        self.questions.push(question.to_string());
        true
    }

    // First definition wins.
    pub fn define(&mut self, question: &str, coefficient: f64, descriptors: Descriptors) -> bool {
        self.push_question(question);
        if self.coefficients.contains_key(question) {
            return false;
        }
        self.coefficients.insert(question.to_string(), coefficient);
        self.descriptors.insert(question.to_string(), descriptors);
        true
    }

    pub fn descriptor_text(&self, question: &str) -> String {
        let Some(descriptors) = self.descriptors(question) else {
            return String::new();
        };
        descriptors
            .iter()
            .enumerate()
            .map(|(level, text)| format!("{level}pt: {text}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rubric.rs"]
mod tests;
