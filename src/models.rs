use serde::Deserialize;

/// The answer tags a question may name as correct.
pub const ANSWER_TAGS: [&str; 4] = ["A", "B", "C", "D"];

/// One element of a deck's `questions` array as the editor submits it.
///
/// Every field is optional so a half-filled question still decodes and can be
/// reported by index instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_answer: Option<String>,
}

impl Question {
    pub fn is_complete(&self) -> bool {
        let texts = [
            &self.question_text,
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ];

        texts
            .iter()
            .all(|text| text.as_deref().is_some_and(|t| !t.is_empty()))
            && self
                .correct_answer
                .as_deref()
                .is_some_and(|tag| ANSWER_TAGS.contains(&tag))
    }
}
