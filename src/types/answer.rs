use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub user_name: String,
    pub question: String,
    pub answer: String,
    pub role: String,
    // Auxiliary field kept nullable; nothing in the application fills it yet.
    pub reference: Option<String>,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct AnswerId(pub i32);

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewAnswer {
    pub user_name: String,
    pub question: String,
    pub answer: String,
    pub role: String,
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_serializes_as_null_when_absent() {
        let answer = Answer {
            id: AnswerId(1),
            user_name: "user".to_string(),
            question: "How can I login?".to_string(),
            answer: "Use the login page.".to_string(),
            role: "student".to_string(),
            reference: None,
        };

        let json = serde_json::to_string(&answer).expect("serialization failed");
        assert!(json.contains("\"reference\":null"));
    }
}
