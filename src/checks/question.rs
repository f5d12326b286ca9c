use tracing::{Level, event, instrument};

use crate::report::Report;
use crate::store::Store;
use crate::types::question::{NewQuestion, Question};

use handle_errors::Error;

/// Posts a question and expects it to show up in a full listing.
#[instrument]
pub async fn post_question(store: &Store, report: &mut Report) {
    println!("\nTest: post question");
    let outcome = async {
        event!(target: "qa_smoke", Level::INFO, "posting question");
        store
            .add_question(NewQuestion {
                user_name: "hw3user1".to_string(),
                question: "How can I login?".to_string(),
                role: "student".to_string(),
            })
            .await?;

        let questions = store.get_questions(None, 0).await?;
        Ok::<bool, Error>(contains_question(
            &questions,
            "hw3user1",
            "How can I login?",
        ))
    }
    .await;

    report.conclude(outcome, "question was posted and found", "question was not found");
}

/// Posts a question, deletes it again and expects it gone from the listing.
#[instrument]
pub async fn delete_question(store: &Store, report: &mut Report) {
    println!("\nTest: delete question");
    let outcome = async {
        store
            .add_question(NewQuestion {
                user_name: "hw3user2".to_string(),
                question: "Can I change role?".to_string(),
                role: "student".to_string(),
            })
            .await?;
        let deleted = store
            .delete_question("hw3user2", "Can I change role?")
            .await?;

        let questions = store.get_questions(None, 0).await?;
        let still_there = contains_question(&questions, "hw3user2", "Can I change role?");
        Ok::<bool, Error>(deleted && !still_there)
    }
    .await;

    report.conclude(outcome, "question was deleted", "deletion unsuccessful");
}

/// Rewrites a question's text and expects the new text in the listing.
#[instrument]
pub async fn update_question(store: &Store, report: &mut Report) {
    println!("\nTest: update question");
    let outcome = async {
        store
            .add_question(NewQuestion {
                user_name: "hw3user3".to_string(),
                question: "How can I change role?".to_string(),
                role: "student".to_string(),
            })
            .await?;
        let updated = store
            .update_question("How can I change role?", "Ask Admin")
            .await?;

        let questions = store.get_questions(None, 0).await?;
        let found = questions.iter().any(|q| q.question == "Ask Admin");
        Ok::<bool, Error>(updated && found)
    }
    .await;

    report.conclude(outcome, "question was updated and found", "updated question not found");
}

fn contains_question(questions: &[Question], user_name: &str, question: &str) -> bool {
    questions
        .iter()
        .any(|q| q.user_name == user_name && q.question == question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::QuestionId;

    fn question(id: i32, user_name: &str, question: &str) -> Question {
        Question {
            id: QuestionId(id),
            user_name: user_name.to_string(),
            question: question.to_string(),
            role: "student".to_string(),
        }
    }

    #[test]
    fn matches_on_user_and_text() {
        let listing = vec![
            question(1, "hw3user1", "How can I login?"),
            question(2, "hw3user2", "Can I change role?"),
        ];

        assert!(contains_question(&listing, "hw3user2", "Can I change role?"));
    }

    #[test]
    fn both_fields_have_to_match() {
        let listing = vec![question(1, "hw3user1", "How can I login?")];

        assert!(!contains_question(&listing, "hw3user1", "Can I change role?"));
        assert!(!contains_question(&listing, "hw3user2", "How can I login?"));
    }

    #[test]
    fn empty_listing_contains_nothing() {
        assert!(!contains_question(&[], "hw3user1", "How can I login?"));
    }
}
