use tracing::{Level, event, instrument};

use crate::report::Report;
use crate::store::Store;
use crate::types::answer::{Answer, NewAnswer};

use handle_errors::Error;

/// Posts one answer and expects it back when listing answers for its question.
#[instrument]
pub async fn post_answer(store: &Store, report: &mut Report) {
    println!("\nTest: post answer");
    let outcome = async {
        event!(target: "qa_smoke", Level::INFO, "posting answer");
        store
            .add_answer(NewAnswer {
                user_name: "hw3user4".to_string(),
                question: "Why should assign role?".to_string(),
                answer: "Features are scoped to whichever role you hold.".to_string(),
                role: "student".to_string(),
                reference: None,
            })
            .await?;

        let answers = store.get_answers("Why should assign role?").await?;
        Ok::<bool, Error>(contains_answer(
            &answers,
            "hw3user4",
            "Features are scoped to whichever role you hold.",
        ))
    }
    .await;

    report.conclude(outcome, "answer was posted and found", "answer not found");
}

/// Posts two answers to the same question and expects both in the listing.
#[instrument]
pub async fn answers_for_question(store: &Store, report: &mut Report) {
    println!("\nTest: answers for question");
    let outcome = async {
        let question = "How can I post question?";
        store
            .add_answer(NewAnswer {
                user_name: "hw3user5".to_string(),
                question: question.to_string(),
                answer: "Use the ask page.".to_string(),
                role: "student".to_string(),
                reference: None,
            })
            .await?;
        store
            .add_answer(NewAnswer {
                user_name: "hw3user6".to_string(),
                question: question.to_string(),
                answer: "Open the ask page, then add your question and details there.".to_string(),
                role: "student".to_string(),
                reference: None,
            })
            .await?;

        let answers = store.get_answers(question).await?;
        Ok::<bool, Error>(
            contains_answer(&answers, "hw3user5", "Use the ask page.")
                && contains_answer(
                    &answers,
                    "hw3user6",
                    "Open the ask page, then add your question and details there.",
                ),
        )
    }
    .await;

    report.conclude(outcome, "all expected answers found", "missing expected answers");
}

fn contains_answer(answers: &[Answer], user_name: &str, answer: &str) -> bool {
    answers
        .iter()
        .any(|a| a.user_name == user_name && a.answer == answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answer::AnswerId;

    fn answer(id: i32, user_name: &str, answer: &str) -> Answer {
        Answer {
            id: AnswerId(id),
            user_name: user_name.to_string(),
            question: "How can I post question?".to_string(),
            answer: answer.to_string(),
            role: "student".to_string(),
            reference: None,
        }
    }

    #[test]
    fn finds_each_author_in_a_shared_listing() {
        let listing = vec![
            answer(1, "hw3user5", "Use the ask page."),
            answer(2, "hw3user6", "Open the ask page."),
        ];

        assert!(contains_answer(&listing, "hw3user5", "Use the ask page."));
        assert!(contains_answer(&listing, "hw3user6", "Open the ask page."));
    }

    #[test]
    fn does_not_mix_authors_and_texts() {
        let listing = vec![answer(1, "hw3user5", "Use the ask page.")];

        assert!(!contains_answer(&listing, "hw3user6", "Use the ask page."));
        assert!(!contains_answer(&listing, "hw3user5", "Open the ask page."));
    }
}
