use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::types::{
    answer::{Answer, AnswerId, NewAnswer},
    question::{NewQuestion, Question, QuestionId},
};

use handle_errors::Error;

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Store, Error> {
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
            .map_err(Error::DatabaseConnectionError)?;

        Ok(Store {
            connection: db_pool,
        })
    }

    pub async fn run_migrations(&self) -> Result<(), Error> {
        sqlx::migrate!()
            .run(&self.connection)
            .await
            .map_err(Error::MigrationError)
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        match sqlx::query(
            "INSERT INTO questions (user_name, question, role)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, question, role",
        )
        .bind(new_question.user_name)
        .bind(new_question.question)
        .bind(new_question.role)
        .map(|row: PgRow| Question {
            id: QuestionId(row.get("id")),
            user_name: row.get("user_name"),
            question: row.get("question"),
            role: row.get("role"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(question) => Ok(question),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_questions(
        &self,
        limit: Option<i32>,
        offset: i32,
    ) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(offset)
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                user_name: row.get("user_name"),
                question: row.get("question"),
                role: row.get("role"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    // Matches on the current question text; true when at least one row changed.
    pub async fn update_question(&self, current: &str, new: &str) -> Result<bool, Error> {
        match sqlx::query("UPDATE questions SET question = $1 WHERE question = $2")
            .bind(new)
            .bind(current)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn delete_question(&self, user_name: &str, question: &str) -> Result<bool, Error> {
        match sqlx::query("DELETE FROM questions WHERE user_name = $1 AND question = $2")
            .bind(user_name)
            .bind(question)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn add_answer(&self, new_answer: NewAnswer) -> Result<Answer, Error> {
        match sqlx::query(
            "INSERT INTO answers (user_name, question, answer, role, reference)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_name, question, answer, role, reference",
        )
        .bind(new_answer.user_name)
        .bind(new_answer.question)
        .bind(new_answer.answer)
        .bind(new_answer.role)
        .bind(new_answer.reference)
        .map(|row: PgRow| Answer {
            id: AnswerId(row.get("id")),
            user_name: row.get("user_name"),
            question: row.get("question"),
            answer: row.get("answer"),
            role: row.get("role"),
            reference: row.get("reference"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(answer) => Ok(answer),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_answers(&self, question: &str) -> Result<Vec<Answer>, Error> {
        match sqlx::query("SELECT * from answers WHERE question = $1")
            .bind(question)
            .map(|row: PgRow| Answer {
                id: AnswerId(row.get("id")),
                user_name: row.get("user_name"),
                question: row.get("question"),
                answer: row.get("answer"),
                role: row.get("role"),
                reference: row.get("reference"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(answers) => Ok(answers),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn close(&self) {
        self.connection.close().await;
    }
}
