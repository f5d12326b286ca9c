#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    MissingDatabasePassword,
    DatabaseConnectionError(sqlx::Error),
    DatabaseQueryError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::MissingDatabasePassword => {
                write!(f, "Database password is not set")
            }
            Error::DatabaseConnectionError(err) => {
                write!(f, "Cannot establish a database connection: {}", err)
            }
            Error::DatabaseQueryError(_) => {
                write!(f, "Cannot update, invalid data.")
            }
            Error::MigrationError(err) => {
                write!(f, "Cannot migrate data: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ParseError(err) => Some(err),
            Error::MissingDatabasePassword => None,
            Error::DatabaseConnectionError(err) | Error::DatabaseQueryError(err) => Some(err),
            Error::MigrationError(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_mask_database_details() {
        let error = Error::DatabaseQueryError(sqlx::Error::RowNotFound);
        assert_eq!(error.to_string(), "Cannot update, invalid data.");
    }

    #[test]
    fn missing_password_names_the_problem() {
        assert_eq!(
            Error::MissingDatabasePassword.to_string(),
            "Database password is not set"
        );
    }
}
