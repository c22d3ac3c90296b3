use crate::domain::errors::DomainError;

const CNT_PROFILE_OWNER: &str = "profiles_owner_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("profile not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_PROFILE_OWNER) {
                return DomainError::Validation("owner already has a profile".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "22P02" | "22007" | "22008" => {
                        return DomainError::Validation("malformed column value".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
