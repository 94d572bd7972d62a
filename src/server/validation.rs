use crate::server::response::ApiError;

const MAX_DIVISION_NAME_LEN: usize = 64;
const MAX_PLAYER_NAME_LEN: usize = 100;

fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ' '
}

fn validate_name(name: &str, entity: &str, max_len: usize) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{entity} name cannot be empty"));
    }
    if name.len() > max_len {
        return Err(format!("{entity} name cannot exceed {max_len} characters"));
    }
    if !name.chars().all(is_valid_name_char) {
        return Err(format!(
            "{entity} name can only contain alphanumeric characters, hyphens, underscores, periods, and spaces"
        ));
    }
    if name.starts_with(' ') || name.ends_with(' ') {
        return Err(format!("{entity} name cannot start or end with a space"));
    }
    Ok(())
}

pub fn validate_division_name(name: &str) -> Result<(), ApiError> {
    validate_name(name, "Division", MAX_DIVISION_NAME_LEN).map_err(ApiError::bad_request)
}

pub fn validate_player_name(name: &str) -> Result<(), ApiError> {
    validate_name(name, "Player", MAX_PLAYER_NAME_LEN).map_err(ApiError::bad_request)
}
