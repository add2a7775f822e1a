use validator::{Validate, ValidationErrors};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

pub fn field_errors(errs: &ValidationErrors) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = errs
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    pairs.sort();
    pairs
}

pub fn error_message(errs: &ValidationErrors) -> String {
    field_errors(errs)
        .into_iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}
