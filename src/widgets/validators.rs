pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{min_length, required, run_validators};

    #[test]
    fn required_rejects_blank_input() {
        let validators = vec![required("needed")];
        assert_eq!(run_validators(&validators, "  "), Err("needed".to_string()));
        assert!(run_validators(&validators, "x").is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let validators = vec![required("needed"), min_length(3, "too short")];
        assert_eq!(
            run_validators(&validators, "ab"),
            Err("too short".to_string())
        );
    }
}
