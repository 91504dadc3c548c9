use crate::domain::payment::{FormData, Rule, ValidationRules};
use crate::error::{CommerceError, Result};

/// Checks checkout form data against a gateway's declared rules.
///
/// Fails on the first offending field, in rule-set order. `Required` fails
/// on a missing or empty value; `Str` is satisfied by any present value
/// since form data is already string-typed.
pub fn validate(form: &FormData, rules: &ValidationRules) -> Result<()> {
    for (field, constraints) in rules {
        for rule in constraints {
            match rule {
                Rule::Required => {
                    let missing = form.get(field).is_none_or(|value| value.is_empty());
                    if missing {
                        return Err(CommerceError::InvalidPaymentInput(format!(
                            "the {field} field is required"
                        )));
                    }
                }
                Rule::Str => {}
            }
        }
    }
    Ok(())
}
