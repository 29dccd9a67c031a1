use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to generate a playlist
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VibeRequest {
    #[validate(custom(function = "not_blank"))]
    pub vibe: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_vibe_rejected() {
        for vibe in ["", "   ", "\t\n"] {
            let req = VibeRequest { vibe: vibe.to_string() };
            assert!(req.validate().is_err(), "{:?} should be rejected", vibe);
        }
    }

    #[test]
    fn test_vibe_accepted() {
        let req = VibeRequest { vibe: "  rainy sunday  ".to_string() };
        assert!(req.validate().is_ok());
    }
}
