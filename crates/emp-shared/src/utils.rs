//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let keep: String = local.chars().take(if local.chars().count() <= 2 { 1 } else { 2 }).collect();
        format!("{}***{}", keep, domain)
    } else {
        "***".to_string()
    }
}

/// Keeps the last four digits of a phone number.
pub fn mask_phone(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= 4 {
        return "***".to_string();
    }
    let tail: String = phone.chars().skip(count - 4).collect();
    format!("***{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@corp.com"), "ja***@corp.com");
        assert_eq!(mask_email("jo@corp.com"), "j***@corp.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("5551234567"), "***4567");
        assert_eq!(mask_phone("123"), "***");
    }
}
