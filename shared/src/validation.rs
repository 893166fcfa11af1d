//! Validation utilities for the Magical Tales platform

use crate::types::Gender;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Age range for kid profiles
pub const MIN_KID_AGE: i32 = 1;
pub const MAX_KID_AGE: i32 = 15;

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a display name (parent or kid)
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.chars().count() > 50 {
        return Err("Name must be 50 characters or fewer");
    }
    Ok(())
}

/// Validate kid age is within the supported range
pub fn validate_kid_age(age: i32) -> Result<(), &'static str> {
    if !(MIN_KID_AGE..=MAX_KID_AGE).contains(&age) {
        return Err("Age must be between 1 and 15");
    }
    Ok(())
}

/// Validate a gender string from a form submission
pub fn validate_gender(gender: &str) -> Result<Gender, &'static str> {
    Gender::parse(gender).ok_or("Gender must be boy, girl, or other")
}

/// Validate the interests list attached to a kid profile
pub fn validate_interests(interests: &[String]) -> Result<(), &'static str> {
    if interests.len() > 20 {
        return Err("At most 20 interests are allowed");
    }
    if interests.iter().any(|i| i.trim().is_empty()) {
        return Err("Interests cannot be blank");
    }
    Ok(())
}
