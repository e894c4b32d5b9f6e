use crate::domain::money::Money;
use crate::utils::error::{Result, StoreError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_quantity(field_name: &str, quantity: i32) -> Result<()> {
    if quantity <= 0 {
        return Err(StoreError::validation(
            field_name,
            format!("Quantity must be positive, got {}", quantity),
        ));
    }
    Ok(())
}

pub fn validate_positive_price(field_name: &str, price: Money) -> Result<()> {
    if !price.is_positive() {
        return Err(StoreError::validation(
            field_name,
            format!("Please enter a positive price, got {}", price),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StoreError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(StoreError::validation(field_name, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StoreError::validation(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}
