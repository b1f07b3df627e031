//! Cart Handlers

use salvo::http::StatusError;

use emporium_app::domain::carts::MAX_QUANTITY;

pub(crate) mod add;
pub(crate) mod remove;

/// Narrow a requested quantity to the range the carts service accepts.
fn parse_quantity(quantity: i64) -> Result<u32, StatusError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| (1..=MAX_QUANTITY).contains(quantity))
        .ok_or_else(|| {
            StatusError::bad_request()
                .brief(format!("Quantity must be between 1 and {MAX_QUANTITY}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_quantities_in_range() {
        assert_eq!(parse_quantity(1).ok(), Some(1));
        assert_eq!(parse_quantity(i64::from(MAX_QUANTITY)).ok(), Some(MAX_QUANTITY));
    }

    #[test]
    fn rejects_zero_negative_and_oversized_quantities() {
        assert!(parse_quantity(0).is_err(), "zero is rejected");
        assert!(parse_quantity(-3).is_err(), "negative is rejected");
        assert!(
            parse_quantity(i64::from(MAX_QUANTITY) + 1).is_err(),
            "over the cap is rejected"
        );
        assert!(parse_quantity(i64::MAX).is_err(), "overflow is rejected");
    }
}
