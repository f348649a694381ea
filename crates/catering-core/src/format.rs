//! Display formatting contract for computed quantities

use crate::types::Unit;

/// Formats a quantity for the print view and result screens.
///
/// Gram and millilitre quantities of 1000 or more are shown in kilograms
/// respectively litres with two decimals; everything else stays in its
/// original unit, integral values without decimals. Display-only: stored
/// totals are never altered.
pub fn format_quantity(quantity: f64, unit: Unit) -> String {
    match unit {
        Unit::Grams if quantity >= 1000.0 => format!("{:.2} kg", quantity / 1000.0),
        Unit::Millilitres if quantity >= 1000.0 => format!("{:.2} L", quantity / 1000.0),
        _ => {
            if quantity.fract() == 0.0 {
                format!("{} {}", quantity as i64, unit)
            } else {
                format!("{quantity:.2} {unit}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grams_roll_over_to_kilograms_at_1000() {
        assert_eq!(format_quantity(999.0, Unit::Grams), "999 g");
        assert_eq!(format_quantity(1000.0, Unit::Grams), "1.00 kg");
        assert_eq!(format_quantity(12500.0, Unit::Grams), "12.50 kg");
    }

    #[test]
    fn millilitres_roll_over_to_litres_at_1000() {
        assert_eq!(format_quantity(250.0, Unit::Millilitres), "250 ml");
        assert_eq!(format_quantity(1500.0, Unit::Millilitres), "1.50 L");
    }

    #[test]
    fn pieces_never_convert() {
        assert_eq!(format_quantity(7.0, Unit::Pieces), "7 pcs");
        assert_eq!(format_quantity(2500.0, Unit::Pieces), "2500 pcs");
    }

    #[test]
    fn fractional_quantities_keep_two_decimals() {
        assert_eq!(format_quantity(2.5, Unit::Grams), "2.50 g");
        assert_eq!(format_quantity(33.333, Unit::Millilitres), "33.33 ml");
    }
}
