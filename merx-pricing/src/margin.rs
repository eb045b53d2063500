use rust_decimal::prelude::*;

/// Gross margin percentage realized by selling at `price` goods acquired
/// at `cost`, to two decimal places. Undefined without a positive price
/// and a known cost.
pub fn margin_from_price(price: Option<Decimal>, cost: Option<Decimal>) -> Option<Decimal> {
    let price = price?;
    let cost = cost?;
    if price <= Decimal::ZERO {
        return None;
    }

    let margin = (price - cost) / price * Decimal::ONE_HUNDRED;
    Some(margin.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Price that realizes `margin_percent` on `cost`. A margin of 100% or
/// more has no finite price.
pub fn price_from_margin(cost: Decimal, margin_percent: Decimal) -> Option<Decimal> {
    if margin_percent >= Decimal::ONE_HUNDRED {
        return None;
    }
    Some(cost / (Decimal::ONE - margin_percent / Decimal::ONE_HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_margin_from_price() {
        assert_eq!(
            margin_from_price(Some(dec("12.50")), Some(dec("10.00"))),
            Some(dec("20.00"))
        );
        // Selling below cost is a negative margin, not an error.
        assert_eq!(
            margin_from_price(Some(dec("8.00")), Some(dec("10.00"))),
            Some(dec("-25.00"))
        );
    }

    #[test]
    fn test_margin_undefined_without_positive_price_and_cost() {
        assert_eq!(margin_from_price(None, Some(dec("10.00"))), None);
        assert_eq!(margin_from_price(Some(dec("12.50")), None), None);
        assert_eq!(margin_from_price(Some(Decimal::ZERO), Some(dec("10.00"))), None);
    }

    #[test]
    fn test_price_from_margin() {
        assert_eq!(price_from_margin(dec("10.00"), dec("20")), Some(dec("12.5")));
        assert_eq!(price_from_margin(dec("10.00"), Decimal::ZERO), Some(dec("10.00")));
        assert_eq!(price_from_margin(dec("10.00"), dec("100")), None);
        assert_eq!(price_from_margin(dec("10.00"), dec("150")), None);
    }

    #[test]
    fn test_margin_round_trip() {
        let cost = dec("37.42");
        for margin in ["0", "12.5", "20", "45", "99"] {
            let margin = dec(margin);
            let price = price_from_margin(cost, margin).unwrap();
            let realized = margin_from_price(Some(price), Some(cost)).unwrap();
            assert!(
                (realized - margin).abs() <= dec("0.01"),
                "margin {} round-tripped to {}",
                margin,
                realized
            );
        }
    }
}
