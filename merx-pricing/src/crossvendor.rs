use merx_shared::PriceQuote;
use rust_decimal::Decimal;

/// Which suggested-price field to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceField {
    Msrp,
    Map,
}

impl ReferenceField {
    fn extract(self, quote: &PriceQuote) -> Option<Decimal> {
        match self {
            Self::Msrp => quote.parsed_msrp(),
            Self::Map => quote.parsed_map(),
        }
    }
}

/// Substitute a missing MSRP/MAP with the best value any vendor quotes.
///
/// Returns `primary` untouched when it is present or the feature is
/// disabled. Otherwise scans every quote (the primary vendor included —
/// it already failed to supply the field) and takes the highest value on
/// offer, so the advertised price never undercuts the rest of the market.
/// Value-only: ties discard vendor identity.
pub fn resolve_cross_vendor(
    field: ReferenceField,
    primary: Option<Decimal>,
    all_quotes: &[PriceQuote],
    enabled: bool,
) -> Option<Decimal> {
    if primary.is_some() || !enabled {
        return primary;
    }

    all_quotes.iter().filter_map(|quote| field.extract(quote)).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_shared::RawMoney;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quote_with_msrp(msrp: Option<RawMoney>) -> PriceQuote {
        let mut quote = PriceQuote::new(Uuid::new_v4());
        quote.msrp = msrp;
        quote
    }

    #[test]
    fn test_returns_maximum_across_vendors() {
        let quotes = vec![
            quote_with_msrp(Some(RawMoney::from("29.99"))),
            quote_with_msrp(Some(RawMoney::from("34.99"))),
            quote_with_msrp(None),
        ];

        let resolved = resolve_cross_vendor(ReferenceField::Msrp, None, &quotes, true);
        assert_eq!(resolved, Some(dec("34.99")));
    }

    #[test]
    fn test_absent_when_no_vendor_has_the_field() {
        let quotes = vec![quote_with_msrp(None), quote_with_msrp(Some(RawMoney::from("N/A")))];

        let resolved = resolve_cross_vendor(ReferenceField::Msrp, None, &quotes, true);
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_noop_when_primary_present() {
        let quotes = vec![quote_with_msrp(Some(RawMoney::from("99.99")))];

        let resolved =
            resolve_cross_vendor(ReferenceField::Msrp, Some(dec("29.99")), &quotes, true);
        assert_eq!(resolved, Some(dec("29.99")));
    }

    #[test]
    fn test_noop_when_disabled() {
        let quotes = vec![quote_with_msrp(Some(RawMoney::from("99.99")))];

        let resolved = resolve_cross_vendor(ReferenceField::Msrp, None, &quotes, false);
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_malformed_and_non_positive_entries_are_skipped() {
        let quotes = vec![
            quote_with_msrp(Some(RawMoney::from("call for price"))),
            quote_with_msrp(Some(RawMoney::from(0.0))),
            quote_with_msrp(Some(RawMoney::from("24.99"))),
        ];

        let resolved = resolve_cross_vendor(ReferenceField::Msrp, None, &quotes, true);
        assert_eq!(resolved, Some(dec("24.99")));
    }

    #[test]
    fn test_resolves_map_field() {
        let mut quote = PriceQuote::new(Uuid::new_v4());
        quote.map = Some(RawMoney::from("19.95"));

        let resolved = resolve_cross_vendor(ReferenceField::Map, None, &[quote], true);
        assert_eq!(resolved, Some(dec("19.95")));
    }
}
