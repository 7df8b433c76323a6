//! Display variant classification.
//!
//! A catalog item is shown in exactly one of three variants. The conditions
//! behind them overlap (a shoe can be discounted *and* newly released), so the
//! rule is evaluated in a fixed priority order:
//!
//! 1. a sale price is present → [`DisplayVariant::OnSale`]
//! 2. released within the recency window → [`DisplayVariant::NewRelease`]
//! 3. otherwise → [`DisplayVariant::Default`]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shoefront_core::{DomainError, DomainResult, MinorUnits, ValueObject};

use crate::format::is_within_recency_window;

/// Mutually exclusive display classification of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    Default,
    OnSale,
    NewRelease,
}

impl DisplayVariant {
    pub const ALL: [DisplayVariant; 3] = [
        DisplayVariant::Default,
        DisplayVariant::OnSale,
        DisplayVariant::NewRelease,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayVariant::Default => "default",
            DisplayVariant::OnSale => "on-sale",
            DisplayVariant::NewRelease => "new-release",
        }
    }
}

impl core::fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far back from "now" a release still counts as new.
///
/// The window is exclusive: a shoe released exactly `window` ago is no longer new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn days(days: u32) -> DomainResult<Self> {
        if days == 0 {
            return Err(DomainError::validation("recency window must be at least one day"));
        }
        Ok(Self { days })
    }

    pub fn in_days(&self) -> u32 {
        self.days
    }

    pub fn as_duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self {
            days: Self::DEFAULT_DAYS,
        }
    }
}

impl ValueObject for RecencyWindow {}

/// Classify an item from its sale price and release date, as seen at `now`.
///
/// Total and pure: no other item field is consulted and nothing reads a clock.
/// Any sale price counts, including zero and one equal to the regular price.
pub fn classify(
    sale_price: Option<MinorUnits>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> DisplayVariant {
    if sale_price.is_some() {
        DisplayVariant::OnSale
    } else if is_within_recency_window(release_date, now, window) {
        DisplayVariant::NewRelease
    } else {
        DisplayVariant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        now() - Duration::days(days)
    }

    fn window() -> RecencyWindow {
        RecencyWindow::default()
    }

    #[test]
    fn zero_sale_price_on_old_shoe_is_on_sale() {
        let variant = classify(Some(MinorUnits::ZERO), days_ago(3650), now(), window());
        assert_eq!(variant, DisplayVariant::OnSale);
    }

    #[test]
    fn recent_release_without_sale_is_new_release() {
        let variant = classify(None, days_ago(5), now(), window());
        assert_eq!(variant, DisplayVariant::NewRelease);
    }

    #[test]
    fn sale_beats_new_release() {
        let variant = classify(Some(MinorUnits::new(5000)), days_ago(2), now(), window());
        assert_eq!(variant, DisplayVariant::OnSale);
    }

    #[test]
    fn old_release_without_sale_is_default() {
        let variant = classify(None, days_ago(400), now(), window());
        assert_eq!(variant, DisplayVariant::Default);
    }

    #[test]
    fn release_exactly_at_window_boundary_is_default() {
        let variant = classify(None, days_ago(30), now(), window());
        assert_eq!(variant, DisplayVariant::Default);
    }

    #[test]
    fn release_one_second_inside_window_is_new_release() {
        let release = days_ago(30) + Duration::seconds(1);
        assert_eq!(classify(None, release, now(), window()), DisplayVariant::NewRelease);
    }

    #[test]
    fn future_release_date_is_new_release() {
        let release = now() + Duration::days(10);
        assert_eq!(classify(None, release, now(), window()), DisplayVariant::NewRelease);
    }

    #[test]
    fn custom_window_moves_the_boundary() {
        let week = RecencyWindow::days(7).unwrap();
        assert_eq!(classify(None, days_ago(6), now(), week), DisplayVariant::NewRelease);
        assert_eq!(classify(None, days_ago(7), now(), week), DisplayVariant::Default);
    }

    #[test]
    fn zero_day_window_is_rejected() {
        assert!(matches!(RecencyWindow::days(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn variant_serializes_to_kebab_case() {
        let json = serde_json::to_string(&DisplayVariant::NewRelease).unwrap();
        assert_eq!(json, "\"new-release\"");
        assert_eq!(DisplayVariant::OnSale.to_string(), "on-sale");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn sale_price() -> impl Strategy<Value = Option<MinorUnits>> {
            proptest::option::of((0u64..10_000_000).prop_map(MinorUnits::new))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: any present sale price wins, whatever the release date.
            #[test]
            fn present_sale_price_is_always_on_sale(
                amount in 0u64..10_000_000,
                offset_secs in -400_000_000i64..400_000_000
            ) {
                let release = now() - Duration::seconds(offset_secs);
                let variant = classify(Some(MinorUnits::new(amount)), release, now(), window());
                prop_assert_eq!(variant, DisplayVariant::OnSale);
            }

            /// Property: without a sale, releases strictly inside the window are new.
            #[test]
            fn inside_window_is_new_release(
                elapsed_secs in 0i64..(30 * 86_400)
            ) {
                let release = now() - Duration::seconds(elapsed_secs);
                prop_assert_eq!(classify(None, release, now(), window()), DisplayVariant::NewRelease);
            }

            /// Property: without a sale, releases at or beyond the window are default.
            #[test]
            fn outside_window_is_default(
                elapsed_secs in (30 * 86_400i64)..400_000_000
            ) {
                let release = now() - Duration::seconds(elapsed_secs);
                prop_assert_eq!(classify(None, release, now(), window()), DisplayVariant::Default);
            }

            /// Property: classify is deterministic for identical inputs and instant.
            #[test]
            fn classify_is_idempotent(
                sale in sale_price(),
                offset_secs in -400_000_000i64..400_000_000,
                days in 1u32..365
            ) {
                let release = now() - Duration::seconds(offset_secs);
                let window = RecencyWindow::days(days).unwrap();
                let first = classify(sale, release, now(), window);
                let second = classify(sale, release, now(), window);
                prop_assert_eq!(first, second);
                prop_assert!(DisplayVariant::ALL.contains(&first));
            }
        }
    }
}
