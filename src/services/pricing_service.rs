use chrono::NaiveDate;

use crate::models::room::Room;

/// Advance payment is a fixed 25% of the total stay cost.
const ADVANCE_RATE: f64 = 0.25;

/// Computed advance for a stay.
///
/// `nights` is the absolute day difference between the two dates, so a
/// check-out before the check-in produces the same magnitude as the forward
/// stay. Whether that leniency is intended is an open product question;
/// until it is settled the quote keeps the historical arithmetic but flags
/// the reversal so the caller can surface it instead of showing a
/// plausible-looking charge silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceQuote {
    pub nights: u32,
    pub amount: f64,
    pub reversed_dates: bool,
}

impl AdvanceQuote {
    /// Amount formatted to two decimal places for display.
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

pub struct PricingService;

impl PricingService {
    /// Whole-night stay length between two dates.
    ///
    /// Mirrors `ceil(|Δms| / 86_400_000)`: date-granular inputs land on day
    /// boundaries, so the ceiling is the exact day count and a same-day
    /// stay is 0 nights.
    pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
        (check_out - check_in).num_days().unsigned_abs() as u32
    }

    /// Quote the advance for a room between two dates.
    pub fn advance_quote(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> AdvanceQuote {
        let nights = Self::stay_nights(check_in, check_out);
        AdvanceQuote {
            nights,
            amount: nights as f64 * room.price * ADVANCE_RATE,
            reversed_dates: check_out < check_in,
        }
    }
}
