use chrono::NaiveDate;

use crate::models::reservation::{MealPlan, ReservationDraft};
use crate::models::room::Room;
use crate::services::pricing_service::{AdvanceQuote, PricingService};

/// Which date field an open picker is feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    CheckIn,
    CheckOut,
}

/// Reservation composer for one room: collects the two stay dates and the
/// meal plan, and quotes the advance. At most one date picker is open at a
/// time.
#[derive(Debug, Clone)]
pub struct ReservationComposer {
    draft: ReservationDraft,
    active_picker: Option<DateField>,
}

impl ReservationComposer {
    /// Open the composer for a room. Only a room whose status is explicitly
    /// available can be reserved; booked and unknown rooms are refused.
    pub fn open(room: Room) -> Option<Self> {
        if !room.is_available() {
            return None;
        }
        Some(Self {
            draft: ReservationDraft::new(room),
            active_picker: None,
        })
    }

    pub fn room(&self) -> &Room {
        &self.draft.room
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn active_picker(&self) -> Option<DateField> {
        self.active_picker
    }

    /// Open the picker for one date field, replacing any picker already
    /// open.
    pub fn show_picker(&mut self, field: DateField) {
        self.active_picker = Some(field);
    }

    pub fn dismiss_picker(&mut self) {
        self.active_picker = None;
    }

    /// Store a picked date into whichever field the open picker targets and
    /// close the picker. Ignored when no picker is open.
    pub fn pick_date(&mut self, date: NaiveDate) {
        match self.active_picker {
            Some(DateField::CheckIn) => self.draft.check_in = Some(date),
            Some(DateField::CheckOut) => self.draft.check_out = Some(date),
            None => return,
        }
        self.active_picker = None;
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.draft.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.draft.check_out
    }

    pub fn meal_plan(&self) -> MealPlan {
        self.draft.meal_plan
    }

    pub fn choose_meal_plan(&mut self, plan: MealPlan) {
        self.draft.meal_plan = plan;
    }

    /// The advance quote, once both dates are picked.
    pub fn advance_quote(&self) -> Option<AdvanceQuote> {
        match (self.draft.check_in, self.draft.check_out) {
            (Some(check_in), Some(check_out)) => Some(PricingService::advance_quote(
                &self.draft.room,
                check_in,
                check_out,
            )),
            _ => None,
        }
    }

    /// Display string for the advance; "0.00" while dates are incomplete.
    pub fn advance_display(&self) -> String {
        self.advance_quote()
            .map(|quote| quote.formatted_amount())
            .unwrap_or_else(|| "0.00".to_string())
    }
}
