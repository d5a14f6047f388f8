use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::room::Room;

/// Meal plans that can be bundled with a room rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MealPlan {
    /// European Plan: room only.
    #[default]
    #[serde(rename = "EP")]
    Ep,
    /// American Plan: all meals.
    #[serde(rename = "AP")]
    Ap,
    /// Continental Plan: breakfast.
    #[serde(rename = "CP")]
    Cp,
    /// Modified American Plan: breakfast and one major meal.
    #[serde(rename = "MAP")]
    Map,
}

impl MealPlan {
    pub const ALL: [MealPlan; 4] = [MealPlan::Ep, MealPlan::Ap, MealPlan::Cp, MealPlan::Map];

    pub fn code(&self) -> &'static str {
        match self {
            MealPlan::Ep => "EP",
            MealPlan::Ap => "AP",
            MealPlan::Cp => "CP",
            MealPlan::Map => "MAP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EP" => Some(MealPlan::Ep),
            "AP" => Some(MealPlan::Ap),
            "CP" => Some(MealPlan::Cp),
            "MAP" => Some(MealPlan::Map),
            _ => None,
        }
    }
}

/// In-memory reservation draft. Never persisted and never submitted; the
/// flow ends at the displayed advance amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub room: Room,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub meal_plan: MealPlan,
}

impl ReservationDraft {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            check_in: None,
            check_out: None,
            meal_plan: MealPlan::default(),
        }
    }
}
