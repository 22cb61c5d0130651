use chrono::{Local, Weekday};
use leptos::prelude::*;

use crate::models::Recipe;
use crate::planner::{MealPlanner, MealType, PlannedMeal};

/// Shared meal planner, so recipes can be planned from the detail view
#[derive(Clone, Copy)]
pub struct MealPlannerHandle {
    planner: RwSignal<MealPlanner>,
}

impl MealPlannerHandle {
    pub fn week_label(&self) -> String {
        self.planner.with(MealPlanner::week_label)
    }

    pub fn is_current_week(&self) -> bool {
        self.planner.with(|p| p.offset() == 0)
    }

    pub fn planned_count(&self) -> usize {
        self.planner.with(MealPlanner::planned_count)
    }

    /// Distinct recipes planned this week
    pub fn recipe_count(&self) -> usize {
        self.planner.with(|p| p.plan().map_or(0, |plan| plan.recipe_ids().len()))
    }

    /// Filled slots of `day`, in meal order
    pub fn day(&self, day: Weekday) -> Vec<(MealType, PlannedMeal)> {
        self.planner.with(|p| {
            p.plan()
                .map(|plan| plan.day(day).map(|(meal, planned)| (meal, planned.clone())).collect())
                .unwrap_or_default()
        })
    }

    pub fn meal(&self, day: Weekday, meal: MealType) -> Option<PlannedMeal> {
        self.planner
            .with(|p| p.plan().and_then(|plan| plan.meal(day, meal).cloned()))
    }

    pub fn date_label(&self, day: Weekday) -> String {
        self.planner.with(|p| p.date_of(day).format("%a %-d").to_string())
    }

    pub fn next_week(&self) {
        self.planner.update(MealPlanner::next_week);
    }

    pub fn previous_week(&self) {
        self.planner.update(MealPlanner::previous_week);
    }

    pub fn this_week(&self) {
        self.planner.update(MealPlanner::this_week);
    }

    pub fn assign(&self, day: Weekday, meal: MealType, recipe: &Recipe) {
        self.planner.update(|p| {
            p.assign(day, meal, recipe);
        });
    }

    pub fn clear(&self, day: Weekday, meal: MealType) {
        self.planner.update(|p| {
            p.clear(day, meal);
        });
    }
}

pub fn provide_meal_planner() -> MealPlannerHandle {
    let handle = MealPlannerHandle {
        planner: RwSignal::new(MealPlanner::new(Local::now().date_naive())),
    };
    provide_context(handle);
    handle
}

pub fn use_meal_planner() -> MealPlannerHandle {
    expect_context::<MealPlannerHandle>()
}
