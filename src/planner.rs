//! Meal Planner
//!
//! Per-week meal plans kept in memory. A week is identified by its Monday and
//! holds at most one recipe per (weekday, meal) slot.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};

use crate::models::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// What the planner remembers about a recipe placed in a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMeal {
    pub recipe_id: u64,
    pub title: String,
    pub image_url: Option<String>,
    pub total_time: u32,
    pub servings: u32,
}

impl From<&Recipe> for PlannedMeal {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe_id: recipe.id,
            title: recipe.title.clone(),
            image_url: recipe.image_url.clone(),
            total_time: recipe.total_time(),
            servings: recipe.servings,
        }
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    start: NaiveDate,
    meals: BTreeMap<(u32, MealType), PlannedMeal>,
}

impl WeekPlan {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start: week_start(start),
            meals: BTreeMap::new(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        self.start + Days::new(u64::from(day.num_days_from_monday()))
    }

    /// Put `planned` in the slot, returning whatever it replaced
    pub fn assign(&mut self, day: Weekday, meal: MealType, planned: PlannedMeal) -> Option<PlannedMeal> {
        self.meals.insert((day.num_days_from_monday(), meal), planned)
    }

    pub fn clear(&mut self, day: Weekday, meal: MealType) -> Option<PlannedMeal> {
        self.meals.remove(&(day.num_days_from_monday(), meal))
    }

    pub fn meal(&self, day: Weekday, meal: MealType) -> Option<&PlannedMeal> {
        self.meals.get(&(day.num_days_from_monday(), meal))
    }

    /// Filled slots of one day, in meal order
    pub fn day(&self, day: Weekday) -> impl Iterator<Item = (MealType, &PlannedMeal)> {
        let index = day.num_days_from_monday();
        self.meals
            .range((index, MealType::Breakfast)..=(index, MealType::Snack))
            .map(|((_, meal), planned)| (*meal, planned))
    }

    pub fn planned_count(&self) -> usize {
        self.meals.len()
    }

    pub fn recipe_ids(&self) -> BTreeSet<u64> {
        self.meals.values().map(|m| m.recipe_id).collect()
    }
}

/// Week navigation over a set of plans. Weeks that were never edited have no
/// stored plan.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanner {
    today: NaiveDate,
    offset: i64,
    weeks: BTreeMap<NaiveDate, WeekPlan>,
}

impl MealPlanner {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            offset: 0,
            weeks: BTreeMap::new(),
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn current_week(&self) -> NaiveDate {
        week_start(self.today) + Duration::weeks(self.offset)
    }

    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        self.current_week() + Days::new(u64::from(day.num_days_from_monday()))
    }

    pub fn next_week(&mut self) {
        self.offset += 1;
    }

    pub fn previous_week(&mut self) {
        self.offset -= 1;
    }

    pub fn this_week(&mut self) {
        self.offset = 0;
    }

    pub fn plan(&self) -> Option<&WeekPlan> {
        self.weeks.get(&self.current_week())
    }

    pub fn plan_mut(&mut self) -> &mut WeekPlan {
        let start = self.current_week();
        self.weeks.entry(start).or_insert_with(|| WeekPlan::new(start))
    }

    pub fn assign(&mut self, day: Weekday, meal: MealType, recipe: &Recipe) -> Option<PlannedMeal> {
        self.plan_mut().assign(day, meal, PlannedMeal::from(recipe))
    }

    pub fn clear(&mut self, day: Weekday, meal: MealType) -> Option<PlannedMeal> {
        let start = self.current_week();
        self.weeks.get_mut(&start)?.clear(day, meal)
    }

    pub fn planned_count(&self) -> usize {
        self.plan().map_or(0, WeekPlan::planned_count)
    }

    /// e.g. "May 6 - May 12, 2024"
    pub fn week_label(&self) -> String {
        let start = self.current_week();
        let end = start + Days::new(6);
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
    }
}
