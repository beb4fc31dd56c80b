//! Plan types.
//!
//! A `PlanEntry` is one leg of an itinerary, a `DayPlan` is the ordered legs
//! starting from a home location, and a `RouteSet` collects one `DayPlan`
//! per request pair.

use chrono::{Duration, NaiveDateTime};

use super::Location;
use super::time::{format_duration, format_hhmm};

/// One origin-to-destination leg with its timing.
///
/// # Invariants
///
/// - `arrival_time == departure_time + estimated_duration`
///
/// Fields are private and there are no setters, so an entry cannot change
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    origin: Location,
    destination: Location,
    departure_time: NaiveDateTime,
    arrival_time: NaiveDateTime,
    estimated_duration: Duration,
}

impl PlanEntry {
    /// Creates an entry departing at `departure_time`. The arrival time is
    /// derived from the estimated duration.
    ///
    /// Returns `None` if the duration is negative or the arrival time would
    /// overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, NaiveDate};
    /// use day_planner::domain::{Location, PlanEntry};
    ///
    /// let eight = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .unwrap()
    ///     .and_hms_opt(8, 0, 0)
    ///     .unwrap();
    /// let entry = PlanEntry::new("A".into(), "B".into(), eight, Duration::minutes(25)).unwrap();
    ///
    /// assert_eq!(entry.departure_display(), "08:00");
    /// assert_eq!(entry.arrival_display(), "08:25");
    /// ```
    pub fn new(
        origin: Location,
        destination: Location,
        departure_time: NaiveDateTime,
        estimated_duration: Duration,
    ) -> Option<Self> {
        if estimated_duration < Duration::zero() {
            return None;
        }
        let arrival_time = departure_time.checked_add_signed(estimated_duration)?;

        Some(Self {
            origin,
            destination,
            departure_time,
            arrival_time,
            estimated_duration,
        })
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> NaiveDateTime {
        self.arrival_time
    }

    pub fn estimated_duration(&self) -> Duration {
        self.estimated_duration
    }

    /// Departure time as "HH:MM".
    pub fn departure_display(&self) -> String {
        format_hhmm(&self.departure_time)
    }

    /// Arrival time as "HH:MM".
    pub fn arrival_display(&self) -> String {
        format_hhmm(&self.arrival_time)
    }

    /// Estimated duration as "25m" or "1h 5m".
    pub fn duration_display(&self) -> String {
        format_duration(self.estimated_duration)
    }
}

/// A continuous itinerary starting from a home location.
///
/// # Invariants
///
/// Maintained by the planner, which is the only producer:
/// - `entries[i + 1].origin == entries[i].destination`
/// - `entries[i].arrival_time + dwell == entries[i + 1].departure_time`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPlan {
    entries: Vec<PlanEntry>,
}

impl DayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed entry.
    pub(crate) fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter()
    }
}

/// One day plan per request pair, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    plans: Vec<DayPlan>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, plan: DayPlan) {
        self.plans.push(plan);
    }

    pub fn plans(&self) -> &[DayPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.plans.iter()
    }
}
