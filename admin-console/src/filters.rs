//! Stats filter state
//!
//! One reducer over [`StatsQuery`] behind two explicit store variants:
//! [`UncontrolledFilter`] owns its state, [`ControlledFilter`] mutates state
//! owned by the caller. The caller picks the variant up front instead of the
//! store branching at runtime on whether external state was supplied.

use shared::models::StatsQuery;
use shared::service::{AgeRange, Gender, Service};
use shared::types::DateRange;

/// Filter mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetDateRange(Option<DateRange>),
    SetRestaurant(Option<String>),
    SetService(Option<Service>),
    SetGender(Option<Gender>),
    SetAgeRange(Option<AgeRange>),
    Reset,
}

/// Apply one action to a filter value
pub fn reduce(filter: &mut StatsQuery, action: FilterAction) {
    match action {
        FilterAction::SetDateRange(range) => {
            filter.start_date = range.map(|r| r.start);
            filter.end_date = range.map(|r| r.end);
        }
        FilterAction::SetRestaurant(id) => filter.restaurant_id = id,
        FilterAction::SetService(service) => filter.service = service,
        FilterAction::SetGender(gender) => filter.gender = gender,
        FilterAction::SetAgeRange(age_range) => filter.age_range = age_range,
        FilterAction::Reset => *filter = StatsQuery::default(),
    }
}

/// Common interface over the two store variants
pub trait FilterStore {
    fn filter(&self) -> &StatsQuery;
    fn apply(&mut self, action: FilterAction);
}

/// Filter store that owns its state
#[derive(Debug, Clone, Default)]
pub struct UncontrolledFilter {
    current: StatsQuery,
}

impl UncontrolledFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(initial: StatsQuery) -> Self {
        Self { current: initial }
    }

    pub fn into_inner(self) -> StatsQuery {
        self.current
    }
}

impl FilterStore for UncontrolledFilter {
    fn filter(&self) -> &StatsQuery {
        &self.current
    }

    fn apply(&mut self, action: FilterAction) {
        reduce(&mut self.current, action);
    }
}

/// Filter store over caller-owned state
pub struct ControlledFilter<'a> {
    state: &'a mut StatsQuery,
}

impl<'a> ControlledFilter<'a> {
    pub fn new(state: &'a mut StatsQuery) -> Self {
        Self { state }
    }
}

impl FilterStore for ControlledFilter<'_> {
    fn filter(&self) -> &StatsQuery {
        self.state
    }

    fn apply(&mut self, action: FilterAction) {
        reduce(self.state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_uncontrolled_store_accumulates_filters() {
        let mut store = UncontrolledFilter::new();
        store.apply(FilterAction::SetService(Some(Service::FlexBill)));
        store.apply(FilterAction::SetGender(Some(Gender::Female)));
        store.apply(FilterAction::SetDateRange(Some(DateRange::new(
            date("2025-02-01"),
            date("2025-02-28"),
        ))));

        let filter = store.filter();
        assert_eq!(filter.service, Some(Service::FlexBill));
        assert_eq!(filter.gender, Some(Gender::Female));
        assert_eq!(filter.start_date, Some(date("2025-02-01")));
        assert_eq!(filter.end_date, Some(date("2025-02-28")));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = UncontrolledFilter::new();
        store.apply(FilterAction::SetRestaurant(Some("rest-1".to_string())));
        store.apply(FilterAction::SetAgeRange(Some(AgeRange::From35To44)));
        store.apply(FilterAction::Reset);
        assert_eq!(*store.filter(), StatsQuery::default());
    }

    #[test]
    fn test_controlled_store_mutates_caller_state() {
        let mut owned = StatsQuery::default();
        {
            let mut store = ControlledFilter::new(&mut owned);
            store.apply(FilterAction::SetService(Some(Service::TapPay)));
        }
        assert_eq!(owned.service, Some(Service::TapPay));
    }

    #[test]
    fn test_clearing_date_range_clears_both_endpoints() {
        let mut store = UncontrolledFilter::new();
        store.apply(FilterAction::SetDateRange(Some(DateRange::new(
            date("2025-02-01"),
            date("2025-02-28"),
        ))));
        store.apply(FilterAction::SetDateRange(None));
        assert_eq!(store.filter().start_date, None);
        assert_eq!(store.filter().end_date, None);
    }
}
