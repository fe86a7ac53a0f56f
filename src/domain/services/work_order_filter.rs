//! Work-order list filtering and ordering
//!
//! Five independent criteria, combined with AND. Survivors are ordered by
//! creation time, most recent first; equal timestamps keep collection order.

use chrono::NaiveDate;

use crate::domain::entities::WorkOrder;
use crate::domain::value_objects::{CalendarZone, Status};

/// Filter criteria of the work-order list. `None` means inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the client name
    pub client_name: Option<String>,
    /// Case-insensitive substring of the paint color
    pub paint_color: Option<String>,
    /// Exact status; `None` shows all
    pub status: Option<Status>,
    /// Inclusive lower bound on the creation date
    pub created_from: Option<NaiveDate>,
    /// Inclusive upper bound on the creation date (whole day)
    pub created_to: Option<NaiveDate>,
    /// Zone the date bounds are read in
    pub zone: CalendarZone,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_name(mut self, needle: impl Into<String>) -> Self {
        self.client_name = Some(needle.into());
        self
    }

    pub fn paint_color(mut self, needle: impl Into<String>) -> Self {
        self.paint_color = Some(needle.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn created_from(mut self, date: NaiveDate) -> Self {
        self.created_from = Some(date);
        self
    }

    pub fn created_to(mut self, date: NaiveDate) -> Self {
        self.created_to = Some(date);
        self
    }

    pub fn in_zone(mut self, zone: CalendarZone) -> Self {
        self.zone = zone;
        self
    }

    /// Reset every criterion; the zone stays
    pub fn clear(&mut self) {
        *self = Self::default().in_zone(self.zone);
    }

    /// Returns true if no criterion is active
    pub fn is_empty(&self) -> bool {
        active_text(&self.client_name).is_none()
            && active_text(&self.paint_color).is_none()
            && self.status.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Returns true if `order` satisfies every active criterion
    pub fn matches(&self, order: &WorkOrder) -> bool {
        if let Some(needle) = active_text(&self.client_name) {
            if !contains_ignore_case(&order.client_name, needle) {
                return false;
            }
        }

        if let Some(needle) = active_text(&self.paint_color) {
            match &order.paint_color {
                Some(color) if contains_ignore_case(color, needle) => {}
                _ => return false,
            }
        }

        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        let created = self.zone.day(order.created_at);
        if let Some(from) = self.created_from {
            if created < from {
                return false;
            }
        }
        if let Some(to) = self.created_to {
            if created > to {
                return false;
            }
        }

        true
    }
}

/// Empty text criteria are inactive
fn active_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter `orders` by `criteria` and sort newest first
///
/// The input is left untouched; the result borrows its elements.
pub fn filter_and_sort<'a>(orders: &'a [WorkOrder], criteria: &FilterCriteria) -> Vec<&'a WorkOrder> {
    let mut filtered: Vec<&WorkOrder> = orders.iter().filter(|o| criteria.matches(o)).collect();
    // `sort_by` is stable: ties keep collection order
    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    filtered
}
