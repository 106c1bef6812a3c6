//! Date-Range Resolver
//!
//! The metrics history covers a bounded window of months: the first year may
//! start after January and the last year may end before December. This module
//! answers which months are selectable for a year and keeps the month
//! selection valid when the year changes.

/// Inclusive bounds of the available history.
///
/// Passed into state construction as a value so the window is testable with
/// arbitrary bounds rather than baked-in globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    /// First year with any data.
    pub min_year: i32,
    /// Last year with any data.
    pub max_year: i32,
    /// First available month within `min_year`.
    pub min_month: u32,
    /// Last available month within `max_year`.
    pub max_month: u32,
}

impl Default for DateWindow {
    /// The window the production API currently serves: Jan 2021 - Nov 2024.
    fn default() -> Self {
        Self {
            min_year: 2021,
            max_year: 2024,
            min_month: 1,
            max_month: 11,
        }
    }
}

impl DateWindow {
    pub fn new(min_year: i32, max_year: i32, min_month: u32, max_month: u32) -> Self {
        Self {
            min_year,
            max_year,
            min_month,
            max_month,
        }
    }

    /// All selectable years, ascending.
    pub fn years(&self) -> Vec<i32> {
        (self.min_year..=self.max_year).collect()
    }

    /// The months selectable for `year`: a partial range at either boundary
    /// year, the full twelve in between. Always non-empty and strictly
    /// ascending.
    pub fn available_months(&self, year: i32) -> Vec<u32> {
        let start = if year == self.min_year { self.min_month } else { 1 };
        let end = if year == self.max_year { self.max_month } else { 12 };
        (start..=end).collect()
    }

    /// Reconcile a month selection after a year change. The month is checked
    /// against `available_months` rather than only boundary transitions, so
    /// an out-of-range month is always pulled back to the nearest valid one.
    pub fn clamp_month(&self, year: i32, month: u32) -> u32 {
        let months = self.available_months(year);
        let first = *months.first().unwrap_or(&1);
        let last = *months.last().unwrap_or(&12);

        if month < first {
            first
        } else if month > last {
            last
        } else {
            month
        }
    }

    /// Latest (year, month) in the window, the default selection at mount.
    pub fn latest(&self) -> (i32, u32) {
        (self.max_year, self.max_month)
    }

    /// Human label for the whole window, e.g. "Jan 2021 - Nov 2024".
    pub fn label(&self) -> String {
        format!(
            "{} {} - {} {}",
            short_month_name(self.min_month),
            self.min_year,
            short_month_name(self.max_month),
            self.max_year
        )
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Abbreviated month name for compact labels.
pub fn short_month_name(month: u32) -> &'static str {
    &month_name(month)[..3]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> DateWindow {
        DateWindow::new(2021, 2024, 1, 11)
    }

    #[test]
    fn test_available_months_min_year() {
        let w = DateWindow::new(2021, 2024, 3, 11);
        assert_eq!(w.available_months(2021), (3..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_months_max_year() {
        assert_eq!(window().available_months(2024), (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_months_interior_year() {
        for year in [2022, 2023] {
            assert_eq!(window().available_months(year), (1..=12).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_available_months_strictly_ascending() {
        for year in window().years() {
            let months = window().available_months(year);
            assert!(!months.is_empty());
            assert!(months.windows(2).all(|pair| pair[1] == pair[0] + 1));
        }
    }

    #[test]
    fn test_clamp_month_interior_years_never_alter() {
        for month in 1..=12 {
            assert_eq!(window().clamp_month(2022, month), month);
            assert_eq!(window().clamp_month(2023, month), month);
        }
    }

    #[test]
    fn test_clamp_month_at_max_year() {
        // max_month is 11: November survives, December is pulled back.
        assert_eq!(window().clamp_month(2024, 11), 11);
        assert_eq!(window().clamp_month(2024, 12), 11);
    }

    #[test]
    fn test_clamp_month_at_min_year() {
        let w = DateWindow::new(2021, 2024, 4, 11);
        assert_eq!(w.clamp_month(2021, 2), 4);
        assert_eq!(w.clamp_month(2021, 4), 4);
        assert_eq!(w.clamp_month(2021, 9), 9);
    }

    #[test]
    fn test_latest_is_window_end() {
        assert_eq!(window().latest(), (2024, 11));
    }

    #[test]
    fn test_years_ascending_inclusive() {
        assert_eq!(window().years(), vec![2021, 2022, 2023, 2024]);
    }

    #[test]
    fn test_window_label() {
        assert_eq!(window().label(), "Jan 2021 - Nov 2024");
    }

    #[test]
    fn test_single_year_window() {
        // Both partial boundaries land on the same year.
        let w = DateWindow::new(2024, 2024, 3, 9);
        assert_eq!(w.available_months(2024), (3..=9).collect::<Vec<_>>());
        assert_eq!(w.clamp_month(2024, 1), 3);
        assert_eq!(w.clamp_month(2024, 12), 9);
    }
}
