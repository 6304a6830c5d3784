use serde::{Deserialize, Serialize};

/// Day-off flag and display label attached to a forecast day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAnnotation {
    pub is_day_off: bool,
    /// Weekday name, official holiday name, override name, or empty.
    pub label: String,
}

impl CalendarAnnotation {
    #[must_use]
    pub fn day_off(label: impl Into<String>) -> Self {
        Self {
            is_day_off: true,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn working_day() -> Self {
        Self::default()
    }

    /// The `holidays` model feature: `1` for a day off, `0` otherwise.
    #[must_use]
    pub const fn holidays_flag(&self) -> u8 {
        if self.is_day_off { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_follows_day_off() {
        assert_eq!(CalendarAnnotation::day_off("Sunday").holidays_flag(), 1);
        assert_eq!(CalendarAnnotation::working_day().holidays_flag(), 0);
        assert!(CalendarAnnotation::working_day().label.is_empty());
    }
}
