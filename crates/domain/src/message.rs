//! Reminder messages: bilingual, priority-tiered notification text.
//!
//! The tier depends only on the signed number of days until the due date:
//!
//! | days until due | priority |
//! |---|---|
//! | `< 0` (overdue) | urgent |
//! | `0` | urgent |
//! | `1..=7` | high |
//! | `8..=30` | medium |
//! | `> 30` | low |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::service::ServiceKind;

/// Coarse urgency used to drive UI emphasis. Orders most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tier for a signed day offset (negative means overdue).
    #[must_use]
    pub fn for_days(days_until_due: i64) -> Self {
        match days_until_due {
            ..=0 => Self::Urgent,
            1..=7 => Self::High,
            8..=30 => Self::Medium,
            _ => Self::Low,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language a caller renders reminders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// What a reminder is about. Anything not in the label table is carried
/// verbatim in [`Other`](Self::Other) and used as its own label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReminderKind {
    Vaccination,
    Deworming,
    Checkup,
    Other(String),
}

/// A label in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub en: &'a str,
    pub vi: &'a str,
}

impl ReminderKind {
    /// Resolve a kind name; unknown names become [`Other`](Self::Other).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "vaccination" => Self::Vaccination,
            "deworming" => Self::Deworming,
            "checkup" => Self::Checkup,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vaccination => "vaccination",
            Self::Deworming => "deworming",
            Self::Checkup => "checkup",
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub fn label(&self) -> Label<'_> {
        match self {
            Self::Vaccination => Label {
                en: "vaccination",
                vi: "tiêm phòng",
            },
            Self::Deworming => Label {
                en: "deworming",
                vi: "tẩy giun",
            },
            Self::Checkup => Label {
                en: "checkup",
                vi: "khám tổng quát",
            },
            Self::Other(name) => Label { en: name, vi: name },
        }
    }
}

impl From<ServiceKind> for ReminderKind {
    fn from(kind: ServiceKind) -> Self {
        match kind {
            ServiceKind::Vaccination => Self::Vaccination,
            ServiceKind::Deworming => Self::Deworming,
        }
    }
}

impl From<&str> for ReminderKind {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl From<String> for ReminderKind {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ReminderKind> for String {
    fn from(kind: ReminderKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formatted reminder in English and Vietnamese.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderMessage {
    pub priority: Priority,
    pub en: String,
    pub vi: String,
}

impl ReminderMessage {
    /// Text for the requested locale.
    #[must_use]
    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Vi => &self.vi,
        }
    }
}

/// Format the reminder for `pet_name`'s `kind`, due in `days_until_due`
/// days (negative when overdue).
#[must_use]
pub fn reminder_message(
    kind: &ReminderKind,
    days_until_due: i64,
    pet_name: &str,
) -> ReminderMessage {
    let Label { en: label_en, vi: label_vi } = kind.label();
    let pet = pet_name;
    let days = days_until_due;

    let (en, vi) = match days {
        ..0 => {
            let overdue = days.unsigned_abs();
            (
                format!("{pet}'s {label_en} is overdue by {overdue} days!"),
                format!("{label_vi} của {pet} đã quá hạn {overdue} ngày!"),
            )
        }
        0 => (
            format!("{pet}'s {label_en} is due today!"),
            format!("Hôm nay là ngày {label_vi} của {pet}!"),
        ),
        1..=7 => (
            format!("{pet}'s {label_en} is due in {days} days"),
            format!("Còn {days} ngày nữa là đến ngày {label_vi} của {pet}"),
        ),
        8..=30 => (
            format!("{pet}'s {label_en} is coming up in {days} days"),
            format!("{label_vi} của {pet} sẽ đến trong {days} ngày nữa"),
        ),
        _ => (
            format!("{pet}'s next {label_en} is scheduled in {days} days"),
            format!("Lịch {label_vi} tiếp theo của {pet} là trong {days} ngày nữa"),
        ),
    };

    ReminderMessage {
        priority: Priority::for_days(days),
        en,
        vi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vaccination(days: i64) -> ReminderMessage {
        reminder_message(&ReminderKind::Vaccination, days, "Rex")
    }

    #[test]
    fn should_mark_overdue_as_urgent() {
        let msg = vaccination(-1);
        assert_eq!(msg.priority, Priority::Urgent);
        assert_eq!(msg.en, "Rex's vaccination is overdue by 1 days!");
        assert_eq!(msg.vi, "tiêm phòng của Rex đã quá hạn 1 ngày!");
    }

    #[test]
    fn should_mark_due_today_as_urgent() {
        let msg = vaccination(0);
        assert_eq!(msg.priority, Priority::Urgent);
        assert_eq!(msg.en, "Rex's vaccination is due today!");
        assert_eq!(msg.vi, "Hôm nay là ngày tiêm phòng của Rex!");
    }

    #[test]
    fn should_mark_first_week_as_high() {
        assert_eq!(vaccination(1).priority, Priority::High);
        let msg = vaccination(7);
        assert_eq!(msg.priority, Priority::High);
        assert_eq!(msg.en, "Rex's vaccination is due in 7 days");
        assert_eq!(msg.vi, "Còn 7 ngày nữa là đến ngày tiêm phòng của Rex");
    }

    #[test]
    fn should_mark_up_to_thirty_days_as_medium() {
        assert_eq!(vaccination(8).priority, Priority::Medium);
        let msg = vaccination(30);
        assert_eq!(msg.priority, Priority::Medium);
        assert_eq!(msg.en, "Rex's vaccination is coming up in 30 days");
        assert_eq!(msg.vi, "tiêm phòng của Rex sẽ đến trong 30 ngày nữa");
    }

    #[test]
    fn should_mark_beyond_thirty_days_as_low() {
        let msg = vaccination(31);
        assert_eq!(msg.priority, Priority::Low);
        assert_eq!(msg.en, "Rex's next vaccination is scheduled in 31 days");
        assert_eq!(
            msg.vi,
            "Lịch tiêm phòng tiếp theo của Rex là trong 31 ngày nữa"
        );
    }

    #[test]
    fn should_resolve_checkup_label() {
        let msg = reminder_message(&"checkup".into(), 5, "Milo");
        assert_eq!(msg.en, "Milo's checkup is due in 5 days");
        assert_eq!(msg.vi, "Còn 5 ngày nữa là đến ngày khám tổng quát của Milo");
    }

    #[test]
    fn should_fall_back_to_raw_kind_for_unknown_labels() {
        let msg = reminder_message(&"grooming".into(), 5, "Milo");
        assert_eq!(msg.en, "Milo's grooming is due in 5 days");
        assert_eq!(msg.vi, "Còn 5 ngày nữa là đến ngày grooming của Milo");
    }

    #[test]
    fn should_label_deworming_in_both_languages() {
        let msg = reminder_message(&ServiceKind::Deworming.into(), -3, "Luna");
        assert_eq!(msg.en, "Luna's deworming is overdue by 3 days!");
        assert_eq!(msg.vi, "tẩy giun của Luna đã quá hạn 3 ngày!");
    }

    #[test]
    fn should_produce_equal_output_for_equal_input() {
        let kind = ReminderKind::Deworming;
        assert_eq!(
            reminder_message(&kind, 12, "Bo"),
            reminder_message(&kind, 12, "Bo")
        );
    }

    #[test]
    fn should_not_overflow_on_extreme_offsets() {
        let msg = vaccination(i64::MIN);
        assert_eq!(msg.priority, Priority::Urgent);
        assert!(msg.en.contains("9223372036854775808"));
    }

    #[test]
    fn should_order_priorities_most_urgent_first() {
        let mut tiers = vec![Priority::Low, Priority::Urgent, Priority::Medium, Priority::High];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![Priority::Urgent, Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn should_select_text_by_locale() {
        let msg = vaccination(0);
        assert_eq!(msg.text(Locale::En), msg.en);
        assert_eq!(msg.text(Locale::Vi), msg.vi);
        assert_eq!("VI".parse::<Locale>(), Ok(Locale::Vi));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn should_serialize_with_exactly_three_fields() {
        let value = serde_json::to_value(vaccination(8)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["priority"], "medium");
    }
}
