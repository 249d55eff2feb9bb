//! Plain-text report cards.
//!
//! Each card is a header line followed by `key: ..... value` rows whose
//! values line up on the right edge.

use crate::age::AgeReport;
use crate::compare::{AgeComparison, Elder};
use crate::countdown::Countdown;
use crate::diff::DiffReport;
use crate::format::{format_number, plural};
use crate::historical::HistoricalReport;
use crate::live::ElapsedTotals;
use crate::time_between::TimeSpan;
use crate::week::WeekInfo;

const MIN_ALIGN_WIDTH: usize = 40;
const PROGRESS_BAR_WIDTH: usize = 30;

pub struct Card {
    title: String,
    rows: Vec<(String, String)>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((key.into(), value.into()));
        self
    }

    fn align_width(&self) -> usize {
        self.rows
            .iter()
            .map(|(k, v)| k.chars().count() + v.chars().count() + 4)
            .max()
            .unwrap_or(0)
            .max(MIN_ALIGN_WIDTH)
    }

    pub fn render(&self) -> String {
        let width = self.align_width();
        let mut out = build_header_line(&self.title, width);
        out.push('\n');
        for (key, value) in &self.rows {
            let (key_part, dots, value) = build_stat_row(key, value, width);
            out.push_str(&format!("{key_part}{dots}{value}\n"));
        }
        out
    }
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count());
    format!("{base}{}", "-".repeat(dash_count))
}

pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

pub fn age_card(report: &AgeReport) -> String {
    let next = &report.next_birthday;
    Card::new("Age")
        .row("Years", report.age.years.to_string())
        .row("Months", report.age.months.to_string())
        .row("Days", report.age.days.to_string())
        .row("Total days lived", format_number(report.total_days))
        .row("Total months", format_number(report.total_months.into()))
        .row("Leap years", report.leap_years.to_string())
        .row(
            "Next birthday",
            format!("{} days ({})", next.days_until, next.day_of_week),
        )
        .row(
            "Zodiac sign",
            format!("{} {}", report.zodiac.symbol(), report.zodiac),
        )
        .row(
            "You've lived",
            format!(
                "{} hours, {} minutes",
                format_number(report.total_hours),
                format_number(report.total_minutes)
            ),
        )
        .row(
            format!("Life progress (avg. {} years)", report.lifespan_years),
            format!(
                "{:.2}% {}",
                report.life_progress_percent,
                progress_bar(report.life_progress_bar_percent())
            ),
        )
        .render()
}

pub fn diff_card(report: &DiffReport) -> String {
    if report.same_date {
        return Card::new("Same Date")
            .row("Result", "Both dates are the same.")
            .render();
    }
    Card::new("Date Difference")
        .row("From", report.start.to_string())
        .row("To", report.end.to_string())
        .row("Years", report.difference.years.to_string())
        .row("Months", report.difference.months.to_string())
        .row("Days", report.difference.days.to_string())
        .row("Total days", format_number(report.total_days))
        .row("Total weeks", format_number(report.total_weeks))
        .row("Total months", format_number(report.total_months.into()))
        .render()
}

pub fn time_card(span: &TimeSpan) -> String {
    Card::new("Time Difference")
        .row("Days", span.days.to_string())
        .row("Hours", span.hours.to_string())
        .row("Minutes", span.minutes.to_string())
        .row("Seconds", span.seconds.to_string())
        .row(
            "Total",
            format!(
                "{} hours, {} minutes, {} seconds",
                format_number(span.total_hours),
                format_number(span.total_minutes),
                format_number(span.total_seconds)
            ),
        )
        .render()
}

pub fn week_card(info: &WeekInfo) -> String {
    let year_type = if info.leap_year {
        "Leap Year (366 days)"
    } else {
        "Regular Year (365 days)"
    };
    Card::new("Date Information")
        .row("Week of year", info.week_of_year.to_string())
        .row("Day of year", info.day_of_year.to_string())
        .row("Quarter", format!("Q{}", info.quarter))
        .row("Days remaining", info.days_remaining.to_string())
        .row("Day of week", info.day_of_week.as_str())
        .row("Year type", year_type)
        .render()
}

pub fn compare_card(cmp: &AgeComparison) -> String {
    let verdict = match cmp.elder {
        Elder::First => "Person 1 is older",
        Elder::Second => "Person 2 is older",
        Elder::Neither => "Both share a birth date",
    };
    Card::new("Age Comparison")
        .row("Person 1 age (years)", cmp.first_age.years.to_string())
        .row("Person 2 age (years)", cmp.second_age.years.to_string())
        .row("Age difference", cmp.gap.to_string())
        .row("Total days", format_number(cmp.gap_days))
        .row("Verdict", verdict)
        .render()
}

pub fn historical_card(report: &HistoricalReport) -> String {
    let label = if report.is_past { "ago" } else { "from now" };
    let mut card = Card::new("Historical Date Analysis")
        .row(
            format!("Years {label}"),
            report.difference.years.to_string(),
        )
        .row("Total days", format_number(report.total_days))
        .row("Total weeks", format_number(report.total_weeks))
        .row("Total months", format_number(report.total_months.into()))
        .row("Full difference", report.difference.to_string());

    if report.decades > 0 {
        card = card.row(
            "Decades",
            format!("{} decade{}", report.decades, plural(report.decades.into())),
        );
    }
    if report.centuries > 0 {
        let suffix = if report.centuries > 1 { "ies" } else { "y" };
        card = card.row("Centuries", format!("{} centur{suffix}", report.centuries));
    }

    let status = if report.is_past {
        "This date has passed"
    } else {
        "This date is in the future"
    };
    card.row("Status", status).render()
}

pub fn countdown_card(countdown: &Countdown) -> String {
    match countdown {
        Countdown::Today => Card::new("Today!")
            .row("Result", "The selected date is today!")
            .render(),
        Countdown::Passed { days_ago } => Card::new("Date Has Passed")
            .row("Result", format!("This date was {} days ago.", format_number(*days_ago)))
            .render(),
        Countdown::Upcoming {
            remaining,
            total_days,
            total_weeks,
            day_of_week,
        } => Card::new("Countdown")
            .row("Years", remaining.years.to_string())
            .row("Months", remaining.months.to_string())
            .row("Days", remaining.days.to_string())
            .row("Total days", format_number(*total_days))
            .row("Total weeks", format_number(*total_weeks))
            .row("Day of week", day_of_week.as_str())
            .render(),
    }
}

/// Single line, redrawn on every tick of the live counter.
pub fn live_line(totals: &ElapsedTotals) -> String {
    format!(
        "Alive for {} days | {} hours | {} minutes | {} seconds",
        format_number(totals.days),
        format_number(totals.hours),
        format_number(totals.minutes),
        format_number(totals.seconds)
    )
}
