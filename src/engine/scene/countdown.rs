use bevy::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::engine::cloud::ParticleCloud;
use crate::engine::scene::composer::CountdownCloud;

/// Instant the countdown runs towards, local wall-clock.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CountdownTarget(pub NaiveDateTime);

/// Whole days, hours, minutes and seconds left until the target. All four
/// clamp to zero once the target has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub fn time_remaining(target: NaiveDateTime, now: NaiveDateTime) -> TimeRemaining {
    let left = (target - now).max(TimeDelta::zero());
    TimeRemaining {
        days: left.num_days(),
        hours: left.num_hours() % 24,
        minutes: left.num_minutes() % 60,
        seconds: left.num_seconds() % 60,
    }
}

/// Compact digital readout: days fold into the hour count, two digits per
/// field, three spaces between fields, no separator glyphs.
pub fn countdown_text(remaining: TimeRemaining) -> String {
    format!(
        "{:02}   {:02}   {:02}",
        remaining.days * 24 + remaining.hours,
        remaining.minutes,
        remaining.seconds
    )
}

/// Parse a manifest timestamp of the form `YYYY-MM-DDThh:mm:ss`.
pub fn parse_target(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Fallback target when the manifest value will not parse.
pub fn default_target() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Refresh the countdown cloud's desired text from the wall clock. The
/// rebuild system notices the change through the generation key, so writes
/// only happen when the readout actually ticks over.
pub fn update_countdown_text(
    target: Res<CountdownTarget>,
    mut clouds: Query<&mut ParticleCloud, With<CountdownCloud>>,
) {
    let now = chrono::Local::now().naive_local();
    let text = countdown_text(time_remaining(target.0, now));
    for mut cloud in &mut clouds {
        if cloud.text != text {
            cloud.text.clone_from(&text);
        }
    }
}
