use aura_core::models::{Activity, ActivityKind, WellnessProfile};
use aura_core::time::time_ago;
use jiff::{Timestamp, ToSpan};

fn at(seconds: i64) -> Timestamp {
    Timestamp::from_second(seconds).unwrap()
}

#[test]
fn profile_rejects_scores_above_100() {
    assert!(WellnessProfile::new(100, at(0)).is_ok());
    assert!(WellnessProfile::new(101, at(0)).is_err());
}

#[test]
fn profile_serializes_with_stable_field_names() {
    let profile = WellnessProfile::new(67, at(1_700_000_000)).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["score"], 67);
    assert_eq!(json["computed_at"], "2023-11-14T22:13:20Z");

    let back: WellnessProfile = serde_json::from_value(json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn activity_kind_is_snake_case() {
    let activity = Activity::new(ActivityKind::Assessment, "Completed Wellness Check-in", at(0));
    let json = serde_json::to_value(&activity).unwrap();
    assert_eq!(json["kind"], "assessment");
    assert_eq!(json["title"], "Completed Wellness Check-in");
    assert_eq!(ActivityKind::Cancel.icon(), "calendar-x");
}

#[test]
fn time_ago_picks_largest_unit() {
    let now = at(1_700_000_000);
    assert_eq!(time_ago(now, now), "Just now");
    assert_eq!(time_ago(now - 59.seconds(), now), "Just now");
    assert_eq!(time_ago(now - 61.seconds(), now), "1m ago");
    assert_eq!(time_ago(now - 2.hours() - 5.minutes(), now), "2h ago");
    assert_eq!(time_ago(now - 50.hours(), now), "2d ago");
}

#[test]
fn time_ago_in_the_future_is_just_now() {
    let now = at(1_700_000_000);
    assert_eq!(time_ago(now + 10.minutes(), now), "Just now");
}
