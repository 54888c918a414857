//! Property tests for offset parsing and schedule computation

use chrono::NaiveDate;
use proptest::prelude::*;

use cadence_cli::domain::{
    compute_schedule, MilestoneSpec, Offset, ScheduleAnchor, TaskSpec, TimeUnit,
};

fn offset_strategy() -> impl Strategy<Value = Offset> {
    prop_oneof![
        Just(Offset::SameDay),
        Just(Offset::NextDay),
        (
            0u32..100_000,
            prop::sample::select(vec![
                TimeUnit::Day,
                TimeUnit::Week,
                TimeUnit::Month,
                TimeUnit::Year
            ])
        )
            .prop_map(|(amount, unit)| Offset::Count { amount, unit }),
    ]
}

fn anchor_strategy() -> impl Strategy<Value = ScheduleAnchor> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| ScheduleAnchor::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
}

proptest! {
    #[test]
    fn counted_units_multiply_out(
        amount in 0u32..10_000,
        (word, factor) in prop::sample::select(vec![
            ("day", 1i64),
            ("days", 1),
            ("week", 7),
            ("weeks", 7),
            ("month", 30),
            ("months", 30),
            ("year", 365),
            ("years", 365),
        ]),
    ) {
        let offset: Offset = format!("{} {}", amount, word).parse().unwrap();
        prop_assert_eq!(offset.total_days(), i64::from(amount) * factor);
    }

    #[test]
    fn bare_integers_count_as_days(amount in 0u32..10_000) {
        let offset: Offset = amount.to_string().parse().unwrap();
        prop_assert_eq!(offset.total_days(), i64::from(amount));
    }

    #[test]
    fn trailing_later_never_changes_the_result(
        amount in 0u32..10_000,
        word in prop::sample::select(vec![
            "day", "days", "week", "weeks", "month", "months", "year", "years",
        ]),
    ) {
        let plain: Offset = format!("{} {}", amount, word).parse().unwrap();
        let with_later: Offset = format!("{} {} later", amount, word).parse().unwrap();
        prop_assert_eq!(plain, with_later);
    }

    #[test]
    fn parser_never_panics(input in ".*") {
        // Any input either parses or returns a typed error; accepted
        // offsets are always non-negative
        if let Ok(offset) = input.parse::<Offset>() {
            prop_assert!(offset.total_days() >= 0);
        }
    }

    #[test]
    fn canonical_rendering_reparses_equal(offset in offset_strategy()) {
        let reparsed: Offset = offset.to_string().parse().unwrap();
        prop_assert_eq!(offset, reparsed);
    }

    #[test]
    fn milestones_always_chain(
        anchor in anchor_strategy(),
        due_days in prop::collection::vec(0u32..365, 1..8),
    ) {
        let milestones: Vec<MilestoneSpec> = due_days
            .iter()
            .enumerate()
            .map(|(i, days)| {
                MilestoneSpec::new(
                    format!("M{}", i),
                    i as u32,
                    "same day",
                    format!("{} days", days),
                )
            })
            .collect();

        let schedule = compute_schedule(anchor, &milestones);

        prop_assert_eq!(schedule[0].start, anchor.date());
        for pair in schedule.windows(2) {
            prop_assert_eq!(Some(pair[1].start), pair[0].due);
        }
        for (computed, days) in schedule.iter().zip(&due_days) {
            let expected = computed.start.checked_add_days(chrono::Days::new(u64::from(*days)));
            prop_assert_eq!(computed.due, expected);
            prop_assert_eq!(computed.duration_days, i64::from(*days));
        }
    }

    #[test]
    fn tasks_depend_only_on_their_own_offset(
        anchor in anchor_strategy(),
        task_days in prop::collection::vec(0u32..365, 1..8),
    ) {
        let mut spec = MilestoneSpec::new("M", 1, "same day", "1 year");
        for (i, days) in task_days.iter().enumerate() {
            spec.tasks.push(TaskSpec::new(
                format!("T{}", i),
                i as u32,
                format!("{} days", days),
            ));
        }

        let schedule = compute_schedule(anchor, &[spec]);
        let milestone = &schedule[0];

        for (computed, days) in milestone.tasks.iter().zip(&task_days) {
            let expected = milestone.start.checked_add_days(chrono::Days::new(u64::from(*days)));
            prop_assert_eq!(computed.start, milestone.start);
            prop_assert_eq!(computed.due, expected);
        }
    }
}
