#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::DashboardError;
    use crate::types::{FilterParams, SubscriptionRecord, TypeSelection, YearMonth};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn month(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    /// Basic and Premium readings on the first of every month of 2020.
    fn setup_test_dataset() -> Dataset {
        let mut records = Vec::new();
        for m in 1..=12 {
            records.push(SubscriptionRecord {
                date: date(2020, m),
                subscription_type: "Basic".to_string(),
                active_subscriptions: 100 + m as u64,
            });
            records.push(SubscriptionRecord {
                date: date(2020, m),
                subscription_type: "Premium".to_string(),
                active_subscriptions: 50 + m as u64,
            });
        }
        Dataset::from_records(records)
    }

    fn params(selection: &str, start: YearMonth, end: YearMonth) -> FilterParams {
        FilterParams {
            subscription_type: TypeSelection::from_label(selection),
            start,
            end,
        }
    }

    #[test]
    fn test_first_half_of_year_all_types() {
        let dataset = setup_test_dataset();
        let view = filter_records(&dataset, &params("All", month(2020, 1), month(2020, 6)));

        assert_eq!(view.record_count(), 12);
        assert_eq!(view.series_count(), 2);
        for group in &view.groups {
            let dates: Vec<NaiveDate> = group.points.iter().map(|(d, _)| *d).collect();
            assert_eq!(dates, (1..=6).map(|m| date(2020, m)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let dataset = setup_test_dataset();
        let view = filter_records(&dataset, &params("Basic", month(2021, 1), month(2020, 12)));

        assert!(view.is_empty());
        assert_eq!(view.series_count(), 0);
    }

    #[test]
    fn test_inverted_range_is_empty_for_every_selection() {
        let dataset = setup_test_dataset();
        for selection in ["All", "Basic", "Premium", "Missing"] {
            let view = filter_records(&dataset, &params(selection, month(2020, 9), month(2020, 3)));
            assert_eq!(view.record_count(), 0, "selection {selection}");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let dataset = setup_test_dataset();
        let view = filter_records(&dataset, &params("Premium", month(2020, 4), month(2020, 4)));

        assert_eq!(view.series_count(), 1);
        assert_eq!(view.groups[0].subscription_type, "Premium");
        assert_eq!(view.groups[0].points, vec![(date(2020, 4), 54)]);
    }

    #[test]
    fn test_type_filter_and_bounds_hold() {
        let dataset = setup_test_dataset();
        let p = params("Basic", month(2020, 3), month(2020, 10));
        let view = filter_records(&dataset, &p);

        assert!(view.record_count() <= dataset.len());
        for group in &view.groups {
            assert_eq!(group.subscription_type, "Basic");
            for (d, _) in &group.points {
                assert!(p.start_date() <= *d && *d <= p.end_date());
            }
        }
        assert_eq!(view.record_count(), 8);
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let records = vec![
            SubscriptionRecord {
                date: date(2021, 1),
                subscription_type: "Premium".to_string(),
                active_subscriptions: 3,
            },
            SubscriptionRecord {
                date: date(2021, 1),
                subscription_type: "Basic".to_string(),
                active_subscriptions: 5,
            },
            SubscriptionRecord {
                date: date(2021, 2),
                subscription_type: "Premium".to_string(),
                active_subscriptions: 4,
            },
        ];
        let dataset = Dataset::from_records(records);
        let view = filter_records(&dataset, &params("All", month(2021, 1), month(2021, 2)));

        let order: Vec<&str> = view
            .groups
            .iter()
            .map(|g| g.subscription_type.as_str())
            .collect();
        assert_eq!(order, vec!["Premium", "Basic"]);
        assert_eq!(view.groups[0].points.len(), 2);
    }

    #[test]
    fn test_out_of_range_selection_is_empty() {
        let dataset = setup_test_dataset();
        let view = filter_records(&dataset, &params("All", month(2023, 1), month(2024, 11)));
        assert!(view.is_empty());
        assert_eq!(view.max_count(), None);
    }

    #[test]
    fn test_summaries() {
        let dataset = setup_test_dataset();
        let summaries = compute_summaries(&dataset);

        // December: Basic 112 + Premium 62
        assert_eq!(summaries.current_subscriptions, 174);
        assert_eq!(summaries.most_popular_type.as_deref(), Some("Basic"));
        assert_eq!(summaries.months_tracked, 12);
        assert_eq!(summaries.first_date, Some(date(2020, 1)));
        assert_eq!(summaries.last_date, Some(date(2020, 12)));
    }

    #[test]
    fn test_summaries_ignore_filters() {
        let dataset = setup_test_dataset();
        let before = compute_summaries(&dataset);
        let _ = filter_records(&dataset, &params("Premium", month(2020, 2), month(2020, 3)));
        let _ = filter_records(&dataset, &params("All", month(2021, 1), month(2020, 1)));
        assert_eq!(compute_summaries(&dataset), before);
    }

    #[test]
    fn test_summaries_saturate_on_huge_counts() {
        let huge = u64::MAX / 2 + 1;
        let records = vec![
            SubscriptionRecord {
                date: date(2024, 1),
                subscription_type: "Basic".to_string(),
                active_subscriptions: huge,
            },
            SubscriptionRecord {
                date: date(2024, 1),
                subscription_type: "Basic".to_string(),
                active_subscriptions: huge,
            },
            SubscriptionRecord {
                date: date(2024, 1),
                subscription_type: "Premium".to_string(),
                active_subscriptions: 7,
            },
        ];
        let summaries = compute_summaries(&Dataset::from_records(records));

        assert_eq!(summaries.current_subscriptions, u64::MAX);
        assert_eq!(summaries.most_popular_type.as_deref(), Some("Basic"));
        assert_eq!(summaries.months_tracked, 1);
    }

    #[test]
    fn test_summaries_empty_dataset() {
        let summaries = compute_summaries(&Dataset::default());
        assert_eq!(summaries.current_subscriptions, 0);
        assert_eq!(summaries.most_popular_type, None);
        assert_eq!(summaries.months_tracked, 0);
    }

    #[test]
    fn test_load_csv() {
        let csv = "\
date,subscription_type,active_subscriptions
2020-01-01,Basic,1200
2020-01-01,Premium,300
2020-02-01,Basic,1250
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.subscription_types(), vec!["Basic", "Premium"]);
        assert_eq!(dataset.years(), vec![2020]);
        assert_eq!(dataset.date_bounds(), Some((date(2020, 1), date(2020, 2))));
        assert_eq!(dataset.records()[1].active_subscriptions, 300);
    }

    #[test]
    fn test_load_csv_any_column_order() {
        let csv = "active_subscriptions,date,subscription_type\n7,2022-03-01 00:00:00,Family\n";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].date, date(2022, 3));
        assert_eq!(dataset.records()[0].subscription_type, "Family");
    }

    #[test]
    fn test_missing_column() {
        let csv = "date,active_subscriptions\n2020-01-01,5\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn(ref c) if c == "subscription_type"));
    }

    #[test]
    fn test_invalid_date() {
        let csv = "date,subscription_type,active_subscriptions\n2020-01-01,Basic,1\nsoon,Basic,2\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let csv = "date,subscription_type,active_subscriptions\n2020-01-01,Basic,-4\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(DashboardError::Csv(_))
        ));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(dataset::parse_date("2020/05/01"), Some(date(2020, 5)));
        assert_eq!(dataset::parse_date("2020-05-01T12:30:00"), Some(date(2020, 5)));
        assert_eq!(dataset::parse_date("05-01-2020"), None);
    }
}
