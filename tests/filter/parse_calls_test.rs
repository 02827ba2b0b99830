#[cfg(test)]
mod tests {
    use semfilter::prelude::*;

    fn dimension(name: &str, path: &[&str]) -> DimensionCallParameterSet {
        DimensionCallParameterSet {
            dimension_reference: DimensionReference::new(name),
            entity_path: entity_path(path.iter().copied()),
        }
    }

    fn time_dimension(
        name: &str,
        path: &[&str],
        granularity: Option<TimeGranularity>,
    ) -> TimeDimensionCallParameterSet {
        TimeDimensionCallParameterSet {
            time_dimension_reference: TimeDimensionReference::new(name),
            entity_path: entity_path(path.iter().copied()),
            time_granularity: granularity,
            date_part: None,
        }
    }

    fn entity(name: &str, path: &[&str]) -> EntityCallParameterSet {
        EntityCallParameterSet {
            entity_reference: EntityReference::new(name),
            entity_path: entity_path(path.iter().copied()),
        }
    }

    #[test]
    fn test_extract_dimension_call_parameter_sets() {
        let sets = parse(
            "{{ Dimension('booking__is_instant') }} \
             AND {{ Dimension('user__country', entity_path=['listing']) }} == 'US'",
        )
        .unwrap();

        assert_eq!(
            sets,
            FilterCallParameterSets {
                dimension_call_parameter_sets: vec![
                    dimension("is_instant", &["booking"]),
                    dimension("country", &["listing", "user"]),
                ],
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_plain_dimension() {
        let sets = parse("{{ Dimension('is_instant') }}").unwrap();
        assert_eq!(sets.dimension_call_parameter_sets, vec![dimension("is_instant", &[])]);
        assert!(sets.time_dimension_call_parameter_sets.is_empty());
        assert!(sets.entity_call_parameter_sets.is_empty());
    }

    #[test]
    fn test_extract_dimension_with_grain() {
        let sets = parse("{{ Dimension('metric_time').grain('WEEK') }} > 2023-09-18").unwrap();
        assert!(sets.dimension_call_parameter_sets.is_empty());
        assert_eq!(
            sets.time_dimension_call_parameter_sets,
            vec![time_dimension("metric_time", &[], Some(TimeGranularity::Week))]
        );
    }

    #[test]
    fn test_extract_time_dimension_call_parameter_sets() {
        let sets = parse(
            "{{ TimeDimension('user__created_at', 'month', entity_path=['listing']) }} = '2020-01-01'",
        )
        .unwrap();
        assert_eq!(
            sets.time_dimension_call_parameter_sets,
            vec![time_dimension("created_at", &["listing", "user"], Some(TimeGranularity::Month))]
        );
    }

    #[test]
    fn test_extract_metric_time_dimension() {
        let sets = parse("{{ TimeDimension('metric_time', 'month') }} = '2020-01-01'").unwrap();
        assert_eq!(
            sets.time_dimension_call_parameter_sets,
            vec![time_dimension("metric_time", &[], Some(TimeGranularity::Month))]
        );
    }

    #[test]
    fn test_time_dimension_without_granularity() {
        let sets = parse("{{ TimeDimension('booking__created_at') }} > 2023-09-18").unwrap();
        assert_eq!(
            sets.time_dimension_call_parameter_sets,
            vec![time_dimension("created_at", &["booking"], None)]
        );
    }

    #[test]
    fn test_extract_entity_call_parameter_sets() {
        let sets = parse(
            "{{ Entity('listing') }} AND {{ Entity('user', entity_path=['listing']) }} == 'TEST_USER_ID'",
        )
        .unwrap();
        assert_eq!(
            sets.entity_call_parameter_sets,
            vec![entity("listing", &[]), entity("user", &["listing"])]
        );
        assert!(sets.dimension_call_parameter_sets.is_empty());
    }

    #[test]
    fn test_time_dimension_date_part_positional() {
        let sets = parse("{{ TimeDimension('metric_time', 'YEAR', [], None, 'YEAR') }} > '2023-01-01'").unwrap();
        let time = &sets.time_dimension_call_parameter_sets[0];
        assert_eq!(time.date_part, Some(DatePart::Year));
        assert_eq!(time.time_granularity, Some(TimeGranularity::Year));
    }

    #[test]
    fn test_time_dimension_date_part_keywords() {
        let sets = parse(
            "{{ TimeDimension(time_dimension_name='metric_time', time_granularity_name='YEAR', date_part_name='YEAR') }}> '2023-01-01'",
        )
        .unwrap();
        assert_eq!(sets.time_dimension_call_parameter_sets.len(), 1);
        assert_eq!(sets.time_dimension_call_parameter_sets[0].date_part, Some(DatePart::Year));
    }

    #[test]
    fn test_dimension_grain_and_date_part() {
        let sets = parse("{{ Dimension('metric_time').grain('DAY').date_part('YEAR') }} > '2023-01-01'").unwrap();
        let time = &sets.time_dimension_call_parameter_sets[0];
        assert_eq!(time.time_granularity, Some(TimeGranularity::Day));
        assert_eq!(time.date_part, Some(DatePart::Year));
    }

    #[test]
    fn test_metric_time_in_dimension_call_error() {
        let err = parse("{{ Dimension('metric_time') }} > '2020-01-01'").unwrap_err();
        assert!(err
            .to_string()
            .contains("so it should be referenced using TimeDimension"));
    }

    #[test]
    fn test_invalid_entity_name_error() {
        let err = parse("{{ Entity('order_id__is_food_order' )}}").unwrap_err();
        assert!(err.to_string().contains("Entity name is in an incorrect format"));
    }

    #[test]
    fn test_too_many_hops() {
        let err = parse("{{ Dimension('a__b__c') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::NameFormat { ref name, .. } if name == "a__b__c"));
        assert!(err.to_string().contains("'a__b__c'"));
    }

    #[test]
    fn test_invalid_granularity() {
        let err = parse("{{ TimeDimension('metric_time', 'fortnight') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::Granularity { ref literal } if literal == "fortnight"));
    }

    #[test]
    fn test_invalid_granularity_in_grain_chain() {
        let err = parse("{{ Dimension('metric_time').grain('fortnight') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::Granularity { ref literal } if literal == "fortnight"));
    }

    #[test]
    fn test_metric_time_dimension_rejected_with_entity_path() {
        let err = parse("{{ Dimension('metric_time', entity_path=['listing']) }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::ReservedNameUsage { ref name } if name == "metric_time"));
    }

    #[test]
    fn test_invalid_date_part() {
        let err = parse("{{ TimeDimension('metric_time', date_part_name='hour') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::DatePart { ref literal } if literal == "hour"));
    }

    #[test]
    fn test_empty_entity_name() {
        let err = parse("{{ Entity('') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::EntityNameFormat { ref name, .. } if name.is_empty()));
    }

    #[test]
    fn test_deeply_nested_arguments_fail_cleanly() {
        let depth = 20_000;
        let template = format!("{{{{ Entity('a', {}{}) }}}}", "[".repeat(depth), "]".repeat(depth));
        let err = parse(&template).unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::Syntax { .. }));
        assert!(err.to_string().contains("nested more than"));
    }

    #[test]
    fn test_whitespace_control_blocks() {
        let sets = parse("{{- Dimension('user__country') -}} = 'US'").unwrap();
        assert_eq!(sets.dimension_call_parameter_sets, vec![dimension("country", &["user"])]);
    }

    #[test]
    fn test_single_braces_are_literal_sql() {
        let sets = parse(" {Dimension('customer__has_delivery_address')} ").unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse("{{ Dimension('a') ").unwrap_err();
        assert!(err.span().is_some());
    }

    #[test]
    fn test_grain_on_time_dimension_is_syntax_error() {
        let err = parse("{{ TimeDimension('metric_time').grain('day') }}").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::Syntax { .. }));
    }

    #[test]
    fn test_unknown_macro() {
        let err = parse("{{ Metric('bookings') }} > 10").unwrap_err();
        assert!(matches!(err, ParseWhereFilterError::Syntax { .. }));
        assert!(err.to_string().contains("Metric"));
    }
}
