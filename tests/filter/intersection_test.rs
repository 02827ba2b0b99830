#[cfg(test)]
mod tests {
    use semfilter::prelude::*;

    const TIME_FILTER: &str = "{{ TimeDimension('metric_time', 'month') }} = '2020-01-01'";
    const ENTITY_FILTER: &str =
        "{{ Entity('listing') }} AND {{ Entity('user', entity_path=['listing']) }} == 'TEST_USER_ID'";

    #[test]
    fn test_intersection_extract_call_parameter_sets() {
        let parsed = parse_intersection(&[TIME_FILTER, ENTITY_FILTER]).unwrap();

        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![TIME_FILTER, ENTITY_FILTER]);

        let time = &parsed[TIME_FILTER].time_dimension_call_parameter_sets;
        assert_eq!(time.len(), 1);
        assert_eq!(time[0].time_dimension_reference, TimeDimensionReference::new("metric_time"));
        assert_eq!(time[0].time_granularity, Some(TimeGranularity::Month));

        let entities = &parsed[ENTITY_FILTER].entity_call_parameter_sets;
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[1].entity_path, entity_path(["listing"]));
    }

    #[test]
    fn test_intersection_error_collection() {
        let bad_name = "{{ TimeDimension('order_id__order_time__month', 'week') }} > '2020-01-01'";
        let valid = " {Dimension('customer__has_delivery_address')} ";
        let bad_entity = "{{ Entity('order_id__is_food_order') }}";

        let err = parse_intersection(&[bad_name, valid, bad_entity]).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Name is in an incorrect format: 'order_id__order_time__month'"));
        assert!(message.contains("Entity name is in an incorrect format: 'order_id__is_food_order'"));
        assert!(!message.contains("has_delivery_address"));
        assert!(message.starts_with("Encountered errors in 2 of 3 filter expressions"));

        let failed: Vec<&str> = err.failures().iter().map(|f| f.expression.as_str()).collect();
        assert_eq!(failed, vec![bad_name, bad_entity]);
    }

    #[test]
    fn test_no_partial_results() {
        let result = parse_intersection(&[TIME_FILTER, "{{ Dimension('metric_time') }}"]);
        assert!(result.unwrap_err().is_aggregate());
    }

    #[test]
    fn test_where_filter_intersection_value() {
        let intersection = WhereFilterIntersection::new(vec![
            WhereFilter::new(TIME_FILTER),
            WhereFilter::new(ENTITY_FILTER),
        ]);
        let parsed = intersection.filter_expression_parameter_sets().unwrap();
        assert_eq!(parsed, parse_intersection(&[TIME_FILTER, ENTITY_FILTER]).unwrap());
    }

    #[test]
    fn test_parallel_parser_from_settings() {
        let settings = Settings::from_toml_str("[intersection]\nparallel = true\n").unwrap();
        let parser = WhereFilterParser::from_settings(&settings);

        let expressions: Vec<String> = (0..50)
            .map(|i| format!("{{{{ Dimension('listing__d{i}') }}}} = {i}"))
            .collect();
        let parsed = parser.parse_intersection(&expressions).unwrap();
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, expressions.iter().collect::<Vec<_>>());
    }
}
