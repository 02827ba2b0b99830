#[cfg(test)]
mod tests {
    use semfilter::{WhereFilter, WhereFilterIntersection};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    const BOOLEAN_EXPRESSION: &str = "1 > 0";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ModelWithWhereFilter {
        where_filter: WhereFilter,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ModelWithWhereFilterIntersection {
        where_filter: WhereFilterIntersection,
    }

    fn single() -> WhereFilterIntersection {
        WhereFilterIntersection::new(vec![WhereFilter::new(BOOLEAN_EXPRESSION)])
    }

    #[test]
    fn test_where_filter_from_string() {
        let model: ModelWithWhereFilter =
            serde_json::from_value(json!({ "where_filter": BOOLEAN_EXPRESSION })).unwrap();
        assert_eq!(model.where_filter, WhereFilter::new(BOOLEAN_EXPRESSION));
    }

    #[test]
    fn test_where_filter_from_object() {
        let model: ModelWithWhereFilter = serde_json::from_value(
            json!({ "where_filter": { "where_sql_template": BOOLEAN_EXPRESSION } }),
        )
        .unwrap();
        assert_eq!(model.where_filter, WhereFilter::new(BOOLEAN_EXPRESSION));
    }

    #[test]
    fn test_serialize_deserialize() {
        let model = ModelWithWhereFilter {
            where_filter: WhereFilter::new(BOOLEAN_EXPRESSION),
        };
        let serialized = serde_json::to_string(&model).unwrap();
        assert_eq!(
            serialized,
            r#"{"where_filter":{"where_sql_template":"1 > 0"}}"#
        );
        let deserialized: ModelWithWhereFilter = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, model);
    }

    #[test]
    fn test_intersection_from_string() {
        let model: ModelWithWhereFilterIntersection =
            serde_json::from_value(json!({ "where_filter": BOOLEAN_EXPRESSION })).unwrap();
        assert_eq!(model.where_filter, single());
    }

    #[test]
    fn test_intersection_from_filter_object() {
        let model: ModelWithWhereFilterIntersection = serde_json::from_value(
            json!({ "where_filter": { "where_sql_template": BOOLEAN_EXPRESSION } }),
        )
        .unwrap();
        assert_eq!(model.where_filter, single());
    }

    #[test]
    fn test_intersection_from_list_of_strings() {
        let model: ModelWithWhereFilterIntersection =
            serde_json::from_value(json!({ "where_filter": [BOOLEAN_EXPRESSION, "0 < 1"] })).unwrap();
        assert_eq!(
            model.where_filter,
            WhereFilterIntersection::new(vec![
                WhereFilter::new(BOOLEAN_EXPRESSION),
                WhereFilter::new("0 < 1"),
            ])
        );
    }

    #[test]
    fn test_intersection_from_mixed_list() {
        let model: ModelWithWhereFilterIntersection = serde_json::from_value(json!({
            "where_filter": [BOOLEAN_EXPRESSION, { "where_sql_template": "0 < 1" }]
        }))
        .unwrap();
        assert_eq!(model.where_filter.where_filters.len(), 2);
    }

    #[test]
    fn test_intersection_canonical_form_round_trip() {
        let model = ModelWithWhereFilterIntersection {
            where_filter: single(),
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({ "where_filter": { "where_filters": [{ "where_sql_template": BOOLEAN_EXPRESSION }] } })
        );
        let back: ModelWithWhereFilterIntersection = serde_json::from_value(value).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn test_conversion_from_where_filter() {
        assert_eq!(WhereFilterIntersection::from(WhereFilter::new(BOOLEAN_EXPRESSION)), single());
    }

    #[test]
    fn test_rejects_non_filter_values() {
        let result: Result<ModelWithWhereFilter, _> = serde_json::from_value(json!({ "where_filter": 42 }));
        assert!(result.is_err());
    }
}
