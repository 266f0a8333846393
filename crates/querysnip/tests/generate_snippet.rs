use querysnip::{generate, ParseError};

// The statistics widget query the generator was built for: grouped cloud
// service types joined twice against the cloud service collection.
const CLOUD_SERVICE_TYPE_STATS: &str = r#"{
    "resource_type": "inventory.CloudServiceType",
    "query": {
        "aggregate": {
            "group": {
                "keys": [
                    {"key": "cloud_service_type_id", "name": "cloud_service_type_id"},
                    {"key": "name", "name": "cloud_service_type"},
                    {"key": "group", "name": "cloud_service_group"},
                    {"key": "provider", "name": "provider"}
                ]
            }
        },
        "sort": {"name": "cloud_service_count", "desc": true}
    },
    "join": [
        {
            "keys": ["cloud_service_type", "cloud_service_group", "provider"],
            "resource_type": "inventory.CloudService",
            "query": {
                "aggregate": {
                    "group": {
                        "keys": [
                            {"key": "cloud_service_type", "name": "cloud_service_type"},
                            {"key": "cloud_service_group", "name": "cloud_service_group"},
                            {"key": "provider", "name": "provider"}
                        ],
                        "fields": [
                            {"operator": "count", "name": "cloud_service_count"}
                        ]
                    }
                }
            }
        },
        {
            "keys": ["cloud_service_type", "cloud_service_group", "provider"],
            "resource_type": "inventory.CloudService",
            "query": {
                "filter": [
                    {"key": "created_at", "value": "now/d", "operator": "timedelta_gte"}
                ],
                "aggregate": {
                    "group": {
                        "keys": [
                            {"key": "cloud_service_type", "name": "cloud_service_type"},
                            {"key": "cloud_service_group", "name": "cloud_service_group"},
                            {"key": "provider", "name": "provider"}
                        ],
                        "fields": [
                            {"operator": "count", "name": "yesterday_cloud_service_count"}
                        ]
                    }
                }
            }
        }
    ]
}"#;

#[test]
fn full_statistics_query_generates_the_whole_chain() {
    let snippet = generate(CLOUD_SERVICE_TYPE_STATS).unwrap();
    let expected = "\
fluentApi.statisticsTest().resource().stat()
.setResourceType(\"inventory.CloudServiceType\")
.addGroupKey(\"cloud_service_type_id\",\"cloud_service_type_id\")
.addGroupKey(\"name\",\"cloud_service_type\")
.addGroupKey(\"group\",\"cloud_service_group\")
.addGroupKey(\"provider\",\"provider\")
.setSort(\"cloud_service_count\",true)
.setJoinKeys([\"cloud_service_type\",\"cloud_service_group\",\"provider\"],0)
.setJoinResourceType(\"inventory.CloudService\",0)
.addJoinGroupKey(\"cloud_service_type\",\"cloud_service_type\",0)
.addJoinGroupKey(\"cloud_service_group\",\"cloud_service_group\",0)
.addJoinGroupKey(\"provider\",\"provider\",0)
.addJoinGroupField(\"cloud_service_count\",\"count\",0)
.setJoinKeys([\"cloud_service_type\",\"cloud_service_group\",\"provider\"],1)
.setJoinResourceType(\"inventory.CloudService\",1)
.addJoinGroupKey(\"cloud_service_type\",\"cloud_service_type\",1)
.addJoinGroupKey(\"cloud_service_group\",\"cloud_service_group\",1)
.addJoinGroupKey(\"provider\",\"provider\",1)
.addJoinGroupField(\"yesterday_cloud_service_count\",\"count\",1)";
    assert_eq!(snippet, expected);
}

#[test]
fn one_line_per_call_no_blank_lines() {
    let snippet = generate(CLOUD_SERVICE_TYPE_STATS).unwrap();
    assert!(!snippet.ends_with('\n'));
    for line in snippet.lines().skip(1) {
        assert!(line.starts_with('.'), "not a chained call: {line}");
    }
}

#[test]
fn same_input_always_yields_the_same_snippet() {
    assert_eq!(
        generate(CLOUD_SERVICE_TYPE_STATS).unwrap(),
        generate(CLOUD_SERVICE_TYPE_STATS).unwrap()
    );
}

#[test]
fn join_blocks_are_tagged_with_their_position() {
    let snippet = generate(CLOUD_SERVICE_TYPE_STATS).unwrap();
    let zero = snippet.lines().filter(|l| l.ends_with(",0)")).count();
    let one = snippet.lines().filter(|l| l.ends_with(",1)")).count();
    assert_eq!(zero, 6);
    assert_eq!(one, 6);
}

#[test]
fn empty_object_yields_the_preamble_alone() {
    assert_eq!(
        generate("{}").unwrap(),
        "fluentApi.statisticsTest().resource().stat()"
    );
}

#[test]
fn unbalanced_brace_fails_with_no_output() {
    let err = generate(r#"{"resource_type": "a""#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn trailing_comma_fails_with_no_output() {
    let err = generate(r#"{"resource_type": "a",}"#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}
