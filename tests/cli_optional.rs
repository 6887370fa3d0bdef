mod common;

use common::*;

#[test]
fn lists_blank_fields() {
    let env = TestEnv::builder().with_sample_project().build();

    let result = env.run(&["optional", "--backend", "backend/models.py"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "EventModel");
    assert_output_contains!(result, "participants?");
    assert_output_contains!(result, "1 optional fields");
    assert_output_not_contains!(result, "date?");
}

#[test]
fn uses_configured_pairs_by_default() {
    let env = TestEnv::builder()
        .with_sample_project()
        .with_config(TWO_PAIR_CONFIG)
        .build();

    let result = env.run(&["optional"]);

    assert_exit_code!(result, 0);
    // the same model file content under two paths
    assert_output_contains!(result, "2 optional fields");
}

#[test]
fn null_and_snake_case_fields() {
    let env = TestEnv::builder()
        .with_file(
            "backend/models.py",
            "class Profile(models.Model):\n    display_name = models.CharField(null=True)\n    bio = models.TextField()\n",
        )
        .build();

    let result = env.run(&["optional", "-b", "backend/models.py"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "displayName (display_name)?");
}

#[test]
fn json_optional_fields() {
    let env = TestEnv::builder().with_sample_project().build();

    let result = env.run(&["--json", "optional", "-b", "backend/models.py"]);

    assert_exit_code!(result, 0);
    let events = result.events();
    let data = events.iter().find(|e| e["event"] == "data").unwrap();
    assert_eq!(data["fields"][0]["type_name"], "EventModel");
    assert_eq!(data["fields"][0]["field"], "participants");
}
