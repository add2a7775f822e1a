use candidate_backend::dto::candidate_dto::CreateCandidateRequest;
use candidate_backend::utils::validation;
use serde_json::json;

fn parse(value: serde_json::Value) -> Result<CreateCandidateRequest, serde_json::Error> {
    serde_json::from_value(value)
}

#[test]
fn minimal_payload_normalizes_defaults() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    validation::validate(&request).expect("valid");

    let new = request.normalize();
    assert_eq!(new.name, "Jo Lee");
    assert_eq!(new.age, 30);
    assert_eq!(new.email, "jo@x.com");
    assert_eq!(new.phone, "");
    assert_eq!(new.skills, "");
    assert_eq!(new.experience, 0);
    assert_eq!(new.applied_position, "Engineer");
    assert_eq!(new.status, "Applied");
}

#[test]
fn explicit_fields_are_preserved() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "phone": "+1 555 0101",
        "skills": "Rust, SQL",
        "experience": 4,
        "appliedPosition": "Engineer",
        "status": "Interviewing"
    }))
    .expect("parse");
    validation::validate(&request).expect("valid");

    let new = request.normalize();
    assert_eq!(new.phone, "+1 555 0101");
    assert_eq!(new.skills, "Rust, SQL");
    assert_eq!(new.experience, 4);
    assert_eq!(new.status, "Interviewing");
}

#[test]
fn null_experience_normalizes_to_zero() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "experience": null,
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    validation::validate(&request).expect("valid");
    assert_eq!(request.normalize().experience, 0);
}

#[test]
fn empty_phone_is_valid() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "phone": "",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    validation::validate(&request).expect("valid");
    assert_eq!(request.normalize().phone, "");
}

#[test]
fn short_name_is_rejected() {
    let request = parse(json!({
        "name": "J",
        "age": 30,
        "email": "jo@x.com",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    let errs = validation::validate(&request).expect_err("invalid");
    let pairs = validation::field_errors(&errs);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "name");
    assert_eq!(pairs[0].1, "name must be at least 2 characters long");
}

#[test]
fn underage_is_rejected() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 17,
        "email": "jo@x.com",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    let errs = validation::validate(&request).expect_err("invalid");
    let pairs = validation::field_errors(&errs);
    assert_eq!(pairs, vec![("age".to_string(), "age must be at least 18".to_string())]);
}

#[test]
fn malformed_email_is_rejected() {
    let request = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "not-an-email",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    let errs = validation::validate(&request).expect_err("invalid");
    let pairs = validation::field_errors(&errs);
    assert_eq!(pairs, vec![("email".to_string(), "email must be a valid email address".to_string())]);
}

#[test]
fn all_violations_are_collected() {
    let request = parse(json!({
        "name": "J",
        "age": 15,
        "email": "nope",
        "appliedPosition": "Engineer"
    }))
    .expect("parse");
    let errs = validation::validate(&request).expect_err("invalid");
    let pairs = validation::field_errors(&errs);
    assert_eq!(pairs.len(), 3);

    let message = validation::error_message(&errs);
    assert_eq!(
        message,
        "age: age must be at least 18; email: email must be a valid email address; name: name must be at least 2 characters long"
    );
}

#[test]
fn missing_applied_position_fails_to_parse() {
    let result = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com"
    }));
    assert!(result.is_err());
}

#[test]
fn non_string_phone_fails_to_parse() {
    let result = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "phone": 5550101,
        "appliedPosition": "Engineer"
    }));
    assert!(result.is_err());
}

#[test]
fn non_numeric_experience_fails_to_parse() {
    let result = parse(json!({
        "name": "Jo Lee",
        "age": 30,
        "email": "jo@x.com",
        "experience": "four years",
        "appliedPosition": "Engineer"
    }));
    assert!(result.is_err());
}
