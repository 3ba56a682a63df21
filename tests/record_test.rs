use verdict::{ErrorKind, RecordValidator, Rule, Validator};

struct User {
    name: String,
    role: String,
}

fn user_validator() -> RecordValidator<User> {
    RecordValidator::new()
        .field(
            "name",
            |u: &User| &u.name,
            Rule::length(5..).and(Rule::alphanumeric()),
        )
        .field(
            "role",
            |u: &User| &u.role,
            Rule::member_of(vec!["admin".to_string(), "member".to_string()]),
        )
}

#[test]
fn test_valid_record_passes() {
    let user = User {
        name: "alice1".to_string(),
        role: "admin".to_string(),
    };
    assert!(user_validator().validate(&user).is_ok());
}

#[test]
fn test_name_too_short_reports_only_failing_side() {
    // "ab" is alphanumeric but shorter than 5: the AND has a left
    // failure only, and the one-sided render omits the join word.
    let user = User {
        name: "ab".to_string(),
        role: "admin".to_string(),
    };

    let error = user_validator().validate(&user).unwrap_err();
    assert_eq!(error.render(), "'name' is less than 5");
    assert_eq!(error.flatten(), vec!["is less than 5"]);
}

#[test]
fn test_all_failing_fields_are_reported_in_binding_order() {
    let user = User {
        name: "a!".to_string(),
        role: "guest".to_string(),
    };

    let error = user_validator().validate(&user).unwrap_err();
    assert_eq!(
        error.flatten(),
        vec![
            "is less than 5",
            "is not alphanumeric",
            "is not in (admin, member)",
        ]
    );
    assert_eq!(
        error.render(),
        "'name' is less than 5 and 'name' is not alphanumeric, \
         'role' is not in (admin, member)"
    );
}

#[test]
fn test_single_failure_is_still_a_batch() {
    let user = User {
        name: "alice1".to_string(),
        role: "guest".to_string(),
    };

    let error = user_validator().validate(&user).unwrap_err();
    match error.kind() {
        ErrorKind::Multiple(errors) => assert_eq!(errors.len(), 1),
        other => panic!("expected Multiple, got {:?}", other),
    }
}

#[test]
fn test_rebinding_a_field_adds_a_second_check() {
    let validator = RecordValidator::new()
        .field("name", |u: &User| &u.name, Rule::length(5..))
        .field("name", |u: &User| &u.name, Rule::alphanumeric());

    let user = User {
        name: "a!".to_string(),
        role: String::new(),
    };

    let error = validator.validate(&user).unwrap_err();
    assert_eq!(
        error.render(),
        "'name' is less than 5, 'name' is not alphanumeric"
    );
}

#[test]
fn test_nested_records_accumulate_dotted_paths() {
    struct Address {
        street: String,
    }
    struct Customer {
        address: Address,
    }

    let address = RecordValidator::new().field("street", |a: &Address| &a.street, Rule::length(1..));
    let address = Validator::from_fn("a valid address", move |a: &Address| address.validate(a));

    let customer =
        RecordValidator::new().field("address", |c: &Customer| &c.address, address);

    let value = Customer {
        address: Address {
            street: String::new(),
        },
    };

    let error = customer.validate(&value).unwrap_err();
    assert_eq!(error.render(), "'address.street' is less than 1");
}
