//! Tests for gate-model types.

use gate_model::{AttrValue, BoundedIntField, ErrorKind, LimitError, Visitor, VisitorCategory};

#[test]
fn inverted_bounds_are_rejected() {
    let error = BoundedIntField::new("age", 15, 4).unwrap_err();
    assert_eq!(error.field, "age");
    assert_eq!(error.min_amount, 15);
    assert_eq!(error.max_amount, 4);
}

#[test]
fn ordered_bounds_are_accepted() {
    let field = BoundedIntField::new("age", 4, 14).expect("ordered bounds");
    assert_eq!(field.name(), "age");
    assert_eq!(field.min_amount(), 4);
    assert_eq!(field.max_amount(), 14);
}

#[test]
fn equal_bounds_are_accepted() {
    let field = BoundedIntField::new("age", 7, 7).expect("single-value bound");
    assert_eq!(field.check(7), Ok(7));
    assert!(field.check(8).is_err());
}

#[test]
fn boolean_values_are_rejected() {
    let field = BoundedIntField::new("age", 4, 14).expect("ordered bounds");
    for value in [true, false] {
        let error = field.validate(&AttrValue::Bool(value)).unwrap_err();
        assert_eq!(error, LimitError::BooleanValue { field: "age" });
        assert_eq!(error.kind(), ErrorKind::InvalidType);
    }
}

#[test]
fn non_integer_values_are_rejected() {
    let field = BoundedIntField::new("height", 80, 120).expect("ordered bounds");

    let error = field
        .validate(&AttrValue::Text("tall".to_string()))
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
    assert_eq!(error.field(), "height");

    let error = field.validate(&AttrValue::Float(100.5)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
}

#[test]
fn in_range_value_validates_to_itself() {
    let field = BoundedIntField::new("weight", 20, 50).expect("ordered bounds");
    assert_eq!(field.validate(&AttrValue::Int(20)), Ok(20));
    assert_eq!(field.validate(&AttrValue::Int(35)), Ok(35));
    assert_eq!(field.validate(&AttrValue::Int(50)), Ok(50));
}

#[test]
fn out_of_range_error_carries_bound() {
    let field = BoundedIntField::new("age", 4, 14).expect("ordered bounds");
    let error = field.check(20).unwrap_err();
    assert_eq!(
        error,
        LimitError::OutOfRange {
            field: "age",
            value: 20,
            min_amount: 4,
            max_amount: 14,
        }
    );
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
}

#[test]
fn store_keeps_prior_value_on_rejection() {
    let field = BoundedIntField::new("weight", 20, 50).expect("ordered bounds");
    let mut slot = None;

    field
        .store(&mut slot, &AttrValue::Int(30))
        .expect("in range");
    assert_eq!(slot, Some(30));

    let error = field.store(&mut slot, &AttrValue::Int(200)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfRange);
    assert_eq!(slot, Some(30));
}

#[test]
fn store_leaves_empty_slot_absent_on_rejection() {
    let field = BoundedIntField::new("weight", 20, 50).expect("ordered bounds");
    let mut slot = None;
    assert!(field.store(&mut slot, &AttrValue::Int(200)).is_err());
    assert_eq!(slot, None);
}

#[test]
fn categories_enumerate_in_display_order() {
    assert_eq!(
        VisitorCategory::all(),
        &[VisitorCategory::Child, VisitorCategory::Adult]
    );
    assert_eq!(VisitorCategory::Child.label(), "Child");
    assert_eq!(VisitorCategory::Adult.label(), "Adult");
}

#[test]
fn category_round_trips_through_serde() {
    let json = serde_json::to_string(&VisitorCategory::Child).expect("serialize category");
    assert_eq!(json, "\"child\"");
    let round: VisitorCategory = serde_json::from_str(&json).expect("deserialize category");
    assert_eq!(round, VisitorCategory::Child);
}

#[test]
fn visitor_round_trips_through_serde() {
    let visitor = Visitor::new("Ann", 10, 30, 100);
    let json = serde_json::to_string(&visitor).expect("serialize visitor");
    let round: Visitor = serde_json::from_str(&json).expect("deserialize visitor");
    assert_eq!(round, visitor);
}

#[test]
fn visitor_accepts_raw_attribute_values() {
    let visitor = Visitor::from_attributes(
        "Ann",
        AttrValue::Text("ten".to_string()),
        AttrValue::Int(30),
        AttrValue::Int(100),
    );
    assert_eq!(visitor.age, AttrValue::Text("ten".to_string()));
    assert_eq!(visitor.weight.as_int(), Some(30));
}
