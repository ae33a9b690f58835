use hbfluid::base::DEFAULT_TEST_DIR;
use hbfluid::prelude::*;
use russell_lab::{Matrix, Vector};

// Checking Herschel-Bulkley material definitions
//
// TEST GOAL
//
// Verifies that all negative or missing properties are reported, that JSON
// material files are accepted, and that invalid materials can be rejected with `?`.

fn valid_properties() -> Properties {
    Properties::from([
        (PropertyName::DynamicViscosity, 5.0),
        (PropertyName::YieldShear, 10.0),
        (PropertyName::FlowIndex, 1.2),
        (PropertyName::AdaptiveExponent, 2.0),
        (PropertyName::BulkModulus, 2.1e9),
    ])
}

#[test]
fn test_check_single_violation() {
    let mut props = valid_properties();
    props.set(PropertyName::YieldShear, -1.0);
    let law = HerschelBulkley2D::new();
    let report = law.check(&props);
    assert_eq!(report.status(), 1);
    assert_eq!(
        report.violations,
        vec![ParamViolation {
            law: "HerschelBulkley2DLaw",
            name: PropertyName::YieldShear,
            value: Some(-1.0),
        }]
    );
    assert_eq!(
        format!("{}", report),
        "Incorrect or missing YIELD_SHEAR provided for HerschelBulkley2DLaw: -1"
    );
}

#[test]
fn test_check_all_violations() {
    let mut props = Properties::new();
    props
        .set(PropertyName::DynamicViscosity, -1.0)
        .set(PropertyName::YieldShear, -2.0)
        .set(PropertyName::FlowIndex, -3.0)
        .set(PropertyName::AdaptiveExponent, -4.0)
        .set(PropertyName::BulkModulus, -5.0);
    let report = HerschelBulkley2D::new().check(&props);
    assert_eq!(report.status(), 5);
    let values: Vec<_> = report.violations.iter().map(|v| v.value).collect();
    assert_eq!(values, &[Some(-1.0), Some(-2.0), Some(-3.0), Some(-4.0), Some(-5.0)]);

    let report = HerschelBulkley2D::new().check(&Properties::new());
    assert_eq!(report.status(), 5);
    assert!(report.violations.iter().all(|v| v.value.is_none()));
}

#[test]
fn test_check_zero_values_are_valid() {
    let mut props = valid_properties();
    for name in PropertyName::ALL {
        props.set(name, 0.0);
    }
    assert!(HerschelBulkley2D::new().check(&props).is_valid());
}

fn setup_material(props: &Properties) -> Result<ParamHerschelBulkley, Box<dyn std::error::Error>> {
    HerschelBulkley2D::new().check(props).into_result()?;
    Ok(ParamHerschelBulkley::from_properties(props)?)
}

#[test]
fn test_check_propagates_with_question_mark() {
    let props = valid_properties();
    let param = setup_material(&props).unwrap();
    assert_eq!(param, ParamHerschelBulkley::sample());

    let mut props = valid_properties();
    props.set(PropertyName::FlowIndex, -0.1);
    let err = setup_material(&props).err().unwrap();
    assert_eq!(
        err.to_string(),
        "Incorrect or missing FLOW_INDEX provided for HerschelBulkley2DLaw: -0.1"
    );
}

#[test]
fn test_check_material_file() -> Result<(), StrError> {
    let full_path = format!("{}/test_check_material_file.json", DEFAULT_TEST_DIR);
    valid_properties().write_json(&full_path)?;
    let props = Properties::read_json(&full_path)?;
    assert!(HerschelBulkley2D::new().check(&props).is_valid());
    assert_eq!(ParamHerschelBulkley::from_properties(&props)?, ParamHerschelBulkley::sample());
    Ok(())
}

#[test]
fn test_missing_bulk_modulus_is_rejected_everywhere() {
    let mut props = valid_properties();
    props.remove(PropertyName::BulkModulus);
    let law = HerschelBulkley2D::new();

    let report = law.check(&props);
    assert_eq!(report.status(), 1);
    assert_eq!(
        format!("{}", report),
        "Incorrect or missing BULK_MODULUS provided for HerschelBulkley2DLaw: (none)"
    );

    let mut stress = Vector::new(3);
    let mut tangent = Matrix::new(3, 3);
    let strain_rate = Vector::from(&[0.0, 0.0, 1.0]);
    assert_eq!(
        law.calculate_response(&mut stress, &mut tangent, &props, &strain_rate, false)
            .err(),
        Some("BULK_MODULUS is missing")
    );
}
