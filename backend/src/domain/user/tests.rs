//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn ana() -> User {
    User::new(UserId::random(), "Ana", UserRole::Customer, "555-0100")
}

#[rstest]
fn accessors_return_registration_fields(ana: User) {
    assert_eq!(ana.name(), "Ana");
    assert_eq!(ana.role(), UserRole::Customer);
    assert_eq!(ana.phone(), "555-0100");
}

#[rstest]
#[case("Customer", UserRole::Customer)]
#[case("cleaner", UserRole::Cleaner)]
#[case(" CLEANER ", UserRole::Cleaner)]
fn role_parses_case_insensitively(#[case] raw: &str, #[case] expected: UserRole) {
    assert_eq!(raw.parse::<UserRole>(), Ok(expected));
}

#[rstest]
fn role_rejects_unknown_label() {
    let err = "Admin".parse::<UserRole>().expect_err("admin is not a role");
    assert_eq!(err.to_string(), "unknown user role: Admin");
}

#[rstest]
#[case(UserRole::Customer, "Customer")]
#[case(UserRole::Cleaner, "Cleaner")]
fn role_label_round_trips(#[case] role: UserRole, #[case] label: &str) {
    assert_eq!(role.to_string(), label);
    assert_eq!(label.parse::<UserRole>(), Ok(role));
}

#[rstest]
fn users_compare_by_value(ana: User) {
    let copy = User::new(ana.id().clone(), "Ana", UserRole::Customer, "555-0100");
    assert_eq!(copy, ana);
}
