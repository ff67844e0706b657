// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_employee;
use crate::{Department, Employee, FilterCriteria, compute_visible};

fn create_alice_and_bob() -> Vec<Employee> {
    vec![
        create_test_employee(1, "Alice", Some(Department::Hr)),
        create_test_employee(2, "Bob", Some(Department::It)),
    ]
}

fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_search_text_matches_name_case_insensitively() {
    let roster: Vec<Employee> = create_alice_and_bob();
    let criteria: FilterCriteria = FilterCriteria::new(String::from("al"), None);

    let visible: Vec<Employee> = compute_visible(&roster, &criteria);

    assert_eq!(names(&visible), vec!["Alice"]);
}

#[test]
fn test_department_criterion_matches_exactly() {
    let roster: Vec<Employee> = create_alice_and_bob();
    let criteria: FilterCriteria = FilterCriteria::new(String::new(), Some(Department::It));

    let visible: Vec<Employee> = compute_visible(&roster, &criteria);

    assert_eq!(names(&visible), vec!["Bob"]);
}

#[test]
fn test_unmatched_search_text_yields_empty_view() {
    let roster: Vec<Employee> = create_alice_and_bob();
    let criteria: FilterCriteria = FilterCriteria::new(String::from("z"), None);

    assert!(compute_visible(&roster, &criteria).is_empty());
}

#[test]
fn test_empty_criteria_returns_whole_roster() {
    let roster: Vec<Employee> = create_alice_and_bob();
    let criteria: FilterCriteria = FilterCriteria::default();

    assert!(criteria.is_empty());
    assert_eq!(compute_visible(&roster, &criteria), roster);
}

#[test]
fn test_search_and_department_must_both_match() {
    let roster: Vec<Employee> = vec![
        create_test_employee(1, "Alice", Some(Department::Hr)),
        create_test_employee(2, "Alan", Some(Department::It)),
        create_test_employee(3, "Bob", Some(Department::It)),
    ];
    let criteria: FilterCriteria = FilterCriteria::new(String::from("AL"), Some(Department::It));

    let visible: Vec<Employee> = compute_visible(&roster, &criteria);

    assert_eq!(names(&visible), vec!["Alan"]);
}

#[test]
fn test_department_criterion_excludes_unset_departments() {
    let roster: Vec<Employee> = vec![
        create_test_employee(1, "Alice", None),
        create_test_employee(2, "Bob", Some(Department::Finance)),
    ];
    let criteria: FilterCriteria = FilterCriteria::new(String::new(), Some(Department::Finance));

    assert_eq!(names(&compute_visible(&roster, &criteria)), vec!["Bob"]);
}

#[test]
fn test_department_criterion_matches_imported_company_names() {
    let company: Department = Department::Other(String::from("Deckow-Crist"));
    let roster: Vec<Employee> = vec![
        create_test_employee(1, "Clementine", Some(company.clone())),
        create_test_employee(2, "Chelsey", Some(Department::Engineering)),
    ];
    let criteria: FilterCriteria = FilterCriteria::new(String::new(), Some(company));

    assert_eq!(names(&compute_visible(&roster, &criteria)), vec!["Clementine"]);
}

#[test]
fn test_visible_is_ordered_subsequence_and_idempotent() {
    let roster: Vec<Employee> = vec![
        create_test_employee(5, "Dana", Some(Department::Marketing)),
        create_test_employee(1, "Adam", Some(Department::Marketing)),
        create_test_employee(9, "Daniel", Some(Department::Hr)),
        create_test_employee(2, "Aidan", Some(Department::Marketing)),
    ];
    let criteria: FilterCriteria = FilterCriteria::new(String::from("da"), Some(Department::Marketing));

    let once: Vec<Employee> = compute_visible(&roster, &criteria);
    let twice: Vec<Employee> = compute_visible(&once, &criteria);

    assert_eq!(names(&once), vec!["Dana", "Adam", "Aidan"]);
    assert_eq!(once, twice);

    let mut positions = once
        .iter()
        .map(|visible| roster.iter().position(|r| r == visible).unwrap());
    let mut previous: usize = positions.next().unwrap();
    for position in positions {
        assert!(position > previous);
        previous = position;
    }
}

#[test]
fn test_matches_agrees_with_compute_visible() {
    let roster: Vec<Employee> = vec![
        create_test_employee(1, "Alice", Some(Department::Hr)),
        create_test_employee(2, "Malcolm", Some(Department::Hr)),
        create_test_employee(3, "Bob", Some(Department::It)),
        create_test_employee(4, "Sally", None),
    ];
    let all_criteria: Vec<FilterCriteria> = vec![
        FilterCriteria::default(),
        FilterCriteria::new(String::from("AL"), None),
        FilterCriteria::new(String::from("al"), Some(Department::Hr)),
        FilterCriteria::new(String::new(), Some(Department::Finance)),
        FilterCriteria::new(String::from("x"), None),
    ];

    for criteria in &all_criteria {
        let visible: Vec<Employee> = compute_visible(&roster, criteria);
        for employee in &roster {
            assert_eq!(visible.contains(employee), criteria.matches(employee));
        }
    }
}
