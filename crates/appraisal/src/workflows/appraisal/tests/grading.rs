use crate::workflows::appraisal::grading::{grade_by_count, grade_by_percentage, grade_penalty};

#[test]
fn percentage_bands_cover_all_inputs() {
    assert_eq!(grade_by_percentage(100.0), 5);
    assert_eq!(grade_by_percentage(95.01), 5);
    assert_eq!(grade_by_percentage(95.0), 4);
    assert_eq!(grade_by_percentage(90.0), 4);
    assert_eq!(grade_by_percentage(89.9), 3);
    assert_eq!(grade_by_percentage(80.0), 3);
    assert_eq!(grade_by_percentage(79.9), 2);
    assert_eq!(grade_by_percentage(70.0), 2);
    assert_eq!(grade_by_percentage(69.9), 1);
    assert_eq!(grade_by_percentage(60.0), 1);
    assert_eq!(grade_by_percentage(59.9), 0);
    assert_eq!(grade_by_percentage(50.0), 0);
    assert_eq!(grade_by_percentage(49.9), -1);
    assert_eq!(grade_by_percentage(0.0), -1);
    assert_eq!(grade_by_percentage(-20.0), -1);
}

#[test]
fn percentage_grade_stays_in_codomain_and_is_monotone() {
    let mut previous = i32::MIN;
    let mut value = -50.0;
    while value <= 150.0 {
        let grade = grade_by_percentage(value);
        assert!((-1..=5).contains(&grade), "grade {grade} for {value}");
        assert!(grade >= previous, "grade regressed at {value}");
        previous = grade;
        value += 0.25;
    }
}

#[test]
fn count_bands_match_the_grading_table() {
    assert_eq!(grade_by_count(1.0), 1);
    assert_eq!(grade_by_count(2.0), 1);
    assert_eq!(grade_by_count(3.0), 2);
    assert_eq!(grade_by_count(4.0), 2);
    assert_eq!(grade_by_count(5.0), 3);
    assert_eq!(grade_by_count(6.0), 3);
    assert_eq!(grade_by_count(7.0), 4);
    assert_eq!(grade_by_count(9.0), 4);
    assert_eq!(grade_by_count(10.0), 5);
    assert_eq!(grade_by_count(100.0), 5);
}

#[test]
fn count_grade_at_or_below_zero_is_five() {
    // Outermost band of the published grading table.
    assert_eq!(grade_by_count(0.0), 5);
    assert_eq!(grade_by_count(-1.0), 5);
    assert_eq!(grade_by_count(-100.0), 5);
}

#[test]
fn penalty_bands_match_the_grading_table() {
    assert_eq!(grade_penalty(1.0), -1);
    assert_eq!(grade_penalty(10.0), -1);
    assert_eq!(grade_penalty(11.0), -2);
    assert_eq!(grade_penalty(20.0), -2);
    assert_eq!(grade_penalty(21.0), -3);
    assert_eq!(grade_penalty(30.0), -3);
    assert_eq!(grade_penalty(31.0), -4);
    assert_eq!(grade_penalty(40.0), -4);
    assert_eq!(grade_penalty(41.0), -5);
}

#[test]
fn penalty_grade_at_or_below_zero_is_minus_five() {
    assert_eq!(grade_penalty(0.0), -5);
    assert_eq!(grade_penalty(-5.0), -5);
}

#[test]
fn fractional_gaps_between_count_bands_fall_to_the_outer_band() {
    // 2.5 sits between the 1..=2 and 3..=4 bands and lands in the else arm.
    assert_eq!(grade_by_count(2.5), 5);
    assert_eq!(grade_penalty(10.5), -5);
}
