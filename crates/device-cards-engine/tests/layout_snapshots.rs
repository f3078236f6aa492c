use device_cards_engine::CardStyle::{Basic, Complex};
use device_cards_engine::{CardStyle, GroupShape, partition};
use serde::Serialize;

#[derive(Serialize)]
struct Row {
    shape: GroupShape,
    start: usize,
    end: usize,
}

fn rows(styles: &[CardStyle]) -> Vec<Row> {
    partition(styles)
        .into_iter()
        .map(|g| Row {
            shape: g.shape,
            start: g.range.start,
            end: g.range.end,
        })
        .collect()
}

#[test]
fn three_basics() {
    insta::assert_yaml_snapshot!("three_basics", rows(&[Basic, Basic, Basic]));
}

#[test]
fn basic_complex_basic() {
    insta::assert_yaml_snapshot!("basic_complex_basic", rows(&[Basic, Complex, Basic]));
}

#[test]
fn pair_between_complex() {
    insta::assert_yaml_snapshot!(
        "pair_between_complex",
        rows(&[Complex, Basic, Basic, Complex])
    );
}

#[test]
fn mixed_run() {
    insta::assert_yaml_snapshot!(
        "mixed_run",
        rows(&[Basic, Basic, Basic, Basic, Basic, Complex, Complex, Basic, Basic, Complex, Basic])
    );
}
