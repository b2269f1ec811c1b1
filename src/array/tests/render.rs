use crate::prelude::*;

#[test]
fn renders_comma_separated_without_trailer() {
    let seq: ArraySeq<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(seq.to_string(), "1, 2, 3");
}

#[test]
fn renders_single_element_bare() {
    let seq: ArraySeq<i32> = [7].into_iter().collect();
    assert_eq!(seq.to_string(), "7");
}

#[test]
fn renders_empty_as_empty_string() {
    let seq = ArraySeq::<i32>::new();
    assert_eq!(seq.to_string(), "");
}

#[test]
fn debug_renders_as_list() {
    let seq: ArraySeq<i32> = [1, 2].into_iter().collect();
    assert_eq!(format!("{seq:?}"), "[1, 2]");
}
