use crate::prelude::*;

#[test]
fn clone_reproduces_contents_and_headroom() {
    let mut source = ArraySeq::<i32>::with_capacity(8);
    source.extend([1, 2, 3]);

    let copy = source.clone();
    assert_eq!(copy, source);
    // The copy carries the source's storage headroom, not just its count.
    assert_eq!(copy.capacity(), source.capacity());
}

#[test]
fn clone_is_independent() -> anyhow::Result<()> {
    let source: ArraySeq<i32> = [1, 2, 3].into_iter().collect();
    let mut copy = source.clone();

    *copy.get_mut(0)? = 99;
    copy.erase(2)?;

    assert_eq!(source.to_string(), "1, 2, 3");
    assert_eq!(copy.to_string(), "99, 2");
    Ok(())
}

#[test]
fn move_leaves_no_alias() {
    let source: ArraySeq<i32> = [1, 2, 3].into_iter().collect();
    let moved = source;
    assert_eq!(moved.to_string(), "1, 2, 3");
}
