use crate::prelude::*;

#[test]
fn erase_shifts_down() -> anyhow::Result<()> {
    let mut seq: ArraySeq<i32> = [1, 2, 3, 4].into_iter().collect();
    seq.erase(1)?;
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.to_string(), "1, 3, 4");
    assert_eq!(*seq.get(1)?, 3);
    Ok(())
}

#[test]
fn erase_first_and_last() -> anyhow::Result<()> {
    let mut seq: ArraySeq<i32> = [1, 2, 3].into_iter().collect();
    seq.erase(0)?;
    assert_eq!(seq.to_string(), "2, 3");
    seq.erase(seq.len() - 1)?;
    assert_eq!(seq.to_string(), "2");
    Ok(())
}

#[test]
fn erase_to_empty_keeps_capacity() -> anyhow::Result<()> {
    let mut seq: ArraySeq<i32> = [1, 2, 3].into_iter().collect();
    let capacity = seq.capacity();
    while !seq.is_empty() {
        seq.erase(0)?;
    }
    assert!(seq.is_empty());
    // erase never shrinks the buffer; only clear releases it.
    assert_eq!(seq.capacity(), capacity);
    Ok(())
}

#[test]
fn erase_out_of_bounds() {
    let mut seq: ArraySeq<i32> = [1, 2].into_iter().collect();
    assert!(seq.erase(2).is_err());
    assert_eq!(seq.len(), 2);

    let mut empty = ArraySeq::<i32>::new();
    assert!(empty.erase(0).is_err());
}
