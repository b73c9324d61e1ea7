//! Tests for Sequence

use super::Sequence;
use crate::{BoundsPolicy, ErrorKind, InvalidArgument, ReadOnlyCollection, Role, SequenceOptions, seq};
use crate::error::CollectionError;
use coffer_types::{Type, TypeConstraint};
use coffer_values::{Key, Value};
use pretty_assertions::assert_eq;

fn letters() -> Sequence<String> {
    ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect()
}

fn strs(seq: &Sequence<String>) -> Vec<&str> {
    seq.iter().map(String::as_str).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_uses_static_type() {
    assert_eq!(Sequence::<i64>::new().constraint(), TypeConstraint::Exactly(Type::Int));
    assert_eq!(Sequence::<String>::new().constraint(), TypeConstraint::Exactly(Type::Str));
    assert_eq!(Sequence::<Value>::new().constraint(), TypeConstraint::Any);
}

#[test]
fn test_with_constraint_narrows_any_for_static_elements() {
    let seq = Sequence::<bool>::with_constraint(TypeConstraint::Any).unwrap();
    assert_eq!(seq.constraint(), TypeConstraint::Exactly(Type::Bool));
}

#[test]
fn test_with_constraint_rejects_contradiction() {
    let err = Sequence::<i64>::with_constraint(TypeConstraint::Exactly(Type::Str)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_from_type_name() {
    let seq = Sequence::<Value>::from_type_name("int").unwrap();
    assert_eq!(seq.constraint(), TypeConstraint::Exactly(Type::Int));

    let seq = Sequence::<Value>::from_type_name("").unwrap();
    assert_eq!(seq.constraint(), TypeConstraint::Any);

    let err = Sequence::<Value>::from_type_name("widget").unwrap_err();
    assert!(matches!(
        err,
        CollectionError::InvalidArgument(InvalidArgument::UnknownType(_))
    ));
}

#[test]
fn test_dynamic_elements_reject_unholdable_constraints() {
    let err = Sequence::<Value>::from_type_name("Sequence").unwrap_err();
    assert_eq!(
        err,
        CollectionError::InvalidArgument(InvalidArgument::UnsatisfiableConstraint {
            role: Role::Value,
            requested: Type::Sequence,
        })
    );

    let err = Sequence::<Key>::with_constraint(TypeConstraint::Exactly(Type::Float)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let seq = Sequence::<Key>::with_constraint(TypeConstraint::Exactly(Type::Str)).unwrap();
    assert_eq!(seq.constraint(), TypeConstraint::Exactly(Type::Str));
    assert!(Sequence::<Value>::from_type_name("array").is_ok());
}

// ============================================================================
// add / insert
// ============================================================================

#[test]
fn test_add_returns_new_index() {
    let mut seq = Sequence::<i64>::new();
    assert_eq!(seq.add(10), Ok(0));
    assert_eq!(seq.add(20), Ok(1));
    assert_eq!(seq.count(), 2);
}

#[test]
fn test_add_rejects_mismatched_value() {
    let mut seq = Sequence::<Value>::from_type_name("string").unwrap();
    seq.add("ok".into()).unwrap();

    let err = seq.add(Value::Int(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(seq.count(), 1);
}

#[test]
fn test_untyped_sequence_accepts_null() {
    let mut seq = Sequence::<Value>::new();
    assert_eq!(seq.add(Value::Null), Ok(0));
    assert_eq!(seq.add(Value::from(1.5)), Ok(1));
}

#[test]
fn test_insert_shifts_following_values() {
    let mut seq = Sequence::<i64>::new();
    seq.insert(0, 5).unwrap();
    seq.insert(1, 6).unwrap();
    seq.insert(1, 99).unwrap();
    assert_eq!(seq.as_slice(), &[5, 99, 6]);
}

#[test]
fn test_insert_at_count_appends() {
    let mut seq = seq![1i64, 2];
    assert_eq!(seq.insert(2, 3), Ok(2));
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_past_count_is_rejected() {
    let mut seq = seq![1i64, 2];
    let err = seq.insert(3, 9).unwrap_err();
    assert_eq!(
        err,
        CollectionError::InvalidArgument(InvalidArgument::IndexOutOfRange { index: 3, len: 2 })
    );
    assert_eq!(seq.as_slice(), &[1, 2]);
}

#[test]
fn test_insert_rejects_mismatched_value() {
    let mut seq = Sequence::with_values(TypeConstraint::Exactly(Type::Int), [Value::Int(1)]).unwrap();
    let err = seq.insert(0, Value::Bool(true)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(seq.as_slice(), &[Value::Int(1)]);
}

// ============================================================================
// get / update / remove
// ============================================================================

#[test]
fn test_get_is_soft() {
    let seq = seq![4i64, 5];
    assert_eq!(seq.get(1), Some(&5));
    assert_eq!(seq.get(2), None);
    assert_eq!(*seq.get_or(7, &-1), -1);
    assert_eq!(*seq.get_or(0, &-1), 4);
}

#[test]
fn test_update_replaces_in_place() {
    let mut seq = seq![1i64, 2, 3];
    assert_eq!(seq.update(1, 20), Ok(2));
    assert_eq!(seq.as_slice(), &[1, 20, 3]);
    assert_eq!(seq.update(3, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_update_rejects_mismatched_value() {
    let mut seq = Sequence::with_values(TypeConstraint::Exactly(Type::Str), [Value::from("a")]).unwrap();
    assert_eq!(seq.update(0, Value::Null).unwrap_err().kind(), ErrorKind::TypeMismatch);
    assert_eq!(seq.get(0), Some(&Value::from("a")));
}

#[test]
fn test_remove_reindexes() {
    let mut seq = letters();
    assert_eq!(seq.remove(1).as_deref(), Ok("b"));
    assert_eq!(strs(&seq), ["a", "c", "d", "e"]);
    assert_eq!(seq.get(1).map(String::as_str), Some("c"));
    assert_eq!(seq.last_index(), Some(3));
}

#[test]
fn test_remove_missing_index_is_rejected() {
    let mut seq = seq![1i64];
    assert_eq!(seq.remove(1).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(seq.count(), 1);
}

#[test]
fn test_first_and_last_index() {
    let mut seq = Sequence::<i64>::new();
    assert_eq!(seq.first_index(), None);
    assert_eq!(seq.last_index(), None);
    seq.add(1).unwrap();
    seq.add(2).unwrap();
    assert_eq!(seq.first_index(), Some(0));
    assert_eq!(seq.last_index(), Some(1));
}

#[test]
fn test_clear_keeps_constraint() {
    let mut seq = Sequence::<Value>::from_type_name("int").unwrap();
    seq.add(Value::Int(1)).unwrap();
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.constraint(), TypeConstraint::Exactly(Type::Int));
}

// ============================================================================
// reverse / index_of
// ============================================================================

#[test]
fn test_reverse_in_place() {
    let mut seq = letters();
    seq.reverse();
    assert_eq!(strs(&seq), ["e", "d", "c", "b", "a"]);
}

#[test]
fn test_reversed_leaves_original() {
    let seq = seq![1i64, 2, 3];
    assert_eq!(seq.reversed().as_slice(), &[3, 2, 1]);
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_index_of_forward() {
    let seq = seq![1i64, 2, 3, 2];
    assert_eq!(seq.index_of(&2, 0, false), Some(1));
    assert_eq!(seq.index_of(&2, 2, false), Some(3));
    assert_eq!(seq.index_of(&9, 0, false), None);
}

#[test]
fn test_index_of_reverse_returns_forward_index() {
    let seq: Sequence<String> = ["a", "b", "x", "d"].into_iter().map(String::from).collect();
    assert_eq!(seq.index_of(&"x".to_string(), 0, true), Some(2));
}

#[test]
fn test_index_of_reverse_stays_within_offset() {
    let seq = seq![7i64, 1, 7, 1];
    assert_eq!(seq.index_of(&7, 0, true), Some(2));
    assert_eq!(seq.index_of(&7, 3, true), None);
    assert_eq!(seq.index_of(&1, 2, true), Some(3));
}

#[test]
fn test_index_of_offset_out_of_range() {
    let seq = seq![1i64, 2];
    assert_eq!(seq.index_of(&1, 2, false), None);
    assert_eq!(Sequence::<i64>::new().index_of(&1, 0, false), None);
}

// ============================================================================
// slice
// ============================================================================

#[test]
fn test_slice_is_inclusive() {
    let slice = letters().slice(0, 2).unwrap();
    assert_eq!(strs(&slice), ["a", "b", "c"]);
}

#[test]
fn test_slice_single_slot() {
    let slice = letters().slice(3, 3).unwrap();
    assert_eq!(strs(&slice), ["d"]);
}

#[test]
fn test_slice_inverted_range_is_rejected() {
    let err = letters().slice(3, 1).unwrap_err();
    assert_eq!(
        err,
        CollectionError::InvalidArgument(InvalidArgument::InvertedRange { start: 3, end: 1 })
    );
}

#[test]
fn test_slice_clamps_end() {
    let slice = letters().slice(3, 50).unwrap();
    assert_eq!(strs(&slice), ["d", "e"]);
}

#[test]
fn test_slice_start_past_end_is_empty() {
    let slice = letters().slice(7, 9).unwrap();
    assert!(slice.is_empty());
}

#[test]
fn test_default_options_clamp() {
    let seq = Sequence::<i64>::new();
    assert_eq!(seq.options(), SequenceOptions::default());
    assert_eq!(<SequenceOptions as Default>::default().bounds, BoundsPolicy::Clamp);
}

#[test]
fn test_slice_strict_rejects_out_of_range() {
    let mut seq = Sequence::<i64>::with_options(TypeConstraint::Any, SequenceOptions::strict()).unwrap();
    seq.add(1).unwrap();
    seq.add(2).unwrap();

    assert_eq!(seq.options().bounds, BoundsPolicy::Strict);
    assert_eq!(seq.slice(0, 1).unwrap().as_slice(), &[1, 2]);
    assert_eq!(
        seq.slice(0, 2).unwrap_err(),
        CollectionError::InvalidArgument(InvalidArgument::BoundOutOfRange { bound: 2, len: 2 })
    );
}

#[test]
fn test_slice_keeps_constraint_and_options() {
    let seq = Sequence::with_values(TypeConstraint::Exactly(Type::Int), [Value::Int(1), Value::Int(2)])
        .unwrap();
    let slice = seq.slice(0, 0).unwrap();
    assert_eq!(slice.constraint(), TypeConstraint::Exactly(Type::Int));
    assert_eq!(slice.options(), seq.options());
}

// ============================================================================
// split
// ============================================================================

fn groups(split: &Sequence<Sequence<String>>) -> Vec<Vec<&str>> {
    split.iter().map(strs).collect()
}

#[test]
fn test_split_excludes_delimiters_and_drops_empties() {
    let seq: Sequence<String> = ["a", ",", "b", ",", ",", "c"].into_iter().map(String::from).collect();
    let split = seq.split(&",".to_string(), None);
    assert_eq!(groups(&split), vec![vec!["a"], vec!["b"], vec!["c"]]);
}

#[test]
fn test_split_keeps_trailing_single_item() {
    let seq: Sequence<String> = ["a", ",", "b"].into_iter().map(String::from).collect();
    let split = seq.split(&",".to_string(), None);
    assert_eq!(groups(&split), vec![vec!["a"], vec!["b"]]);
}

#[test]
fn test_split_leading_and_trailing_delimiters() {
    let seq = seq![0i64, 1, 2, 0, 3, 0];
    let split = seq.split(&0, None);
    let split: Vec<Vec<i64>> = split.iter().map(Sequence::to_vec).collect();
    assert_eq!(split, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_split_without_delimiter_is_one_group() {
    let split = seq![1i64, 2, 3].split(&9, None);
    assert_eq!(split.count(), 1);
    assert_eq!(split.get(0).map(Sequence::to_vec), Some(vec![1, 2, 3]));
}

#[test]
fn test_split_limit() {
    let seq = seq![1i64, 0, 2, 0, 3];
    assert_eq!(seq.split(&0, Some(2)).count(), 2);
    assert_eq!(seq.split(&0, Some(0)).count(), 0);
    assert_eq!(seq.split(&0, Some(10)).count(), 3);
}

#[test]
fn test_split_empty_and_all_delimiters() {
    assert!(Sequence::<i64>::new().split(&0, None).is_empty());
    assert!(seq![0i64, 0, 0].split(&0, None).is_empty());
}

#[test]
fn test_split_result_is_a_sequence_of_sequences() {
    let split = seq![1i64, 0, 2].split(&0, None);
    assert_eq!(split.constraint(), TypeConstraint::Exactly(Type::Sequence));
    assert_eq!(split.get(0).unwrap().constraint(), TypeConstraint::Exactly(Type::Int));
}

// ============================================================================
// clone / traversal
// ============================================================================

#[test]
fn test_clone_is_independent() {
    let mut original = seq![1i64, 2];
    let mut copy = original.clone();
    assert_eq!(copy, original);

    original.add(3).unwrap();
    assert_eq!(copy.as_slice(), &[1, 2]);

    copy.remove(0).unwrap();
    assert_eq!(original.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_clone_preserves_constraint() {
    let seq = Sequence::<Value>::from_type_name("float").unwrap();
    assert_eq!(seq.clone().constraint(), TypeConstraint::Exactly(Type::Float));
}

#[test]
fn test_keys_and_values() {
    let seq = letters();
    assert_eq!(seq.keys().as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(seq.indices().to_vec(), Vec::<usize>::from([0, 1, 2, 3, 4]));
    assert_eq!(seq.values(), seq);
}

#[test]
fn test_for_each_entry_visits_in_order() {
    let seq = letters();
    let mut seen = Vec::new();
    let result: Option<()> = seq.for_each_entry(|index, value| {
        seen.push(format!("{index}={value}"));
        None
    });
    assert_eq!(result, None);
    assert_eq!(seen, ["0=a", "1=b", "2=c", "3=d", "4=e"]);
}

#[test]
fn test_for_each_entry_stops_early() {
    let seq = letters();
    let mut visited = 0;
    let found = seq.for_each_entry(|index, value| {
        visited += 1;
        (value == "c").then_some(index)
    });
    assert_eq!(found, Some(2));
    assert_eq!(visited, 3);
}

#[test]
fn test_cursor_protocol() {
    let seq = seq![10i64, 20];
    let mut cursor = seq.cursor();
    assert!(cursor.valid());
    assert_eq!((cursor.key(), cursor.current()), (Some(0), Some(10)));

    cursor.advance();
    assert_eq!((cursor.key(), cursor.current()), (Some(1), Some(20)));

    cursor.advance();
    assert!(!cursor.valid());
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.current(), None);

    cursor.rewind();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.collect::<Vec<_>>(), vec![(0, 10), (1, 20)]);
}
