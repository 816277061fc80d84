use super::*;
use crate::dynamic::{slot_ref, Arg, NIL};
use proptest::prelude::*;

fn bind_three(supplied: Vec<Option<Arg>>) -> [Option<Arg>; 3] {
    let mut name: Option<Arg> = None;
    let mut age: Option<Arg> = None;
    let mut height: Option<Arg> = None;
    bind(supplied, &mut [&mut name, &mut age, &mut height]);
    [name, age, height]
}

#[test]
fn all_supplied() {
    let [name, age, height] = bind_three(crate::args!["Gerry", 20, 5.9]);
    assert_eq!(slot_ref::<&str>(&name).unwrap(), Some(&"Gerry"));
    assert_eq!(slot_ref::<i32>(&age).unwrap(), Some(&20));
    assert_eq!(slot_ref::<f64>(&height).unwrap(), Some(&5.9));
}

#[test]
fn trailing_slot_absent() {
    let [name, age, height] = bind_three(crate::args!["Gerry", 20]);
    assert_eq!(name, Some(Arg::new("Gerry")));
    assert_eq!(age, Some(Arg::new(20)));
    assert!(height.is_none());
    // explicit NIL in the last position is the same call
    assert_eq!(
        bind_three(crate::args!["Gerry", 20, NIL]),
        [name, age, height]
    );
}

#[test]
fn leading_nil_keeps_position() {
    let [name, age, height] = bind_three(crate::args![NIL, 20]);
    assert!(name.is_none());
    assert_eq!(slot_ref::<i32>(&age).unwrap(), Some(&20));
    assert!(height.is_none());
}

#[test]
fn nothing_supplied_means_all_absent() {
    let expected: [Option<Arg>; 3] = [None, None, None];
    assert_eq!(bind_three(crate::args![]), expected);
    assert_eq!(bind_three(crate::args![NIL]), expected);
    assert_eq!(bind_three(crate::args![NIL, NIL]), expected);
    assert_eq!(bind_three(crate::args![NIL, NIL, NIL]), expected);
}

#[test]
fn type_mismatch_surfaces_on_read_not_on_bind() {
    let [name, _, _] = bind_three(crate::args![34]);
    assert!(slot_ref::<String>(&name).is_err());
    assert_eq!(slot_ref::<i32>(&name).unwrap(), Some(&34));
}

#[test]
fn explicit_none_is_bound_as_absent() {
    let (mut a, mut b, mut c): (Option<i32>, Option<i32>, Option<i32>) = (None, None, None);
    bind(vec![Some(1), None, Some(3)], &mut [&mut a, &mut b, &mut c]);
    assert_eq!((a, b, c), (Some(1), None, Some(3)));
}

#[test]
fn extra_arguments_are_ignored() {
    let (mut a, mut b): (Option<i32>, Option<i32>) = (None, None);
    bind(vec![1, 2, 3, 4], &mut [&mut a, &mut b]);
    assert_eq!((a, b), (Some(1), Some(2)));

    // never drained past the slots
    bind(std::iter::repeat(7), &mut [&mut a, &mut b]);
    assert_eq!((a, b), (Some(7), Some(7)));
}

#[test]
fn no_slots_is_a_no_op() {
    let mut none: [&mut Option<i32>; 0] = [];
    bind(vec![1, 2, 3], &mut none);
    bind(Vec::<i32>::new(), &mut none);
}

#[test]
fn bind_array_destructures() {
    let [name, age, height]: [Option<&str>; 3] = bind_array(["Gerry", "20"]);
    assert_eq!(name, Some("Gerry"));
    assert_eq!(age, Some("20"));
    assert_eq!(height, None);

    let [only]: [Option<u8>; 1] = bind_array(1_u8..);
    assert_eq!(only, Some(1));
}

#[test]
fn bind_array_stops_one_past_the_slots() {
    let mut source = vec![1, 2, 3, 4].into_iter();
    let pair: [Option<i32>; 2] = bind_array(source.by_ref());
    assert_eq!(pair, [Some(1), Some(2)]);
    // only the first extra value is looked at
    assert_eq!(source.next(), Some(4));

    let many: [Option<u64>; 3] = bind_array(std::iter::repeat(9));
    assert_eq!(many, [Some(9); 3]);
}

proptest! {
    #[test]
    fn slots_follow_supplied_prefix(
        supplied in prop::collection::vec(any::<i32>(), 0..8),
        n in 0usize..8,
    ) {
        let mut slots = vec![Some(i32::MIN); n];
        {
            let mut refs: Vec<&mut Option<i32>> = slots.iter_mut().collect();
            bind(supplied.clone(), &mut refs);
        }
        for (i, slot) in slots.iter().enumerate() {
            prop_assert_eq!(*slot, supplied.get(i).copied());
        }
    }

    #[test]
    fn bind_array_matches_bind(supplied in prop::collection::vec(any::<u16>(), 0..6)) {
        let arr: [Option<u16>; 4] = bind_array(supplied.clone());
        let mut out: [Option<u16>; 4] = [None; 4];
        {
            let [a, b, c, d] = &mut out;
            bind(supplied, &mut [a, b, c, d]);
        }
        prop_assert_eq!(arr, out);
    }
}
