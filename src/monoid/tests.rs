use super::{FnMonoid, Max, Min, Monoid, Sum};

fn check_laws<M>(m: &M, values: &[M::Value])
where
    M: Monoid,
    M::Value: PartialEq + std::fmt::Debug,
{
    for a in values {
        assert_eq!(&m.combine(&m.neutral_element(), a), a);
        assert_eq!(&m.combine(a, &m.neutral_element()), a);
        for b in values {
            for c in values {
                assert_eq!(
                    m.combine(a, &m.combine(b, c)),
                    m.combine(&m.combine(a, b), c)
                );
            }
        }
    }
}

#[test]
fn sum() {
    let m = Sum::<i64>::new();
    assert_eq!(m.neutral_element(), 0);
    assert_eq!(m.combine(&3, &4), 7);
    check_laws(&m, &[-5, 0, 1, 7, 100]);
}

#[test]
fn min() {
    let m = Min::<i32>::new();
    assert_eq!(m.neutral_element(), i32::MAX);
    assert_eq!(m.combine(&3, &-4), -4);
    check_laws(&m, &[i32::MIN, -5, 0, 7, i32::MAX]);

    let m = Min::<f64>::new();
    assert_eq!(m.neutral_element(), f64::INFINITY);
    assert_eq!(m.combine(&1.5, &f64::INFINITY), 1.5);
}

#[test]
fn max() {
    let m = Max::<u8>::new();
    assert_eq!(m.neutral_element(), 0);
    assert_eq!(m.combine(&3, &4), 4);
    check_laws(&m, &[0, 1, 128, 255]);

    let m = Max::<f32>::new();
    assert_eq!(m.neutral_element(), f32::NEG_INFINITY);
    assert_eq!(m.combine(&f32::NEG_INFINITY, &-1e30), -1e30);
}

#[test]
fn fn_monoid_keeps_operand_order() {
    let concat = FnMonoid::new(String::new, |a: &String, b: &String| format!("{}{}", a, b));
    assert_eq!(concat.combine(&"ab".to_string(), &"cd".to_string()), "abcd");
    check_laws(
        &concat,
        &["".to_string(), "x".to_string(), "yz".to_string()],
    );
}

#[test]
fn debug_names() {
    assert_eq!(format!("{:?}", Sum::<i32>::new()), "Sum");
    assert_eq!(format!("{:?}", Min::<i32>::default()), "Min");
    assert_eq!(format!("{:?}", Max::<i32>::default()), "Max");
}
