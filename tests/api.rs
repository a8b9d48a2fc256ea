use expect_test::expect;
use tallyfrac::math::operation::{Operation, Relation};
use tallyfrac::math::value::Value;
use tallyfrac::{compute_e, compute_pi, Bag, Error, Part, Rational};

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

#[test]
fn bag_session() {
    let mut b: Bag<&str> = vec!["d", "a", "d", "b", "c", "b", "d"].into();
    expect![[r#"Bag(["d", "d", "d", "a", "b", "b", "c"])"#]].assert_eq(&format!("{b:?}"));
    expect![[r#"Bag(d[3], a[1], b[2], c[1])"#]].assert_eq(&b.to_string());

    b.add("x");
    b.remove(&"d").unwrap();
    b.remove(&"c").unwrap();
    assert_eq!(b.len(), 6);
    assert_eq!(b.unique(), 4);
    assert_eq!(b.remove(&"c"), Err(Error::AbsentElement("c".to_owned())));
    expect![[r#"Bag(d[2], a[1], b[2], x[1])"#]].assert_eq(&b.to_string());

    let doubled = &b + &b;
    assert_eq!(doubled.len(), 12);
    assert_eq!(doubled.count(&"d"), 4);
    assert_eq!(b.len(), 6);
}

#[test]
fn bag_add_then_remove_restores() {
    let mut b: Bag<i32> = vec![1, 2, 2, 3].into();
    for v in [1, 2, 3, 4] {
        let before = b.count(&v);
        b.add(v);
        b.remove(&v).unwrap();
        assert_eq!(b.count(&v), before);
    }
    assert!(b.remove(&9).is_err());
}

#[test]
fn bag_iteration_is_isolated() {
    let mut b: Bag<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
    let mut seen = Vec::new();
    for value in &b.clone() {
        seen.push(value);
    }
    let mut it = b.iter();
    let mut during = vec![it.next().unwrap()];
    b.add("z".to_owned());
    b.remove("a").unwrap();
    during.extend(it);
    during.sort();
    seen.sort();
    assert_eq!(during, seen);
    assert_eq!(during, vec!["a", "a", "b"]);
}

#[test]
fn bag_equality_quirk() {
    // known quirk: counts are not paired with their values when comparing
    let left: Bag<char> = "abb".chars().collect();
    let right: Bag<char> = "aab".chars().collect();
    assert!(left == right);
    assert_eq!(Value::Bag(Bag::new()).compare(Relation::Eq, &Value::from(0i64)), Ok(false));
}

#[test]
fn rational_session() {
    let x = rat(8, 29);
    expect![["16/29"]].assert_eq(&(&x + &x).to_string());
    expect![["Rational(16,29)"]].assert_eq(&format!("{:?}", 2i64 * x.clone()));
    expect![["0.275862068965517241379310344827"]].assert_eq(&x.decimal(30));

    assert_eq!(rat(1, 3).decimal(5), "0.33333");
    assert_eq!(rat(-7, 2).decimal(0), "-4");
    assert_eq!(rat(2, 4), rat(1, 2));
    assert_eq!(rat(0, 5), rat(0, 1));
    assert_eq!(rat(1, 3) + rat(1, 6), rat(1, 2));
    assert_eq!(rat(2, 1).pow(-2), Ok(rat(1, 4)));
    assert_eq!(rat(0, 1).pow(0), Ok(rat(1, 1)));
    assert_eq!(x[Part::Denominator], 29.into());
    assert_eq!(x.get("NuM".parse().unwrap()), &8.into());
}

#[test]
fn rational_rejects_text_everywhere() {
    let half = Value::Rational(rat(1, 2));
    let text = Value::from("x");
    for op in [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div, Operation::Pow] {
        assert!(half.apply(op, &text).is_err(), "{}", op.char());
    }
    for rel in [Relation::Eq, Relation::Ne, Relation::Lt, Relation::Le, Relation::Gt, Relation::Ge] {
        assert_eq!(
            half.compare(rel, &text),
            Err(Error::Unorderable { op: rel.char(), right: "str" })
        );
    }
}

#[test]
fn series_values() {
    expect![["2.7182818284"]].assert_eq(&compute_e(15).decimal(10));
    expect![["3.1415926535"]].assert_eq(&compute_pi(20).decimal(10));
}
