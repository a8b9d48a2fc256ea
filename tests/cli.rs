use std::process::{Command, Output};

use expect_test::{expect, Expect};

fn run(args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_tallyfrac");
    let mut command = Command::new(binary_path);
    command.env("RUST_BACKTRACE", "1").env_remove("RUST_LOG").args(args);
    command.output().unwrap()
}

fn check(args: &[&str], expected: Expect) {
    let output = run(args);
    if !output.status.success() {
        panic!(
            "{args:?} failed with the following output: {}",
            String::from_utf8(output.stderr).unwrap()
        )
    }
    expected.assert_eq(&String::from_utf8(output.stdout).unwrap());
}

#[test]
fn eval_sum() {
    check(
        &["eval", "-d", "5", "1/3", "+", "1/6"],
        expect![[r#"
            1/2
            Rational(1,2)
            0.50000
        "#]],
    );
}

#[test]
fn eval_negative_power() {
    check(
        &["eval", "-d", "2", "2/1", "**", "-2"],
        expect![[r#"
            1/4
            Rational(1,4)
            0.25
        "#]],
    );
}

#[test]
fn eval_comparison() {
    check(
        &["eval", "1/3", "<", "1/2"],
        expect![[r#"
            true
        "#]],
    );
}

#[test]
fn eval_bag_union() {
    check(
        &["eval", "[a, b]", "+", "[a]"],
        expect![[r#"
            Bag(a[2], b[1])
            Bag(["a", "a", "b"])
        "#]],
    );
}

#[test]
fn eval_type_error() {
    let output = run(&["eval", "1/2", "+", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    expect![[r#"
        error: unsupported operand type(s) for +: 'Rational' and 'str'
    "#]]
    .assert_eq(&String::from_utf8(output.stderr).unwrap());
}

#[test]
fn series() {
    check(
        &["e", "-t", "3", "-d", "4"],
        expect![[r#"
            8/3
            Rational(8,3)
            2.6666
        "#]],
    );
    check(
        &["pi", "--terms", "1", "--digits", "3"],
        expect![[r#"
            25/8
            Rational(25,8)
            3.125
        "#]],
    );
}

#[test]
fn bag() {
    check(
        &["bag", "d", "a", "d", "b", "c", "b", "d"],
        expect![[r#"
            Bag(["d", "d", "d", "a", "b", "b", "c"])
            Bag(d[3], a[1], b[2], c[1])
            size: 7
            unique: 4
        "#]],
    );
}
