mod common;

use bumpalo::Bump;
use common::{messages, span};
use expect_test::expect;
use gotc_checker::{BinOp, TyChecker};
use gotc_config::{NormalizedCheckerOptions, RawCheckerOptions};
use gotc_ty::TyArena;

fn fold(lhs: &str, op: &str, rhs: &str) -> (String, Vec<String>) {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let lhs = tys.untyped_number(lhs).unwrap();
    let rhs = tys.untyped_number(rhs).unwrap();
    let op = BinOp::from_token(op).unwrap();
    let result = checker.check_bin_op(lhs, rhs, op, span());
    (tys.print_ty(result), messages(&mut checker))
}

#[test]
fn untyped_constants_fold() {
    let folded = [
        fold("3", "+", "4"),
        fold("3", "-", "10"),
        fold("6", "*", "7"),
        fold("7", "/", "2"),
        fold("-7", "/", "2"),
        fold("7.0", "/", "2"),
        fold("7.0", "+", "0"),
        fold("0.5", "*", "3"),
        fold("5", "%", "3"),
        fold("2.0", "%", "2"),
        fold("0xff", "&", "0x0f"),
        fold("0b1010", "|", "0b0101"),
        fold("6", "^", "3"),
        fold("6", "&^", "3"),
        fold("1", "<<", "10"),
        fold("-8", ">>", "1"),
        fold("5", ">>", "300"),
    ];
    let folded: Vec<_> = folded
        .into_iter()
        .map(|(ty, diags)| {
            assert!(diags.is_empty(), "{diags:?}");
            ty
        })
        .collect();
    expect![[r#"
        [
            "untyped number 7",
            "untyped number -7",
            "untyped number 42",
            "untyped number 3",
            "untyped number -3",
            "untyped number 3.5",
            "untyped number 7.0",
            "untyped number 1.5",
            "untyped number 2",
            "untyped number 0",
            "untyped number 15",
            "untyped number 15",
            "untyped number 5",
            "untyped number 4",
            "untyped number 1024",
            "untyped number -4",
            "untyped number 0",
        ]
    "#]]
    .assert_debug_eq(&folded);
}

#[test]
fn folding_errors() {
    let failed = [
        fold("1", "/", "0"),
        fold("1.5", "/", "0"),
        fold("4", "%", "0"),
        fold("1", "<<", "200"),
        fold("1", "<<", "-1"),
        fold("1", ">>", "0.5"),
        fold("170141183460469231731687303715884105727", "+", "1"),
        fold("1e308", "*", "10"),
    ];
    expect![[r#"
        [
            (
                "unknown",
                [
                    "Division by zero.",
                ],
            ),
            (
                "unknown",
                [
                    "Division by zero.",
                ],
            ),
            (
                "unknown",
                [
                    "Division by zero.",
                ],
            ),
            (
                "unknown",
                [
                    "Constant '1 << 200' overflows.",
                ],
            ),
            (
                "unknown",
                [
                    "Invalid shift count '-1'.",
                ],
            ),
            (
                "unknown",
                [
                    "Invalid shift count '0.5'.",
                ],
            ),
            (
                "unknown",
                [
                    "Constant '170141183460469231731687303715884105727 + 1' overflows.",
                ],
            ),
            (
                "unknown",
                [
                    "Constant '1e308 * 10' overflows.",
                ],
            ),
        ]
    "#]]
    .assert_debug_eq(&failed);
}

#[test]
fn non_integral_constants_fall_through_to_typed_rules() {
    let failed = [fold("2.5", "%", "2"), fold("1", "&", "0.5"), fold("2.5", "<<", "1")];
    expect![[r#"
        [
            (
                "unknown",
                [
                    "Operator '%' cannot be used on type 'untyped number 2.5'.",
                ],
            ),
            (
                "unknown",
                [
                    "Operator '&' cannot be used on type 'untyped number 1'.",
                ],
            ),
            (
                "unknown",
                [
                    "Operator '<<' cannot be used on types 'untyped number 2.5' and 'untyped number 1'.",
                ],
            ),
        ]
    "#]]
    .assert_debug_eq(&failed);
}

#[test]
fn typed_operands() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let i32_ty = tys.int_ty(32).unwrap();
    let u8_ty = tys.uint_ty(8).unwrap();
    let f64_ty = tys.flt_ty(64).unwrap();
    let celsius = tys.named("Celsius", f64_ty).unwrap();
    let one = tys.untyped_number("1").unwrap();

    assert_eq!(checker.check_bin_op(i32_ty, i32_ty, BinOp::Add, span()), i32_ty);
    assert_eq!(checker.check_bin_op(i32_ty, one, BinOp::Sub, span()), i32_ty);
    assert_eq!(checker.check_bin_op(f64_ty, f64_ty, BinOp::Div, span()), f64_ty);
    assert_eq!(checker.check_bin_op(u8_ty, u8_ty, BinOp::BitXor, span()), u8_ty);
    assert_eq!(checker.check_bin_op(u8_ty, one, BinOp::BitClear, span()), u8_ty);
    assert_eq!(
        checker.check_bin_op(tys.string_ty(), tys.string_ty(), BinOp::Add, span()),
        tys.string_ty()
    );
    let half = tys.untyped_number("0.5").unwrap();
    assert_eq!(checker.check_bin_op(celsius, half, BinOp::Add, span()), celsius);
    assert!(checker.diags.is_empty());
}

#[test]
fn typed_operator_misuse() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let f64_ty = tys.flt_ty(64).unwrap();
    let s = tys.string_ty();
    let b = tys.bool_ty();

    assert_eq!(checker.check_bin_op(s, s, BinOp::Sub, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(b, b, BinOp::Add, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(f64_ty, f64_ty, BinOp::Rem, span()), tys.unknown_ty());
    let p = tys.pointer_ty(f64_ty);
    assert_eq!(checker.check_bin_op(p, p, BinOp::BitOr, span()), tys.unknown_ty());
    expect![[r#"
        [
            "Operator '-' cannot be used on type 'string'.",
            "Operator '+' cannot be used on type 'bool'.",
            "Operator '%' cannot be used on type 'float64'.",
            "Operator '|' cannot be used on type '*float64'.",
        ]
    "#]]
    .assert_debug_eq(&messages(&mut checker));
}

#[test]
fn operands_must_be_compatible() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let i8_ty = tys.int_ty(8).unwrap();
    let i32_ty = tys.int_ty(32).unwrap();
    let i64_ty = tys.int_ty(64).unwrap();
    let f64_ty = tys.flt_ty(64).unwrap();
    let celsius = tys.named("Celsius", f64_ty).unwrap();

    let big = tys.untyped_number("300").unwrap();
    let three = tys.untyped_number("3").unwrap();
    assert_eq!(checker.check_bin_op(i32_ty, i64_ty, BinOp::Add, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(i8_ty, big, BinOp::Add, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(celsius, f64_ty, BinOp::Mul, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(three, i32_ty, BinOp::Add, span()), tys.unknown_ty());
    expect![[r#"
        [
            "Type 'int64' is incompatible with 'int32'.",
            "Left hand side ('int32') cannot be assigned right hand side ('int64').",
            "Untyped number (300) overflows 'int8'.",
            "Left hand side ('int8') cannot be assigned right hand side ('untyped number 300').",
            "Type 'float64' is incompatible with 'Celsius'.",
            "Left hand side ('Celsius') cannot be assigned right hand side ('float64').",
            "Type 'int32' is incompatible with 'untyped number 3'.",
            "Left hand side ('untyped number 3') cannot be assigned right hand side ('int32').",
        ]
    "#]]
    .assert_debug_eq(&messages(&mut checker));
}

#[test]
fn shifts() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let i32_ty = tys.int_ty(32).unwrap();
    let u32_ty = tys.uint_ty(32).unwrap();
    let two = tys.untyped_number("2").unwrap();
    let minus_one = tys.untyped_number("-1").unwrap();

    assert_eq!(checker.check_bin_op(i32_ty, u32_ty, BinOp::Shl, span()), i32_ty);
    assert_eq!(checker.check_bin_op(i32_ty, u32_ty, BinOp::Shr, span()), i32_ty);
    assert!(checker.diags.is_empty());

    assert_eq!(checker.check_bin_op(i32_ty, i32_ty, BinOp::Shl, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(u32_ty, u32_ty, BinOp::Shl, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(i32_ty, two, BinOp::Shl, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(i32_ty, minus_one, BinOp::Shr, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(two, u32_ty, BinOp::Shl, span()), tys.unknown_ty());
    expect![[r#"
        [
            "Operator '<<' cannot be used on types 'int32' and 'int32'.",
            "Operator '<<' cannot be used on types 'uint32' and 'uint32'.",
            "Operator '<<' cannot be used on types 'int32' and 'untyped number 2'.",
            "Operator '>>' cannot be used on types 'int32' and 'untyped number -1'.",
            "Operator '<<' cannot be used on types 'untyped number 2' and 'uint32'.",
        ]
    "#]]
    .assert_debug_eq(&messages(&mut checker));
}

#[test]
fn untyped_operands_convert_when_enabled() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = RawCheckerOptions::default()
        .with_untyped_operand_conversion(true)
        .normalize();
    let mut checker = TyChecker::new(&tys, &options);
    let i8_ty = tys.int_ty(8).unwrap();
    let i32_ty = tys.int_ty(32).unwrap();
    let one = tys.untyped_number("1").unwrap();
    let two = tys.untyped_number("2").unwrap();
    let minus_one = tys.untyped_number("-1").unwrap();
    let big = tys.untyped_number("300").unwrap();

    assert_eq!(checker.check_bin_op(one, i32_ty, BinOp::Mul, span()), i32_ty);
    assert_eq!(checker.check_bin_op(i32_ty, two, BinOp::Shl, span()), i32_ty);
    assert_eq!(checker.check_bin_op(i32_ty, two, BinOp::Shr, span()), i32_ty);
    assert!(checker.diags.is_empty());

    assert_eq!(checker.check_bin_op(big, i8_ty, BinOp::Add, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(i32_ty, minus_one, BinOp::Shr, span()), tys.unknown_ty());
    assert_eq!(checker.check_bin_op(two, i32_ty, BinOp::Shl, span()), tys.unknown_ty());
    expect![[r#"
        [
            "Untyped number (300) overflows 'int8'.",
            "Left hand side ('untyped number 300') cannot be assigned right hand side ('int8').",
            "Operator '>>' cannot be used on types 'int32' and 'untyped number -1'.",
            "Operator '<<' cannot be used on types 'untyped number 2' and 'int32'.",
        ]
    "#]]
    .assert_debug_eq(&messages(&mut checker));
}

#[test]
fn shifts_through_the_compatibility_gate() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = RawCheckerOptions::default()
        .with_shift_operands_exempt(false)
        .normalize();
    let mut checker = TyChecker::new(&tys, &options);
    let i32_ty = tys.int_ty(32).unwrap();
    let u32_ty = tys.uint_ty(32).unwrap();
    assert_eq!(checker.check_bin_op(i32_ty, u32_ty, BinOp::Shl, span()), tys.unknown_ty());
    expect![[r#"
        [
            "Type 'uint32' is incompatible with 'int32'.",
            "Left hand side ('int32') cannot be assigned right hand side ('uint32').",
        ]
    "#]]
    .assert_debug_eq(&messages(&mut checker));
}

#[test]
fn unknown_operands_are_absorbed() {
    let bump = Bump::new();
    let tys = TyArena::new(&bump);
    let options = NormalizedCheckerOptions::default();
    let mut checker = TyChecker::new(&tys, &options);
    let unknown = tys.unknown_ty();
    let ops = [BinOp::Add, BinOp::Rem, BinOp::Shl];
    for op in ops {
        assert_eq!(checker.check_bin_op(unknown, tys.bool_ty(), op, span()), unknown);
        assert_eq!(checker.check_bin_op(tys.string_ty(), unknown, op, span()), unknown);
    }
    assert!(checker.diags.is_empty());
}
