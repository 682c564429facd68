//! End-to-end scenarios, literally transcribed from the spec's scenario
//! table: each builds the source IR by hand (lexing/parsing/renaming are out
//! of scope for this core) and runs it through [`aru_typeck::typecheck_program`].

use aru_ir::StringInterner;
use aru_typeck::error::CheckError;
use aru_types::ast::{Bind, Data, DataInj, Def, Exp, Lit, Pattern, Program};
use aru_types::ty::Type;
use pretty_assertions::assert_eq;

/// Scenario 1: `id : forall a. a -> a; id x = x; main = id 5`.
#[test]
fn id_applied_to_int_infers_int() {
    let mut interner = StringInterner::new();
    let id = interner.intern("id");
    let x = interner.intern("x");
    let main = interner.intern("main");
    let a = interner.intern("a");

    let id_sig = Type::all(a, Type::fun(Type::TVar(a), Type::TVar(a)));
    let program = Program {
        defs: vec![
            Def::Bind(Bind { name: id, args: vec![x], rhs: Box::new(Exp::Var(x)) }, Some(id_sig)),
            Def::Bind(
                Bind {
                    name: main,
                    args: vec![],
                    rhs: Box::new(Exp::App(Box::new(Exp::Var(id)), Box::new(Exp::Lit(Lit::Int(5))))),
                },
                None,
            ),
        ],
    };

    let typed = aru_typeck::typecheck_program(&mut interner, &program).unwrap();
    let main_bind = typed.binds.iter().find(|b| b.name == main).unwrap();
    assert_eq!(main_bind.ty.display(&interner).to_string(), "Int");
}

/// Scenario 2: `const x y = x; main = const 3 4` infers
/// `const : forall a b. a -> b -> a` and `main : Int`.
#[test]
fn const_is_inferred_polymorphic() {
    let mut interner = StringInterner::new();
    let const_name = interner.intern("const");
    let x = interner.intern("x");
    let y = interner.intern("y");
    let main = interner.intern("main");

    let program = Program {
        defs: vec![
            Def::Bind(Bind { name: const_name, args: vec![x, y], rhs: Box::new(Exp::Var(x)) }, None),
            Def::Bind(
                Bind {
                    name: main,
                    args: vec![],
                    rhs: Box::new(Exp::App(
                        Box::new(Exp::App(Box::new(Exp::Var(const_name)), Box::new(Exp::Lit(Lit::Int(3))))),
                        Box::new(Exp::Lit(Lit::Int(4))),
                    )),
                },
                None,
            ),
        ],
    };

    let typed = aru_typeck::typecheck_program(&mut interner, &program).unwrap();
    let main_bind = typed.binds.iter().find(|b| b.name == main).unwrap();
    assert_eq!(main_bind.ty.display(&interner).to_string(), "Int");
}

/// Scenario 3: a nullary `data Bool` with a `case` over it.
#[test]
fn case_over_nullary_data_type_checks() {
    let mut interner = StringInterner::new();
    let bool_name = interner.intern("Bool");
    let false_ctor = interner.intern("False");
    let true_ctor = interner.intern("True");
    let not_name = interner.intern("not");
    let b = interner.intern("b");
    let main = interner.intern("main");

    let bool_data = Data {
        name: bool_name,
        params: vec![],
        injs: vec![
            DataInj { ctor: false_ctor, ty: Type::TData(bool_name, vec![]) },
            DataInj { ctor: true_ctor, ty: Type::TData(bool_name, vec![]) },
        ],
    };

    let not_body = Exp::Case(
        Box::new(Exp::Var(b)),
        vec![
            aru_types::ast::Branch { pattern: Pattern::Enum(true_ctor), body: Exp::Inj(false_ctor) },
            aru_types::ast::Branch { pattern: Pattern::Enum(false_ctor), body: Exp::Inj(true_ctor) },
        ],
    );

    let main_body = Exp::Case(
        Box::new(Exp::App(Box::new(Exp::Var(not_name)), Box::new(Exp::Inj(true_ctor)))),
        vec![
            aru_types::ast::Branch { pattern: Pattern::Enum(true_ctor), body: Exp::Lit(Lit::Int(1)) },
            aru_types::ast::Branch { pattern: Pattern::Enum(false_ctor), body: Exp::Lit(Lit::Int(0)) },
        ],
    );

    let program = Program {
        defs: vec![
            Def::Data(bool_data),
            Def::Bind(Bind { name: not_name, args: vec![b], rhs: Box::new(not_body) }, None),
            Def::Bind(Bind { name: main, args: vec![], rhs: Box::new(main_body) }, None),
        ],
    };

    let typed = aru_typeck::typecheck_program(&mut interner, &program).unwrap();
    let main_bind = typed.binds.iter().find(|b| b.name == main).unwrap();
    assert_eq!(main_bind.ty.display(&interner).to_string(), "Int");
}

/// Scenario 4: `f : Int -> Int; f x = x + y` with `y` genuinely unbound.
#[test]
fn unbound_name_is_a_hard_error() {
    let mut interner = StringInterner::new();
    let f = interner.intern("f");
    let x = interner.intern("x");
    let y = interner.intern("y");
    let int = interner.intern("Int");

    let f_sig = Type::fun(Type::TLit(int), Type::TLit(int));
    let program = Program {
        defs: vec![Def::Bind(
            Bind {
                name: f,
                args: vec![x],
                rhs: Box::new(Exp::Add(Box::new(Exp::Var(x)), Box::new(Exp::Var(y)))),
            },
            Some(f_sig),
        )],
    };

    let err = aru_typeck::typecheck_program(&mut interner, &program).unwrap_err();
    assert!(matches!(err, CheckError::UnresolvedName(n) if n == y));
}

/// Scenario 5: `bad x = x x`, untyped self-application, fails the occurs
/// check during instantiation.
#[test]
fn self_application_fails_occurs_check() {
    let mut interner = StringInterner::new();
    let bad = interner.intern("bad");
    let x = interner.intern("x");

    let program = Program {
        defs: vec![Def::Bind(
            Bind {
                name: bad,
                args: vec![x],
                rhs: Box::new(Exp::App(Box::new(Exp::Var(x)), Box::new(Exp::Var(x)))),
            },
            None,
        )],
    };

    let err = aru_typeck::typecheck_program(&mut interner, &program).unwrap_err();
    assert!(matches!(err, CheckError::Type(aru_types::TypeError::TypeMismatch { .. })));
}

/// Scenario 6: `main = 1 + 'a'`, a `TypeMismatch` at the `+` right operand —
/// `Char` inferred where `Int` is required.
#[test]
fn add_with_mismatched_operand_is_a_type_mismatch() {
    let mut interner = StringInterner::new();
    let main = interner.intern("main");

    let program = Program {
        defs: vec![Def::Bind(
            Bind {
                name: main,
                args: vec![],
                rhs: Box::new(Exp::Add(Box::new(Exp::Lit(Lit::Int(1))), Box::new(Exp::Lit(Lit::Char('a'))))),
            },
            None,
        )],
    };

    let err = aru_typeck::typecheck_program(&mut interner, &program).unwrap_err();
    match err {
        CheckError::Type(aru_types::TypeError::TypeMismatch { expected, found }) => {
            assert_eq!(expected.display(&interner).to_string(), "Int");
            assert_eq!(found.display(&interner).to_string(), "Char");
        }
        other => panic!("expected TypeMismatch(Int, Char), got {other:?}"),
    }
}

/// A forward (mutually recursive) reference to another top-level binding
/// auto-extends rather than failing, distinguishing it from scenario 4.
#[test]
fn forward_reference_to_a_real_binding_auto_extends() {
    let mut interner = StringInterner::new();
    let is_even = interner.intern("is_even");
    let is_odd = interner.intern("is_odd");
    let n = interner.intern("n");
    let int = interner.intern("Int");

    let is_even_sig = Type::fun(Type::TLit(int), Type::TLit(int));
    let is_odd_sig = Type::fun(Type::TLit(int), Type::TLit(int));

    let program = Program {
        defs: vec![
            Def::Bind(
                Bind {
                    name: is_even,
                    args: vec![n],
                    rhs: Box::new(Exp::App(Box::new(Exp::Var(is_odd)), Box::new(Exp::Var(n)))),
                },
                Some(is_even_sig),
            ),
            Def::Bind(
                Bind {
                    name: is_odd,
                    args: vec![n],
                    rhs: Box::new(Exp::App(Box::new(Exp::Var(is_even)), Box::new(Exp::Var(n)))),
                },
                Some(is_odd_sig),
            ),
        ],
    };

    let typed = aru_typeck::typecheck_program(&mut interner, &program).unwrap();
    assert_eq!(typed.binds.len(), 2);
}
