//! Exercises the monomorphizer against hand-built typed IR, standing in for
//! the checker's output (spec §8 scenarios 1 and 2, testable property 6).

use aru_ir::StringInterner;
use aru_mono::ir::MonoExpKind;
use aru_mono::{monomorphize_program, MonoError};
use aru_types::ast::Lit;
use aru_types::ty::Type;
use aru_types::typed::{TypedBind, TypedExp, TypedExpKind, TypedProgram};
use pretty_assertions::assert_eq;

/// Scenario 1: `id : forall a. a -> a; id x = x; main = id 5` specializes to
/// `id$Int_Int`, body `\x. x`, and `main = (id$Int_Int) 5`.
#[test]
fn id_specializes_to_id_int_int() {
    let mut interner = StringInterner::new();
    let id = interner.intern("id");
    let main = interner.intern("main");
    let x = interner.intern("x");
    let a = interner.intern("a");
    let int = interner.intern("Int");

    let id_ty = Type::all(a, Type::fun(Type::TVar(a), Type::TVar(a)));
    let id_body = TypedExp::new(TypedExpKind::Abs(x, Box::new(TypedExp::new(TypedExpKind::Var(x), Type::TVar(a)))), id_ty.clone());

    let main_ty = Type::TLit(int);
    let main_body = TypedExp::new(
        TypedExpKind::App(
            Box::new(TypedExp::new(TypedExpKind::Var(id), Type::fun(Type::TLit(int), Type::TLit(int)))),
            Box::new(TypedExp::new(TypedExpKind::Lit(Lit::Int(5)), Type::TLit(int))),
        ),
        main_ty.clone(),
    );

    let typed = TypedProgram {
        binds: vec![
            TypedBind { name: id, args: vec![x], ty: id_ty, body: Box::new(id_body) },
            TypedBind { name: main, args: vec![], ty: main_ty, body: Box::new(main_body) },
        ],
    };

    let mono = monomorphize_program(&mut interner, &typed).unwrap();

    let id_int_int = interner.intern("id$Int_Int");
    let id_bind = mono.binds.iter().find(|b| b.name == id_int_int).expect("id$Int_Int present");
    assert!(matches!(id_bind.body.kind, MonoExpKind::Abs(..)));
    assert_eq!(id_bind.ty.display(&interner).to_string(), "Int -> Int");

    let main_int = interner.intern("main$Int");
    let main_bind = mono.binds.iter().find(|b| b.name == main_int).expect("main$Int present");
    match &main_bind.body.kind {
        MonoExpKind::App(callee, arg) => {
            assert!(matches!(callee.kind, MonoExpKind::Id(n) if n == id_int_int));
            assert!(matches!(arg.kind, MonoExpKind::Lit(Lit::Int(5))));
        }
        other => panic!("expected App, got {other:?}"),
    }
}

/// Scenario 2: `const x y = x; main = const 3 4` specializes to
/// `const$Int_Int_Int` and `main = 3` reached through two applications.
#[test]
fn const_specializes_and_main_applies_twice() {
    let mut interner = StringInterner::new();
    let const_name = interner.intern("const");
    let main = interner.intern("main");
    let x = interner.intern("x");
    let y = interner.intern("y");
    let a = interner.intern("a");
    let b = interner.intern("b");
    let int = interner.intern("Int");

    let const_ty = Type::all(a, Type::all(b, Type::fun(Type::TVar(a), Type::fun(Type::TVar(b), Type::TVar(a)))));
    let const_body = TypedExp::new(
        TypedExpKind::Abs(
            x,
            Box::new(TypedExp::new(
                TypedExpKind::Abs(y, Box::new(TypedExp::new(TypedExpKind::Var(x), Type::TVar(a)))),
                Type::fun(Type::TVar(b), Type::TVar(a)),
            )),
        ),
        const_ty.clone(),
    );

    let const_applied_ty = Type::fun(Type::TLit(int), Type::fun(Type::TLit(int), Type::TLit(int)));
    let main_body = TypedExp::new(
        TypedExpKind::App(
            Box::new(TypedExp::new(
                TypedExpKind::App(
                    Box::new(TypedExp::new(TypedExpKind::Var(const_name), const_applied_ty)),
                    Box::new(TypedExp::new(TypedExpKind::Lit(Lit::Int(3)), Type::TLit(int))),
                ),
                Type::fun(Type::TLit(int), Type::TLit(int)),
            )),
            Box::new(TypedExp::new(TypedExpKind::Lit(Lit::Int(4)), Type::TLit(int))),
        ),
        Type::TLit(int),
    );

    let typed = TypedProgram {
        binds: vec![
            TypedBind { name: const_name, args: vec![x, y], ty: const_ty, body: Box::new(const_body) },
            TypedBind { name: main, args: vec![], ty: Type::TLit(int), body: Box::new(main_body) },
        ],
    };

    let mono = monomorphize_program(&mut interner, &typed).unwrap();
    let const_int_int_int = interner.intern("const$Int_Int_Int");
    assert!(mono.binds.iter().any(|b| b.name == const_int_int_int));
}

/// Property 6: no `TVar`/`TAll` survives monomorphization, and `main$Int`
/// is present.
#[test]
fn output_contains_no_polymorphism() {
    let mut interner = StringInterner::new();
    let main = interner.intern("main");
    let int = interner.intern("Int");
    let body = TypedExp::new(TypedExpKind::Lit(Lit::Int(1)), Type::TLit(int));

    let typed = TypedProgram {
        binds: vec![TypedBind { name: main, args: vec![], ty: Type::TLit(int), body: Box::new(body) }],
    };

    let mono = monomorphize_program(&mut interner, &typed).unwrap();
    for bind in &mono.binds {
        assert!(!contains_polymorphism(&bind.ty));
    }
    let main_int = interner.intern("main$Int");
    assert!(mono.binds.iter().any(|b| b.name == main_int));
}

fn contains_polymorphism(ty: &Type) -> bool {
    match ty {
        Type::TVar(_) | Type::TEVar(_) | Type::TAll(..) => true,
        Type::TLit(_) => false,
        Type::TFun(a, b) => contains_polymorphism(a) || contains_polymorphism(b),
        Type::TData(_, args) => args.iter().any(contains_polymorphism),
    }
}

#[test]
fn missing_main_is_an_error() {
    let mut interner = StringInterner::new();
    let typed = TypedProgram::default();
    let err = monomorphize_program(&mut interner, &typed).unwrap_err();
    assert!(matches!(err, MonoError::MissingMain));
}
