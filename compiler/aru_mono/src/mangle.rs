//! Name mangling (spec §4.G): `newName(T, bind) = "<bind>$<mangle(T)>"`.

use aru_ir::{Name, StringInterner};
use aru_types::ty::Type;

use crate::error::MonoError;

/// `mangle(TLit(s)) = s`, `mangle(TFun(a,b)) = mangle(a) ++ "_" ++ mangle(b)`.
///
/// `TData`/`TAll`/`TVar`/`TEVar` specialization is unsupported in this core
/// (spec §4.G); reaching one here means an earlier stage handed the
/// monomorphizer a type it never promised to support — see `DESIGN.md`.
fn mangle(ty: &Type, interner: &StringInterner) -> Result<String, MonoError> {
    match ty {
        Type::TLit(n) => Ok(interner.resolve(*n).to_string()),
        Type::TFun(a, b) => {
            let a = mangle(a, interner)?;
            let b = mangle(b, interner)?;
            Ok(format!("{a}_{b}"))
        }
        Type::TVar(_) | Type::TEVar(_) | Type::TAll(..) | Type::TData(..) => Err(MonoError::StructuralTypeMismatch),
    }
}

/// `newName(T, bind)`, interned fresh so it can be used as an ordinary
/// [`Name`] key throughout the monomorphic IR.
pub fn new_name(interner: &mut StringInterner, expected: &Type, bind: Name) -> Result<Name, MonoError> {
    let bind_str = interner.resolve(bind).to_string();
    let mangled = mangle(expected, interner)?;
    Ok(interner.intern(&format!("{bind_str}${mangled}")))
}

#[cfg(test)]
mod tests {
    use aru_ir::StringInterner;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mangles_function_type_with_underscore() {
        let mut interner = StringInterner::new();
        let int = interner.intern("Int");
        let bind = interner.intern("id");
        let ty = Type::fun(Type::TLit(int), Type::TLit(int));
        let name = new_name(&mut interner, &ty, bind).unwrap();
        assert_eq!(interner.resolve(name), "id$Int_Int");
    }

    #[test]
    fn rejects_tdata_as_unsupported() {
        let mut interner = StringInterner::new();
        let list = interner.intern("List");
        let bind = interner.intern("f");
        let ty = Type::TData(list, Vec::new());
        assert!(matches!(new_name(&mut interner, &ty, bind), Err(MonoError::StructuralTypeMismatch)));
    }
}
